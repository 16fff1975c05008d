use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are assigned sequentially from zero, so a `u32` is enough to
/// address every token the registry can hold.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type. Every token is unique, so amounts are always 1.
pub type ContractTokenAmount = TokenAmountU64;

/// CIS-2 event specialized to the token ID and amount types of this contract.
pub type ContractEvent = Cis2Event<ContractTokenId, ContractTokenAmount>;
