use super::*;

#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Initial contract owner.
    pub owner: Address,
    /// Access model guarding mints, fixed for the lifetime of the instance.
    pub mint_access: MintAccess,
    /// Supply ceiling. Without one the registry is bounded by the token ID
    /// range only.
    pub max_supply: Option<u32>,
    /// Reject a second mint to an address that already received one.
    pub one_per_address: bool,
}

/// The parameter type for the contract function `mintNFT`.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Owner of the newly minted token.
    pub to: Address,
}

/// The parameter type for the contract function `mintMultiple`.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintMultipleParams {
    /// Owner of the newly minted tokens.
    pub to: Address,
    /// Number of tokens to mint.
    pub count: u32,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct IsOwnerOfParams {
    pub address: Address,
    pub token_id: ContractTokenId,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TransferTokenParams {
    pub token_id: ContractTokenId,
    pub to: Address,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct RegistryView {
    pub owner: Address,
    pub total_supply: u32,
    pub max_supply: Option<u32>,
    pub mint_access: MintAccess,
    pub one_per_address: bool,
}
