use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum ContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// The zero address was given where an owner or recipient is required
    /// (Error code: -4).
    InvalidAddress,
    /// The sender lacks the owner or minter role (Error code: -5).
    NotAuthorized,
    /// No token has been minted under the requested ID (Error code: -6).
    TokenNotExist,
    /// Minting would exceed the supply ceiling (Error code: -7).
    MaxSupplyReached,
    /// The recipient already received its one token (Error code: -8).
    AlreadyMinted,
    /// The operation is disabled by this instance's configuration
    /// (Error code: -9).
    Unsupported,
}

/// Mapping the logging errors to ContractError.
impl From<LogError> for ContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Rejects with `InvalidAddress` if `address` is the zero address.
pub fn ensure_valid_address(address: &Address) -> ContractResult<()> {
    ensure!(*address != ZERO_ADDRESS, ContractError::InvalidAddress);
    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_reject_codes_follow_declaration_order() {
        let codes: Vec<i32> = vec![
            ContractError::ParseParams,
            ContractError::LogFull,
            ContractError::LogMalformed,
            ContractError::InvalidAddress,
            ContractError::NotAuthorized,
            ContractError::TokenNotExist,
            ContractError::MaxSupplyReached,
            ContractError::AlreadyMinted,
            ContractError::Unsupported,
        ]
        .into_iter()
        .map(|error| Reject::from(error).error_code.get())
        .collect();

        claim_eq!(codes, vec![-1, -2, -3, -4, -5, -6, -7, -8, -9]);
    }

    #[concordium_test]
    fn test_log_errors_are_mapped() {
        claim_eq!(ContractError::from(LogError::Full), ContractError::LogFull);
        claim_eq!(
            ContractError::from(LogError::Malformed),
            ContractError::LogMalformed
        );
    }

    #[concordium_test]
    fn test_zero_address_is_invalid() {
        claim_eq!(
            ensure_valid_address(&ZERO_ADDRESS),
            Err(ContractError::InvalidAddress)
        );
        claim_eq!(
            ensure_valid_address(&Address::Account(AccountAddress([1; 32]))),
            Ok(())
        );
        // Only the all-zero account is reserved; contract 0 is a real address.
        claim_eq!(
            ensure_valid_address(&Address::Contract(ContractAddress {
                index: 0,
                subindex: 0,
            })),
            Ok(())
        );
    }
}
