use super::*;

/// The reserved "nobody" address. It can never own a token or the contract.
pub const ZERO_ADDRESS: Address = Address::Account(AccountAddress([0u8; 32]));

/// Tag for the Custom Ownership Transferred event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Minter Updated event.
pub const MINTER_UPDATED_TAG: u8 = u8::MAX - 6;
