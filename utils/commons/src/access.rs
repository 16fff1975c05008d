use crate::{ensure_valid_address, ContractError, ContractResult};
use concordium_std::*;

#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct AccessControl<S: HasStateApi> {
    /// The contract owner, the only address allowed to administer the contract
    owner: Address,
    /// The single access model guarding mints on this instance
    mint_access: MintAccess,
    /// Addresses the owner has authorized to mint
    minters: StateSet<Address, S>,
}

impl<S: HasStateApi> AccessControl<S> {
    /// Rejects with `InvalidAddress` if `owner` is the zero address.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        owner: Address,
        mint_access: MintAccess,
    ) -> ContractResult<Self> {
        ensure_valid_address(&owner)?;

        Ok(Self {
            owner,
            mint_access,
            minters: state_builder.new_set(),
        })
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn mint_access(&self) -> MintAccess {
        self.mint_access
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner == *address
    }

    pub fn is_minter(&self, address: &Address) -> bool {
        self.minters.contains(address)
    }

    /// Whether `address` may mint under the configured access model.
    pub fn can_mint(&self, address: &Address) -> bool {
        match self.mint_access {
            MintAccess::OwnerOnly => self.is_owner(address),
            MintAccess::Minters => self.is_minter(address),
        }
    }

    /// Hands the contract over to `new_owner` and returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        sender: &Address,
        new_owner: Address,
    ) -> ContractResult<Address> {
        ensure!(self.is_owner(sender), ContractError::NotAuthorized);
        ensure_valid_address(&new_owner)?;

        Ok(core::mem::replace(&mut self.owner, new_owner))
    }

    /// Authorizing a minter twice or revoking a non-minter is a no-op.
    pub fn handle_minter_update(
        &mut self,
        sender: &Address,
        update: MinterUpdateParams,
    ) -> ContractResult<()> {
        ensure!(self.is_owner(sender), ContractError::NotAuthorized);
        ensure_eq!(
            self.mint_access,
            MintAccess::Minters,
            ContractError::Unsupported
        );

        match update.kind {
            MinterUpdateKind::Revoke => {
                self.minters.remove(&update.address);
            }
            MinterUpdateKind::Authorize => {
                self.minters.insert(update.address);
            }
        }

        Ok(())
    }
}

/// Who is allowed to mint on an instance. Fixed at initialization.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub enum MintAccess {
    /// Only the contract owner mints.
    OwnerOnly,
    /// Only addresses in the minter set mint, the owner included only if it
    /// authorized itself.
    Minters,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub enum MinterUpdateKind {
    Revoke,
    Authorize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub struct MinterUpdateParams {
    pub kind: MinterUpdateKind,
    pub address: Address,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use crate::ZERO_ADDRESS;
    use concordium_std::test_infrastructure::*;

    const OWNER_ACCOUNT: AccountAddress = AccountAddress([1; 32]);
    const OWNER: Address = Address::Account(OWNER_ACCOUNT);

    const USER_1: Address = Address::Account(AccountAddress([16; 32]));
    const USER_2: Address = Address::Account(AccountAddress([17; 32]));
    const CONTRACT_1: Address = Address::Contract(ContractAddress {
        index: 16,
        subindex: 16,
    });

    fn access_control(mint_access: MintAccess) -> AccessControl<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        AccessControl::new(&mut state_builder, OWNER, mint_access)
            .expect_report("Failed to create access control")
    }

    fn authorize(address: Address) -> MinterUpdateParams {
        MinterUpdateParams {
            kind: MinterUpdateKind::Authorize,
            address,
        }
    }

    fn revoke(address: Address) -> MinterUpdateParams {
        MinterUpdateParams {
            kind: MinterUpdateKind::Revoke,
            address,
        }
    }

    #[concordium_test]
    fn test_new_rejects_zero_owner() {
        let mut state_builder = TestStateBuilder::new();

        let result = AccessControl::new(&mut state_builder, ZERO_ADDRESS, MintAccess::OwnerOnly);

        claim_eq!(result.err(), Some(ContractError::InvalidAddress));
    }

    #[concordium_test]
    fn test_owner_only_mint_rights() {
        let access = access_control(MintAccess::OwnerOnly);

        claim!(access.can_mint(&OWNER));
        claim!(!access.can_mint(&USER_1));
        claim!(!access.can_mint(&CONTRACT_1));
    }

    #[concordium_test]
    fn test_minters_mint_rights() {
        let mut access = access_control(MintAccess::Minters);

        // The owner has to authorize itself like anybody else
        claim!(!access.can_mint(&OWNER));

        claim_eq!(access.handle_minter_update(&OWNER, authorize(USER_1)), Ok(()));
        claim_eq!(
            access.handle_minter_update(&OWNER, authorize(CONTRACT_1)),
            Ok(())
        );
        claim!(access.can_mint(&USER_1));
        claim!(access.can_mint(&CONTRACT_1));
        claim!(!access.can_mint(&USER_2));

        claim_eq!(access.handle_minter_update(&OWNER, revoke(USER_1)), Ok(()));
        claim!(!access.can_mint(&USER_1));
        claim!(access.can_mint(&CONTRACT_1));
    }

    #[concordium_test]
    fn test_minter_update_is_idempotent() {
        let mut access = access_control(MintAccess::Minters);

        claim_eq!(access.handle_minter_update(&OWNER, authorize(USER_1)), Ok(()));
        // No change or error expected
        claim_eq!(access.handle_minter_update(&OWNER, authorize(USER_1)), Ok(()));
        claim!(access.is_minter(&USER_1));

        claim_eq!(access.handle_minter_update(&OWNER, revoke(USER_1)), Ok(()));
        // No change or error expected
        claim_eq!(access.handle_minter_update(&OWNER, revoke(USER_1)), Ok(()));
        claim!(!access.is_minter(&USER_1));

        // Revoking an address that was never authorized
        claim_eq!(access.handle_minter_update(&OWNER, revoke(USER_2)), Ok(()));
        claim!(!access.is_minter(&USER_2));
    }

    #[concordium_test]
    fn test_minter_update_requires_owner() {
        let mut access = access_control(MintAccess::Minters);
        claim_eq!(access.handle_minter_update(&OWNER, authorize(USER_1)), Ok(()));

        // A minter cannot administer the minter set
        claim_eq!(
            access.handle_minter_update(&USER_1, authorize(USER_2)),
            Err(ContractError::NotAuthorized)
        );
        claim!(!access.is_minter(&USER_2));

        claim_eq!(
            access.handle_minter_update(&USER_2, revoke(USER_1)),
            Err(ContractError::NotAuthorized)
        );
        claim!(access.is_minter(&USER_1));
    }

    #[concordium_test]
    fn test_minter_update_unsupported_for_owner_only() {
        let mut access = access_control(MintAccess::OwnerOnly);

        claim_eq!(
            access.handle_minter_update(&OWNER, authorize(USER_1)),
            Err(ContractError::Unsupported)
        );
        claim!(!access.is_minter(&USER_1));

        // The owner check comes first
        claim_eq!(
            access.handle_minter_update(&USER_1, authorize(USER_1)),
            Err(ContractError::NotAuthorized)
        );
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut access = access_control(MintAccess::OwnerOnly);

        claim_eq!(access.transfer_ownership(&OWNER, USER_1), Ok(OWNER));
        claim_eq!(access.owner(), USER_1);
        claim!(access.can_mint(&USER_1));
        claim!(!access.can_mint(&OWNER));

        // The previous owner lost its rights
        claim_eq!(
            access.transfer_ownership(&OWNER, USER_2),
            Err(ContractError::NotAuthorized)
        );
        claim_eq!(access.owner(), USER_1);
    }

    #[concordium_test]
    fn test_transfer_ownership_rejects_zero_address() {
        let mut access = access_control(MintAccess::OwnerOnly);

        claim_eq!(
            access.transfer_ownership(&OWNER, ZERO_ADDRESS),
            Err(ContractError::InvalidAddress)
        );
        claim_eq!(access.owner(), OWNER);
    }

    #[concordium_test]
    fn test_transfer_ownership_requires_owner() {
        let mut access = access_control(MintAccess::Minters);

        claim_eq!(
            access.transfer_ownership(&USER_1, USER_1),
            Err(ContractError::NotAuthorized)
        );
        claim_eq!(access.owner(), OWNER);
    }
}
