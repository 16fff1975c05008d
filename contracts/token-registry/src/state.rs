use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Contract owner and minter set.
    pub access: AccessControl<S>,
    /// Owner of every minted token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Number of tokens minted so far, which is also the next token ID.
    pub total_supply: u32,
    /// Supply ceiling, if the instance has one.
    pub max_supply: Option<u32>,
    /// Whether an address may receive only a single mint.
    pub one_per_address: bool,
    /// Addresses that received a mint. Only tracked with `one_per_address`.
    pub recipients: StateSet<Address, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>, params: InitParams) -> ContractResult<Self> {
        Ok(Self {
            access: AccessControl::new(state_builder, params.owner, params.mint_access)?,
            tokens: state_builder.new_map(),
            total_supply: 0,
            max_supply: params.max_supply,
            one_per_address: params.one_per_address,
            recipients: state_builder.new_set(),
        })
    }

    fn supply_cap(&self) -> u32 {
        self.max_supply.unwrap_or(u32::MAX)
    }

    /// Checks that `count` tokens can be minted to `to` without touching the
    /// state, so a rejected batch leaves no partial writes behind.
    ///
    /// A batch fails with the error its first failing mint would give when
    /// issued one by one. Within a single mint the supply cap is checked
    /// before the one-per-address policy.
    pub fn ensure_mintable(&self, to: &Address, count: u32) -> ContractResult<()> {
        ensure_valid_address(to)?;

        let remaining = self.supply_cap().saturating_sub(self.total_supply);
        let allowance = self.recipient_allowance(to);

        ensure!(
            count <= remaining || remaining > allowance,
            ContractError::MaxSupplyReached
        );
        ensure!(count <= allowance, ContractError::AlreadyMinted);

        Ok(())
    }

    // How many more tokens `to` may receive under the one-per-address policy.
    fn recipient_allowance(&self, to: &Address) -> u32 {
        match (self.one_per_address, self.recipients.contains(to)) {
            (false, _) => u32::MAX,
            (true, false) => 1,
            (true, true) => 0,
        }
    }

    /// IDs the next `count` mints will receive, in ascending order.
    pub fn next_token_ids(&self, count: u32) -> impl Iterator<Item = ContractTokenId> {
        let next = self.total_supply;
        (next..next.saturating_add(count)).map(TokenIdU32)
    }

    /// Mints a single token to `to` and returns its ID.
    pub fn mint_one(&mut self, to: &Address) -> ContractResult<ContractTokenId> {
        self.ensure_mintable(to, 1)?;

        Ok(self.insert_token(*to))
    }

    /// Mints `count` tokens to `to` with consecutive IDs and returns them in
    /// ascending order.
    pub fn mint(&mut self, to: &Address, count: u32) -> ContractResult<Vec<ContractTokenId>> {
        self.ensure_mintable(to, count)?;

        let minted: Vec<ContractTokenId> = (0..count).map(|_| self.insert_token(*to)).collect();

        Ok(minted)
    }

    // Caller has checked the supply cap.
    fn insert_token(&mut self, owner: Address) -> ContractTokenId {
        let token_id = TokenIdU32(self.total_supply);
        self.tokens.insert(token_id, owner);
        self.total_supply += 1;

        if self.one_per_address {
            self.recipients.insert(owner);
        }

        token_id
    }

    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::TokenNotExist)
    }

    /// Never fails: unknown tokens are owned by nobody.
    pub fn is_owner_of(&self, address: &Address, token_id: &ContractTokenId) -> bool {
        self.tokens
            .get(token_id)
            .map(|owner| *owner == *address)
            .unwrap_or(false)
    }

    /// Moves a token from its current owner, who must be `sender`, to `to`.
    /// Returns the previous owner.
    pub fn transfer_token(
        &mut self,
        sender: &Address,
        token_id: ContractTokenId,
        to: Address,
    ) -> ContractResult<Address> {
        let from = self.owner_of(&token_id)?;
        ensure_eq!(from, *sender, ContractError::NotAuthorized);
        ensure_valid_address(&to)?;

        self.tokens.insert(token_id, to);

        Ok(from)
    }

    pub fn view(&self) -> RegistryView {
        RegistryView {
            owner: self.access.owner(),
            total_supply: self.total_supply,
            max_supply: self.max_supply,
            mint_access: self.access.mint_access(),
            one_per_address: self.one_per_address,
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: Address = Address::Account(AccountAddress([1; 32]));
    const USER_1: Address = Address::Account(AccountAddress([16; 32]));
    const USER_2: Address = Address::Account(AccountAddress([17; 32]));

    fn new_state(max_supply: Option<u32>, one_per_address: bool) -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        State::new(
            &mut state_builder,
            InitParams {
                owner: OWNER,
                mint_access: MintAccess::OwnerOnly,
                max_supply,
                one_per_address,
            },
        )
        .expect_report("Failed to create state")
    }

    #[concordium_test]
    fn test_mint_assigns_sequential_ids() {
        let mut state = new_state(None, false);

        claim_eq!(state.mint(&USER_1, 1), Ok(vec![TokenIdU32(0)]));
        claim_eq!(
            state.mint(&USER_2, 3),
            Ok(vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(3)])
        );
        claim_eq!(state.total_supply, 4);

        claim_eq!(state.owner_of(&TokenIdU32(0)), Ok(USER_1));
        for id in 1..4 {
            claim_eq!(state.owner_of(&TokenIdU32(id)), Ok(USER_2));
        }
        claim_eq!(
            state.owner_of(&TokenIdU32(4)),
            Err(ContractError::TokenNotExist)
        );
    }

    #[concordium_test]
    fn test_mint_zero_count_is_noop() {
        let mut state = new_state(Some(0), true);

        claim_eq!(state.mint(&USER_1, 0), Ok(vec![]));
        claim_eq!(state.total_supply, 0);
        claim!(!state.recipients.contains(&USER_1));
    }

    #[concordium_test]
    fn test_mint_rejects_zero_address() {
        let mut state = new_state(None, false);

        claim_eq!(
            state.mint(&ZERO_ADDRESS, 1),
            Err(ContractError::InvalidAddress)
        );
        claim_eq!(state.total_supply, 0);
    }

    #[concordium_test]
    fn test_mint_respects_supply_cap() {
        let mut state = new_state(Some(3), false);

        claim_eq!(
            state.mint(&USER_1, 4),
            Err(ContractError::MaxSupplyReached)
        );
        claim_eq!(state.total_supply, 0);
        claim_eq!(
            state.owner_of(&TokenIdU32(0)),
            Err(ContractError::TokenNotExist)
        );

        claim!(state.mint(&USER_1, 3).is_ok());
        claim_eq!(
            state.mint(&USER_1, 1),
            Err(ContractError::MaxSupplyReached)
        );
        claim_eq!(state.total_supply, 3);
    }

    #[concordium_test]
    fn test_supply_without_cap_ends_at_id_range() {
        let mut state = new_state(None, false);
        state.total_supply = u32::MAX - 1;

        claim_eq!(
            state.mint(&USER_1, 2),
            Err(ContractError::MaxSupplyReached)
        );
        claim_eq!(state.mint(&USER_1, 1), Ok(vec![TokenIdU32(u32::MAX - 1)]));
        claim_eq!(
            state.mint(&USER_1, 1),
            Err(ContractError::MaxSupplyReached)
        );
    }

    #[concordium_test]
    fn test_one_per_address() {
        let mut state = new_state(None, true);

        claim_eq!(
            state.mint(&USER_1, 2),
            Err(ContractError::AlreadyMinted)
        );
        claim_eq!(state.mint(&USER_1, 1), Ok(vec![TokenIdU32(0)]));
        claim_eq!(
            state.mint(&USER_1, 1),
            Err(ContractError::AlreadyMinted)
        );
        claim_eq!(state.mint(&USER_2, 1), Ok(vec![TokenIdU32(1)]));
        claim_eq!(state.total_supply, 2);
    }

    #[concordium_test]
    fn test_one_per_address_survives_transfer() {
        let mut state = new_state(None, true);
        claim_eq!(state.mint_one(&USER_1), Ok(TokenIdU32(0)));

        claim_eq!(
            state.transfer_token(&USER_1, TokenIdU32(0), USER_2),
            Ok(USER_1)
        );

        // USER_1 holds nothing now but was minted to before
        claim!(!state.is_owner_of(&USER_1, &TokenIdU32(0)));
        claim_eq!(state.mint_one(&USER_1), Err(ContractError::AlreadyMinted));

        // Receiving by transfer does not count as a mint
        claim_eq!(state.mint_one(&USER_2), Ok(TokenIdU32(1)));
        claim_eq!(state.total_supply, 2);
    }

    #[concordium_test]
    fn test_batch_error_follows_first_failing_mint() {
        // The second mint breaks the policy long before the cap
        let mut state = new_state(Some(10), true);
        claim_eq!(
            state.mint(&USER_1, 20),
            Err(ContractError::AlreadyMinted)
        );

        // The first mint already hits the cap
        let mut state = new_state(Some(0), true);
        claim_eq!(
            state.mint(&USER_1, 2),
            Err(ContractError::MaxSupplyReached)
        );

        // Both rules stop the second mint, the cap is checked first
        let mut state = new_state(Some(1), true);
        claim_eq!(
            state.mint(&USER_1, 2),
            Err(ContractError::MaxSupplyReached)
        );

        // A past recipient fails on its first mint, before the cap is reached
        let mut state = new_state(Some(3), true);
        claim!(state.mint_one(&USER_1).is_ok());
        claim_eq!(
            state.mint(&USER_1, 5),
            Err(ContractError::AlreadyMinted)
        );
        claim_eq!(state.total_supply, 1);
    }

    #[concordium_test]
    fn test_next_token_ids() {
        let mut state = new_state(None, false);
        claim_eq!(state.next_token_ids(0).count(), 0);
        let ids: Vec<ContractTokenId> = state.next_token_ids(2).collect();
        claim_eq!(ids, vec![TokenIdU32(0), TokenIdU32(1)]);

        claim!(state.mint(&USER_1, 2).is_ok());
        let ids: Vec<ContractTokenId> = state.next_token_ids(1).collect();
        claim_eq!(ids, vec![TokenIdU32(2)]);
        // Nothing is reserved by asking
        claim_eq!(state.total_supply, 2);
    }

    #[concordium_test]
    fn test_is_owner_of() {
        let mut state = new_state(None, false);
        claim!(!state.is_owner_of(&USER_1, &TokenIdU32(0)));

        claim!(state.mint(&USER_1, 1).is_ok());
        claim!(state.is_owner_of(&USER_1, &TokenIdU32(0)));
        claim!(!state.is_owner_of(&USER_2, &TokenIdU32(0)));
        claim!(!state.is_owner_of(&USER_1, &TokenIdU32(1)));
    }

    #[concordium_test]
    fn test_transfer_token() {
        let mut state = new_state(None, false);
        claim!(state.mint(&USER_1, 1).is_ok());

        claim_eq!(
            state.transfer_token(&USER_2, TokenIdU32(0), USER_2),
            Err(ContractError::NotAuthorized)
        );
        claim_eq!(
            state.transfer_token(&USER_1, TokenIdU32(0), ZERO_ADDRESS),
            Err(ContractError::InvalidAddress)
        );
        claim_eq!(
            state.transfer_token(&USER_1, TokenIdU32(1), USER_2),
            Err(ContractError::TokenNotExist)
        );
        claim_eq!(state.owner_of(&TokenIdU32(0)), Ok(USER_1));

        claim_eq!(
            state.transfer_token(&USER_1, TokenIdU32(0), USER_2),
            Ok(USER_1)
        );
        claim_eq!(state.owner_of(&TokenIdU32(0)), Ok(USER_2));
        claim_eq!(state.total_supply, 1);
    }
}
