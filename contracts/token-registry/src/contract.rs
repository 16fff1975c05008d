use super::*;

/// Initialize the registry with no tokens.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The initial owner is the zero address.
#[init(contract = "TokenRegistry", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Construct the initial contract state.
    let state = State::new(state_builder, params)?;

    Ok(state)
}

/// Mint the next token to the given address.
/// Logs a `Transfer` event from the zero address.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not allowed to mint under the instance's access model.
/// - The recipient is the zero address.
/// - The supply cap is reached.
/// - The recipient already received a token and `one_per_address` is set.
/// - Fails to log `Transfer` event.
#[receive(
    contract = "TokenRegistry",
    name = "mintNFT",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    enable_logger,
    mutable
)]
fn mint_nft<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params: MintParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(
        state.access.can_mint(&ctx.sender()),
        ContractError::NotAuthorized
    );

    let token_id = state.mint_one(&params.to)?;

    // Event for minted NFT.
    logger.log(&transfer_event(token_id, ZERO_ADDRESS, params.to))?;

    Ok(token_id)
}

/// Mint `count` consecutive tokens to the given address in a single call.
/// Logs one `Transfer` event per token in ascending token ID order.
///
/// The whole batch is validated and its events are logged before anything is
/// written, so either all tokens are minted or none. A batch is limited by the
/// number of events a single call may log.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not allowed to mint under the instance's access model.
/// - The recipient is the zero address.
/// - The first mint of the batch that would break a rule, checked in order,
///   hits the supply cap (`MaxSupplyReached`) or the one-per-address policy
///   (`AlreadyMinted`).
/// - Fails to log `Transfer` event, e.g. the batch exceeds the event log.
#[receive(
    contract = "TokenRegistry",
    name = "mintMultiple",
    parameter = "MintMultipleParams",
    return_value = "Vec<ContractTokenId>",
    enable_logger,
    mutable
)]
fn mint_multiple<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<Vec<ContractTokenId>> {
    let params: MintMultipleParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(
        state.access.can_mint(&ctx.sender()),
        ContractError::NotAuthorized
    );

    state.ensure_mintable(&params.to, params.count)?;

    // Events for the minted NFTs. A full log rejects before any write.
    for token_id in state.next_token_ids(params.count) {
        logger.log(&transfer_event(token_id, ZERO_ADDRESS, params.to))?;
    }

    state.mint(&params.to, params.count)
}

/// View the owner of a token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token has not been minted.
#[receive(
    contract = "TokenRegistry",
    name = "getOwner",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn get_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    host.state().owner_of(&token_id)
}

/// Whether the address owns the token. Unknown tokens give `false`.
#[receive(
    contract = "TokenRegistry",
    name = "isOwnerOf",
    parameter = "IsOwnerOfParams",
    return_value = "bool"
)]
fn is_owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params: IsOwnerOfParams = ctx.parameter_cursor().get()?;

    Ok(host.state().is_owner_of(&params.address, &params.token_id))
}

/// Hand administration of the contract to a new owner.
/// Logs an `OwnershipTransferred` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the contract owner.
/// - The new owner is the zero address.
/// - Fails to log `OwnershipTransferred` event.
#[receive(
    contract = "TokenRegistry",
    name = "transferOwnership",
    parameter = "Address",
    enable_logger,
    mutable
)]
fn transfer_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let new_owner: Address = ctx.parameter_cursor().get()?;

    let previous = host
        .state_mut()
        .access
        .transfer_ownership(&ctx.sender(), new_owner)?;

    logger.log(&CustomEvent::OwnershipTransferred {
        previous,
        new: new_owner,
    })?;

    Ok(())
}

fn update_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    kind: MinterUpdateKind,
) -> ContractResult<()> {
    let address: Address = ctx.parameter_cursor().get()?;
    let update = MinterUpdateParams { kind, address };

    host.state_mut()
        .access
        .handle_minter_update(&ctx.sender(), update)?;

    logger.log(&CustomEvent::MinterUpdated(update))?;

    Ok(())
}

/// Add an address to the minter set. Authorizing an existing minter succeeds
/// without changes.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the contract owner.
/// - The instance only lets the owner mint.
/// - Fails to log `MinterUpdated` event.
#[receive(
    contract = "TokenRegistry",
    name = "authorizeMinter",
    parameter = "Address",
    enable_logger,
    mutable
)]
fn authorize_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_minter(ctx, host, logger, MinterUpdateKind::Authorize)
}

/// Remove an address from the minter set. Revoking a non-minter succeeds
/// without changes.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the contract owner.
/// - The instance only lets the owner mint.
/// - Fails to log `MinterUpdated` event.
#[receive(
    contract = "TokenRegistry",
    name = "revokeMinter",
    parameter = "Address",
    enable_logger,
    mutable
)]
fn revoke_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_minter(ctx, host, logger, MinterUpdateKind::Revoke)
}

/// View function that returns the contract owner.
#[receive(contract = "TokenRegistry", name = "owner", return_value = "Address")]
fn contract_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().access.owner())
}

/// Move a token from the sender to another address.
/// Logs a `Transfer` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token has not been minted.
/// - The sender does not own the token.
/// - The recipient is the zero address.
/// - Fails to log `Transfer` event.
#[receive(
    contract = "TokenRegistry",
    name = "transferToken",
    parameter = "TransferTokenParams",
    enable_logger,
    mutable
)]
fn transfer_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: TransferTokenParams = ctx.parameter_cursor().get()?;

    let from = host
        .state_mut()
        .transfer_token(&ctx.sender(), params.token_id, params.to)?;

    logger.log(&transfer_event(params.token_id, from, params.to))?;

    Ok(())
}

#[receive(
    contract = "TokenRegistry",
    name = "isMinter",
    parameter = "Address",
    return_value = "bool"
)]
fn is_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let address: Address = ctx.parameter_cursor().get()?;

    Ok(host.state().access.is_minter(&address))
}

/// View the owner, supply and configuration of the registry.
#[receive(contract = "TokenRegistry", name = "view", return_value = "RegistryView")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<RegistryView> {
    Ok(host.state().view())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER_ACCOUNT: AccountAddress = AccountAddress([1; 32]);
    const OWNER: Address = Address::Account(OWNER_ACCOUNT);
    const NEW_OWNER: Address = Address::Account(AccountAddress([2; 32]));
    const MINTER: Address = Address::Account(AccountAddress([3; 32]));

    const USER_1: Address = Address::Account(AccountAddress([16; 32]));
    const USER_2: Address = Address::Account(AccountAddress([17; 32]));
    const CONTRACT_1: Address = Address::Contract(ContractAddress {
        index: 16,
        subindex: 16,
    });

    fn owner_only() -> InitParams {
        InitParams {
            owner: OWNER,
            mint_access: MintAccess::OwnerOnly,
            max_supply: None,
            one_per_address: false,
        }
    }

    fn with_minters(max_supply: u32) -> InitParams {
        InitParams {
            owner: OWNER,
            mint_access: MintAccess::Minters,
            max_supply: Some(max_supply),
            one_per_address: false,
        }
    }

    fn default_host(params: InitParams) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER_ACCOUNT).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_TokenRegistry");

        TestHost::new(state, state_builder)
    }

    fn call_mint_nft(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        to: Address,
    ) -> (ContractResult<ContractTokenId>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams { to });
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = mint_nft(&ctx, host, &mut logger);
        (result, logger)
    }

    fn call_mint_multiple(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        to: Address,
        count: u32,
    ) -> (ContractResult<Vec<ContractTokenId>>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintMultipleParams { to, count });
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = mint_multiple(&ctx, host, &mut logger);
        (result, logger)
    }

    fn call_get_owner(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<Address> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_parameter(&bytes);

        get_owner(&ctx, host)
    }

    fn call_is_owner_of(
        host: &TestHost<State<TestStateApi>>,
        address: Address,
        token_id: ContractTokenId,
    ) -> bool {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&IsOwnerOfParams { address, token_id });
        ctx.set_parameter(&bytes);

        is_owner_of(&ctx, host).expect_report("isOwnerOf never rejects")
    }

    fn call_transfer_ownership(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        new_owner: Address,
    ) -> (ContractResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&new_owner);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_ownership(&ctx, host, &mut logger);
        (result, logger)
    }

    fn call_update_minter(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        address: Address,
        kind: MinterUpdateKind,
    ) -> (ContractResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&address);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = match kind {
            MinterUpdateKind::Authorize => authorize_minter(&ctx, host, &mut logger),
            MinterUpdateKind::Revoke => revoke_minter(&ctx, host, &mut logger),
        };
        (result, logger)
    }

    fn call_owner(host: &TestHost<State<TestStateApi>>) -> Address {
        let ctx = TestReceiveContext::empty();
        contract_owner(&ctx, host).expect_report("owner never rejects")
    }

    fn mint_event(token_id: u32, to: Address) -> Vec<u8> {
        to_bytes(&transfer_event(TokenIdU32(token_id), ZERO_ADDRESS, to))
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host(owner_only());

        claim_eq!(call_owner(&host), OWNER);
        claim_eq!(
            host.state().view(),
            RegistryView {
                owner: OWNER,
                total_supply: 0,
                max_supply: None,
                mint_access: MintAccess::OwnerOnly,
                one_per_address: false,
            }
        );
    }

    #[concordium_test]
    fn test_init_rejects_zero_owner() {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&InitParams {
            owner: ZERO_ADDRESS,
            ..owner_only()
        });
        ctx.set_init_origin(OWNER_ACCOUNT).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let result = init(&ctx, &mut state_builder);

        claim_eq!(
            result.err(),
            Some(Reject::from(ContractError::InvalidAddress))
        );
    }

    #[concordium_test]
    fn test_init_accepts_owner_other_than_origin() {
        let host = default_host(InitParams {
            owner: CONTRACT_1,
            ..owner_only()
        });

        claim_eq!(call_owner(&host), CONTRACT_1);
    }

    #[concordium_test]
    fn test_mint_nft() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_mint_nft(&mut host, OWNER, USER_1);

        claim_eq!(result, Ok(TokenIdU32(0)));
        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(USER_1));
        claim_eq!(host.state().total_supply, 1);

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            mint_event(0, USER_1),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    fn test_mint_nft_to_same_address_creates_new_token() {
        let mut host = default_host(owner_only());

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(1)));

        claim!(call_is_owner_of(&host, USER_1, TokenIdU32(0)));
        claim!(call_is_owner_of(&host, USER_1, TokenIdU32(1)));
    }

    #[concordium_test]
    fn test_mint_multiple() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_mint_multiple(&mut host, OWNER, USER_1, 3);

        claim_eq!(
            result,
            Ok(vec![TokenIdU32(0), TokenIdU32(1), TokenIdU32(2)])
        );
        claim_eq!(
            logger.logs,
            vec![mint_event(0, USER_1), mint_event(1, USER_1), mint_event(2, USER_1)],
            "Expected one event per token in ascending order"
        );
        for id in 0..3 {
            claim_eq!(call_get_owner(&host, TokenIdU32(id)), Ok(USER_1));
        }
        claim_eq!(host.state().total_supply, 3);
    }

    #[concordium_test]
    fn test_mint_multiple_continues_from_supply() {
        let mut host = default_host(owner_only());
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_2);
        claim_eq!(result, Ok(TokenIdU32(0)));

        let (result, logger) = call_mint_multiple(&mut host, OWNER, USER_1, 2);

        claim_eq!(result, Ok(vec![TokenIdU32(1), TokenIdU32(2)]));
        claim_eq!(
            logger.logs,
            vec![mint_event(1, USER_1), mint_event(2, USER_1)]
        );
        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(USER_2));
    }

    #[concordium_test]
    fn test_mint_to_zero_address() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_mint_nft(&mut host, OWNER, ZERO_ADDRESS);
        claim_eq!(result, Err(ContractError::InvalidAddress));
        claim!(logger.logs.is_empty());

        let (result, _) = call_mint_multiple(&mut host, OWNER, ZERO_ADDRESS, 2);
        claim_eq!(result, Err(ContractError::InvalidAddress));

        claim_eq!(host.state().total_supply, 0);
    }

    #[concordium_test]
    fn test_mint_not_authorized() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_mint_nft(&mut host, USER_1, USER_1);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim!(logger.logs.is_empty());

        let (result, _) = call_mint_multiple(&mut host, CONTRACT_1, USER_1, 2);
        claim_eq!(result, Err(ContractError::NotAuthorized));

        claim_eq!(host.state().total_supply, 0);
        claim_eq!(
            call_get_owner(&host, TokenIdU32(0)),
            Err(ContractError::TokenNotExist)
        );
    }

    #[concordium_test]
    fn test_get_owner_of_unminted_token() {
        let mut host = default_host(owner_only());
        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_1, 2);
        claim!(result.is_ok());

        claim_eq!(
            call_get_owner(&host, TokenIdU32(2)),
            Err(ContractError::TokenNotExist)
        );
        claim_eq!(
            call_get_owner(&host, TokenIdU32(u32::MAX)),
            Err(ContractError::TokenNotExist)
        );
    }

    #[concordium_test]
    fn test_is_owner_of() {
        let mut host = default_host(owner_only());

        // Nothing minted yet
        claim!(!call_is_owner_of(&host, USER_1, TokenIdU32(0)));

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim!(result.is_ok());

        claim!(call_is_owner_of(&host, USER_1, TokenIdU32(0)));
        claim!(!call_is_owner_of(&host, USER_2, TokenIdU32(0)));
        claim!(!call_is_owner_of(&host, USER_1, TokenIdU32(1)));
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_transfer_ownership(&mut host, OWNER, NEW_OWNER);

        claim_eq!(result, Ok(()));
        claim_eq!(call_owner(&host), NEW_OWNER);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::OwnershipTransferred {
                previous: OWNER,
                new: NEW_OWNER,
            })]
        );

        // The new owner mints
        let (result, logger) = call_mint_nft(&mut host, NEW_OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));
        claim_eq!(logger.logs, vec![mint_event(0, USER_1)]);
        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(USER_1));

        // The original owner lost its rights
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        let (result, _) = call_transfer_ownership(&mut host, OWNER, OWNER);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim_eq!(call_owner(&host), NEW_OWNER);
    }

    #[concordium_test]
    fn test_transfer_ownership_to_zero_address() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_transfer_ownership(&mut host, OWNER, ZERO_ADDRESS);

        claim_eq!(result, Err(ContractError::InvalidAddress));
        claim!(logger.logs.is_empty());
        claim_eq!(call_owner(&host), OWNER);
    }

    #[concordium_test]
    fn test_transfer_ownership_not_authorized() {
        let mut host = default_host(owner_only());

        let (result, _) = call_transfer_ownership(&mut host, USER_1, USER_2);

        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim_eq!(call_owner(&host), OWNER);
    }

    #[concordium_test]
    fn test_ownership_event_decodes() {
        let mut host = default_host(owner_only());
        let (result, logger) = call_transfer_ownership(&mut host, OWNER, NEW_OWNER);
        claim_eq!(result, Ok(()));

        let event: CustomEvent =
            from_bytes(&logger.logs[0]).expect_report("Failed to parse logged event");

        claim_eq!(
            event,
            CustomEvent::OwnershipTransferred {
                previous: OWNER,
                new: NEW_OWNER,
            }
        );
    }

    #[concordium_test]
    fn test_authorize_and_revoke_minter() {
        let mut host = default_host(with_minters(10_000));

        let (result, logger) =
            call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Authorize);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::MinterUpdated(MinterUpdateParams {
                kind: MinterUpdateKind::Authorize,
                address: MINTER,
            }))]
        );
        claim!(host.state().access.is_minter(&MINTER));

        let (result, _) = call_mint_nft(&mut host, MINTER, MINTER);
        claim_eq!(result, Ok(TokenIdU32(0)));
        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(MINTER));

        let (result, _) = call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Revoke);
        claim_eq!(result, Ok(()));
        claim!(!host.state().access.is_minter(&MINTER));

        // Revocation takes effect on the next call
        let (result, logger) = call_mint_nft(&mut host, MINTER, MINTER);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim!(logger.logs.is_empty());
        claim_eq!(host.state().total_supply, 1);
    }

    #[concordium_test]
    fn test_minters_mode_excludes_unauthorized_owner() {
        let mut host = default_host(with_minters(10_000));

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Err(ContractError::NotAuthorized));

        let (result, _) = call_update_minter(&mut host, OWNER, OWNER, MinterUpdateKind::Authorize);
        claim_eq!(result, Ok(()));

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));
    }

    #[concordium_test]
    fn test_update_minter_not_authorized() {
        let mut host = default_host(with_minters(10_000));
        let (result, _) = call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Authorize);
        claim_eq!(result, Ok(()));

        // A minter is not an administrator
        let (result, logger) =
            call_update_minter(&mut host, MINTER, USER_1, MinterUpdateKind::Authorize);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim!(logger.logs.is_empty());
        claim!(!host.state().access.is_minter(&USER_1));

        let (result, _) = call_update_minter(&mut host, USER_1, MINTER, MinterUpdateKind::Revoke);
        claim_eq!(result, Err(ContractError::NotAuthorized));
        claim!(host.state().access.is_minter(&MINTER));
    }

    #[concordium_test]
    fn test_update_minter_unsupported_for_owner_only() {
        let mut host = default_host(owner_only());

        let (result, _) = call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Authorize);
        claim_eq!(result, Err(ContractError::Unsupported));

        let (result, _) = call_mint_nft(&mut host, MINTER, MINTER);
        claim_eq!(result, Err(ContractError::NotAuthorized));
    }

    #[concordium_test]
    fn test_is_minter() {
        let mut host = default_host(with_minters(10_000));
        let (result, _) = call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Authorize);
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MINTER);
        ctx.set_parameter(&bytes);
        claim_eq!(is_minter(&ctx, &host), Ok(true));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&USER_1);
        ctx.set_parameter(&bytes);
        claim_eq!(is_minter(&ctx, &host), Ok(false));
    }

    #[concordium_test]
    fn test_max_supply() {
        let mut host = default_host(with_minters(5));
        let (result, _) = call_update_minter(&mut host, OWNER, MINTER, MinterUpdateKind::Authorize);
        claim_eq!(result, Ok(()));

        let (result, _) = call_mint_multiple(&mut host, MINTER, USER_1, 4);
        claim!(result.is_ok());
        let (result, _) = call_mint_nft(&mut host, MINTER, USER_2);
        claim_eq!(result, Ok(TokenIdU32(4)));

        let (result, logger) = call_mint_nft(&mut host, MINTER, USER_2);
        claim_eq!(result, Err(ContractError::MaxSupplyReached));
        claim!(logger.logs.is_empty());
        claim_eq!(host.state().total_supply, 5);
        claim_eq!(
            call_get_owner(&host, TokenIdU32(5)),
            Err(ContractError::TokenNotExist)
        );
    }

    #[concordium_test]
    fn test_mint_multiple_is_all_or_nothing() {
        let mut host = default_host(InitParams {
            max_supply: Some(5),
            ..owner_only()
        });
        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_1, 3);
        claim!(result.is_ok());

        // Only two more fit under the cap
        let (result, logger) = call_mint_multiple(&mut host, OWNER, USER_2, 3);

        claim_eq!(result, Err(ContractError::MaxSupplyReached));
        claim!(logger.logs.is_empty());
        claim_eq!(host.state().total_supply, 3);
        claim_eq!(
            call_get_owner(&host, TokenIdU32(3)),
            Err(ContractError::TokenNotExist)
        );

        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_2, 2);
        claim_eq!(result, Ok(vec![TokenIdU32(3), TokenIdU32(4)]));
    }

    #[concordium_test]
    fn test_mint_multiple_beyond_event_log() {
        let mut host = default_host(owner_only());

        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_1, 65);

        claim_eq!(result, Err(ContractError::LogFull));
        claim_eq!(host.state().total_supply, 0);
        claim_eq!(
            call_get_owner(&host, TokenIdU32(0)),
            Err(ContractError::TokenNotExist)
        );

        // The registry keeps minting from where it was
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));
    }

    #[concordium_test]
    fn test_mint_multiple_policy_before_cap() {
        let mut host = default_host(InitParams {
            max_supply: Some(3),
            one_per_address: true,
            ..owner_only()
        });

        // The second token already breaks the policy
        let (result, logger) = call_mint_multiple(&mut host, OWNER, USER_1, 5);

        claim_eq!(result, Err(ContractError::AlreadyMinted));
        claim!(logger.logs.is_empty());
        claim_eq!(host.state().total_supply, 0);
    }

    #[concordium_test]
    fn test_mint_multiple_zero_count() {
        let mut host = default_host(owner_only());

        let (result, logger) = call_mint_multiple(&mut host, OWNER, USER_1, 0);

        claim_eq!(result, Ok(vec![]));
        claim!(logger.logs.is_empty());
        claim_eq!(host.state().total_supply, 0);
    }

    #[concordium_test]
    fn test_one_per_address() {
        let mut host = default_host(InitParams {
            one_per_address: true,
            ..owner_only()
        });

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));

        let (result, logger) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Err(ContractError::AlreadyMinted));
        claim!(logger.logs.is_empty());

        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_2, 2);
        claim_eq!(result, Err(ContractError::AlreadyMinted));

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_2);
        claim_eq!(result, Ok(TokenIdU32(1)));
        claim_eq!(host.state().total_supply, 2);
    }

    #[concordium_test]
    fn test_transfer_token() {
        let mut host = default_host(owner_only());
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim!(result.is_ok());

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TransferTokenParams {
            token_id: TokenIdU32(0),
            to: USER_2,
        });
        ctx.set_sender(USER_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_token(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(USER_2));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&transfer_event(TokenIdU32(0), USER_1, USER_2))]
        );

        // Contract ownership is unaffected
        claim_eq!(call_owner(&host), OWNER);
    }

    #[concordium_test]
    fn test_transfer_token_rejections() {
        let mut host = default_host(owner_only());
        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim!(result.is_ok());

        let cases = vec![
            (TokenIdU32(1), USER_1, USER_2, ContractError::TokenNotExist),
            // Not even the contract owner can move a token it does not own
            (TokenIdU32(0), OWNER, USER_2, ContractError::NotAuthorized),
            (TokenIdU32(0), USER_1, ZERO_ADDRESS, ContractError::InvalidAddress),
        ];

        for (token_id, sender, to, expected) in cases {
            let mut ctx = TestReceiveContext::empty();
            let bytes = to_bytes(&TransferTokenParams { token_id, to });
            ctx.set_sender(sender).set_parameter(&bytes);
            let mut logger = TestLogger::init();

            let result = transfer_token(&ctx, &mut host, &mut logger);

            claim_eq!(result, Err(expected));
            claim!(logger.logs.is_empty());
        }

        claim_eq!(call_get_owner(&host, TokenIdU32(0)), Ok(USER_1));
    }

    /// Owner A mints to B, batch-mints three more, a stranger is refused, and
    /// after handing the contract to D the old owner can no longer mint.
    #[concordium_test]
    fn test_registry_lifecycle() {
        let mut host = default_host(owner_only());

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Ok(TokenIdU32(0)));

        let (result, _) = call_mint_multiple(&mut host, OWNER, USER_1, 3);
        claim_eq!(
            result,
            Ok(vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(3)])
        );
        claim_eq!(host.state().total_supply, 4);

        let (result, _) = call_mint_nft(&mut host, USER_2, USER_2);
        claim_eq!(result, Err(ContractError::NotAuthorized));

        let (result, _) = call_transfer_ownership(&mut host, OWNER, NEW_OWNER);
        claim_eq!(result, Ok(()));
        claim_eq!(call_owner(&host), NEW_OWNER);

        let (result, _) = call_mint_nft(&mut host, OWNER, USER_1);
        claim_eq!(result, Err(ContractError::NotAuthorized));

        for id in 0..4 {
            claim_eq!(call_get_owner(&host, TokenIdU32(id)), Ok(USER_1));
        }

        let ctx = TestReceiveContext::empty();
        claim_eq!(
            view(&ctx, &host),
            Ok(RegistryView {
                owner: NEW_OWNER,
                total_supply: 4,
                max_supply: None,
                mint_access: MintAccess::OwnerOnly,
                one_per_address: false,
            })
        );
    }
}
