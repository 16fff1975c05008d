use super::*;

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum CustomEvent {
    /// Administration of the contract handed to a new owner
    OwnershipTransferred { previous: Address, new: Address },
    /// Minter authorized or revoked
    MinterUpdated(MinterUpdateParams),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::OwnershipTransferred { previous, new } => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                previous.serial(out)?;
                new.serial(out)
            }
            CustomEvent::MinterUpdated(event) => {
                out.write_u8(MINTER_UPDATED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            OWNERSHIP_TRANSFERRED_TAG => {
                let previous = Address::deserial(source)?;
                let new = Address::deserial(source)?;
                Ok(CustomEvent::OwnershipTransferred { previous, new })
            }
            MINTER_UPDATED_TAG => {
                MinterUpdateParams::deserial(source).map(CustomEvent::MinterUpdated)
            }
            _ => Err(ParseError::default()),
        }
    }
}

/// CIS2 `Transfer` event moving a single token. Mints use the zero address
/// as `from`.
pub fn transfer_event(token_id: ContractTokenId, from: Address, to: Address) -> ContractEvent {
    Cis2Event::Transfer(TransferEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        from,
        to,
    })
}
