//! A sequential NFT registry built on the Concordium Token Standard CIS2
//! event types.
//!
//! # Description
//! Tokens are identified by a `u32` assigned in mint order starting from 0,
//! and each token is owned by exactly one address. A token is globally
//! identified by the contract address together with the token ID.
//!
//! Minting is guarded by one of two access models chosen at initialization:
//! either only the contract owner mints, or only the addresses the owner has
//! authorized as minters do. An instance may cap its supply and may restrict
//! every address to a single minted token.
//!
//! Every mint is logged as a CIS2 `Transfer` event from the zero address.
//! The current owner of a token can hand it to another address with
//! `transferToken`, which is distinct from `transferOwnership` handing over
//! administration of the contract itself.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_cis2::{Cis2Event, TokenIdU32, TransferEvent};
use concordium_std::*;

mod contract;
mod events;
mod external;
mod state;
