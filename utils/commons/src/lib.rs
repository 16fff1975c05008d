//! Shared library of the token registry.
//!
//! It exposes the error taxonomy, shared types, constants and the access
//! control component used by the token registry contract.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{access::*, constants::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod access;
mod constants;
mod errors;
mod types;
