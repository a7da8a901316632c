// SPDX-License-Identifier: CC0-1.0

//! Legacy Base58 Addresses
//!
//! Pay-to-pubkey-hash (P2PKH) and pay-to-script-hash (P2SH) addresses: a version byte naming the
//! address type and network, a 20-byte HASH160, and a four byte checksum, all Base58 encoded.
//!
//! This crate can be used in a no-std environment but requires an allocator.

// NB: This crate is empty if `alloc` is not enabled.
#![cfg(feature = "alloc")]
#![no_std]
// Experimental features we need.
#![doc(test(attr(warn(unused))))]
// Coding conventions.
#![warn(deprecated_in_future)]
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Address-related constants.
pub mod constants {
    /// Legacy Base58 address version byte for mainnet P2PKH (0x00).
    pub const PUBKEY_ADDRESS_PREFIX_MAIN: u8 = 0;
    /// Legacy Base58 address version byte for mainnet P2SH (0x05).
    pub const SCRIPT_ADDRESS_PREFIX_MAIN: u8 = 5;
    /// Legacy Base58 address version byte for testnets P2PKH (0x6f).
    pub const PUBKEY_ADDRESS_PREFIX_TEST: u8 = 111;
    /// Legacy Base58 address version byte for testnets P2SH (0xc4).
    pub const SCRIPT_ADDRESS_PREFIX_TEST: u8 = 196;
}

pub mod address;
pub mod hash_types;
pub mod params;

#[rustfmt::skip]
pub use {
	base58,
	network,
};

#[doc(inline)]
pub use address::error::*;
#[doc(inline)]
pub use address::{Address, AddressData, AddressType};
#[doc(inline)]
pub use hash_types::{HashLengthError, ParseHashError, PubkeyHash, ScriptHash};
#[doc(inline)]
pub use network::{Network, NetworkKind};
#[doc(inline)]
pub use params::Params;
