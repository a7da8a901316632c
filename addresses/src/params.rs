// SPDX-License-Identifier: CC0-1.0

//! Address version bytes for each network kind.
//!
//! The leading byte of a decoded legacy address is the only thing that tells its type and network
//! apart. [`version_for`] and [`lookup`] are inverse functions over the four recognized bytes;
//! every other byte is unknown.

use network::{Network, NetworkKind};

use crate::address::AddressType;
use crate::constants::{
    PUBKEY_ADDRESS_PREFIX_MAIN, PUBKEY_ADDRESS_PREFIX_TEST, SCRIPT_ADDRESS_PREFIX_MAIN,
    SCRIPT_ADDRESS_PREFIX_TEST,
};

/// Address parameters for one network kind.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Network kind for which the parameters are valid.
    pub network: NetworkKind,
    /// Version byte of P2PKH addresses.
    pub pubkey_address_prefix: u8,
    /// Version byte of P2SH addresses.
    pub script_address_prefix: u8,
}

/// The mainnet parameters.
pub static MAIN: Params = Params::MAIN;
/// The parameters shared by all test networks.
pub static TEST: Params = Params::TEST;

impl Params {
    /// The mainnet parameters.
    pub const MAIN: Self = Self {
        network: NetworkKind::Main,
        pubkey_address_prefix: PUBKEY_ADDRESS_PREFIX_MAIN,
        script_address_prefix: SCRIPT_ADDRESS_PREFIX_MAIN,
    };

    /// The parameters shared by testnet, signet and regtest.
    pub const TEST: Self = Self {
        network: NetworkKind::Test,
        pubkey_address_prefix: PUBKEY_ADDRESS_PREFIX_TEST,
        script_address_prefix: SCRIPT_ADDRESS_PREFIX_TEST,
    };

    /// Constructs the parameter set for the given network kind.
    pub const fn new(network: NetworkKind) -> Self {
        match network {
            NetworkKind::Main => Self::MAIN,
            NetworkKind::Test => Self::TEST,
        }
    }

    /// Returns the version byte for `address_type` under these parameters.
    pub const fn prefix(&self, address_type: AddressType) -> u8 {
        match address_type {
            AddressType::P2pkh => self.pubkey_address_prefix,
            AddressType::P2sh => self.script_address_prefix,
        }
    }
}

impl From<NetworkKind> for Params {
    fn from(value: NetworkKind) -> Self { Self::new(value) }
}

impl From<Network> for Params {
    fn from(value: Network) -> Self { Self::new(value.kind()) }
}

/// Returns the version byte that encodes `address_type` on `network`.
pub const fn version_for(address_type: AddressType, network: NetworkKind) -> u8 {
    Params::new(network).prefix(address_type)
}

/// Resolves a version byte to the address type and network kind it encodes.
///
/// Returns `None` if `version` is not one of the recognized version bytes.
pub const fn lookup(version: u8) -> Option<(AddressType, NetworkKind)> {
    match version {
        PUBKEY_ADDRESS_PREFIX_MAIN => Some((AddressType::P2pkh, NetworkKind::Main)),
        SCRIPT_ADDRESS_PREFIX_MAIN => Some((AddressType::P2sh, NetworkKind::Main)),
        PUBKEY_ADDRESS_PREFIX_TEST => Some((AddressType::P2pkh, NetworkKind::Test)),
        SCRIPT_ADDRESS_PREFIX_TEST => Some((AddressType::P2sh, NetworkKind::Test)),
        _ => None,
    }
}
