// SPDX-License-Identifier: CC0-1.0

//! Legacy Base58 addresses.
//!
//! This module defines the `Address` type, its construction from hashes and redeem scripts,
//! Base58Check formatting and parsing, and network validation.
//!
//! # Examples
//!
//! ```
//! use addr58::{Address, AddressType, Network, NetworkKind};
//!
//! let address: Address = "1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX".parse()?;
//! assert_eq!(address.address_type(), AddressType::P2pkh);
//! assert_eq!(address.network(), NetworkKind::Main);
//! assert!(address.is_valid_for_network(Network::Bitcoin));
//! assert_eq!(address.to_string(), "1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX");
//! # Ok::<(), addr58::ParseError>(())
//! ```

pub mod error;

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use base58::checksum;
use network::NetworkKind;

use crate::hash_types::{HashLengthError, PubkeyHash, ScriptHash, HASH160_LEN};
use crate::params;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::error::{
    IncorrectChecksumError, InvalidBase58PayloadLengthError, InvalidCharacterError,
    LegacyAddressTooLongError, NetworkValidationError, ParseError, UnknownAddressTypeError,
    UnknownVersionError,
};

/// Length of a decoded legacy address: version byte, hash and checksum.
pub const PAYLOAD_LEN: usize = 1 + HASH160_LEN + checksum::CHECKSUM_LEN;

/// Longest string accepted for decoding.
const MAX_LEGACY_ADDRESS_LEN: usize = 50;

/// The different types of addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum AddressType {
    /// Pay to pubkey hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::P2pkh => "p2pkh",
            Self::P2sh => "p2sh",
        })
    }
}

impl FromStr for AddressType {
    type Err = UnknownAddressTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p2pkh" => Ok(Self::P2pkh),
            "p2sh" => Ok(Self::P2sh),
            _ => Err(UnknownAddressTypeError(s.to_owned())),
        }
    }
}

/// The inner representation of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum AddressInner {
    P2pkh { hash: PubkeyHash, network: NetworkKind },
    P2sh { hash: ScriptHash, network: NetworkKind },
}

impl AddressInner {
    fn address_type(&self) -> AddressType {
        match *self {
            Self::P2pkh { .. } => AddressType::P2pkh,
            Self::P2sh { .. } => AddressType::P2sh,
        }
    }

    fn network(&self) -> NetworkKind {
        match *self {
            Self::P2pkh { network, .. } | Self::P2sh { network, .. } => network,
        }
    }

    fn hash_bytes(&self) -> &[u8; HASH160_LEN] {
        match *self {
            Self::P2pkh { ref hash, .. } => hash.as_byte_array(),
            Self::P2sh { ref hash, .. } => hash.as_byte_array(),
        }
    }
}

impl fmt::Display for AddressInner {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut prefixed = [0; 1 + HASH160_LEN];
        prefixed[0] = params::version_for(self.address_type(), self.network());
        prefixed[1..].copy_from_slice(self.hash_bytes());
        base58::encode_check_to_fmt(fmt, &prefixed[..])
    }
}

/// The data encoded by an `Address`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum AddressData {
    /// Data encoded by a P2PKH address.
    P2pkh {
        /// The 20-byte HASH160 of the public key.
        pubkey_hash: PubkeyHash,
    },
    /// Data encoded by a P2SH address.
    P2sh {
        /// The 20-byte HASH160 of the redeem script.
        script_hash: ScriptHash,
    },
}

/// A legacy Base58 address.
///
/// Two addresses are equal only if their type, hash and network all match: a P2PKH and a P2SH
/// address over the same 20 bytes are different addresses.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(AddressInner);

impl Address {
    fn from_inner(inner: AddressInner) -> Self { Self(inner) }
    fn inner(&self) -> &AddressInner { &self.0 }

    /// Constructs a new pay-to-public-key-hash (P2PKH) address from a public key hash.
    #[inline]
    pub fn p2pkh(hash: impl Into<PubkeyHash>, network: impl Into<NetworkKind>) -> Self {
        Self::from_inner(AddressInner::P2pkh { hash: hash.into(), network: network.into() })
    }

    /// Constructs a new P2PKH address from a public key hash held in a slice.
    ///
    /// # Errors
    ///
    /// If `hash` is not exactly 20 bytes long.
    pub fn p2pkh_from_slice(
        hash: &[u8],
        network: impl Into<NetworkKind>,
    ) -> Result<Self, HashLengthError> {
        Ok(Self::p2pkh(PubkeyHash::from_slice(hash)?, network))
    }

    /// Constructs a new pay-to-script-hash (P2SH) address from a redeem script.
    ///
    /// The script may be of any length; it is hashed with HASH160.
    #[inline]
    pub fn p2sh(redeem_script: &[u8], network: impl Into<NetworkKind>) -> Self {
        Self::p2sh_from_hash(ScriptHash::from_script(redeem_script), network)
    }

    /// Constructs a new P2SH address from a script hash.
    pub fn p2sh_from_hash(hash: impl Into<ScriptHash>, network: impl Into<NetworkKind>) -> Self {
        Self::from_inner(AddressInner::P2sh { hash: hash.into(), network: network.into() })
    }

    /// Constructs a new P2SH address from a script hash held in a slice.
    ///
    /// The slice is never treated as a script: use [`Address::p2sh`] for that.
    ///
    /// # Errors
    ///
    /// If `hash` is not exactly 20 bytes long.
    pub fn p2sh_from_slice(
        hash: &[u8],
        network: impl Into<NetworkKind>,
    ) -> Result<Self, HashLengthError> {
        Ok(Self::p2sh_from_hash(ScriptHash::from_slice(hash)?, network))
    }

    /// Parses a Base58 address string.
    ///
    /// Strings over 50 characters are rejected up front. The rest is decoded, the payload length
    /// checked, the checksum verified and only then is the version byte resolved. Nothing is
    /// compared against an expected network; see [`Address::require_network`].
    pub fn from_base58_str(s: &str) -> Result<Self, ParseError> {
        if s.len() > MAX_LEGACY_ADDRESS_LEN {
            return Err(LegacyAddressTooLongError { length: s.len() }.into());
        }
        let data = base58::decode(s)?;
        let (payload, embedded) = match checksum::split_checksum(&data) {
            Some(split) if data.len() == PAYLOAD_LEN => split,
            _ => return Err(InvalidBase58PayloadLengthError { length: data.len() }.into()),
        };
        checksum::check(payload, embedded)?;

        let version = payload[0];
        let mut hash = [0; HASH160_LEN];
        hash.copy_from_slice(&payload[1..]);

        let inner = match params::lookup(version) {
            Some((AddressType::P2pkh, network)) =>
                AddressInner::P2pkh { hash: PubkeyHash::from_byte_array(hash), network },
            Some((AddressType::P2sh, network)) =>
                AddressInner::P2sh { hash: ScriptHash::from_byte_array(hash), network },
            None => return Err(UnknownVersionError { invalid: version }.into()),
        };
        Ok(Self::from_inner(inner))
    }

    /// Gets the address type of the address.
    #[inline]
    pub fn address_type(&self) -> AddressType { self.inner().address_type() }

    /// Returns the network kind this address was constructed or decoded for.
    #[inline]
    pub fn network(&self) -> NetworkKind { self.inner().network() }

    /// Returns the 20-byte hash committed to by this address.
    ///
    /// These are exactly the bytes supplied at construction, or found between the version byte
    /// and the checksum when decoding.
    #[inline]
    pub fn script_address(&self) -> &[u8; HASH160_LEN] { self.inner().hash_bytes() }

    /// Gets the address data from this address.
    pub fn to_address_data(self) -> AddressData {
        match *self.inner() {
            AddressInner::P2pkh { hash, .. } => AddressData::P2pkh { pubkey_hash: hash },
            AddressInner::P2sh { hash, .. } => AddressData::P2sh { script_hash: hash },
        }
    }

    /// Gets the pubkey hash for this address if this is a P2PKH address.
    pub fn pubkey_hash(&self) -> Option<PubkeyHash> {
        match *self.inner() {
            AddressInner::P2pkh { hash, .. } => Some(hash),
            AddressInner::P2sh { .. } => None,
        }
    }

    /// Gets the script hash for this address if this is a P2SH address.
    pub fn script_hash(&self) -> Option<ScriptHash> {
        match *self.inner() {
            AddressInner::P2sh { hash, .. } => Some(hash),
            AddressInner::P2pkh { .. } => None,
        }
    }

    /// Returns true if this address is valid on the given network.
    ///
    /// All test networks share one kind, so a testnet address is also valid on regtest.
    pub fn is_valid_for_network(&self, network: impl Into<NetworkKind>) -> bool {
        self.network() == network.into()
    }

    /// Checks whether the network of this address is as required.
    pub fn require_network(
        self,
        required: impl Into<NetworkKind>,
    ) -> Result<Self, NetworkValidationError> {
        let required = required.into();
        if self.is_valid_for_network(required) {
            Ok(self)
        } else {
            Err(NetworkValidationError { required, address: self })
        }
    }

    /// Constructs a new URI string `bitcoin:ADDRESS`.
    pub fn to_qr_uri(self) -> String { format!("bitcoin:{}", self) }
}

impl fmt::Display for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self.inner(), fmt) }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self.inner(), f) }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> { Self::from_base58_str(s) }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a Base58 address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Address::from_base58_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use hex_lit::hex;
    use network::Network::{Bitcoin, Regtest, Signet, Testnet};

    use super::*;

    fn roundtrips(addr: &Address) {
        assert_eq!(
            Address::from_str(&addr.to_string()).unwrap(),
            *addr,
            "string round-trip failed for {}",
            addr,
        );

        #[cfg(feature = "serde")]
        {
            let ser = serde_json::to_string(addr).expect("failed to serialize address");
            let back: Address = serde_json::from_str(&ser).expect("failed to deserialize address");
            assert_eq!(back, *addr, "serde round-trip failed for {}", addr)
        }
    }

    #[test]
    fn p2pkh_address_58() {
        let hash = "162c5ea71c0b23f5b9022ef047c4a86470a5b070".parse::<PubkeyHash>().unwrap();
        let addr = Address::p2pkh(hash, Bitcoin);

        assert_eq!(&addr.to_string(), "132F25rTsvBdp9JzLLBHP5mvGY66i1xdiM");
        assert_eq!(addr.address_type(), AddressType::P2pkh);
        assert_eq!(addr.pubkey_hash(), Some(hash));
        assert_eq!(addr.script_hash(), None);
        roundtrips(&addr);
    }

    #[test]
    fn p2pkh_from_uncompressed_key() {
        let pubkey = hex!("04005937fd439b3c19014d5f328df8c7ed514eaaf41c1980b8aeab461dffb23fbf3317e42395db24a52ce9fc947d9c22f54dc3217c8b11dfc7a09c59e0dca591d3");
        let addr = Address::p2pkh(PubkeyHash::hash(&pubkey), Bitcoin);
        assert_eq!(&addr.to_string(), "1NM2HFXin4cEQRBLjkNZAS98qLX9JKzjKn");
        roundtrips(&addr);
    }

    #[test]
    fn p2sh_address_58() {
        let hash = "162c5ea71c0b23f5b9022ef047c4a86470a5b070".parse::<ScriptHash>().unwrap();
        let addr = Address::p2sh_from_hash(hash, Bitcoin);

        assert_eq!(&addr.to_string(), "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k");
        assert_eq!(addr.address_type(), AddressType::P2sh);
        assert_eq!(addr.script_hash(), Some(hash));
        assert_eq!(addr.pubkey_hash(), None);
        roundtrips(&addr);
    }

    #[test]
    fn p2sh_parse() {
        let script = hex!("552103a765fc35b3f210b95223846b36ef62a4e53e34e2925270c2c7906b92c9f718eb2103c327511374246759ec8d0b89fa6c6b23b33e11f92c5bc155409d86de0c79180121038cae7406af1f12f4786d820a1466eec7bc5785a1b5e4a387eca6d797753ef6db2103252bfb9dcaab0cd00353f2ac328954d791270203d66c2be8b430f115f451b8a12103e79412d42372c55dd336f2eb6eb639ef9d74a22041ba79382c74da2338fe58ad21035049459a4ebc00e876a9eef02e72a3e70202d3d1f591fc0dd542f93f642021f82102016f682920d9723c61b27f562eb530c926c00106004798b6471e8c52c60ee02057ae");
        let addr = Address::p2sh(&script, Testnet);
        assert_eq!(&addr.to_string(), "2N3zXjbwdTcPsJiy8sUK9FhWJhqQCxA8Jjr");
        assert_eq!(addr.address_type(), AddressType::P2sh);
        assert_eq!(addr.network(), NetworkKind::Test);
        roundtrips(&addr);
    }

    #[test]
    fn same_hash_different_type() {
        let hash = hex!("162c5ea71c0b23f5b9022ef047c4a86470a5b070");
        let p2pkh = Address::p2pkh(hash, Bitcoin);
        let p2sh = Address::p2sh_from_hash(hash, Bitcoin);

        assert_ne!(p2pkh, p2sh);
        assert_eq!(p2pkh.script_address(), p2sh.script_address());
        assert_ne!(p2pkh.to_string(), p2sh.to_string());
        assert_ne!(p2pkh.to_address_data(), p2sh.to_address_data());
    }

    #[test]
    fn address_type_strings() {
        for address_type in [AddressType::P2pkh, AddressType::P2sh] {
            let s = address_type.to_string();
            assert_eq!(s.parse::<AddressType>(), Ok(address_type));
        }
        assert_eq!(
            "p2wpkh".parse::<AddressType>(),
            Err(UnknownAddressTypeError("p2wpkh".to_string()))
        );
    }

    #[test]
    fn valid_networks() {
        let main = Address::p2pkh([7; 20], Bitcoin);
        let test = Address::p2pkh([7; 20], Testnet);

        assert!(main.is_valid_for_network(Bitcoin));
        assert!(!main.is_valid_for_network(Testnet));
        for network in [Testnet, Signet, Regtest] {
            assert!(test.is_valid_for_network(network));
        }
        assert!(test.is_valid_for_network(NetworkKind::Test));
    }

    #[test]
    fn require_network() {
        let addr: Address = "mrX9vMRYLfVy1BnZbc5gZjuyaqH3ZW2ZHz".parse().unwrap();
        assert_eq!(addr.require_network(Regtest), Ok(addr));

        let err = addr.require_network(Bitcoin).unwrap_err();
        assert_eq!(err.required(), NetworkKind::Main);
        assert_eq!(err.address(), &addr);
        assert_eq!(
            err.to_string(),
            "address mrX9vMRYLfVy1BnZbc5gZjuyaqH3ZW2ZHz belongs to the test network, main required"
        );
    }

    #[test]
    fn qr_string() {
        let addr: Address = "132F25rTsvBdp9JzLLBHP5mvGY66i1xdiM".parse().unwrap();
        assert_eq!(addr.to_qr_uri(), "bitcoin:132F25rTsvBdp9JzLLBHP5mvGY66i1xdiM");
    }

    #[test]
    fn address_debug() {
        let addr: Address = "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k".parse().unwrap();
        assert_eq!(format!("{:?}", addr), "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k");
    }

    #[test]
    fn too_long() {
        let s = "1".repeat(MAX_LEGACY_ADDRESS_LEN + 1);
        assert_eq!(
            Address::from_base58_str(&s),
            Err(ParseError::TooLong(LegacyAddressTooLongError { length: 51 }))
        );
    }

    #[test]
    fn unknown_version() {
        // Well formed payload and checksum, but 0x01 is not a version byte.
        let mut prefixed = [0x42; 21];
        prefixed[0] = 0x01;
        let s = base58::encode_check(&prefixed);

        let err = Address::from_base58_str(&s).unwrap_err();
        assert_eq!(err, ParseError::UnknownVersion(UnknownVersionError { invalid: 0x01 }));
        assert_eq!(err.to_string(), "unknown address version byte 0x01");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_tokens() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        let addr: Address = "3NukJ6fYZJ5Kk8bPjycAnruZkE5Q7UW7i8".parse().unwrap();
        assert_tokens(&addr, &[Token::Str("3NukJ6fYZJ5Kk8bPjycAnruZkE5Q7UW7i8")]);
        let tampered = "3NukJ6fYZJ5Kk8bPjycAnruZkE5Q7UW7i9";
        let err = Address::from_base58_str(tampered).unwrap_err();
        assert_de_tokens_error::<Address>(&[Token::Str(tampered)], &err.to_string());
    }
}
