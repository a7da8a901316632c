// SPDX-License-Identifier: CC0-1.0

//! The 20-byte HASH160 values carried by legacy addresses.
//!
//! HASH160 is `RIPEMD160(SHA256(data))`. A [`PubkeyHash`] commits to a serialized public key and
//! a [`ScriptHash`] to a redeem script; the two never convert into each other.

use core::fmt;
use core::str::FromStr;

use hashes::hash160;
use hex::{DisplayHex, FromHex};

/// Length in bytes of a HASH160 value.
pub const HASH160_LEN: usize = 20;

macro_rules! hash160_newtype {
    ($(#[$attr:meta])* pub struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; HASH160_LEN]);

        impl $name {
            /// Computes HASH160 of `data`.
            pub fn hash(data: &[u8]) -> Self { Self(hash160::Hash::hash(data).to_byte_array()) }

            /// Wraps an already computed hash.
            pub const fn from_byte_array(bytes: [u8; HASH160_LEN]) -> Self { Self(bytes) }

            /// Wraps an already computed hash held in a slice.
            ///
            /// # Errors
            ///
            /// If `bytes` is not exactly 20 bytes long. The input is never truncated or padded.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, HashLengthError> {
                let array: [u8; HASH160_LEN] =
                    bytes.try_into().map_err(|_| HashLengthError { length: bytes.len() })?;
                Ok(Self(array))
            }

            /// Returns the inner bytes.
            pub fn to_byte_array(self) -> [u8; HASH160_LEN] { self.0 }

            /// Returns a reference to the inner bytes.
            pub fn as_byte_array(&self) -> &[u8; HASH160_LEN] { &self.0 }
        }

        impl From<[u8; HASH160_LEN]> for $name {
            fn from(bytes: [u8; HASH160_LEN]) -> Self { Self(bytes) }
        }

        impl From<hash160::Hash> for $name {
            fn from(hash: hash160::Hash) -> Self { Self(hash.to_byte_array()) }
        }

        impl AsRef<[u8; HASH160_LEN]> for $name {
            fn as_ref(&self) -> &[u8; HASH160_LEN] { &self.0 }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] { &self.0 }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0[..].as_hex(), f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({:x})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = ParseHashError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <[u8; HASH160_LEN]>::from_hex(s).map(Self).map_err(ParseHashError)
            }
        }
    };
}

hash160_newtype! {
    /// HASH160 of a serialized public key, the payload of a P2PKH address.
    pub struct PubkeyHash;
}

hash160_newtype! {
    /// HASH160 of a redeem script, the payload of a P2SH address.
    pub struct ScriptHash;
}

impl ScriptHash {
    /// Computes the script hash of a redeem script of any length.
    pub fn from_script(redeem_script: &[u8]) -> Self { Self::hash(redeem_script) }
}

/// A hash supplied as a slice was not 20 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashLengthError {
    pub(crate) length: usize,
}

impl HashLengthError {
    /// Returns the length of the rejected input.
    pub fn invalid_length(&self) -> usize { self.length }
}

impl fmt::Display for HashLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hash must be {} bytes long: length={}", HASH160_LEN, self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HashLengthError {}

/// Error parsing a hex-encoded HASH160 value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHashError(hex::HexToArrayError);

impl fmt::Display for ParseHashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("invalid hash160 hex") }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseHashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.0) }
}
