// SPDX-License-Identifier: CC0-1.0

//! Error types for address parsing and validation.

use alloc::string::String;
use core::fmt;

use network::NetworkKind;

use super::Address;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use base58::{IncorrectChecksumError, InvalidCharacterError};

/// Error while decoding a legacy Base58 address.
///
/// The variants separate text that is not Base58 at all from text that decodes to the wrong
/// shape, from a payload that was corrupted in transit, from a well formed payload this library
/// does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The string contains a character outside the Base58 alphabet.
    InvalidEncoding(InvalidCharacterError),
    /// The string is too long to be a legacy address.
    ///
    /// Length is checked before anything is decoded, so an over-long string reports this variant
    /// even if it also contains characters outside the Base58 alphabet.
    TooLong(LegacyAddressTooLongError),
    /// The decoded payload is not exactly 25 bytes.
    InvalidLength(InvalidBase58PayloadLengthError),
    /// The embedded checksum does not match the payload.
    ChecksumMismatch(IncorrectChecksumError),
    /// The version byte is not recognized.
    UnknownVersion(UnknownVersionError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidEncoding(ref e) => write!(f, "address is not valid base58: {}", e),
            Self::TooLong(ref e) => fmt::Display::fmt(e, f),
            Self::InvalidLength(ref e) => fmt::Display::fmt(e, f),
            Self::ChecksumMismatch(ref e) => write!(f, "address checksum mismatch: {}", e),
            Self::UnknownVersion(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::InvalidEncoding(ref e) => Some(e),
            Self::TooLong(ref e) => Some(e),
            Self::InvalidLength(ref e) => Some(e),
            Self::ChecksumMismatch(ref e) => Some(e),
            Self::UnknownVersion(ref e) => Some(e),
        }
    }
}

impl From<InvalidCharacterError> for ParseError {
    fn from(e: InvalidCharacterError) -> Self { Self::InvalidEncoding(e) }
}

impl From<LegacyAddressTooLongError> for ParseError {
    fn from(e: LegacyAddressTooLongError) -> Self { Self::TooLong(e) }
}

impl From<InvalidBase58PayloadLengthError> for ParseError {
    fn from(e: InvalidBase58PayloadLengthError) -> Self { Self::InvalidLength(e) }
}

impl From<IncorrectChecksumError> for ParseError {
    fn from(e: IncorrectChecksumError) -> Self { Self::ChecksumMismatch(e) }
}

impl From<UnknownVersionError> for ParseError {
    fn from(e: UnknownVersionError) -> Self { Self::UnknownVersion(e) }
}

/// Decoded Base58 data was not 25 bytes (version, 20-byte hash and checksum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBase58PayloadLengthError {
    pub(crate) length: usize,
}

impl InvalidBase58PayloadLengthError {
    /// Returns the length of the decoded data.
    pub fn invalid_base58_payload_length(&self) -> usize { self.length }
}

impl fmt::Display for InvalidBase58PayloadLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decoded base58 data was an invalid length: {} (expected 25)", self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidBase58PayloadLengthError {}

/// Legacy Base58 address was too long, max 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAddressTooLongError {
    pub(crate) length: usize,
}

impl LegacyAddressTooLongError {
    /// Returns the length of the rejected string.
    pub fn invalid_legacy_address_length(&self) -> usize { self.length }
}

impl fmt::Display for LegacyAddressTooLongError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "legacy address is too long: {} (max 50 characters)", self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LegacyAddressTooLongError {}

/// The version byte of a decoded address is not in the version table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVersionError {
    pub(crate) invalid: u8,
}

impl UnknownVersionError {
    /// Returns the unrecognized version byte.
    pub fn invalid_version(&self) -> u8 { self.invalid }
}

impl fmt::Display for UnknownVersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown address version byte {:#04x}", self.invalid)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownVersionError {}

/// Address's network differs from the required one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkValidationError {
    /// Network kind that was required.
    pub(crate) required: NetworkKind,
    /// The address itself.
    pub(crate) address: Address,
}

impl NetworkValidationError {
    /// Returns the network kind that was required.
    pub fn required(&self) -> NetworkKind { self.required }

    /// Returns the rejected address.
    pub fn address(&self) -> &Address { &self.address }
}

impl fmt::Display for NetworkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "address {} belongs to the {} network, {} required",
            self.address,
            self.address.network(),
            self.required
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NetworkValidationError {}

/// Address type is either invalid or not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownAddressTypeError(pub String);

impl fmt::Display for UnknownAddressTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as address type", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAddressTypeError {}
