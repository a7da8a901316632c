// SPDX-License-Identifier: CC0-1.0

//! Error types for Base58 decoding and checksum verification.

use core::fmt;

/// Found an invalid Base58 character while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharacterError {
    pub(crate) invalid: u8,
    pub(crate) position: usize,
}

impl InvalidCharacterError {
    /// Returns the offending byte (for non-ASCII characters, the first byte of its UTF-8 form).
    pub fn invalid_base58_character(&self) -> u8 { self.invalid }

    /// Returns the byte offset of the offending character in the input string.
    pub fn position(&self) -> usize { self.position }
}

impl fmt::Display for InvalidCharacterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid base58 character {:#04x} at position {}", self.invalid, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharacterError {}

/// Checksum was not correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncorrectChecksumError {
    /// The incorrect checksum.
    pub(crate) incorrect: [u8; 4],
    /// The expected checksum.
    pub(crate) expected: [u8; 4],
}

impl IncorrectChecksumError {
    /// Returns the checksum embedded in the decoded data.
    pub fn incorrect_checksum(&self) -> [u8; 4] { self.incorrect }

    /// Returns the checksum computed over the payload.
    pub fn expected_checksum(&self) -> [u8; 4] { self.expected }
}

impl fmt::Display for IncorrectChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "base58 checksum {:#010x} does not match expected {:#010x}",
            u32::from_be_bytes(self.incorrect),
            u32::from_be_bytes(self.expected),
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IncorrectChecksumError {}
