// SPDX-License-Identifier: CC0-1.0

//! The 4-byte integrity suffix appended to Base58Check payloads.
//!
//! The checksum is the first four bytes of `SHA256(SHA256(payload))`. It protects against typos,
//! not against an adversary, so comparisons are not constant time.

use crate::IncorrectChecksumError;

/// Length in bytes of the checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Computes the checksum of `payload`.
pub fn compute(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = hashes::sha256d::Hash::hash(payload);
    let mut checksum = [0; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash.as_byte_array()[..CHECKSUM_LEN]);
    checksum
}

/// Returns true if `checksum` is the checksum of `payload`.
pub fn verify(payload: &[u8], checksum: [u8; CHECKSUM_LEN]) -> bool {
    check(payload, checksum).is_ok()
}

/// Checks `checksum` against `payload`, reporting both values on mismatch.
pub fn check(payload: &[u8], checksum: [u8; CHECKSUM_LEN]) -> Result<(), IncorrectChecksumError> {
    let expected = compute(payload);
    if expected == checksum {
        Ok(())
    } else {
        Err(IncorrectChecksumError { incorrect: checksum, expected })
    }
}

/// Splits the trailing checksum off `data`.
///
/// Returns `None` if `data` is shorter than [`CHECKSUM_LEN`].
pub fn split_checksum(data: &[u8]) -> Option<(&[u8], [u8; CHECKSUM_LEN])> {
    let split = data.len().checked_sub(CHECKSUM_LEN)?;
    let (payload, tail) = data.split_at(split);
    let mut checksum = [0; CHECKSUM_LEN];
    checksum.copy_from_slice(tail);
    Some((payload, checksum))
}
