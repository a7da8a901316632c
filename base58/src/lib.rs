// SPDX-License-Identifier: CC0-1.0

//! Base58 encoder and decoder.
//!
//! Base58 renders a byte string as a big-endian number written with 58 symbols, leaving out the
//! characters that are easily confused when read or written by hand (`0`, `O`, `I` and `l`).
//!
//! Leading zero bytes are not part of the number: each one is written as a leading `1` (the zero
//! digit) and each leading `1` decodes back into a zero byte, so the encoding is lossless for any
//! input.
//!
//! This crate can be used in a no-std environment but requires an allocator.

// NB: This crate is empty if `alloc` is not enabled.
#![cfg(feature = "alloc")]
#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
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

pub mod checksum;
pub mod error;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::error::{IncorrectChecksumError, InvalidCharacterError};

/// The Base58 alphabet, indexed by digit value.
const BASE58_CHARS: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup from an ASCII byte to its digit value.
const BASE58_DIGITS: [Option<u8>; 128] = {
    let mut table = [None; 128];
    let mut i = 0;
    while i < BASE58_CHARS.len() {
        table[BASE58_CHARS[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
};

/// Decodes a Base58 string into a byte vector.
///
/// Every leading `1` becomes one leading zero byte, the remaining digits are decoded as a
/// big-endian number. The empty string decodes to an empty vector.
///
/// # Errors
///
/// If `data` contains any character outside the Base58 alphabet (including any non-ASCII
/// character).
pub fn decode(data: &str) -> Result<Vec<u8>, InvalidCharacterError> {
    let bytes = data.as_bytes();
    let zeros = bytes.iter().take_while(|&&b| b == BASE58_CHARS[0]).count();

    // Little-endian base-256 accumulator; 733/1000 > log(58)/log(256).
    let mut scratch: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 733 / 1000 + 1);
    for (position, &ch) in bytes.iter().enumerate().skip(zeros) {
        let digit = BASE58_DIGITS
            .get(usize::from(ch))
            .copied()
            .flatten()
            .ok_or(InvalidCharacterError { invalid: ch, position })?;

        let mut carry = u32::from(digit);
        for byte in scratch.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            scratch.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut ret = Vec::with_capacity(zeros + scratch.len());
    ret.resize(zeros, 0);
    ret.extend(scratch.iter().rev());
    Ok(ret)
}

/// Encodes `data` as a Base58 string.
pub fn encode(data: &[u8]) -> String { encode_iter(data).collect() }

/// Encodes `data` as a Base58 string, appending the 4-byte checksum first.
pub fn encode_check(data: &[u8]) -> String { encode(&with_checksum(data)) }

/// Encodes `data` as Base58 directly into a formatter.
pub fn encode_to_fmt(fmt: &mut impl fmt::Write, data: &[u8]) -> fmt::Result {
    for ch in encode_iter(data) {
        fmt.write_char(ch)?;
    }
    Ok(())
}

/// Encodes `data` plus its 4-byte checksum as Base58 directly into a formatter.
pub fn encode_check_to_fmt(fmt: &mut impl fmt::Write, data: &[u8]) -> fmt::Result {
    encode_to_fmt(fmt, &with_checksum(data))
}

/// Returns the encoded characters, most significant first.
fn encode_iter(data: &[u8]) -> impl Iterator<Item = char> {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 accumulator; 138/100 > log(256)/log(58).
    let mut digits: Vec<u8> = Vec::with_capacity((data.len() - zeros) * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    core::iter::repeat(char::from(BASE58_CHARS[0]))
        .take(zeros)
        .chain(digits.into_iter().rev().map(|d| char::from(BASE58_CHARS[usize::from(d)])))
}

fn with_checksum(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + checksum::CHECKSUM_LEN);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum::compute(data));
    buf
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use hex_lit::hex;

    use super::*;

    #[test]
    fn base58_encode() {
        // Bitcoin Core's base58_encode_decode test data.
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&hex!("61")), "2g");
        assert_eq!(encode(&hex!("626262")), "a3gV");
        assert_eq!(encode(&hex!("636363")), "aPEr");
        assert_eq!(
            encode(&hex!("73696d706c792061206c6f6e6720737472696e67")),
            "2cFupjhnEsSn59qHXstmK2ffpLv2"
        );
        assert_eq!(
            encode(&hex!("00eb15231dfceb60925886b67d065299925915aeb172c06647")),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(encode(&hex!("516b6fcd0f")), "ABnLTmg");
        assert_eq!(encode(&hex!("bf4f89001e670274dd")), "3SEo3LWLoPntC");
        assert_eq!(encode(&hex!("572e4794")), "3EFU7m");
        assert_eq!(encode(&hex!("ecac89cad93923c02321")), "EJDM8drfXA6uyA");
        assert_eq!(encode(&hex!("10c8511e")), "Rt5zm");
        assert_eq!(encode(&hex!("00000000000000000000")), "1111111111");
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
    }

    #[test]
    fn base58_decode() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("2g").unwrap(), hex!("61"));
        assert_eq!(decode("a3gV").unwrap(), hex!("626262"));
        assert_eq!(
            decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L").unwrap(),
            hex!("00eb15231dfceb60925886b67d065299925915aeb172c06647")
        );
        assert_eq!(decode("3SEo3LWLoPntC").unwrap(), hex!("bf4f89001e670274dd"));
        assert_eq!(decode("1111111111").unwrap(), hex!("00000000000000000000"));
        assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
    }

    #[test]
    fn leading_ones_are_zero_bytes() {
        assert_eq!(decode("1").unwrap(), vec![0]);
        assert_eq!(decode("11").unwrap(), vec![0, 0]);
        assert_eq!(decode("1112").unwrap(), vec![0, 0, 0, 1]);
        // A '1' after the first significant digit is an ordinary zero digit.
        assert_eq!(decode("21").unwrap(), vec![58]);
    }

    #[test]
    fn leading_zero_fidelity() {
        for k in [0usize, 1, 2, 5] {
            let mut payload = vec![0u8; k];
            payload.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

            let encoded = encode(&payload);
            let ones = encoded.chars().take_while(|&c| c == '1').count();
            assert_eq!(ones, k, "wrong number of leading ones in {}", encoded);

            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded, payload);
            assert_eq!(decoded.iter().take_while(|&&b| b == 0).count(), k);
        }
    }

    #[test]
    fn invalid_characters() {
        for (s, invalid, position) in [
            ("0", b'0', 0),
            ("1O", b'O', 1),
            ("abcI", b'I', 3),
            ("l", b'l', 0),
            ("11+", b'+', 2),
        ] {
            let err = decode(s).unwrap_err();
            assert_eq!(err.invalid_base58_character(), invalid);
            assert_eq!(err.position(), position);
        }
        // First byte of a multi-byte UTF-8 sequence.
        let err = decode("2g\u{a2}").unwrap_err();
        assert_eq!(err.invalid_base58_character(), 0xc2);
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn encode_to_fmt_matches_encode() {
        let data = hex!("00eb15231dfceb60925886b67d065299925915aeb172c06647");
        let mut s = String::new();
        encode_to_fmt(&mut s, &data).unwrap();
        assert_eq!(s, encode(&data));

        let mut s = String::new();
        encode_check_to_fmt(&mut s, &data[..21]).unwrap();
        assert_eq!(s, encode_check(&data[..21]));
    }

    #[test]
    fn base58_encode_check() {
        let payload = hex!("00e34cce70c86373273efcc54ce7d2a491bb4a0e84");
        assert_eq!(encode_check(&payload), "1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX");

        let decoded = decode("1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX").unwrap();
        assert_eq!(decoded.len(), 25);
        assert_eq!(&decoded[..21], &payload[..]);
        assert_eq!(decoded[21..], checksum::compute(&payload));
    }
}
