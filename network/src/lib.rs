// SPDX-License-Identifier: CC0-1.0

//! Network identifiers for legacy addresses.
//!
//! Two types live here:
//!
//! * [`NetworkKind`] is what an address carries. Every test chain shares the same version bytes, so
//!   an encoded address can only tell mainnet from "some test network".
//! * [`Network`] is the chain a caller is configured for. It converts into a [`NetworkKind`] and
//!   is accepted wherever an address constructor asks for one.

#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(test(attr(warn(unused))))]
// Coding conventions.
#![warn(missing_docs)]
#![warn(deprecated_in_future)]
#![allow(clippy::uninlined_format_args)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// The network an address belongs to, as far as its version byte can tell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetworkKind {
    /// The main network.
    Main,
    /// Any test network (testnet, signet or regtest).
    Test,
}

impl NetworkKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 2] = [Self::Main, Self::Test];

    /// Returns true if this is the main network.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn is_mainnet(&self) -> bool { *self == Self::Main }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for NetworkKind {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Test),
            _ => Err(ParseNetworkError::new(s)),
        }
    }
}

impl From<Network> for NetworkKind {
    fn from(n: Network) -> Self { n.kind() }
}

/// A chain a node or wallet can be configured for.
///
/// Testnet, signet and regtest all map to [`NetworkKind::Test`], so every variant can carry an
/// address and none is rejected at construction.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub enum Network {
    /// The main network.
    Bitcoin,
    /// The public test network (testnet3).
    Testnet,
    /// The signet test network.
    Signet,
    /// A private regression test network.
    Regtest,
}

impl Network {
    /// All networks, in declaration order.
    pub const ALL: [Self; 4] = [Self::Bitcoin, Self::Testnet, Self::Signet, Self::Regtest];

    /// Returns the address-level kind of this network.
    pub const fn kind(self) -> NetworkKind {
        match self {
            Self::Bitcoin => NetworkKind::Main,
            Self::Testnet | Self::Signet | Self::Regtest => NetworkKind::Test,
        }
    }

    /// Returns the conventional `-chain` argument naming this network.
    pub const fn to_core_arg(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Testnet => "testnet",
            Self::Signet => "signet",
            Self::Regtest => "regtest",
        }
    }

    /// Parses a `-chain` argument name.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.to_core_arg() == core_arg)
            .ok_or_else(|| ParseNetworkError::new(core_arg))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.to_core_arg()) }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_core_arg(s) }
}

/// An error in parsing a network string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseNetworkError(String);

impl ParseNetworkError {
    fn new(input: &str) -> Self { Self(String::from(input)) }
}

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseNetworkError {}

#[cfg(feature = "serde")]
macro_rules! impl_serde_as_str {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct StrVisitor;

                impl Visitor<'_> for StrVisitor {
                    type Value = $ty;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$ty, E>
                    where
                        E: serde::de::Error,
                    {
                        value.parse::<$ty>().map_err(|_| {
                            E::invalid_value(serde::de::Unexpected::Str(value), &self)
                        })
                    }
                }

                deserializer.deserialize_str(StrVisitor)
            }
        }
    };
}

#[cfg(feature = "serde")]
impl_serde_as_str!(Network, "a network name (bitcoin, testnet, signet or regtest)");
#[cfg(feature = "serde")]
impl_serde_as_str!(NetworkKind, "a network kind (main or test)");
