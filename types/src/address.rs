//! The 20-byte address type used for both entry identifiers and owner
//! identities.
//!
//! Addresses render as `0x`-prefixed lowercase hex and parse
//! case-insensitively. The all-zero address is reserved: it is never a
//! valid owner (a registry owned by it could never be mutated again).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of raw bytes in an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// A fixed-size, opaque, comparable identity value.
///
/// Serializes as its hex string form so it can be used directly as a JSON
/// map key or a TOML value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must be {expected} hex digits, got {got}")]
    BadLength { expected: usize, got: usize },
    #[error("invalid hex digit {0:?} in address")]
    InvalidDigit(char),
}

impl Address {
    /// The all-zero address. Reserved as the "no identity" value.
    pub const ZERO: Self = Self([0; ADDRESS_LEN]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; ADDRESS_LEN]
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressParseError::MissingPrefix)?;
        if digits.chars().count() != ADDRESS_LEN * 2 {
            return Err(AddressParseError::BadLength {
                expected: ADDRESS_LEN * 2,
                got: digits.chars().count(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, .. } => AddressParseError::InvalidDigit(c),
            // Unreachable after the length check above; map to the length
            // error rather than panicking.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                AddressParseError::BadLength {
                    expected: ADDRESS_LEN * 2,
                    got: digits.chars().count(),
                }
            }
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}
