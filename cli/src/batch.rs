//! Parsing of `address=description` batch arguments.

use std::str::FromStr;

use thiserror::Error;

use registrar_types::{Address, AddressParseError};

/// One `address=description` pair from the command line.
///
/// The description may contain further `=` characters; only the first one
/// splits. An empty description (`0x...=`) is accepted, matching what the
/// registry itself allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub address: Address,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntrySpecError {
    #[error("expected address=description, got {0:?}")]
    MissingSeparator(String),
    #[error(transparent)]
    BadAddress(#[from] AddressParseError),
}

impl FromStr for EntrySpec {
    type Err = EntrySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, description) = s
            .split_once('=')
            .ok_or_else(|| EntrySpecError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            address: address.parse()?,
            description: description.to_string(),
        })
    }
}

/// Split parsed specs into the parallel sequences the core's batch add
/// takes.
#[must_use]
pub fn into_columns(specs: Vec<EntrySpec>) -> (Vec<Address>, Vec<String>) {
    specs
        .into_iter()
        .map(|spec| (spec.address, spec.description))
        .unzip()
}
