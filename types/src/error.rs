//! The registry error taxonomy.
//!
//! Every failure a mutating operation can signal. All variants are terminal
//! for the call that raised them: no state change and no events are
//! observable afterwards.

use thiserror::Error;

use crate::Address;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The caller is not the current owner. Raised before any other
    /// validation so unauthorized callers learn nothing about the entries.
    #[error("caller {caller} is not the owner")]
    Unauthorized { caller: Address },

    /// A batch add referenced an address that already has an entry
    /// (either pre-existing or earlier in the same batch).
    #[error("entry for {address} already exists")]
    DuplicateEntry { address: Address },

    /// A batch add supplied address and description sequences of
    /// different lengths.
    #[error("batch has {addresses} address(es) but {descriptions} description(s)")]
    LengthMismatch { addresses: usize, descriptions: usize },

    /// Update or remove targeted an address with no entry.
    #[error("no entry for {address}")]
    NotFound { address: Address },

    /// Update supplied a description byte-identical to the stored one.
    #[error("new description for {address} is identical to the current one")]
    UnchangedDescription { address: Address },

    /// Ownership transfer targeted the zero address, which would orphan
    /// the registry permanently.
    #[error("new owner must not be the zero address")]
    InvalidOwner,
}
