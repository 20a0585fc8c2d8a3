//! Core domain types for Registrar.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application: the identity/identifier type ([`Address`]), the registry
//! error taxonomy ([`RegistryError`]), and the notification events emitted
//! by successful mutations ([`RegistryEvent`]).

mod address;
mod error;
mod event;

pub use address::{Address, AddressParseError};
pub use error::RegistryError;
pub use event::RegistryEvent;
