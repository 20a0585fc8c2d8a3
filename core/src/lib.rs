//! Owner-gated registry state machine.
//!
//! This crate contains the one component with real design content: the
//! [`Registry`], an in-memory map from [`Address`](registrar_types::Address)
//! to a free-text description, where every mutation is gated behind a single
//! owner identity. All operations are synchronous, atomic, and free of IO;
//! persistence and transport are the hosting layer's business (see
//! [`RegistrySnapshot`] for the serde bridge).

mod registry;
mod snapshot;

pub use registry::Registry;
pub use snapshot::RegistrySnapshot;
