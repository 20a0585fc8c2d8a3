//! Library surface of the `registrar` binary.
//!
//! The actual registry semantics live in `registrar-core`; this crate is
//! thin glue: parsing `address=description` batch arguments and persisting
//! the registry as a JSON snapshot on disk. Split out as a lib so the
//! integration suite can drive the same code paths the binary uses.

pub mod batch;
pub mod store;

pub use batch::EntrySpec;
