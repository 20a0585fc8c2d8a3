//! Serde bridge between a live [`Registry`] and host-chosen storage.
//!
//! The core never performs IO and never picks a persistence engine; a host
//! converts the registry to a snapshot and serializes it however it likes
//! (the bundled CLI uses JSON). Snapshots capture durable state only:
//! pending, undrained events are deliberately not carried across.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use registrar_types::Address;

use crate::Registry;

/// The durable state of a registry: owner plus entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub owner: Address,
    #[serde(default)]
    pub entries: BTreeMap<Address, String>,
}

impl RegistrySnapshot {
    /// Rehydrate a registry from this snapshot with an empty event queue.
    #[must_use]
    pub fn into_registry(self) -> Registry {
        Registry::from_parts(self.owner, self.entries)
    }
}

impl From<&Registry> for RegistrySnapshot {
    fn from(registry: &Registry) -> Self {
        Self {
            owner: registry.owner(),
            entries: registry.entries().clone(),
        }
    }
}
