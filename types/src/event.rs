//! Notification events emitted by successful registry mutations.
//!
//! Events are an explicit output of the core rather than a side channel:
//! the registry queues them during a successful call and the hosting layer
//! drains and renders (or forwards) them. A failed call emits nothing.

use crate::Address;

/// An observable signal that a mutation committed.
///
/// This is a closed enum - only registry code constructs these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// An entry was added as part of a batch. One event per address.
    EntryAdded {
        address: Address,
        description: String,
    },
    /// An existing entry's description was replaced.
    EntryUpdated {
        address: Address,
        description: String,
    },
    /// An entry was deleted.
    EntryRemoved { address: Address },
    /// The owner identity changed. Carries both sides of the transition.
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },
}

impl RegistryEvent {
    /// Format the event as a human-readable line for presentation layers.
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::EntryAdded {
                address,
                description,
            } => format!("added {address}: {description:?}"),
            Self::EntryUpdated {
                address,
                description,
            } => format!("updated {address}: {description:?}"),
            Self::EntryRemoved { address } => format!("removed {address}"),
            Self::OwnershipTransferred { previous, new } => {
                format!("ownership transferred from {previous} to {new}")
            }
        }
    }
}
