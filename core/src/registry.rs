//! The registry state machine: one owner, a unique-keyed entry map, and an
//! event queue.
//!
//! Mutations take `&mut self`, so the borrow checker supplies the
//! single-writer discipline the contract assumes: calls are totally ordered
//! and no caller can observe a half-applied mutation. Every mutating
//! operation validates completely before touching state, which is what makes
//! the batch add all-or-nothing.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use registrar_types::{Address, RegistryError, RegistryEvent};

/// An owner-gated map from address to description.
///
/// Constructed once with the deployer's identity as the initial owner.
/// There is no teardown: a registry simply stops receiving calls.
///
/// The empty string doubles as the "absent" sentinel on [`Registry::lookup`]
/// for compatibility with the original interface; [`Registry::get`] is the
/// unambiguous alternative.
#[derive(Debug, Clone)]
pub struct Registry {
    owner: Address,
    entries: BTreeMap<Address, String>,
    events: Vec<RegistryEvent>,
}

impl Registry {
    /// Create a registry owned by `owner` with no entries.
    ///
    /// The initial owner is trusted as supplied; a zero initial owner
    /// produces a registry no one can ever mutate.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            entries: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub(crate) fn from_parts(owner: Address, entries: BTreeMap<Address, String>) -> Self {
        Self {
            owner,
            entries,
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Reads (public, infallible)
    // ------------------------------------------------------------------

    /// The current owner identity.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Whether `caller` is the current owner.
    #[must_use]
    pub fn is_owner(&self, caller: Address) -> bool {
        caller == self.owner
    }

    /// The stored description for `address`, or the empty string if there
    /// is no entry. Never fails; callers that need to distinguish "absent"
    /// from "present but empty" should use [`Registry::get`].
    #[must_use]
    pub fn lookup(&self, address: Address) -> &str {
        self.entries.get(&address).map_or("", String::as_str)
    }

    /// The stored description for `address`, or `None` if there is no entry.
    #[must_use]
    pub fn get(&self, address: Address) -> Option<&str> {
        self.entries.get(&address).map(String::as_str)
    }

    /// Whether an entry exists for `address`.
    #[must_use]
    pub fn contains(&self, address: Address) -> bool {
        self.entries.contains_key(&address)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in address order.
    pub fn iter(&self) -> impl Iterator<Item = (Address, &str)> {
        self.entries.iter().map(|(addr, desc)| (*addr, desc.as_str()))
    }

    pub(crate) fn entries(&self) -> &BTreeMap<Address, String> {
        &self.entries
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Events queued by successful mutations since the last drain, oldest
    /// first.
    #[must_use]
    pub fn pending_events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Drain the queued events, leaving the queue empty.
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Mutations (owner-gated, atomic)
    // ------------------------------------------------------------------

    /// Fail with [`RegistryError::Unauthorized`] unless `caller` is the
    /// owner. Every mutation runs this before inspecting any other state,
    /// so an unauthorized call learns nothing about which entries exist.
    pub fn require_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized { caller })
        }
    }

    /// Add a batch of entries, all-or-nothing.
    ///
    /// `addresses` and `descriptions` pair up positionally and must have
    /// equal lengths. If any address already has an entry, or appears twice
    /// within the batch, the whole call fails and nothing is committed. An
    /// empty batch succeeds without changing state or emitting events.
    pub fn add_entries(
        &mut self,
        caller: Address,
        addresses: Vec<Address>,
        descriptions: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        if addresses.len() != descriptions.len() {
            return Err(RegistryError::LengthMismatch {
                addresses: addresses.len(),
                descriptions: descriptions.len(),
            });
        }

        // Validate the whole batch before committing any of it.
        let mut seen = HashSet::with_capacity(addresses.len());
        for address in &addresses {
            if self.entries.contains_key(address) || !seen.insert(*address) {
                return Err(RegistryError::DuplicateEntry { address: *address });
            }
        }

        let count = addresses.len();
        for (address, description) in addresses.into_iter().zip(descriptions) {
            self.entries.insert(address, description.clone());
            self.events.push(RegistryEvent::EntryAdded {
                address,
                description,
            });
        }
        debug!(count, "batch add committed");
        Ok(())
    }

    /// Replace the description of an existing entry.
    ///
    /// Fails with [`RegistryError::UnchangedDescription`] when the new
    /// description is byte-identical to the stored one, so a stale caller
    /// cannot mistake a no-op write for progress.
    pub fn update_entry(
        &mut self,
        caller: Address,
        address: Address,
        description: String,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        let Some(current) = self.entries.get_mut(&address) else {
            return Err(RegistryError::NotFound { address });
        };
        if *current == description {
            return Err(RegistryError::UnchangedDescription { address });
        }

        *current = description.clone();
        self.events.push(RegistryEvent::EntryUpdated {
            address,
            description,
        });
        debug!(%address, "entry updated");
        Ok(())
    }

    /// Delete an existing entry. A subsequent [`Registry::lookup`] for the
    /// address returns the absent sentinel.
    pub fn remove_entry(&mut self, caller: Address, address: Address) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        if self.entries.remove(&address).is_none() {
            return Err(RegistryError::NotFound { address });
        }

        self.events.push(RegistryEvent::EntryRemoved { address });
        debug!(%address, "entry removed");
        Ok(())
    }

    /// Replace the owner identity.
    ///
    /// The zero address is rejected: no operation exists to recover a
    /// registry whose owner can never authenticate. On success the previous
    /// owner immediately loses all mutation rights.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        if new_owner.is_zero() {
            return Err(RegistryError::InvalidOwner);
        }

        let previous = std::mem::replace(&mut self.owner, new_owner);
        self.events.push(RegistryEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        debug!(%previous, %new_owner, "ownership transferred");
        Ok(())
    }
}
