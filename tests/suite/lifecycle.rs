//! End-to-end registry lifecycle scenarios across the crate boundary.
//!
//! These mirror the behavior the original wallet UI depended on: batches
//! are all-or-nothing, reads never fail, and an ownership transfer cuts the
//! old owner off immediately.

use registrar_core::Registry;
use registrar_types::{Address, RegistryError, RegistryEvent};

use crate::common::{addr, owner, registry_with};

#[test]
fn full_session_add_update_remove_transfer() {
    let mut registry = Registry::new(owner());

    registry
        .add_entries(
            owner(),
            vec![addr(1), addr(2)],
            vec!["token vault".to_string(), "price oracle".to_string()],
        )
        .unwrap();
    assert_eq!(registry.lookup(addr(1)), "token vault");

    registry
        .update_entry(owner(), addr(1), "token vault v2".to_string())
        .unwrap();
    registry.remove_entry(owner(), addr(2)).unwrap();
    assert_eq!(registry.lookup(addr(2)), "");

    let heir = addr(0x42);
    registry.transfer_ownership(owner(), heir).unwrap();
    assert_eq!(registry.owner(), heir);

    // Old owner is out, heir is in.
    assert_eq!(
        registry.remove_entry(owner(), addr(1)),
        Err(RegistryError::Unauthorized { caller: owner() })
    );
    registry.remove_entry(heir, addr(1)).unwrap();
    assert!(registry.is_empty());

    // One event per committed mutation, in order.
    let kinds: Vec<_> = registry
        .take_events()
        .into_iter()
        .map(|event| match event {
            RegistryEvent::EntryAdded { .. } => "added",
            RegistryEvent::EntryUpdated { .. } => "updated",
            RegistryEvent::EntryRemoved { .. } => "removed",
            RegistryEvent::OwnershipTransferred { .. } => "transferred",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "added",
            "updated",
            "removed",
            "transferred",
            "removed",
            "removed"
        ]
    );
}

#[test]
fn failed_batch_leaves_no_trace_for_fresh_addresses() {
    let mut registry = registry_with(&[(1, "x")]);

    let err = registry
        .add_entries(
            owner(),
            vec![addr(1), addr(2), addr(3)],
            vec!["y".to_string(), "z".to_string(), "w".to_string()],
        )
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateEntry { address: addr(1) });

    // None of the fresh addresses were committed and nothing was emitted.
    assert_eq!(registry.lookup(addr(2)), "");
    assert_eq!(registry.lookup(addr(3)), "");
    assert_eq!(registry.len(), 1);
    assert!(registry.pending_events().is_empty());
}

#[test]
fn non_owner_is_rejected_uniformly_across_all_mutations() {
    let mut registry = registry_with(&[(1, "x")]);
    let intruder = addr(0x99);
    let unauthorized = RegistryError::Unauthorized { caller: intruder };

    assert_eq!(
        registry.add_entries(intruder, vec![addr(5)], vec!["y".to_string()]),
        Err(unauthorized.clone())
    );
    assert_eq!(
        registry.update_entry(intruder, addr(1), "y".to_string()),
        Err(unauthorized.clone())
    );
    assert_eq!(registry.remove_entry(intruder, addr(1)), Err(unauthorized.clone()));
    assert_eq!(
        registry.transfer_ownership(intruder, addr(5)),
        Err(unauthorized)
    );

    assert_eq!(registry.owner(), owner());
    assert_eq!(registry.lookup(addr(1)), "x");
}

#[test]
fn reads_are_public_and_infallible() {
    let registry = registry_with(&[(1, "x")]);

    // No identity is needed to read; absent addresses yield the sentinel.
    assert_eq!(registry.lookup(addr(1)), "x");
    assert_eq!(registry.lookup(Address::ZERO), "");
    assert_eq!(registry.owner(), owner());
}
