//! Tests for [`HistoryStore`] mutation rules and invariants.

use std::collections::HashSet;

use super::fixtures::*;
use crate::clipboard::Fingerprint;
use crate::history::HistoryStore;
use crate::ids::EntryId;

#[test]
fn test_upsert_appends_new_entries_most_recent_last() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "first"));
    store.upsert(text_entry("b", 2, "second"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, EntryId::from("b"), "most recent first");
    assert_eq!(snapshot[1].id, EntryId::from("a"));
}

#[test]
fn test_dedup_invariant_distinct_fingerprints_equal_entry_count() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "hello"));
    store.upsert(text_entry("b", 2, "world"));
    store.upsert(text_entry("c", 3, "hello"));
    store.upsert(image_entry("d", 4, vec![1, 2, 3]));
    store.upsert(image_entry("e", 5, vec![1, 2, 3]));

    let snapshot = store.snapshot();
    let fingerprints: HashSet<_> = snapshot.iter().map(|e| e.fingerprint.clone()).collect();
    assert_eq!(fingerprints.len(), snapshot.len());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_upsert_existing_fingerprint_never_grows_the_store() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "hello"));
    for n in 0..5 {
        store.upsert(text_entry(&format!("dup-{n}"), 10 + n as i64, "hello"));
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn test_recency_invariant_upserted_fingerprint_is_first_in_snapshot() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "one"));
    store.upsert(text_entry("b", 2, "two"));
    store.upsert(text_entry("c", 3, "three"));

    // Re-observe the oldest entry.
    store.upsert(text_entry("x", 4, "one"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot[0].fingerprint, Fingerprint::of_text("one"));
}

#[test]
fn test_promotion_preserves_id_and_created_at() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("original", 100, "hello"));
    store.upsert(text_entry("other", 200, "unrelated"));

    // Same fingerprint, different id and timestamp, as produced when the
    // classifier runs again on a re-copy.
    let returned = store.upsert(text_entry("newer", 300, "hello"));
    assert_eq!(returned, EntryId::from("original"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot[0].id, EntryId::from("original"));
    assert_eq!(snapshot[0].created_at.timestamp(), 100, "first-seen time retained");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_remove_deletes_by_id() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "one"));
    store.upsert(text_entry("b", 2, "two"));

    store.remove(&EntryId::from("a"));
    assert_eq!(store.len(), 1);
    assert!(store.get(&EntryId::from("a")).is_none());
    assert!(store.get(&EntryId::from("b")).is_some());
}

#[test]
fn test_remove_of_absent_id_leaves_store_identical() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "one"));
    store.upsert(link_entry("b", 2, "https://example.com"));
    let before = store.snapshot();

    store.remove(&EntryId::from("no-such-id"));
    assert_eq!(store.snapshot(), before, "order and contents unchanged");

    store.remove(&EntryId::from("no-such-id"));
    assert_eq!(store.snapshot(), before, "repeat no-op stays a no-op");
}

#[test]
fn test_remove_on_empty_store_is_a_noop() {
    let mut store = HistoryStore::new();
    store.remove(&EntryId::from("anything"));
    assert!(store.is_empty());
}

#[test]
fn test_clear_empties_snapshot_but_not_active() {
    let mut store = HistoryStore::new();
    store.upsert(text_entry("a", 1, "one"));
    store.set_active(Some(Fingerprint::of_text("one")));

    store.clear();
    assert!(store.snapshot().is_empty());
    assert_eq!(store.active(), Some(&Fingerprint::of_text("one")));

    // Explicit reset is the only thing that clears it.
    store.set_active(None);
    assert_eq!(store.active(), None);
}

#[test]
fn test_active_marker_reassignment() {
    let mut store = HistoryStore::new();
    assert_eq!(store.active(), None);

    store.set_active(Some(Fingerprint::of_text("one")));
    store.set_active(Some(Fingerprint::of_text("two")));
    assert_eq!(store.active(), Some(&Fingerprint::of_text("two")));
}

#[test]
fn test_capacity_evicts_oldest_on_new_fingerprint() {
    let mut store = HistoryStore::with_max_entries(2);
    store.upsert(text_entry("a", 1, "one"));
    store.upsert(text_entry("b", 2, "two"));
    store.upsert(text_entry("c", 3, "three"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, EntryId::from("c"));
    assert_eq!(snapshot[1].id, EntryId::from("b"));
    assert!(!store.contains_fingerprint(&Fingerprint::of_text("one")));
}

#[test]
fn test_capacity_promotion_does_not_evict() {
    let mut store = HistoryStore::with_max_entries(2);
    store.upsert(text_entry("a", 1, "one"));
    store.upsert(text_entry("b", 2, "two"));

    // Re-copy of an existing fingerprint at the cap: promote, never evict.
    store.upsert(text_entry("x", 3, "one"));
    assert_eq!(store.len(), 2);
    assert!(store.contains_fingerprint(&Fingerprint::of_text("two")));
    assert_eq!(store.snapshot()[0].id, EntryId::from("a"));
}

#[test]
fn test_zero_max_entries_means_unbounded() {
    let mut store = HistoryStore::with_max_entries(0);
    for n in 0..100 {
        store.upsert(text_entry(&format!("id-{n}"), n as i64, &format!("content {n}")));
    }
    assert_eq!(store.len(), 100);
}
