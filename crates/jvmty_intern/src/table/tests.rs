#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn both_strategies() -> [KindTable<String>; 2] {
    [
        KindTable::new(InternStrategy::Concurrent),
        KindTable::new(InternStrategy::Locked),
    ]
}

#[test]
fn acquire_returns_existing_live_value() {
    for table in both_strategies() {
        let first = table.acquire_with("a", || Arc::new("a".to_owned()));
        let second = table.acquire_with("a", || Arc::new("a".to_owned()));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(table.approx_len(), 1);
    }
}

#[test]
fn make_is_not_called_on_hit() {
    for table in both_strategies() {
        let held = table.acquire_with("key", || Arc::new("key".to_owned()));
        let again = table.acquire_with("key", || panic!("value already interned"));
        assert!(Arc::ptr_eq(&held, &again));
    }
}

#[test]
fn find_does_not_insert() {
    for table in both_strategies() {
        assert!(table.find("missing").is_none());
        assert_eq!(table.approx_len(), 0);
    }
}

#[test]
fn dead_entry_is_replaced() {
    for table in both_strategies() {
        drop(table.acquire_with("x", || Arc::new("x".to_owned())));

        assert!(table.find("x").is_none());
        let second = table.acquire_with("x", || Arc::new("x".to_owned()));
        assert_eq!(second.as_str(), "x");
        // Still a single entry: the dead one was overwritten in place.
        assert_eq!(table.approx_len(), 1);
    }
}

#[test]
fn purge_removes_only_dead_entries() {
    for table in both_strategies() {
        let kept = table.acquire_with("kept", || Arc::new("kept".to_owned()));
        for i in 0..10 {
            let key = format!("dropped{i}");
            drop(table.acquire_with(&key, || Arc::new(key.clone())));
        }
        assert_eq!(table.approx_len(), 11);

        assert_eq!(table.purge(), 10);
        assert_eq!(table.approx_len(), 1);
        assert!(Arc::ptr_eq(&table.find("kept").unwrap(), &kept));
    }
}

#[test]
fn locked_table_purges_inline_when_doubled() {
    let table: KindTable<String> = KindTable::new(InternStrategy::Locked);
    for i in 0..(MIN_LOCKED_PURGE * 4) {
        let key = format!("v{i}");
        drop(table.acquire_with(&key, || Arc::new(key.clone())));
    }
    // Every value died immediately, so inline purges keep the table small.
    assert!(table.approx_len() < MIN_LOCKED_PURGE);
}

#[test]
fn kind_name_is_value_type() {
    let table: KindTable<String> = KindTable::new(InternStrategy::Concurrent);
    assert_eq!(table.kind_name(), std::any::type_name::<String>());
}
