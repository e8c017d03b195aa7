//! Tests for the store backends.

use std::collections::BTreeMap;

use chrono::Utc;
use ln_core::{
    Disruption, DisruptionKind, DisruptionsDoc, LogEntry, RouteAssignment, RouteId, Severity,
    StoreLevel,
};

use crate::{Domain, JsonDirStore, MemoryStore, StateStore, StoreError};

fn sample_inventory() -> BTreeMap<String, StoreLevel> {
    BTreeMap::from([
        ("Store A".to_string(), StoreLevel { stock: 2, threshold: 5 }),
        ("Store B".to_string(), StoreLevel { stock: 6, threshold: 5 }),
    ])
}

fn sample_disruption(route: u16) -> Disruption {
    Disruption {
        kind: DisruptionKind::Weather,
        location: RouteId(route),
        severity: Severity::Low,
        timestamp: Utc::now(),
    }
}

// ── JsonDirStore ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_store {
    use super::*;

    #[test]
    fn open_seeds_empty_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();

        assert!(store.load_inventory().unwrap().is_empty());
        assert!(store.load_routes().unwrap().is_empty());
        assert!(store.load_disruptions().unwrap().is_empty());
        assert!(store.load_logs().unwrap().is_empty());
        for domain in Domain::ALL {
            assert!(dir.path().join(domain.file_name()).exists());
        }
    }

    #[test]
    fn save_then_load_roundtrips_each_domain() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();

        let inventory = sample_inventory();
        store.save_inventory(&inventory).unwrap();
        assert_eq!(store.load_inventory().unwrap(), inventory);

        let routes = vec![RouteAssignment {
            truck: "Truck A".to_string(),
            route: RouteId(3),
        }];
        store.save_routes(&routes).unwrap();
        assert_eq!(store.load_routes().unwrap(), routes);

        let disruptions: DisruptionsDoc = [sample_disruption(1), sample_disruption(2)].into();
        store.save_disruptions(&disruptions).unwrap();
        assert_eq!(store.load_disruptions().unwrap(), disruptions);
    }

    #[test]
    fn reopen_preserves_existing_state() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonDirStore::open(dir.path()).unwrap();
            store.save_inventory(&sample_inventory()).unwrap();
        }
        let store = JsonDirStore::open(dir.path()).unwrap();
        assert_eq!(store.load_inventory().unwrap(), sample_inventory());
    }

    #[test]
    fn append_log_grows_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();

        store
            .append_log(&LogEntry::new("InventoryAgent", "restock", "Store A", "x"))
            .unwrap();
        store
            .append_log(&LogEntry::new("RouteAgent", "reroute", "Truck A", "y"))
            .unwrap();

        let logs = store.load_logs().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].action, "restock");
        assert_eq!(logs[1].action, "reroute");
    }

    #[test]
    fn malformed_document_names_the_domain() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();

        // Stock entry missing its `threshold` field.
        std::fs::write(
            dir.path().join(Domain::Inventory.file_name()),
            r#"{"Store A": {"stock": 2}}"#,
        )
        .unwrap();

        let err = store.load_inventory().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert_eq!(err.domain(), Some(Domain::Inventory));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();
        store.save_inventory(&sample_inventory()).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_store {
    use super::*;

    #[test]
    fn loads_are_snapshots() {
        let store = MemoryStore::seeded(sample_inventory(), vec![], DisruptionsDoc::new());
        let mut snapshot = store.load_inventory().unwrap();
        snapshot.insert("Store C".to_string(), StoreLevel { stock: 0, threshold: 1 });

        // Mutating the snapshot must not leak back into the store.
        assert_eq!(store.load_inventory().unwrap().len(), 2);
    }

    #[test]
    fn save_counts_track_per_domain_writes() {
        let store = MemoryStore::new();
        assert_eq!(store.save_count(Domain::Routes), 0);

        store.save_routes(&vec![]).unwrap();
        store.save_routes(&vec![]).unwrap();
        store.save_inventory(&sample_inventory()).unwrap();

        assert_eq!(store.save_count(Domain::Routes), 2);
        assert_eq!(store.save_count(Domain::Inventory), 1);
        assert_eq!(store.save_count(Domain::Disruptions), 0);
    }

    #[test]
    fn append_log_preserves_order() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .append_log(&LogEntry::new("SimEngine", "tick", format!("T{i}"), "step"))
                .unwrap();
        }
        let logs = store.load_logs().unwrap();
        let targets: Vec<_> = logs.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, ["T0", "T1", "T2"]);
    }
}
