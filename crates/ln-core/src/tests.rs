//! Unit tests for ln-core primitives.

#[cfg(test)]
mod routes {
    use crate::{ParseRouteError, RouteId};

    #[test]
    fn display_and_parse_roundtrip() {
        let r = RouteId(3);
        assert_eq!(r.to_string(), "Route 3");
        assert_eq!("Route 3".parse::<RouteId>().unwrap(), r);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "Highway 3".parse::<RouteId>(),
            Err(ParseRouteError("Highway 3".to_string()))
        );
        assert!("Route x".parse::<RouteId>().is_err());
        assert!("Route 0".parse::<RouteId>().is_err());
        assert!("Route ".parse::<RouteId>().is_err());
    }

    #[test]
    fn ordering_follows_route_number() {
        assert!(RouteId(1) < RouteId(2));
        assert!(RouteId(9) > RouteId(8));
    }

    #[test]
    fn universe_is_ascending_one_based() {
        let u = RouteId::universe(4);
        assert_eq!(u, vec![RouteId(1), RouteId(2), RouteId(3), RouteId(4)]);
    }

    #[test]
    fn serde_wire_form_is_display_string() {
        let json = serde_json::to_string(&RouteId(7)).unwrap();
        assert_eq!(json, "\"Route 7\"");
        let back: RouteId = serde_json::from_str("\"Route 7\"").unwrap();
        assert_eq!(back, RouteId(7));
    }
}

#[cfg(test)]
mod time {
    use chrono::{TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    use crate::Tick;
    use crate::time::utc_z;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10) + 5, Tick(15));
    }

    #[test]
    fn cadence_check() {
        assert!(Tick(2).on_cadence(2));
        assert!(!Tick(3).on_cadence(2));
        assert!(Tick(0).on_cadence(2));
    }

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "utc_z")]
        at: chrono::DateTime<Utc>,
    }

    #[test]
    fn utc_z_has_trailing_z() {
        let at = Utc.with_ymd_and_hms(2026, 8, 6, 9, 41, 0).unwrap();
        let json = serde_json::to_string(&Stamped { at }).unwrap();
        assert_eq!(json, r#"{"at":"2026-08-06T09:41:00.000000Z"}"#);
    }

    #[test]
    fn utc_z_roundtrip() {
        let at = Utc.with_ymd_and_hms(2026, 8, 6, 9, 41, 0).unwrap();
        let json = serde_json::to_string(&Stamped { at }).unwrap();
        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
    }
}

#[cfg(test)]
mod disruption {
    use chrono::Utc;

    use crate::{Disruption, DisruptionKind, RouteId, Severity};

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&DisruptionKind::Weather).unwrap(),
            "\"weather\""
        );
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn kind_field_serializes_as_type() {
        let d = Disruption {
            kind: DisruptionKind::Accident,
            location: RouteId(2),
            severity: Severity::Medium,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["type"], "accident");
        assert_eq!(value["location"], "Route 2");
        assert_eq!(value["severity"], "medium");
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn title_case_narration_form() {
        assert_eq!(DisruptionKind::Traffic.title_case(), "Traffic");
    }
}

#[cfg(test)]
mod log {
    use crate::LogEntry;

    #[test]
    fn details_mirror_explanation() {
        let entry = LogEntry::new("InventoryAgent", "restock", "Store A", "Restocked 3 units");
        assert_eq!(entry.details, entry.explanation);
        assert_eq!(entry.agent, "InventoryAgent");
        assert_eq!(entry.action, "restock");
    }

    #[test]
    fn wire_shape_has_all_six_fields() {
        let entry = LogEntry::new("RouteAgent", "reroute", "Truck A", "Rerouted Truck A");
        let value = serde_json::to_value(&entry).unwrap();
        for field in ["timestamp", "agent", "action", "target", "details", "explanation"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn choose_on_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn child_streams_are_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }
}
