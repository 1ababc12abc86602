use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;

use challenge_core::models::TrackerRecord;
use challenge_core::traits::ITrackerStore;
use challenge_core::Preset;
use challenge_tracker::{FailureTracker, JsonFileStore, MemoryStore, TrackerOutcome};

fn arb_record() -> impl Strategy<Value = TrackerRecord> {
    (
        "[a-z_]{1,12}",
        prop::option::of(0i64..4_000_000_000),
        0u32..50,
    )
        .prop_map(|(id, secs, failures)| TrackerRecord {
            customer_id: id,
            last_notified_at: secs.and_then(|s| Utc.timestamp_opt(s, 0).single()),
            consecutive_failures: failures,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn json_round_trip_preserves_records(records in prop::collection::vec(arb_record(), 0..8)) {
        let records: Vec<TrackerRecord> = records.into_iter().filter(|r| !r.is_empty()).collect();
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        store.save(&records).unwrap();
        prop_assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn count_never_reaches_threshold_without_notifying(
        outcomes in prop::collection::vec(any::<bool>(), 1..40),
    ) {
        let config = Preset::Harsh.config().tracker;
        let min = config.min_failures_before_message;
        let mut tracker = FailureTracker::new(config, Box::new(MemoryStore::new()));
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap();
        for (day, succeeded) in outcomes.into_iter().enumerate() {
            // a week between searches, so the cooldown never blocks
            let now = start + Duration::days(7 * day as i64);
            match tracker.observe("austin", succeeded, now) {
                TrackerOutcome::Pending { failures } => prop_assert!(failures < min),
                TrackerOutcome::Notify { failures } => prop_assert_eq!(failures, min),
                TrackerOutcome::Reset => prop_assert!(succeeded),
                TrackerOutcome::Disabled => prop_assert!(false, "tracker is enabled"),
            }
            prop_assert!(tracker.failure_count("austin") < min);
        }
    }
}
