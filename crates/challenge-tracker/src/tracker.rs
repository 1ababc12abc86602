use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, warn};

use challenge_core::config::TrackerConfig;
use challenge_core::errors::TrackerError;
use challenge_core::models::TrackerRecord;
use challenge_core::traits::ITrackerStore;

/// What a single request search did to a customer's tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerOutcome {
    /// Tracking is switched off; nothing recorded.
    Disabled,
    /// The search succeeded and the failure count was cleared.
    Reset,
    /// Failure recorded; not yet time to notify.
    Pending { failures: u32 },
    /// Failure threshold reached outside the cooldown. The count was cleared
    /// and the notification time stamped.
    Notify { failures: u32 },
}

/// Failed-request counter keyed by customer id.
///
/// Single-writer: the host calls it from one thread, so it takes `&mut self`
/// and holds no locks.
pub struct FailureTracker {
    config: TrackerConfig,
    store: Box<dyn ITrackerStore>,
    records: BTreeMap<String, TrackerRecord>,
}

impl FailureTracker {
    /// Empty tracker. Call [`load`](Self::load) to pick up persisted state.
    pub fn new(config: TrackerConfig, store: Box<dyn ITrackerStore>) -> Self {
        Self {
            config,
            store,
            records: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Feed the success gate's verdict for one request search.
    pub fn observe(
        &mut self,
        customer_id: &str,
        succeeded: bool,
        now: DateTime<Utc>,
    ) -> TrackerOutcome {
        if !self.config.enabled {
            return TrackerOutcome::Disabled;
        }
        if succeeded {
            self.record_success(customer_id);
            TrackerOutcome::Reset
        } else {
            self.record_failure(customer_id, now)
        }
    }

    /// Count a failed request and decide whether the customer should notify.
    pub fn record_failure(&mut self, customer_id: &str, now: DateTime<Utc>) -> TrackerOutcome {
        if !self.config.enabled {
            return TrackerOutcome::Disabled;
        }
        let min_failures = self.config.min_failures_before_message;
        let cooldown = Duration::days(i64::from(self.config.message_cooldown_days));

        let record = self
            .records
            .entry(customer_id.to_string())
            .or_insert_with(|| TrackerRecord::new(customer_id));
        record.consecutive_failures = record.consecutive_failures.saturating_add(1);
        let failures = record.consecutive_failures;

        let cooled_down = record
            .last_notified_at
            .map_or(true, |last| now.signed_duration_since(last) >= cooldown);

        if failures >= min_failures && cooled_down {
            record.last_notified_at = Some(now);
            record.consecutive_failures = 0;
            info!(customer = customer_id, failures, "request notification due");
            TrackerOutcome::Notify { failures }
        } else {
            debug!(customer = customer_id, failures, cooled_down, "request failure recorded");
            TrackerOutcome::Pending { failures }
        }
    }

    /// Clear a customer's failure count. The last notification time is kept.
    pub fn record_success(&mut self, customer_id: &str) {
        if let Some(record) = self.records.get_mut(customer_id) {
            if record.consecutive_failures > 0 {
                debug!(customer = customer_id, "request failures reset");
            }
            record.consecutive_failures = 0;
        }
    }

    pub fn failure_count(&self, customer_id: &str) -> u32 {
        self.records
            .get(customer_id)
            .map_or(0, |r| r.consecutive_failures)
    }

    pub fn last_notified_at(&self, customer_id: &str) -> Option<DateTime<Utc>> {
        self.records.get(customer_id).and_then(|r| r.last_notified_at)
    }

    /// Drop all tracking state in memory. Persisted state is untouched until
    /// the next save.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records worth persisting, ordered by customer id.
    pub fn records(&self) -> Vec<TrackerRecord> {
        self.records
            .values()
            .filter(|r| !r.is_empty())
            .cloned()
            .collect()
    }

    /// Replace in-memory state with the store's. On failure, start empty.
    pub fn load(&mut self) {
        if let Err(e) = self.try_load() {
            warn!(error = %e, "failed to load request tracking state, starting fresh");
            self.records.clear();
        }
    }

    /// Persist current state. Failures are logged and the in-memory state kept.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            error!(error = %e, "failed to save request tracking state");
        }
    }

    pub fn try_load(&mut self) -> Result<(), TrackerError> {
        let loaded = self.store.load()?;
        self.records = loaded
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(|r| (r.customer_id.clone(), r))
            .collect();
        info!(customers = self.records.len(), "request tracking state loaded");
        Ok(())
    }

    pub fn try_save(&self) -> Result<(), TrackerError> {
        let records = self.records();
        self.store.save(&records)?;
        debug!(customers = records.len(), "request tracking state saved");
        Ok(())
    }
}

impl std::fmt::Debug for FailureTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailureTracker")
            .field("config", &self.config)
            .field("customers", &self.records.len())
            .finish_non_exhaustive()
    }
}
