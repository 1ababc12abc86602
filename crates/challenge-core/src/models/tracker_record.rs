use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted failure-tracking state for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    pub customer_id: String,
    /// When the customer last sent a request notification.
    pub last_notified_at: Option<DateTime<Utc>>,
    /// Failed requests since the last notification or success.
    pub consecutive_failures: u32,
}

impl TrackerRecord {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            last_notified_at: None,
            consecutive_failures: 0,
        }
    }

    /// A record with no timestamp and no failures carries no information.
    pub fn is_empty(&self) -> bool {
        self.last_notified_at.is_none() && self.consecutive_failures == 0
    }
}
