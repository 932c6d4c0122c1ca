use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bounded interval of device activity. Sessions in the live window may
/// not have been persisted yet, in which case `id` is `None`; the persisted
/// list always carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_secs: u64,
}

/// Per-key counters recorded for one persisted session. Immutable once
/// written; fetched lazily per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeyStats {
    pub session_id: i64,
    pub key_name: String,
    pub presses: u64,
    pub chatters: u64,
    pub chatter_releases: u64,
}
