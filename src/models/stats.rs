use super::catalog::GENERIC_UNKNOWN_ID;
use super::key::LogicalKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime and per-session counters for one switch. Owned by the polling
/// backend and mirrored read-only here; all mutation goes through commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStats {
    pub total_presses: u64,
    pub total_releases: u64,
    pub total_chatters: u64,
    pub total_chatter_releases: u64,

    // Reset by the backend at session boundaries
    pub last_session_presses: u64,
    pub last_session_chatters: u64,
    pub last_session_chatter_releases: u64,
}

/// One logical key's switch assignment and counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchRecord {
    pub switch_model_id: String,
    pub stats: ButtonStats,
    pub last_replaced_at: Option<DateTime<Utc>>,
}

impl SwitchRecord {
    /// Zero-valued record bound to the generic/unknown sentinel model,
    /// used for keys that have never been reported.
    pub fn unknown() -> Self {
        Self {
            switch_model_id: GENERIC_UNKNOWN_ID.to_string(),
            stats: ButtonStats::default(),
            last_replaced_at: None,
        }
    }
}

impl Default for SwitchRecord {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Audit record appended by the backend on every switch replacement or
/// stats reset. Read-only here, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchHistoryEntry {
    pub date: DateTime<Utc>,
    pub key: LogicalKey,
    pub old_model_id: String,
    pub new_model_id: String,
    pub previous_stats: ButtonStats,
    pub event_type: String,
}
