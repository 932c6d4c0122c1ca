use super::config::AppConfig;
use super::key::LogicalKey;
use super::session::SessionRecord;
use super::stats::{SwitchHistoryEntry, SwitchRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Outcome of the backend's most recent profile save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastSaveResult {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Full state snapshot pushed by the backend. Each delivery replaces the
/// previous snapshot wholesale; there is no delta merging at this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorSharedState {
    pub is_connected: bool,
    pub is_game_running: bool,
    pub config: AppConfig,

    pub profile_name: String,
    pub bindings: HashMap<LogicalKey, u32>,
    pub switches: HashMap<LogicalKey, SwitchRecord>,
    pub switch_history: Vec<SwitchHistoryEntry>,

    // Real-time input state for the tester view
    pub current_pressed_keys: HashSet<LogicalKey>,
    pub raw_button_state: u32,

    pub last_status_message: Option<String>,
    pub last_save_result: Option<LastSaveResult>,

    /// Bounded window of the most recent sessions (newest last, 3 entries).
    pub recent_sessions: Vec<SessionRecord>,
}

/// Factory default button mapping (PhoenixWAN layout).
pub fn default_bindings() -> HashMap<LogicalKey, u32> {
    let mut bindings = HashMap::new();
    bindings.insert(LogicalKey::Key1, 8);
    bindings.insert(LogicalKey::Key2, 1);
    bindings.insert(LogicalKey::Key3, 2);
    bindings.insert(LogicalKey::Key4, 4);
    bindings.insert(LogicalKey::Key5, 64);
    bindings.insert(LogicalKey::Key6, 256);
    bindings.insert(LogicalKey::Key7, 128);
    bindings.insert(LogicalKey::E1, 1024);
    bindings.insert(LogicalKey::E2, 2048);
    bindings.insert(LogicalKey::E3, 8192);
    bindings.insert(LogicalKey::E4, 16384);
    bindings
}
