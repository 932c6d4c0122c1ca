use crate::models::{AppConfig, LogicalKey, MonitorSharedState, SessionKeyStats, SessionRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Command-invocation boundary to the polling/persistence backend. The
/// backend is the sole writer of persisted truth; callers never mutate
/// counters locally, they only request mutation and wait for the next
/// pushed snapshot to reflect it.
#[async_trait]
pub trait MonitorBackend: Send + Sync {
    /// Zero a switch's counters. The backend appends a history entry.
    async fn reset_stats(&self, key: LogicalKey) -> Result<()>;

    /// Reassign a switch's model and implicitly reset its counters.
    /// The backend appends a history entry.
    async fn replace_switch(&self, key: LogicalKey, new_model_id: &str) -> Result<()>;

    /// Update the replacement timestamp only.
    async fn set_last_replaced_date(&self, key: LogicalKey, date: DateTime<Utc>) -> Result<()>;

    /// Replace the whole configuration object.
    async fn update_config(&self, config: AppConfig) -> Result<()>;

    async fn set_target_controller(&self, index: u32) -> Result<()>;

    /// Bind a logical key to a raw button mask (0 = unbound). Duplicate
    /// masks are accepted; the backend does not enforce uniqueness.
    async fn set_binding(&self, key: LogicalKey, button: u32) -> Result<()>;

    async fn reset_to_default_mapping(&self) -> Result<()>;

    async fn set_obs_enabled(&self, enabled: bool) -> Result<()>;
    async fn set_obs_port(&self, port: u16) -> Result<()>;
    async fn set_obs_poll_interval(&self, interval_ms: u64) -> Result<()>;

    /// One-shot full-state fetch used at startup, before the push feed has
    /// delivered anything.
    async fn get_snapshot(&self) -> Result<MonitorSharedState>;

    /// Paginated persisted session list, newest first.
    async fn get_history_sessions(&self, limit: i64, offset: i64) -> Result<Vec<SessionRecord>>;

    /// Per-key detail rows for one persisted session.
    async fn get_session_details(&self, session_id: i64) -> Result<Vec<SessionKeyStats>>;
}

/// Interactive yes/no gate for destructive intents (stat resets, model
/// replacements, batch variants). Declining aborts with no side effect.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything. For non-interactive callers and tests that exercise
/// the dispatch path itself.
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Confirm-gated reset of the whole button mapping to factory defaults.
/// Irreversible like the stat resets, so it takes the same gate; declining
/// dispatches nothing. Returns whether the intent was dispatched.
pub async fn request_default_mapping_reset(
    backend: &dyn MonitorBackend,
    confirm: &dyn ConfirmPrompt,
) -> Result<bool> {
    if !confirm.confirm("Reset all key bindings to the default mapping?") {
        return Ok(false);
    }
    backend.reset_to_default_mapping().await?;
    Ok(true)
}
