use super::selection::SelectionSet;
use crate::backend::{ConfirmPrompt, MonitorBackend};
use crate::models::{
    LogicalKey, MonitorSharedState, SwitchCatalog, SwitchHistoryEntry, SwitchModelSpec,
    SwitchRecord,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

/// Session-wide press/chatter totals over a key subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionAggregate {
    pub total_presses: u64,
    pub total_chatters: u64,
}

/// Read-only mirror of all logical keys' switch assignments and counters.
/// Replaced wholesale on every pushed snapshot; user-issued mutations are
/// forwarded to the backend as intents and never applied optimistically,
/// the next snapshot reflects them.
pub struct SwitchCollection {
    backend: Arc<dyn MonitorBackend>,
    catalog: SwitchCatalog,
    switches: HashMap<LogicalKey, SwitchRecord>,
    history: Vec<SwitchHistoryEntry>,
}

impl SwitchCollection {
    pub fn new(backend: Arc<dyn MonitorBackend>, catalog: SwitchCatalog) -> Self {
        Self {
            backend,
            catalog,
            switches: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Adopt the latest pushed snapshot, replacing the previous view.
    pub fn apply_snapshot(&mut self, snapshot: &MonitorSharedState) {
        self.switches = snapshot.switches.clone();
        self.history = snapshot.switch_history.clone();
    }

    /// Prime the collection with a one-shot snapshot fetch, for startup
    /// before the push feed has delivered anything.
    pub async fn bootstrap(&mut self) -> Result<()> {
        let snapshot = self.backend.get_snapshot().await?;
        self.apply_snapshot(&snapshot);
        Ok(())
    }

    /// Never fails: keys that have never been reported get a zeroed record
    /// bound to the generic/unknown sentinel model.
    pub fn get(&self, key: &LogicalKey) -> SwitchRecord {
        self.switches.get(key).cloned().unwrap_or_default()
    }

    /// Catalog entry for a record, falling back to the sentinel when the
    /// record references an unknown model id.
    pub fn model_for(&self, record: &SwitchRecord) -> &SwitchModelSpec {
        self.catalog.resolve(&record.switch_model_id)
    }

    pub fn catalog(&self) -> &SwitchCatalog {
        &self.catalog
    }

    /// Sum of `last_session_*` counters across a key subset; keys without
    /// data count as zero.
    pub fn aggregate<'a>(&self, keys: impl IntoIterator<Item = &'a LogicalKey>) -> SessionAggregate {
        let mut agg = SessionAggregate::default();
        for key in keys {
            if let Some(record) = self.switches.get(key) {
                agg.total_presses += record.stats.last_session_presses;
                agg.total_chatters += record.stats.last_session_chatters;
            }
        }
        agg
    }

    /// Replacement/reset audit log, newest first. Entries sharing a date
    /// keep their original (append) order.
    pub fn sorted_history(&self) -> Vec<SwitchHistoryEntry> {
        let mut history = self.history.clone();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Ask to zero one switch's counters. Destructive: gated on explicit
    /// confirmation. Returns whether the intent was dispatched.
    pub async fn request_reset(
        &self,
        key: &LogicalKey,
        confirm: &dyn ConfirmPrompt,
    ) -> Result<bool> {
        if !confirm.confirm(&format!("Reset stats for {}?", key)) {
            return Ok(false);
        }
        self.backend.reset_stats(key.clone()).await?;
        Ok(true)
    }

    /// Ask to reassign one switch's model (implicitly resets its counters
    /// backend-side). Destructive: gated on explicit confirmation.
    pub async fn request_replace_model(
        &self,
        key: &LogicalKey,
        model_id: &str,
        confirm: &dyn ConfirmPrompt,
    ) -> Result<bool> {
        let prompt = format!("Change model for {} to {}? Stats will be reset.", key, model_id);
        if !confirm.confirm(&prompt) {
            return Ok(false);
        }
        self.backend.replace_switch(key.clone(), model_id).await?;
        Ok(true)
    }

    /// Update a switch's replacement date only. Not destructive, no
    /// confirmation.
    pub async fn set_last_replaced_date(
        &self,
        key: &LogicalKey,
        date: DateTime<Utc>,
    ) -> Result<()> {
        self.backend.set_last_replaced_date(key.clone(), date).await
    }

    /// Reset every selected switch. One confirmation covers the whole
    /// batch; each key is dispatched independently with no atomicity, and
    /// individual failures are logged without blocking the rest. The
    /// selection is cleared after dispatch regardless of outcomes.
    /// Returns the number of dispatched intents (0 for an empty selection
    /// or a declined prompt).
    pub async fn reset_selection(
        &self,
        selection: &mut SelectionSet,
        confirm: &dyn ConfirmPrompt,
    ) -> Result<usize> {
        let keys = selection.ordered_members();
        if keys.is_empty() {
            return Ok(0);
        }
        if !confirm.confirm(&format!("Reset stats for {} selected keys?", keys.len())) {
            return Ok(0);
        }

        let results = join_all(keys.iter().map(|k| self.backend.reset_stats(k.clone()))).await;
        for (key, result) in keys.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!("batch reset failed for {}: {}", key, e);
            }
        }
        selection.clear();
        Ok(keys.len())
    }

    /// Reassign the model of every selected switch. Same batch semantics
    /// as [`reset_selection`](Self::reset_selection).
    pub async fn apply_model_to_selection(
        &self,
        selection: &mut SelectionSet,
        model_id: &str,
        confirm: &dyn ConfirmPrompt,
    ) -> Result<usize> {
        let keys = selection.ordered_members();
        if keys.is_empty() {
            return Ok(0);
        }
        let prompt = format!(
            "Change model to {} for {} selected keys? Stats will be reset.",
            model_id,
            keys.len()
        );
        if !confirm.confirm(&prompt) {
            return Ok(0);
        }

        let results = join_all(
            keys.iter()
                .map(|k| self.backend.replace_switch(k.clone(), model_id)),
        )
        .await;
        for (key, result) in keys.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!("batch model change failed for {}: {}", key, e);
            }
        }
        selection.clear();
        Ok(keys.len())
    }
}
