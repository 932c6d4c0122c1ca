//! Recording fakes for the backend boundary, shared by unit tests.

use super::traits::{ConfirmPrompt, MonitorBackend};
use crate::models::{AppConfig, LogicalKey, MonitorSharedState, SessionKeyStats, SessionRecord};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ResetStats(LogicalKey),
    ReplaceSwitch(LogicalKey, String),
    SetLastReplacedDate(LogicalKey, DateTime<Utc>),
    UpdateConfig(AppConfig),
    SetTargetController(u32),
    SetBinding(LogicalKey, u32),
    ResetToDefaultMapping,
    SetObsEnabled(bool),
    SetObsPort(u16),
    SetObsPollInterval(u64),
}

/// Backend fake that records every dispatched intent. Keys listed in
/// `fail_keys` make their destructive commands return an error, for
/// partial-batch tests.
#[derive(Default)]
pub struct RecordingBackend {
    pub intents: Mutex<Vec<Intent>>,
    pub fail_keys: Mutex<HashSet<LogicalKey>>,
    pub snapshot: Mutex<MonitorSharedState>,
    pub sessions: Mutex<Vec<SessionRecord>>,
    pub details: Mutex<Vec<SessionKeyStats>>,
    pub session_list_calls: Mutex<Vec<(i64, i64)>>,
    pub detail_calls: Mutex<Vec<i64>>,
}

impl RecordingBackend {
    pub fn intents(&self) -> Vec<Intent> {
        self.intents.lock().unwrap().clone()
    }

    fn record(&self, intent: Intent) {
        self.intents.lock().unwrap().push(intent);
    }

    fn should_fail(&self, key: &LogicalKey) -> bool {
        self.fail_keys.lock().unwrap().contains(key)
    }
}

#[async_trait]
impl MonitorBackend for RecordingBackend {
    async fn reset_stats(&self, key: LogicalKey) -> Result<()> {
        self.record(Intent::ResetStats(key.clone()));
        if self.should_fail(&key) {
            return Err(anyhow!("backend rejected reset for {}", key));
        }
        Ok(())
    }

    async fn replace_switch(&self, key: LogicalKey, new_model_id: &str) -> Result<()> {
        self.record(Intent::ReplaceSwitch(key.clone(), new_model_id.to_string()));
        if self.should_fail(&key) {
            return Err(anyhow!("backend rejected replace for {}", key));
        }
        Ok(())
    }

    async fn set_last_replaced_date(&self, key: LogicalKey, date: DateTime<Utc>) -> Result<()> {
        self.record(Intent::SetLastReplacedDate(key, date));
        Ok(())
    }

    async fn update_config(&self, config: AppConfig) -> Result<()> {
        self.record(Intent::UpdateConfig(config));
        Ok(())
    }

    async fn set_target_controller(&self, index: u32) -> Result<()> {
        self.record(Intent::SetTargetController(index));
        Ok(())
    }

    async fn set_binding(&self, key: LogicalKey, button: u32) -> Result<()> {
        self.record(Intent::SetBinding(key, button));
        Ok(())
    }

    async fn reset_to_default_mapping(&self) -> Result<()> {
        self.record(Intent::ResetToDefaultMapping);
        Ok(())
    }

    async fn set_obs_enabled(&self, enabled: bool) -> Result<()> {
        self.record(Intent::SetObsEnabled(enabled));
        Ok(())
    }

    async fn set_obs_port(&self, port: u16) -> Result<()> {
        self.record(Intent::SetObsPort(port));
        Ok(())
    }

    async fn set_obs_poll_interval(&self, interval_ms: u64) -> Result<()> {
        self.record(Intent::SetObsPollInterval(interval_ms));
        Ok(())
    }

    async fn get_snapshot(&self) -> Result<MonitorSharedState> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn get_history_sessions(&self, limit: i64, offset: i64) -> Result<Vec<SessionRecord>> {
        self.session_list_calls.lock().unwrap().push((limit, offset));
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn get_session_details(&self, session_id: i64) -> Result<Vec<SessionKeyStats>> {
        self.detail_calls.lock().unwrap().push(session_id);
        Ok(self
            .details
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.session_id == session_id)
            .cloned()
            .collect())
    }
}

/// Confirmation fake with a fixed answer, recording every prompt shown.
pub struct StaticConfirm {
    pub answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl StaticConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for StaticConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}
