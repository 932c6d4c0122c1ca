use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMethod {
    XInput,
    #[default]
    DirectInput,
}

/// Whole-application configuration, owned by the backend and replaced
/// atomically via `update_config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub target_controller_index: u32,
    pub input_method: InputMethod,
    pub chatter_threshold_ms: u64,
    pub polling_rate_ms_connected: u64,
    pub polling_rate_ms_disconnected: u64,
    pub target_process_name: String,

    // Overlay mirror endpoint settings
    pub obs_enabled: bool,
    pub obs_port: u16,
    pub obs_poll_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_controller_index: 0,
            input_method: InputMethod::default(),
            chatter_threshold_ms: 15,
            polling_rate_ms_connected: 1,
            polling_rate_ms_disconnected: 1000,
            target_process_name: "bm2dx.exe".to_string(),
            obs_enabled: false,
            obs_port: 8973,
            obs_poll_interval_ms: 1000,
        }
    }
}
