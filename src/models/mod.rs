pub mod catalog;
pub mod config;
pub mod key;
pub mod session;
pub mod state;
pub mod stats;

pub use catalog::{CatalogError, SwitchCatalog, SwitchModelSpec, GENERIC_UNKNOWN_ID};
pub use config::{AppConfig, InputMethod};
pub use key::{ordered_keys, LogicalKey};
pub use session::{SessionKeyStats, SessionRecord};
pub use state::{default_bindings, LastSaveResult, MonitorSharedState};
pub use stats::{ButtonStats, SwitchHistoryEntry, SwitchRecord};
