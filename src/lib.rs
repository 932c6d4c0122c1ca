//! Domain core for monitoring the wear and input quality of an
//! arcade-style keypad: wear/life-expectancy modeling, chatter analytics,
//! batch mutation over the switch collection, a binding-learning state
//! machine, and live/persisted session history reconciliation.
//!
//! The raw polling/persistence engine is an external backend reached
//! through [`backend::MonitorBackend`]; state arrives as whole snapshots on
//! [`backend::SnapshotFeed`]. Nothing here mutates counters directly.

pub mod backend;
pub mod models;
pub mod monitor;
pub mod obs;

pub use backend::{AutoConfirm, ConfirmPrompt, MonitorBackend, SnapshotFeed};
pub use models::{
    AppConfig, ButtonStats, LogicalKey, MonitorSharedState, SessionKeyStats, SessionRecord,
    SwitchCatalog, SwitchHistoryEntry, SwitchModelSpec, SwitchRecord,
};
pub use monitor::{
    BindingLearner, SelectionSet, SessionHistoryCache, SeverityTier, SwitchCollection,
};
pub use obs::{ObsServer, ObsStats};
