pub mod feed;
#[cfg(test)]
pub(crate) mod mock;
pub mod traits;

pub use feed::SnapshotFeed;
pub use traits::{request_default_mapping_reset, AutoConfirm, ConfirmPrompt, MonitorBackend};
