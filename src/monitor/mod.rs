pub mod binding;
pub mod chatter;
pub mod collection;
pub mod selection;
pub mod sessions;
pub mod wear;

pub use binding::{BindingLearner, LearnPhase, LearnedBinding};
pub use chatter::{is_high_chatter, lifetime_chatter_rate, session_chatter_rate, ChatterContext};
pub use collection::{SessionAggregate, SwitchCollection};
pub use selection::SelectionSet;
pub use sessions::{natural_key_cmp, SessionHistoryCache};
pub use wear::{life_expectancy, severity_tier, SeverityTier};
