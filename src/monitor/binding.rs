use crate::backend::MonitorBackend;
use crate::models::LogicalKey;
use anyhow::Result;

/// Phase of a binding-learning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnPhase {
    /// Not learning. Entered on open-with-no-target, cancel, close, or
    /// completion.
    Idle,
    /// Waiting for all buttons to be released. A button already held when
    /// the learner opens must not be captured as the binding.
    WaitRelease,
    /// Armed: the first nonzero raw sample wins.
    WaitPress,
}

/// A resolved binding capture, ready to be dispatched as a `set_binding`
/// intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedBinding {
    pub key: LogicalKey,
    pub mask: u32,
}

impl LearnedBinding {
    /// Forward the capture to the backend as a `set_binding` intent.
    pub async fn dispatch(self, backend: &dyn MonitorBackend) -> Result<()> {
        backend.set_binding(self.key, self.mask).await
    }
}

/// Edge-triggered state machine resolving a physical button press into a
/// binding for a chosen logical key. Driven by feeding it every observed
/// raw-bitmask sample; there is no timeout, callers needing one must layer
/// it externally.
#[derive(Debug)]
pub struct BindingLearner {
    phase: LearnPhase,
    target: Option<LogicalKey>,
}

impl BindingLearner {
    pub fn new() -> Self {
        Self {
            phase: LearnPhase::Idle,
            target: None,
        }
    }

    /// Start (or restart) a learning session. Opening with a target always
    /// begins at `WaitRelease`, even when re-targeting the same key;
    /// opening without one is a no-op that lands in `Idle`.
    pub fn open(&mut self, target: Option<LogicalKey>) {
        match target {
            Some(key) => {
                self.phase = LearnPhase::WaitRelease;
                self.target = Some(key);
            }
            None => self.reset(),
        }
    }

    /// Feed one raw-bitmask sample. Returns the captured binding exactly
    /// once, at the `WaitPress` -> `Idle` transition; the captured mask is
    /// the raw state at that instant (no debouncing, no combo support).
    pub fn observe(&mut self, raw_button_state: u32) -> Option<LearnedBinding> {
        match self.phase {
            LearnPhase::Idle => None,
            LearnPhase::WaitRelease => {
                if raw_button_state == 0 {
                    self.phase = LearnPhase::WaitPress;
                }
                None
            }
            LearnPhase::WaitPress => {
                if raw_button_state == 0 {
                    return None;
                }
                let key = self.target.take()?;
                self.phase = LearnPhase::Idle;
                tracing::info!("learned binding: {} -> mask {}", key, raw_button_state);
                Some(LearnedBinding {
                    key,
                    mask: raw_button_state,
                })
            }
        }
    }

    /// Explicit cancel or host-dialog close: discard any in-progress
    /// capture, emit nothing.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn phase(&self) -> LearnPhase {
        self.phase
    }

    pub fn target(&self) -> Option<&LogicalKey> {
        self.target.as_ref()
    }

    fn reset(&mut self) {
        self.phase = LearnPhase::Idle;
        self.target = None;
    }
}

impl Default for BindingLearner {
    fn default() -> Self {
        Self::new()
    }
}
