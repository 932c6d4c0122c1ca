/// Lifetime chatter rate above this percentage flags a degraded switch.
pub const LIFETIME_HIGH_CHATTER_PCT: f64 = 0.5;
/// Session chatter rate above this percentage is highlighted live.
pub const SESSION_HIGH_CHATTER_PCT: f64 = 1.0;
/// Session-detail rows need more presses than this before the warning is
/// meaningful; tiny samples are all noise.
pub const DETAIL_MIN_PRESSES: u64 = 10;

/// Where a chatter rate is being judged. The detail-table context carries
/// the sample size so small sessions are not flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatterContext {
    Lifetime,
    LiveSession,
    SessionDetail { presses: u64 },
}

/// Lifetime rate, normalized over all observed events (presses + chatters).
pub fn lifetime_chatter_rate(chatters: u64, presses: u64) -> f64 {
    let events = presses + chatters;
    if events == 0 {
        return 0.0;
    }
    (chatters as f64 / events as f64) * 100.0
}

/// Session/report rate, normalized over presses only. The two denominators
/// differ on purpose; callers must pick the one their view uses.
pub fn session_chatter_rate(chatters: u64, presses: u64) -> f64 {
    if presses == 0 {
        return 0.0;
    }
    (chatters as f64 / presses as f64) * 100.0
}

pub fn is_high_chatter(rate: f64, context: ChatterContext) -> bool {
    match context {
        ChatterContext::Lifetime => rate > LIFETIME_HIGH_CHATTER_PCT,
        ChatterContext::LiveSession => rate > SESSION_HIGH_CHATTER_PCT,
        ChatterContext::SessionDetail { presses } => {
            presses > DETAIL_MIN_PRESSES && rate > SESSION_HIGH_CHATTER_PCT
        }
    }
}
