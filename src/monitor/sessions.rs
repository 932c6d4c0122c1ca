use crate::backend::MonitorBackend;
use crate::models::{SessionKeyStats, SessionRecord};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::Arc;

/// Coarse identity of the live-session window: its length plus the latest
/// record's end time. A change here means a session ended and the persisted
/// list is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LiveFingerprint {
    count: usize,
    latest_end: Option<DateTime<Utc>>,
}

impl LiveFingerprint {
    fn of(window: &[SessionRecord]) -> Self {
        Self {
            count: window.len(),
            latest_end: window.last().map(|s| s.end_time),
        }
    }
}

/// Reconciles the bounded live session window with the paginated persisted
/// session list, and lazily fetches/caches per-session detail rows.
///
/// Detail fetches are tagged with a request token; a response whose token
/// no longer matches the current selection is discarded, so a stale fetch
/// can never overwrite a newer selection's rows.
pub struct SessionHistoryCache {
    backend: Arc<dyn MonitorBackend>,
    sessions: Vec<SessionRecord>,
    selected: Option<SessionRecord>,
    details: Option<Vec<SessionKeyStats>>,
    live_fingerprint: Option<LiveFingerprint>,
    detail_token: u64,
}

impl SessionHistoryCache {
    pub fn new(backend: Arc<dyn MonitorBackend>) -> Self {
        Self {
            backend,
            sessions: Vec::new(),
            selected: None,
            details: None,
            live_fingerprint: None,
            detail_token: 0,
        }
    }

    /// Persisted sessions from the last successful refresh, newest first.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn selected(&self) -> Option<&SessionRecord> {
        self.selected.as_ref()
    }

    /// Detail rows for the current selection, if fetched.
    pub fn details(&self) -> Option<&[SessionKeyStats]> {
        self.details.as_deref()
    }

    /// Feed the live window from the latest snapshot. Refreshes the
    /// persisted list when the window's fingerprint changes; the first
    /// observation always refreshes (initial mount).
    pub async fn observe_live_window(
        &mut self,
        window: &[SessionRecord],
        limit: i64,
        offset: i64,
    ) {
        let fingerprint = LiveFingerprint::of(window);
        if self.live_fingerprint == Some(fingerprint) {
            return;
        }
        self.live_fingerprint = Some(fingerprint);
        self.refresh(limit, offset).await;
    }

    /// Re-fetch the persisted session page. A fetch failure is logged and
    /// leaves the previously cached list displayed. When the refresh
    /// completes with nothing selected, the newest persisted session is
    /// auto-selected and its detail fetch triggered; an empty list
    /// auto-selects nothing.
    pub async fn refresh(&mut self, limit: i64, offset: i64) {
        match self.backend.get_history_sessions(limit, offset).await {
            Ok(sessions) => {
                self.sessions = sessions;
                if self.selected.is_none() {
                    if let Some(first) = self.sessions.first().cloned() {
                        self.selected = Some(first.clone());
                        self.details = None;
                        self.fetch_details(&first).await;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("session list refresh failed: {}", e);
            }
        }
    }

    /// Select a session, dropping the previous selection's detail rows, and
    /// fetch the new selection's detail. A session without an id
    /// short-circuits: no request is made and the detail stays unset.
    pub async fn select(&mut self, session: SessionRecord) {
        self.selected = Some(session.clone());
        self.details = None;
        self.fetch_details(&session).await;
    }

    async fn fetch_details(&mut self, session: &SessionRecord) {
        // Any newer selection invalidates this request, including a switch
        // to an unpersisted session.
        self.detail_token += 1;
        let token = self.detail_token;

        let Some(id) = session.id else {
            return;
        };

        match self.backend.get_session_details(id).await {
            Ok(mut rows) => {
                if self.detail_token != token {
                    tracing::debug!("discarding stale detail response for session {}", id);
                    return;
                }
                rows.sort_by(|a, b| natural_key_cmp(&a.key_name, &b.key_name));
                self.details = Some(rows);
            }
            Err(e) => {
                tracing::warn!("detail fetch failed for session {}: {}", id, e);
            }
        }
    }
}

/// Numeric-aware lexical ordering: digit runs compare by value, so "Key2"
/// sorts before "Key10".
pub fn natural_key_cmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let na = take_number(&mut ia);
                    let nb = take_number(&mut ib);
                    match na.cmp(&nb) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match ca.cmp(&cb) {
                        Ordering::Equal => {
                            ia.next();
                            ib.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_number(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut n: u64 = 0;
    while let Some(c) = it.peek().copied() {
        if let Some(d) = c.to_digit(10) {
            n = n.saturating_mul(10).saturating_add(d as u64);
            it.next();
        } else {
            break;
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::RecordingBackend;
    use chrono::TimeZone;

    fn session(id: Option<i64>, day: u32) -> SessionRecord {
        let start = Utc.with_ymd_and_hms(2026, 2, day, 20, 0, 0).unwrap();
        SessionRecord {
            id,
            start_time: start,
            end_time: start + chrono::Duration::minutes(30),
            duration_secs: 1800,
        }
    }

    fn detail(session_id: i64, key_name: &str, presses: u64) -> SessionKeyStats {
        SessionKeyStats {
            session_id,
            key_name: key_name.to_string(),
            presses,
            chatters: 0,
            chatter_releases: 0,
        }
    }

    #[tokio::test]
    async fn refresh_auto_selects_newest_and_fetches_detail() {
        let backend = Arc::new(RecordingBackend::default());
        *backend.sessions.lock().unwrap() = vec![session(Some(9), 3), session(Some(8), 2)];
        *backend.details.lock().unwrap() = vec![detail(9, "Key1", 100)];

        let mut cache = SessionHistoryCache::new(backend.clone());
        cache.refresh(20, 0).await;

        assert_eq!(cache.sessions().len(), 2);
        assert_eq!(cache.selected().and_then(|s| s.id), Some(9));
        assert_eq!(cache.details().unwrap().len(), 1);
        assert_eq!(*backend.detail_calls.lock().unwrap(), vec![9]);
    }

    #[tokio::test]
    async fn empty_persisted_list_selects_nothing_despite_live_window() {
        let backend = Arc::new(RecordingBackend::default());
        let mut cache = SessionHistoryCache::new(backend.clone());

        // Live window has a session, but nothing is persisted yet.
        cache
            .observe_live_window(&[session(None, 1)], 20, 0)
            .await;

        assert!(cache.sessions().is_empty());
        assert!(cache.selected().is_none());
        assert!(cache.details().is_none());
        assert!(backend.detail_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn live_window_fingerprint_gates_refresh() {
        let backend = Arc::new(RecordingBackend::default());
        let mut cache = SessionHistoryCache::new(backend.clone());

        let window = vec![session(None, 1), session(None, 2)];
        cache.observe_live_window(&window, 20, 0).await;
        // Same count and latest end time: no second fetch.
        cache.observe_live_window(&window, 20, 0).await;
        assert_eq!(backend.session_list_calls.lock().unwrap().len(), 1);

        // A new session ends: count changes, refresh fires.
        let mut grown = window.clone();
        grown.push(session(None, 3));
        cache.observe_live_window(&grown, 20, 0).await;
        assert_eq!(backend.session_list_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn selecting_unpersisted_session_skips_fetch_and_clears_detail() {
        let backend = Arc::new(RecordingBackend::default());
        *backend.sessions.lock().unwrap() = vec![session(Some(5), 2)];
        *backend.details.lock().unwrap() = vec![detail(5, "Key1", 10)];

        let mut cache = SessionHistoryCache::new(backend.clone());
        cache.refresh(20, 0).await;
        assert!(cache.details().is_some());

        cache.select(session(None, 3)).await;
        assert!(cache.selected().unwrap().id.is_none());
        assert!(cache.details().is_none());
        // Only the auto-select fetch happened.
        assert_eq!(*backend.detail_calls.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn selection_survives_refresh() {
        let backend = Arc::new(RecordingBackend::default());
        *backend.sessions.lock().unwrap() = vec![session(Some(2), 2), session(Some(1), 1)];

        let mut cache = SessionHistoryCache::new(backend.clone());
        cache.refresh(20, 0).await;
        cache.select(session(Some(1), 1)).await;

        *backend.sessions.lock().unwrap() =
            vec![session(Some(3), 3), session(Some(2), 2), session(Some(1), 1)];
        cache.refresh(20, 0).await;

        // An existing selection is not stolen by auto-select.
        assert_eq!(cache.selected().and_then(|s| s.id), Some(1));
    }

    #[tokio::test]
    async fn detail_rows_sort_numerically_by_key_name() {
        let backend = Arc::new(RecordingBackend::default());
        *backend.sessions.lock().unwrap() = vec![session(Some(4), 2)];
        *backend.details.lock().unwrap() = vec![
            detail(4, "Key10", 1),
            detail(4, "Key2", 2),
            detail(4, "E1", 3),
            detail(4, "Key1", 4),
        ];

        let mut cache = SessionHistoryCache::new(backend.clone());
        cache.refresh(20, 0).await;

        let names: Vec<&str> = cache
            .details()
            .unwrap()
            .iter()
            .map(|d| d.key_name.as_str())
            .collect();
        assert_eq!(names, vec!["E1", "Key1", "Key2", "Key10"]);
    }

    #[test]
    fn natural_cmp_orders_digit_runs_by_value() {
        assert_eq!(natural_key_cmp("Key2", "Key10"), Ordering::Less);
        assert_eq!(natural_key_cmp("Key10", "Key10"), Ordering::Equal);
        assert_eq!(natural_key_cmp("E4", "Key1"), Ordering::Less);
        assert_eq!(natural_key_cmp("Key", "Key1"), Ordering::Less);
    }
}
