use crate::models::{AppConfig, LogicalKey, MonitorSharedState, SwitchRecord};
use anyhow::{bail, Context, Result};
use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{oneshot, watch, Mutex};
use tower_http::cors::CorsLayer;

/// Reduced snapshot served to the overlay renderer. A stale read here is
/// fine; the overlay polls at its own interval.
#[derive(Debug, Clone, Serialize)]
pub struct ObsStats {
    pub config: AppConfig,
    pub switches: HashMap<LogicalKey, SwitchRecord>,
    pub is_game_running: bool,
    pub profile_name: String,
}

impl From<&MonitorSharedState> for ObsStats {
    fn from(state: &MonitorSharedState) -> Self {
        Self {
            config: state.config.clone(),
            switches: state.switches.clone(),
            is_game_running: state.is_game_running,
            profile_name: state.profile_name.clone(),
        }
    }
}

/// Read-only HTTP mirror of the live snapshot for external overlays:
/// `GET /api/stats`. Loopback only.
pub struct ObsServer {
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl ObsServer {
    pub fn new() -> Self {
        Self {
            shutdown_tx: Mutex::new(None),
        }
    }

    /// Bind and serve. Returns the bound address (port 0 picks a free one).
    /// Starting an already-running server is an error.
    pub async fn start(
        &self,
        port: u16,
        feed: watch::Receiver<Arc<MonitorSharedState>>,
    ) -> Result<SocketAddr> {
        let mut shutdown_guard = self.shutdown_tx.lock().await;
        if shutdown_guard.is_some() {
            bail!("overlay server is already running");
        }

        let app = Router::new()
            .route("/api/stats", get(stats_handler))
            .layer(CorsLayer::permissive())
            .with_state(feed);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind overlay server to {}", addr))?;
        let bound = listener.local_addr()?;

        let (tx, rx) = oneshot::channel();
        *shutdown_guard = Some(tx);

        tracing::info!("overlay server listening on {}", bound);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
            {
                tracing::error!("overlay server error: {}", e);
            }
            tracing::info!("overlay server stopped");
        });

        Ok(bound)
    }

    pub async fn stop(&self) {
        let mut shutdown_guard = self.shutdown_tx.lock().await;
        if let Some(tx) = shutdown_guard.take() {
            let _ = tx.send(());
        }
    }

    pub async fn is_running(&self) -> bool {
        self.shutdown_tx.lock().await.is_some()
    }
}

impl Default for ObsServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn stats_handler(
    State(feed): State<watch::Receiver<Arc<MonitorSharedState>>>,
) -> Json<ObsStats> {
    let snapshot = feed.borrow().clone();
    Json(ObsStats::from(&*snapshot))
}
