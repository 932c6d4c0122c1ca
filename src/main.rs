//! Overlay preview runner: publishes synthetic keypad snapshots through the
//! feed and serves `GET /api/stats`, so the overlay endpoint can be
//! exercised without a controller attached.

use chrono::Utc;
use std::time::Duration;
use switchlife::models::{default_bindings, ordered_keys, ButtonStats, SwitchRecord};
use switchlife::{AppConfig, MonitorSharedState, ObsServer, SnapshotFeed, SwitchCatalog};

fn initial_snapshot() -> MonitorSharedState {
    let catalog = SwitchCatalog::builtin();
    let model = &catalog.models()[0];

    let mut snapshot = MonitorSharedState {
        is_connected: true,
        is_game_running: true,
        config: AppConfig::default(),
        profile_name: "Preview".to_string(),
        bindings: default_bindings(),
        ..Default::default()
    };
    for (i, key) in ordered_keys().into_iter().enumerate() {
        snapshot.switches.insert(
            key,
            SwitchRecord {
                switch_model_id: model.id.clone(),
                stats: ButtonStats {
                    total_presses: 250_000 * (i as u64 + 1),
                    total_releases: 250_000 * (i as u64 + 1),
                    ..Default::default()
                },
                last_replaced_at: Some(Utc::now()),
            },
        );
    }
    snapshot
}

/// Advance the synthetic counters as if the player were mashing away.
fn tick(snapshot: &mut MonitorSharedState, tick_no: u64) {
    for (i, key) in ordered_keys().into_iter().enumerate() {
        if let Some(record) = snapshot.switches.get_mut(&key) {
            let presses = 1 + (tick_no + i as u64) % 5;
            record.stats.total_presses += presses;
            record.stats.total_releases += presses;
            record.stats.last_session_presses += presses;
            if (tick_no + i as u64) % 97 == 0 {
                record.stats.total_chatters += 1;
                record.stats.last_session_chatters += 1;
            }
        }
    }
    snapshot.raw_button_state = 1 << (tick_no % 11);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("com.switchlife.app")
        .join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, "switchlife.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(non_blocking),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut snapshot = initial_snapshot();
    let port = snapshot.config.obs_port;
    let interval = snapshot.config.obs_poll_interval_ms;
    let feed = SnapshotFeed::new(snapshot.clone());

    let server = ObsServer::new();
    let addr = server.start(port, feed.subscribe()).await?;
    tracing::info!("preview stats at http://{}/api/stats", addr);

    let publisher = tokio::spawn(async move {
        let mut tick_no: u64 = 0;
        loop {
            tokio::time::sleep(Duration::from_millis(interval)).await;
            tick_no += 1;
            tick(&mut snapshot, tick_no);
            feed.publish(snapshot.clone());
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    publisher.abort();
    server.stop().await;
    Ok(())
}
