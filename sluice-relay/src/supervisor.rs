//! Periodic maintenance for the relay engine.
//!
//! One background task, started with the server and stopped by the
//! shutdown token. Each sweep closes idle transports and reaps empty rooms
//! past their grace period; a slower cadence logs the counter snapshot so
//! a relay left running unattended still leaves a trail.

use std::sync::Arc;
use std::time::Duration;

use crate::engine::RelayEngine;

/// How often idle endpoints and empty rooms are checked.
const SWEEP_PERIOD: Duration = Duration::from_secs(1);

/// How often the counter snapshot is logged.
const REPORT_PERIOD: Duration = Duration::from_secs(60);

/// Runs the maintenance loop until shutdown.
pub async fn run(engine: Arc<RelayEngine>) {
    let shutdown = engine.shutdown_token();
    let mut sweep = tokio::time::interval(SWEEP_PERIOD);
    let mut report = tokio::time::interval(REPORT_PERIOD);
    // Both intervals fire immediately on first tick; consume those so the
    // loop starts with a full period.
    sweep.tick().await;
    report.tick().await;

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            _ = sweep.tick() => {
                let killed = engine.sweep_idle();
                if killed > 0 {
                    tracing::debug!(killed, "idle sweep");
                }
                let events = engine
                    .registry()
                    .reap_empty(engine.config().empty_room_grace);
                engine.publish_events(&events);
            }
            _ = report.tick() => {
                let snap = engine.metrics_snapshot();
                tracing::info!(
                    live_rooms = snap.live_rooms,
                    paired_rooms = snap.paired_rooms,
                    accepted_joins = snap.accepted_joins,
                    rejected_room_full = snap.rejected_room_full,
                    rejected_global_limit = snap.rejected_global_limit,
                    rejected_per_address_limit = snap.rejected_per_address_limit,
                    frames_forwarded = snap.frames_forwarded,
                    bytes_forwarded = snap.bytes_forwarded,
                    "relay counters"
                );
            }
        }
    }
    tracing::debug!("supervisor stopped");
}
