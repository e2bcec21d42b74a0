//! The relay engine: acceptor, endpoint table, and shared state.
//!
//! One [`RelayEngine`] value owns the room registry, the metrics counters,
//! and the table of live endpoints. It is threaded through the axum
//! handlers as an explicit `Arc` — there is no process-wide singleton.
//!
//! The HTTP surface is small: `GET /ws` upgrades to the relay transport,
//! `GET /health` answers liveness probes, and `GET /metrics` serves the
//! counter snapshot as JSON.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::connect_info::ConnectInfo;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::config::RelayConfig;
use crate::endpoint;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::registry::{CloseReason, EndpointId, RoomEvent, RoomRegistry};
use crate::supervisor;

/// Control surface for one live endpoint, kept in the engine's table.
#[derive(Debug, Clone)]
pub struct EndpointHandle {
    /// Cancels both of the endpoint's tasks. Idempotent.
    pub cancel: CancellationToken,
    /// Milliseconds (engine clock) of the last inbound frame or outbound
    /// write; the supervisor's idle sweep reads this.
    pub last_activity: Arc<AtomicU64>,
    /// Reason planted by a killer before cancelling, so the endpoint can
    /// report why it died.
    kill_reason: Arc<Mutex<Option<CloseReason>>>,
}

/// Top-level relay state. See the module docs.
#[derive(Debug)]
pub struct RelayEngine {
    config: RelayConfig,
    registry: RoomRegistry,
    metrics: Metrics,
    endpoints: Mutex<HashMap<EndpointId, EndpointHandle>>,
    next_endpoint_id: AtomicU64,
    started_at: Instant,
    shutdown: CancellationToken,
}

impl RelayEngine {
    /// Builds an engine from resolved configuration.
    #[must_use]
    pub fn new(config: RelayConfig) -> Arc<Self> {
        let registry = RoomRegistry::new(config.max_rooms, config.max_rooms_per_ip);
        Arc::new(Self {
            config,
            registry,
            metrics: Metrics::new(),
            endpoints: Mutex::new(HashMap::new()),
            next_endpoint_id: AtomicU64::new(1),
            started_at: Instant::now(),
            shutdown: CancellationToken::new(),
        })
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The room registry.
    #[must_use]
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// The counter set.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Milliseconds elapsed on the engine clock. The endpoint activity
    /// stamps and the idle sweep share this timebase.
    #[must_use]
    pub fn now_millis(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Token cancelled once at process shutdown.
    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Allocates an endpoint id and tracks its control handle.
    pub fn register_endpoint(&self) -> (EndpointId, EndpointHandle) {
        let id = self.next_endpoint_id.fetch_add(1, Ordering::Relaxed);
        let handle = EndpointHandle {
            cancel: CancellationToken::new(),
            last_activity: Arc::new(AtomicU64::new(self.now_millis())),
            kill_reason: Arc::new(Mutex::new(None)),
        };
        self.endpoints.lock().insert(id, handle.clone());
        (id, handle)
    }

    /// Drops an endpoint from the table. Called exactly once per endpoint,
    /// at the end of its driver.
    pub fn deregister_endpoint(&self, id: EndpointId) {
        self.endpoints.lock().remove(&id);
    }

    /// Number of live endpoints.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.lock().len()
    }

    /// Terminates an endpoint with the given reason. Idempotent; the first
    /// planted reason wins. Returns whether the endpoint was known.
    pub fn kill_endpoint(&self, id: EndpointId, reason: CloseReason) -> bool {
        let Some(handle) = self.endpoints.lock().get(&id).cloned() else {
            return false;
        };
        handle.kill_reason.lock().get_or_insert(reason);
        handle.cancel.cancel();
        true
    }

    /// Takes the reason planted by a killer, if any.
    pub(crate) fn take_kill_reason(&self, id: EndpointId) -> Option<CloseReason> {
        let handle = self.endpoints.lock().get(&id).cloned()?;
        let reason = handle.kill_reason.lock().take();
        reason
    }

    /// Kills every endpoint whose activity stamp is older than the idle
    /// timeout. Returns how many were killed.
    pub fn sweep_idle(&self) -> usize {
        let idle = u64::try_from(self.config.idle_timeout.as_millis()).unwrap_or(u64::MAX);
        let now = self.now_millis();
        let stale: Vec<EndpointId> = self
            .endpoints
            .lock()
            .iter()
            .filter(|(_, handle)| {
                now.saturating_sub(handle.last_activity.load(Ordering::Relaxed)) >= idle
            })
            .map(|(id, _)| *id)
            .collect();
        for id in &stale {
            tracing::info!(endpoint = id, "closing idle endpoint");
            self.kill_endpoint(*id, CloseReason::Idle);
        }
        stale.len()
    }

    /// Logs registry lifecycle events. All room bookkeeping already
    /// happened inside the registry; this is observation only.
    pub fn publish_events(&self, events: &[RoomEvent]) {
        for event in events {
            match event {
                RoomEvent::Opened { room_id } => {
                    tracing::info!(room = %room_id, "room opened");
                }
                RoomEvent::MemberJoined { room_id, nickname } => {
                    tracing::info!(room = %room_id, nickname = %nickname, "member joined");
                }
                RoomEvent::Paired { room_id } => {
                    tracing::info!(room = %room_id, "room paired");
                }
                RoomEvent::MemberLeft {
                    room_id,
                    nickname,
                    reason,
                } => {
                    tracing::info!(
                        room = %room_id,
                        nickname = %nickname,
                        reason = %reason,
                        "member left"
                    );
                }
                RoomEvent::Closed { room_id } => {
                    tracing::info!(room = %room_id, "room closed");
                }
            }
        }
    }

    /// Counter snapshot with registry gauges merged in.
    #[must_use]
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        let gauges = self.registry.gauges();
        self.metrics
            .snapshot(gauges.live_rooms, gauges.paired_rooms)
    }

    /// Graceful shutdown: stops the acceptor and supervisor, cancels every
    /// endpoint in parallel, then waits for the table to drain — but no
    /// longer than the configured ceiling.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();

        let handles: Vec<EndpointHandle> = self.endpoints.lock().values().cloned().collect();
        let open = handles.len();
        tracing::info!(endpoints = open, "shutting down");
        for handle in handles {
            handle.kill_reason.lock().get_or_insert(CloseReason::Shutdown);
            handle.cancel.cancel();
        }

        let deadline = Instant::now() + self.config.shutdown_ceiling;
        while Instant::now() < deadline {
            if self.endpoints.lock().is_empty() {
                tracing::info!("shutdown complete");
                return;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        tracing::warn!(
            endpoints = self.endpoint_count(),
            "shutdown ceiling reached with endpoints still open"
        );
    }
}

/// Builds the relay's HTTP router.
fn router(engine: Arc<RelayEngine>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(engine)
}

/// Starts the relay server and returns the bound address, the engine, and
/// the serve task's join handle.
///
/// This is the entry point shared by `main` and the integration tests;
/// tests bind `127.0.0.1:0` for an OS-assigned port.
///
/// # Errors
///
/// Returns the I/O error if the listener cannot bind the configured
/// address.
pub async fn start_server(
    config: RelayConfig,
) -> std::io::Result<(SocketAddr, Arc<RelayEngine>, tokio::task::JoinHandle<()>)> {
    let engine = RelayEngine::new(config);
    let listener = tokio::net::TcpListener::bind(&engine.config().bind_addr).await?;
    let bound_addr = listener.local_addr()?;

    tokio::spawn(supervisor::run(Arc::clone(&engine)));

    let app = router(Arc::clone(&engine));
    let shutdown = engine.shutdown_token();
    let handle = tokio::spawn(async move {
        let service = app.into_make_service_with_connect_info::<SocketAddr>();
        if let Err(err) = axum::serve(listener, service)
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await
        {
            tracing::error!(error = %err, "relay server error");
        }
    });

    Ok((bound_addr, engine, handle))
}

/// Upgrades `GET /ws` into the relay transport.
async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    State(engine): State<Arc<RelayEngine>>,
) -> impl IntoResponse {
    // The transport cap is a backstop only: it sits above the codec's
    // frame ceiling so an oversize frame still reaches the decoder and is
    // answered with a MalformedFrame error instead of a bare close.
    ws.max_message_size(engine.config().max_frame_size.saturating_mul(2))
        .on_upgrade(move |socket| endpoint::handle_socket(socket, remote, engine))
}

/// Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}

/// Counter snapshot as JSON.
async fn metrics_handler(State(engine): State<Arc<RelayEngine>>) -> axum::Json<MetricsSnapshot> {
    axum::Json(engine.metrics_snapshot())
}
