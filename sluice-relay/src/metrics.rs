//! Process-wide relay counters.
//!
//! Plain atomics bumped from the hot paths; gauges (live and paired rooms)
//! come from the registry at snapshot time. The snapshot is served as JSON
//! on `GET /metrics` and logged periodically by the supervisor.

use std::sync::atomic::{AtomicU64, Ordering};

use sluice_proto::frame::ErrorCode;

/// Counters owned by the relay engine.
#[derive(Debug, Default)]
pub struct Metrics {
    accepted_joins: AtomicU64,
    rejected_room_full: AtomicU64,
    rejected_global_limit: AtomicU64,
    rejected_per_address_limit: AtomicU64,
    frames_forwarded: AtomicU64,
    bytes_forwarded: AtomicU64,
}

/// Point-in-time view of every counter, plus registry gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Rooms currently present in the registry.
    pub live_rooms: u64,
    /// Rooms currently holding two endpoints.
    pub paired_rooms: u64,
    /// Joins accepted since process start.
    pub accepted_joins: u64,
    /// Joins rejected with `RoomFull`.
    pub rejected_room_full: u64,
    /// Joins rejected with `GlobalLimitExceeded`.
    pub rejected_global_limit: u64,
    /// Joins rejected with `PerAddressLimitExceeded`.
    pub rejected_per_address_limit: u64,
    /// Relayable frames delivered to a peer outbox.
    pub frames_forwarded: u64,
    /// Encoded bytes of those frames as received from the sender.
    pub bytes_forwarded: u64,
}

impl Metrics {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted join.
    pub fn record_join(&self) {
        self.accepted_joins.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a rejected join under its error code. Codes outside the
    /// admission set are ignored; they are protocol errors, not rejections.
    pub fn record_rejection(&self, code: ErrorCode) {
        let counter = match code {
            ErrorCode::RoomFull => &self.rejected_room_full,
            ErrorCode::GlobalLimitExceeded => &self.rejected_global_limit,
            ErrorCode::PerAddressLimitExceeded => &self.rejected_per_address_limit,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one forwarded frame of `bytes` encoded length.
    pub fn record_forward(&self, bytes: usize) {
        self.frames_forwarded.fetch_add(1, Ordering::Relaxed);
        self.bytes_forwarded
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Snapshots the counters, merging in the registry gauges.
    #[must_use]
    pub fn snapshot(&self, live_rooms: u64, paired_rooms: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            live_rooms,
            paired_rooms,
            accepted_joins: self.accepted_joins.load(Ordering::Relaxed),
            rejected_room_full: self.rejected_room_full.load(Ordering::Relaxed),
            rejected_global_limit: self.rejected_global_limit.load(Ordering::Relaxed),
            rejected_per_address_limit: self.rejected_per_address_limit.load(Ordering::Relaxed),
            frames_forwarded: self.frames_forwarded.load(Ordering::Relaxed),
            bytes_forwarded: self.bytes_forwarded.load(Ordering::Relaxed),
        }
    }
}
