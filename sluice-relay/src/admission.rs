//! Admission control for new rooms.
//!
//! Two independent caps: a relay-wide live-room bound and a per-source-
//! address bound attributed to the room's first joiner. The gate is plain
//! data owned by the room registry and only ever touched under the registry
//! lock, which is what makes reserve-then-insert atomic with respect to
//! concurrent joiners.

use std::collections::HashMap;
use std::net::IpAddr;

/// Why a room slot was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// The relay-wide room cap is reached.
    #[error("relay is at its room capacity")]
    GlobalLimit,
    /// The source address already holds its maximum number of rooms.
    #[error("too many open rooms from this address")]
    PerAddressLimit,
}

/// Counters and caps for room admission. A cap of 0 disables that check.
#[derive(Debug)]
pub struct AdmissionGate {
    max_rooms: usize,
    max_rooms_per_addr: usize,
    live_rooms: usize,
    per_addr: HashMap<IpAddr, usize>,
}

impl AdmissionGate {
    /// Creates a gate with the given caps. 0 disables a cap.
    #[must_use]
    pub fn new(max_rooms: usize, max_rooms_per_addr: usize) -> Self {
        Self {
            max_rooms,
            max_rooms_per_addr,
            live_rooms: 0,
            per_addr: HashMap::new(),
        }
    }

    /// Reserves one room slot attributed to `addr`.
    ///
    /// Both caps must admit the slot; nothing is counted on refusal.
    ///
    /// # Errors
    ///
    /// [`AdmissionError::GlobalLimit`] or [`AdmissionError::PerAddressLimit`]
    /// when the corresponding cap is reached.
    pub fn reserve(&mut self, addr: IpAddr) -> Result<(), AdmissionError> {
        if self.max_rooms != 0 && self.live_rooms >= self.max_rooms {
            return Err(AdmissionError::GlobalLimit);
        }
        let held = self.per_addr.get(&addr).copied().unwrap_or(0);
        if self.max_rooms_per_addr != 0 && held >= self.max_rooms_per_addr {
            return Err(AdmissionError::PerAddressLimit);
        }
        self.live_rooms += 1;
        *self.per_addr.entry(addr).or_insert(0) += 1;
        Ok(())
    }

    /// Releases a slot previously reserved for `addr`.
    pub fn release(&mut self, addr: IpAddr) {
        self.live_rooms = self.live_rooms.saturating_sub(1);
        if let Some(held) = self.per_addr.get_mut(&addr) {
            *held = held.saturating_sub(1);
            if *held == 0 {
                self.per_addr.remove(&addr);
            }
        }
    }

    /// Number of reserved (live) room slots.
    #[must_use]
    pub fn live_rooms(&self) -> usize {
        self.live_rooms
    }

    /// Number of slots held by `addr`.
    #[must_use]
    pub fn rooms_for(&self, addr: IpAddr) -> usize {
        self.per_addr.get(&addr).copied().unwrap_or(0)
    }
}
