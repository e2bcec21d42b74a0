//! The room registry: rendezvous state for every live room.
//!
//! A room holds at most two members; the first joiner is the host. All
//! mutating operations (join, pair, leave, reap) run synchronously under a
//! single lock that also guards the admission counters, so slot
//! reservation is atomic with room creation and there is no window for two
//! racing joiners to both open the "last" room.
//!
//! Frame delivery never happens under the lock: operations hand back cloned
//! [`MemberHandle`]s and the caller enqueues outside. Endpoints refer back
//! to their room by `(room id, generation)` — the generation check makes a
//! stale leave against a re-created room a no-op instead of a
//! use-after-free of somebody else's slot.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use sluice_proto::frame::{ErrorCode, ServerFrame};
use tokio::sync::mpsc;

use crate::admission::{AdmissionError, AdmissionGate};
use crate::nickname;

/// Process-local endpoint identifier, assigned by the engine on accept.
pub type EndpointId = u64;

/// Why an endpoint closed; reported in lifecycle events and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The transport closed or failed.
    Disconnected,
    /// A protocol or admission error frame was sent before closing.
    Protocol(ErrorCode),
    /// The endpoint's outbox stayed full past the stall timeout.
    Backpressure,
    /// The transport was idle past the idle timeout.
    Idle,
    /// Process shutdown.
    Shutdown,
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => f.write_str("disconnected"),
            Self::Protocol(code) => write!(f, "protocol error: {code}"),
            Self::Backpressure => f.write_str("backpressure exceeded"),
            Self::Idle => f.write_str("idle timeout"),
            Self::Shutdown => f.write_str("shutdown"),
        }
    }
}

/// A member's routing surface, cloned out of the registry for delivery.
#[derive(Debug, Clone)]
pub struct MemberHandle {
    /// The member's endpoint id.
    pub endpoint_id: EndpointId,
    /// Client-supplied identifier, stamped into relayed frames as `from`.
    pub client_id: String,
    /// Relay-assigned nickname, unique within the room.
    pub nickname: String,
    /// Producer side of the member's bounded outbox.
    pub outbox: mpsc::Sender<ServerFrame>,
}

/// What an endpoint brings to `join`; the nickname is assigned inside.
#[derive(Debug)]
pub struct NewMember {
    /// The joining endpoint's id.
    pub endpoint_id: EndpointId,
    /// Client-supplied identifier.
    pub client_id: String,
    /// Producer side of the joining endpoint's outbox.
    pub outbox: mpsc::Sender<ServerFrame>,
}

/// Result of a successful join.
#[derive(Debug)]
pub enum JoinOutcome {
    /// First into the room; waiting for a peer.
    Waiting {
        /// Nickname assigned to the joiner.
        nickname: String,
        /// Generation of the (possibly re-created) room.
        generation: u64,
    },
    /// Second into the room; both endpoints are now paired.
    Paired {
        /// Nickname assigned to the joiner.
        nickname: String,
        /// Generation of the room.
        generation: u64,
        /// The host's handle, so the caller can notify it of the pairing.
        host: MemberHandle,
    },
}

/// Why a join was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// The room already holds two members.
    #[error("room is full")]
    RoomFull,
    /// The room is winding down after a member left.
    #[error("room is closing")]
    RoomClosing,
    /// The admission gate refused a new room slot.
    #[error(transparent)]
    Admission(#[from] AdmissionError),
}

impl JoinError {
    /// The wire error code reported to the refused client.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            // A closing room refuses joins the same way a full one does.
            Self::RoomFull | Self::RoomClosing => ErrorCode::RoomFull,
            Self::Admission(AdmissionError::GlobalLimit) => ErrorCode::GlobalLimitExceeded,
            Self::Admission(AdmissionError::PerAddressLimit) => {
                ErrorCode::PerAddressLimitExceeded
            }
        }
    }
}

/// Lifecycle events raised by registry operations, consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// A room was created.
    Opened {
        room_id: String,
    },
    /// An endpoint joined a room.
    MemberJoined {
        room_id: String,
        nickname: String,
    },
    /// The room reached two members.
    Paired {
        room_id: String,
    },
    /// An endpoint left a room.
    MemberLeft {
        room_id: String,
        nickname: String,
        reason: CloseReason,
    },
    /// The room was removed from the registry.
    Closed {
        room_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoomState {
    /// One member, waiting for a peer.
    One,
    /// Two members, frames flowing.
    Paired,
    /// A member left a paired room; the survivor drains, no new joins.
    Closing,
    /// No members; eligible for reaping after the grace period.
    Empty,
}

#[derive(Debug)]
struct Room {
    generation: u64,
    host_addr: IpAddr,
    #[allow(dead_code)]
    created_at: Instant,
    emptied_at: Option<Instant>,
    state: RoomState,
    /// Index 0 is the host.
    members: Vec<MemberHandle>,
}

#[derive(Debug)]
struct RegistryInner {
    rooms: HashMap<String, Room>,
    gate: AdmissionGate,
    next_generation: u64,
}

/// Gauges derived from registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryGauges {
    /// Rooms holding at least a reserved slot.
    pub live_rooms: u64,
    /// Rooms currently paired.
    pub paired_rooms: u64,
}

/// The multi-tenant room table. See the module docs for locking rules.
#[derive(Debug)]
pub struct RoomRegistry {
    inner: Mutex<RegistryInner>,
}

impl RoomRegistry {
    /// Creates an empty registry with the given admission caps
    /// (0 disables a cap).
    #[must_use]
    pub fn new(max_rooms: usize, max_rooms_per_ip: usize) -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                rooms: HashMap::new(),
                gate: AdmissionGate::new(max_rooms, max_rooms_per_ip),
                next_generation: 0,
            }),
        }
    }

    /// Joins `member` into `room_id`, creating the room if needed.
    ///
    /// `addr` is the joiner's source address; it is charged for the room
    /// slot only when the join creates the room. The assigned nickname is
    /// guaranteed unique within the room.
    ///
    /// # Errors
    ///
    /// [`JoinError::RoomFull`] on a paired room, [`JoinError::RoomClosing`]
    /// on a draining one, or an admission refusal for a new room.
    pub fn join(
        &self,
        room_id: &str,
        addr: IpAddr,
        member: NewMember,
    ) -> Result<(JoinOutcome, Vec<RoomEvent>), JoinError> {
        let inner = &mut *self.inner.lock();
        let mut events = Vec::new();

        match inner.rooms.get(room_id).map(|room| room.state) {
            Some(RoomState::Paired) => Err(JoinError::RoomFull),
            Some(RoomState::Closing) => Err(JoinError::RoomClosing),
            Some(RoomState::One) => {
                // get() above proved presence; re-borrow mutably.
                let Some(room) = inner.rooms.get_mut(room_id) else {
                    return Err(JoinError::RoomClosing);
                };
                let nickname = fresh_nickname(&room.members);
                room.members.push(MemberHandle {
                    endpoint_id: member.endpoint_id,
                    client_id: member.client_id,
                    nickname: nickname.clone(),
                    outbox: member.outbox,
                });
                room.state = RoomState::Paired;
                let generation = room.generation;
                let host = room.members[0].clone();
                events.push(RoomEvent::MemberJoined {
                    room_id: room_id.to_owned(),
                    nickname: nickname.clone(),
                });
                events.push(RoomEvent::Paired {
                    room_id: room_id.to_owned(),
                });
                Ok((
                    JoinOutcome::Paired {
                        nickname,
                        generation,
                        host,
                    },
                    events,
                ))
            }
            state @ (Some(RoomState::Empty) | None) => {
                // An Empty room's slot was already released; a join on its
                // id re-creates the room under a fresh generation.
                inner.gate.reserve(addr)?;
                if state.is_some() {
                    events.push(RoomEvent::Closed {
                        room_id: room_id.to_owned(),
                    });
                }
                let generation = inner.next_generation;
                inner.next_generation += 1;
                let nickname = fresh_nickname(&[]);
                inner.rooms.insert(
                    room_id.to_owned(),
                    Room {
                        generation,
                        host_addr: addr,
                        created_at: Instant::now(),
                        emptied_at: None,
                        state: RoomState::One,
                        members: vec![MemberHandle {
                            endpoint_id: member.endpoint_id,
                            client_id: member.client_id,
                            nickname: nickname.clone(),
                            outbox: member.outbox,
                        }],
                    },
                );
                events.push(RoomEvent::Opened {
                    room_id: room_id.to_owned(),
                });
                events.push(RoomEvent::MemberJoined {
                    room_id: room_id.to_owned(),
                    nickname: nickname.clone(),
                });
                Ok((
                    JoinOutcome::Waiting {
                        nickname,
                        generation,
                    },
                    events,
                ))
            }
        }
    }

    /// Removes an endpoint from its room. Idempotent: a repeat call, a
    /// stale generation, or an unknown endpoint all return no peer and no
    /// events.
    ///
    /// Returns the surviving peer's handle (for `peer_disconnected`
    /// delivery) if one remains. When the last member leaves, the room goes
    /// Empty and its admission slot is released immediately; the entry
    /// itself lingers until [`Self::reap_empty`].
    pub fn leave(
        &self,
        room_id: &str,
        generation: u64,
        endpoint_id: EndpointId,
        reason: CloseReason,
    ) -> (Option<MemberHandle>, Vec<RoomEvent>) {
        let inner = &mut *self.inner.lock();
        let mut events = Vec::new();

        let Some(room) = inner.rooms.get_mut(room_id) else {
            return (None, events);
        };
        if room.generation != generation {
            return (None, events);
        }
        let Some(pos) = room
            .members
            .iter()
            .position(|m| m.endpoint_id == endpoint_id)
        else {
            return (None, events);
        };

        let member = room.members.remove(pos);
        events.push(RoomEvent::MemberLeft {
            room_id: room_id.to_owned(),
            nickname: member.nickname,
            reason,
        });

        let peer = room.members.first().cloned();
        if room.members.is_empty() {
            room.state = RoomState::Empty;
            room.emptied_at = Some(Instant::now());
            inner.gate.release(room.host_addr);
        } else {
            room.state = RoomState::Closing;
        }
        (peer, events)
    }

    /// Looks up the other member of a paired room, for routing.
    ///
    /// Returns `None` when the room is gone, re-created under a newer
    /// generation, or not (any longer) paired — the caller drops the frame
    /// silently in every such case.
    #[must_use]
    pub fn peer_of(
        &self,
        room_id: &str,
        generation: u64,
        endpoint_id: EndpointId,
    ) -> Option<MemberHandle> {
        let inner = self.inner.lock();
        let room = inner.rooms.get(room_id)?;
        if room.generation != generation || room.state != RoomState::Paired {
            return None;
        }
        room.members
            .iter()
            .find(|m| m.endpoint_id != endpoint_id)
            .cloned()
    }

    /// Removes Empty rooms whose grace period has elapsed, returning the
    /// `Closed` events.
    pub fn reap_empty(&self, grace: Duration) -> Vec<RoomEvent> {
        let inner = &mut *self.inner.lock();
        let now = Instant::now();
        let expired: Vec<String> = inner
            .rooms
            .iter()
            .filter(|(_, room)| {
                room.state == RoomState::Empty
                    && room
                        .emptied_at
                        .is_some_and(|at| now.duration_since(at) >= grace)
            })
            .map(|(id, _)| id.clone())
            .collect();
        expired
            .into_iter()
            .map(|room_id| {
                inner.rooms.remove(&room_id);
                RoomEvent::Closed { room_id }
            })
            .collect()
    }

    /// Current gauges for metrics.
    #[must_use]
    pub fn gauges(&self) -> RegistryGauges {
        let inner = self.inner.lock();
        RegistryGauges {
            live_rooms: inner.gate.live_rooms() as u64,
            paired_rooms: inner
                .rooms
                .values()
                .filter(|room| room.state == RoomState::Paired)
                .count() as u64,
        }
    }
}

/// Draws nicknames until one differs from every current member's.
fn fresh_nickname(members: &[MemberHandle]) -> String {
    loop {
        let candidate = nickname::generate();
        if !members.iter().any(|m| m.nickname == candidate) {
            return candidate;
        }
    }
}
