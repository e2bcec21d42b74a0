//! Per-connection endpoint driver.
//!
//! Each accepted transport gets two tasks and nothing else ever touches the
//! socket: an inbound pump (this module's [`handle_socket`] body) that reads
//! frames and drives the state machine, and an outbound drainer that owns
//! the write half and serializes every outgoing frame through the
//! endpoint's bounded outbox. Frames destined for the peer are enqueued on
//! the peer's outbox; a full peer outbox that stays full past the stall
//! timeout terminates the slow peer, not the sender.
//!
//! Close is idempotent and always releases the endpoint's room slot before
//! the driver returns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use sluice_proto::codec::{self, DecodeError, WireFormat};
use sluice_proto::frame::{ClientFrame, ErrorCode, ServerFrame, valid_room_id};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::engine::RelayEngine;
use crate::registry::{CloseReason, EndpointId, JoinOutcome, NewMember};

/// How long the teardown path waits for the drainer to flush queued frames
/// before aborting it.
const OUTBOX_DRAIN_DEADLINE: Duration = Duration::from_secs(2);

/// Last inbound wire format, shared between pump and drainer so replies use
/// the encoding the client last spoke.
#[derive(Debug)]
struct FormatCell(AtomicU8);

impl FormatCell {
    fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    fn set(&self, format: WireFormat) {
        let raw = match format {
            WireFormat::Binary => 0,
            WireFormat::Json => 1,
        };
        self.0.store(raw, Ordering::Relaxed);
    }

    fn get(&self) -> WireFormat {
        if self.0.load(Ordering::Relaxed) == 0 {
            WireFormat::Binary
        } else {
            WireFormat::Json
        }
    }
}

/// The endpoint's membership, held once `join` succeeds.
#[derive(Debug)]
struct RoomRef {
    room_id: String,
    generation: u64,
    nickname: String,
    client_id: String,
}

/// Drives one WebSocket connection from accept to close.
///
/// Spawned by the engine's upgrade handler. Registers the endpoint, runs
/// the join handshake and relay loop, then detaches from the room,
/// notifies the peer, and lets the drainer flush before returning.
pub async fn handle_socket(socket: WebSocket, remote: SocketAddr, engine: Arc<RelayEngine>) {
    let (endpoint_id, handle) = engine.register_endpoint();
    tracing::debug!(endpoint = endpoint_id, remote = %remote, "transport accepted");

    let (outbox_tx, outbox_rx) = mpsc::channel(engine.config().outbox_capacity);
    let format = Arc::new(FormatCell::new());
    let (sink, mut stream) = socket.split();

    let mut drainer = tokio::spawn(drain_outbox(
        outbox_rx,
        sink,
        Arc::clone(&format),
        Arc::clone(&handle.last_activity),
        Arc::clone(&engine),
    ));

    let mut pump = Pump {
        endpoint_id,
        remote,
        engine: Arc::clone(&engine),
        outbox: outbox_tx,
        format,
        last_activity: Arc::clone(&handle.last_activity),
        room: None,
    };
    let reason = pump.run(&mut stream, &handle.cancel).await;

    // Detach from the room first: the slot must be free before the close
    // completes, and the peer learns of the departure exactly once.
    if let Some(room) = pump.room.take() {
        let (peer, events) =
            engine
                .registry()
                .leave(&room.room_id, room.generation, endpoint_id, reason);
        engine.publish_events(&events);
        if let Some(peer) = peer {
            let notice = ServerFrame::PeerDisconnected {
                mnemonic: room.nickname.clone(),
            };
            if peer.outbox.try_send(notice).is_err() {
                // A peer that cannot even take the departure notice has a
                // full outbox and nobody left to stall-kill it; dropping a
                // frame is fatal, so finish the job here.
                engine.kill_endpoint(peer.endpoint_id, CloseReason::Backpressure);
            }
        }
    }

    // Dropping the pump drops the last outbox sender for this endpoint
    // (the registry's clone went away with `leave`), so the drainer sees
    // end-of-queue after flushing whatever is already enqueued.
    drop(pump);
    if timeout(OUTBOX_DRAIN_DEADLINE, &mut drainer).await.is_err() {
        drainer.abort();
    }

    engine.deregister_endpoint(endpoint_id);
    tracing::info!(endpoint = endpoint_id, remote = %remote, reason = %reason, "endpoint closed");
}

/// The inbound half of an endpoint: reads frames, drives the state machine,
/// routes to the peer.
struct Pump {
    endpoint_id: EndpointId,
    remote: SocketAddr,
    engine: Arc<RelayEngine>,
    outbox: mpsc::Sender<ServerFrame>,
    format: Arc<FormatCell>,
    last_activity: Arc<AtomicU64>,
    room: Option<RoomRef>,
}

impl Pump {
    /// Runs the handshake and relay phases, returning why the endpoint
    /// closed.
    async fn run(
        &mut self,
        stream: &mut SplitStream<WebSocket>,
        cancel: &CancellationToken,
    ) -> CloseReason {
        let handshake = self.engine.config().join_handshake_timeout;
        match timeout(handshake, self.await_join(stream, cancel)).await {
            Err(_) => {
                tracing::debug!(endpoint = self.endpoint_id, "no join within handshake window");
                return CloseReason::Idle;
            }
            Ok(Err(reason)) => return reason,
            Ok(Ok(())) => {}
        }

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    return self
                        .engine
                        .take_kill_reason(self.endpoint_id)
                        .unwrap_or(CloseReason::Shutdown);
                }
                msg = stream.next() => {
                    let Some(Ok(msg)) = msg else {
                        return CloseReason::Disconnected;
                    };
                    if let Some(reason) = self.on_message(msg).await {
                        return reason;
                    }
                }
            }
        }
    }

    /// Waits for the opening `join`, resolving admission. `Ok` means the
    /// endpoint is joined (and possibly paired); `Err` carries the close
    /// reason.
    async fn await_join(
        &mut self,
        stream: &mut SplitStream<WebSocket>,
        cancel: &CancellationToken,
    ) -> Result<(), CloseReason> {
        loop {
            let msg = tokio::select! {
                () = cancel.cancelled() => {
                    return Err(self
                        .engine
                        .take_kill_reason(self.endpoint_id)
                        .unwrap_or(CloseReason::Shutdown));
                }
                msg = stream.next() => msg,
            };
            let Some(Ok(msg)) = msg else {
                return Err(CloseReason::Disconnected);
            };
            let (payload, wire): (&[u8], WireFormat) = match &msg {
                Message::Binary(data) => (data.as_ref(), WireFormat::Binary),
                Message::Text(text) => (text.as_str().as_bytes(), WireFormat::Json),
                Message::Close(_) => return Err(CloseReason::Disconnected),
                _ => continue,
            };
            self.format.set(wire);
            self.touch();

            match codec::decode_client(payload, wire, self.engine.config().max_frame_size) {
                Ok(ClientFrame::Join { room_id, client_id }) => {
                    return self.join(&room_id, client_id);
                }
                Ok(other) => {
                    // Not an error worth killing the connection over; the
                    // handshake window still bounds how long this can go on.
                    tracing::debug!(
                        endpoint = self.endpoint_id,
                        tag = other.tag(),
                        "frame before join dropped"
                    );
                }
                Err(DecodeError::UnknownTag(tag)) => {
                    tracing::debug!(endpoint = self.endpoint_id, tag = %tag, "unknown frame tag");
                    self.emit(error_frame(ErrorCode::UnknownMessage, Some(&tag)));
                }
                Err(err) => {
                    self.emit(error_frame(ErrorCode::MalformedFrame, Some(&err.to_string())));
                    return Err(CloseReason::Protocol(ErrorCode::MalformedFrame));
                }
            }
        }
    }

    /// Resolves a `join` against the registry and emits the join replies.
    fn join(&mut self, room_id: &str, client_id: String) -> Result<(), CloseReason> {
        if !valid_room_id(room_id) {
            self.emit(error_frame(
                ErrorCode::MalformedFrame,
                Some("room id must be 1..=128 printable characters"),
            ));
            return Err(CloseReason::Protocol(ErrorCode::MalformedFrame));
        }

        let member = NewMember {
            endpoint_id: self.endpoint_id,
            client_id: client_id.clone(),
            outbox: self.outbox.clone(),
        };
        match self
            .engine
            .registry()
            .join(room_id, self.remote.ip(), member)
        {
            Ok((outcome, events)) => {
                self.engine.publish_events(&events);
                self.engine.metrics().record_join();
                match outcome {
                    JoinOutcome::Waiting {
                        nickname,
                        generation,
                    } => {
                        self.emit(ServerFrame::Joined {
                            mnemonic: nickname.clone(),
                        });
                        self.room = Some(RoomRef {
                            room_id: room_id.to_owned(),
                            generation,
                            nickname,
                            client_id,
                        });
                    }
                    JoinOutcome::Paired {
                        nickname,
                        generation,
                        host,
                    } => {
                        self.emit(ServerFrame::Joined {
                            mnemonic: nickname.clone(),
                        });
                        self.emit(ServerFrame::Peers { count: 2 });
                        // The waiting host hears about the pairing here;
                        // its outbox cannot be meaningfully full this early.
                        let _ = host.outbox.try_send(ServerFrame::Peers { count: 2 });
                        self.room = Some(RoomRef {
                            room_id: room_id.to_owned(),
                            generation,
                            nickname,
                            client_id,
                        });
                    }
                }
                Ok(())
            }
            Err(err) => {
                let code = err.code();
                self.engine.metrics().record_rejection(code);
                self.emit(error_frame(code, Some(&err.to_string())));
                Err(CloseReason::Protocol(code))
            }
        }
    }

    /// Handles one transport message in the relay phase. `Some` means the
    /// endpoint is done for that reason.
    async fn on_message(&mut self, msg: Message) -> Option<CloseReason> {
        let (payload, wire): (&[u8], WireFormat) = match &msg {
            Message::Binary(data) => (data.as_ref(), WireFormat::Binary),
            Message::Text(text) => (text.as_str().as_bytes(), WireFormat::Json),
            Message::Close(_) => return Some(CloseReason::Disconnected),
            _ => return None,
        };
        self.format.set(wire);
        self.touch();
        let raw_len = payload.len();

        match codec::decode_client(payload, wire, self.engine.config().max_frame_size) {
            Ok(ClientFrame::Join { .. }) => {
                self.emit(error_frame(ErrorCode::AlreadyJoined, None));
                Some(CloseReason::Protocol(ErrorCode::AlreadyJoined))
            }
            Ok(frame) => {
                self.route(frame, raw_len).await;
                None
            }
            Err(DecodeError::UnknownTag(tag)) => {
                tracing::debug!(endpoint = self.endpoint_id, tag = %tag, "unknown frame tag");
                self.emit(error_frame(ErrorCode::UnknownMessage, Some(&tag)));
                None
            }
            Err(err) => {
                tracing::warn!(endpoint = self.endpoint_id, error = %err, "malformed frame");
                self.emit(error_frame(ErrorCode::MalformedFrame, Some(&err.to_string())));
                Some(CloseReason::Protocol(ErrorCode::MalformedFrame))
            }
        }
    }

    /// Routes a relayable frame to the peer's outbox.
    ///
    /// No peer (not yet paired, or the peer already left) drops the frame
    /// silently. A peer whose outbox stays full past the stall timeout is
    /// terminated with `BackpressureExceeded`; the frame is lost, which is
    /// fatal for that peer anyway.
    async fn route(&self, frame: ClientFrame, raw_len: usize) {
        let Some(room) = &self.room else {
            return;
        };
        let Some(peer) =
            self.engine
                .registry()
                .peer_of(&room.room_id, room.generation, self.endpoint_id)
        else {
            tracing::debug!(
                endpoint = self.endpoint_id,
                tag = frame.tag(),
                "no peer present; frame dropped"
            );
            return;
        };
        let Some(outbound) = frame.relay(&room.client_id, &room.nickname) else {
            return;
        };

        let stall = self.engine.config().write_stall_timeout;
        match timeout(stall, peer.outbox.send(outbound)).await {
            Ok(Ok(())) => self.engine.metrics().record_forward(raw_len),
            Ok(Err(_)) => {
                tracing::debug!(
                    endpoint = self.endpoint_id,
                    peer = peer.endpoint_id,
                    "peer outbox closed; frame dropped"
                );
            }
            Err(_) => {
                tracing::warn!(
                    endpoint = self.endpoint_id,
                    peer = peer.endpoint_id,
                    "peer outbox stalled; terminating peer"
                );
                self.engine
                    .kill_endpoint(peer.endpoint_id, CloseReason::Backpressure);
            }
        }
    }

    /// Enqueues a frame to this endpoint's own outbox. A full outbox here
    /// means the endpoint is already doomed; the frame is dropped and the
    /// stall path will catch up with it.
    fn emit(&self, frame: ServerFrame) {
        if let Err(err) = self.outbox.try_send(frame) {
            tracing::debug!(endpoint = self.endpoint_id, error = %err, "self emit dropped");
        }
    }

    fn touch(&self) {
        self.last_activity
            .store(self.engine.now_millis(), Ordering::Relaxed);
    }
}

/// The outbound half of an endpoint: sole writer to the transport.
///
/// Encodes each queued frame with the endpoint's current wire format and
/// ends with a close frame once the queue finishes (all senders dropped).
async fn drain_outbox(
    mut outbox: mpsc::Receiver<ServerFrame>,
    mut sink: SplitSink<WebSocket, Message>,
    format: Arc<FormatCell>,
    last_activity: Arc<AtomicU64>,
    engine: Arc<RelayEngine>,
) {
    while let Some(frame) = outbox.recv().await {
        let wire = format.get();
        let bytes = match codec::encode_server(&frame, wire) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(tag = frame.tag(), error = %err, "dropping unencodable frame");
                continue;
            }
        };
        let msg = match wire {
            WireFormat::Binary => Message::Binary(bytes.into()),
            WireFormat::Json => match String::from_utf8(bytes) {
                Ok(text) => Message::Text(text.into()),
                Err(err) => {
                    tracing::warn!(error = %err, "json frame was not utf-8");
                    continue;
                }
            },
        };
        if sink.send(msg).await.is_err() {
            // Writer failure is terminal; the pump will observe the closed
            // transport on its side.
            break;
        }
        last_activity.store(engine.now_millis(), Ordering::Relaxed);
    }
    let _ = sink.send(Message::Close(None)).await;
}

/// Builds an [`ServerFrame::Error`] with an optional detail message.
fn error_frame(code: ErrorCode, message: Option<&str>) -> ServerFrame {
    ServerFrame::Error {
        code,
        message: message.map(str::to_owned),
    }
}
