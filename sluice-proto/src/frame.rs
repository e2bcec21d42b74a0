//! The two wire message shapes of the sluice protocol.
//!
//! [`ClientFrame`] is everything a client may send to the relay;
//! [`ServerFrame`] is everything the relay may send back. Every payload
//! field the relay forwards (`pub`, `encrypted_metadata`, `metadata_iv`,
//! `chunk_data`, `iv_b64`) is a base64 string produced and consumed by the
//! peers' own crypto — the relay treats them as opaque and never decodes
//! them.
//!
//! The enums derive serde traits for the JSON encoding (internally tagged
//! on `"type"`, matching the legacy text protocol) and bincode's native
//! `Encode`/`Decode` for the binary encoding. The serde attributes only
//! shape the JSON; the binary layout is governed by bincode alone.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Shortest accepted room identifier.
pub const MIN_ROOM_ID_LEN: usize = 1;

/// Longest accepted room identifier.
pub const MAX_ROOM_ID_LEN: usize = 128;

/// Messages a client sends to the relay.
///
/// The first frame on any connection must be [`ClientFrame::Join`]; every
/// other variant is only meaningful once the room is paired and is
/// forwarded to the peer (see [`ClientFrame::relay`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Enter a room, creating it if this is the first join.
    Join {
        /// Caller-chosen room identifier, 1..=128 printable characters.
        #[serde(rename = "roomId")]
        room_id: String,
        /// Opaque client-supplied identifier. Not trusted for uniqueness;
        /// used for logging and for the `from` field on relayed frames.
        #[serde(rename = "clientId", default)]
        client_id: String,
    },

    /// Sender's public key for the peers' key exchange.
    Pubkey {
        /// Base64 public key material. Opaque to the relay.
        #[serde(rename = "pub")]
        pub_key: String,
    },

    /// Announces an incoming file transfer.
    FileStart {
        /// Base64 ciphertext of the file metadata.
        encrypted_metadata: String,
        /// Base64 IV for the metadata ciphertext.
        metadata_iv: String,
    },

    /// One encrypted chunk of the file body.
    FileChunk {
        /// Zero-based chunk sequence number.
        chunk_num: u64,
        /// Base64 chunk ciphertext.
        chunk_data: String,
        /// Base64 IV for this chunk.
        iv_b64: String,
    },

    /// Marks the end of the file body.
    FileEnd,

    /// Receiver acknowledges a chunk. Advisory; used by senders for pacing.
    ChunkAck {
        /// The acknowledged chunk number.
        chunk_num: u64,
    },

    /// An encrypted text message.
    TextMessage {
        /// Base64 ciphertext of the message.
        encrypted_metadata: String,
        /// Base64 IV for the ciphertext.
        metadata_iv: String,
    },

    /// Receiver confirms a text message arrived.
    TextReceived,

    /// Sender abandons the transfer in progress.
    TransferCancelled,

    /// Advertises a direct local-network route to the peer.
    LocalRelayInfo {
        /// Base64 ciphertext of the route description.
        encrypted_metadata: String,
        /// Base64 IV for the ciphertext.
        metadata_iv: String,
    },
}

/// Messages the relay sends to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Join accepted; carries the nickname the relay assigned.
    Joined {
        /// Two-word nickname assigned to the joining endpoint.
        mnemonic: String,
    },

    /// Both peers are present; either side may start the key exchange.
    Peers {
        /// Member count of the room. Always 2 on the current protocol.
        count: u32,
    },

    /// Peer's public key, forwarded.
    Pubkey {
        /// Sender's client id.
        from: String,
        /// Sender's relay-assigned nickname.
        mnemonic: String,
        /// Base64 public key material, unchanged.
        #[serde(rename = "pub")]
        pub_key: String,
    },

    /// Peer announced a file transfer, forwarded.
    FileStart {
        from: String,
        mnemonic: String,
        encrypted_metadata: String,
        metadata_iv: String,
    },

    /// One file chunk, forwarded.
    FileChunk {
        from: String,
        mnemonic: String,
        chunk_num: u64,
        chunk_data: String,
        iv_b64: String,
    },

    /// Peer finished sending the file body.
    FileEnd { from: String, mnemonic: String },

    /// Peer acknowledged a chunk.
    ChunkAck {
        from: String,
        mnemonic: String,
        chunk_num: u64,
    },

    /// Encrypted text message, forwarded.
    TextMessage {
        from: String,
        mnemonic: String,
        encrypted_metadata: String,
        metadata_iv: String,
    },

    /// Peer confirmed a text message.
    TextReceived { from: String, mnemonic: String },

    /// Peer abandoned the transfer.
    TransferCancelled { from: String, mnemonic: String },

    /// The other endpoint left the room or was terminated.
    PeerDisconnected {
        /// Nickname of the departed peer. Empty when it never joined fully.
        mnemonic: String,
    },

    /// Peer advertised a local-network route.
    LocalRelayInfo {
        from: String,
        mnemonic: String,
        encrypted_metadata: String,
        metadata_iv: String,
    },

    /// Structured error report.
    Error {
        /// Machine-readable error code.
        code: ErrorCode,
        /// Optional human-readable detail.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// Error codes carried by [`ServerFrame::Error`].
///
/// Serialized as their PascalCase names on the JSON path (`"RoomFull"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum ErrorCode {
    /// Inbound bytes could not be decoded as a frame, or the frame was
    /// oversized. Fatal for the offending endpoint.
    MalformedFrame,
    /// A `join` arrived on an endpoint that already joined a room. Fatal.
    AlreadyJoined,
    /// The room already holds two peers. Fatal for the third joiner.
    RoomFull,
    /// The relay-wide room cap is reached. Fatal.
    GlobalLimitExceeded,
    /// The per-source-address room cap is reached. Fatal.
    PerAddressLimitExceeded,
    /// The frame tag is not one the relay understands. Non-fatal.
    UnknownMessage,
    /// The endpoint's outbound queue stayed full past the stall timeout.
    /// No error frame is sent; the code appears in logs and close reasons.
    BackpressureExceeded,
    /// The transport was idle past the idle timeout. No error frame.
    IdleTimeout,
}

impl ErrorCode {
    /// The wire spelling of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedFrame => "MalformedFrame",
            Self::AlreadyJoined => "AlreadyJoined",
            Self::RoomFull => "RoomFull",
            Self::GlobalLimitExceeded => "GlobalLimitExceeded",
            Self::PerAddressLimitExceeded => "PerAddressLimitExceeded",
            Self::UnknownMessage => "UnknownMessage",
            Self::BackpressureExceeded => "BackpressureExceeded",
            Self::IdleTimeout => "IdleTimeout",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClientFrame {
    /// The wire tag of this frame, for logging.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Pubkey { .. } => "pubkey",
            Self::FileStart { .. } => "file_start",
            Self::FileChunk { .. } => "file_chunk",
            Self::FileEnd => "file_end",
            Self::ChunkAck { .. } => "chunk_ack",
            Self::TextMessage { .. } => "text_message",
            Self::TextReceived => "text_received",
            Self::TransferCancelled => "transfer_cancelled",
            Self::LocalRelayInfo { .. } => "local_relay_info",
        }
    }

    /// Whether this frame belongs to the peer-to-peer subset the relay
    /// forwards verbatim.
    #[must_use]
    pub const fn is_relayable(&self) -> bool {
        !matches!(self, Self::Join { .. })
    }

    /// Converts a relayable frame into the [`ServerFrame`] delivered to the
    /// peer, stamping the sender's identity. Returns `None` for `join`.
    ///
    /// Opaque fields pass through unchanged; the relay adds only `from`
    /// (the sender's client id) and `mnemonic` (the sender's nickname).
    #[must_use]
    pub fn relay(self, from: &str, mnemonic: &str) -> Option<ServerFrame> {
        let from = from.to_owned();
        let mnemonic = mnemonic.to_owned();
        Some(match self {
            Self::Join { .. } => return None,
            Self::Pubkey { pub_key } => ServerFrame::Pubkey {
                from,
                mnemonic,
                pub_key,
            },
            Self::FileStart {
                encrypted_metadata,
                metadata_iv,
            } => ServerFrame::FileStart {
                from,
                mnemonic,
                encrypted_metadata,
                metadata_iv,
            },
            Self::FileChunk {
                chunk_num,
                chunk_data,
                iv_b64,
            } => ServerFrame::FileChunk {
                from,
                mnemonic,
                chunk_num,
                chunk_data,
                iv_b64,
            },
            Self::FileEnd => ServerFrame::FileEnd { from, mnemonic },
            Self::ChunkAck { chunk_num } => ServerFrame::ChunkAck {
                from,
                mnemonic,
                chunk_num,
            },
            Self::TextMessage {
                encrypted_metadata,
                metadata_iv,
            } => ServerFrame::TextMessage {
                from,
                mnemonic,
                encrypted_metadata,
                metadata_iv,
            },
            Self::TextReceived => ServerFrame::TextReceived { from, mnemonic },
            Self::TransferCancelled => ServerFrame::TransferCancelled { from, mnemonic },
            Self::LocalRelayInfo {
                encrypted_metadata,
                metadata_iv,
            } => ServerFrame::LocalRelayInfo {
                from,
                mnemonic,
                encrypted_metadata,
                metadata_iv,
            },
        })
    }
}

impl ServerFrame {
    /// The wire tag of this frame, for logging.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Joined { .. } => "joined",
            Self::Peers { .. } => "peers",
            Self::Pubkey { .. } => "pubkey",
            Self::FileStart { .. } => "file_start",
            Self::FileChunk { .. } => "file_chunk",
            Self::FileEnd { .. } => "file_end",
            Self::ChunkAck { .. } => "chunk_ack",
            Self::TextMessage { .. } => "text_message",
            Self::TextReceived { .. } => "text_received",
            Self::TransferCancelled { .. } => "transfer_cancelled",
            Self::PeerDisconnected { .. } => "peer_disconnected",
            Self::LocalRelayInfo { .. } => "local_relay_info",
            Self::Error { .. } => "error",
        }
    }
}

/// Checks a room identifier against the protocol bounds: 1..=128
/// characters, all printable (no control characters).
#[must_use]
pub fn valid_room_id(id: &str) -> bool {
    let len = id.chars().count();
    (MIN_ROOM_ID_LEN..=MAX_ROOM_ID_LEN).contains(&len) && !id.chars().any(char::is_control)
}
