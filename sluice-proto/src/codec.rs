//! Encode/decode for the sluice wire protocol.
//!
//! Two encodings share the transport and are distinguished by the transport
//! frame kind: binary messages carry bincode (the compact, preferred
//! encoding), text messages carry JSON (the legacy fallback). Both decode
//! into the same in-memory frame types from [`crate::frame`]; nothing
//! downstream branches on the encoding.
//!
//! JSON decoding ignores unknown fields and accepts any field order. A JSON
//! object that is structurally sound but carries an unrecognized `"type"`
//! tag is reported as [`DecodeError::UnknownTag`] so the relay can answer
//! with a non-fatal error; everything else that fails to parse — truncated
//! input, bad UTF-8, missing tag, wrong field types, binary garbage — is
//! [`DecodeError::Malformed`] and fatal for the sender.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::frame::{ClientFrame, ServerFrame};

/// Default ceiling on a single encoded frame, in bytes.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 1024 * 1024;

/// Inbound tags accepted from clients. Used to tell an unknown tag apart
/// from a malformed envelope on the JSON path.
const CLIENT_TAGS: &[&str] = &[
    "join",
    "pubkey",
    "file_start",
    "file_chunk",
    "file_end",
    "chunk_ack",
    "text_message",
    "text_received",
    "transfer_cancelled",
    "local_relay_info",
];

/// Outbound tags emitted by the relay.
const SERVER_TAGS: &[&str] = &[
    "joined",
    "peers",
    "pubkey",
    "file_start",
    "file_chunk",
    "file_end",
    "chunk_ack",
    "text_message",
    "text_received",
    "transfer_cancelled",
    "peer_disconnected",
    "local_relay_info",
    "error",
];

/// Which of the two coexisting encodings a frame used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// bincode over a binary transport message. Preferred.
    Binary,
    /// JSON over a text transport message. Legacy fallback.
    Json,
}

/// Error type for frame encoding.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Serialization failed.
    #[error("frame encode error: {0}")]
    Serialization(String),
}

/// Error type for frame decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes do not form a frame: truncated, corrupt, missing tag, or
    /// wrongly typed fields.
    #[error("malformed frame: {0}")]
    Malformed(String),
    /// The envelope parsed but its tag is not part of the protocol.
    #[error("unknown frame tag `{0}`")]
    UnknownTag(String),
    /// The encoded frame exceeds the configured size ceiling.
    #[error("frame of {len} bytes exceeds the {max} byte limit")]
    Oversize {
        /// Observed size.
        len: usize,
        /// Configured ceiling.
        max: usize,
    },
}

/// Encodes a [`ClientFrame`] in the given wire format.
///
/// # Errors
///
/// Returns [`EncodeError::Serialization`] if the frame cannot be encoded.
pub fn encode_client(frame: &ClientFrame, format: WireFormat) -> Result<Vec<u8>, EncodeError> {
    encode(frame, format)
}

/// Encodes a [`ServerFrame`] in the given wire format.
///
/// # Errors
///
/// Returns [`EncodeError::Serialization`] if the frame cannot be encoded.
pub fn encode_server(frame: &ServerFrame, format: WireFormat) -> Result<Vec<u8>, EncodeError> {
    encode(frame, format)
}

/// Decodes a [`ClientFrame`], enforcing the size ceiling.
///
/// # Errors
///
/// Returns [`DecodeError::Oversize`] past the ceiling,
/// [`DecodeError::UnknownTag`] for a well-formed JSON envelope with an
/// unrecognized tag, and [`DecodeError::Malformed`] otherwise.
pub fn decode_client(
    bytes: &[u8],
    format: WireFormat,
    max_frame_size: usize,
) -> Result<ClientFrame, DecodeError> {
    decode(bytes, format, max_frame_size, CLIENT_TAGS)
}

/// Decodes a [`ServerFrame`], enforcing the size ceiling.
///
/// # Errors
///
/// Same contract as [`decode_client`].
pub fn decode_server(
    bytes: &[u8],
    format: WireFormat,
    max_frame_size: usize,
) -> Result<ServerFrame, DecodeError> {
    decode(bytes, format, max_frame_size, SERVER_TAGS)
}

fn encode<T>(frame: &T, format: WireFormat) -> Result<Vec<u8>, EncodeError>
where
    T: Serialize + bincode::Encode,
{
    match format {
        WireFormat::Binary => bincode::encode_to_vec(frame, bincode::config::standard())
            .map_err(|e| EncodeError::Serialization(e.to_string())),
        WireFormat::Json => {
            serde_json::to_vec(frame).map_err(|e| EncodeError::Serialization(e.to_string()))
        }
    }
}

fn decode<T>(
    bytes: &[u8],
    format: WireFormat,
    max_frame_size: usize,
    known_tags: &[&str],
) -> Result<T, DecodeError>
where
    T: DeserializeOwned + bincode::Decode<()>,
{
    if bytes.len() > max_frame_size {
        return Err(DecodeError::Oversize {
            len: bytes.len(),
            max: max_frame_size,
        });
    }
    match format {
        WireFormat::Binary => bincode::decode_from_slice(bytes, bincode::config::standard())
            .map(|(frame, _len)| frame)
            .map_err(|e| DecodeError::Malformed(e.to_string())),
        WireFormat::Json => match serde_json::from_slice::<T>(bytes) {
            Ok(frame) => Ok(frame),
            Err(e) => Err(classify_json_failure(bytes, known_tags, &e)),
        },
    }
}

/// Distinguishes an unknown tag from a malformed envelope after a JSON
/// decode failure. The envelope must re-parse as an object whose `"type"`
/// is a string outside the known set to count as merely unknown.
fn classify_json_failure(
    bytes: &[u8],
    known_tags: &[&str],
    original: &serde_json::Error,
) -> DecodeError {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) else {
        return DecodeError::Malformed(original.to_string());
    };
    match value.get("type").and_then(serde_json::Value::as_str) {
        Some(tag) if !known_tags.contains(&tag) => DecodeError::UnknownTag(tag.to_owned()),
        _ => DecodeError::Malformed(original.to_string()),
    }
}
