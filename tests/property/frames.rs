//! Property-based tests for the wire codec.
//!
//! Uses proptest to verify:
//! 1. Every client and server frame survives encode -> decode on both the
//!    binary and JSON paths.
//! 2. Random bytes never panic either decoder (they return `Err`).
//! 3. JSON decoding tolerates unknown fields and arbitrary field order.
//! 4. The relay stamping preserves opaque payloads byte for byte.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use sluice_proto::codec::{self, DecodeError, WireFormat, DEFAULT_MAX_FRAME_SIZE};
use sluice_proto::frame::{ClientFrame, ErrorCode, ServerFrame};

// --- Strategies ---

/// Base64-alphabet strings standing in for opaque payload fields.
fn arb_opaque() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+/]{0,512}={0,2}"
}

/// Printable room identifiers within the protocol bounds.
fn arb_room_id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,128}"
}

fn arb_client_frame() -> impl Strategy<Value = ClientFrame> {
    prop_oneof![
        (arb_room_id(), "[a-z0-9-]{0,32}").prop_map(|(room_id, client_id)| {
            ClientFrame::Join { room_id, client_id }
        }),
        arb_opaque().prop_map(|pub_key| ClientFrame::Pubkey { pub_key }),
        (arb_opaque(), arb_opaque()).prop_map(|(encrypted_metadata, metadata_iv)| {
            ClientFrame::FileStart {
                encrypted_metadata,
                metadata_iv,
            }
        }),
        (any::<u64>(), arb_opaque(), arb_opaque()).prop_map(
            |(chunk_num, chunk_data, iv_b64)| ClientFrame::FileChunk {
                chunk_num,
                chunk_data,
                iv_b64,
            }
        ),
        Just(ClientFrame::FileEnd),
        any::<u64>().prop_map(|chunk_num| ClientFrame::ChunkAck { chunk_num }),
        (arb_opaque(), arb_opaque()).prop_map(|(encrypted_metadata, metadata_iv)| {
            ClientFrame::TextMessage {
                encrypted_metadata,
                metadata_iv,
            }
        }),
        Just(ClientFrame::TextReceived),
        Just(ClientFrame::TransferCancelled),
        (arb_opaque(), arb_opaque()).prop_map(|(encrypted_metadata, metadata_iv)| {
            ClientFrame::LocalRelayInfo {
                encrypted_metadata,
                metadata_iv,
            }
        }),
    ]
}

fn arb_mnemonic() -> impl Strategy<Value = String> {
    "[a-z]{2,12}-[a-z]{2,12}"
}

fn arb_error_code() -> impl Strategy<Value = ErrorCode> {
    prop_oneof![
        Just(ErrorCode::MalformedFrame),
        Just(ErrorCode::AlreadyJoined),
        Just(ErrorCode::RoomFull),
        Just(ErrorCode::GlobalLimitExceeded),
        Just(ErrorCode::PerAddressLimitExceeded),
        Just(ErrorCode::UnknownMessage),
        Just(ErrorCode::BackpressureExceeded),
        Just(ErrorCode::IdleTimeout),
    ]
}

fn arb_server_frame() -> impl Strategy<Value = ServerFrame> {
    let from = "[a-z0-9-]{0,32}";
    prop_oneof![
        arb_mnemonic().prop_map(|mnemonic| ServerFrame::Joined { mnemonic }),
        (1u32..=2).prop_map(|count| ServerFrame::Peers { count }),
        (from, arb_mnemonic(), arb_opaque()).prop_map(|(from, mnemonic, pub_key)| {
            ServerFrame::Pubkey {
                from,
                mnemonic,
                pub_key,
            }
        }),
        (from, arb_mnemonic(), any::<u64>(), arb_opaque(), arb_opaque()).prop_map(
            |(from, mnemonic, chunk_num, chunk_data, iv_b64)| ServerFrame::FileChunk {
                from,
                mnemonic,
                chunk_num,
                chunk_data,
                iv_b64,
            }
        ),
        (from, arb_mnemonic()).prop_map(|(from, mnemonic)| ServerFrame::FileEnd {
            from,
            mnemonic
        }),
        (from, arb_mnemonic(), any::<u64>()).prop_map(|(from, mnemonic, chunk_num)| {
            ServerFrame::ChunkAck {
                from,
                mnemonic,
                chunk_num,
            }
        }),
        arb_mnemonic().prop_map(|mnemonic| ServerFrame::PeerDisconnected { mnemonic }),
        (arb_error_code(), proptest::option::of("[ -~]{0,64}")).prop_map(|(code, message)| {
            ServerFrame::Error { code, message }
        }),
    ]
}

// --- Round trips ---

proptest! {
    /// Every client frame survives the binary path.
    #[test]
    fn client_binary_round_trip(frame in arb_client_frame()) {
        let bytes = codec::encode_client(&frame, WireFormat::Binary).expect("encode");
        let decoded = codec::decode_client(&bytes, WireFormat::Binary, DEFAULT_MAX_FRAME_SIZE)
            .expect("decode");
        prop_assert_eq!(frame, decoded);
    }

    /// Every client frame survives the JSON path.
    #[test]
    fn client_json_round_trip(frame in arb_client_frame()) {
        let bytes = codec::encode_client(&frame, WireFormat::Json).expect("encode");
        let decoded = codec::decode_client(&bytes, WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect("decode");
        prop_assert_eq!(frame, decoded);
    }

    /// Every server frame survives the binary path.
    #[test]
    fn server_binary_round_trip(frame in arb_server_frame()) {
        let bytes = codec::encode_server(&frame, WireFormat::Binary).expect("encode");
        let decoded = codec::decode_server(&bytes, WireFormat::Binary, DEFAULT_MAX_FRAME_SIZE)
            .expect("decode");
        prop_assert_eq!(frame, decoded);
    }

    /// Every server frame survives the JSON path.
    #[test]
    fn server_json_round_trip(frame in arb_server_frame()) {
        let bytes = codec::encode_server(&frame, WireFormat::Json).expect("encode");
        let decoded = codec::decode_server(&bytes, WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect("decode");
        prop_assert_eq!(frame, decoded);
    }

    /// Random bytes never panic the binary decoder.
    #[test]
    fn random_bytes_binary_decode_no_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = codec::decode_client(&bytes, WireFormat::Binary, DEFAULT_MAX_FRAME_SIZE);
        let _ = codec::decode_server(&bytes, WireFormat::Binary, DEFAULT_MAX_FRAME_SIZE);
    }

    /// Random bytes never panic the JSON decoder.
    #[test]
    fn random_bytes_json_decode_no_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = codec::decode_client(&bytes, WireFormat::Json, DEFAULT_MAX_FRAME_SIZE);
        let _ = codec::decode_server(&bytes, WireFormat::Json, DEFAULT_MAX_FRAME_SIZE);
    }

    /// Unknown JSON fields are dropped, not errors.
    #[test]
    fn json_unknown_fields_are_ignored(
        room_id in arb_room_id(),
        extra_key in "[a-z]{1,16}",
        extra_value in "[a-z0-9]{0,32}",
    ) {
        prop_assume!(extra_key != "type" && extra_key != "roomId" && extra_key != "clientId");
        let raw = format!(
            r#"{{"type":"join","roomId":{},"clientId":"c","{}":"{}"}}"#,
            serde_json::to_string(&room_id).unwrap(),
            extra_key,
            extra_value,
        );
        let decoded = codec::decode_client(raw.as_bytes(), WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect("unknown fields must be ignored");
        prop_assert_eq!(
            decoded,
            ClientFrame::Join { room_id, client_id: "c".to_owned() }
        );
    }

    /// Field order never matters on the JSON path.
    #[test]
    fn json_field_order_is_irrelevant(chunk_num in any::<u64>(), data in arb_opaque()) {
        let in_order = format!(
            r#"{{"type":"file_chunk","chunk_num":{chunk_num},"chunk_data":{data:?},"iv_b64":"aXY="}}"#
        );
        let reordered = format!(
            r#"{{"iv_b64":"aXY=","chunk_data":{data:?},"chunk_num":{chunk_num},"type":"file_chunk"}}"#
        );
        let a = codec::decode_client(in_order.as_bytes(), WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect("in-order decode");
        let b = codec::decode_client(reordered.as_bytes(), WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect("reordered decode");
        prop_assert_eq!(a, b);
    }

    /// A well-formed envelope with an out-of-protocol tag is UnknownTag,
    /// never Malformed.
    #[test]
    fn json_unknown_tags_are_distinguished(tag in "[a-z_]{1,24}") {
        let known = [
            "join", "pubkey", "file_start", "file_chunk", "file_end", "chunk_ack",
            "text_message", "text_received", "transfer_cancelled", "local_relay_info",
        ];
        prop_assume!(!known.contains(&tag.as_str()));
        let raw = format!(r#"{{"type":"{tag}"}}"#);
        let err = codec::decode_client(raw.as_bytes(), WireFormat::Json, DEFAULT_MAX_FRAME_SIZE)
            .expect_err("unknown tag must not decode");
        prop_assert!(matches!(err, DecodeError::UnknownTag(t) if t == tag));
    }

    /// Stamping a relayable frame preserves its opaque payload bytes.
    #[test]
    fn relay_stamping_preserves_payload(
        data in arb_opaque(),
        iv in arb_opaque(),
        chunk_num in any::<u64>(),
        from in "[a-z0-9-]{1,16}",
        mnemonic in arb_mnemonic(),
    ) {
        let frame = ClientFrame::FileChunk {
            chunk_num,
            chunk_data: data.clone(),
            iv_b64: iv.clone(),
        };
        let relayed = frame.relay(&from, &mnemonic).expect("file_chunk is relayable");
        prop_assert_eq!(
            relayed,
            ServerFrame::FileChunk {
                from,
                mnemonic,
                chunk_num,
                chunk_data: data,
                iv_b64: iv,
            }
        );
    }
}
