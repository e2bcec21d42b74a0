//! Relay-path tests: sender stamping, payload opacity, per-sender FIFO,
//! cross-encoding interop, and the protocol error taxonomy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{
    assert_silent, join_pair, recv_frame, recv_frame_or_close, send_frame, send_json,
    send_raw_text, start_relay, test_config,
};
use sluice_proto::frame::{ClientFrame, ErrorCode, ServerFrame};
use std::time::Duration;

#[tokio::test]
async fn pubkey_is_stamped_with_sender_identity() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    send_frame(
        &mut p1,
        &ClientFrame::Pubkey {
            pub_key: "AAAA".to_owned(),
        },
    )
    .await;

    match recv_frame(&mut p2).await {
        ServerFrame::Pubkey {
            from,
            mnemonic,
            pub_key,
        } => {
            assert_eq!(from, "c1");
            assert_eq!(mnemonic, m1);
            assert_eq!(pub_key, "AAAA");
        }
        other => panic!("expected pubkey, got {other:?}"),
    }
}

#[tokio::test]
async fn opaque_fields_pass_through_unchanged() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, _m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    // Not valid base64 of anything meaningful; the relay must not care.
    let payload = "aaaa++//==ZZZZ0123456789";
    send_frame(
        &mut p1,
        &ClientFrame::FileStart {
            encrypted_metadata: payload.to_owned(),
            metadata_iv: "aXYtaXYtaXY=".to_owned(),
        },
    )
    .await;

    match recv_frame(&mut p2).await {
        ServerFrame::FileStart {
            encrypted_metadata,
            metadata_iv,
            ..
        } => {
            assert_eq!(encrypted_metadata, payload);
            assert_eq!(metadata_iv, "aXYtaXYtaXY=");
        }
        other => panic!("expected file_start, got {other:?}"),
    }
}

#[tokio::test]
async fn chunks_arrive_in_send_order() {
    let (addr, engine) = start_relay(test_config()).await;
    let (mut p1, _m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    for chunk_num in 0..50u64 {
        send_frame(
            &mut p1,
            &ClientFrame::FileChunk {
                chunk_num,
                chunk_data: format!("chunk-{chunk_num}"),
                iv_b64: "aXY=".to_owned(),
            },
        )
        .await;
    }

    for expected in 0..50u64 {
        match recv_frame(&mut p2).await {
            ServerFrame::FileChunk {
                chunk_num,
                chunk_data,
                ..
            } => {
                assert_eq!(chunk_num, expected, "FIFO violated at chunk {expected}");
                assert_eq!(chunk_data, format!("chunk-{expected}"));
            }
            other => panic!("expected file_chunk, got {other:?}"),
        }
    }
    assert_eq!(engine.metrics_snapshot().frames_forwarded, 50);
    assert!(engine.metrics_snapshot().bytes_forwarded > 0);
}

#[tokio::test]
async fn acks_flow_back_interleaved_with_chunks() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, m1, mut p2, m2) = join_pair(addr, "blue-otter").await;

    send_frame(
        &mut p1,
        &ClientFrame::FileChunk {
            chunk_num: 0,
            chunk_data: "ZGF0YQ==".to_owned(),
            iv_b64: "aXY=".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p2).await {
        ServerFrame::FileChunk { chunk_num: 0, .. } => {}
        other => panic!("expected chunk 0, got {other:?}"),
    }

    send_frame(&mut p2, &ClientFrame::ChunkAck { chunk_num: 0 }).await;
    match recv_frame(&mut p1).await {
        ServerFrame::ChunkAck {
            from,
            mnemonic,
            chunk_num,
        } => {
            assert_eq!(from, "c2");
            assert_eq!(mnemonic, m2);
            assert_eq!(chunk_num, 0);
        }
        other => panic!("expected chunk_ack, got {other:?}"),
    }

    // And the end-of-transfer notices in both directions.
    send_frame(&mut p1, &ClientFrame::FileEnd).await;
    match recv_frame(&mut p2).await {
        ServerFrame::FileEnd { from, mnemonic } => {
            assert_eq!(from, "c1");
            assert_eq!(mnemonic, m1);
        }
        other => panic!("expected file_end, got {other:?}"),
    }
}

#[tokio::test]
async fn text_message_round_trip_with_receipt() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, _m1, mut p2, m2) = join_pair(addr, "blue-otter").await;

    send_frame(
        &mut p1,
        &ClientFrame::TextMessage {
            encrypted_metadata: "bWVzc2FnZQ==".to_owned(),
            metadata_iv: "aXY=".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p2).await {
        ServerFrame::TextMessage {
            from,
            encrypted_metadata,
            ..
        } => {
            assert_eq!(from, "c1");
            assert_eq!(encrypted_metadata, "bWVzc2FnZQ==");
        }
        other => panic!("expected text_message, got {other:?}"),
    }

    send_frame(&mut p2, &ClientFrame::TextReceived).await;
    match recv_frame(&mut p1).await {
        ServerFrame::TextReceived { from, mnemonic } => {
            assert_eq!(from, "c2");
            assert_eq!(mnemonic, m2);
        }
        other => panic!("expected text_received, got {other:?}"),
    }
}

#[tokio::test]
async fn transfer_cancelled_notifies_peer_and_keeps_sender_open() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    send_frame(&mut p1, &ClientFrame::TransferCancelled).await;
    match recv_frame(&mut p2).await {
        ServerFrame::TransferCancelled { from, mnemonic } => {
            assert_eq!(from, "c1");
            assert_eq!(mnemonic, m1);
        }
        other => panic!("expected transfer_cancelled, got {other:?}"),
    }

    // The sender's endpoint stays usable.
    send_frame(
        &mut p1,
        &ClientFrame::Pubkey {
            pub_key: "BBBB".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p2).await {
        ServerFrame::Pubkey { pub_key, .. } => assert_eq!(pub_key, "BBBB"),
        other => panic!("expected pubkey, got {other:?}"),
    }
}

#[tokio::test]
async fn json_sender_reaches_binary_receiver_and_back() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, _m1, mut p2, _m2) = join_pair(addr, "mixed").await;

    // P1 switches to the legacy JSON encoding mid-session.
    send_json(
        &mut p1,
        &ClientFrame::Pubkey {
            pub_key: "json-key".to_owned(),
        },
    )
    .await;
    // P2 joined over binary, so it receives binary.
    match recv_frame(&mut p2).await {
        ServerFrame::Pubkey { pub_key, .. } => assert_eq!(pub_key, "json-key"),
        other => panic!("expected pubkey, got {other:?}"),
    }

    send_frame(
        &mut p2,
        &ClientFrame::Pubkey {
            pub_key: "binary-key".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p1).await {
        ServerFrame::Pubkey { pub_key, .. } => assert_eq!(pub_key, "binary-key"),
        other => panic!("expected pubkey, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_tag_is_answered_and_non_fatal() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, _m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    send_raw_text(&mut p1, r#"{"type":"teleport","x":1}"#).await;
    match recv_frame(&mut p1).await {
        ServerFrame::Error { code, .. } => assert_eq!(code, ErrorCode::UnknownMessage),
        other => panic!("expected UnknownMessage error, got {other:?}"),
    }

    // Still peered: traffic continues.
    send_frame(
        &mut p1,
        &ClientFrame::Pubkey {
            pub_key: "CCCC".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p2).await {
        ServerFrame::Pubkey { pub_key, .. } => assert_eq!(pub_key, "CCCC"),
        other => panic!("expected pubkey, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_frame_is_fatal_and_peer_is_told() {
    let (addr, _engine) = start_relay(test_config()).await;
    let (mut p1, m1, mut p2, _m2) = join_pair(addr, "blue-otter").await;

    // Scenario S6: a frame with no tag at all.
    send_raw_text(&mut p1, r#"{"roomId":"blue-otter"}"#).await;
    match recv_frame(&mut p1).await {
        ServerFrame::Error { code, .. } => assert_eq!(code, ErrorCode::MalformedFrame),
        other => panic!("expected MalformedFrame error, got {other:?}"),
    }
    assert!(recv_frame_or_close(&mut p1).await.is_none());

    match recv_frame(&mut p2).await {
        ServerFrame::PeerDisconnected { mnemonic } => assert_eq!(mnemonic, m1),
        other => panic!("expected peer_disconnected, got {other:?}"),
    }
}

#[tokio::test]
async fn oversize_frame_is_malformed_and_fatal() {
    let mut config = test_config();
    config.max_frame_size = 4096;
    let (addr, _engine) = start_relay(config).await;
    let (mut p1, m1, mut p2, _m2) = join_pair(addr, "big").await;

    send_frame(
        &mut p1,
        &ClientFrame::FileChunk {
            chunk_num: 0,
            chunk_data: "A".repeat(16 * 1024),
            iv_b64: "aXY=".to_owned(),
        },
    )
    .await;

    match recv_frame(&mut p1).await {
        ServerFrame::Error { code, .. } => assert_eq!(code, ErrorCode::MalformedFrame),
        other => panic!("expected MalformedFrame error, got {other:?}"),
    }
    assert!(recv_frame_or_close(&mut p1).await.is_none());
    match recv_frame(&mut p2).await {
        ServerFrame::PeerDisconnected { mnemonic } => assert_eq!(mnemonic, m1),
        other => panic!("expected peer_disconnected, got {other:?}"),
    }
}

#[tokio::test]
async fn relayable_frames_before_pairing_are_dropped() {
    let (addr, _engine) = start_relay(test_config()).await;

    let mut p1 = common::connect(addr).await;
    common::join(&mut p1, "lonely", "c1").await;
    send_frame(
        &mut p1,
        &ClientFrame::Pubkey {
            pub_key: "early".to_owned(),
        },
    )
    .await;

    // No error, no echo; the frame just has nowhere to go.
    assert_silent(&mut p1, Duration::from_millis(300)).await;
}
