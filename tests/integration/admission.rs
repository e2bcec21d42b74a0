//! Admission tests: the global and per-address room caps over real
//! connections. Every test client arrives from 127.0.0.1, which is exactly
//! what the per-address cap needs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{connect, join, recv_frame, recv_frame_or_close, send_frame, start_relay, test_config};
use sluice_proto::frame::{ClientFrame, ErrorCode, ServerFrame};

#[tokio::test]
async fn per_address_cap_rejects_a_second_room() {
    let mut config = test_config();
    config.max_rooms_per_ip = 1;
    let (addr, engine) = start_relay(config).await;

    // Scenario S3: room `a` opens, room `b` from the same address is
    // refused.
    let mut p1 = connect(addr).await;
    join(&mut p1, "a", "c1").await;

    let mut p2 = connect(addr).await;
    send_frame(
        &mut p2,
        &ClientFrame::Join {
            room_id: "b".to_owned(),
            client_id: "c2".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p2).await {
        ServerFrame::Error { code, .. } => {
            assert_eq!(code, ErrorCode::PerAddressLimitExceeded);
        }
        other => panic!("expected PerAddressLimitExceeded, got {other:?}"),
    }
    assert!(recv_frame_or_close(&mut p2).await.is_none());
    assert_eq!(engine.metrics_snapshot().rejected_per_address_limit, 1);
}

#[tokio::test]
async fn per_address_cap_does_not_block_joining_an_existing_room() {
    let mut config = test_config();
    config.max_rooms_per_ip = 1;
    let (addr, _engine) = start_relay(config).await;

    let mut p1 = connect(addr).await;
    join(&mut p1, "a", "c1").await;

    // The second join from the same address enters the existing room;
    // no new slot is needed.
    let mut p2 = connect(addr).await;
    join(&mut p2, "a", "c2").await;
    match recv_frame(&mut p2).await {
        ServerFrame::Peers { count } => assert_eq!(count, 2),
        other => panic!("expected peers, got {other:?}"),
    }
}

#[tokio::test]
async fn global_cap_rejects_new_rooms() {
    let mut config = test_config();
    config.max_rooms = 2;
    let (addr, engine) = start_relay(config).await;

    let mut p1 = connect(addr).await;
    join(&mut p1, "a", "c1").await;
    let mut p2 = connect(addr).await;
    join(&mut p2, "b", "c2").await;

    let mut p3 = connect(addr).await;
    send_frame(
        &mut p3,
        &ClientFrame::Join {
            room_id: "c".to_owned(),
            client_id: "c3".to_owned(),
        },
    )
    .await;
    match recv_frame(&mut p3).await {
        ServerFrame::Error { code, .. } => assert_eq!(code, ErrorCode::GlobalLimitExceeded),
        other => panic!("expected GlobalLimitExceeded, got {other:?}"),
    }
    assert_eq!(engine.metrics_snapshot().rejected_global_limit, 1);
    assert_eq!(engine.metrics_snapshot().live_rooms, 2);
}

#[tokio::test]
async fn zero_caps_disable_admission() {
    let mut config = test_config();
    config.max_rooms = 0;
    config.max_rooms_per_ip = 0;
    let (addr, engine) = start_relay(config).await;

    for i in 0..10 {
        let mut ws = connect(addr).await;
        join(&mut ws, &format!("room-{i}"), &format!("c{i}")).await;
        // Keep the socket open by leaking it into the runtime; dropping it
        // here would start emptying rooms mid-test.
        tokio::spawn(async move {
            let _ws = ws;
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        });
    }
    assert_eq!(engine.metrics_snapshot().live_rooms, 10);
}

#[tokio::test]
async fn slot_freed_by_a_departed_room_can_be_reused() {
    let mut config = test_config();
    config.max_rooms_per_ip = 1;
    let (addr, _engine) = start_relay(config).await;

    {
        let mut p1 = connect(addr).await;
        join(&mut p1, "a", "c1").await;
        // Drop the socket: the room empties and its slot is released.
    }

    // The release happens when the server notices the disconnect; give it
    // a moment, then the same address may open a fresh room.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    let mut p2 = connect(addr).await;
    join(&mut p2, "b", "c2").await;
}
