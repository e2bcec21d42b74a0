//! Shared wire protocol definitions for the sluice relay.
//!
//! The protocol has exactly two message shapes: [`frame::ClientFrame`]
//! (client to relay) and [`frame::ServerFrame`] (relay to client). Both
//! travel over a single bidirectional transport in one of two encodings,
//! handled by [`codec`]: compact binary (preferred) or JSON (legacy).

pub mod codec;
pub mod frame;
