//! Sluice relay server library.
//!
//! A zero-knowledge rendezvous relay: exactly two peers meet in a named
//! room and exchange end-to-end encrypted frames that the relay forwards
//! without inspecting. The relay holds no keys and persists nothing;
//! it enforces admission, liveness, and routing invariants only.
//!
//! Exposed as a library so integration tests and embedders can start the
//! server in-process; the `sluice-relay` binary wraps [`engine`] with CLI
//! and signal handling.

pub mod admission;
pub mod config;
pub mod endpoint;
pub mod engine;
pub mod metrics;
pub mod nickname;
pub mod registry;
pub mod supervisor;
pub mod words;
