//! Nickname assignment for joining endpoints.
//!
//! Each endpoint gets a two-word handle like `brisk-falcon`, drawn from the
//! frozen list in [`crate::words`]. Nicknames exist for peer display and
//! log lines; they carry no authority and are never parsed by the relay.

use rand::RngCore;

use crate::words::{WORD_COUNT, WORDS};

/// Generates a fresh two-word nickname from 16 bytes of process entropy.
#[must_use]
pub fn generate() -> String {
    let mut entropy = [0u8; 16];
    rand::rng().fill_bytes(&mut entropy);
    from_entropy(&entropy)
}

/// Maps 16 bytes of entropy onto two word-list entries joined by `-`.
///
/// Each half of the input selects one word; the mapping is deterministic so
/// tests can pin expected nicknames.
#[must_use]
pub fn from_entropy(entropy: &[u8; 16]) -> String {
    let first = read_index(&entropy[..8]);
    let second = read_index(&entropy[8..]);
    format!("{}-{}", WORDS[first], WORDS[second])
}

fn read_index(half: &[u8]) -> usize {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(half);
    (u64::from_le_bytes(bytes) % WORD_COUNT as u64) as usize
}
