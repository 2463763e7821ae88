//! Round receipt summarizing a completed round.
//!
//! The receipt is the durable, deterministic record a finalized round leaves
//! behind: who played, how many won, what each winner received, and a hash
//! committing to the consensus ordering. It is SSZ-serializable so indexers
//! can store and compare receipts byte-for-byte.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

/// Summary of one finalized round.
///
/// ## Amount Encoding
///
/// Wei amounts are `u128` in the game core but SSZ containers here use
/// fixed-size `u64` fields, so each amount is stored as little-endian
/// lo/hi halves with accessor methods reassembling the `u128`.
///
/// ## Consensus Root
///
/// The 32-byte consensus root is the SHA-256 hash of the consensus ordering
/// bytes. Two rounds with the same consensus ordering over the same item
/// count produce the same root.
///
/// ## Example
///
/// ```
/// use rankr::types::RoundReceipt;
///
/// let root = RoundReceipt::compute_consensus_root(&[0, 1, 2]);
/// let receipt = RoundReceipt::new(1, 2, 2, 10_000_000_000_000, 20_000_000_000_000, root, 0);
/// assert_eq!(receipt.reward_per_winner(), 10_000_000_000_000);
/// assert_eq!(receipt.pool(), 20_000_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct RoundReceipt {
    /// Monotonic round sequence number (starts at 1)
    pub round_id: u64,

    /// Number of players who submitted rankings
    pub players: u64,

    /// Number of exact-match winners (may be zero)
    pub winners: u64,

    /// Reward per winner in wei, low 64 bits
    pub reward_lo: u64,

    /// Reward per winner in wei, high 64 bits
    pub reward_hi: u64,

    /// Prize pool in wei, low 64 bits
    pub pool_lo: u64,

    /// Prize pool in wei, high 64 bits
    pub pool_hi: u64,

    /// SHA-256 hash of the consensus ordering bytes
    pub consensus_root: [u8; 32],

    /// Finalization timestamp in milliseconds
    pub timestamp: u64,
}

impl RoundReceipt {
    /// Create a new round receipt.
    pub fn new(
        round_id: u64,
        players: u64,
        winners: u64,
        reward_per_winner: u128,
        pool: u128,
        consensus_root: [u8; 32],
        timestamp: u64,
    ) -> Self {
        Self {
            round_id,
            players,
            winners,
            reward_lo: reward_per_winner as u64,
            reward_hi: (reward_per_winner >> 64) as u64,
            pool_lo: pool as u64,
            pool_hi: (pool >> 64) as u64,
            consensus_root,
            timestamp,
        }
    }

    /// Reward per winner in wei.
    pub fn reward_per_winner(&self) -> u128 {
        ((self.reward_hi as u128) << 64) | self.reward_lo as u128
    }

    /// Prize pool in wei.
    pub fn pool(&self) -> u128 {
        ((self.pool_hi as u128) << 64) | self.pool_lo as u128
    }

    /// Compute the SHA-256 root of a consensus ordering.
    pub fn compute_consensus_root(order: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(order);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the consensus root as a hex string.
    pub fn consensus_root_hex(&self) -> String {
        hex::encode(self.consensus_root)
    }

    /// Check whether any winner was paid this round.
    pub fn has_winners(&self) -> bool {
        self.winners > 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
