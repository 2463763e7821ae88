//! Game notifications for observers, UI, and indexers.
//!
//! Each event has a fixed payload shape. The ledger queues events on the
//! normal exit path of each operation and observers drain them; a failed
//! operation emits nothing.

/// A discrete game notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new item was accepted into the current round.
    ItemAdded {
        /// Player who submitted the item
        submitter: u64,
        /// Artist/author name
        author: String,
        /// Song title
        title: String,
        /// Link to the song
        url: String,
        /// Assigned slot index
        index: usize,
    },

    /// A ranking was accepted and the entry fee credited to the pool.
    RankingSubmitted {
        /// Submitting player
        player: u64,
        /// The accepted ordering, best to worst
        order: Vec<u8>,
    },

    /// The ranking quota was reached and the pool was distributed.
    RoundCompleted {
        /// Winning players, in submission order
        winners: Vec<u64>,
        /// Amount transferred to each winner, in wei
        reward_per_winner: u128,
    },

    /// All per-round state was cleared for a fresh round.
    RoundReset,
}

// ============================================================================
// Unit Tests
// ============================================================================
