//! Ranking submission type.

/// One participant's full preference ordering, best to worst.
///
/// ## Invariants
///
/// `order` is a permutation of `0..N` (N = configured item count): exactly
/// N entries, all in range, no duplicates. The ledger validates this before
/// a submission is ever constructed, so a stored `RankingSubmission` is
/// always well-formed.
///
/// ## Example
///
/// ```
/// use rankr::types::RankingSubmission;
///
/// let sub = RankingSubmission::new(42, vec![2, 0, 1]);
/// assert_eq!(sub.player, 42);
/// assert_eq!(sub.rank_of(2), Some(0)); // item 2 ranked first
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingSubmission {
    /// Submitting player (unique per round, enforced by the ledger)
    pub player: u64,

    /// Item indices, best to worst
    pub order: Vec<u8>,
}

impl RankingSubmission {
    /// Create a new submission. Does not validate; see `RoundLedger`.
    pub fn new(player: u64, order: Vec<u8>) -> Self {
        Self { player, order }
    }

    /// Position of an item index within this ordering (0 = ranked first).
    pub fn rank_of(&self, item_index: u8) -> Option<usize> {
        self.order.iter().position(|&v| v == item_index)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
