//! Consensus ordering, winner determination, and payout split.

use std::cmp::Reverse;

use crate::types::RankingSubmission;

/// Result of finalizing one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Exact-match winners, in submission order
    pub winners: Vec<u64>,

    /// Wei paid to each winner (`pool / winners`, integer division);
    /// zero when nobody matched the consensus
    pub reward_per_winner: u128,

    /// Undistributed wei retained by the treasury: the division remainder,
    /// or the whole pool when there is no winner
    pub remainder: u128,

    /// Item indices sorted by descending aggregate score, ties broken by
    /// ascending index
    pub consensus_order: Vec<u8>,

    /// Aggregate points per item index (diagnostics)
    pub scores: Vec<u64>,
}

impl RoundOutcome {
    /// Total wei leaving the treasury for this round.
    pub fn distributed(&self) -> u128 {
        self.reward_per_winner * self.winners.len() as u128
    }
}

/// Deterministic scoring engine.
///
/// Stateless; a unit struct so call sites read as `engine.finalize(...)`
/// next to the mutable ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Create a new scoring engine.
    pub fn new() -> Self {
        Self
    }

    /// Aggregate points per item index across all submissions.
    ///
    /// The item at `order[0]` earns `num_items` points, `order[1]` earns
    /// `num_items - 1`, down to 1 for last place. Summation is commutative,
    /// so the result cannot depend on submission order.
    ///
    /// The round ledger only records validated permutations of
    /// `0..num_items`; entries outside that range and places past
    /// `num_items` contribute nothing rather than panic.
    ///
    /// # Example
    ///
    /// ```
    /// use rankr::scoring::ScoringEngine;
    /// use rankr::types::RankingSubmission;
    ///
    /// let subs = vec![RankingSubmission::new(1, vec![2, 0, 1])];
    /// let scores = ScoringEngine::new().tally(3, &subs);
    /// assert_eq!(scores, vec![2, 1, 3]);
    /// ```
    pub fn tally(&self, num_items: usize, submissions: &[RankingSubmission]) -> Vec<u64> {
        let mut scores = vec![0u64; num_items];

        for submission in submissions {
            for (place, &item) in submission.order.iter().enumerate() {
                if let Some(score) = scores.get_mut(item as usize) {
                    *score += num_items.saturating_sub(place) as u64;
                }
            }
        }

        scores
    }

    /// Derive the consensus ordering from aggregate scores.
    ///
    /// Indices are sorted by descending score; ties are broken by ascending
    /// item index, the only deterministic tie-break available without an
    /// additional signal.
    pub fn consensus(&self, scores: &[u64]) -> Vec<u8> {
        let mut order: Vec<u8> = (0..scores.len() as u8).collect();
        order.sort_by_key(|&i| (Reverse(scores[i as usize]), i));
        order
    }

    /// Finalize a completed round: consensus, winners, and payout split.
    ///
    /// # Arguments
    ///
    /// * `num_items` - Item count N; every submission is a permutation of `0..N`
    /// * `submissions` - All recorded submissions for the round
    /// * `pool` - Accumulated prize pool in wei
    pub fn finalize(
        &self,
        num_items: usize,
        submissions: &[RankingSubmission],
        pool: u128,
    ) -> RoundOutcome {
        let scores = self.tally(num_items, submissions);
        let consensus_order = self.consensus(&scores);

        let winners: Vec<u64> = submissions
            .iter()
            .filter(|s| s.order == consensus_order)
            .map(|s| s.player)
            .collect();

        let (reward_per_winner, remainder) = if winners.is_empty() {
            (0, pool)
        } else {
            let reward = pool / winners.len() as u128;
            (reward, pool - reward * winners.len() as u128)
        };

        RoundOutcome {
            winners,
            reward_per_winner,
            remainder,
            consensus_order,
            scores,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
