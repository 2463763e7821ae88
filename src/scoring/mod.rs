//! Scoring engine module: pure computation over a completed round.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same submissions always produce the same outcome,
//!    regardless of submission order
//! 2. **Integer Math**: Points are integer counts, payouts are wei integer
//!    division; no floating point anywhere
//! 3. **No State**: The engine reads a snapshot and returns a value; it
//!    never touches the ledger
//!
//! ## Scoring Rule
//!
//! For each submission (best to worst), the item ranked first earns N
//! points, the second N-1, down to 1 for last. Aggregate scores are summed
//! per item index; the consensus ordering sorts indices by descending score
//! with ties broken by ascending index. A player wins only on an exact,
//! element-for-element match against the consensus.
//!
//! ## Example
//!
//! ```
//! use rankr::scoring::ScoringEngine;
//! use rankr::types::RankingSubmission;
//!
//! let subs = vec![
//!     RankingSubmission::new(1, vec![0, 1, 2]),
//!     RankingSubmission::new(2, vec![1, 0, 2]),
//! ];
//!
//! let outcome = ScoringEngine::new().finalize(3, &subs, 200);
//!
//! // item0 = 3+2, item1 = 2+3, tie broken by lower index
//! assert_eq!(outcome.consensus_order, vec![0, 1, 2]);
//! assert_eq!(outcome.winners, vec![1]);
//! assert_eq!(outcome.reward_per_winner, 200);
//! ```

pub mod consensus;

pub use consensus::{RoundOutcome, ScoringEngine};
