//! # Rankr
//!
//! Multi-round ranking game engine with deterministic consensus scoring.
//!
//! ## Architecture
//!
//! The game core consists of:
//! - **Types**: Core data structures (Item, RankingSubmission, GameEvent, RoundReceipt)
//! - **Ledger**: RoundLedger state machine enforcing the round lifecycle
//! - **Scoring**: Pure consensus/winner/payout computation
//! - **Payment**: Gateway trait for the value-transfer collaborator
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical submissions produce identical outcomes,
//!    independent of submission order
//! 2. **No Floating Point**: All money is integer wei; all points are
//!    integer counts
//! 3. **Strong Exception Safety**: Every operation validates before it
//!    mutates; a payout failure rolls back the whole submission,
//!    collected fee included
//! 4. **Serialized Execution**: Operations take `&mut self` and run to
//!    completion, finalize-and-reset included, before the next call
//!
//! ## Round Lifecycle
//!
//! Items are collected until every slot is filled, then full rankings are
//! collected (one per player, exact entry fee each) until the quota is
//! reached. The final submission scores the round: every first place earns
//! N points down to 1 for last, the consensus ordering sorts items by
//! aggregate score (ties toward the lower index), exact-match players split
//! the pool, and all round state resets atomically.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Item, RankingSubmission, GameEvent, RoundReceipt
pub mod types;

/// Round ledger: state machine and round lifecycle
pub mod ledger;

/// Scoring engine: consensus ordering, winners, payout split
pub mod scoring;

/// Payment collaborator surface
pub mod payment;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{GameError, PaymentError};
pub use ledger::{GameConfig, RoundLedger};
pub use payment::{PaymentGateway, Vault};
pub use scoring::{RoundOutcome, ScoringEngine};
pub use types::{GameEvent, Item, Phase, RankingSubmission, RoundReceipt};
