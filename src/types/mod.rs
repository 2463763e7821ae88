//! Core data types for the ranking game
//!
//! ## Types
//!
//! - [`Item`]: One submitted entry in the current round
//! - [`Phase`]: CollectingItems or CollectingRanks
//! - [`RankingSubmission`]: One player's full preference ordering
//! - [`GameEvent`]: Notifications for observers and indexers
//! - [`RoundReceipt`]: SSZ-serializable summary of a finalized round
//!
//! ## Amounts
//!
//! All monetary values are `u128` wei. See [`amount`] for the conversion
//! helpers between wei and human-readable ETH strings.

mod event;
mod item;
mod ranking;
mod receipt;
pub mod amount;

// Re-export all types at module level
pub use event::GameEvent;
pub use item::{Item, Phase, NULL_PLAYER};
pub use ranking::RankingSubmission;
pub use receipt::RoundReceipt;
