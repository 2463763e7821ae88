//! Round ledger module: state machine, validation, and round lifecycle.
//!
//! ## Components
//!
//! - [`GameConfig`]: Immutable game parameters (N, quota, entry fee)
//! - [`RoundLedger`]: All round state and the two operations that drive it
//!
//! ## Lifecycle
//!
//! ```text
//! CollectingItems --(last add_item)--> CollectingRanks
//! CollectingRanks --(quota submit_ranking: finalize + payout + reset)--> CollectingItems
//! ```
//!
//! The reset back to `CollectingItems` is the only path out of
//! `CollectingRanks` and always runs inside the finalizing submission, so
//! no caller ever observes a half-reset round.
//!
//! ## Example
//!
//! ```
//! use rankr::ledger::{GameConfig, RoundLedger};
//!
//! let mut game = RoundLedger::new(GameConfig::default());
//! game.add_item("A1", "T1", "u1", 10, 0).unwrap();
//! assert_eq!(game.items_count(), 1);
//! ```

pub mod config;
pub mod round;

pub use config::{GameConfig, MAX_ITEMS};
pub use round::RoundLedger;
