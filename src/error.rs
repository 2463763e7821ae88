//! Error taxonomy for the ranking game core.
//!
//! Every validation failure is a distinct variant so calling layers
//! (transport adapters, tests) can assert on the specific condition rather
//! than matching message strings. No error path leaves partial state behind:
//! all validation happens before any mutation, and a failed payout aborts
//! the whole submission.

use thiserror::Error;

use crate::types::Phase;

/// Failure reported by the payment collaborator.
///
/// The gateway is responsible for making all transfers of a single game call
/// atomic on its side. When the core surfaces one of these, none of its own
/// state has changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// An account cannot cover a required transfer.
    #[error("account {account} has {available} wei, needs {required}")]
    InsufficientFunds {
        account: u64,
        required: u128,
        available: u128,
    },

    /// The recipient endpoint rejected the transfer outright.
    #[error("transfer to account {account} rejected")]
    TransferRejected { account: u64 },
}

/// Caller-visible failure conditions of the game core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Operation attempted in a phase that does not accept it.
    #[error("wrong phase: expected {expected:?}, currently {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// Item author, title, or url is empty after trimming.
    #[error("item fields must be non-empty")]
    InvalidItem,

    /// Paid amount is not exactly the entry fee (too much also fails).
    #[error("wrong entry fee: expected {expected} wei, paid {paid}")]
    WrongEntryFee { expected: u128, paid: u128 },

    /// A ranking that is not exactly one entry per item.
    #[error("ranking has {actual} entries, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// Submitted ordering repeats an item index.
    #[error("ranking repeats item index {index}")]
    DuplicateIndex { index: u8 },

    /// Submitted ordering contains an index outside the item range.
    #[error("item index {index} out of range (have {num_items} items)")]
    IndexOutOfRange { index: u8, num_items: usize },

    /// Player id `0`, which is reserved as the empty-slot sentinel.
    #[error("player id 0 is reserved")]
    NullPlayer,

    /// The same player attempts a second ranking in one round.
    #[error("player {player} already ranked this round")]
    AlreadyRanked { player: u64 },

    /// Un-earmarked incoming value transfer; funds are only accepted as part
    /// of a validated ranking submission.
    #[error("direct transfers not accepted")]
    DirectTransfer,

    /// Rejected game configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Fee collection or payout failed; the whole operation was rolled back.
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),
}

// ============================================================================
// Unit Tests
// ============================================================================
