//! Payment collaborator surface.
//!
//! ## Contract
//!
//! The game core moves no money itself; it instructs a [`PaymentGateway`]
//! and treats any gateway error as fatal to the whole operation. The
//! ordering guarantee it relies on:
//!
//! 1. `collect` is called after all validation and before any core mutation.
//! 2. `distribute` (finalizing submissions only) is called as a single
//!    all-or-nothing batch, still before any core mutation.
//! 3. When `distribute` fails, the core calls `refund` to return the fee it
//!    just collected, so the failed submission moves no money overall.
//! 4. On any gateway error the core returns with zero state change; the
//!    gateway must roll back every transfer of the failed call on its side.
//!
//! [`Vault`] is the in-memory implementation used by tests and the demo
//! binary. A production adapter would wrap an actual value-transfer
//! mechanism behind the same trait.

use std::collections::HashMap;

use crate::error::PaymentError;

/// Value-transfer collaborator invoked by the round ledger.
pub trait PaymentGateway {
    /// Take `amount` wei from `from` into the prize treasury.
    fn collect(&mut self, from: u64, amount: u128) -> Result<(), PaymentError>;

    /// Return `amount` wei from the treasury to `to`.
    ///
    /// Called to undo a `collect` from the same submission when a later
    /// payout leg fails; the treasury therefore already holds `amount`.
    fn refund(&mut self, to: u64, amount: u128) -> Result<(), PaymentError>;

    /// Pay `reward_per_winner` wei from the treasury to every winner.
    ///
    /// Must be all-or-nothing: either every winner is paid or the gateway
    /// reports an error having paid nobody.
    fn distribute(&mut self, winners: &[u64], reward_per_winner: u128) -> Result<(), PaymentError>;
}

/// In-memory payment gateway tracking per-player balances and a treasury.
///
/// Undistributed amounts (zero-winner rounds, integer-division remainders)
/// stay in the treasury.
///
/// ## Example
///
/// ```
/// use rankr::payment::{PaymentGateway, Vault};
///
/// let mut vault = Vault::new();
/// vault.fund(1, 100);
/// vault.collect(1, 60).unwrap();
/// assert_eq!(vault.balance_of(1), 40);
/// assert_eq!(vault.treasury(), 60);
///
/// vault.distribute(&[1], 60).unwrap();
/// assert_eq!(vault.balance_of(1), 100);
/// assert_eq!(vault.treasury(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vault {
    /// Player balances in wei
    balances: HashMap<u64, u128>,

    /// Pooled fees not yet paid out
    treasury: u128,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` wei to a player, e.g. test setup funding.
    pub fn fund(&mut self, player: u64, amount: u128) {
        *self.balances.entry(player).or_insert(0) += amount;
    }

    /// Current balance of a player in wei.
    pub fn balance_of(&self, player: u64) -> u128 {
        self.balances.get(&player).copied().unwrap_or(0)
    }

    /// Pooled amount held for payouts (plus any retained remainders).
    pub fn treasury(&self) -> u128 {
        self.treasury
    }
}

impl PaymentGateway for Vault {
    fn collect(&mut self, from: u64, amount: u128) -> Result<(), PaymentError> {
        let balance = self.balances.entry(from).or_insert(0);
        if *balance < amount {
            return Err(PaymentError::InsufficientFunds {
                account: from,
                required: amount,
                available: *balance,
            });
        }

        *balance -= amount;
        self.treasury += amount;
        Ok(())
    }

    fn refund(&mut self, to: u64, amount: u128) -> Result<(), PaymentError> {
        if self.treasury < amount {
            return Err(PaymentError::InsufficientFunds {
                account: to,
                required: amount,
                available: self.treasury,
            });
        }

        self.treasury -= amount;
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }

    fn distribute(&mut self, winners: &[u64], reward_per_winner: u128) -> Result<(), PaymentError> {
        let total = reward_per_winner
            .checked_mul(winners.len() as u128)
            .filter(|&t| t <= self.treasury)
            .ok_or(PaymentError::InsufficientFunds {
                account: 0,
                required: reward_per_winner.saturating_mul(winners.len() as u128),
                available: self.treasury,
            })?;

        // Funds verified above; nothing below can fail mid-batch.
        self.treasury -= total;
        for &winner in winners {
            *self.balances.entry(winner).or_insert(0) += reward_per_winner;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
