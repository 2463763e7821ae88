//! Round ledger: the stateful heart of the game.
//!
//! ## State Machine
//!
//! Two phases. `CollectingItems` accepts items until every slot is filled,
//! then flips to `CollectingRanks`. `CollectingRanks` accepts one ranking
//! per player until the quota is reached; the final submission triggers
//! finalize, payout, and a full reset back to `CollectingItems`.
//!
//! ## Failure Discipline
//!
//! Every operation validates completely before mutating anything, so a
//! failed call leaves the ledger exactly as it was. A gateway failure during
//! the finalizing submission aborts the whole call: no ranking recorded, no
//! pool credit, no reset, and a fee collected by the failed call is refunded
//! through the gateway before returning.
//!
//! ## Mutual Exclusion
//!
//! All mutating operations take `&mut self`, so the whole operation body
//! (validate, pay, mutate, reset) runs under Rust's exclusive borrow. Two
//! concurrent submissions cannot both pass the "not already ranked" check,
//! and no caller can observe a partially-reset round. Wrap the ledger in a
//! `Mutex` when sharing across threads.

use std::collections::{HashMap, VecDeque};

use crate::error::GameError;
use crate::ledger::GameConfig;
use crate::payment::PaymentGateway;
use crate::scoring::ScoringEngine;
use crate::types::{GameEvent, Item, Phase, RankingSubmission, RoundReceipt, NULL_PLAYER};

/// Owns all round state and enforces phase transitions and validation.
///
/// Player identities are opaque non-zero `u64`s supplied by an
/// authenticated transport layer; `0` is reserved as the empty-slot
/// sentinel.
///
/// ## Example
///
/// ```
/// use rankr::ledger::RoundLedger;
/// use rankr::payment::Vault;
/// use rankr::types::Phase;
///
/// let mut game = RoundLedger::default();
/// let fee = game.entry_fee();
///
/// game.add_item("A1", "T1", "u1", 10, 0).unwrap();
/// game.add_item("A2", "T2", "u2", 10, 0).unwrap();
/// game.add_item("A3", "T3", "u3", 10, 0).unwrap();
/// assert_eq!(game.phase(), Phase::CollectingRanks);
///
/// let mut vault = Vault::new();
/// vault.fund(1, fee);
/// vault.fund(2, fee);
///
/// game.submit_ranking(&mut vault, &[0, 1, 2], fee, 1, 0).unwrap();
/// let receipt = game.submit_ranking(&mut vault, &[0, 1, 2], fee, 2, 0).unwrap();
/// assert!(receipt.is_some());
/// assert_eq!(game.phase(), Phase::CollectingItems);
/// ```
#[derive(Debug)]
pub struct RoundLedger {
    /// Immutable game parameters
    config: GameConfig,

    /// Current phase
    phase: Phase,

    /// Fixed-size item slots; empty slots read as `Item::default()`
    items: Vec<Item>,

    /// Number of filled slots, 0..=num_items
    items_count: usize,

    /// Submissions keyed by player
    rankings: HashMap<u64, RankingSubmission>,

    /// Players in submission order (deduplicated by `rankings`)
    players: Vec<u64>,

    /// Accumulated entry fees this round, in wei
    prize_pool: u128,

    /// Monotonic round number, starting at 1
    round_id: u64,

    /// Pending notifications for observers
    events: VecDeque<GameEvent>,

    /// Pure scoring engine invoked at finalization
    engine: ScoringEngine,
}

impl Default for RoundLedger {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl RoundLedger {
    /// Create a ledger for a fresh game with the given configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::CollectingItems,
            items: vec![Item::default(); config.num_items],
            items_count: 0,
            rankings: HashMap::with_capacity(config.max_players),
            players: Vec::with_capacity(config.max_players),
            prize_pool: 0,
            round_id: 1,
            events: VecDeque::new(),
            engine: ScoringEngine::new(),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Add an item to the current round.
    ///
    /// # Errors
    ///
    /// * `NullPlayer` when `submitter` is the reserved id `0`
    /// * `WrongPhase` outside `CollectingItems`
    /// * `InvalidItem` when author, title, or url is empty after trimming
    ///
    /// # Returns
    ///
    /// The assigned slot index. Filling the last slot transitions the round
    /// to `CollectingRanks`.
    pub fn add_item(
        &mut self,
        author: &str,
        title: &str,
        url: &str,
        submitter: u64,
        now_ms: u64,
    ) -> Result<usize, GameError> {
        if submitter == NULL_PLAYER {
            return Err(GameError::NullPlayer);
        }

        if self.phase != Phase::CollectingItems {
            return Err(GameError::WrongPhase {
                expected: Phase::CollectingItems,
                actual: self.phase,
            });
        }

        let item = Item::new(author, title, url, submitter, now_ms);
        if item.author.is_empty() || item.title.is_empty() || item.url.is_empty() {
            return Err(GameError::InvalidItem);
        }

        // The phase invariant guarantees a free slot; checked anyway.
        if self.items_count >= self.config.num_items {
            return Err(GameError::WrongPhase {
                expected: Phase::CollectingItems,
                actual: self.phase,
            });
        }

        let index = self.items_count;
        self.events.push_back(GameEvent::ItemAdded {
            submitter,
            author: item.author.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            index,
        });
        self.items[index] = item;
        self.items_count += 1;

        if self.items_count == self.config.num_items {
            self.phase = Phase::CollectingRanks;
        }

        Ok(index)
    }

    /// Submit a full ranking, paying the entry fee.
    ///
    /// Validation order (first failure wins): null player, phase, exact fee,
    /// ranking length, duplicate indices, out-of-range indices, repeat
    /// player. Duplicates take precedence when an input is malformed both
    /// ways.
    ///
    /// The fee is collected through `gateway` after validation. When this
    /// submission reaches the quota the round finalizes: winners are paid
    /// through `gateway.distribute` (all-or-nothing), completion and reset
    /// events are queued, all round state is cleared, and the receipt is
    /// returned. A gateway error aborts the whole call with no state change;
    /// a failed payout additionally refunds the fee collected by this call,
    /// so the player is free to retry at no cost.
    pub fn submit_ranking(
        &mut self,
        gateway: &mut impl PaymentGateway,
        order: &[u8],
        paid: u128,
        player: u64,
        now_ms: u64,
    ) -> Result<Option<RoundReceipt>, GameError> {
        if player == NULL_PLAYER {
            return Err(GameError::NullPlayer);
        }

        if self.phase != Phase::CollectingRanks {
            return Err(GameError::WrongPhase {
                expected: Phase::CollectingRanks,
                actual: self.phase,
            });
        }

        if paid != self.config.entry_fee {
            return Err(GameError::WrongEntryFee {
                expected: self.config.entry_fee,
                paid,
            });
        }

        let num_items = self.config.num_items;
        if order.len() != num_items {
            return Err(GameError::WrongLength {
                expected: num_items,
                actual: order.len(),
            });
        }

        // Duplicate scan over the whole input first: it takes precedence
        // over the range check for inputs that are malformed both ways.
        let mut seen = [false; 256];
        for &value in order {
            if seen[value as usize] {
                return Err(GameError::DuplicateIndex { index: value });
            }
            seen[value as usize] = true;
        }
        for &value in order {
            if value as usize >= num_items {
                return Err(GameError::IndexOutOfRange {
                    index: value,
                    num_items,
                });
            }
        }

        if self.rankings.contains_key(&player) {
            return Err(GameError::AlreadyRanked { player });
        }

        let finalizing = self.players.len() + 1 == self.config.max_players;
        gateway.collect(player, paid)?;

        if !finalizing {
            self.record_submission(player, order, paid);
            return Ok(None);
        }

        // Quota reached: score the snapshot including this submission, pay
        // out, and only then commit and reset. Nothing before `distribute`
        // succeeds has touched ledger state.
        let mut submissions: Vec<RankingSubmission> = self
            .players
            .iter()
            .map(|p| self.rankings[p].clone())
            .collect();
        submissions.push(RankingSubmission::new(player, order.to_vec()));

        let pool = self.prize_pool + paid;
        let outcome = self.engine.finalize(num_items, &submissions, pool);
        if !outcome.winners.is_empty() {
            if let Err(payout_err) = gateway.distribute(&outcome.winners, outcome.reward_per_winner)
            {
                // Undo the collect above so the failed call moves no money.
                gateway.refund(player, paid)?;
                return Err(payout_err.into());
            }
        }

        self.record_submission(player, order, paid);

        let receipt = RoundReceipt::new(
            self.round_id,
            submissions.len() as u64,
            outcome.winners.len() as u64,
            outcome.reward_per_winner,
            pool,
            RoundReceipt::compute_consensus_root(&outcome.consensus_order),
            now_ms,
        );

        self.events.push_back(GameEvent::RoundCompleted {
            winners: outcome.winners,
            reward_per_winner: outcome.reward_per_winner,
        });
        self.reset_round();
        self.events.push_back(GameEvent::RoundReset);

        Ok(Some(receipt))
    }

    /// Reject an un-earmarked incoming transfer.
    ///
    /// Funds are only accepted as part of a validated ranking submission.
    pub fn receive(&self, _amount: u128) -> Result<(), GameError> {
        Err(GameError::DirectTransfer)
    }

    /// Drain all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    // ========================================================================
    // Read-side queries
    // ========================================================================

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All item slots, fixed length; unfilled slots are empty placeholders.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of filled item slots.
    #[inline]
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// Players who ranked this round, in submission order.
    #[inline]
    pub fn players(&self) -> &[u64] {
        &self.players
    }

    /// Accumulated prize pool in wei.
    #[inline]
    pub fn prize_pool(&self) -> u128 {
        self.prize_pool
    }

    /// Configured item count (N).
    #[inline]
    pub fn num_items(&self) -> usize {
        self.config.num_items
    }

    /// Configured ranking quota.
    #[inline]
    pub fn max_players(&self) -> usize {
        self.config.max_players
    }

    /// Configured entry fee in wei.
    #[inline]
    pub fn entry_fee(&self) -> u128 {
        self.config.entry_fee
    }

    /// Current round number (increments after each completed round).
    #[inline]
    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    /// The game configuration.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Record a validated, paid-for submission.
    fn record_submission(&mut self, player: u64, order: &[u8], paid: u128) {
        self.rankings
            .insert(player, RankingSubmission::new(player, order.to_vec()));
        self.players.push(player);
        self.prize_pool += paid;
        self.events.push_back(GameEvent::RankingSubmitted {
            player,
            order: order.to_vec(),
        });
    }

    /// Clear all per-round state for a fresh round.
    ///
    /// Runs only as the tail of a successful finalize; callers never
    /// observe the round mid-reset.
    fn reset_round(&mut self) {
        for item in &mut self.items {
            item.clear();
        }
        self.items_count = 0;
        self.rankings.clear();
        self.players.clear();
        self.prize_pool = 0;
        self.phase = Phase::CollectingItems;
        self.round_id += 1;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
