//! Game configuration.

use crate::error::GameError;
use crate::types::amount::DEFAULT_ENTRY_FEE;

/// Upper bound on items per round.
///
/// Keeps rank points and slot arrays small; the shipped variants use 3.
pub const MAX_ITEMS: usize = 32;

/// Immutable per-game parameters.
///
/// The original deployment shipped fixed constants (3 items, 2 players,
/// 0.00001 ETH); the Rank5 variant only changed the fee. Here they are one
/// validated value so every variant is an instantiation.
///
/// ## Example
///
/// ```
/// use rankr::ledger::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.num_items, 3);
/// assert_eq!(config.max_players, 2);
///
/// let rank5 = GameConfig::new(5, 4, 1_000_000_000_000_000).unwrap();
/// assert_eq!(rank5.num_items, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Item slots per round (N)
    pub num_items: usize,

    /// Ranking quota that triggers finalization
    pub max_players: usize,

    /// Exact fee per ranking submission, in wei
    pub entry_fee: u128,
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `num_items` is zero or above [`MAX_ITEMS`],
    /// `max_players` is zero, or `entry_fee` is zero.
    pub fn new(num_items: usize, max_players: usize, entry_fee: u128) -> Result<Self, GameError> {
        if num_items == 0 {
            return Err(GameError::InvalidConfig("num_items must be at least 1"));
        }
        if num_items > MAX_ITEMS {
            return Err(GameError::InvalidConfig("num_items exceeds MAX_ITEMS"));
        }
        if max_players == 0 {
            return Err(GameError::InvalidConfig("max_players must be at least 1"));
        }
        if entry_fee == 0 {
            return Err(GameError::InvalidConfig("entry_fee must be non-zero"));
        }

        Ok(Self {
            num_items,
            max_players,
            entry_fee,
        })
    }
}

impl Default for GameConfig {
    /// The original Rankr constants: 3 items, 2 players, 0.00001 ETH.
    fn default() -> Self {
        Self {
            num_items: 3,
            max_players: 2,
            entry_fee: DEFAULT_ENTRY_FEE,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.num_items, 3);
        assert_eq!(config.max_players, 2);
        assert_eq!(config.entry_fee, 10_000_000_000_000);
    }

    #[test]
    fn test_config_new_valid() {
        let config = GameConfig::new(5, 4, 1_000_000_000_000_000).unwrap();
        assert_eq!(config.num_items, 5);
        assert_eq!(config.max_players, 4);
        assert_eq!(config.entry_fee, 1_000_000_000_000_000);
    }

    #[test]
    fn test_config_rejects_invalid() {
        assert!(matches!(
            GameConfig::new(0, 2, 1),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(MAX_ITEMS + 1, 2, 1),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 0, 1),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 2, 0),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_boundary() {
        assert!(GameConfig::new(1, 1, 1).is_ok());
        assert!(GameConfig::new(MAX_ITEMS, 2, 1).is_ok());
    }
}
