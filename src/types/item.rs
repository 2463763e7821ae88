//! Item and phase types for the ranking game.
//!
//! ## Slot Semantics
//!
//! A round holds a fixed number of item slots. A slot that has not been
//! filled yet reads as `Item::default()`: empty strings and the null adder
//! identity (`0`). Read consumers rely on index-stability and on being able
//! to distinguish "not yet filled" from "filled", so slots are never omitted
//! from query results.

/// The null player identity.
///
/// Used as the `adder` of an empty item slot, the way an unset address
/// field reads as the zero address on chain. Real players always have a
/// non-zero identity.
pub const NULL_PLAYER: u64 = 0;

// ============================================================================
// Phase enum
// ============================================================================

/// Round phase: governs which operations are valid.
///
/// - `CollectingItems` accepts `add_item`, rejects `submit_ranking`
/// - `CollectingRanks` accepts `submit_ranking`, rejects `add_item`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Initial phase: item slots are being filled.
    #[default]
    CollectingItems,
    /// All slots filled: rankings are being collected.
    CollectingRanks,
}

impl Phase {
    /// Convert to u8 for external reporting
    pub fn to_u8(self) -> u8 {
        match self {
            Phase::CollectingItems => 0,
            Phase::CollectingRanks => 1,
        }
    }

    /// Convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Phase::CollectingItems),
            1 => Some(Phase::CollectingRanks),
            _ => None,
        }
    }
}

// ============================================================================
// Item struct
// ============================================================================

/// One submitted entry (a song) in the current round.
///
/// All string fields are stored trimmed. An `Item` is owned exclusively by
/// the current round's slot array; on round reset every slot reverts to
/// `Item::default()`.
///
/// ## Example
///
/// ```
/// use rankr::types::Item;
///
/// let item = Item::new("Daft Punk", "One More Time", "https://song.link/omt", 42, 1703577600000);
/// assert_eq!(item.title, "One More Time");
/// assert!(!item.is_empty());
/// assert!(Item::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    /// Artist/author name (non-empty for a filled slot)
    pub author: String,

    /// Song title (non-empty for a filled slot)
    pub title: String,

    /// Link to the song (non-empty for a filled slot)
    pub url: String,

    /// Player who submitted the item; `NULL_PLAYER` for an empty slot
    pub adder: u64,

    /// Unix timestamp in milliseconds when the item was added
    pub added_at: u64,
}

impl Item {
    /// Create a filled item. Fields are trimmed on the way in.
    pub fn new(author: &str, title: &str, url: &str, adder: u64, added_at: u64) -> Self {
        Self {
            author: author.trim().to_owned(),
            title: title.trim().to_owned(),
            url: url.trim().to_owned(),
            adder,
            added_at,
        }
    }

    /// Check whether this slot is the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adder == NULL_PLAYER
            && self.author.is_empty()
            && self.title.is_empty()
            && self.url.is_empty()
    }

    /// Reset this slot to the empty sentinel in place.
    pub fn clear(&mut self) {
        self.author.clear();
        self.title.clear();
        self.url.clear();
        self.adder = NULL_PLAYER;
        self.added_at = 0;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
