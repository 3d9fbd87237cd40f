use crate::tiles::Ends;
use crate::tiles::Tile;

/// Errors raised by the domino core.
///
/// Every variant is a deterministic validation failure. Callers recover by
/// reporting the message and carrying on with the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    /// A pip value outside 0..=6, or tile text that does not parse.
    InvalidTile(String),
    /// The tile is not in the hand.
    TileNotFound(Tile),
    /// Nothing in the hand fits the open ends.
    NoPlayableTile(Ends),
    /// A seat outside 0..=3.
    InvalidPlayer(String),
    /// A recorded tile matches neither open end.
    Unattachable(Tile, Ends),
}

impl std::fmt::Display for DominoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTile(s) => write!(f, "invalid tile: {}", s),
            Self::TileNotFound(t) => write!(f, "tile {} is not in your hand", t),
            Self::NoPlayableTile(e) => write!(f, "no tile in hand fits {}; draw or pass", e),
            Self::InvalidPlayer(s) => write!(f, "invalid player: {} (expected 0-3)", s),
            Self::Unattachable(t, e) => write!(f, "tile {} does not attach to {}", t, e),
        }
    }
}

impl std::error::Error for DominoError {}
