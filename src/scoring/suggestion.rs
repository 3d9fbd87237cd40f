use super::breakdown::Breakdown;
use crate::Score;
use crate::tiles::Side;
use crate::tiles::Tile;

/// A scored candidate play. Produced fresh on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub tile: Tile,
    pub side: Side,
    /// Position of the tile in hand.
    pub index: usize,
    /// Lowest hand frequency among the tile's faces.
    pub weakest: usize,
    pub breakdown: Breakdown,
}

impl Suggestion {
    pub fn score(&self) -> Score {
        self.breakdown.total()
    }
    /// Best first: higher score, then the weaker number, then earlier in hand.
    pub fn rank(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score()
            .total_cmp(&self.score())
            .then(self.weakest.cmp(&other.weakest))
            .then(self.index.cmp(&other.index))
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} on the {} ({:+.1}): {}",
            self.tile,
            self.side,
            self.score(),
            self.breakdown
        )
    }
}
