use super::boneyard::Boneyard;
use super::ends::Ends;
use super::tally::Tally;
use super::tile::Tile;
use crate::DominoError;
use std::collections::BTreeSet;

/// The tiles held by the assisted player, in the order they were picked up.
///
/// A multiset: nothing stops the same tile being added twice, since only
/// the local hand is tracked and the caller owns set-wide consistency.
/// Insertion order is preserved and breaks ties between equal suggestions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Tile>);

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn add(&mut self, tile: Tile) {
        self.0.push(tile);
    }
    /// Removes the first copy of `tile`.
    pub fn remove(&mut self, tile: Tile) -> Result<(), DominoError> {
        let index = self
            .0
            .iter()
            .position(|t| *t == tile)
            .ok_or(DominoError::TileNotFound(tile))?;
        self.0.remove(index);
        Ok(())
    }
    pub fn contains(&self, tile: &Tile) -> bool {
        self.0.contains(tile)
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.0.iter()
    }
    /// How many faces of each number the hand holds.
    pub fn tally(&self) -> Tally {
        self.0.iter().copied().collect()
    }
    pub fn doubles(&self) -> BTreeSet<u8> {
        self.0
            .iter()
            .filter(|t| t.is_double())
            .map(|t| t.lo())
            .collect()
    }
    /// Total points left in hand.
    pub fn pips(&self) -> u32 {
        self.0.iter().map(|t| t.sum() as u32).sum()
    }
    /// True if any tile in hand fits the ends.
    pub fn fits(&self, ends: &Ends) -> bool {
        self.0.iter().any(|t| t.playable(ends))
    }
    /// The hand with the tile at `index` taken out.
    pub fn without(&self, index: usize) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, t)| *t)
                .collect(),
        )
    }
}

impl From<Vec<Tile>> for Hand {
    fn from(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }
}
impl From<Hand> for Vec<Tile> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}
impl IntoIterator for Hand {
    type Item = Tile;
    type IntoIter = std::vec::IntoIter<Tile>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        Self(tiles.into_iter().collect())
    }
}

/// a random seven-tile deal from a fresh set
impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Boneyard::new().deal()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(empty)");
        }
        let tiles = self.0.iter().map(Tile::to_string).collect::<Vec<_>>();
        write!(f, "{}", tiles.join(" "))
    }
}
