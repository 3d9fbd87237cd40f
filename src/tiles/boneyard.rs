use super::hand::Hand;
use super::tile::Tile;
use crate::HAND_SIZE;

/// The undealt tiles of a double-six set. Random selection via ::draw().
#[derive(Debug, Clone)]
pub struct Boneyard(Vec<Tile>);

impl Boneyard {
    /// A full set of 28 tiles.
    pub fn new() -> Self {
        Self(Tile::all().collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, tile: &Tile) -> bool {
        self.0.contains(tile)
    }
    /// remove a specific tile from the boneyard
    pub fn remove(&mut self, tile: Tile) {
        self.0.retain(|t| *t != tile);
    }
    /// remove a uniformly random tile from the boneyard
    pub fn draw(&mut self) -> Option<Tile> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(rand::random_range(0..n))),
        }
    }
    /// up to seven tiles, fewer if the boneyard runs dry
    pub fn deal(&mut self) -> Hand {
        (0..HAND_SIZE).filter_map(|_| self.draw()).collect()
    }
}

impl Default for Boneyard {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Boneyard {
    type Item = Tile;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}
