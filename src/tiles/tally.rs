use super::tile::Tile;
use crate::PIPS;
use std::collections::BTreeSet;

/// Per-number count of tile faces.
///
/// Each face counts once, so a double contributes two to its own number.
/// Used both for the numbers held in a hand and the numbers seen played.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tally([usize; PIPS]);

impl Tally {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn get(&self, pip: u8) -> usize {
        self.0.get(pip as usize).copied().unwrap_or_default()
    }
    pub fn count(&mut self, tile: Tile) {
        for pip in tile.faces() {
            self.0[pip as usize] += 1;
        }
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
    /// (number, count) pairs in number order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().enumerate().map(|(p, n)| (p as u8, *n))
    }
    /// Numbers with a zero count.
    pub fn absent(&self) -> BTreeSet<u8> {
        self.iter().filter(|(_, n)| *n == 0).map(|(p, _)| p).collect()
    }
    /// Numbers sharing the highest non-zero count.
    pub fn heaviest(&self) -> BTreeSet<u8> {
        let max = self.0.iter().copied().max().unwrap_or_default();
        self.iter()
            .filter(|(_, n)| *n == max && max > 0)
            .map(|(p, _)| p)
            .collect()
    }
}

impl std::ops::Index<u8> for Tally {
    type Output = usize;
    fn index(&self, pip: u8) -> &Self::Output {
        &self.0[pip as usize]
    }
}

impl FromIterator<Tile> for Tally {
    fn from_iter<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut tally = Self::empty();
        for tile in tiles {
            tally.count(tile);
        }
        tally
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let entries = self
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(p, n)| format!("{}:{}", p, n))
            .collect::<Vec<String>>();
        write!(f, "{{{}}}", entries.join(" "))
    }
}
