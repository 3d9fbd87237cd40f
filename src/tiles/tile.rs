use super::ends::Ends;
use crate::DominoError;
use crate::MAX_PIP;
use crate::SET_SIZE;

/// A domino tile: an unordered pair of pip values in `0..=6`.
///
/// Faces are stored low-then-high, so `Tile::new(3, 5) == Tile::new(5, 3)`.
/// The 28 tiles of a double-six set are bijectively mapped to `0..28` where
/// the encoding is `hi * (hi + 1) / 2 + lo`. This orders tiles first by their
/// high face, then by their low face.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tile {
    hi: u8,
    lo: u8,
}

impl Tile {
    /// Builds a tile, rejecting any face above six.
    pub fn new(a: u8, b: u8) -> Result<Self, DominoError> {
        if a > MAX_PIP || b > MAX_PIP {
            Err(DominoError::InvalidTile(format!(
                "[{}|{}] has a face outside 0-{}",
                a, b, MAX_PIP
            )))
        } else {
            Ok(Self {
                lo: a.min(b),
                hi: a.max(b),
            })
        }
    }
    pub fn lo(&self) -> u8 {
        self.lo
    }
    pub fn hi(&self) -> u8 {
        self.hi
    }
    pub fn faces(&self) -> [u8; 2] {
        [self.lo, self.hi]
    }
    pub fn is_double(&self) -> bool {
        self.lo == self.hi
    }
    /// Points this tile is worth when left in hand.
    pub fn sum(&self) -> u8 {
        self.lo + self.hi
    }
    pub fn has(&self, pip: u8) -> bool {
        self.lo == pip || self.hi == pip
    }
    /// The face left exposed once this tile is matched against `pip`.
    pub fn other(&self, pip: u8) -> Option<u8> {
        match pip {
            p if p == self.lo => Some(self.hi),
            p if p == self.hi => Some(self.lo),
            _ => None,
        }
    }
    /// True if the tile attaches to either open end, or opens an empty board.
    pub fn playable(&self, ends: &Ends) -> bool {
        ends.is_empty() || self.faces().iter().any(|p| ends.accepts(*p))
    }
    /// Every tile of the double-six set in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SET_SIZE as u8).map(Self::from)
    }
}

/// u8 isomorphism
/// each tile is mapped to its location in a sorted double-six set 0-27
/// [2|4]
/// 4 * 5 / 2 + 2 = 12
impl From<Tile> for u8 {
    fn from(t: Tile) -> u8 {
        t.hi * (t.hi + 1) / 2 + t.lo
    }
}
impl From<u8> for Tile {
    fn from(n: u8) -> Self {
        assert!((n as usize) < SET_SIZE, "invalid tile index: {}", n);
        let hi = (0..=MAX_PIP)
            .take_while(|h| h * (h + 1) / 2 <= n)
            .last()
            .unwrap_or_default();
        Self {
            lo: n - hi * (hi + 1) / 2,
            hi,
        }
    }
}

impl crate::Arbitrary for Tile {
    fn random() -> Self {
        Self::from(rand::random_range(0..SET_SIZE as u8))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn order_independent() {
        for a in 0..=MAX_PIP {
            for b in 0..=MAX_PIP {
                assert_eq!(Tile::new(a, b), Tile::new(b, a));
            }
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Tile::new(7, 2), Err(DominoError::InvalidTile(_))));
        assert!(matches!(Tile::new(2, 7), Err(DominoError::InvalidTile(_))));
        assert!(Tile::new(6, 6).is_ok());
    }

    #[test]
    fn bijective_u8() {
        let tile = Tile::random();
        assert_eq!(tile, Tile::from(u8::from(tile)));
        assert_eq!(Tile::all().count(), SET_SIZE);
        assert_eq!(Tile::from(0), Tile::new(0, 0).unwrap());
        assert_eq!(Tile::from(27), Tile::new(6, 6).unwrap());
    }

    #[test]
    fn ordering_follows_index() {
        let a = Tile::new(0, 2).unwrap();
        let b = Tile::new(1, 1).unwrap();
        assert!(b < a);
        assert_eq!(b.cmp(&a), u8::from(b).cmp(&u8::from(a)));
        let pairs = Tile::all().collect::<Vec<Tile>>();
        for pair in pairs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn other_face() {
        let tile = Tile::new(2, 5).unwrap();
        assert_eq!(tile.other(2), Some(5));
        assert_eq!(tile.other(5), Some(2));
        assert_eq!(tile.other(3), None);
        let double = Tile::new(4, 4).unwrap();
        assert!(double.is_double());
        assert_eq!(double.other(4), Some(4));
    }

    #[test]
    fn playable_against_ends() {
        let ends = Ends::new(4, 2).unwrap();
        assert!(Tile::new(3, 4).unwrap().playable(&ends));
        assert!(Tile::new(2, 6).unwrap().playable(&ends));
        assert!(!Tile::new(3, 5).unwrap().playable(&ends));
        assert!(Tile::new(3, 5).unwrap().playable(&Ends::empty()));
    }
}
