use super::side::Side;
use super::tile::Tile;
use crate::DominoError;
use crate::MAX_PIP;

/// The two open pip values a new tile may attach to.
///
/// An empty board has no ends; any tile may open it, after which both of the
/// opening tile's faces are exposed.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Ends(Option<(u8, u8)>);

impl Ends {
    pub fn empty() -> Self {
        Self(None)
    }
    pub fn new(left: u8, right: u8) -> Result<Self, DominoError> {
        if left > MAX_PIP || right > MAX_PIP {
            Err(DominoError::InvalidTile(format!(
                "open ends {},{} outside 0-{}",
                left, right, MAX_PIP
            )))
        } else {
            Ok(Self(Some((left, right))))
        }
    }
    /// Ends exposed after `tile` opens an empty board.
    pub fn opening(tile: Tile) -> Self {
        Self(Some((tile.lo(), tile.hi())))
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
    pub fn get(&self, side: Side) -> Option<u8> {
        self.0.map(|(l, r)| match side {
            Side::Left => l,
            Side::Right => r,
        })
    }
    pub fn pair(&self) -> Option<(u8, u8)> {
        self.0
    }
    pub fn accepts(&self, pip: u8) -> bool {
        self.0.map_or(false, |(l, r)| l == pip || r == pip)
    }
    /// Sides `tile` can legally be placed on. An empty board is opened from the left.
    pub fn sides(&self, tile: Tile) -> Vec<Side> {
        match self.0 {
            None => vec![Side::Left],
            Some(_) => Side::ALL
                .into_iter()
                .filter(|s| self.get(*s).map_or(false, |p| tile.has(p)))
                .collect(),
        }
    }
    /// Ends after placing `tile` on `side`: that end becomes the tile's far face.
    pub fn attach(&self, tile: Tile, side: Side) -> Result<Self, DominoError> {
        match self.0 {
            None => Ok(Self::opening(tile)),
            Some((l, r)) => {
                let next = match side {
                    Side::Left => tile.other(l).map(|x| Self(Some((x, r)))),
                    Side::Right => tile.other(r).map(|x| Self(Some((l, x)))),
                };
                next.ok_or(DominoError::Unattachable(tile, *self))
            }
        }
    }
}

impl std::fmt::Display for Ends {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            None => write!(f, "an empty board"),
            Some((l, r)) => write!(f, "ends {},{}", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Ends::new(7, 1).is_err());
        assert!(Ends::new(6, 0).is_ok());
    }

    #[test]
    fn opening_exposes_both_faces() {
        let ends = Ends::empty().attach(tile(5, 2), Side::Right).unwrap();
        assert_eq!(ends.pair(), Some((2, 5)));
    }

    #[test]
    fn attach_replaces_matching_end() {
        let ends = Ends::new(4, 2).unwrap();
        assert_eq!(ends.attach(tile(3, 4), Side::Left), Ends::new(3, 2));
        assert_eq!(ends.attach(tile(2, 6), Side::Right), Ends::new(4, 6));
        assert_eq!(ends.attach(tile(2, 2), Side::Right), Ends::new(4, 2));
    }

    #[test]
    fn attach_rejects_wrong_side() {
        let ends = Ends::new(4, 2).unwrap();
        assert_eq!(
            ends.attach(tile(3, 4), Side::Right),
            Err(DominoError::Unattachable(tile(3, 4), ends))
        );
    }

    #[test]
    fn sides_for_tile() {
        let ends = Ends::new(4, 2).unwrap();
        assert_eq!(ends.sides(tile(2, 4)), vec![Side::Left, Side::Right]);
        assert_eq!(ends.sides(tile(6, 2)), vec![Side::Right]);
        assert!(ends.sides(tile(6, 5)).is_empty());
        assert_eq!(Ends::empty().sides(tile(6, 5)), vec![Side::Left]);
    }
}
