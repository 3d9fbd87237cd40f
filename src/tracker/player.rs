use crate::DominoError;
use crate::N;

/// A seat at the table. Seat 0 is the assisted player; 1 through 3 are
/// the others in turn order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Player(u8);

impl Player {
    pub const ME: Self = Self(0);

    pub fn is_me(&self) -> bool {
        *self == Self::ME
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N as u8).map(Self)
    }
}

impl TryFrom<u8> for Player {
    type Error = DominoError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < N {
            true => Ok(Self(n)),
            false => Err(DominoError::InvalidPlayer(n.to_string())),
        }
    }
}
impl From<Player> for u8 {
    fn from(p: Player) -> u8 {
        p.0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_in_range() {
        assert_eq!(Player::try_from(0), Ok(Player::ME));
        assert!(Player::try_from(3).is_ok());
        assert_eq!(
            Player::try_from(4),
            Err(DominoError::InvalidPlayer("4".into()))
        );
        assert_eq!(Player::all().count(), N);
    }
}
