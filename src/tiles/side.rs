/// One of the two open ends of the line of play.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    #[default]
    Left = 0,
    Right = 1,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
