use std::collections::BTreeSet;

/// The categorical recommendation for the current phase of the hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Strategy {
    /// Early or mid game: shed the numbers the hand holds most of.
    Shed,
    /// Endgame with numbers nobody has shown: play to block them.
    Block,
    /// Endgame with every number seen: get rid of points.
    Minimize,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Shed => write!(f, "early/mid game"),
            Self::Block => write!(f, "endgame, block"),
            Self::Minimize => write!(f, "endgame, minimize points"),
        }
    }
}

/// Guidance plus the facts it rests on. No score, only a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub strategy: Strategy,
    /// Tiles left in hand.
    pub tiles: usize,
    /// Numbers nobody has played yet.
    pub unplayed: BTreeSet<u8>,
    /// Numbers the hand holds the most faces of.
    pub heavy: BTreeSet<u8>,
    /// Points left in hand.
    pub pips: u32,
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} ({} tiles in hand)", self.strategy, self.tiles)?;
        match self.strategy {
            Strategy::Shed => writeln!(
                f,
                "shed high-frequency numbers first: {}",
                listing(&self.heavy)
            )?,
            Strategy::Block => writeln!(
                f,
                "nobody has played {}; play to block them",
                listing(&self.unplayed)
            )?,
            Strategy::Minimize => writeln!(
                f,
                "every number has been played; get rid of high-value tiles"
            )?,
        }
        writeln!(f, "unplayed numbers: {}", listing(&self.unplayed))?;
        write!(f, "pips in hand: {}", self.pips)
    }
}

/// Comma-separated numbers, or "none".
pub(crate) fn listing(numbers: &BTreeSet<u8>) -> String {
    match numbers.is_empty() {
        true => String::from("none"),
        false => numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<String>>()
            .join(", "),
    }
}
