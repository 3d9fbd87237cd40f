use super::advice::listing;
use crate::STRONG_FREQUENCY;
use crate::tiles::Hand;
use crate::tiles::Tally;
use std::collections::BTreeSet;

/// A snapshot reading of the hand: which numbers it is long or short in,
/// its doubles, and the points it would cost if the game ended now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tally: Tally,
    pub strong: BTreeSet<u8>,
    pub weak: BTreeSet<u8>,
    pub doubles: BTreeSet<u8>,
    pub potential: u32,
}

impl From<&Hand> for Analysis {
    fn from(hand: &Hand) -> Self {
        let tally = hand.tally();
        Self {
            strong: tally
                .iter()
                .filter(|(_, n)| *n >= STRONG_FREQUENCY)
                .map(|(p, _)| p)
                .collect(),
            weak: tally
                .iter()
                .filter(|(_, n)| *n > 0 && *n < STRONG_FREQUENCY)
                .map(|(p, _)| p)
                .collect(),
            doubles: hand.doubles(),
            potential: hand.pips(),
            tally,
        }
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "frequencies: {}", self.tally)?;
        writeln!(f, "strong numbers: {}", listing(&self.strong))?;
        writeln!(f, "weak numbers: {}", listing(&self.weak))?;
        writeln!(f, "doubles: {}", listing(&self.doubles))?;
        write!(f, "scoring potential: {}", self.potential)
    }
}
