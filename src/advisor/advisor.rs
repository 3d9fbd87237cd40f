use super::advice::Advice;
use super::advice::Strategy;
use super::analysis::Analysis;
use crate::ENDGAME_HAND;
use crate::tiles::Hand;
use crate::tracker::History;
use crate::tracker::Tracker;

/// Qualitative guidance from hand size and what has been played.
///
/// Above five tiles the hand is still developing and should shed its
/// longest numbers. At five or fewer, any number nobody has played is a
/// blocking opportunity; with none left, the aim becomes losing points.
pub struct Advisor;

impl Advisor {
    pub fn advise(hand: &Hand, history: &History) -> Advice {
        let unplayed = history.unplayed();
        let strategy = match (hand.len() > ENDGAME_HAND, unplayed.is_empty()) {
            (true, _) => Strategy::Shed,
            (false, false) => Strategy::Block,
            (false, true) => Strategy::Minimize,
        };
        log::debug!("{} tiles left, advising {}", hand.len(), strategy);
        Advice {
            strategy,
            tiles: hand.len(),
            unplayed,
            heavy: hand.tally().heaviest(),
            pips: hand.pips(),
        }
    }
    pub fn analyze(hand: &Hand) -> Analysis {
        Analysis::from(hand)
    }
}

impl From<&Tracker> for Advice {
    fn from(tracker: &Tracker) -> Self {
        Advisor::advise(tracker.hand(), tracker.history())
    }
}
