use super::breakdown::Breakdown;
use super::suggestion::Suggestion;
use super::weights::Weights;
use crate::DominoError;
use crate::Score;
use crate::tiles::Ends;
use crate::tiles::Hand;
use crate::tiles::Side;
use crate::tiles::Tally;
use crate::tracker::History;
use crate::tracker::Tracker;

/// Scores every playable tile in hand with a fixed linear heuristic.
///
/// A single pass over the hand: for each tile that fits an open end, and for
/// each side it fits on, sum four weighted terms:
///
/// - frequency: faces the rest of the hand shares with this tile's numbers,
///   so the hand stays flexible after it leaves
/// - double: shed doubles early, hold them late for blocking
/// - blocking: faces of numbers opponents have rarely played
/// - flexibility: a flat penalty when nothing left in hand would fit the new ends
///
/// A tile is scored at its best side. There is no lookahead and no opponent
/// model beyond the history counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Scorer {
    weights: Weights,
}

impl From<Weights> for Scorer {
    fn from(weights: Weights) -> Self {
        Self { weights }
    }
}

impl Scorer {
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// The best play against the tracker's current ends.
    pub fn suggest(&self, tracker: &Tracker) -> Result<Suggestion, DominoError> {
        self.suggest_for(tracker, tracker.ends())
    }
    /// The best play against caller-supplied ends.
    pub fn suggest_for(&self, tracker: &Tracker, ends: &Ends) -> Result<Suggestion, DominoError> {
        let best = self
            .candidates(tracker.hand(), ends, tracker.history())
            .into_iter()
            .min_by(Suggestion::rank)
            .ok_or(DominoError::NoPlayableTile(*ends))?;
        log::debug!("suggesting {}", best);
        Ok(best)
    }
    /// Every playable tile, best first.
    pub fn rank(&self, tracker: &Tracker) -> Vec<Suggestion> {
        let mut candidates = self.candidates(tracker.hand(), tracker.ends(), tracker.history());
        candidates.sort_by(Suggestion::rank);
        candidates
    }

    /// One candidate per playable tile, in hand order, each at its best side.
    fn candidates(&self, hand: &Hand, ends: &Ends, history: &History) -> Vec<Suggestion> {
        let tally = hand.tally();
        hand.iter()
            .enumerate()
            .filter(|(_, tile)| tile.playable(ends))
            .filter_map(|(index, tile)| {
                ends.sides(*tile)
                    .into_iter()
                    .map(|side| Suggestion {
                        tile: *tile,
                        side,
                        index,
                        weakest: tile.faces().iter().map(|p| tally[*p]).min().unwrap_or_default(),
                        breakdown: self.breakdown(hand, &tally, index, ends, side, history),
                    })
                    .inspect(|s| log::debug!("candidate {}", s))
                    .reduce(|best, next| match next.score() > best.score() {
                        true => next,
                        false => best,
                    })
            })
            .collect()
    }

    fn breakdown(
        &self,
        hand: &Hand,
        tally: &Tally,
        index: usize,
        ends: &Ends,
        side: Side,
        history: &History,
    ) -> Breakdown {
        let tile = hand.tiles()[index];
        // a double is one number whose two faces are both its own
        let shared = match tile.is_double() {
            true => tally[tile.hi()] as Score - 2.0,
            false => tile.faces().iter().map(|p| tally[*p] as Score - 1.0).sum(),
        };
        let frequency = shared * self.weights.frequency;
        let double = match (tile.is_double(), hand.len() > self.weights.double_horizon) {
            (false, _) => 0.0,
            (true, true) => self.weights.double_early,
            (true, false) => self.weights.double_late,
        };
        let blocking = tile
            .faces()
            .iter()
            .map(|p| self.weights.blocking_ceiling.saturating_sub(history.get(*p)) as Score)
            .sum::<Score>()
            * self.weights.blocking;
        let rest = hand.without(index);
        let flexibility = match ends.attach(tile, side) {
            Ok(next) if !rest.is_empty() && !rest.fits(&next) => -self.weights.stranded,
            _ => 0.0,
        };
        Breakdown {
            frequency,
            double,
            blocking,
            flexibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::tiles::Tile;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn session(tiles: &[(u8, u8)], ends: Option<(u8, u8)>) -> Tracker {
        let mut tracker = Tracker::new();
        for (a, b) in tiles {
            tracker.add(tile(*a, *b));
        }
        if let Some((l, r)) = ends {
            tracker.set_ends(l, r).unwrap();
        }
        tracker
    }

    fn flat() -> Weights {
        Weights {
            frequency: 0.0,
            double_early: 0.0,
            double_late: 0.0,
            blocking: 0.0,
            stranded: 0.0,
            ..Weights::default()
        }
    }

    #[test]
    fn only_playable_tile() {
        let tracker = session(&[(3, 4), (3, 5), (6, 6)], Some((4, 2)));
        let best = Scorer::default().suggest(&tracker).unwrap();
        assert_eq!(best.tile, tile(3, 4));
        assert_eq!(best.side, Side::Left);
        assert_eq!(Scorer::default().rank(&tracker).len(), 1);
    }

    #[test]
    fn nothing_playable() {
        let tracker = session(&[(1, 2)], Some((5, 6)));
        assert_eq!(
            Scorer::default().suggest(&tracker),
            Err(DominoError::NoPlayableTile(Ends::new(5, 6).unwrap()))
        );
        let empty = session(&[], Some((5, 6)));
        assert!(Scorer::default().suggest(&empty).is_err());
    }

    #[test]
    fn default_terms() {
        // tally {3:2 4:1 5:1 6:2}, nothing seen yet
        let tracker = session(&[(3, 4), (3, 5), (6, 6)], Some((4, 2)));
        let best = Scorer::default().suggest(&tracker).unwrap();
        assert_eq!(best.breakdown.frequency, 1.0);
        assert_eq!(best.breakdown.double, 0.0);
        assert_eq!(best.breakdown.blocking, 4.0);
        assert_eq!(best.breakdown.flexibility, 0.0);
        assert_eq!(best.score(), 5.0);
    }

    #[test]
    fn lone_double_shares_nothing() {
        let tracker = session(&[(6, 6), (0, 1)], Some((6, 0)));
        let ranked = Scorer::default().rank(&tracker);
        let double = ranked.iter().find(|s| s.tile == tile(6, 6)).unwrap();
        let single = ranked.iter().find(|s| s.tile == tile(0, 1)).unwrap();
        assert_eq!(double.breakdown.frequency, 0.0);
        assert_eq!(single.breakdown.frequency, 0.0);
    }

    #[test]
    fn double_counts_each_partner_once() {
        let tracker = session(&[(6, 6), (6, 1), (6, 2)], Some((6, 0)));
        let ranked = Scorer::default().rank(&tracker);
        let double = ranked.iter().find(|s| s.tile == tile(6, 6)).unwrap();
        assert_eq!(double.breakdown.frequency, 2.0);
    }

    #[test]
    fn best_side_wins() {
        // on the left [2|5] leaves ends 5,5 and strands [0|2]; on the right it leaves 2,2
        let tracker = session(&[(2, 5), (0, 2)], Some((2, 5)));
        let ranked = Scorer::default().rank(&tracker);
        let both = ranked.iter().find(|s| s.tile == tile(2, 5)).unwrap();
        assert_eq!(both.side, Side::Right);
        assert_eq!(both.breakdown.flexibility, 0.0);
        let hand = tracker.hand();
        let left = Scorer::default().breakdown(
            hand,
            &hand.tally(),
            0,
            tracker.ends(),
            Side::Left,
            tracker.history(),
        );
        assert_eq!(left.flexibility, -crate::WEIGHT_STRANDED);
    }

    #[test]
    fn stranding_is_penalized() {
        let tracker = session(&[(1, 2), (5, 6)], Some((1, 1)));
        let best = Scorer::default().suggest(&tracker).unwrap();
        assert_eq!(best.tile, tile(1, 2));
        assert_eq!(best.breakdown.flexibility, -crate::WEIGHT_STRANDED);
    }

    #[test]
    fn last_tile_is_never_stranded() {
        let tracker = session(&[(1, 2)], Some((1, 1)));
        let best = Scorer::default().suggest(&tracker).unwrap();
        assert_eq!(best.breakdown.flexibility, 0.0);
    }

    #[test]
    fn doubles_shed_early_held_late() {
        let long = session(&[(2, 2), (0, 1), (0, 3), (0, 4), (0, 5)], Some((2, 6)));
        let best = Scorer::default().suggest(&long).unwrap();
        assert_eq!(best.tile, tile(2, 2));
        assert_eq!(best.breakdown.double, crate::WEIGHT_DOUBLE_EARLY);
        let short = session(&[(2, 2), (0, 1), (0, 3), (0, 4)], Some((2, 6)));
        let best = Scorer::default().suggest(&short).unwrap();
        assert_eq!(best.breakdown.double, crate::WEIGHT_DOUBLE_LATE);
    }

    #[test]
    fn blocking_fades_with_history() {
        let mut tracker = session(&[(0, 1), (0, 6)], None);
        tracker.record(1, tile(1, 1)).unwrap();
        tracker.record(2, tile(1, 6)).unwrap();
        tracker.record(3, tile(6, 6)).unwrap();
        tracker.record(1, tile(6, 2)).unwrap();
        tracker.set_ends(1, 6).unwrap();
        // seen {1:3 2:1 6:4}
        let ranked = Scorer::default().rank(&tracker);
        let low = ranked.iter().find(|s| s.tile == tile(0, 1)).unwrap();
        let high = ranked.iter().find(|s| s.tile == tile(0, 6)).unwrap();
        assert_eq!(low.breakdown.blocking, (4.0 + 1.0) * crate::WEIGHT_BLOCKING);
        assert_eq!(high.breakdown.blocking, 4.0 * crate::WEIGHT_BLOCKING);
        assert_eq!(ranked[0].tile, tile(0, 1));
    }

    #[test]
    fn ties_prefer_weaker_number() {
        let tracker = session(&[(0, 2), (0, 1), (2, 3), (2, 4)], Some((0, 0)));
        let best = Scorer::from(flat()).suggest(&tracker).unwrap();
        assert_eq!(best.tile, tile(0, 1));
        assert_eq!(best.weakest, 1);
    }

    #[test]
    fn ties_then_prefer_hand_order() {
        let tracker = session(&[(0, 3), (0, 4)], Some((0, 0)));
        let best = Scorer::from(flat()).suggest(&tracker).unwrap();
        assert_eq!(best.tile, tile(0, 3));
        assert_eq!(best.index, 0);
    }

    #[test]
    fn supplied_ends_override_board() {
        let tracker = session(&[(3, 4), (5, 6)], Some((4, 2)));
        let ends = Ends::new(6, 6).unwrap();
        let best = Scorer::default().suggest_for(&tracker, &ends).unwrap();
        assert_eq!(best.tile, tile(5, 6));
    }

    #[test]
    fn opening_any_tile() {
        let tracker = session(&[(1, 2), (5, 6)], None);
        let ranked = Scorer::default().rank(&tracker);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ranking_is_sorted() {
        let mut tracker = Tracker::new();
        for t in Hand::random().iter() {
            tracker.add(*t);
        }
        let ranked = Scorer::default().rank(&tracker);
        assert_eq!(ranked.len(), tracker.hand().len());
        for pair in ranked.windows(2) {
            assert!(pair[0].rank(&pair[1]).is_le());
        }
        let best = Scorer::default().suggest(&tracker).unwrap();
        assert_eq!(best, ranked[0]);
    }
}
