use super::history::History;
use super::player::Player;
use crate::DominoError;
use crate::Probability;
use crate::tiles::Ends;
use crate::tiles::Hand;
use crate::tiles::Side;
use crate::tiles::Tile;
use std::collections::BTreeSet;

/// Tracker is the single source of truth for one play session.
///
/// It owns the assisted player's hand, the open ends of the line of play,
/// and the history of what every seat has played. Scoring and advice read
/// borrowed snapshots of it and never mutate it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tracker {
    hand: Hand,
    ends: Ends,
    history: History,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn ends(&self) -> &Ends {
        &self.ends
    }
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Pick up a tile.
    pub fn add(&mut self, tile: Tile) {
        log::debug!("picked up {}", tile);
        self.hand.add(tile);
    }
    /// Take a tile out of hand without recording it as played.
    pub fn remove(&mut self, tile: Tile) -> Result<(), DominoError> {
        self.hand.remove(tile)?;
        log::debug!("put down {}", tile);
        Ok(())
    }
    /// Empty the hand, keeping the board and history.
    pub fn clear_hand(&mut self) {
        log::debug!("cleared hand of {} tiles", self.hand.len());
        self.hand.clear();
    }
    /// Overwrite the open ends, e.g. to correct state or join mid-game.
    pub fn set_ends(&mut self, left: u8, right: u8) -> Result<(), DominoError> {
        self.set_board(Ends::new(left, right)?);
        Ok(())
    }
    pub fn set_board(&mut self, ends: Ends) {
        self.ends = ends;
        log::debug!("board now at {}", self.ends);
    }

    /// Record a play, attaching on the left when the tile fits both ends.
    pub fn record(&mut self, player: u8, tile: Tile) -> Result<Side, DominoError> {
        let side = self.ends.sides(tile).first().copied().unwrap_or_default();
        self.record_on(player, tile, side)
    }
    /// Record a play on a specific side.
    ///
    /// Validates the seat, that a self play is held, and that the tile fits
    /// the chosen side before touching any state, so a rejected play leaves
    /// the tracker exactly as it was.
    pub fn record_on(&mut self, player: u8, tile: Tile, side: Side) -> Result<Side, DominoError> {
        let player = Player::try_from(player)?;
        if player.is_me() && !self.hand.contains(&tile) {
            return Err(DominoError::TileNotFound(tile));
        }
        let ends = self.ends.attach(tile, side)?;
        if player.is_me() {
            self.hand.remove(tile)?;
        }
        self.history.record(player, tile);
        self.ends = ends;
        log::debug!("{} played {} on the {}, board at {}", player, tile, side, self.ends);
        Ok(side)
    }

    /// Numbers with no recorded plays.
    pub fn unplayed(&self) -> BTreeSet<u8> {
        self.history.unplayed()
    }
    /// Chance that an unseen tile (neither held nor played) carries `pip`.
    pub fn odds(&self, pip: u8) -> Probability {
        let unseen = Tile::all()
            .filter(|t| !self.hand.contains(t))
            .filter(|t| !self.history.contains(t))
            .collect::<Vec<Tile>>();
        match unseen.len() {
            0 => 0.0,
            n => unseen.iter().filter(|t| t.has(pip)).count() as Probability / n as Probability,
        }
    }
    /// Start a new game.
    pub fn reset(&mut self) {
        log::info!("new game");
        *self = Self::default();
    }
}
