use super::player::Player;
use crate::tiles::Tally;
use crate::tiles::Tile;
use crate::N;
use std::collections::BTreeSet;

/// Everything observed played this session, by anyone.
///
/// Counts are per face, like a hand [`Tally`]: a double adds two to its
/// number. Only grows; cleared by starting a new game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    seen: Tally,
    plays: [Vec<Tile>; N],
    order: Vec<(Player, Tile)>,
}

impl History {
    pub fn record(&mut self, player: Player, tile: Tile) {
        self.seen.count(tile);
        self.plays[player.index()].push(tile);
        self.order.push((player, tile));
    }
    /// Faces of `pip` seen played.
    pub fn get(&self, pip: u8) -> usize {
        self.seen.get(pip)
    }
    pub fn seen(&self) -> &Tally {
        &self.seen
    }
    /// Numbers nobody has played yet.
    pub fn unplayed(&self) -> BTreeSet<u8> {
        self.seen.absent()
    }
    pub fn plays(&self, player: Player) -> &[Tile] {
        &self.plays[player.index()]
    }
    /// Per-number faces a single player has shown.
    pub fn pattern(&self, player: Player) -> Tally {
        self.plays(player).iter().copied().collect()
    }
    /// Every play in the order it happened.
    pub fn order(&self) -> &[(Player, Tile)] {
        &self.order
    }
    pub fn contains(&self, tile: &Tile) -> bool {
        self.order.iter().any(|(_, t)| t == tile)
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "seen {}", self.seen)?;
        for player in Player::all() {
            let tiles = self
                .plays(player)
                .iter()
                .map(Tile::to_string)
                .collect::<Vec<_>>();
            match tiles.is_empty() {
                true => writeln!(f, "{} nothing yet", player)?,
                false => writeln!(
                    f,
                    "{} {} shows {}",
                    player,
                    tiles.join(" "),
                    self.pattern(player)
                )?,
            }
        }
        Ok(())
    }
}
