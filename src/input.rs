//! Translation of free text into validated domain values.
//!
//! The core never sees raw strings: the front end runs user input through
//! these parsers and hands the results to the tracker and scorer.
use crate::DominoError;
use crate::tiles::Ends;
use crate::tiles::Side;
use crate::tiles::Tile;
use crate::tracker::Player;

/// Splits `"a-b"`, `"a,b"` or `"[a|b]"` into two numbers.
fn pair(s: &str) -> Option<(u8, u8)> {
    let s = s.trim().trim_start_matches('[').trim_end_matches(']');
    let (a, b) = s.split_once(['-', ',', '|'])?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// A tile written as `3-4` or `3,4`.
pub fn tile(s: &str) -> Result<Tile, DominoError> {
    let (a, b) = pair(s).ok_or_else(|| {
        DominoError::InvalidTile(format!("{:?}, use the form 3-4 or 3,4", s.trim()))
    })?;
    Tile::new(a, b)
}

/// Several tiles separated by whitespace.
pub fn tiles(s: &str) -> Result<Vec<Tile>, DominoError> {
    s.split_whitespace().map(tile).collect()
}

/// Open ends written as `6,4`.
pub fn ends(s: &str) -> Result<Ends, DominoError> {
    let (l, r) = pair(s).ok_or_else(|| {
        DominoError::InvalidTile(format!("{:?}, use the form 6,4 for board ends", s.trim()))
    })?;
    Ends::new(l, r)
}

/// A seat number 0 through 3.
pub fn player(s: &str) -> Result<u8, DominoError> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| DominoError::InvalidPlayer(s.trim().to_string()))
        .and_then(Player::try_from)
        .map(u8::from)
}

/// `left`/`l` or `right`/`r`.
pub fn side(s: &str) -> anyhow::Result<Side> {
    match s.trim().to_lowercase().as_str() {
        "l" | "left" => Ok(Side::Left),
        "r" | "right" => Ok(Side::Right),
        other => Err(anyhow::anyhow!("invalid side {:?}, use left or right", other)),
    }
}
