//! Hand tracking and heuristic play suggestions for double-six dominoes.
//!
//! The crate is organized leaf to root:
//!
//! - [`tiles`]: tiles, hands, open ends, and per-number tallies
//! - [`tracker`]: the session state: hand, ends, and play history
//! - [`scoring`]: the linear heuristic that ranks playable tiles
//! - [`advisor`]: hand analysis and categorical endgame guidance
//! - [`input`]: translation of free text into validated domain values
//! - `cli`: the interactive terminal front end (feature `cli`)
pub mod advisor;
pub mod error;
pub mod input;
pub mod scoring;
pub mod tiles;
pub mod tracker;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::DominoError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Heuristic desirability of a candidate play.
pub type Score = f32;
/// Chance estimates over unseen tiles.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DOUBLE-SIX SET
// ============================================================================
/// Highest pip value on a face.
pub const MAX_PIP: u8 = 6;
/// Number of distinct pip values (0 through 6).
pub const PIPS: usize = MAX_PIP as usize + 1;
/// Tiles in a complete double-six set.
pub const SET_SIZE: usize = PIPS * (PIPS + 1) / 2;
/// Seats at the table. Seat 0 is always the assisted player.
pub const N: usize = 4;
/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 7;

// ============================================================================
// SCORING DEFAULTS
// Linear heuristic over four terms. Only ratios between weights matter.
// ============================================================================
/// Weight on the hand-frequency term (keeping numbers we hold many of).
pub const WEIGHT_FREQUENCY: Score = 1.0;
/// Bias for doubles while the hand is still long (shed them early).
pub const WEIGHT_DOUBLE_EARLY: Score = 1.0;
/// Bias for doubles once the hand is short (hold them for blocking).
pub const WEIGHT_DOUBLE_LATE: Score = -1.0;
/// Hand length at or below which doubles are held rather than shed.
pub const DOUBLE_HORIZON: usize = 4;
/// Weight on the blocking term (numbers opponents have rarely shown).
pub const WEIGHT_BLOCKING: Score = 0.5;
/// Play count at which a number no longer earns a blocking bonus.
pub const BLOCKING_CEILING: usize = 4;
/// Flat penalty for a play that leaves the rest of the hand unplayable.
pub const WEIGHT_STRANDED: Score = 3.0;

// ============================================================================
// ENDGAME ADVICE
// ============================================================================
/// Hand length at or below which the endgame begins.
pub const ENDGAME_HAND: usize = 5;
/// Per-number hand frequency that marks a number as strong.
pub const STRONG_FREQUENCY: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
