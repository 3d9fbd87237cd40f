pub mod history;
pub use history::*;

pub mod player;
pub use player::*;

#[allow(clippy::module_inception)]
pub mod tracker;
pub use tracker::*;
