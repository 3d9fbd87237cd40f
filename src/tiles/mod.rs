pub mod boneyard;
pub use boneyard::*;

pub mod ends;
pub use ends::*;

pub mod hand;
pub use hand::*;

pub mod side;
pub use side::*;

pub mod tally;
pub use tally::*;

pub mod tile;
pub use tile::*;
