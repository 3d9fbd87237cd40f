pub mod breakdown;
pub use breakdown::*;

pub mod scorer;
pub use scorer::*;

pub mod suggestion;
pub use suggestion::*;

pub mod weights;
pub use weights::*;
