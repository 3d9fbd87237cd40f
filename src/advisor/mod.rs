pub mod advice;
pub use advice::*;

#[allow(clippy::module_inception)]
pub mod advisor;
pub use advisor::*;

pub mod analysis;
pub use analysis::*;
