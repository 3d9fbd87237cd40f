pub mod args;
pub use args::*;

pub mod command;
pub use command::*;

pub mod session;
pub use session::*;
