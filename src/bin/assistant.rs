//! Interactive Domino Assistant
//!
//! Tracks your hand and the table from the terminal and suggests plays.

use clap::Parser;
use robodomino::cli::Args;
use robodomino::cli::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    robodomino::log(args.level())?;
    let weights = args.weights()?;
    log::info!("scoring with {}", weights);
    Session::from(weights).run()
}
