use crate::scoring::Weights;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Track a domino hand and get play suggestions", long_about = None)]
pub struct Args {
    /// JSON file overriding any of the scoring weights
    #[arg(short, long)]
    pub weights: Option<PathBuf>,
    /// Log session activity to the terminal as well as the log file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Info,
            false => log::LevelFilter::Warn,
        }
    }
    pub fn weights(&self) -> anyhow::Result<Weights> {
        match self.weights {
            Some(ref path) => Weights::load(path),
            None => Ok(Weights::default()),
        }
    }
}
