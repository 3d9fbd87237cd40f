use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Add tiles to your hand, e.g. add 3-4 6,6", alias = "a")]
    Add {
        #[arg(required = true)]
        tiles: Vec<String>,
    },
    #[command(about = "Take a tile out of your hand without playing it", alias = "rm")]
    Remove {
        #[arg(required = true)]
        tile: String,
    },
    #[command(about = "Empty your hand, keeping the board", alias = "c")]
    Clear,
    #[command(about = "Set the open board ends, e.g. ends 6,4", alias = "e")]
    Ends {
        #[arg(required = true)]
        ends: String,
    },
    #[command(about = "Record a tile played by a seat (0 is you)", alias = "p")]
    Play {
        #[arg(required = true)]
        tile: String,
        #[arg(short, long, default_value = "0")]
        player: String,
        #[arg(short, long)]
        side: Option<String>,
    },
    #[command(about = "Suggest the best tile, optionally setting the ends first", alias = "s")]
    Suggest { ends: Option<String> },
    #[command(about = "Show strong and weak numbers, doubles, and points in hand", alias = "an")]
    Analyze,
    #[command(about = "Show endgame strategy and unplayed numbers", alias = "eg")]
    Endgame,
    #[command(about = "Show every play recorded so far", alias = "hist")]
    History,
    #[command(about = "Start a new game", alias = "new")]
    Reset,
    #[command(about = "Show the active scoring weights as JSON", alias = "w")]
    Weights,
}

impl Command {
    /// Parses one REPL line as if it were a command line.
    pub fn read(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert!(matches!(Command::read("a 3-4 6,6"), Ok(Command::Add { tiles }) if tiles.len() == 2));
        assert!(matches!(Command::read("s"), Ok(Command::Suggest { ends: None })));
        assert!(matches!(Command::read("new"), Ok(Command::Reset)));
        assert!(matches!(Command::read("w"), Ok(Command::Weights)));
    }

    #[test]
    fn parses_play_flags() {
        match Command::read("play 6-6 -p 2 --side right").unwrap() {
            Command::Play { tile, player, side } => {
                assert_eq!(tile, "6-6");
                assert_eq!(player, "2");
                assert_eq!(side.as_deref(), Some("right"));
            }
            other => panic!("unexpected {:?}", other),
        }
        match Command::read("play 1-2").unwrap() {
            Command::Play { player, side, .. } => {
                assert_eq!(player, "0");
                assert!(side.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn help_is_not_a_failure() {
        let help = Command::read("help").unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let flag = Command::read("--help").unwrap_err();
        assert_eq!(flag.kind(), clap::error::ErrorKind::DisplayHelp);
        let bogus = Command::read("shuffle").unwrap_err();
        assert_ne!(bogus.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_unknown() {
        assert!(Command::read("shuffle").is_err());
        assert!(Command::read("add").is_err());
    }
}
