use super::command::Command;
use crate::advisor::Advice;
use crate::advisor::Advisor;
use crate::input;
use crate::scoring::Scorer;
use crate::scoring::Weights;
use crate::tiles::Tile;
use crate::tracker::Tracker;
use colored::Colorize;

/// One interactive session: the tracker plus the scorer it is judged by.
///
/// Every command renders to plain text; errors come back as `Err` and leave
/// the tracker untouched.
#[derive(Debug, Default)]
pub struct Session {
    tracker: Tracker,
    scorer: Scorer,
}

impl From<Weights> for Session {
    fn from(weights: Weights) -> Self {
        Self {
            tracker: Tracker::new(),
            scorer: Scorer::from(weights),
        }
    }
}

impl Session {
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("launching assistant");
        println!("{}", "domino assistant: type help for commands, quit to leave".bold());
        loop {
            let line = dialoguer::Input::<String>::new()
                .with_prompt("dominoes")
                .allow_empty(true)
                .report(false)
                .interact_text()?;
            match line.trim() {
                "quit" => break,
                "exit" => break,
                "" => continue,
                line => match self.line(line) {
                    Ok(text) => println!("{}", text),
                    Err(e) if Self::is_help(&e) => println!("{}", e),
                    Err(e) => {
                        log::warn!("rejected {:?}: {}", line, e);
                        eprintln!("{}", e.to_string().red());
                    }
                },
            }
        }
        log::info!("leaving assistant");
        Ok(())
    }

    /// Parses and handles a single REPL line.
    pub fn line(&mut self, line: &str) -> anyhow::Result<String> {
        let command = Command::read(line)?;
        self.handle(command)
    }

    pub fn handle(&mut self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Add { tiles } => {
                let tiles = input::tiles(&tiles.join(" "))?;
                for tile in tiles.iter() {
                    self.tracker.add(*tile);
                }
                Ok(format!("added {}\nhand: {}", Self::listing(&tiles), self.tracker.hand()))
            }
            Command::Remove { tile } => {
                let tile = input::tile(&tile)?;
                self.tracker.remove(tile)?;
                Ok(format!("removed {}\nhand: {}", tile, self.tracker.hand()))
            }
            Command::Clear => {
                self.tracker.clear_hand();
                Ok(String::from("hand cleared"))
            }
            Command::Ends { ends } => {
                self.tracker.set_board(input::ends(&ends)?);
                Ok(format!("board at {}", self.tracker.ends()))
            }
            Command::Play { tile, player, side } => {
                let tile = input::tile(&tile)?;
                let player = input::player(&player)?;
                let side = match side {
                    Some(side) => self.tracker.record_on(player, tile, input::side(&side)?)?,
                    None => self.tracker.record(player, tile)?,
                };
                Ok(format!(
                    "P{} played {} on the {}\nboard at {}",
                    player,
                    tile,
                    side,
                    self.tracker.ends()
                ))
            }
            Command::Suggest { ends } => {
                if let Some(ends) = ends {
                    self.tracker.set_board(input::ends(&ends)?);
                }
                let best = self.scorer.suggest(&self.tracker)?;
                let others = self
                    .scorer
                    .rank(&self.tracker)
                    .into_iter()
                    .skip(1)
                    .map(|s| format!("\n  also {}", s))
                    .collect::<String>();
                Ok(format!(
                    "suggested play for {}:\n{}{}",
                    self.tracker.ends(),
                    best.to_string().green().bold(),
                    others
                ))
            }
            Command::Analyze => Ok(format!(
                "hand: {}\n{}",
                self.tracker.hand(),
                Advisor::analyze(self.tracker.hand())
            )),
            Command::Endgame => Ok(format!(
                "{}\n{}",
                Advice::from(&self.tracker),
                self.odds()
            )),
            Command::History => Ok(format!(
                "{}board at {}",
                self.tracker.history(),
                self.tracker.ends()
            )),
            Command::Reset => {
                self.tracker.reset();
                Ok(String::from("new game"))
            }
            Command::Weights => self.scorer.weights().json(),
        }
    }

    /// Help and version requests come back from clap as errors.
    fn is_help(error: &anyhow::Error) -> bool {
        use clap::error::ErrorKind;
        error
            .downcast_ref::<clap::Error>()
            .map(clap::Error::kind)
            .is_some_and(|kind| matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion))
    }

    /// Per-number chance that an unseen tile carries it.
    fn odds(&self) -> String {
        let odds = (0..=crate::MAX_PIP)
            .map(|pip| format!("{}:{:.0}%", pip, self.tracker.odds(pip) * 100.0))
            .collect::<Vec<String>>();
        format!("odds an unseen tile carries each number: {}", odds.join(" "))
    }

    fn listing(tiles: &[Tile]) -> String {
        tiles
            .iter()
            .map(Tile::to_string)
            .collect::<Vec<String>>()
            .join(" ")
    }
}
