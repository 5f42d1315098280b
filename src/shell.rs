//! Line-oriented command interface for the terminal host.
//!
//! One line of input is one UI event. Player numbers are one-based on the
//! command line and converted to seat indices here.

use crate::render::Renderer;
use crate::storage::Storage;
use crate::store::{GameStore, MutationOutcome};
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  add <player> <points>   add points for player 1 or 2
  undo <player>           undo that player's last increment
  rename <player> <name>  rename a player (blank resets to 'Player N')
  history <player>        show a player's point history
  close                   close the history view
  reset                   zero both scores
  new                     forget the saved game and start over
  show                    redraw the table
  help                    this text
  quit                    leave";

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add { player: usize, points: u32 },
    Undo { player: usize },
    Rename { player: usize, name: String },
    History { player: usize },
    Close,
    Reset,
    NewGame,
    Show,
    Help,
    Quit,
}

/// Why an input line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a player number (1 or 2)")]
    InvalidPlayer(String),

    #[error("'{0}' is not a number of points")]
    InvalidPoints(String),
}

fn player_arg(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        expected: "a player number",
    })?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidPlayer(arg.to_string())),
    }
}

impl Command {
    /// Parse one input line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use muggins::shell::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("add 2 35").unwrap(),
    ///     Command::Add { player: 1, points: 35 }
    /// );
    /// assert!(Command::parse("add 0 35").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" | "+" => {
                let player = player_arg("add", args.next())?;
                let points = args.next().ok_or(CommandError::MissingArgument {
                    command: "add",
                    expected: "a number of points",
                })?;
                let points = points
                    .trim_start_matches('+')
                    .parse::<u32>()
                    .map_err(|_| CommandError::InvalidPoints(points.to_string()))?;
                Ok(Self::Add { player, points })
            }
            "undo" => Ok(Self::Undo {
                player: player_arg("undo", args.next())?,
            }),
            "rename" | "name" => {
                let player = player_arg("rename", args.next())?;
                // Everything after the player number, inner spacing kept.
                let name = rest
                    .split_once(char::is_whitespace)
                    .map(|(_, name)| name.to_string())
                    .unwrap_or_default();
                Ok(Self::Rename { player, name })
            }
            "history" | "hist" => Ok(Self::History {
                player: player_arg("history", args.next())?,
            }),
            "close" => Ok(Self::Close),
            "reset" => Ok(Self::Reset),
            "new" => Ok(Self::NewGame),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Apply a command to the store.
///
/// `Show` redraws through the store's renderer. `Help` and `Quit` are
/// handled by the caller and leave the store untouched here.
pub fn dispatch<S: Storage, R: Renderer>(
    store: &mut GameStore<S, R>,
    command: &Command,
) -> MutationOutcome {
    match command {
        Command::Add { player, points } => store.add_score(*player, *points),
        Command::Undo { player } => store.undo_score(*player),
        Command::Rename { player, name } => store.rename_player(*player, name),
        Command::History { player } => store.show_history(*player),
        Command::Close => {
            store.close_history();
            MutationOutcome::Applied
        }
        Command::Reset => {
            store.reset_scores();
            MutationOutcome::Applied
        }
        Command::NewGame => {
            store.new_game();
            MutationOutcome::Applied
        }
        Command::Show => {
            store.redraw();
            MutationOutcome::Applied
        }
        Command::Help | Command::Quit => MutationOutcome::Applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::render::GameView;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn parses_add_with_optional_plus() {
        assert_eq!(
            Command::parse("add 1 +10").unwrap(),
            Command::Add {
                player: 0,
                points: 10
            }
        );
        assert_eq!(
            Command::parse("  ADD 2 5 ").unwrap(),
            Command::Add {
                player: 1,
                points: 5
            }
        );
    }

    #[test]
    fn rename_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("rename 1 Ada  Lovelace").unwrap(),
            Command::Rename {
                player: 0,
                name: "Ada  Lovelace".to_string()
            }
        );
        assert_eq!(
            Command::parse("rename 2").unwrap(),
            Command::Rename {
                player: 1,
                name: String::new()
            }
        );
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(Command::parse("close").unwrap(), Command::Close);
        assert_eq!(Command::parse("reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("new").unwrap(), Command::NewGame);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(Command::parse("   ").unwrap_err(), CommandError::Empty);
        assert_eq!(
            Command::parse("fold").unwrap_err(),
            CommandError::Unknown("fold".to_string())
        );
        assert_eq!(
            Command::parse("undo").unwrap_err(),
            CommandError::MissingArgument {
                command: "undo",
                expected: "a player number"
            }
        );
        assert_eq!(
            Command::parse("add 1 lots").unwrap_err(),
            CommandError::InvalidPoints("lots".to_string())
        );
        assert_eq!(
            Command::parse("history x").unwrap_err(),
            CommandError::InvalidPlayer("x".to_string())
        );
    }

    #[test]
    fn dispatch_routes_to_store() {
        let mut store = GameStore::open(
            GameConfig::default(),
            MemoryStorage::new(),
            |_: &GameView| {},
        );

        dispatch(&mut store, &Command::parse("add 2 25").unwrap());
        dispatch(&mut store, &Command::parse("rename 2 Bo").unwrap());
        dispatch(&mut store, &Command::parse("history 2").unwrap());

        let bo = store.state().player(1).unwrap();
        assert_eq!(bo.score(), 25);
        assert_eq!(bo.name(), "Bo");
        assert!(store.history_view().is_open());

        dispatch(&mut store, &Command::Reset);
        assert_eq!(store.state().player(1).unwrap().score(), 0);
        assert!(!store.history_view().is_open());
    }

    #[test]
    fn show_redraws_through_renderer() {
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        let mut store = GameStore::open(
            GameConfig::default(),
            MemoryStorage::new(),
            move |_: &GameView| counter.set(counter.get() + 1),
        );
        assert_eq!(renders.get(), 1);

        dispatch(&mut store, &Command::parse("show").unwrap());

        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn dispatch_reports_rejections() {
        let mut store = GameStore::open(
            GameConfig::default(),
            MemoryStorage::new(),
            |_: &GameView| {},
        );

        let outcome = dispatch(&mut store, &Command::Undo { player: 0 });

        assert!(!outcome.is_applied());
    }
}
