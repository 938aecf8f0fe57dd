//! Interactive session commands
//!
//! One command per line. Field commands take the rest of the line verbatim,
//! so `bio` on its own clears the bio.

use std::str::FromStr;
use thiserror::Error;

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  name <text>    set the name field
  email <text>   set the email field
  bio [text]     set (or clear) the bio field
  submit         add the user
  refresh        reload the user list
  show           print the screen again
  help           show this help
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetName(String),
    SetEmail(String),
    SetBio(String),
    Submit,
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{0}` does not take an argument")]
    UnexpectedArgument(String),
}

impl Command {
    /// Whether the screen should be printed after running this command
    pub fn redraws(&self) -> bool {
        matches!(self, Self::Submit | Self::Refresh | Self::Show)
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };

        let bare = |command: Command| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(InputError::UnexpectedArgument(word.to_string()))
            }
        };

        match word.to_lowercase().as_str() {
            "name" => Ok(Self::SetName(rest.to_string())),
            "email" => Ok(Self::SetEmail(rest.to_string())),
            "bio" => Ok(Self::SetBio(rest.to_string())),
            "submit" | "add" => bare(Self::Submit),
            "refresh" => bare(Self::Refresh),
            "show" | "" => bare(Self::Show),
            "help" | "?" => bare(Self::Help),
            "quit" | "exit" => bare(Self::Quit),
            other => Err(InputError::Unknown(other.to_string())),
        }
    }
}
