use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `mine` — toggle the suspected-mine mark.
    Mark,
    /// `free` — claim the cell as safe and reveal it.
    Free,
}

/// One player turn as typed: `x y command`. `x` is the column and `y` the
/// row; the board API takes row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub x: usize,
    pub y: usize,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTurnError {
    WrongTokenCount,
    BadCoordinate(String),
    UnknownCommand(String),
}

impl fmt::Display for ParseTurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount => {
                write!(f, "Enter two coordinates and a command, e.g. '3 4 mine'.")
            }
            Self::BadCoordinate(token) => {
                write!(f, "'{token}' is not a valid coordinate.")
            }
            Self::UnknownCommand(command) => {
                write!(
                    f,
                    "Invalid command '{command}'. Command should be 'mine' or 'free'."
                )
            }
        }
    }
}

impl std::error::Error for ParseTurnError {}

impl FromStr for Turn {
    type Err = ParseTurnError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [x, y, command] = tokens[..] else {
            return Err(ParseTurnError::WrongTokenCount);
        };

        let x = x
            .parse()
            .map_err(|_| ParseTurnError::BadCoordinate(x.to_string()))?;
        let y = y
            .parse()
            .map_err(|_| ParseTurnError::BadCoordinate(y.to_string()))?;
        let action = match command {
            "mine" => Action::Mark,
            "free" => Action::Free,
            other => return Err(ParseTurnError::UnknownCommand(other.to_string())),
        };

        Ok(Turn { x, y, action })
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ParseTurnError, Turn};

    #[test]
    fn parses_both_commands() {
        assert_eq!(
            "3 4 mine".parse::<Turn>(),
            Ok(Turn {
                x: 3,
                y: 4,
                action: Action::Mark
            })
        );
        assert_eq!(
            " 9  2  free ".parse::<Turn>(),
            Ok(Turn {
                x: 9,
                y: 2,
                action: Action::Free
            })
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Turn>(), Err(ParseTurnError::WrongTokenCount));
        assert_eq!(
            "3 4".parse::<Turn>(),
            Err(ParseTurnError::WrongTokenCount)
        );
        assert_eq!(
            "a 4 free".parse::<Turn>(),
            Err(ParseTurnError::BadCoordinate("a".to_string()))
        );
        assert_eq!(
            "3 -4 free".parse::<Turn>(),
            Err(ParseTurnError::BadCoordinate("-4".to_string()))
        );
        assert_eq!(
            "3 4 dig".parse::<Turn>(),
            Err(ParseTurnError::UnknownCommand("dig".to_string()))
        );
    }
}
