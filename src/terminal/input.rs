//! Parsing of typed commands.

use crate::games::tictactoe::Position;
use derive_more::{Display, Error};

/// Something the human asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given board index (0-8).
    Place(usize),
    /// Start a new game.
    Restart,
    /// Leave the session.
    Quit,
}

/// Input that is neither a cell nor a known command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}: enter 1-9, a position name, 'r' to restart or 'q' to quit", input)]
pub struct InputError {
    /// The offending text.
    pub input: String,
}

/// Parses one line of input.
///
/// Cells are typed as shown on the board (1-9) or by name ("center").
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Ok(Command::Restart),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    Position::from_label_or_number(trimmed)
        .map(|pos| Command::Place(pos.to_index()))
        .ok_or_else(|| InputError {
            input: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command("9\n"), Ok(Command::Place(8)));
        assert_eq!(parse_command("Center"), Ok(Command::Place(4)));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command(" RESTART "), Ok(Command::Restart));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_garbage() {
        let err = parse_command("0").unwrap_err();
        assert_eq!(err.input, "0");
        assert!(parse_command("").is_err());
        assert!(parse_command("sideways").is_err());
    }
}
