use std::fmt;

/// A command typed at the solitaire prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw the next three cards.
    Draw,
    /// Turn the drawn pile back into the deck.
    Reset,
    /// Move a card between two places, given as their raw tokens. The engine
    /// decides whether the tokens name real places.
    Move { from: String, to: String },
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `from` without a `to` part, or either place missing.
    IncompleteMove,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteMove => {
                write!(f, "Moves need two places (e.g., 'from drawn to 3')")
            }
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a Command.
///
/// # Arguments
///
/// * `input` - The raw command string from user input
///
/// # Returns
///
/// * `Ok(Command)` - Successfully parsed command
/// * `Err(ParseError)` - Parse error with descriptive message
///
/// # Examples
///
/// ```
/// use klondike_cli::commands::{Command, parse_command};
///
/// // Single-word commands
/// assert_eq!(parse_command("draw"), Ok(Command::Draw));
/// assert_eq!(parse_command("RESET"), Ok(Command::Reset));
///
/// // Moves
/// assert_eq!(
///     parse_command("from drawn to 3"),
///     Ok(Command::Move { from: "drawn".to_string(), to: "3".to_string() })
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let lowered = input.trim().to_lowercase();

    // Try single-word commands first
    match lowered.as_str() {
        "draw" => return Ok(Command::Draw),
        "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = lowered.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"from") => parse_move_command(&parts),
        _ => Err(ParseError::UnrecognizedCommand(input.trim().to_string())),
    }
}

/// Parse a move command: "from PLACE to PLACE"
fn parse_move_command(parts: &[&str]) -> Result<Command, ParseError> {
    match parts {
        ["from", from, "to", to] => Ok(Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        }),
        _ => Err(ParseError::IncompleteMove),
    }
}
