//! The read-execute-print loop.
//!
//! A [`Session`] owns one game and talks to the player over any buffered
//! reader and writer, so the same loop drives the terminal and the tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use klondike::{Game, GameError, GameStatus};
use log::{debug, info};

use crate::{
    commands::{Command, parse_command},
    render::render_board,
};

pub const PROMPT: &str = "draw | reset | from <place> to <place> | help | quit";

pub const HELP: &str = "\
Commands:
  draw                     Draw three cards onto the drawn pile
  reset                    Turn the drawn pile back into the deck once it is empty
  from <place> to <place>  Move the top card between places
  help                     Show this message
  quit                     Leave the game

Places:
  1-7                      Tableau columns, left to right
  drawn                    The drawn pile (source only)
  S D C H                  Foundations for spades, diamonds, clubs and hearts
";

/// One interactive game over an input and an output stream.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W, json: bool) -> Self {
        Self {
            game,
            input,
            output,
            json,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the player quits, the input ends or the game is won.
    ///
    /// Parse errors and rule violations are reported to the player and the
    /// loop carries on. Only I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<GameStatus> {
        loop {
            self.print_board()?;
            if self.game.is_finished() {
                writeln!(self.output, "You won!")?;
                return Ok(GameStatus::Won);
            }
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("Input closed");
                return Ok(self.game.status());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    info!("Player quit");
                    return Ok(self.game.status());
                }
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Apply one command to the game and report the outcome.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing {command:?}");
        let result = match command {
            Command::Draw => self.game.draw_three(),
            Command::Reset => self.game.reset_waste_to_deck(),
            Command::Move { from, to } => self.game.move_by_tokens(&from, &to),
            Command::Help => {
                write!(self.output, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        match result {
            Ok(()) => {}
            // The cards that were left still got drawn.
            Err(GameError::DeckExhaustedDuringDraw) => {
                writeln!(self.output, "{}", GameError::DeckExhaustedDuringDraw)?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        let view = self.game.view();
        if self.json {
            let json = serde_json::to_string(&view).context("Failed to encode board")?;
            writeln!(self.output, "{json}")?;
        } else {
            write!(self.output, "\n{}", render_board(&view))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike::{Deck, GameSettings};
    use std::io::Cursor;

    fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let game = Game::from_settings(GameSettings::new(Some(5), 5)).unwrap();
        Session::new(game, Cursor::new(script.as_bytes().to_vec()), Vec::new(), false)
    }

    fn printed<R: BufRead>(session: &Session<R, Vec<u8>>) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    #[test]
    fn test_quit_stops_immediately() {
        let mut s = session("quit\ndraw\n");
        assert_eq!(s.run().unwrap(), GameStatus::InProgress);
        assert_eq!(s.game().deck().len(), 24);
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut s = session("draw\n");
        s.run().unwrap();
        assert_eq!(s.game().waste().len(), 3);
        assert_eq!(printed(&s).matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut s = session("shuffle\n");
        s.run().unwrap();
        assert!(printed(&s).contains("Unrecognized command 'shuffle'"));
    }

    #[test]
    fn test_rule_violation_is_reported() {
        let mut s = session("from drawn to 1\n");
        s.run().unwrap();
        let message = GameError::EmptyWaste.to_string();
        assert!(printed(&s).contains(&format!("Error: {message}")));
    }

    #[test]
    fn test_help_lists_places() {
        let mut s = session("help\n");
        s.run().unwrap();
        assert!(printed(&s).contains("S D C H"));
    }

    #[test]
    fn test_json_board() {
        let game = Game::from_deck(Deck::default()).unwrap();
        let mut s = Session::new(game, Cursor::new(Vec::new()), Vec::new(), true);
        s.run().unwrap();
        let out = printed(&s);
        let first = out.lines().next().unwrap();
        let view: klondike::GameView = serde_json::from_str(first).unwrap();
        assert_eq!(view, s.game().view());
    }
}
