//! Line-based game loop over any reader and writer.

use crate::config::{validate_board_size, GameSettings, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::input::{are_adjacent, format_move, Command, HELP_TEXT};
use anyhow::{Context, Result};
use bridgeit_engine::{Game, GameError, Node, Phase};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a single match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GameEnd {
    /// Somebody connected their sides.
    Won,
    /// A player typed `quit`.
    Quit,
    /// The input stream closed.
    EndOfInput,
}

/// Interactive session reading commands from `R` and writing to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        let answer = self.prompt(text)?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Asks for board size and player names; blank answers keep the
    /// current values.
    #[instrument(skip(self, settings))]
    pub fn setup(&mut self, settings: GameSettings) -> Result<GameSettings> {
        writeln!(self.output, "🌉 Welcome to Bridge It Game! 🌉")?;
        writeln!(self.output, "{}", "=".repeat(40))?;

        let (mut rows, mut cols) = (*settings.rows(), *settings.cols());
        loop {
            let text = format!("Enter board size (rows cols) [default: {} {}]: ", rows, cols);
            let Some(answer) = self.prompt(&text)? else {
                break;
            };
            if answer.is_empty() {
                break;
            }
            let parts: Vec<&str> = answer.split_whitespace().collect();
            if parts.len() != 2 {
                writeln!(self.output, "Please enter two numbers for rows and columns.")?;
                continue;
            }
            match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                (Ok(r), Ok(c)) if validate_board_size(r, c) => {
                    rows = r;
                    cols = c;
                    break;
                }
                (Ok(_), Ok(_)) => writeln!(
                    self.output,
                    "Board size must be between {min}x{min} and {max}x{max}.",
                    min = MIN_BOARD_SIZE,
                    max = MAX_BOARD_SIZE
                )?,
                _ => writeln!(self.output, "Please enter valid numbers.")?,
            }
        }

        let text = format!(
            "Enter Player 1 name [{} player - connects top↔bottom]: ",
            settings.player1().color()
        );
        let name1 = self.prompt(&text)?.filter(|s| !s.is_empty());
        let text = format!(
            "Enter Player 2 name [{} player - connects left↔right]: ",
            settings.player2().color()
        );
        let name2 = self.prompt(&text)?.filter(|s| !s.is_empty());

        let name1 = name1.unwrap_or_else(|| settings.player1().name().clone());
        let name2 = name2.unwrap_or_else(|| settings.player2().name().clone());
        debug!(rows, cols, %name1, %name2, "Interactive setup complete");
        Ok(settings.with_board(rows, cols).with_names(name1, name2))
    }

    /// Plays matches with the given settings until the players stop.
    #[instrument(skip(self, settings))]
    pub fn run(&mut self, settings: &GameSettings) -> Result<()> {
        loop {
            let mut game = settings.new_game().context("Failed to set up game")?;
            self.banner(settings)?;

            let end = self.play(&mut game)?;
            info!(%end, moves = game.history().len(), "Match ended");
            if end != GameEnd::Won {
                return Ok(());
            }

            writeln!(self.output, "\n{}", "=".repeat(50))?;
            if !self.confirm("Would you like to play again? (y/N): ")? {
                return Ok(());
            }
        }
    }

    fn banner(&mut self, settings: &GameSettings) -> io::Result<()> {
        writeln!(
            self.output,
            "\n🎮 Starting {}x{} Bridge It Game!",
            settings.rows(),
            settings.cols()
        )?;
        writeln!(
            self.output,
            "Players: {} ({} ═══) vs {} ({} ───)",
            settings.player1().name(),
            settings.player1().color(),
            settings.player2().name(),
            settings.player2().color()
        )?;
        writeln!(self.output, "\nType 'help' for commands and rules.")?;
        writeln!(self.output, "{}", "=".repeat(50))
    }

    /// Runs one match until it is won, quit, or input runs out.
    #[instrument(skip(self, game))]
    pub fn play(&mut self, game: &mut Game) -> Result<GameEnd> {
        while game.phase() == Phase::Playing {
            writeln!(self.output, "\n{}", game.display_board())?;
            let Some(current) = game.current_player().cloned() else {
                warn!("No current player while playing");
                break;
            };
            writeln!(self.output, "\n{}'s turn ({})", current.name(), current.color())?;

            let Some(line) = self.prompt("Enter your move (or command): ")? else {
                writeln!(self.output)?;
                return Ok(GameEnd::EndOfInput);
            };
            if line.is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "❌ Invalid move format. Type 'help' for examples.")?;
                }
                Ok(Command::Quit) => {
                    writeln!(self.output, "Thanks for playing Bridge It! 👋")?;
                    return Ok(GameEnd::Quit);
                }
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Info) => {
                    writeln!(self.output, "\n📊 Game Information:\n{}\n", game.info())?;
                }
                Ok(Command::Undo) => match game.undo_last_move() {
                    Ok(_) => writeln!(self.output, "✅ Last move undone.")?,
                    Err(e) => writeln!(self.output, "❌ {}.", e)?,
                },
                Ok(Command::Reset) => {
                    if self.confirm("Are you sure you want to reset the game? (y/N): ")? {
                        game.reset_game();
                        writeln!(self.output, "🔄 Game reset!")?;
                    }
                }
                Ok(Command::Move(a, b)) => {
                    if self.attempt_move(game, a, b, current.name())? {
                        return Ok(GameEnd::Won);
                    }
                }
            }
        }
        Ok(if game.phase() == Phase::Finished {
            GameEnd::Won
        } else {
            GameEnd::Quit
        })
    }

    /// Checks and plays a move, reporting the result. Returns true on a win.
    fn attempt_move(&mut self, game: &mut Game, a: Node, b: Node, mover: &str) -> Result<bool> {
        if !are_adjacent(a, b) {
            writeln!(self.output, "❌ Nodes must be adjacent (horizontally or vertically).")?;
            return Ok(false);
        }
        if !game.grid().contains(a) || !game.grid().contains(b) {
            writeln!(
                self.output,
                "❌ Nodes must be within board bounds (0-{}, 0-{}).",
                game.rows().saturating_sub(1),
                game.cols().saturating_sub(1)
            )?;
            return Ok(false);
        }

        match game.make_move(a, b) {
            Ok(outcome) => {
                writeln!(self.output, "✅ {} placed bridge: {}", mover, format_move(a, b))?;
                if !outcome.is_win() {
                    return Ok(false);
                }
                writeln!(self.output, "\n{}", game.display_board())?;
                writeln!(self.output, "\n🎉 GAME OVER! 🎉")?;
                if let Some(winner) = game.winner() {
                    writeln!(self.output, "Winner: {} ({})", winner.name(), winner.color())?;
                }
                writeln!(self.output, "Total moves: {}", game.history().len())?;
                Ok(true)
            }
            Err(GameError::EdgeOccupied(_)) => {
                writeln!(self.output, "❌ Invalid move. That position is already occupied.")?;
                Ok(false)
            }
            Err(e) => {
                writeln!(self.output, "❌ Invalid move: {}.", e)?;
                Ok(false)
            }
        }
    }
}
