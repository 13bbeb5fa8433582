//! Parsing of typed commands and moves.

use bridgeit_engine::Node;
use std::str::FromStr;
use tracing::{instrument, trace};

/// Help shown for the `help` command.
pub const HELP_TEXT: &str = "
Bridge It Game Help
==================

OBJECTIVE:
- Player 1 (Red ═══): Connect the top and bottom edges of the board
- Player 2 (Blue ───): Connect the left and right edges of the board

HOW TO PLAY:
1. Players take turns placing bridges between adjacent nodes
2. Enter your move by specifying two adjacent nodes
3. First player to create a continuous path wins!

MOVE INPUT FORMATS:
- \"0,0 0,1\"      - Connect node (0,0) to node (0,1)
- \"0 0 to 0 1\"   - Same as above, different format
- \"2,1-2,2\"      - Connect node (2,1) to node (2,2)
- \"(2,1)-(2,2)\"  - Same, with parentheses

COMMANDS:
- \"help\" or \"h\"     - Show this help
- \"quit\" or \"q\"     - Quit the game
- \"undo\" or \"u\"     - Undo last move
- \"reset\" or \"r\"    - Reset the game
- \"info\" or \"i\"     - Show game information

BOARD SYMBOLS:
- ●           - Node (intersection point)
- ═══ and ║   - Player 1's bridge (Red)
- ─── and |   - Player 2's bridge (Blue)
- (empty)     - Available bridge position

COORDINATES:
- Nodes are numbered starting from (0,0) at top-left
- Row numbers increase going down
- Column numbers increase going right
";

/// Command words, matched without regard to case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "help", serialize = "h")]
    Help,
    #[strum(serialize = "quit", serialize = "q", serialize = "exit")]
    Quit,
    #[strum(serialize = "info", serialize = "i")]
    Info,
    #[strum(serialize = "undo", serialize = "u")]
    Undo,
    #[strum(serialize = "reset", serialize = "r")]
    Reset,
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the help text.
    Help,
    /// Leave the game.
    Quit,
    /// Show the game summary.
    Info,
    /// Take back the last move.
    Undo,
    /// Start over on an empty board.
    Reset,
    /// Build a bridge between two nodes, as typed.
    Move(Node, Node),
}

impl From<Keyword> for Command {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
            Keyword::Info => Command::Info,
            Keyword::Undo => Command::Undo,
            Keyword::Reset => Command::Reset,
        }
    }
}

/// Input that is neither a command nor a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// The text matched no command or move format.
    #[display("Unrecognised input: {}", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

impl Command {
    /// Parses a command word or a move.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        if let Ok(keyword) = Keyword::from_str(trimmed) {
            return Ok(keyword.into());
        }
        match parse_move(trimmed) {
            Some((a, b)) => Ok(Command::Move(a, b)),
            None => {
                trace!("Input matched no format");
                Err(InputError::Unrecognized(trimmed.to_string()))
            }
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

/// Parses a move such as `0,0 0,1`, `0,0-0,1`, `(0,0)-(0,1)`, `0 0 0 1`
/// or `0 0 to 0 1`.
///
/// Adjacency and bounds are not checked here.
pub fn parse_move(input: &str) -> Option<(Node, Node)> {
    let lowered = input.trim().to_lowercase();

    // A dash is a separator only after a number or a closing parenthesis.
    let mut previous = None;
    for c in lowered.chars().filter(|c| !c.is_whitespace()) {
        if c == '-' && !matches!(previous, Some(p) if p == ')' || char::is_ascii_digit(&p)) {
            return None;
        }
        previous = Some(c);
    }

    let spaced: String = lowered
        .chars()
        .map(|c| if matches!(c, '(' | ')' | ',' | '-') { ' ' } else { c })
        .collect();
    let mut tokens: Vec<&str> = spaced.split_whitespace().collect();
    if tokens.len() == 5 && tokens[2] == "to" {
        tokens.remove(2);
    }
    if tokens.len() != 4 || !tokens.iter().all(|t| t.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let numbers: Vec<usize> = tokens
        .iter()
        .map(|t| t.parse())
        .collect::<Result<_, _>>()
        .ok()?;
    Some((
        Node::new(numbers[0], numbers[1]),
        Node::new(numbers[2], numbers[3]),
    ))
}

/// True if the nodes differ by exactly one row or one column.
pub fn are_adjacent(a: Node, b: Node) -> bool {
    a.is_adjacent(b)
}

/// Formats a move as `(r,c) → (r,c)`.
pub fn format_move(a: Node, b: Node) -> String {
    format!("{} → {}", a, b)
}

/// Describes a move in words, e.g. `Horizontal bridge from (0,0) going right`.
pub fn describe_move(a: Node, b: Node) -> String {
    if a.row == b.row {
        let direction = if b.col > a.col { "right" } else { "left" };
        format!("Horizontal bridge from {} going {}", a, direction)
    } else {
        let direction = if b.row > a.row { "down" } else { "up" };
        format!("Vertical bridge from {} going {}", a, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(row: usize, col: usize) -> Node {
        Node::new(row, col)
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("H"), Ok(Command::Help));
        assert_eq!(Command::parse("  Quit "), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("i"), Ok(Command::Info));
        assert_eq!(Command::parse("UNDO"), Ok(Command::Undo));
        assert_eq!(Command::parse("r"), Ok(Command::Reset));
    }

    #[test]
    fn test_move_formats() {
        let expected = Ok(Command::Move(n(0, 0), n(0, 1)));
        for text in ["0,0 0,1", "0,0-0,1", "(0,0)-(0,1)", "0 0 0 1", "0 0 to 0 1", "0, 0 - 0, 1"] {
            assert_eq!(Command::parse(text), expected, "{text}");
        }
        assert_eq!(
            "12,3 11,3".parse::<Command>(),
            Ok(Command::Move(n(12, 3), n(11, 3)))
        );
    }

    #[test]
    fn test_rejected_input() {
        assert_eq!(Command::parse("   "), Err(InputError::Empty));
        for text in ["hello", "0,0", "0 0 0", "0 0 0 1 2", "-1,0 0,0", "0,0 0,+1", "a,b c,d"] {
            assert!(
                matches!(Command::parse(text), Err(InputError::Unrecognized(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_move_helpers() {
        assert!(are_adjacent(n(1, 1), n(0, 1)));
        assert!(!are_adjacent(n(1, 1), n(0, 0)));
        assert_eq!(format_move(n(2, 1), n(2, 2)), "(2,1) → (2,2)");
        assert_eq!(
            describe_move(n(0, 0), n(0, 1)),
            "Horizontal bridge from (0,0) going right"
        );
        assert_eq!(
            describe_move(n(2, 1), n(1, 1)),
            "Vertical bridge from (2,1) going up"
        );
    }
}
