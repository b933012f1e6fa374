//! Line-oriented text protocol for driving a [`Game`].
//!
//! Framing follows GTP: each command may carry a numeric id, and every
//! response is `=[id] message` on success or `?[id] message` on failure,
//! followed by a blank line. Coordinates are plain `x y` integers (column,
//! row, zero-based), not GTP vertices.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - start a new empty board of that size
//! - `clear_board` - empty the current board
//! - `play <color> <x> <y>` - place a stone, answering `ok` or the rejection
//! - `liberties <x> <y>` - liberties of the chain at a point
//! - `score`, `area_score` - whole-board tallies as `color count` pairs
//! - `showboard` - the rendered board

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::game::Game;
use crate::score::Tally;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "area_score",
    "boardsize",
    "clear_board",
    "known_command",
    "liberties",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
];

/// Protocol engine state.
pub struct TextEngine {
    game: Game,
}

impl TextEngine {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match Game::new(size) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(e) => (false, format!("unacceptable size: {e}")),
                }
            }

            "clear_board" => {
                self.game.clear();
                (true, String::new())
            }

            "play" => {
                let [color, x, y] = args else {
                    return (false, "expected: play <color> <x> <y>".to_string());
                };
                let (Some(x), Some(y)) = (parse_coord(x), parse_coord(y)) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.game.play(color, x, y) {
                    Ok(()) => (true, "ok".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "liberties" => {
                let [x, y] = args else {
                    return (false, "expected: liberties <x> <y>".to_string());
                };
                let (Some(x), Some(y)) = (parse_coord(x), parse_coord(y)) else {
                    return (false, "invalid coordinate".to_string());
                };
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    return (false, "proposed point not on board".to_string());
                };
                match self.game.liberties(x, y) {
                    Some(n) => (true, n.to_string()),
                    None => (false, "proposed point not on board".to_string()),
                }
            }

            "score" => (true, format_tally(&self.game.score())),

            "area_score" => (true, format_tally(&self.game.area_score())),

            "showboard" => (true, format!("\n{}", self.game.board())),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Parse a signed integer coordinate. Integers too large for `isize` saturate,
/// so they land off the board rather than failing to parse.
fn parse_coord(s: &str) -> Option<isize> {
    match s.parse::<isize>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(isize::MAX),
            IntErrorKind::NegOverflow => Some(isize::MIN),
            _ => None,
        },
    }
}

/// `empty 4 black 3 white 2`, in color order.
fn format_tally(tally: &Tally) -> String {
    tally
        .iter()
        .map(|(color, n)| format!("{color} {n}"))
        .collect::<Vec<_>>()
        .join(" ")
}
