//! Interactive line-based game loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use fox_geese_core::{ClickOutcome, GameState};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::display::{render_board, side_name};
use crate::notation::{format_cell, format_move};

const HELP: &str = "\
commands:
  select R C   pick up the piece at row R, column C
  move R C     move the selected piece to row R, column C
  R C          click a cell (select, move or deselect)
  moves        list every legal move for the side to move
  show         redraw the board
  json         print the game state as JSON
  reset        start a new game
  help         show this text
  quit         leave";

/// One line of player input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Select(u8, u8),
    Move(u8, u8),
    Click(u8, u8),
    Moves,
    Show,
    Json,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?} (try \"help\")")]
    Unknown(String),

    #[error("expected two coordinates, got {0:?}")]
    BadCoords(String),
}

fn coords<'a>(args: impl Iterator<Item = &'a str>) -> Result<(u8, u8), CommandError> {
    let rest: Vec<&str> = args.collect();
    let parse = |s: &str| s.parse::<u8>().ok();
    match rest.as_slice() {
        [r, c] => match (parse(r), parse(c)) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(CommandError::BadCoords(rest.join(" "))),
        },
        _ => Err(CommandError::BadCoords(rest.join(" "))),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(',', " ");
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        let cmd = match head.to_ascii_lowercase().as_str() {
            "select" | "s" => {
                let (r, c) = coords(words)?;
                Command::Select(r, c)
            }
            "move" | "m" => {
                let (r, c) = coords(words)?;
                Command::Move(r, c)
            }
            "moves" => Command::Moves,
            "show" | "board" => Command::Show,
            "json" => Command::Json,
            "reset" | "new" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if head.bytes().all(|b| b.is_ascii_digit()) => {
                let (r, c) = coords(std::iter::once(head).chain(words))?;
                Command::Click(r, c)
            }
            _ => return Err(CommandError::Unknown(head.to_string())),
        };
        Ok(cmd)
    }
}

/// Run the loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    input: R,
    out: &mut W,
    cfg: &DisplayConfig,
) -> io::Result<()> {
    writeln!(out, "{}", render_board(game, cfg))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!(?cmd, "command");

        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => writeln!(out, "{}", render_board(game, cfg))?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&game.snapshot()).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            Command::Reset => {
                game.reset();
                writeln!(out, "{}", render_board(game, cfg))?;
            }
            Command::Moves => {
                let moves = game.moves_for(game.to_move());
                writeln!(out, "{} has {} moves:", side_name(game.to_move()), moves.len())?;
                for mov in &moves {
                    writeln!(out, "  {}", format_move(mov))?;
                }
            }
            Command::Select(r, c) => match game.select_cell(r, c) {
                Ok(()) => writeln!(out, "{}", render_board(game, cfg))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Move(r, c) => match game.apply_move_at(r, c) {
                Ok(mov) => {
                    writeln!(out, "played {}", format_move(&mov))?;
                    writeln!(out, "{}", render_board(game, cfg))?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Click(r, c) => match game.click(r, c) {
                Ok(ClickOutcome::Moved(mov)) => {
                    writeln!(out, "played {}", format_move(&mov))?;
                    writeln!(out, "{}", render_board(game, cfg))?;
                }
                Ok(ClickOutcome::Selected(cell)) => {
                    writeln!(out, "selected {}", format_cell(cell))?;
                    writeln!(out, "{}", render_board(game, cfg))?;
                }
                Ok(ClickOutcome::Deselected) => writeln!(out, "selection cleared")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
        }
    }

    out.flush()
}
