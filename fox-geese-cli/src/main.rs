//! Fox and Geese command-line front end.
//!
//! `play` runs a line-based game on stdin/stdout; `render` draws a position
//! (or every position of a move sequence) as SVG.

mod cli;
mod config;
mod display;
mod notation;
mod play;
mod render;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fox_geese_core::{Board, GameState, Move, Side};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::{CliConfig, RenderConfig};
use crate::notation::{format_move, parse_steps, play_step};
use crate::render::{render_svg, RenderOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { position, to_move } => {
            let mut game = load_game(position.as_deref(), to_move.into())?;
            info!(to_move = ?game.to_move(), "starting game");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            play::run(&mut game, stdin.lock(), &mut stdout, &config.display)?;
        }
        Command::Render {
            position,
            to_move,
            moves,
            game,
            output,
            output_dir,
            scale,
        } => {
            let start = load_game(position.as_deref(), to_move.into())?;
            let steps = parse_steps(&moves).map_err(|bad| anyhow::anyhow!("cannot parse move {bad:?}"))?;
            if game {
                render_frames(start, &steps, &config.render, scale, &output_dir)?;
            } else {
                render_final(start, &steps, &config.render, scale, &output)?;
            }
        }
    }

    Ok(())
}

/// The opening layout, or a board diagram read from `path`.
fn load_game(path: Option<&Path>, to_move: Side) -> Result<GameState> {
    let Some(path) = path else {
        return Ok(GameState::new());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("parsing board diagram {}", path.display()))?;
    Ok(GameState::from_position(board, to_move))
}

type Step = ((u8, u8), (u8, u8));

fn play_all(game: &mut GameState, steps: &[Step]) -> Result<Option<Move>> {
    let mut last = None;
    for (i, &(from, to)) in steps.iter().enumerate() {
        let mov = play_step(game, from, to)
            .with_context(|| format!("move {} {:?}->{:?} rejected", i + 1, from, to))?;
        last = Some(mov);
    }
    Ok(last)
}

fn render_final(
    mut game: GameState,
    steps: &[Step],
    cfg: &RenderConfig,
    scale: f32,
    output: &Path,
) -> Result<()> {
    let last_move = play_all(&mut game, steps)?;
    let svg = render_svg(&game, cfg, &RenderOptions { last_move, scale });
    fs::write(output, svg).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn render_frames(
    mut game: GameState,
    steps: &[Step],
    cfg: &RenderConfig,
    scale: f32,
    dir: &Path,
) -> Result<()> {
    if steps.is_empty() {
        bail!("--game needs at least one move in --moves");
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let write_frame = |index: usize, game: &GameState, last_move: Option<Move>| -> Result<()> {
        let path = dir.join(format!("frame_{index:03}.svg"));
        let svg = render_svg(game, cfg, &RenderOptions { last_move, scale });
        fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
        Ok(())
    };

    write_frame(0, &game, None)?;
    for (i, &(from, to)) in steps.iter().enumerate() {
        let mov = play_step(&mut game, from, to)
            .with_context(|| format!("move {} {:?}->{:?} rejected", i + 1, from, to))?;
        info!(frame = i + 1, mov = %format_move(&mov), "rendered");
        write_frame(i + 1, &game, Some(mov))?;
    }
    Ok(())
}
