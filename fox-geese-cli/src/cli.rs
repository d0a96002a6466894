//! Command-line interface for fox-geese.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fox_geese_core::Side;

/// Fox and Geese - play in the terminal or render positions to SVG
#[derive(Parser, Debug)]
#[command(name = "fox-geese")]
#[command(about = "Fox and Geese on the cross-shaped board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "fox-geese.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Which side moves first from a loaded position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Fox,
    Geese,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Side {
        match side {
            SideArg::Fox => Side::Fox,
            SideArg::Geese => Side::Geese,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Start from a board diagram file instead of the opening layout
        #[arg(long)]
        position: Option<PathBuf>,

        /// Side to move in the loaded position
        #[arg(long, value_enum, default_value = "geese")]
        to_move: SideArg,
    },

    /// Render a position to SVG
    Render {
        /// Start from a board diagram file instead of the opening layout
        #[arg(long)]
        position: Option<PathBuf>,

        /// Side to move in the loaded position
        #[arg(long, value_enum, default_value = "geese")]
        to_move: SideArg,

        /// Moves to play first, e.g. "(4,0)->(3,0) (3,3)->(2,3)"
        #[arg(long, default_value = "")]
        moves: String,

        /// Write one frame per position instead of only the last one
        #[arg(long)]
        game: bool,

        /// Output file for a single position
        #[arg(short, long, default_value = "board.svg")]
        output: PathBuf,

        /// Output directory for --game frames
        #[arg(long, default_value = "frames")]
        output_dir: PathBuf,

        /// Scale factor for the image size
        #[arg(long, default_value = "1.0")]
        scale: f32,
    },
}
