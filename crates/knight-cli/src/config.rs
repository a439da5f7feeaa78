//! Command-line flags and the run configuration built from them.

use std::path::PathBuf;

use clap::Parser;
use knight_core::{Board, BoardError};

/// Default board side, matching the historical fixed 200x200 board.
pub const DEFAULT_SIZE: i32 = 200;

#[derive(Parser, Debug, Clone)]
#[command(name = "knight")]
#[command(about = "Minimum knight jumps between two cells of a square board")]
pub struct Args {
    /// File holding `start_row start_col target_row target_col`; `-` reads stdin
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// File receiving the minimum jump count (-1 when unreachable)
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// File receiving the JSON report of the shortest path
    #[arg(long, default_value = "output.json")]
    pub json: PathBuf,

    /// Side length of the board
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: i32,

    /// Jump budget for the feasible-path search (default: size * size)
    #[arg(short, long)]
    pub budget: Option<u32>,

    /// Draw the board under each path
    #[arg(long)]
    pub board: bool,

    /// Skip the feasible-path search
    #[arg(long)]
    pub no_feasible: bool,

    /// Print without terminal colours
    #[arg(long)]
    pub no_color: bool,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub json: PathBuf,
    pub board: Board,
    /// `None` skips the feasible-path search.
    pub budget: Option<u32>,
    pub draw_board: bool,
    pub color: bool,
}

impl TryFrom<Args> for RunConfig {
    type Error = BoardError;

    fn try_from(args: Args) -> Result<Self, BoardError> {
        let board = Board::new(args.size)?;
        let budget = if args.no_feasible {
            None
        } else {
            Some(args.budget.unwrap_or(board.len() as u32))
        };
        Ok(Self {
            input: args.input,
            output: args.output,
            json: args.json,
            board,
            budget,
            draw_board: args.board,
            color: !args.no_color,
        })
    }
}
