//! Command-line driver for the knight-move searches.
//!
//! Reads a start and target cell, runs the shortest, bounded and feasible
//! searches with timing, prints each path (optionally drawn on the board),
//! and writes the jump count and a JSON report of the shortest path.

pub mod config;
pub mod input;
pub mod render;
pub mod report;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use knight_core::{BoardError, Cell};
use knight_paths::{KnightPaths, Path, SearchKind};

pub use config::{Args, RunConfig};
pub use input::InputError;
pub use report::Report;

/// Result of one search.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub kind: SearchKind,
    pub path: Option<Path>,
    pub elapsed: Duration,
}

/// Run the shortest and bounded searches, then the feasible search when a
/// budget is given. Each search is timed separately.
pub fn solve(
    paths: &KnightPaths,
    start: Cell,
    target: Cell,
    budget: Option<u32>,
) -> Result<Vec<Outcome>, BoardError> {
    let mut outcomes = Vec::with_capacity(SearchKind::ALL.len());
    for kind in SearchKind::ALL {
        let begin = Instant::now();
        let path = match kind {
            SearchKind::Shortest => paths.shortest_path(start, target)?,
            SearchKind::Bounded => paths.bounded_shortest_path(start, target)?,
            SearchKind::Feasible => match budget {
                Some(b) => paths.feasible_path(start, target, b)?,
                None => continue,
            },
        };
        let elapsed = begin.elapsed();
        log::info!("{kind} search took {:.6}s", elapsed.as_secs_f64());
        outcomes.push(Outcome {
            kind,
            path,
            elapsed,
        });
    }
    Ok(outcomes)
}

/// Print one outcome: its jump count, time and path, then the board if asked.
pub fn print_outcome<W: Write>(out: &mut W, config: &RunConfig, outcome: &Outcome) -> io::Result<()> {
    let secs = outcome.elapsed.as_secs_f64();
    let Some(path) = &outcome.path else {
        return writeln!(out, "{}: no path found ({secs:.6}s)", outcome.kind);
    };
    writeln!(out, "{}: {} jumps ({secs:.6}s)", outcome.kind, path.jumps())?;
    writeln!(out, "path: {path}")?;
    if config.draw_board {
        render::write_board(out, config.board, path, config.color)?;
    }
    Ok(())
}

/// Execute a full run described by `config`.
pub fn run(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (start, target) = input::read_endpoints(&config.input)?;
    let size = config.board.size();
    log::info!("searching {start} -> {target} on a {size}x{size} board");

    let paths = KnightPaths::new(config.board);
    let outcomes = solve(&paths, start, target, config.budget)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        print_outcome(&mut out, config, outcome)?;
    }

    let shortest = outcomes
        .iter()
        .find(|o| o.kind == SearchKind::Shortest)
        .and_then(|o| o.path.as_ref());
    report::write_jumps(&config.output, shortest)?;

    match shortest {
        Some(path) => {
            let report = Report::new(config.board, path);
            writeln!(out, "{}", report.to_json()?)?;
            report::write_json(&config.json, &report)?;
        }
        None => log::warn!(
            "{start} -> {target} is unreachable, {} not written",
            config.json.display()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::Board;
    use std::path::PathBuf;

    fn config(size: i32, budget: Option<u32>, draw_board: bool) -> RunConfig {
        RunConfig {
            input: PathBuf::from("-"),
            output: PathBuf::from("output.txt"),
            json: PathBuf::from("output.json"),
            board: Board::new(size).unwrap(),
            budget,
            draw_board,
            color: false,
        }
    }

    #[test]
    fn solve_runs_all_three() {
        let paths = KnightPaths::new(Board::new(8).unwrap());
        let outcomes = solve(&paths, Cell::new(1, 1), Cell::new(8, 8), Some(64)).unwrap();
        let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, SearchKind::ALL);
        assert_eq!(outcomes[0].path.as_ref().unwrap().jumps(), 6);
        assert_eq!(outcomes[0].path, outcomes[1].path);
        let feasible = outcomes[2].path.as_ref().unwrap();
        assert!(feasible.is_connected());
        assert!(feasible.jumps() <= 64);
    }

    #[test]
    fn solve_without_budget_skips_feasible() {
        let paths = KnightPaths::new(Board::new(8).unwrap());
        let outcomes = solve(&paths, Cell::new(1, 1), Cell::new(2, 3), None).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.kind.is_optimal()));
    }

    #[test]
    fn solve_rejects_off_board() {
        let paths = KnightPaths::new(Board::new(8).unwrap());
        assert!(solve(&paths, Cell::new(0, 1), Cell::new(2, 3), None).is_err());
    }

    #[test]
    fn prints_path_and_board() {
        let cfg = config(3, None, true);
        let outcome = Outcome {
            kind: SearchKind::Shortest,
            path: Path::from_cells(vec![Cell::new(1, 1), Cell::new(2, 3)]),
            elapsed: Duration::ZERO,
        };
        let mut buf = Vec::new();
        print_outcome(&mut buf, &cfg, &outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("shortest: 1 jumps (0.000000s)\npath: (1, 1) -> (2, 3)\n+--+--+--+\n"));
        assert!(text.contains("| S|  |  |"));
        assert!(text.contains("|  |  | T|"));
    }

    #[test]
    fn prints_elapsed_time() {
        let cfg = config(8, None, false);
        let outcome = Outcome {
            kind: SearchKind::Bounded,
            path: Path::from_cells(vec![Cell::new(1, 1), Cell::new(3, 2)]),
            elapsed: Duration::from_millis(1500),
        };
        let mut buf = Vec::new();
        print_outcome(&mut buf, &cfg, &outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("bounded: 1 jumps (1.500000s)\n"));
    }

    #[test]
    fn prints_missing_path() {
        let cfg = config(2, Some(4), false);
        let outcome = Outcome {
            kind: SearchKind::Feasible,
            path: None,
            elapsed: Duration::ZERO,
        };
        let mut buf = Vec::new();
        print_outcome(&mut buf, &cfg, &outcome).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "feasible: no path found (0.000000s)\n");
    }

    fn run_in_tmp(tag: &str, size: i32, endpoints: &str) -> (String, Option<serde_json::Value>) {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let input = dir.join(format!("knight-run-{tag}-{pid}.in"));
        let output = dir.join(format!("knight-run-{tag}-{pid}.txt"));
        let json = dir.join(format!("knight-run-{tag}-{pid}.json"));
        std::fs::write(&input, endpoints).unwrap();
        let _ = std::fs::remove_file(&json);

        let cfg = RunConfig {
            input: input.clone(),
            output: output.clone(),
            json: json.clone(),
            ..config(size, Some((size * size) as u32), false)
        };
        run(&cfg).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let report = std::fs::read_to_string(&json)
            .ok()
            .map(|s| serde_json::from_str(&s).unwrap());
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
        let _ = std::fs::remove_file(&json);
        (text, report)
    }

    #[test]
    fn run_writes_jump_count_and_report() {
        let (text, report) = run_in_tmp("ring", 3, "1 1 2 2\n");
        assert_eq!(text, "-1\n");
        assert!(report.is_none());

        let (text, report) = run_in_tmp("corner", 8, "1 1 8 8\n");
        assert_eq!(text, "6\n");
        let report = report.unwrap();
        assert_eq!(report["minJumps"], 6);
        assert_eq!(report["boardSize"], 8);
        assert_eq!(report["path"].as_array().unwrap().len(), 7);
    }
}
