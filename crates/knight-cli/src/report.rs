//! Text and JSON results.

use std::fs;
use std::io;
use std::path::Path as FsPath;

use knight_core::{Board, Cell};
use knight_paths::Path;
use serde::Serialize;

/// JSON summary of a shortest path. `path` runs from start to target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub min_jumps: u32,
    pub start: Cell,
    pub target: Cell,
    pub path: Vec<Cell>,
    pub board_size: i32,
}

impl Report {
    pub fn new(board: Board, path: &Path) -> Self {
        Self {
            min_jumps: path.jumps(),
            start: path.start(),
            target: path.target(),
            path: path.to_vec(),
            board_size: board.size(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The jump count line: the number of jumps, or `-1` when there is no path.
pub fn jumps_line(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.jumps().to_string(),
        None => "-1".to_string(),
    }
}

/// Write the jump count line to `dest`.
pub fn write_jumps(dest: &FsPath, path: Option<&Path>) -> io::Result<()> {
    fs::write(dest, format!("{}\n", jumps_line(path)))
}

/// Write the JSON report to `dest`.
pub fn write_json(dest: &FsPath, report: &Report) -> io::Result<()> {
    let json = report.to_json().map_err(io::Error::other)?;
    fs::write(dest, format!("{json}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_paths::KnightPaths;

    #[test]
    fn json_shape() {
        let board = Board::new(8).unwrap();
        let path = Path::from_cells(vec![Cell::new(1, 1), Cell::new(2, 3), Cell::new(4, 4)]).unwrap();
        let json = Report::new(board, &path).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"minJumps":2,"start":{"x":1,"y":1},"target":{"x":4,"y":4},"path":[{"x":1,"y":1},{"x":2,"y":3},{"x":4,"y":4}],"boardSize":8}"#
        );
    }

    #[test]
    fn report_from_search() {
        let board = Board::new(8).unwrap();
        let path = KnightPaths::new(board)
            .shortest_path(Cell::new(1, 1), Cell::new(8, 8))
            .unwrap()
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&Report::new(board, &path).to_json().unwrap()).unwrap();
        assert_eq!(value["minJumps"], 6);
        assert_eq!(value["boardSize"], 8);
        assert_eq!(value["path"].as_array().unwrap().len(), 7);
        assert_eq!(value["path"][0], serde_json::json!({"x": 1, "y": 1}));
        assert_eq!(value["path"][6], serde_json::json!({"x": 8, "y": 8}));
    }

    #[test]
    fn jump_line() {
        let path = Path::from_cells(vec![Cell::new(1, 1), Cell::new(3, 2)]).unwrap();
        assert_eq!(jumps_line(Some(&path)), "1");
        assert_eq!(jumps_line(None), "-1");
    }

    #[test]
    fn writes_files() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let txt = dir.join(format!("knight-output-{pid}.txt"));
        let json = dir.join(format!("knight-output-{pid}.json"));
        let board = Board::new(5).unwrap();
        let path = Path::from_cells(vec![Cell::new(1, 1), Cell::new(2, 3)]).unwrap();

        write_jumps(&txt, Some(&path)).unwrap();
        write_json(&json, &Report::new(board, &path)).unwrap();
        assert_eq!(fs::read_to_string(&txt).unwrap(), "1\n");
        assert!(fs::read_to_string(&json).unwrap().starts_with(r#"{"minJumps":1,"#));

        fs::remove_file(&txt).unwrap();
        fs::remove_file(&json).unwrap();
    }
}
