//! Drawing a board with a path on it.
//!
//! Each cell shows `S` for the start, `T` for the target, the number of
//! jumps from the start for other cells on the path, and blanks elsewhere.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use knight_core::{Board, Cell};
use knight_paths::Path;

/// What a single board cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Start,
    Target,
    Step(u32),
    Empty,
}

fn mark(c: Cell, path: &Path) -> Mark {
    if !path.contains(c) {
        Mark::Empty
    } else if c == path.start() {
        Mark::Start
    } else if c == path.target() {
        Mark::Target
    } else {
        match path.step_of(c) {
            Some(k) => Mark::Step(k),
            None => Mark::Empty,
        }
    }
}

/// Width of one cell: two columns, or more if step numbers need it.
fn cell_width(path: &Path) -> usize {
    path.jumps().to_string().len().max(2)
}

fn write_rule<W: Write>(out: &mut W, size: i32, w: usize) -> io::Result<()> {
    queue!(out, Print("+"))?;
    for _ in 0..size {
        queue!(out, Print(format!("{}+", "-".repeat(w))))?;
    }
    queue!(out, Print("\n"))
}

/// Draw `board` with `path` marked on it. Rows run top to bottom, columns
/// left to right. With `color`, marks are coloured through crossterm.
pub fn write_board<W: Write>(out: &mut W, board: Board, path: &Path, color: bool) -> io::Result<()> {
    let size = board.size();
    let w = cell_width(path);

    write_rule(out, size, w)?;
    for row in 1..=size {
        queue!(out, Print("|"))?;
        for col in 1..=size {
            let (text, fg) = match mark(Cell::new(row, col), path) {
                Mark::Start => ("S".to_string(), Some(Color::Green)),
                Mark::Target => ("T".to_string(), Some(Color::Red)),
                Mark::Step(k) => (k.to_string(), Some(Color::Cyan)),
                Mark::Empty => (String::new(), None),
            };
            let text = format!("{text:>w$}");
            match fg {
                Some(fg) if color => {
                    queue!(out, SetForegroundColor(fg), Print(text), ResetColor)?
                }
                _ => queue!(out, Print(text))?,
            }
            queue!(out, Print("|"))?;
        }
        queue!(out, Print("\n"))?;
        write_rule(out, size, w)?;
    }
    out.flush()
}
