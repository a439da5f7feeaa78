//! Reading the start and target cells.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use knight_core::Cell;

/// Errors that can occur while reading the endpoints.
#[derive(Debug)]
pub enum InputError {
    /// The input file or stdin could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Fewer than four integers were found.
    Missing { found: usize },
    /// A token is not an integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "input: cannot read {}: {source}", path.display()),
            Self::Missing { found } => {
                write!(f, "input: expected 4 coordinates, found {found}")
            }
            Self::NotANumber(tok) => write!(f, "input: {tok:?} is not an integer"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse `start_row start_col target_row target_col` from whitespace
/// separated text. Anything after the fourth integer is ignored.
pub fn parse_endpoints(text: &str) -> Result<(Cell, Cell), InputError> {
    let mut nums = [0i32; 4];
    let mut found = 0;
    for tok in text.split_whitespace().take(4) {
        nums[found] = tok
            .parse()
            .map_err(|_| InputError::NotANumber(tok.to_string()))?;
        found += 1;
    }
    if found < 4 {
        return Err(InputError::Missing { found });
    }
    Ok((Cell::new(nums[0], nums[1]), Cell::new(nums[2], nums[3])))
}

/// Read the endpoints from `path`, or from stdin when `path` is `-`.
pub fn read_endpoints(path: &Path) -> Result<(Cell, Cell), InputError> {
    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_err)?
    };
    parse_endpoints(&text)
}
