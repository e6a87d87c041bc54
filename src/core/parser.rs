//! Parser for the flat text format produced by the hull computation
//!
//! Layout: point count N, N coordinate lines, hull count M, M coordinate
//! lines. Coordinates are two whitespace-separated float tokens. Blank
//! lines are ignored everywhere and do not count as records.
//!
//! Any malformed input aborts the whole load; a scene is never returned
//! partially populated.

use std::path::Path;

use tracing::debug;

use super::{Point, Scene};

/// Malformed-input failure. Line numbers are 1-based positions in the
/// original file, blank lines included, so they match what an editor shows.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("input is empty")]
    Empty,
    #[error("line {line}: expected a non-negative integer count, got {token:?}")]
    BadCount { line: usize, token: String },
    #[error("line {line}: expected two coordinates, got {found} token(s)")]
    BadCoordLine { line: usize, found: usize },
    #[error("line {line}: {token:?} is not a valid number")]
    BadNumber { line: usize, token: String },
    #[error("unexpected end of input at line {line}: {missing} more line(s) declared by the counts")]
    Truncated { line: usize, missing: usize },
}

/// Failure to load a scene from disk: the file itself, or its contents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Cursor over the non-blank lines of the input. Each record is consumed
/// exactly once in order, so there is no index arithmetic to get wrong.
struct Cursor<'a> {
    /// (1-based original line number, trimmed content)
    lines: Vec<(usize, &'a str)>,
    pos: usize,
    /// Line count of the original file, for end-of-input reporting
    last_line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        let mut last_line = 0;
        let lines = input
            .lines()
            .enumerate()
            .inspect(|(i, _)| last_line = i + 1)
            .map(|(i, raw)| (i + 1, raw.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        Self { lines, pos: 0, last_line }
    }

    fn next_line(&mut self, missing: usize) -> Result<(usize, &'a str), FormatError> {
        let &(line, content) = self.lines.get(self.pos).ok_or(FormatError::Truncated {
            line: self.last_line,
            missing,
        })?;
        self.pos += 1;
        Ok((line, content))
    }

    fn count(&mut self) -> Result<usize, FormatError> {
        let (line, content) = self.next_line(1)?;
        content.parse().map_err(|_| FormatError::BadCount {
            line,
            token: content.to_string(),
        })
    }

    /// Consume `n` coordinate lines.
    fn points(&mut self, n: usize) -> Result<Vec<Point>, FormatError> {
        (0..n).map(|i| self.point(n - i)).collect()
    }

    fn point(&mut self, missing: usize) -> Result<Point, FormatError> {
        let (line, content) = self.next_line(missing)?;

        let tokens: Vec<&str> = content.split_whitespace().collect();
        let [x, y] = tokens[..] else {
            return Err(FormatError::BadCoordLine {
                line,
                found: tokens.len(),
            });
        };

        let coord = |token: &str| {
            token.parse().map_err(|_| FormatError::BadNumber {
                line,
                token: token.to_string(),
            })
        };
        Ok(Point::new(coord(x)?, coord(y)?))
    }
}

/// Parse a scene from the text format. Strong-failure: either both
/// sequences come back fully populated or an error does.
pub fn parse_scene(input: &str) -> Result<Scene, FormatError> {
    let mut cursor = Cursor::new(input);
    if cursor.lines.is_empty() {
        return Err(FormatError::Empty);
    }

    let num_points = cursor.count()?;
    let points = cursor.points(num_points)?;
    debug!(num_points, "parsed point set");

    let num_hull = cursor.count()?;
    let hull = cursor.points(num_hull)?;
    debug!(num_hull, "parsed hull");

    Ok(Scene::new(points, hull))
}

/// Read and parse a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_scene(&input)?)
}
