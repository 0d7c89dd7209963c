use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unexpected character '{got}' at line {line}, column {column}")]
    UnexpectedChar {
        line: usize,
        column: usize,
        got: char,
    },

    #[error("Pattern contains no cells")]
    Empty,
}

/// Parse a plain text pattern into rows of cells, top to bottom.
///
/// Live cells are any of `#`, `1`, `O`, `o`, `*`. Dead cells are any of `.`, `0`, `b`, `_` or a
/// space. Lines starting with `!` are comments. Trailing blank lines are dropped, and rows
/// shorter than the widest one are padded with dead cells.
///
/// ```notrust
/// !Name: Glider
/// .#.
/// ..#
/// ###
/// ```
pub fn parse(s: &str) -> Result<Vec<Vec<bool>>, PatternError> {
    let mut rows = Vec::new();

    for (i, line) in s.lines().enumerate() {
        if line.starts_with('!') {
            continue;
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(j, c)| match c {
                '#' | '1' | 'O' | 'o' | '*' => Ok(true),
                '.' | '0' | 'b' | '_' | ' ' => Ok(false),
                got => Err(PatternError::UnexpectedChar {
                    line: i + 1,
                    column: j + 1,
                    got,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or_default();
    if width == 0 {
        return Err(PatternError::Empty);
    }

    for (y, row) in rows.iter_mut().enumerate() {
        if row.len() < width {
            warn!(row = y, len = row.len(), width, "Padding short pattern row");
            row.resize(width, false);
        }
    }

    Ok(rows)
}

/// Place `rows` in the top left corner of a `width` by `height` area. Cells past the edges are
/// dropped, and any space the pattern doesn't cover is dead.
pub fn fit<R>(rows: &[R], width: usize, height: usize) -> Vec<Vec<bool>>
where
    R: AsRef<[bool]>,
{
    let mut out = vec![vec![false; width]; height];
    let mut cropped = rows.len() > height;

    for (dst, src) in out.iter_mut().zip(rows) {
        let src = src.as_ref();
        let n = src.len().min(width);

        cropped |= src[n..].iter().any(|&alive| alive);
        dst[..n].copy_from_slice(&src[..n]);
    }

    if cropped {
        warn!(width, height, "Pattern does not fit in the grid, cropping");
    }

    out
}
