use clap::ValueEnum;

use crate::cell::Cell;
use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// How a grid is drawn as text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// `#` for live cells, `.` for dead ones
    #[default]
    Glyph,

    /// `1` for live cells, `0` for dead ones
    Binary,

    /// 2x4 cells per braille character
    Braille,
}

impl Style {
    /// The character for a single cell. Braille packs several cells per character, so it has no
    /// answer here.
    pub fn cell(&self, cell: Cell) -> Option<char> {
        match (self, cell.is_alive()) {
            (Style::Glyph, true) => Some('#'),
            (Style::Glyph, false) => Some('.'),
            (Style::Binary, true) => Some('1'),
            (Style::Binary, false) => Some('0'),
            (Style::Braille, _) => None,
        }
    }

    /// Render the whole grid, one line per row of characters, each line ending with `\n`.
    pub fn render(&self, grid: &Grid) -> String {
        match self {
            Style::Glyph | Style::Binary => grid.dump("\n", |c| self.cell(c).unwrap_or(' ')),
            Style::Braille => braille(grid),
        }
    }
}

fn braille(grid: &Grid) -> String {
    // `bw` and `bh` are the width and height of the frame in braille characters
    let (bw, bh) = (grid.width().div_ceil(2), grid.height().div_ceil(4));
    let mut cp = vec![BRAILLE_EMPTY; bw * bh];

    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if cell.is_alive() {
                cp[(y / 4) * bw + (x / 2)] += dot(x, y);
            }
        }
    }

    // Each braille character is 3 bytes, plus one newline per line
    let mut fb = String::with_capacity(3 * (bw * bh) + bh);

    for (i, &c) in cp.iter().enumerate() {
        if i > 0 && i % bw == 0 {
            fb.push('\n');
        }

        fb.push(char::from_u32(c).unwrap_or('\u{2800}'));
    }
    fb.push('\n');

    fb
}

fn dot(x: usize, y: usize) -> u32 {
    match (x % 2, y % 4) {
        (0, 0) => 0x1,
        (1, 0) => 0x8,
        (0, 1) => 0x2,
        (1, 1) => 0x10,
        (0, 2) => 0x4,
        (1, 2) => 0x20,
        (0, 3) => 0x40,
        (1, 3) => 0x80,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod test {
    use super::Style;
    use crate::cell::Cell;
    use crate::grid::Grid;

    #[test]
    fn cell_glyphs() {
        assert_eq!(Style::Glyph.cell(Cell::alive()), Some('#'));
        assert_eq!(Style::Glyph.cell(Cell::dead()), Some('.'));
        assert_eq!(Style::Binary.cell(Cell::alive()), Some('1'));
        assert_eq!(Style::Binary.cell(Cell::dead()), Some('0'));
        assert_eq!(Style::Braille.cell(Cell::alive()), None);
    }

    #[test]
    fn render_uses_cell_glyphs() {
        let grid = Grid::from_rows(3, 1, &[[true, false, true]]).unwrap();

        assert_eq!(Style::Glyph.render(&grid), "#.#\n");
        assert_eq!(Style::Binary.render(&grid), "101\n");
    }

    #[test]
    fn braille_full_block() {
        let grid = Grid::from_rows(2, 4, &[[true; 2]; 4]).unwrap();

        assert_eq!(Style::Braille.render(&grid), "\u{28FF}\n");
    }

    #[test]
    fn braille_rounds_up() {
        // 3x5 needs 2x2 braille characters, only the top left dot is set
        let mut rows = vec![vec![false; 3]; 5];
        rows[0][0] = true;
        let grid = Grid::from_rows(3, 5, &rows).unwrap();

        assert_eq!(Style::Braille.render(&grid), "\u{2801}\u{2800}\n\u{2800}\u{2800}\n");
    }
}
