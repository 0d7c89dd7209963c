use std::fmt;

use rand::Rng;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::cell::Cell;

/// Offsets of the Moore neighborhood, row by row.
///
/// ```notrust
///   (-1,-1) (0,-1) (1,-1)
///   (-1, 0)        (1, 0)
///   (-1, 1) (0, 1) (1, 1)
/// ```
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("Invalid density: 1 in {max} cells cannot be alive")]
    InvalidDensity { max: u32 },

    #[error("Invalid state shape: {0}")]
    InvalidStateShape(#[from] ShapeMismatch),

    /// Every coordinate of a grid always has a cell. Seeing this means the grid itself is broken.
    #[error("No cell at ({x}, {y})")]
    CoordinateNotFound { x: usize, y: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[error("expected {expected} rows, found {found}")]
    Rows { expected: usize, found: usize },

    #[error("expected row {row} to hold {expected} cells, found {found}")]
    Columns {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// How likely a randomly seeded cell is to start alive: one in `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    max: u32,
}

impl Density {
    /// Every cell is a coin flip.
    pub const UNIFORM: Density = Density { max: 2 };

    /// Cells start alive with probability `1 / max`. Bigger `max` yields a sparser grid.
    pub const fn one_in(max: u32) -> Self {
        Self { max }
    }

    pub const fn max(&self) -> u32 {
        self.max
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::UNIFORM
    }
}

/// Initial state of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Every cell is drawn independently from the rng handed to [`Grid::initialize`].
    Random(Density),

    /// Rows of cells, top to bottom. There must be exactly `height` rows of `width` cells.
    Explicit(Vec<Vec<bool>>),
}

/// A fixed size grid of cells. Anything outside of it is permanently dead.
///
/// Cells are stored row-major: `(x, y)` lives at `y * width + x`, with `x` the column and `y`
/// the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// Always exactly `width * height` cells
    cells: Vec<Cell>,

    /// Number of completed calls to [`Grid::advance`]
    generation: u64,
}

impl Grid {
    /// Build a grid of the given size. The size is fixed for the lifetime of the grid.
    pub fn initialize<R: Rng>(
        width: usize,
        height: usize,
        seed: Seed,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        match seed {
            Seed::Random(density) => Self::random(width, height, density, rng),
            Seed::Explicit(rows) => Self::from_rows(width, height, &rows),
        }
    }

    /// Fill a grid with random cells, each alive with probability `1 / density.max()`.
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        density: Density,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        check_size(width, height)?;

        if density.max == 0 {
            return Err(GridError::InvalidDensity { max: density.max });
        }

        let cells = (0..width * height)
            .map(|_| Cell::new(rng.gen_ratio(1, density.max)))
            .collect();

        debug!(width, height, max = density.max, "seeded random grid");

        Ok(Self::with_cells(width, height, cells))
    }

    /// Build a grid from explicit rows, top to bottom.
    pub fn from_rows<R>(width: usize, height: usize, rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        check_size(width, height)?;

        if rows.len() != height {
            return Err(ShapeMismatch::Rows {
                expected: height,
                found: rows.len(),
            }
            .into());
        }

        let mut cells = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();

            if row.len() != width {
                return Err(ShapeMismatch::Columns {
                    row: y,
                    expected: width,
                    found: row.len(),
                }
                .into());
            }

            cells.extend(row.iter().copied().map(Cell::from));
        }

        debug!(width, height, "seeded grid from explicit state");

        Ok(Self::with_cells(width, height, cells))
    }

    /// A grid where every cell is dead.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        check_size(width, height)?;

        Ok(Self::with_cells(
            width,
            height,
            vec![Cell::dead(); width * height],
        ))
    }

    fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        Self {
            width,
            height,
            cells,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// How many generations this grid has gone through
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The cell at `(x, y)`, or `None` outside of the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.view().get(x, y)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Count how many of the 8 cells around `(x, y)` are alive. Neighbors that fall outside of
    /// the grid count as dead.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        self.view().count_alive_neighbors(x, y)
    }

    /// Move the whole grid forward by one generation.
    ///
    /// Every decision is made against the current cells and written to a separate buffer, which
    /// only replaces the current cells once all `width * height` decisions are in. No cell ever
    /// sees a neighbor's next state.
    pub fn advance(&mut self) -> Result<(), GridError> {
        let current = self.view();
        let mut next = Vec::with_capacity(self.width * self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let cell = current
                    .get(x, y)
                    .ok_or(GridError::CoordinateNotFound { x, y })?;

                let n = current.count_alive_neighbors(x, y);
                next.push(cell.next(n as u32));
            }
        }

        self.cells = next;
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            "advanced grid"
        );

        Ok(())
    }

    /// Format every cell with `f`, one `String` per row, top to bottom and left to right.
    pub fn snapshot<F>(&self, mut f: F) -> Vec<String>
    where
        F: FnMut(Cell) -> char,
    {
        self.rows()
            .map(|row| row.iter().map(|&c| f(c)).collect())
            .collect()
    }

    /// Like [`Grid::snapshot`], but joined into one string with `row_sep` after every row.
    pub fn dump<F>(&self, row_sep: &str, f: F) -> String
    where
        F: FnMut(Cell) -> char,
    {
        let rows = self.snapshot(f);

        let mut s = String::with_capacity((self.width + row_sep.len()) * self.height);
        for row in rows {
            s.push_str(&row);
            s.push_str(row_sep);
        }

        s
    }

    fn view(&self) -> View<'_> {
        View {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
    }
}

/// Dumps the grid as `1`s and `0`s, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.dump("\n", |c| if c.is_alive() { '1' } else { '0' });

        f.write_str(&s)
    }
}

fn check_size(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid { width, height });
    }

    Ok(())
}

/// A frozen, read-only view of one generation.
#[derive(Clone, Copy)]
struct View<'a> {
    width: usize,
    height: usize,
    cells: &'a [Cell],
}

impl View<'_> {
    fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells.get(y * self.width + x).copied()
    }

    fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBORHOOD
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = x.checked_add_signed(dx)?;
                let y = y.checked_add_signed(dy)?;

                self.get(x, y)
            })
            .filter(Cell::is_alive)
            .count() as u8
    }
}
