/// Neighbor counts that bring a dead cell to life, one bit per count. Bit `i` set means a dead
/// cell with `i` live neighbors is born.
///
/// ```notrust
/// b3: 0000_0000_0000_1000
/// ```
const BIRTHS: u16 = 0b0000_0000_0000_1000;

/// Neighbor counts that keep a live cell alive, same layout as [`BIRTHS`].
///
/// ```notrust
/// s23: 0000_0000_0000_1100
/// ```
const SURVIVALS: u16 = 0b0000_0000_0000_1100;

/// A single cell of the grid. Cells have no identity beyond their position, so they are plain
/// values that get replaced wholesale every generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub const fn alive() -> Self {
        Self { alive: true }
    }

    pub const fn dead() -> Self {
        Self { alive: false }
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether this cell is alive in the next generation given how many of its eight neighbors
    /// are alive now.
    ///
    /// * alive with 2 or 3 neighbors survives
    /// * alive with fewer than 2 dies of isolation, more than 3 of overpopulation
    /// * dead with exactly 3 is born
    /// * dead with any other count stays dead
    ///
    /// A Moore neighborhood never has more than 8 cells, so any larger count is answered with
    /// `false`.
    pub const fn will_survive(&self, alive_neighbors: u32) -> bool {
        if alive_neighbors > 8 {
            return false;
        }

        let bit = 1 << alive_neighbors;
        let rule = if self.alive { SURVIVALS } else { BIRTHS };

        rule & bit == bit
    }

    /// The cell as it will be in the next generation.
    pub const fn next(&self, alive_neighbors: u32) -> Self {
        Self::new(self.will_survive(alive_neighbors))
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

#[cfg(test)]
mod test {
    use super::Cell;

    #[test]
    fn live_cell_table() {
        let cell = Cell::alive();
        let want = [false, false, true, true, false, false, false, false, false];

        for (n, &w) in want.iter().enumerate() {
            assert_eq!(
                cell.will_survive(n as u32),
                w,
                "live cell with {n} neighbors"
            );
        }
    }

    #[test]
    fn dead_cell_table() {
        let cell = Cell::dead();
        let want = [false, false, false, true, false, false, false, false, false];

        for (n, &w) in want.iter().enumerate() {
            assert_eq!(
                cell.will_survive(n as u32),
                w,
                "dead cell with {n} neighbors"
            );
        }
    }

    #[test]
    fn out_of_range_counts_die() {
        for n in [9, 15, 16, 64, u32::MAX] {
            assert!(!Cell::alive().will_survive(n));
            assert!(!Cell::dead().will_survive(n));
        }
    }

    #[test]
    fn from_bool() {
        assert_eq!(Cell::from(true), Cell::alive());
        assert_eq!(Cell::from(false), Cell::dead());
    }

    #[test]
    fn next_does_not_touch_self() {
        let cell = Cell::alive();
        let next = cell.next(0);

        assert!(cell.is_alive());
        assert!(!next.is_alive());
    }
}
