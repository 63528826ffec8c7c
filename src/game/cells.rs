use super::grid::{Cell, Grid};
use rand::Rng;

/// A supplier of grid cells for placing food & obstacles
pub(crate) trait CellSource {
    /// Return a freshly-drawn cell.  Each call samples anew; nothing is
    /// cached between calls.
    fn next_cell(&mut self) -> Cell;
}

/// Cells drawn uniformly at random from the whole grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RandomCells<R> {
    rng: R,
    grid: Grid,
}

impl<R: Rng> RandomCells<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> RandomCells<R> {
        RandomCells { rng, grid }
    }
}

impl<R: Rng> CellSource for RandomCells<R> {
    fn next_cell(&mut self) -> Cell {
        let x = self.rng.random_range(0..self.grid.width());
        let y = self.rng.random_range(0..self.grid.height());
        Cell::new(x, y)
    }
}

/// A `CellSource` that hands out a fixed list of cells in order, starting
/// over from the beginning once the list is used up
#[cfg(test)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ScriptedCells {
    cells: Vec<Cell>,
    next: usize,
}

#[cfg(test)]
impl ScriptedCells {
    pub(crate) fn new<I: IntoIterator<Item = Cell>>(cells: I) -> ScriptedCells {
        let cells = cells.into_iter().collect::<Vec<_>>();
        assert!(!cells.is_empty(), "ScriptedCells needs at least one cell");
        ScriptedCells { cells, next: 0 }
    }

    /// Number of cells handed out so far
    pub(crate) fn drawn(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl CellSource for ScriptedCells {
    fn next_cell(&mut self) -> Cell {
        let cell = self.cells[self.next % self.cells.len()];
        self.next += 1;
        cell
    }
}
