use std::fmt;

/// A grid-aligned cell of the playing field, in cell units.  `(0, 0)` is the
/// top-left corner.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of the playing field.  The field is a torus: moving off
/// one edge re-enters at the opposite edge, and there are no walls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Returns `None` if either dimension is zero
    pub(crate) fn new(width: u16, height: u16) -> Option<Grid> {
        (width > 0 && height > 0).then_some(Grid { width, height })
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// The cell at which each new snake spawns
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Return the horizontal & vertical distances between two cells, each
    /// measured the short way around the torus
    pub(crate) fn axis_distances(self, a: Cell, b: Cell) -> (u16, u16) {
        (
            wrapped_distance(a.x, b.x, self.width),
            wrapped_distance(a.y, b.y, self.height),
        )
    }

    pub(crate) fn increment_x(self, x: u16) -> u16 {
        increment_wrapping(x, self.width)
    }

    pub(crate) fn decrement_x(self, x: u16) -> u16 {
        decrement_wrapping(x, self.width)
    }

    pub(crate) fn increment_y(self, y: u16) -> u16 {
        increment_wrapping(y, self.height)
    }

    pub(crate) fn decrement_y(self, y: u16) -> u16 {
        decrement_wrapping(y, self.height)
    }
}

fn wrapped_distance(a: u16, b: u16, max: u16) -> u16 {
    let d = a.abs_diff(b);
    d.min(max.saturating_sub(d))
}

fn decrement_wrapping(v: u16, max: u16) -> u16 {
    v.checked_sub(1).unwrap_or(max.saturating_sub(1))
}

fn increment_wrapping(v: u16, max: u16) -> u16 {
    v.checked_add(1).filter(|&v2| v2 < max).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn zero_sized_grid() {
        assert_eq!(Grid::new(0, 5), None);
        assert_eq!(Grid::new(5, 0), None);
    }

    #[test]
    fn center() {
        let grid = Grid::new(60, 40).unwrap();
        assert_eq!(grid.center(), Cell::new(30, 20));
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.center(), Cell::new(0, 0));
    }

    #[test]
    fn cells_cover_grid() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            [
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1),
            ]
        );
        assert!(grid.cells().all(|c| grid.contains(c)));
        assert!(!grid.contains(Cell::new(3, 0)));
        assert!(!grid.contains(Cell::new(0, 2)));
    }

    #[rstest]
    #[case(Cell::new(5, 5), Cell::new(5, 5), (0, 0))]
    #[case(Cell::new(2, 5), Cell::new(7, 1), (5, 4))]
    #[case(Cell::new(0, 0), Cell::new(59, 39), (1, 1))]
    #[case(Cell::new(1, 3), Cell::new(58, 30), (3, 13))]
    #[case(Cell::new(0, 0), Cell::new(30, 20), (30, 20))]
    fn test_axis_distances(#[case] a: Cell, #[case] b: Cell, #[case] expected: (u16, u16)) {
        let grid = Grid::new(60, 40).unwrap();
        assert_eq!(grid.axis_distances(a, b), expected);
        assert_eq!(grid.axis_distances(b, a), expected);
    }

    #[test]
    fn wrapping_steps() {
        let grid = Grid::new(10, 15).unwrap();
        assert_eq!(grid.increment_x(9), 0);
        assert_eq!(grid.decrement_x(0), 9);
        assert_eq!(grid.increment_y(14), 0);
        assert_eq!(grid.decrement_y(0), 14);
        assert_eq!(grid.increment_x(3), 4);
        assert_eq!(grid.decrement_y(3), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, 17).to_string(), "(4, 17)");
    }
}
