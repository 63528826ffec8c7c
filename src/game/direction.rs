use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, wrapping
    /// around the edges of `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let Cell { mut x, mut y } = cell;
        match self {
            Direction::Up => y = grid.decrement_y(y),
            Direction::Down => y = grid.increment_y(y),
            Direction::Left => x = grid.decrement_x(x),
            Direction::Right => x = grid.increment_x(x),
        }
        Cell { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
