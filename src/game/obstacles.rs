//! Placement of obstacles & food by rejection sampling
use super::cells::CellSource;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::options::Options;
use std::collections::HashSet;
use thiserror::Error;

/// Returned when no acceptable cell turned up within the sampling budget
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell found after {attempts} attempts")]
pub(crate) struct BoardFull {
    pub(crate) attempts: u32,
}

/// Picks cells for new obstacles & food
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Placer {
    grid: Grid,

    /// Minimum distance, on each axis, between a new obstacle and the
    /// player's position
    safe_distance: u16,

    /// Maximum number of cells to sample before giving up
    max_attempts: u32,
}

impl Placer {
    pub(crate) fn new(grid: Grid, safe_distance: u16, max_attempts: u32) -> Placer {
        Placer {
            grid,
            safe_distance,
            max_attempts,
        }
    }

    /// Choose a cell for a new obstacle.  The cell is at least
    /// `safe_distance` away from `player` on both axes (measured around the
    /// torus) and does not coincide with the snake, the food, or any existing
    /// obstacle.
    pub(crate) fn place_obstacle<S: CellSource>(
        &self,
        source: &mut S,
        obstacles: &HashSet<Cell>,
        snake: &Snake,
        food: Option<Cell>,
        player: Cell,
    ) -> Result<Cell, BoardFull> {
        self.sample(source, |cell| {
            self.far_enough(cell, player)
                && !snake.occupies(cell)
                && !obstacles.contains(&cell)
                && food != Some(cell)
        })
    }

    /// Choose a cell for the food that is not covered by the snake or an
    /// obstacle.  If sampling fails, the first free cell in row-major order
    /// is used instead; `None` is returned only if there are no free cells.
    pub(crate) fn place_food<S: CellSource>(
        &self,
        source: &mut S,
        obstacles: &HashSet<Cell>,
        snake: &Snake,
    ) -> Option<Cell> {
        let free = |cell: Cell| !snake.occupies(cell) && !obstacles.contains(&cell);
        self.sample(source, free)
            .ok()
            .or_else(|| self.grid.cells().find(|&c| free(c)))
    }

    fn far_enough(&self, cell: Cell, player: Cell) -> bool {
        let (dx, dy) = self.grid.axis_distances(cell, player);
        dx >= self.safe_distance && dy >= self.safe_distance
    }

    fn sample<S, F>(&self, source: &mut S, accept: F) -> Result<Cell, BoardFull>
    where
        S: CellSource,
        F: Fn(Cell) -> bool,
    {
        (0..self.max_attempts)
            .map(|_| source.next_cell())
            .find(|&c| self.grid.contains(c) && accept(c))
            .ok_or(BoardFull {
                attempts: self.max_attempts,
            })
    }
}

impl From<&Options> for Placer {
    fn from(options: &Options) -> Placer {
        Placer::new(
            options.grid,
            options.safe_distance,
            options.placement_attempts,
        )
    }
}
