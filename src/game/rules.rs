//! Classification of what happens when the snake's head enters a cell
use super::grid::Cell;
use super::snake::Snake;
use std::collections::HashSet;

/// The result of moving the snake's head into a new cell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Outcome {
    /// The head ran into the snake's own body
    pub(crate) self_collision: bool,

    /// The head ran into an obstacle
    pub(crate) obstacle_collision: bool,

    /// The head reached the food.  Never set together with a collision.
    pub(crate) food_eaten: bool,
}

impl Outcome {
    /// Does this outcome end the current life?
    pub(crate) fn is_fatal(self) -> bool {
        self.self_collision || self.obstacle_collision
    }
}

/// Classify a move of `snake`'s head to `new_head`, before the move is
/// applied.
///
/// Collisions take precedence over eating.  Self- and obstacle-collisions are
/// checked independently, so both can be reported for the same move.  When
/// the snake is not about to grow, its tail cell is vacated by the same move
/// and is not counted as part of the body.
pub(crate) fn classify(
    new_head: Cell,
    snake: &Snake,
    obstacles: &HashSet<Cell>,
    food: Option<Cell>,
) -> Outcome {
    let reaches_food = food == Some(new_head);
    let self_collision = snake
        .cells()
        .skip(usize::from(!reaches_food))
        .any(|c| c == new_head);
    let obstacle_collision = obstacles.contains(&new_head);
    Outcome {
        self_collision,
        obstacle_collision,
        food_eaten: reaches_food && !self_collision && !obstacle_collision,
    }
}
