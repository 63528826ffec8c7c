use super::direction::Direction;
use super::grid::{Cell, Grid};
use std::collections::VecDeque;

/// Snake state
///
/// A new snake is one cell long and sits still until it is first given a
/// direction to move in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the snake, from the tail up to the cell
    /// just behind the head
    pub(super) body: VecDeque<Cell>,

    /// The committed direction, i.e., the one the snake moved in on the last
    /// tick (or will move in on its first tick)
    pub(super) direction: Direction,

    /// A turn accepted since the last tick, to be committed on the next one
    pub(super) pending: Option<Direction>,

    /// Whether the snake has started moving yet
    pub(super) moving: bool,
}

impl Snake {
    /// Create a new stationary one-cell snake at `head`, facing `direction`
    pub(crate) fn new(head: Cell, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            direction,
            pending: None,
            moving: false,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// The oldest cell of the snake.  For a one-cell snake, this is the head.
    pub(crate) fn tail(&self) -> Cell {
        self.body.front().copied().unwrap_or(self.head)
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the snake's cells from tail to head
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied().chain(std::iter::once(self.head))
    }

    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// True if the snake hasn't started moving and has no turn queued
    pub(crate) fn is_idle(&self) -> bool {
        !self.moving && self.pending.is_none()
    }

    /// Queue a change of direction for the next tick.  The turn is ignored if
    /// another turn is already queued or if it would reverse the committed
    /// direction.  Returns whether the turn was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if self.pending.is_some() || direction == self.direction.reverse() {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Commit any queued turn.  Returns `true` if the snake should move on
    /// this tick.
    pub(crate) fn commit_turn(&mut self) -> bool {
        if let Some(d) = self.pending.take() {
            self.direction = d;
            self.moving = true;
        }
        self.moving
    }

    /// Compute where the head would be after one step in `direction` without
    /// changing anything
    pub(crate) fn propose_move(&self, direction: Direction, grid: Grid) -> Cell {
        direction.advance(self.head, grid)
    }

    /// Move the head to `new_head`.  Unless `grow` is true, the tail cell is
    /// dropped so that the length stays the same.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_back(self.head);
        self.head = new_head;
        if !grow {
            let _ = self.body.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(60, 40).unwrap()
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Cell::new(30, 20), Direction::Up);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(30, 20));
        assert_eq!(snake.tail(), Cell::new(30, 20));
        assert!(snake.is_idle());
        assert_eq!(snake.cells().collect::<Vec<_>>(), [Cell::new(30, 20)]);
    }

    #[test]
    fn propose_move_does_not_mutate() {
        let snake = Snake::new(Cell::new(30, 20), Direction::Up);
        let before = snake.clone();
        assert_eq!(
            snake.propose_move(Direction::Right, grid()),
            Cell::new(31, 20)
        );
        assert_eq!(snake, before);
    }

    #[test]
    fn toroidal_moves() {
        let snake = Snake::new(Cell::new(59, 7), Direction::Up);
        assert_eq!(snake.propose_move(Direction::Right, grid()), Cell::new(0, 7));
        let snake = Snake::new(Cell::new(7, 39), Direction::Up);
        assert_eq!(snake.propose_move(Direction::Down, grid()), Cell::new(7, 0));
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.advance(Cell::new(6, 5), true);
        snake.advance(Cell::new(7, 5), false);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(6, 5), Cell::new(7, 5)]
        );
        assert_eq!(snake.tail(), Cell::new(6, 5));
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.advance(Cell::new(6, 5), true);
        snake.advance(Cell::new(7, 5), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(5, 5), Cell::new(6, 5), Cell::new(7, 5)]
        );
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(!snake.occupies(Cell::new(8, 5)));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        assert!(!snake.turn(Direction::Left));
        assert!(snake.turn(Direction::Up));
        assert!(snake.commit_turn());
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn one_turn_per_tick() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.moving = true;
        assert!(snake.turn(Direction::Up));
        // Not a reversal of the committed direction, but a turn is already
        // queued
        assert!(!snake.turn(Direction::Down));
        assert!(snake.commit_turn());
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.turn(Direction::Down));
        assert!(snake.turn(Direction::Left));
    }

    #[test]
    fn idle_until_first_turn() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        assert!(!snake.commit_turn());
        assert!(!snake.turn(Direction::Down));
        assert!(snake.is_idle());
        assert!(snake.turn(Direction::Left));
        assert!(!snake.is_idle());
        assert!(snake.commit_turn());
        assert!(snake.commit_turn());
        assert_eq!(snake.direction(), Direction::Left);
    }
}
