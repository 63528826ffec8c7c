use super::direction::Direction;
use super::grid::Cell;
use super::snake::Snake;
use crate::options::Options;
use std::collections::HashSet;
use std::time::Duration;

/// The state of one play session: a run of up to `lives` lives
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session {
    pub(super) lives: u32,

    /// Resets to 1 at the start of each life
    pub(super) level: u32,

    /// Score for the current life
    pub(super) score: u32,

    /// Sum of the scores of all finished lives
    pub(super) total: u32,

    /// Ticks per second
    pub(super) speed: f64,

    pub(super) snake: Snake,

    /// `None` only if there was no free cell left to put it in
    pub(super) food: Option<Cell>,

    pub(super) obstacles: HashSet<Cell>,

    /// Where the snake's head hit something at the end of the last life
    pub(super) collision: Option<Cell>,
}

impl Session {
    pub(crate) fn new(options: &Options) -> Session {
        Session {
            lives: options.lives,
            level: 1,
            score: 0,
            total: 0,
            speed: options.initial_speed,
            snake: Session::new_snake(options),
            food: None,
            obstacles: HashSet::new(),
            collision: None,
        }
    }

    fn new_snake(options: &Options) -> Snake {
        Snake::new(options.grid.center(), Direction::Up)
    }

    /// Clear the board for a new life, keeping lives & total score.  Placing
    /// the new life's obstacle & food is left to the caller.
    pub(super) fn reset_life(&mut self, options: &Options) {
        self.level = 1;
        self.score = 0;
        self.speed = options.initial_speed;
        self.snake = Session::new_snake(options);
        self.food = None;
        self.obstacles.clear();
        self.collision = None;
    }

    /// Bank the current life's score and use up a life.  Returns the number
    /// of lives left.
    pub(super) fn lose_life(&mut self, at: Cell) -> u32 {
        self.collision = Some(at);
        self.total = self.total.saturating_add(self.score);
        self.score = 0;
        self.lives = self.lives.saturating_sub(1);
        self.level = 1;
        self.snake.pending = None;
        self.lives
    }

    /// Record one food eaten: bump the score & speed.  Returns true if the
    /// snake's new length earns a level-up.
    pub(super) fn eat(&mut self, options: &Options) -> bool {
        self.score = self.score.saturating_add(1);
        self.speed += options.speed_step;
        if self.snake.len() % options.level_length == 0 {
            self.level = self.level.saturating_add(1);
            true
        } else {
            false
        }
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Options::tick_period(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session() {
        let opts = Options::default();
        let session = Session::new(&opts);
        assert_eq!(session.lives, 3);
        assert_eq!(session.level, 1);
        assert_eq!(session.score, 0);
        assert_eq!(session.total, 0);
        assert_eq!(session.snake.head(), Cell::new(30, 20));
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.direction(), Direction::Up);
        assert_eq!(session.tick_period(), Options::tick_period(15.0));
    }

    #[test]
    fn lose_life_banks_score() {
        let opts = Options::default();
        let mut session = Session::new(&opts);
        session.score = 7;
        session.level = 2;
        session.snake.direction = Direction::Left;
        assert_eq!(session.lose_life(Cell::new(3, 4)), 2);
        assert_eq!(session.total, 7);
        assert_eq!(session.score, 0);
        assert_eq!(session.level, 1);
        assert_eq!(session.collision, Some(Cell::new(3, 4)));
        // The dead snake keeps facing the way it crashed
        assert_eq!(session.snake.direction(), Direction::Left);
        session.score = 4;
        assert_eq!(session.lose_life(Cell::new(3, 4)), 1);
        assert_eq!(session.total, 11);
    }

    #[test]
    fn reset_life_keeps_totals() {
        let opts = Options::default();
        let mut session = Session::new(&opts);
        session.score = 3;
        session.speed = 16.5;
        session.obstacles.insert(Cell::new(1, 1));
        session.snake.direction = Direction::Right;
        let _ = session.lose_life(Cell::new(1, 1));
        session.reset_life(&opts);
        assert_eq!(session.snake.direction(), Direction::Up);
        assert!(session.snake.is_idle());
        assert_eq!(session.lives, 2);
        assert_eq!(session.total, 3);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.collision, None);
        assert!((session.speed - 15.0).abs() < f64::EPSILON);
    }
}
