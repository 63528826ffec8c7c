mod cells;
mod clock;
mod direction;
mod events;
mod grid;
mod obstacles;
mod rules;
mod session;
mod snake;
pub(crate) use self::cells::{CellSource, RandomCells};
use self::clock::TickClock;
pub(crate) use self::direction::Direction;
pub(crate) use self::events::{Cue, Input, Key, MenuCommand, Screen};
pub(crate) use self::grid::{Cell, Grid};
use self::obstacles::Placer;
use self::rules::Outcome;
pub(crate) use self::session::Session;
pub(crate) use self::snake::Snake;
use crate::leaderboard::{Leaderboard, Slots};
use crate::options::Options;
use crate::util::error_chain;
use std::collections::HashSet;
use std::time::Duration;

/// The game state machine: menus, play sessions, and the leaderboard.
///
/// The front end feeds in [`Input`]s, [`MenuCommand`]s, and elapsed frame
/// time, and reads back a [`Snapshot`] to draw and [`Cue`]s to play.
#[derive(Clone, Debug)]
pub(crate) struct Game<S = RandomCells<rand::rngs::ThreadRng>> {
    options: Options,
    placer: Placer,
    cells: S,
    leaderboard: Leaderboard,
    screen: Screen,
    session: Session,
    clock: TickClock,
    cues: Vec<Cue>,

    /// A problem to show to the user, such as a failure to save the
    /// leaderboard
    notice: Option<String>,
}

impl Game<RandomCells<rand::rngs::ThreadRng>> {
    pub(crate) fn new(options: Options, leaderboard: Leaderboard) -> Self {
        let cells = RandomCells::new(options.grid, rand::rng());
        Game::with_cells(options, leaderboard, cells)
    }
}

impl<S: CellSource> Game<S> {
    pub(crate) fn with_cells(options: Options, leaderboard: Leaderboard, cells: S) -> Game<S> {
        Game {
            placer: Placer::from(&options),
            session: Session::new(&options),
            options,
            cells,
            leaderboard,
            screen: Screen::MainMenu,
            clock: TickClock::new(),
            cues: Vec::new(),
            notice: None,
        }
    }

    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }

    pub(crate) fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn terminated(&self) -> bool {
        self.screen == Screen::Terminated
    }

    /// Handle a raw input event.  Only direction keys (while playing) and
    /// R/Q/M (after game over) mean anything here; menu buttons are resolved
    /// into [`MenuCommand`]s by the front end.
    pub(crate) fn handle_input(&mut self, input: Input) {
        match (self.screen, input) {
            (_, Input::Quit) => self.quit(),
            (Screen::Playing, Input::KeyDown(key)) => {
                if let Some(d) = key.direction() {
                    if !self.session.snake.turn(d) {
                        tracing::trace!(?d, "Turn ignored");
                    }
                }
            }
            (Screen::GameOver, Input::KeyDown(Key::R)) => self.start_session(),
            (Screen::GameOver, Input::KeyDown(Key::M)) => self.return_to_menu(),
            (Screen::GameOver, Input::KeyDown(Key::Q)) => self.quit(),
            _ => (),
        }
    }

    /// Carry out a command from the menu layer.  Commands that don't apply
    /// to the current screen are ignored.
    pub(crate) fn command(&mut self, cmd: MenuCommand) {
        match (self.screen, cmd) {
            (_, MenuCommand::Quit) => {
                self.cues.push(Cue::ButtonPress);
                self.quit();
            }
            (Screen::MainMenu, MenuCommand::Start) => {
                self.cues.push(Cue::ButtonPress);
                self.start_session();
            }
            (Screen::MainMenu, MenuCommand::ShowScoreboard) if self.options.scoreboard => {
                self.cues.push(Cue::ButtonPress);
                self.cues.push(Cue::Win);
                self.screen = Screen::Scoreboard;
            }
            (Screen::Scoreboard, MenuCommand::ClearScores) => {
                self.cues.push(Cue::ButtonPress);
                tracing::info!("Clearing leaderboard");
                if let Err(e) = self.leaderboard.clear() {
                    self.report(&e);
                }
            }
            (Screen::Scoreboard | Screen::GameOver, MenuCommand::ReturnToMenu) => {
                self.cues.push(Cue::ButtonPress);
                self.return_to_menu();
            }
            (screen, cmd) => tracing::debug!(?screen, ?cmd, "Ignoring menu command"),
        }
    }

    /// Advance the game by `elapsed` of real time.  Call once per frame.
    pub(crate) fn update(&mut self, elapsed: Duration) {
        match self.screen {
            Screen::LifeLost => {
                self.start_life();
                self.screen = Screen::Playing;
            }
            Screen::Playing => {
                if self.session.snake.is_idle() {
                    self.clock.reset();
                } else if self.clock.advance(elapsed, self.session.tick_period()) {
                    self.tick();
                }
            }
            _ => (),
        }
    }

    /// Run one simulation step: move the snake one cell and deal with
    /// whatever it runs into
    pub(crate) fn tick(&mut self) {
        if self.screen != Screen::Playing || !self.session.snake.commit_turn() {
            return;
        }
        let snake = &self.session.snake;
        let new_head = snake.propose_move(snake.direction(), self.options.grid);
        let outcome = rules::classify(
            new_head,
            snake,
            &self.session.obstacles,
            self.session.food,
        );
        if outcome.is_fatal() {
            self.lose_life(outcome, new_head);
            return;
        }
        self.session.snake.advance(new_head, outcome.food_eaten);
        if outcome.food_eaten {
            self.eat();
        }
    }

    fn eat(&mut self) {
        self.cues.push(Cue::FoodEaten);
        let level_up = self.session.eat(&self.options);
        tracing::debug!(
            score = self.session.score,
            length = self.session.snake.len(),
            "Food eaten"
        );
        self.session.food =
            self.placer
                .place_food(&mut self.cells, &self.session.obstacles, &self.session.snake);
        if level_up {
            tracing::info!(level = self.session.level, "Level up");
            self.add_obstacle();
        }
    }

    /// Place one more obstacle, keeping clear of the snake's head.  If there
    /// is no room, the obstacle is skipped.
    fn add_obstacle(&mut self) {
        match self.placer.place_obstacle(
            &mut self.cells,
            &self.session.obstacles,
            &self.session.snake,
            self.session.food,
            self.session.snake.head(),
        ) {
            Ok(cell) => {
                tracing::debug!(%cell, "Placed obstacle");
                self.session.obstacles.insert(cell);
            }
            Err(e) => tracing::warn!("Skipping obstacle placement: {e}"),
        }
    }

    fn start_session(&mut self) {
        tracing::info!("Starting new session");
        self.session = Session::new(&self.options);
        self.start_life();
        self.screen = Screen::Playing;
    }

    fn start_life(&mut self) {
        self.session.reset_life(&self.options);
        self.add_obstacle();
        self.session.food =
            self.placer
                .place_food(&mut self.cells, &self.session.obstacles, &self.session.snake);
        self.clock.reset();
    }

    fn lose_life(&mut self, outcome: Outcome, at: Cell) {
        if self.options.collision_cues {
            if outcome.self_collision {
                self.cues.push(Cue::SelfCollision);
            }
            if outcome.obstacle_collision {
                self.cues.push(Cue::ObstacleCollision);
            }
        }
        let lives = self.session.lose_life(at);
        tracing::info!(
            lives,
            total = self.session.total,
            self_collision = outcome.self_collision,
            obstacle_collision = outcome.obstacle_collision,
            "Life lost at {at}"
        );
        if lives > 0 {
            self.screen = Screen::LifeLost;
        } else {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        let total = self.session.total;
        tracing::info!(total, "Game over");
        self.cues.push(Cue::GameOver);
        self.screen = Screen::GameOver;
        if self.options.scoreboard {
            if let Err(e) = self.leaderboard.record(total) {
                self.report(&e);
            }
        }
    }

    fn return_to_menu(&mut self) {
        self.session = Session::new(&self.options);
        self.screen = Screen::MainMenu;
    }

    /// Stop the program.  A life in progress is abandoned without touching
    /// the leaderboard.
    fn quit(&mut self) {
        if self.screen == Screen::Playing {
            tracing::info!(
                score = self.session.score,
                total = self.session.total,
                "Quitting mid-session; score not recorded"
            );
        }
        self.screen = Screen::Terminated;
    }

    fn report(&mut self, e: &dyn std::error::Error) {
        let msg = error_chain(e);
        tracing::error!("{msg}");
        self.notice = Some(msg);
    }
}

impl<S> Game<S> {
    /// Take the cues emitted since the last call
    pub(crate) fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// A read-only view of everything the front end needs to draw
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            screen: self.screen,
            grid: self.options.grid,
            snake: &self.session.snake,
            obstacles: &self.session.obstacles,
            food: self.session.food,
            collision: self.session.collision,
            score: self.session.score,
            total: self.session.total,
            lives: self.session.lives,
            level: self.session.level,
            leaderboard: (self.screen == Screen::Scoreboard).then_some(self.leaderboard.slots()),
            scoreboard_enabled: self.options.scoreboard,
            notice: self.notice.as_deref(),
        }
    }
}

/// What the game looks like right now
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) screen: Screen,
    pub(crate) grid: Grid,
    pub(crate) snake: &'a Snake,
    pub(crate) obstacles: &'a HashSet<Cell>,
    pub(crate) food: Option<Cell>,
    pub(crate) collision: Option<Cell>,
    pub(crate) score: u32,
    pub(crate) total: u32,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    /// The leaderboard's slots, present only on the scoreboard screen
    pub(crate) leaderboard: Option<&'a Slots>,
    pub(crate) scoreboard_enabled: bool,
    pub(crate) notice: Option<&'a str>,
}
