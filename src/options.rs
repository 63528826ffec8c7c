use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Gameplay options, read from the `[game]` table of the configuration file
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "RawOptions")]
pub(crate) struct Options {
    /// Size of the playing field
    pub(crate) grid: Grid,

    /// Number of lives in a session
    pub(crate) lives: u32,

    /// Ticks per second at the start of each life
    pub(crate) initial_speed: f64,

    /// Increase in ticks per second for each food eaten
    pub(crate) speed_step: f64,

    /// The level goes up each time the snake's length reaches a multiple of
    /// this
    pub(crate) level_length: usize,

    /// Minimum distance, on each axis, between a new obstacle and the snake's
    /// head
    pub(crate) safe_distance: u16,

    /// Number of random cells to try when placing an obstacle or food
    pub(crate) placement_attempts: u32,

    /// Whether to keep a leaderboard & offer the scoreboard screen
    pub(crate) scoreboard: bool,

    /// Whether to emit separate cues for self- and obstacle-collisions
    pub(crate) collision_cues: bool,
}

impl Options {
    /// Time between ticks at the given speed
    pub(crate) fn tick_period(speed: f64) -> Duration {
        Duration::from_secs_f64(speed.recip())
    }
}

impl Default for Options {
    fn default() -> Options {
        RawOptions::default()
            .try_into()
            .expect("default options should be valid")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawOptions {
    width: u16,
    height: u16,
    lives: u32,
    initial_speed: f64,
    speed_step: f64,
    level_length: usize,
    safe_distance: u16,
    placement_attempts: u32,
    scoreboard: bool,
    collision_cues: bool,
}

impl Default for RawOptions {
    fn default() -> RawOptions {
        RawOptions {
            width: consts::GRID_WIDTH,
            height: consts::GRID_HEIGHT,
            lives: consts::LIVES,
            initial_speed: consts::INITIAL_SPEED,
            speed_step: consts::SPEED_STEP,
            level_length: consts::LEVEL_LENGTH,
            safe_distance: consts::SAFE_DISTANCE,
            placement_attempts: consts::PLACEMENT_ATTEMPTS,
            scoreboard: true,
            collision_cues: true,
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(value: RawOptions) -> Result<Options, OptionsError> {
        let grid = Grid::new(value.width, value.height).ok_or(OptionsError::EmptyGrid)?;
        if value.lives == 0 {
            return Err(OptionsError::NoLives);
        }
        if !(value.initial_speed.is_finite() && value.initial_speed >= consts::MIN_SPEED) {
            return Err(OptionsError::Speed);
        }
        if !(value.speed_step.is_finite() && value.speed_step >= 0.0) {
            return Err(OptionsError::SpeedStep);
        }
        if value.level_length == 0 {
            return Err(OptionsError::LevelLength);
        }
        if value.placement_attempts == 0 {
            return Err(OptionsError::Attempts);
        }
        Ok(Options {
            grid,
            lives: value.lives,
            initial_speed: value.initial_speed,
            speed_step: value.speed_step,
            level_length: value.level_length,
            safe_distance: value.safe_distance,
            placement_attempts: value.placement_attempts,
            scoreboard: value.scoreboard,
            collision_cues: value.collision_cues,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("width and height must both be at least 1")]
    EmptyGrid,
    #[error("lives must be at least 1")]
    NoLives,
    #[error("initial-speed must be a number no less than {}", consts::MIN_SPEED)]
    Speed,
    #[error("speed-step must be a non-negative number")]
    SpeedStep,
    #[error("level-length must be at least 1")]
    LevelLength,
    #[error("placement-attempts must be at least 1")]
    Attempts,
}
