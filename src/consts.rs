//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default width of the playing field, in cells
pub(crate) const GRID_WIDTH: u16 = 60;

/// Default height of the playing field, in cells
pub(crate) const GRID_HEIGHT: u16 = 40;

/// Default number of lives per session
pub(crate) const LIVES: u32 = 3;

/// Default ticks per second at the start of each life
pub(crate) const INITIAL_SPEED: f64 = 15.0;

/// Slowest allowed starting speed, in ticks per second
pub(crate) const MIN_SPEED: f64 = 0.01;

/// Default increase in ticks per second for each food eaten
pub(crate) const SPEED_STEP: f64 = 0.5;

/// By default, the level goes up every time the snake's length reaches a
/// multiple of this
pub(crate) const LEVEL_LENGTH: usize = 5;

/// Default minimum distance, on each axis, between a new obstacle and the
/// snake's head
pub(crate) const SAFE_DISTANCE: u16 = 3;

/// Default number of random cells to try before giving up on placing an
/// obstacle
pub(crate) const PLACEMENT_ATTEMPTS: u32 = 1000;

/// Number of ranked slots on the leaderboard
pub(crate) const LEADERBOARD_SLOTS: usize = 10;

/// Time between redraws of the screen
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the end of the snake's tail
pub(crate) const SNAKE_TAIL_SYMBOL: char = '∙';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles (bombs)
pub(crate) const OBSTACLE_SYMBOL: char = '✱';

/// Glyph for the cell where the snake's head hit something
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu button
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the game title & screen headings
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for error notices
pub(crate) const NOTICE_STYLE: Style = Style::new().fg(Color::Yellow);
