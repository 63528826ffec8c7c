//! Everything that crosses the boundary between the game and its front end
use super::direction::Direction;

/// An input event, independent of any particular UI toolkit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// The user wants out, right now
    Quit,
    KeyDown(Key),
    PointerDown { x: u16, y: u16 },
    PointerMove { x: u16, y: u16 },
    PointerUp { x: u16, y: u16 },
}

/// The keys the game itself responds to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Left,
    Right,
    Up,
    Down,
    R,
    Q,
    M,
}

impl Key {
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::R | Key::Q | Key::M => None,
        }
    }
}

/// Commands produced by the menu layer in response to button presses
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MenuCommand {
    Start,
    ShowScoreboard,
    ClearScores,
    ReturnToMenu,
    Quit,
}

/// Discrete events for an audio layer to turn into sounds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    FoodEaten,
    SelfCollision,
    ObstacleCollision,
    GameOver,
    /// The scoreboard was opened
    Win,
    ButtonPress,
}

/// The high-level state of the game
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Screen {
    #[default]
    MainMenu,
    Scoreboard,
    Playing,
    /// The snake just died but there are lives left.  The next update starts
    /// a new life.
    LifeLost,
    GameOver,
    /// The program should exit
    Terminated,
}
