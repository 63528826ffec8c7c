//! The main menu & scoreboard screens.  Key presses and mouse clicks on
//! these screens are resolved into [`MenuCommand`]s for the game.
use crate::command::Command;
use crate::consts;
use crate::game::{Input, MenuCommand, Screen, Snapshot};
use crate::leaderboard::Slots;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect, Size},
    text::{Line, Span},
    widgets::Widget,
};

/// The buttons shown on a menu screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Button {
    Start,
    Scoreboard,
    Quit,
    ClearScores,
    MainMenu,
}

impl Button {
    fn label(self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Scoreboard => "Scoreboard",
            Button::Quit => "Quit",
            Button::ClearScores => "Clear Scores",
            Button::MainMenu => "Main Menu",
        }
    }

    /// The key that presses this button directly, and how it's shown
    fn hotkey(self) -> (Command, &'static str) {
        match self {
            Button::Start => (Command::P, "p"),
            Button::Scoreboard => (Command::B, "b"),
            Button::Quit => (Command::Q, "q"),
            Button::ClearScores => (Command::C, "c"),
            Button::MainMenu => (Command::M, "m"),
        }
    }

    pub(crate) fn command(self) -> MenuCommand {
        match self {
            Button::Start => MenuCommand::Start,
            Button::Scoreboard => MenuCommand::ShowScoreboard,
            Button::Quit => MenuCommand::Quit,
            Button::ClearScores => MenuCommand::ClearScores,
            Button::MainMenu => MenuCommand::ReturnToMenu,
        }
    }

    /// Render the button as a `Line`.  If `selected` is `true`, this is the
    /// currently-selected button.
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        line.push_span(self.label());
        line.push_span(" (");
        line.push_span(Span::styled(self.hotkey().1, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

/// Return the buttons shown on `screen`, top to bottom
pub(crate) fn buttons(screen: Screen, scoreboard_enabled: bool) -> &'static [Button] {
    match screen {
        Screen::MainMenu if scoreboard_enabled => {
            &[Button::Start, Button::Scoreboard, Button::Quit]
        }
        Screen::MainMenu => &[Button::Start, Button::Quit],
        Screen::Scoreboard => &[Button::ClearScores, Button::MainMenu],
        _ => &[],
    }
}

/// Menu state: which button is selected
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Menu {
    selection: usize,
}

impl Menu {
    pub(crate) fn new() -> Menu {
        Menu::default()
    }

    /// Select the first button again.  Call whenever the screen changes.
    pub(crate) fn reset(&mut self) {
        self.selection = 0;
    }

    /// Handle a key press on a screen showing `buttons`.  Returns `Some` if a
    /// button was pressed.
    pub(crate) fn handle_command(
        &mut self,
        cmd: Command,
        buttons: &[Button],
    ) -> Option<MenuCommand> {
        let last = buttons.len().checked_sub(1)?;
        self.selection = self.selection.min(last);
        match cmd {
            Command::Up => self.selection = self.selection.saturating_sub(1),
            Command::Down => self.selection = self.selection.saturating_add(1).min(last),
            Command::Prev => {
                self.selection = self.selection.checked_sub(1).unwrap_or(last);
            }
            Command::Next => {
                self.selection = if self.selection == last {
                    0
                } else {
                    self.selection + 1
                };
            }
            Command::Home => self.selection = 0,
            Command::End => self.selection = last,
            Command::Enter | Command::Space => {
                return buttons.get(self.selection).copied().map(Button::command);
            }
            Command::Esc => {
                return buttons
                    .contains(&Button::MainMenu)
                    .then_some(MenuCommand::ReturnToMenu);
            }
            cmd => {
                return buttons
                    .iter()
                    .find(|b| b.hotkey().0 == cmd)
                    .copied()
                    .map(Button::command);
            }
        }
        None
    }

    /// Handle a pointer event on a screen drawn in `area`.  Hovering over a
    /// button selects it; a left-click on a button's row presses it.
    pub(crate) fn handle_pointer(
        &mut self,
        input: Input,
        area: Rect,
        screen: Screen,
        scoreboard_enabled: bool,
    ) -> Option<MenuCommand> {
        let (pos, press) = match input {
            Input::PointerDown { x, y } => (Position { x, y }, true),
            Input::PointerMove { x, y } => (Position { x, y }, false),
            _ => return None,
        };
        let layout = MenuLayout::new(area, screen, scoreboard_enabled);
        let (i, button) = layout
            .buttons
            .iter()
            .enumerate()
            .find_map(|(i, &(button, rect))| rect.contains(pos).then_some((i, button)))?;
        self.selection = i;
        press.then(|| button.command())
    }
}

/// Where everything on a menu screen goes
#[derive(Clone, Debug, Eq, PartialEq)]
struct MenuLayout {
    title: Rect,
    body: Rect,
    buttons: Vec<(Button, Rect)>,
    notice: Rect,
}

impl MenuLayout {
    const WIDTH: u16 = 48;

    fn new(area: Rect, screen: Screen, scoreboard_enabled: bool) -> MenuLayout {
        let buttons = buttons(screen, scoreboard_enabled);
        let body_height = match screen {
            Screen::Scoreboard => SCORE_ROWS,
            _ => u16::try_from(INSTRUCTIONS.len()).unwrap_or(u16::MAX),
        };
        let buttons_height = u16::try_from(buttons.len()).unwrap_or(u16::MAX);
        let heights = [1, body_height, buttons_height, 1];
        let total = heights
            .iter()
            .fold(3u16, |acc, &h| acc.saturating_add(h));
        let display = center_rect(area, Size::new(Self::WIDTH, total));
        let [title, body, buttons_area, notice] =
            Layout::vertical(heights).spacing(1).areas(display);
        let buttons = buttons.iter().copied().zip(buttons_area.rows()).collect();
        MenuLayout {
            title,
            body,
            buttons,
            notice,
        }
    }
}

static INSTRUCTIONS: &[&str] = &[
    "Steer with the arrow keys (or wasd / hjkl).",
    "Eat food to grow, and avoid obstacles and",
    "your own tail.  Ctrl-C quits at any time.",
];

/// Number of rows per column on the scoreboard
const SCORE_ROWS: u16 = 5;

/// A widget drawing the menu screen that `snapshot` is on
#[derive(Clone, Copy, Debug)]
pub(crate) struct MenuView<'a> {
    pub(crate) menu: &'a Menu,
    pub(crate) snapshot: &'a Snapshot<'a>,
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;
        let layout = MenuLayout::new(area, snapshot.screen, snapshot.scoreboard_enabled);
        match snapshot.screen {
            Screen::MainMenu => {
                Line::styled("S N A K E   E A T E R", consts::TITLE_STYLE)
                    .alignment(Alignment::Center)
                    .render(layout.title, buf);
                for (&text, row) in INSTRUCTIONS.iter().zip(layout.body.rows()) {
                    Line::from(text).render(row, buf);
                }
            }
            Screen::Scoreboard => {
                Line::styled("SCOREBOARD", consts::TITLE_STYLE)
                    .alignment(Alignment::Center)
                    .render(layout.title, buf);
                if let Some(slots) = snapshot.leaderboard {
                    render_scores(slots, layout.body, buf);
                }
            }
            _ => return,
        }
        for (i, &(button, rect)) in layout.buttons.iter().enumerate() {
            button.to_line(i == self.menu.selection).render(rect, buf);
        }
        if let Some(notice) = snapshot.notice {
            Line::styled(notice, consts::NOTICE_STYLE).render(layout.notice, buf);
        }
    }
}

/// Draw the leaderboard as two columns of ranks
fn render_scores(slots: &Slots, area: Rect, buf: &mut Buffer) {
    let columns = Layout::horizontal([Constraint::Fill(1); 2]).split(area);
    let per_column = usize::from(SCORE_ROWS);
    for (c, (chunk, &column)) in slots.chunks(per_column).zip(columns.iter()).enumerate() {
        for (i, (slot, row)) in chunk.iter().zip(column.rows()).enumerate() {
            let rank = c * per_column + i + 1;
            let score = slot.map_or_else(|| String::from("---"), |s| s.to_string());
            Line::from(format!("{rank:>4}. {score}")).render(row, buf);
        }
    }
}
