use crate::command::{pointer_input, Command};
use crate::consts;
use crate::game::{CellSource, Game, Input, RandomCells, Screen};
use crate::menu::{self, Menu};
use crate::ui;
use crossterm::event::{poll, read, Event};
use rand::rngs::ThreadRng;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;

/// The terminal front end: runs the frame loop, feeding input & elapsed time
/// into the game and drawing it after every frame
#[derive(Clone, Debug)]
pub(crate) struct App<S = RandomCells<ThreadRng>> {
    game: Game<S>,
    menu: Menu,

    /// The screen the game was on as of the last check, for noticing when
    /// the menu selection needs to be reset
    screen: Screen,

    /// The area last drawn in, for hit-testing mouse clicks
    area: Rect,
}

impl<S: CellSource> App<S> {
    pub(crate) fn new(game: Game<S>) -> App<S> {
        App {
            screen: game.screen(),
            game,
            menu: Menu::new(),
            area: Rect::ZERO,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_update = Instant::now();
        while !self.game.terminated() {
            self.draw(&mut terminal)?;
            let deadline = last_update + consts::FRAME_PERIOD;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    break;
                }
                self.handle_event(read()?);
            }
            let now = Instant::now();
            self.game.update(now.saturating_duration_since(last_update));
            last_update = now;
            self.settle();
        }
        tracing::info!("Exiting");
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut area = self.area;
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &self.game.snapshot(), &self.menu);
        })?;
        self.area = area;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let screen = self.game.screen();
        let on_menu = matches!(screen, Screen::MainMenu | Screen::Scoreboard);
        let scoreboard = self.game.options().scoreboard;
        match event {
            Event::Key(_) => {
                let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event)
                else {
                    return;
                };
                if cmd == Command::Quit {
                    self.game.handle_input(Input::Quit);
                } else if on_menu {
                    if let Some(mc) = self
                        .menu
                        .handle_command(cmd, menu::buttons(screen, scoreboard))
                    {
                        self.game.command(mc);
                    }
                } else if let Some(key) = cmd.as_key() {
                    self.game.handle_input(Input::KeyDown(key));
                }
            }
            Event::Mouse(ev) => {
                let Some(input) = pointer_input(ev) else {
                    return;
                };
                if on_menu {
                    if let Some(mc) = self.menu.handle_pointer(input, self.area, screen, scoreboard)
                    {
                        self.game.command(mc);
                    }
                } else {
                    self.game.handle_input(input);
                }
            }
            _ => (),
        }
        self.settle();
    }

    /// Pass on the game's cues and reset the menu if the screen changed
    fn settle(&mut self) {
        // There is no audio output, so cues only go to the log
        for cue in self.game.take_cues() {
            tracing::debug!(?cue, "Cue");
        }
        let screen = self.game.screen();
        if screen != self.screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "Screen changed");
            self.screen = screen;
            self.menu.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::leaderboard::Leaderboard;
    use crate::options::Options;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Game::new(Options::default(), Leaderboard::in_memory()))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn start_from_keyboard() {
        let mut app = app();
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Up));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.game.screen(), Screen::Playing);
        assert_eq!(app.screen, Screen::Playing);
        app.handle_event(key(KeyCode::Left));
        app.game.tick();
        assert_eq!(app.game.snapshot().snake.direction(), Direction::Left);
    }

    #[test]
    fn menu_selection_resets_between_screens() {
        let mut app = app();
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.game.screen(), Screen::Scoreboard);
        // "Clear Scores" is selected, not the second button
        assert_eq!(app.menu, Menu::new());
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.game.screen(), Screen::MainMenu);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('p')));
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.game.terminated());
    }

    #[test]
    fn q_on_main_menu_quits() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.game.terminated());
    }

    #[test]
    fn click_scoreboard_button() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(screen_text(&terminal).contains("Scoreboard (b)"));
        let buf = terminal.backend().buffer().clone();
        let (x, y) = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "S" && buf[(x + 1, y)].symbol() == "c")
            .unwrap();
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.game.screen(), Screen::Scoreboard);
        app.draw(&mut terminal).unwrap();
        assert!(screen_text(&terminal).contains("SCOREBOARD"));
        assert!(screen_text(&terminal).contains("1. ---"));
    }

    #[test]
    fn draw_board() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        app.handle_event(key(KeyCode::Char('p')));
        app.draw(&mut terminal).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Score: 0 | Total: 0 | Lives: 3 | Level: 1"));
        assert!(text.contains("Press an arrow key to start moving"));
    }
}
