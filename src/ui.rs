use crate::consts;
use crate::game::{Cell, Direction, Screen, Snapshot};
use crate::menu::{Menu, MenuView};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

/// Draw whatever screen the game is on
pub(crate) fn draw(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, menu: &Menu) {
    match snapshot.screen {
        Screen::MainMenu | Screen::Scoreboard => frame.render_widget(
            MenuView {
                menu,
                snapshot,
            },
            frame.area(),
        ),
        Screen::Playing | Screen::LifeLost | Screen::GameOver => {
            frame.render_widget(Board(snapshot), frame.area());
        }
        Screen::Terminated => (),
    }
}

/// A widget drawing the playing field with the score bar above it and, once
/// the game is over, the options for what to do next below it
#[derive(Clone, Copy, Debug)]
struct Board<'a>(&'a Snapshot<'a>);

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.0;
        let field_size = Size::new(
            snap.grid.width().saturating_add(2),
            snap.grid.height().saturating_add(2),
        );
        let display = center_rect(
            area,
            Size::new(area.width, field_size.height.saturating_add(4)),
        );
        let [score_area, field_area, msg1_area, msg2_area, msg3_area] =
            Layout::vertical([1, field_size.height, 1, 1, 1]).areas(display);
        let score_area = center_rect(score_area, Size::new(field_size.width, 1));
        let field_area = center_rect(field_area, field_size);
        Line::styled(
            format!(
                " Score: {} | Total: {} | Lives: {} | Level: {}",
                snap.score, snap.total, snap.lives, snap.level
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        // The field wraps around at the edges, so the border is dotted
        DottedBorder.render(field_area, buf);
        let mut canvas = Canvas {
            area: Rect {
                x: field_area.x.saturating_add(1),
                y: field_area.y.saturating_add(1),
                width: snap.grid.width(),
                height: snap.grid.height(),
            }
            .intersection(field_area),
            buf,
        };
        let snake = snap.snake;
        if snake.len() > 1 {
            for cell in snake.cells().skip(1) {
                canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
            canvas.draw_cell(snake.tail(), consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = snap.food {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &cell in snap.obstacles {
            canvas.draw_cell(cell, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        canvas.draw_cell(snake.head(), head_symbol(snake.direction()), consts::SNAKE_STYLE);
        // Drawn last so that it covers whatever the snake ran into
        if let Some(cell) = snap.collision {
            canvas.draw_cell(cell, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        if snap.screen == Screen::GameOver {
            Line::from(format!("GAME OVER  Final score: {}", snap.total))
                .style(consts::TITLE_STYLE)
                .alignment(Alignment::Center)
                .render(msg1_area, buf);
            Line::from_iter([
                Span::raw("Choose One: Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") / Main Menu ("),
                Span::styled("m", consts::KEY_STYLE),
                Span::raw(") / Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .alignment(Alignment::Center)
            .render(msg2_area, buf);
        } else if snake.is_idle() {
            Line::from("Press an arrow key to start moving")
                .alignment(Alignment::Center)
                .render(msg1_area, buf);
        }
        if let Some(notice) = snap.notice {
            Line::styled(notice, consts::NOTICE_STYLE)
                .alignment(Alignment::Center)
                .render(msg3_area, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Grid-relative drawing onto a buffer
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn position(&self, x: u16, y: u16) -> Option<Position> {
        let pos = Position {
            x: self.area.x.checked_add(x)?,
            y: self.area.y.checked_add(y)?,
        };
        self.area.contains(pos).then_some(pos)
    }

    fn draw_char(&mut self, x: u16, y: u16, symbol: char) {
        if let Some(cell) = self.position(x, y).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, at: Cell, symbol: char, style: Style) {
        if let Some(cell) = self.position(at.x, at.y).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.width.saturating_sub(1);
        let max_y = area.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        for (x, y) in [(0, 0), (max_x, 0), (max_x, max_y), (0, max_y)] {
            canvas.draw_char(x, y, '·');
        }
        for x in 1..max_x {
            canvas.draw_char(x, 0, '⋯');
            canvas.draw_char(x, max_y, '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(0, y, '⋮');
            canvas.draw_char(max_x, y, '⋮');
        }
    }
}
