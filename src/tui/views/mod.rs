// Views module - frame layout
//
// [title] [input | result] [logs?] [status], with the toast overlay on top.
// Wide terminals put input and result side by side; narrower ones stack them.

use super::app::App;
use super::components::{input_panel, logs_panel, result_panel, status_bar, title_bar, toast};
use super::layout::Breakpoint;
use crate::presenter::shortcuts::Focus;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, area);

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    title_bar::render(f, chunks[0], app);

    let bp = Breakpoint::from_width(area.width);
    let (direction, split) = if bp.side_by_side() {
        (Direction::Horizontal, [Constraint::Percentage(45), Constraint::Percentage(55)])
    } else {
        (Direction::Vertical, [Constraint::Percentage(40), Constraint::Percentage(60)])
    };
    let content = Layout::default()
        .direction(direction)
        .constraints(split)
        .split(chunks[1]);

    let focus = app.presenter.focus();
    input_panel::render(
        f,
        content[0],
        app.presenter.input(),
        &app.theme,
        focus == Focus::Input,
    );
    result_panel::render(f, content[1], app, focus == Focus::Result);

    if app.show_logs {
        logs_panel::render(f, chunks[2], &app.log_buffer, &app.theme);
    }

    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(current) = app.presenter.notifier().current() {
        toast::render(f, area, current, &app.theme);
    }
}
