// Title bar component
//
// App name with a spinner while a request is in flight, classifier target on the right.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = if app.presenter.is_pending() {
        format!(" {} analyzing", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" ◉ moodscope · emotion analyzer{}", indicator);

    let target = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        format!(" {} @ {} ", app.classifier_name, app.endpoint)
    } else {
        format!(" {} ", app.classifier_name)
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(
                    Line::from(target)
                        .style(Style::default().fg(app.theme.muted))
                        .right_aligned(),
                ),
        );

    f.render_widget(title, area);
}
