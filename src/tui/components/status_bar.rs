// Status bar component
//
// Key hints for the current focus plus the panel state.

use crate::presenter::shortcuts::Focus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Hint text for a focus and width
pub fn hints(focus: Focus, bp: Breakpoint) -> &'static str {
    match (focus, bp) {
        (Focus::Input, Breakpoint::Compact) => "^⏎ analyze │ Esc clear │ ^Q quit",
        (Focus::Result, Breakpoint::Compact) => "↑↓ scroll │ ^Y copy │ ^Q quit",
        (Focus::Input, _) => {
            "Ctrl+Enter/F5 analyze │ Alt+S sample │ Esc clear │ Tab results │ F2 logs │ Ctrl+Q quit"
        }
        (Focus::Result, _) => {
            "↑↓ scroll │ Ctrl+Y copy │ Esc clear │ Tab input │ F2 logs │ Ctrl+Q quit"
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let hint = hints(app.presenter.focus(), bp);

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(" {} │ {}", app.presenter.ui_state().name(), hint)
    } else {
        format!(" {}", hint)
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
