//! Logs panel component
//!
//! Tail of the captured tracing output, newest at the bottom, color-coded by level.

use crate::logging::{LogBuffer, LogEntry};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry for display
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" System Logs ({}) ", buffer.len()));

    let visible = block.inner(area).height as usize;
    let items: Vec<ListItem> = buffer
        .recent(visible)
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                format_log_entry(entry),
                Style::default().fg(theme.log_level(entry.level)),
            )))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format_is_time_level_message() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).unwrap(),
            level: LogLevel::Warn,
            message: "Analysis #3 failed".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "13:04:05 WARN  Analysis #3 failed");
    }
}
