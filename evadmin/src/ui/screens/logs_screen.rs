use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};
use tracing::Level;

use crate::i18n::t;
use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts::ScreenAreas,
    theme, utils,
};

pub fn render(f: &mut Frame, areas: &ScreenAreas, state: &LogsState, log_buffer: &LogBuffer) {
    let title = format!("{} ({})", t().nav.logs, state.total_entries);
    screen_title::render_screen_title(f, areas.title, &title, None);

    render_logs(f, areas.content, state, log_buffer);

    let help_text = if state.scroll_offset > 0 {
        format!("{} (+{})", t().help.logs_bar, state.scroll_offset)
    } else {
        t().help.logs_bar.to_string()
    };
    help_bar::render_help_bar(f, areas.help, &help_text);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let total = log_buffer.len();
    if total == 0 {
        empty_state::render_empty_state(f, area, t().nav.logs, "-", None);
        return;
    }

    // Scrolling from bottom, newest at bottom; borders and header take 4 rows
    let inner_height = area.height.saturating_sub(4) as usize;
    let end = total.saturating_sub(state.scroll_offset);
    let start = end.saturating_sub(inner_height);

    let rows: Vec<Row> = log_buffer
        .window(start, end)
        .into_iter()
        .map(|entry| {
            let (label, style) = level_label(entry.level);
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                label.to_string(),
                utils::truncate(&entry.target, 25),
                entry.message,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(25),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {} [{}-{}/{}] ",
            t().nav.logs,
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn level_label(level: Level) -> (&'static str, Style) {
    match level {
        Level::ERROR => ("ERROR", theme::error_style()),
        Level::WARN => ("WARN ", theme::loading_style()),
        Level::INFO => ("INFO ", Style::default().fg(theme::COLOR_SUCCESS)),
        Level::DEBUG => ("DEBUG", Style::default().fg(theme::COLOR_INFO)),
        Level::TRACE => ("TRACE", theme::muted_style()),
    }
}
