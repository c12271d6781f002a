//! Placeholders shown in place of a table that has no rows to draw.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Nothing stored yet.
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, hint: Option<&str>) {
    render_placeholder(f, area, title, message, theme::muted_style(), hint);
}

/// The first load is still running.
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    render_placeholder(f, area, title, message, theme::loading_style(), None);
}

/// The load failed. Distinct from an empty result.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, message: &str, hint: Option<&str>) {
    render_placeholder(f, area, title, message, theme::error_style(), hint);
}

fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let frame = Block::bordered().title(format!(" {title} "));
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let mut lines = vec![Line::styled(message, style)];
    if let Some(hint) = hint {
        lines.push(Line::default());
        lines.push(Line::styled(hint, theme::help_text_style()));
    }

    let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16 + 1)])
        .flex(Flex::Center)
        .areas(inner);
    f.render_widget(
        Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
        middle,
    );
}
