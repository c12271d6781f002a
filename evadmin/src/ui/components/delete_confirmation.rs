use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use evadmin_api::{RecordId, ResourceKind};

use crate::i18n::{fill, resource_name, t};
use crate::ui::{layouts, theme};

/// Render a confirmation popup for deleting one record
pub fn render_delete_confirmation(f: &mut Frame, kind: ResourceKind, id: &RecordId) {
    let texts = &t().confirm;
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        texts.title,
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Warning message
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let message = fill(
        texts.message,
        &[("resource", resource_name(kind)), ("id", id.as_str())],
    );
    let warning = Paragraph::new(message)
        .style(theme::loading_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(warning, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(
            texts.yes,
            Style::default()
                .fg(theme::COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled(
            texts.no,
            Style::default()
                .fg(theme::COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled("[Esc]", theme::help_text_style()),
        Span::raw(texts.cancel),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[2],
    );
}
