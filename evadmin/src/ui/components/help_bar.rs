use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::i18n::current_language;
use crate::ui::theme;

/// Key hints for the current screen, with the active language code at the
/// right edge.
pub fn render_help_bar(f: &mut Frame, area: Rect, hints: &str) {
    let frame = Block::bordered().border_style(theme::muted_style());
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let [hint_area, language_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

    f.render_widget(
        Paragraph::new(hints)
            .style(theme::help_text_style())
            .centered(),
        hint_area,
    );
    f.render_widget(
        Paragraph::new(current_language().code().to_uppercase())
            .style(theme::muted_style())
            .right_aligned(),
        language_area,
    );
}
