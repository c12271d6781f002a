//! Modal frame shared by the confirmation and help popups.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Clear, Padding},
    Frame,
};

use crate::ui::layouts;

/// Clears a centered `(width_percent, height_percent)` box over `parent_area`,
/// draws its border and returns the padded area inside.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let (width_percent, height_percent) = size;
    let area = layouts::centered_popup(width_percent, height_percent, parent_area);

    let frame = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Line::from(format!(" {title} ")).centered())
        .padding(Padding::horizontal(1));
    let inner = frame.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(frame, area);
    inner
}
