//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use super::theme::{
    FORM_WIDTH_PERCENT, HELP_BAR_HEIGHT, NOTIFICATION_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT,
};

/// Areas of a standard screen, top to bottom
pub struct ScreenAreas {
    pub title: Rect,
    pub content: Rect,
    pub notification: Rect,
    pub help: Rect,
}

/// Standard screen layout with title, content area, notification line and help bar.
pub fn screen_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(NOTIFICATION_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        content: chunks[1],
        notification: chunks[2],
        help: chunks[3],
    }
}

/// Split a resource page into (form_area, table_area), form on the left.
pub fn form_and_table(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(FORM_WIDTH_PERCENT),
            Constraint::Percentage(100 - FORM_WIDTH_PERCENT),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Rectangle of `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - for simple confirmations
    pub const SMALL: (u16, u16) = (50, 30);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
