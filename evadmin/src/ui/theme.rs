//! Centralized theme constants and style functions for consistent UI styling.

use ratatui::style::{Color, Modifier, Style};

use crate::state::notification::NotificationLevel;

// =============================================================================
// Colors
// =============================================================================

pub const COLOR_SUCCESS: Color = Color::Green;

pub const COLOR_ERROR: Color = Color::Red;

/// Color for muted values (empty cells, trace logs)
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

pub const COLOR_LOADING: Color = Color::Yellow;

pub const COLOR_INFO: Color = Color::Blue;

/// Border color for danger/warning popups (delete confirmations)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Marker for required form fields
pub const COLOR_REQUIRED: Color = Color::Red;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

pub const TITLE_HEIGHT: u16 = 1;

pub const NOTIFICATION_HEIGHT: u16 = 1;

pub const HELP_BAR_HEIGHT: u16 = 3;

/// Share of a resource page given to the form, in percent
pub const FORM_WIDTH_PERCENT: u16 = 40;

/// Width of the label column in record forms
pub const FORM_LABEL_WIDTH: u16 = 18;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn muted_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn success_style() -> Style {
    Style::default().fg(COLOR_SUCCESS)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for danger/warning borders (delete confirmations)
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Border of a panel, highlighted while it has keyboard focus
pub fn panel_border_style(focused: bool) -> Style {
    if focused {
        accent_border_style()
    } else {
        Style::default()
    }
}

pub fn notification_style(level: NotificationLevel) -> Style {
    let color = match level {
        NotificationLevel::Success => COLOR_SUCCESS,
        NotificationLevel::Error => COLOR_ERROR,
        NotificationLevel::Info => COLOR_INFO,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
