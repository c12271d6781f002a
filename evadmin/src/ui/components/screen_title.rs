//! Title line shared by every screen: breadcrumb on the left, load status on
//! the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::i18n::t;
use crate::state::LoadingState;
use crate::ui::theme;

pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    screen: &str,
    loading: Option<&LoadingState>,
) {
    let [text_area, status_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let breadcrumb = Line::from(vec![
        Span::styled(t().common.app_name, theme::title_style()),
        Span::styled(" › ", theme::muted_style()),
        Span::styled(screen.to_string(), theme::header_style()),
    ]);
    f.render_widget(Paragraph::new(breadcrumb), text_area);

    if let Some(loading) = loading {
        render_load_status(f, status_area, loading);
    }
}

fn render_load_status(f: &mut Frame, area: Rect, loading: &LoadingState) {
    let (mark, style) = match loading {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = Throbber::default()
                .throbber_set(BRAILLE_EIGHT)
                .throbber_style(theme::loading_style());
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", theme::success_style()),
        LoadingState::Error(_) => ("✗", theme::error_style()),
    };
    f.render_widget(Paragraph::new(Span::styled(mark, style)), area);
}
