pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::{AppState, InputMode};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    let areas = layouts::screen_layout(f.area());

    match state.current_screen() {
        Screen::Home(home_state) => home_screen::render(f, &areas, home_state),
        Screen::Resource(page) => {
            resource_screen::render(f, &areas, page);

            if page.input_mode == InputMode::DeleteConfirmation {
                if let Some(ref id) = page.delete_confirmation_id {
                    components::delete_confirmation::render_delete_confirmation(
                        f,
                        page.kind(),
                        id,
                    );
                }
            }
        }
        Screen::Logs(logs_state) => logs_screen::render(f, &areas, logs_state, log_buffer),
    }

    if let Some(ref notification) = state.notification {
        components::notification_bar::render_notification(f, areas.notification, notification);
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
