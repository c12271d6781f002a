use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use crate::state::notification::Notification;
use crate::ui::theme;

pub fn render_notification(f: &mut Frame, area: Rect, notification: &Notification) {
    let text = Span::styled(
        format!(" {}", notification.message),
        theme::notification_style(notification.level),
    );
    f.render_widget(Paragraph::new(text), area);
}
