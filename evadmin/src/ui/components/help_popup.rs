use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::i18n::{t, HelpTexts};
use crate::state::InputMode;
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let texts = &t().help;
    let help_items = get_help_items(screen, texts);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        texts.title,
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(theme::form_field_style());

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen, texts: &HelpTexts) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Home(_) => {
            items.push(("↑/k", texts.move_up));
            items.push(("↓/j", texts.move_down));
            items.push(("Enter/→/l", texts.open_selected));
        }
        Screen::Resource(page) if page.input_mode == InputMode::Form => {
            items.push(("Tab/↓", texts.next_field));
            items.push(("Shift+Tab/↑", texts.prev_field));
            items.push(("←/→", texts.cycle_choice));
            items.push(("Space", texts.toggle_flag));
            items.push(("Backspace", texts.delete_char));
            items.push(("Ctrl+U", texts.clear_field));
            items.push(("Enter/Ctrl+S", texts.submit));
            items.push(("Esc", texts.leave_form));
        }
        Screen::Resource(_) => {
            items.push(("↑/k", texts.move_up));
            items.push(("↓/j", texts.move_down));
            items.push(("n", texts.new_record));
            items.push(("e/Enter", texts.edit_record));
            items.push(("d/Backspace", texts.delete_record));
            items.push(("r", texts.reload));
            items.push(("Tab/i", texts.focus_form));
            items.push(("PgUp", texts.page_up));
            items.push(("PgDn", texts.page_down));
        }
        Screen::Logs(_) => {
            items.push(("↑/k", texts.scroll_up));
            items.push(("↓/j", texts.scroll_down));
            items.push(("PgUp", texts.page_up));
            items.push(("PgDn", texts.page_down));
        }
    }

    items.push(("", ""));
    items.push(("", texts.global_section));
    items.push(("1/2/3", texts.open_pages));
    items.push(("h/←", texts.back));
    items.push(("g then h", texts.go_home));
    items.push(("g then l", texts.go_logs));
    items.push(("g then g", texts.top));
    items.push(("G", texts.bottom));
    items.push(("L", texts.switch_language));
    items.push(("?", texts.toggle_help));
    items.push(("q", texts.quit));

    items
}
