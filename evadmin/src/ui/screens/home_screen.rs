use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use evadmin_api::ResourceKind;

use crate::i18n::{resources_name, t};
use crate::state::HomeState;
use crate::ui::{
    components::{help_bar, screen_title},
    layouts::ScreenAreas,
    theme,
};

pub fn render(f: &mut Frame, areas: &ScreenAreas, state: &HomeState) {
    let texts = t();

    screen_title::render_screen_title(f, areas.title, texts.home.title, None);

    let items: Vec<ListItem> = ResourceKind::ALL
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let hint = match kind {
                ResourceKind::Events => texts.home.events_hint,
                ResourceKind::Locations => texts.home.locations_hint,
                ResourceKind::Contacts => texts.home.contacts_hint,
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", index + 1), theme::header_style()),
                    Span::styled(resources_name(*kind), theme::title_style()),
                ]),
                Line::from(Span::styled(format!("    {hint}"), theme::help_text_style())),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", texts.home.subtitle)),
        )
        .highlight_style(theme::selection_style());

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, areas.content, &mut list_state);

    help_bar::render_help_bar(f, areas.help, texts.help.home_bar);
}
