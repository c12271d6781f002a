use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::i18n::{fill, resources_name, t};
use crate::state::{InputMode, LoadingState, ResourcePageState};
use crate::ui::{
    components::{empty_state, help_bar, record_form, screen_title},
    layouts::{self, ScreenAreas},
    theme, utils,
};

const CELL_MAX_CHARS: usize = 24;

pub fn render(f: &mut Frame, areas: &ScreenAreas, page: &ResourcePageState) {
    let texts = t();
    screen_title::render_screen_title(
        f,
        areas.title,
        resources_name(page.kind()),
        Some(page.controller.loading()),
    );

    let (form_area, table_area) = layouts::form_and_table(areas.content);
    record_form::render_record_form(f, form_area, page);
    render_table(f, table_area, page);

    let help_text = match page.input_mode {
        InputMode::Form => texts.help.form_bar,
        InputMode::Normal | InputMode::DeleteConfirmation => texts.help.page_bar,
    };
    help_bar::render_help_bar(f, areas.help, help_text);
}

fn render_table(f: &mut Frame, area: Rect, page: &ResourcePageState) {
    let texts = t();
    let resources = resources_name(page.kind());
    let store = page.controller.store();

    if store.is_empty() {
        match page.controller.loading() {
            LoadingState::Loading(_) => {
                let message = fill(texts.table.loading, &[("resources", resources)]);
                empty_state::render_loading_state(f, area, resources, &message);
            }
            LoadingState::Error(error) => {
                let message = format!(
                    "{}: {error}",
                    fill(texts.table.load_failed, &[("resources", resources)])
                );
                empty_state::render_error_state(
                    f,
                    area,
                    resources,
                    &message,
                    Some(texts.table.reload_hint),
                );
            }
            LoadingState::NotStarted | LoadingState::Loaded => {
                let message = fill(texts.table.empty, &[("resources", resources)]);
                empty_state::render_empty_state(
                    f,
                    area,
                    resources,
                    &message,
                    Some(texts.table.empty_hint),
                );
            }
        }
        return;
    }

    let schema = page.kind().schema();
    let header = Row::new(
        std::iter::once(Cell::from(texts.table.id_column)).chain(
            schema
                .fields
                .iter()
                .map(|spec| Cell::from(texts.fields.label(spec.name))),
        ),
    )
    .style(theme::header_style())
    .underlined();

    let editing = page.controller.selection().id();
    let rows: Vec<Row> = store
        .iter()
        .map(|record| {
            let cells = std::iter::once(Cell::from(record.id().to_string())).chain(
                schema.fields.iter().map(|spec| {
                    let text = utils::display_value(spec, record.field(spec.name));
                    Cell::from(utils::truncate(&text, CELL_MAX_CHARS))
                }),
            );
            let row = Row::new(cells);
            if editing == Some(record.id()) {
                row.style(theme::loading_style())
            } else {
                row
            }
        })
        .collect();

    let widths = std::iter::once(Constraint::Length(6))
        .chain(schema.fields.iter().map(|_| Constraint::Fill(1)));

    let title = format!(" {} ({}) ", resources, store.len());
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme::panel_border_style(page.input_mode == InputMode::Normal)),
        )
        .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut page.table_state.borrow_mut());
}
