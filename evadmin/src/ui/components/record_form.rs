use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use evadmin_api::{FieldKind, FieldSpec};

use crate::i18n::{fill, resource_name, t};
use crate::state::form_editor::{FilePreview, FormEditor};
use crate::state::{InputMode, ResourcePageState};
use crate::ui::{theme, utils};

/// Render the create/edit form of a resource page.
pub fn render_record_form(f: &mut Frame, area: Rect, page: &ResourcePageState) {
    let texts = t();
    let editor = &page.editor;
    let focused = page.input_mode == InputMode::Form;
    let resource = resource_name(page.kind());

    let title = match editor.bound_id() {
        Some(id) => fill(
            texts.form.edit_title,
            &[("resource", resource), ("id", id.as_str())],
        ),
        None => fill(texts.form.new_title, &[("resource", resource)]),
    };

    let mut lines: Vec<Line> = Vec::new();
    for (index, spec) in editor.schema().fields.iter().enumerate() {
        let is_focused = focused && index == editor.focus_index();
        lines.push(field_line(editor, spec, is_focused));
        if let Some(preview) = preview_line(editor, spec) {
            lines.push(preview);
        }
    }

    if let Some(error) = editor.validation_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(error.message(), theme::error_style())));
    }

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::panel_border_style(focused)),
    );
    f.render_widget(form, area);
}

fn field_line(editor: &FormEditor, spec: &FieldSpec, is_focused: bool) -> Line<'static> {
    let texts = t();
    let label = format!(
        "{:width$}",
        texts.fields.label(spec.name),
        width = theme::FORM_LABEL_WIDTH as usize - 1
    );
    let marker = if spec.required {
        texts.form.required_marker
    } else {
        " "
    };

    let value_style = if is_focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };
    let value = field_value_span(editor, spec, is_focused, value_style);

    Line::from(vec![
        Span::styled(label, theme::header_style()),
        Span::styled(marker, Style::default().fg(theme::COLOR_REQUIRED)),
        Span::raw(" "),
        value,
    ])
}

fn field_value_span(
    editor: &FormEditor,
    spec: &FieldSpec,
    is_focused: bool,
    style: Style,
) -> Span<'static> {
    let texts = t();
    let cursor = if is_focused { "▏" } else { "" };
    let value = editor.value(spec.name);

    match spec.kind {
        FieldKind::Choice(_) => {
            let shown = texts
                .fields
                .choices
                .display(value.as_text().unwrap_or_default())
                .to_string();
            Span::styled(format!("< {shown} >"), style)
        }
        FieldKind::Boolean => {
            let mark = if value.as_flag().unwrap_or(false) { "x" } else { " " };
            Span::styled(format!("[{mark}]"), style)
        }
        FieldKind::DateTime | FieldKind::File if value.is_blank() && !value.is_upload() => {
            let hint = if spec.kind == FieldKind::DateTime {
                texts.form.date_time_hint
            } else {
                texts.form.file_hint
            };
            Span::styled(format!("{cursor}{hint}"), style.patch(theme::muted_style()))
        }
        // Stored attachments are described by the preview line.
        FieldKind::File if !value.is_upload() => Span::styled(cursor.to_string(), style),
        FieldKind::Text | FieldKind::DateTime | FieldKind::File => {
            Span::styled(format!("{}{cursor}", editor.input_text(spec.name)), style)
        }
    }
}

fn preview_line(editor: &FormEditor, spec: &FieldSpec) -> Option<Line<'static>> {
    let texts = t();
    let text = match editor.preview(spec.name)? {
        FilePreview::Remote(url) => format!(
            "{}: {}",
            texts.form.current_file,
            utils::file_name_from_url(url)
        ),
        FilePreview::Local { file_name } => {
            fill(texts.form.selected_file, &[("file", file_name.as_str())])
        }
    };
    let indent = " ".repeat(theme::FORM_LABEL_WIDTH as usize + 1);
    Some(Line::from(Span::styled(
        format!("{indent}{text}"),
        theme::help_text_style(),
    )))
}
