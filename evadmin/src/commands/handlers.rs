use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;
use evadmin_api::{FieldKind, ResourceKind};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: Delete confirmation popup
    if let Some(page) = state.resource_page() {
        match page.input_mode {
            InputMode::DeleteConfirmation => return handle_delete_confirmation_keys(key),
            InputMode::Form => return handle_form_keys(event, page),
            InputMode::Normal => {}
        }
    }

    // Priority 2: Help popup swallows everything except closing and quitting
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            ('g', Key::Char('h')) => Some(AppCommand::NavigateHome),
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),
        (_, Key::Char('L')) => Some(AppCommand::CycleLanguage),
        (_, Key::Char('1')) => Some(AppCommand::OpenResource(ResourceKind::Events)),
        (_, Key::Char('2')) => Some(AppCommand::OpenResource(ResourceKind::Locations)),
        (_, Key::Char('3')) => Some(AppCommand::OpenResource(ResourceKind::Contacts)),
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),
        (_, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (_, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (_, Key::PageUp) => Some(AppCommand::ScrollPageUp),
        (_, Key::PageDown) => Some(AppCommand::ScrollPageDown),

        // Home screen
        (Screen::Home(_), Key::Enter | Key::Right | Key::Char('l')) => {
            Some(AppCommand::OpenSelected)
        }

        // Resource pages
        (Screen::Resource(_), Key::Char('n')) => Some(AppCommand::NewRecord),
        (Screen::Resource(_), Key::Char('r')) => Some(AppCommand::ReloadRecords),
        (Screen::Resource(_), Key::Tab | Key::Char('i')) => Some(AppCommand::FocusForm),
        (Screen::Resource(page), Key::Enter | Key::Char('e')) => page
            .selected_row_id()
            .map(|id| AppCommand::EditRecord { id }),
        (Screen::Resource(page), Key::Char('d') | Key::Backspace) => page
            .selected_row_id()
            .map(|id| AppCommand::InitiateDelete { id }),

        _ => None,
    }
}

/// Handle keyboard input while the record form has focus
fn handle_form_keys(event: KeyEvent, page: &ResourcePageState) -> Option<AppCommand> {
    if event.is_ctrl_char('s') {
        return Some(AppCommand::SubmitForm);
    }
    if event.is_ctrl_char('u') {
        return Some(AppCommand::ClearFormField);
    }

    let kind = page.editor.focused_field().kind;
    let selectable = matches!(kind, FieldKind::Choice(_) | FieldKind::Boolean);

    match event.key {
        Key::Esc => Some(AppCommand::LeaveForm),
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        Key::Left | Key::Right | Key::Char(' ') if selectable => Some(match kind {
            FieldKind::Boolean => AppCommand::ToggleFlag,
            _ => AppCommand::CycleChoice {
                forward: event.key != Key::Left,
            },
        }),
        Key::Char(c) if !selectable && !event.modifiers.ctrl => {
            Some(AppCommand::AppendFormFieldChar(c))
        }
        _ => None,
    }
}

/// Handle keyboard input when in delete confirmation mode
fn handle_delete_confirmation_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('y') | Key::Char('Y') => Some(AppCommand::ConfirmDelete),
        Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelDelete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evadmin_api::{Record, RecordId};

    fn page_state(kind: ResourceKind, records: Vec<Record>) -> AppState {
        let mut state = AppState::new();
        let mut page = ResourcePageState::new(kind);
        page.controller.apply_loaded(records);
        page.clamp_table_selection();
        state.route_to(Screen::Resource(Box::new(page)));
        state
    }

    fn with_mode(mut state: AppState, mode: InputMode) -> AppState {
        state.resource_page_mut().unwrap().input_mode = mode;
        state
    }

    fn key(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_quit_command() {
        let state = AppState::new();
        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = AppState::new();
        state.help_visible = true;

        assert_eq!(key(&state, Key::Char('j')), None);
        assert_eq!(key(&state, Key::Char('1')), None);
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ToggleHelp));
        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_number_keys_open_pages() {
        let state = AppState::new();
        assert_eq!(
            key(&state, Key::Char('2')),
            Some(AppCommand::OpenResource(ResourceKind::Locations))
        );
        assert_eq!(
            key(&state, Key::Char('3')),
            Some(AppCommand::OpenResource(ResourceKind::Contacts))
        );
    }

    #[test]
    fn test_language_key() {
        let state = AppState::new();
        assert_eq!(key(&state, Key::Char('L')), Some(AppCommand::CycleLanguage));
    }

    // ============================================================================
    // Multi-key Sequences
    // ============================================================================

    #[test]
    fn test_g_sequences() {
        let mut state = AppState::new();
        assert_eq!(key(&state, Key::Char('g')), Some(AppCommand::SetPendingKey('g')));

        state.pending_key = Some('g');
        assert_eq!(key(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(key(&state, Key::Char('h')), Some(AppCommand::NavigateHome));
        assert_eq!(key(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(key(&state, Key::Char('x')), Some(AppCommand::ClearPendingKey));
    }

    // ============================================================================
    // Resource Pages
    // ============================================================================

    #[test]
    fn test_edit_and_delete_use_highlighted_row() {
        let state = page_state(
            ResourceKind::Locations,
            vec![Record::new(4), Record::new(5)],
        );
        state.resource_page().unwrap().table_state.borrow_mut().select(Some(1));

        assert_eq!(
            key(&state, Key::Char('e')),
            Some(AppCommand::EditRecord {
                id: RecordId::from(5)
            })
        );
        assert_eq!(
            key(&state, Key::Char('d')),
            Some(AppCommand::InitiateDelete {
                id: RecordId::from(5)
            })
        );
    }

    #[test]
    fn test_edit_on_empty_table_is_ignored() {
        let state = page_state(ResourceKind::Events, vec![]);
        assert_eq!(key(&state, Key::Enter), None);
        assert_eq!(key(&state, Key::Char('n')), Some(AppCommand::NewRecord));
    }

    #[test]
    fn test_delete_confirmation_keys() {
        let state = with_mode(
            page_state(ResourceKind::Events, vec![Record::new(1)]),
            InputMode::DeleteConfirmation,
        );
        assert_eq!(key(&state, Key::Char('y')), Some(AppCommand::ConfirmDelete));
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::CancelDelete));
        assert_eq!(key(&state, Key::Char('q')), None);
    }

    // ============================================================================
    // Form Mode
    // ============================================================================

    #[test]
    fn test_form_text_field_keys() {
        let state = with_mode(page_state(ResourceKind::Events, vec![]), InputMode::Form);

        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::AppendFormFieldChar('q')));
        assert_eq!(key(&state, Key::Char(' ')), Some(AppCommand::AppendFormFieldChar(' ')));
        assert_eq!(key(&state, Key::Enter), Some(AppCommand::SubmitForm));
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::LeaveForm));
        assert_eq!(key(&state, Key::Left), None);
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('s')), &state),
            Some(AppCommand::SubmitForm)
        );
    }

    #[test]
    fn test_form_choice_field_keys() {
        // Contacts start on the greeting choice.
        let state = with_mode(page_state(ResourceKind::Contacts, vec![]), InputMode::Form);

        assert_eq!(
            key(&state, Key::Right),
            Some(AppCommand::CycleChoice { forward: true })
        );
        assert_eq!(
            key(&state, Key::Left),
            Some(AppCommand::CycleChoice { forward: false })
        );
        assert_eq!(key(&state, Key::Char('x')), None);
    }
}
