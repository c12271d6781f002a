use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::{AppCommand, PageJob};
use crate::i18n::{current_language, fill, resource_name, set_language, t};
use crate::state::notification::Notification;
use crate::state::*;
use crate::ui::screens::Screen;
use evadmin_api::{RecordId, ResourceKind};

const TABLE_PAGE: u16 = 10;
const LOG_PAGE: usize = 20;

/// Execute a command, spawning a background task for any remote call it plans
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let Some(job) = execute_command_sync(command, state) else {
        return;
    };

    let task_name = job.task_name();
    tracing::debug!("Spawning {}", task_name);
    let data_loader = data_loader.clone();
    task_manager.spawn_task(task_name, async move {
        data_loader.run(job).await;
    });
}

/// Apply a command to the state without side effects.
///
/// Returns the remote call the command planned, if any. Production hands it
/// to a background task; tests inspect it and inject the matching
/// `DataEvent` themselves.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<PageJob> {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let mut job = None;

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::NavigateHome => state.route_to(Screen::Home(HomeState::default())),
        AppCommand::NavigateToLogs => state.route_to(Screen::Logs(LogsState::default())),
        AppCommand::OpenResource(kind) => job = Some(open_resource(state, kind)),
        AppCommand::OpenSelected => {
            if let Screen::Home(home) = state.current_screen() {
                let kind = home.selected_kind();
                job = Some(open_resource(state, kind));
            }
        }

        AppCommand::SelectNext => match state.current_screen_mut() {
            Screen::Home(s) => s.selected = (s.selected + 1) % ResourceKind::ALL.len(),
            Screen::Resource(s) => s.select_next(),
            Screen::Logs(s) => s.scroll_offset = s.scroll_offset.saturating_sub(1),
        },
        AppCommand::SelectPrevious => match state.current_screen_mut() {
            Screen::Home(s) => {
                let len = ResourceKind::ALL.len();
                s.selected = (s.selected + len - 1) % len;
            }
            Screen::Resource(s) => s.select_prev(),
            Screen::Logs(s) => {
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        },
        AppCommand::NavigateToTop => match state.current_screen_mut() {
            Screen::Home(s) => s.selected = 0,
            Screen::Resource(s) => {
                if !s.controller.store().is_empty() {
                    s.table_state.borrow_mut().select(Some(0));
                }
            }
            Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
        },
        AppCommand::NavigateToBottom => match state.current_screen_mut() {
            Screen::Home(s) => s.selected = ResourceKind::ALL.len() - 1,
            Screen::Resource(s) => {
                let len = s.controller.store().len();
                if len > 0 {
                    s.table_state.borrow_mut().select(Some(len - 1));
                }
            }
            Screen::Logs(s) => s.scroll_offset = 0,
        },
        AppCommand::ScrollPageUp => match state.current_screen_mut() {
            Screen::Resource(s) => s.table_state.borrow_mut().scroll_up_by(TABLE_PAGE),
            Screen::Logs(s) => {
                s.scroll_offset = (s.scroll_offset + LOG_PAGE).min(s.total_entries.saturating_sub(1));
            }
            Screen::Home(_) => {}
        },
        AppCommand::ScrollPageDown => match state.current_screen_mut() {
            Screen::Resource(s) => {
                let last = s.controller.store().len().saturating_sub(1);
                let mut table_state = s.table_state.borrow_mut();
                let next = table_state.selected().map_or(0, |i| i + TABLE_PAGE as usize);
                if !s.controller.store().is_empty() {
                    table_state.select(Some(next.min(last)));
                }
            }
            Screen::Logs(s) => s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE),
            Screen::Home(_) => {}
        },

        // Records
        AppCommand::ReloadRecords => {
            if let Some(page) = state.resource_page_mut() {
                let call = page.controller.begin_load();
                job = Some(page.job(call));
            }
        }
        AppCommand::NewRecord => {
            if let Some(page) = state.resource_page_mut() {
                page.controller.new_record();
                page.editor.set_initial_data(None);
                page.input_mode = InputMode::Form;
            }
        }
        AppCommand::EditRecord { id } => {
            let notification = state
                .resource_page_mut()
                .and_then(|page| edit_record(page, &id));
            if let Some(notification) = notification {
                state.notify(notification);
            }
        }

        // Form
        AppCommand::FocusForm => set_input_mode(state, InputMode::Form),
        AppCommand::LeaveForm => set_input_mode(state, InputMode::Normal),
        AppCommand::NavigateFormField { forward } => {
            if let Some(page) = state.resource_page_mut() {
                if forward {
                    page.editor.focus_next();
                } else {
                    page.editor.focus_prev();
                }
            }
        }
        AppCommand::AppendFormFieldChar(c) => {
            if let Some(page) = state.resource_page_mut() {
                page.editor.append_char(c);
            }
        }
        AppCommand::DeleteFormFieldChar => {
            if let Some(page) = state.resource_page_mut() {
                page.editor.delete_char();
            }
        }
        AppCommand::ClearFormField => {
            if let Some(page) = state.resource_page_mut() {
                page.editor.clear_field();
            }
        }
        AppCommand::CycleChoice { forward } => {
            if let Some(page) = state.resource_page_mut() {
                page.editor.cycle_choice(forward);
            }
        }
        AppCommand::ToggleFlag => {
            if let Some(page) = state.resource_page_mut() {
                page.editor.toggle_flag();
            }
        }
        AppCommand::SubmitForm => {
            let mut notification = None;
            if let Some(page) = state.resource_page_mut() {
                let mut planned = None;
                let controller = &page.controller;
                match page
                    .editor
                    .submit(|draft| planned = Some(controller.submit(draft)))
                {
                    Ok(()) => page.input_mode = InputMode::Normal,
                    Err(err) => notification = Some(Notification::error(err.message())),
                }
                job = planned.map(|call| page.job(call));
            }
            if let Some(notification) = notification {
                state.notify(notification);
            }
        }

        // Deletion
        AppCommand::InitiateDelete { id } => {
            if let Some(page) = state.resource_page_mut() {
                page.delete_confirmation_id = Some(id);
                page.input_mode = InputMode::DeleteConfirmation;
            }
        }
        AppCommand::ConfirmDelete => {
            if let Some(page) = state.resource_page_mut() {
                page.input_mode = InputMode::Normal;
                if let Some(id) = page.delete_confirmation_id.take() {
                    let call = page.controller.request_delete(&id);
                    job = Some(page.job(call));
                }
            }
        }
        AppCommand::CancelDelete => {
            if let Some(page) = state.resource_page_mut() {
                page.delete_confirmation_id = None;
                page.input_mode = InputMode::Normal;
            }
        }

        AppCommand::CycleLanguage => {
            let language = current_language().next();
            set_language(language);
            tracing::info!("Switched language to {}", language.code());
            state.notify(Notification::info(fill(
                t().notify.language_changed,
                &[("language", language.display_name())],
            )));
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    job
}

fn open_resource(state: &mut AppState, kind: ResourceKind) -> PageJob {
    let mut page = ResourcePageState::new(kind);
    let call = page.controller.begin_load();
    let job = page.job(call);
    tracing::debug!("Opening {} page, session {}", kind, job.session);
    state.route_to(Screen::Resource(Box::new(page)));
    job
}

/// Binds the form to a stored record. Returns a notification when the
/// record is not in the store.
fn edit_record(page: &mut ResourcePageState, id: &RecordId) -> Option<Notification> {
    match page.controller.edit(id) {
        Ok(()) => {
            page.sync_editor();
            page.input_mode = InputMode::Form;
            None
        }
        Err(err) => {
            tracing::warn!("{}", err);
            Some(Notification::error(fill(
                t().notify.not_found,
                &[("resource", resource_name(page.kind())), ("id", id.as_str())],
            )))
        }
    }
}

fn set_input_mode(state: &mut AppState, mode: InputMode) {
    if let Some(page) = state.resource_page_mut() {
        page.input_mode = mode;
    }
}
