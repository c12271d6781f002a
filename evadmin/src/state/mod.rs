pub mod controller;
pub mod form_editor;
pub mod notification;
pub mod record_store;
pub mod reducer;
pub mod selection;
pub mod validators;

use crate::events::{PageJob, RemoteCall};
use crate::ui::screens::Screen;
use controller::{PageSession, ReconciliationController};
use evadmin_api::{RecordId, ResourceKind};
use form_editor::FormEditor;
use notification::Notification;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Where keys go on a resource page
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Form,
    DeleteConfirmation,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,
    pub notification: Option<Notification>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Home(HomeState::default())],
            help_visible: false,
            pending_key: None,
            notification: None,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Routes to a top-level screen. History becomes `[Home, screen]`, or
    /// just `[Home]` when routing home.
    pub fn route_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Routing to {}, stack depth: {} -> {}",
            screen.route(),
            self.history.len(),
            if matches!(screen, Screen::Home(_)) { 1 } else { 2 }
        );
        self.history.truncate(1);
        match screen {
            Screen::Home(home) => self.history[0] = Screen::Home(home),
            other => self.history.push(other),
        }
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    pub fn resource_page(&self) -> Option<&ResourcePageState> {
        match self.current_screen() {
            Screen::Resource(page) => Some(page.as_ref()),
            _ => None,
        }
    }

    pub fn resource_page_mut(&mut self) -> Option<&mut ResourcePageState> {
        match self.current_screen_mut() {
            Screen::Resource(page) => Some(page.as_mut()),
            _ => None,
        }
    }

    /// The visible resource page, only if it belongs to `session`.
    pub fn active_page_mut(&mut self, session: PageSession) -> Option<&mut ResourcePageState> {
        self.resource_page_mut()
            .filter(|page| page.session() == session)
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!("Notification: {}", notification.message);
        self.notification = Some(notification);
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        if let Some(page) = self.resource_page_mut() {
            if let LoadingState::Loading(throbber_state) = page.controller.loading_mut() {
                return Some(throbber_state);
            }
        }
        None
    }

    /// Advances timers: notification expiry and the loading throbber.
    pub fn tick(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            if !notification.tick() {
                self.notification = None;
            }
        }
        if let Some(throbber) = self.loading_state() {
            throbber.calc_next();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Debug, Clone)]
pub struct HomeState {
    pub selected: usize,
}

impl HomeState {
    pub fn selected_kind(&self) -> ResourceKind {
        ResourceKind::ALL[self.selected % ResourceKind::ALL.len()]
    }
}

/// One resource page: table, form and the controller that ties them.
#[derive(Debug, Clone)]
pub struct ResourcePageState {
    pub controller: ReconciliationController,
    pub editor: FormEditor,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    pub delete_confirmation_id: Option<RecordId>,
}

impl ResourcePageState {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            controller: ReconciliationController::new(kind),
            editor: FormEditor::new(kind.schema()),
            table_state: RefCell::new(TableState::default()),
            input_mode: InputMode::Normal,
            delete_confirmation_id: None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.controller.kind()
    }

    pub fn session(&self) -> PageSession {
        self.controller.session()
    }

    pub fn job(&self, call: RemoteCall) -> PageJob {
        PageJob {
            session: self.session(),
            kind: self.kind(),
            call,
        }
    }

    /// Identity of the highlighted table row.
    pub fn selected_row_id(&self) -> Option<RecordId> {
        let index = self.table_state.borrow().selected()?;
        self.controller
            .store()
            .get(index)
            .map(|record| record.id().clone())
    }

    /// Rebinds the editor whenever the selection moved away from the record
    /// it holds.
    pub fn sync_editor(&mut self) {
        let selected = self.controller.selection().id();
        if self.editor.bound_id() != selected {
            let record = self.controller.selected_record();
            self.editor.set_initial_data(record);
        }
    }

    /// Keeps the highlighted row inside the table after the store changed.
    pub fn clamp_table_selection(&self) {
        let len = self.controller.store().len();
        let mut table_state = self.table_state.borrow_mut();
        match table_state.selected() {
            _ if len == 0 => table_state.select(None),
            None => table_state.select(Some(0)),
            Some(index) if index >= len => table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select_last();
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }
}

impl Scrollable for ResourcePageState {
    fn num_items(&self) -> usize {
        self.controller.store().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
