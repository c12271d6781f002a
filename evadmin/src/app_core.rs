use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = real loader + tasks, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn background tasks or make API calls.
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler). The handler decides what happens to the remote
/// calls a command plans: production spawns them, tests record them.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self {
            ui_state: AppState::new(),
            handler,
        }
    }

    /// Translates a key press to an AppCommand and executes it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) {
        tracing::trace!("Executing {:?}", command);
        self.handler.execute_with_context(command, &mut self.ui_state);
    }

    /// Handle a data event (for test injection or async results)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Advances notification expiry and loading animations
    pub fn tick(&mut self) {
        self.ui_state.tick();
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
