use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent, PageJob};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, ResourcePageState};
use crate::ui::screens::Screen;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through `execute_command_sync`; the remote calls they plan
/// are recorded instead of sent.
#[derive(Default)]
pub struct MockDataHandler {
    jobs: Vec<PageJob>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_jobs(&mut self) -> Vec<PageJob> {
        std::mem::take(&mut self.jobs)
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(job) = executor::execute_command_sync(command, state) {
            self.jobs.push(job);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Types each character as a separate key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key_event(KeyEvent::from(c));
        }
    }

    pub fn execute(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// The resource page on screen. Panics elsewhere.
    pub fn page(&self) -> &ResourcePageState {
        self.state()
            .resource_page()
            .expect("Expected a resource page on screen")
    }

    /// Remote calls planned since the last call
    pub fn take_jobs(&mut self) -> Vec<PageJob> {
        self.core.handler_mut().take_jobs()
    }

    /// Takes exactly one planned call, panicking otherwise
    pub fn take_single_job(&mut self) -> PageJob {
        let mut jobs = self.take_jobs();
        assert_eq!(jobs.len(), 1, "Expected exactly one planned call, got {:?}", jobs);
        jobs.remove(0)
    }

    /// Assert that the app is on a specific screen type
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
