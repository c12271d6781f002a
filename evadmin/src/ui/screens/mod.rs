pub mod home_screen;
pub mod logs_screen;
pub mod resource_screen;

use crate::state::{HomeState, LogsState, ResourcePageState};

#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeState),
    Resource(Box<ResourcePageState>),
    Logs(LogsState),
}

impl Screen {
    /// Route name, used in logs
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Home(_) => "home",
            Screen::Resource(page) => page.kind().collection(),
            Screen::Logs(_) => "logs",
        }
    }
}
