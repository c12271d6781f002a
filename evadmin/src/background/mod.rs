pub mod data_loader;

use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks spawned remote calls so they can be stopped on shutdown.
///
/// Calls are never aborted when a newer one starts: a save or delete already
/// sent must still report back.
pub struct BackgroundTaskManager {
    tasks: Vec<(String, JoinHandle<()>)>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn spawn_task<F>(&mut self, task_name: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|(_, handle)| !handle.is_finished());
        let handle = tokio::spawn(future);
        self.tasks.push((task_name, handle));
    }

    /// Names of the tasks still running
    pub fn running(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (name, handle) in self.tasks.drain(..) {
            if !handle.is_finished() {
                tracing::debug!("Cancelling {}", name);
            }
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
