use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Bounded, shared ring of recent log entries for the logs screen.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_entries))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Entries `start..end` in arrival order, clamped to what is stored.
    pub fn window(&self, start: usize, end: usize) -> Vec<LogEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let end = end.min(entries.len());
        let start = start.min(end);
        entries.range(start..end).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
