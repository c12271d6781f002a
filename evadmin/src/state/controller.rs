use std::fmt::{self, Display};

use evadmin_api::{Draft, Record, RecordId, ResourceKind};
use throbber_widgets_tui::ThrobberState;
use uuid::Uuid;

use super::record_store::RecordStore;
use super::selection::Selection;
use super::LoadingState;
use crate::events::RemoteCall;

/// Identifies one visit to a resource page. Results tagged with an older
/// session are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSession(Uuid);

impl PageSession {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record {0} is not in the local store")]
pub struct NotFoundLocal(pub RecordId);

/// Result of a create or update call.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Record),
    Updated { id: RecordId, record: Record },
    Failed { error: String },
}

/// Owns the store and selection of one resource page and decides what each
/// submission means.
#[derive(Debug, Clone)]
pub struct ReconciliationController {
    kind: ResourceKind,
    session: PageSession,
    store: RecordStore,
    selection: Selection,
    loading: LoadingState,
}

impl ReconciliationController {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            session: PageSession::new(),
            store: RecordStore::new(),
            selection: Selection::default(),
            loading: LoadingState::NotStarted,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn session(&self) -> PageSession {
        self.session
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn loading_mut(&mut self) -> &mut LoadingState {
        &mut self.loading
    }

    /// The record currently bound for editing, if it is still stored.
    pub fn selected_record(&self) -> Option<&Record> {
        self.selection.id().and_then(|id| self.store.find(id))
    }

    pub fn begin_load(&mut self) -> RemoteCall {
        self.loading = LoadingState::Loading(ThrobberState::default());
        RemoteCall::List
    }

    pub fn apply_loaded(&mut self, records: Vec<Record>) {
        tracing::info!("Loaded {} {}", records.len(), self.kind);
        self.store.load(records);
        self.loading = LoadingState::Loaded;
        if let Some(id) = self.selection.id() {
            if self.store.find(id).is_none() {
                tracing::debug!("Selected {} {} vanished after reload", self.kind, id);
                self.selection.clear();
            }
        }
    }

    /// Keeps whatever the store held before.
    pub fn apply_load_failed(&mut self, error: String) {
        tracing::error!("Failed to load {}: {}", self.kind, error);
        self.loading = LoadingState::Error(error);
    }

    /// Chooses create or update from the selection alone. The draft never
    /// carries an identity.
    pub fn submit(&self, draft: Draft) -> RemoteCall {
        match self.selection.id() {
            None => RemoteCall::Create { draft },
            Some(id) => RemoteCall::Update {
                id: id.clone(),
                draft,
            },
        }
    }

    /// Applies a finished save. The selection is cleared whatever the outcome.
    pub fn apply_saved(&mut self, outcome: &SaveOutcome) {
        match outcome {
            SaveOutcome::Created(record) => {
                tracing::info!("Created {} {}", self.kind, record.id());
                self.store.append(record.clone());
            }
            SaveOutcome::Updated { id, record } => {
                if !self.store.replace_at(id, record.clone()) {
                    tracing::warn!(
                        "Updated {} {} is no longer in the store, dropping response",
                        self.kind,
                        id
                    );
                }
            }
            SaveOutcome::Failed { error } => {
                tracing::error!("Saving {} failed: {}", self.kind, error);
            }
        }
        self.selection.clear();
    }

    /// Selects a stored record for editing.
    pub fn edit(&mut self, id: &RecordId) -> Result<(), NotFoundLocal> {
        if self.store.find(id).is_none() {
            return Err(NotFoundLocal(id.clone()));
        }
        self.selection.select(id.clone());
        Ok(())
    }

    pub fn new_record(&mut self) {
        self.selection.clear();
    }

    pub fn request_delete(&self, id: &RecordId) -> RemoteCall {
        RemoteCall::Delete { id: id.clone() }
    }

    pub fn apply_deleted(&mut self, id: &RecordId) {
        if self.store.remove_by_identity(id).is_none() {
            tracing::debug!("Deleted {} {} was not stored", self.kind, id);
        }
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
    }
}
