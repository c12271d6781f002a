use evadmin_api::{Draft, Record, RecordId, ResourceKind};

use crate::state::controller::{PageSession, SaveOutcome};

/// Commands to execute (user actions → state changes and remote calls)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,
    ScrollPageUp,
    ScrollPageDown,

    // Navigation
    NavigateBack,
    NavigateHome,
    NavigateToLogs,
    OpenResource(ResourceKind),
    OpenSelected,

    // Records
    ReloadRecords,
    NewRecord,
    EditRecord { id: RecordId },

    // Form
    FocusForm,
    LeaveForm,
    NavigateFormField { forward: bool },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    CycleChoice { forward: bool },
    ToggleFlag,
    SubmitForm,

    // Deletion
    InitiateDelete { id: RecordId },
    ConfirmDelete,
    CancelDelete,

    // View
    CycleLanguage,
    ToggleHelp,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// One remote call against a resource collection.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    List,
    Create { draft: Draft },
    Update { id: RecordId, draft: Draft },
    Delete { id: RecordId },
}

/// A remote call planned by a page, tagged with the page visit that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageJob {
    pub session: PageSession,
    pub kind: ResourceKind,
    pub call: RemoteCall,
}

impl PageJob {
    pub fn task_name(&self) -> String {
        match &self.call {
            RemoteCall::List => format!("list_{}", self.kind),
            RemoteCall::Create { .. } => format!("create_{}", self.kind),
            RemoteCall::Update { id, .. } => format!("update_{}_{}", self.kind, id),
            RemoteCall::Delete { id } => format!("delete_{}_{}", self.kind, id),
        }
    }
}

/// Events from background tasks (responses to remote calls)
#[derive(Debug, Clone)]
pub enum DataEvent {
    RecordsLoaded {
        session: PageSession,
        records: Vec<Record>,
    },
    LoadFailed {
        session: PageSession,
        error: String,
    },
    RecordSaved {
        session: PageSession,
        outcome: SaveOutcome,
    },
    RecordDeleted {
        session: PageSession,
        id: RecordId,
    },
    DeleteFailed {
        session: PageSession,
        id: RecordId,
        error: String,
    },
}

impl DataEvent {
    pub fn session(&self) -> PageSession {
        match self {
            DataEvent::RecordsLoaded { session, .. }
            | DataEvent::LoadFailed { session, .. }
            | DataEvent::RecordSaved { session, .. }
            | DataEvent::RecordDeleted { session, .. }
            | DataEvent::DeleteFailed { session, .. } => *session,
        }
    }
}
