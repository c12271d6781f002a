use crate::endpoints::records::{CreateRecord, DeleteRecord, ListRecords, UpdateRecord};
use crate::record::{Draft, RecordId};
use crate::schema::ResourceKind;

/// Builds the requests for one resource collection.
#[derive(Debug, Clone, Copy)]
pub struct RecordRepository {
    kind: ResourceKind,
}

impl RecordRepository {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn list(&self) -> ListRecords {
        ListRecords::new(self.kind)
    }

    pub fn create(&self, draft: Draft) -> CreateRecord {
        CreateRecord::new(self.kind, draft)
    }

    pub fn update(&self, id: RecordId, draft: Draft) -> UpdateRecord {
        UpdateRecord::new(self.kind, id, draft)
    }

    pub fn delete(&self, id: RecordId) -> DeleteRecord {
        DeleteRecord::new(self.kind, id)
    }
}
