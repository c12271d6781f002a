use evadmin_api::RecordId;

/// Identity of the record loaded into the editor; `None` means a new
/// record is being drafted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<RecordId>);

impl Selection {
    pub fn select(&mut self, id: RecordId) {
        self.0 = Some(id);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn id(&self) -> Option<&RecordId> {
        self.0.as_ref()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.0.as_ref() == Some(id)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}
