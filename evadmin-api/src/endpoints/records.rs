use super::{EmptyResponse, Endpoint, Json, RequestData};
use crate::record::{Draft, Record, RecordId};
use crate::schema::ResourceKind;
use reqwest::Method;
use std::borrow::Cow;

fn collection_path(kind: ResourceKind) -> String {
    format!("/{}/", kind.collection())
}

fn item_path(kind: ResourceKind, id: &RecordId) -> String {
    format!("/{}/{}/", kind.collection(), id)
}

#[derive(Debug, Clone)]
pub struct ListRecords {
    kind: ResourceKind,
}

impl ListRecords {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

impl Endpoint for ListRecords {
    type Response = Json<Vec<Record>>;

    fn endpoint(&self) -> Cow<'_, str> {
        collection_path(self.kind).into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecord {
    kind: ResourceKind,
    draft: Draft,
}

impl CreateRecord {
    pub fn new(kind: ResourceKind, draft: Draft) -> Self {
        Self { kind, draft }
    }
}

impl Endpoint for CreateRecord {
    type Response = Json<Record>;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        collection_path(self.kind).into()
    }

    fn data(&self) -> RequestData<'_> {
        RequestData::Fields(&self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRecord {
    kind: ResourceKind,
    id: RecordId,
    draft: Draft,
}

impl UpdateRecord {
    pub fn new(kind: ResourceKind, id: RecordId, draft: Draft) -> Self {
        Self { kind, id, draft }
    }
}

impl Endpoint for UpdateRecord {
    type Response = Json<Record>;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        item_path(self.kind, &self.id).into()
    }

    fn data(&self) -> RequestData<'_> {
        RequestData::Fields(&self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteRecord {
    kind: ResourceKind,
    id: RecordId,
}

impl DeleteRecord {
    pub fn new(kind: ResourceKind, id: RecordId) -> Self {
        Self { kind, id }
    }
}

impl Endpoint for DeleteRecord {
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        item_path(self.kind, &self.id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let list = ListRecords::new(ResourceKind::Events);
        assert_eq!(list.endpoint(), "/events/");
        assert_eq!(ListRecords::METHOD, Method::GET);

        let update = UpdateRecord::new(ResourceKind::Contacts, RecordId::from(7), Draft::new());
        assert_eq!(update.endpoint(), "/contacts/7/");
        assert_eq!(UpdateRecord::METHOD, Method::PUT);

        let delete = DeleteRecord::new(ResourceKind::Locations, RecordId::from("12"));
        assert_eq!(delete.endpoint(), "/locations/12/");
        assert!(matches!(delete.data(), RequestData::Empty));
    }

    #[test]
    fn test_mutations_carry_the_draft() {
        let draft = Draft::new().with_field("title", "HQ");
        let create = CreateRecord::new(ResourceKind::Locations, draft.clone());
        assert_eq!(CreateRecord::METHOD, Method::POST);
        match create.data() {
            RequestData::Fields(sent) => assert_eq!(sent, &draft),
            RequestData::Empty => panic!("create must send the draft"),
        }
    }
}
