use crate::events::{DataEvent, PageJob, RemoteCall};
use crate::state::controller::SaveOutcome;
use evadmin_api::ResourceClient;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs remote calls and reports their results as data events
#[derive(Clone)]
pub struct DataLoader {
    pub client: Arc<dyn ResourceClient>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(client: Arc<dyn ResourceClient>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { client, data_tx }
    }

    /// Performs one planned call. Every outcome, success or failure, is
    /// sent back tagged with the job's page session.
    pub async fn run(&self, job: PageJob) {
        let PageJob {
            session,
            kind,
            call,
        } = job;

        let event = match call {
            RemoteCall::List => {
                tracing::info!("Loading {}", kind);
                match self.client.list(kind).await {
                    Ok(records) => DataEvent::RecordsLoaded { session, records },
                    Err(e) => {
                        tracing::error!("Failed to load {}: {}", kind, e);
                        DataEvent::LoadFailed {
                            session,
                            error: e.to_string(),
                        }
                    }
                }
            }

            RemoteCall::Create { draft } => {
                tracing::info!("Creating {} ({} fields)", kind, draft.len());
                let outcome = match self.client.create(kind, &draft).await {
                    Ok(record) => SaveOutcome::Created(record),
                    Err(e) => {
                        tracing::error!("Failed to create {}: {}", kind, e);
                        SaveOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                };
                DataEvent::RecordSaved { session, outcome }
            }

            RemoteCall::Update { id, draft } => {
                tracing::info!("Updating {} {}", kind, id);
                let outcome = match self.client.update(kind, &id, &draft).await {
                    Ok(record) => SaveOutcome::Updated { id, record },
                    Err(e) => {
                        tracing::error!("Failed to update {} {}: {}", kind, id, e);
                        SaveOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                };
                DataEvent::RecordSaved { session, outcome }
            }

            RemoteCall::Delete { id } => {
                tracing::info!("Deleting {} {}", kind, id);
                match self.client.delete(kind, &id).await {
                    Ok(()) => DataEvent::RecordDeleted { session, id },
                    Err(e) => {
                        tracing::error!("Failed to delete {} {}: {}", kind, id, e);
                        DataEvent::DeleteFailed {
                            session,
                            id,
                            error: e.to_string(),
                        }
                    }
                }
            }
        };

        if self.data_tx.send(event).is_err() {
            tracing::debug!("UI is gone, dropping {} result", kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controller::PageSession;
    use async_trait::async_trait;
    use evadmin_api::{Draft, Method, Record, RecordId, RequestError, ResourceKind, StatusCode};
    use std::sync::Mutex;

    /// In-memory service; deleting an unknown id fails.
    #[derive(Default)]
    struct FakeClient {
        records: Mutex<Vec<Record>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl ResourceClient for FakeClient {
        async fn list(&self, _kind: ResourceKind) -> Result<Vec<Record>, RequestError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn create(&self, _kind: ResourceKind, draft: &Draft) -> Result<Record, RequestError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let record = draft
                .fields()
                .fold(Record::new(*next_id), |record, (name, value)| {
                    record.with_field(name, value.clone())
                });
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            _kind: ResourceKind,
            id: &RecordId,
            draft: &Draft,
        ) -> Result<Record, RequestError> {
            let record = draft
                .fields()
                .fold(Record::new(id.clone()), |record, (name, value)| {
                    record.with_field(name, value.clone())
                });
            Ok(record)
        }

        async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), RequestError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|record| record.id() != id);
            if records.len() == before {
                return Err(RequestError::Status {
                    status: StatusCode::NOT_FOUND,
                    method: Method::DELETE,
                    url: format!("http://fake/api/{}/{id}/", kind.collection()),
                });
            }
            Ok(())
        }
    }

    fn loader() -> (DataLoader, mpsc::UnboundedReceiver<DataEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DataLoader::new(Arc::new(FakeClient::default()), tx), rx)
    }

    fn job(session: PageSession, call: RemoteCall) -> PageJob {
        PageJob {
            session,
            kind: ResourceKind::Locations,
            call,
        }
    }

    #[tokio::test]
    async fn test_create_reports_created_record() {
        let (loader, mut rx) = loader();
        let session = PageSession::new();

        let draft = Draft::new().with_field("title", "HQ");
        loader.run(job(session, RemoteCall::Create { draft })).await;

        match rx.recv().await.unwrap() {
            DataEvent::RecordSaved {
                session: s,
                outcome: SaveOutcome::Created(record),
            } => {
                assert_eq!(s, session);
                assert_eq!(record.id(), &RecordId::from(1));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_requested_identity() {
        let (loader, mut rx) = loader();
        let session = PageSession::new();

        let call = RemoteCall::Update {
            id: RecordId::from(7),
            draft: Draft::new().with_field("title", "New"),
        };
        loader.run(job(session, call)).await;

        match rx.recv().await.unwrap() {
            DataEvent::RecordSaved {
                outcome: SaveOutcome::Updated { id, record },
                ..
            } => {
                assert_eq!(id, RecordId::from(7));
                assert_eq!(record.id(), &RecordId::from(7));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_delete_is_reported() {
        let (loader, mut rx) = loader();
        let session = PageSession::new();

        loader
            .run(job(session, RemoteCall::Delete { id: RecordId::from(3) }))
            .await;

        match rx.recv().await.unwrap() {
            DataEvent::DeleteFailed { id, error, .. } => {
                assert_eq!(id, RecordId::from(3));
                assert!(error.contains("404"), "unexpected error text {error}");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_channel_is_not_an_error() {
        let (loader, rx) = loader();
        drop(rx);
        loader
            .run(job(PageSession::new(), RemoteCall::List))
            .await;
    }
}
