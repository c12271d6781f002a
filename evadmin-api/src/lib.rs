pub mod endpoints;
mod error;
pub mod record;
pub mod repositories;
pub mod schema;

pub use crate::error::RequestError;
pub use crate::record::{Draft, FieldValue, PendingUpload, Record, RecordId};
pub use crate::schema::{FieldKind, FieldSpec, ResourceKind, Schema};
pub use reqwest::{Method, StatusCode};

use async_trait::async_trait;
use endpoints::{Endpoint, FromResponse, Json, RequestData};
use repositories::RecordRepository;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RequestError> {
        let inner = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, RequestError>
    where
        R: Endpoint,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let builder = self.inner.request(R::METHOD, &url);
        let builder = match request.data() {
            RequestData::Empty => builder,
            RequestData::Fields(draft) if draft.has_upload() => {
                builder.multipart(multipart_form(draft).await?)
            }
            RequestData::Fields(draft) => builder.json(draft),
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status,
                method: R::METHOD,
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(<R::Response as FromResponse>::from_body(&body)?)
    }
}

/// Multipart body for a draft: uploads become file parts, everything else a
/// text part.
async fn multipart_form(draft: &Draft) -> Result<Form, RequestError> {
    let mut form = Form::new();
    for (name, value) in draft.fields() {
        form = match value {
            FieldValue::Empty => form.text(name.to_string(), String::new()),
            FieldValue::Text(text) => form.text(name.to_string(), text.clone()),
            FieldValue::Flag(flag) => form.text(name.to_string(), flag.to_string()),
            FieldValue::Upload(upload) => {
                let bytes = tokio::fs::read(upload.path()).await.map_err(|source| {
                    RequestError::Attachment {
                        path: upload.path().to_path_buf(),
                        source,
                    }
                })?;
                let mime = mime_guess::from_path(upload.path()).first_or_octet_stream();
                let part = Part::bytes(bytes)
                    .file_name(upload.file_name())
                    .mime_str(mime.essence_str())?;
                form.part(name.to_string(), part)
            }
        };
    }
    Ok(form)
}

pub struct Request;

impl Request {
    pub fn events() -> RecordRepository {
        RecordRepository::new(ResourceKind::Events)
    }

    pub fn locations() -> RecordRepository {
        RecordRepository::new(ResourceKind::Locations)
    }

    pub fn contacts() -> RecordRepository {
        RecordRepository::new(ResourceKind::Contacts)
    }

    pub fn records(kind: ResourceKind) -> RecordRepository {
        RecordRepository::new(kind)
    }
}

/// CRUD surface the application talks to.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, RequestError>;

    async fn create(&self, kind: ResourceKind, draft: &Draft) -> Result<Record, RequestError>;

    async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> Result<Record, RequestError>;

    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), RequestError>;
}

#[async_trait]
impl ResourceClient for Client {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, RequestError> {
        let Json(records) = self.send(Request::records(kind).list()).await?;
        Ok(records)
    }

    async fn create(&self, kind: ResourceKind, draft: &Draft) -> Result<Record, RequestError> {
        let Json(record) = self.send(Request::records(kind).create(draft.clone())).await?;
        Ok(record)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> Result<Record, RequestError> {
        let request = Request::records(kind).update(id.clone(), draft.clone());
        let Json(record) = self.send(request).await?;
        Ok(record)
    }

    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), RequestError> {
        self.send(Request::records(kind).delete(id.clone())).await?;
        Ok(())
    }
}
