pub mod records;

use crate::record::Draft;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// What goes into the request body.
#[derive(Debug, Clone, Copy)]
pub enum RequestData<'a> {
    Empty,
    /// Encoded as JSON, or as `multipart/form-data` when the draft carries
    /// a pending upload.
    Fields(&'a Draft),
}

pub trait Endpoint {
    type Response: FromResponse;
    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<'_> {
        RequestData::Empty
    }
}

/// Turns a successful response body into the endpoint's response type.
pub trait FromResponse: Sized {
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error>;
}

impl<T: DeserializeOwned> FromResponse for Json<T> {
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Json)
    }
}

/// JSON-decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

/// Response whose body, if any, is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyResponse;

impl FromResponse for EmptyResponse {
    fn from_body(_body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(EmptyResponse)
    }
}
