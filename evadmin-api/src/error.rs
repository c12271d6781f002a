use reqwest::StatusCode;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("({status}) {method} {url}")]
    Status {
        status: StatusCode,
        method: reqwest::Method,
        url: String,
    },

    #[error("cannot read attachment {}: {source}", path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// HTTP status of the failed call, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
