//! Error types for the API client.
//!
//! Every variant carries the data needed to explain the failure on its own:
//! the URL that was requested, and the status code or offending payload where
//! one exists. None of them wrap the transport library's error type, so
//! callers can match on them without depending on `reqwest`.

/// Errors that can occur when constructing a requester or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL was supplied as something other than a string.
    #[error(
        "Cannot create a requester from {value} ({kind}); expected a URL string like \"https://<host>\""
    )]
    InvalidUrlType { value: String, kind: &'static str },
    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status_code}")]
    HttpError { url: String, status_code: u16 },
    /// No response was received: refused connection, DNS failure or timeout.
    #[error("Could not connect to {url}; the address may be wrong or the network unavailable")]
    ConnectionFailure { url: String },
    /// The URL could not be parsed, usually because the scheme is missing.
    #[error("Malformed URL {url}; expected a URL like \"https://<host>\"")]
    MalformedUrl { url: String },
    /// Any other transport failure.
    #[error("Unknown error while requesting {url}")]
    UnknownRequestError { url: String },
    /// The category listing was served with a non-JSON content type.
    #[error("Response from {url} is not JSON and cannot be read as a category listing")]
    NotJsonContent { url: String },
    /// The category listing body is not a JSON object.
    #[error("Response body is not a JSON object: {}", truncate_body(.body))]
    MalformedJson { body: String },
}

impl Error {
    /// The URL the failed request was made against, if the error has one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::HttpError { url, .. }
            | Self::ConnectionFailure { url }
            | Self::MalformedUrl { url }
            | Self::UnknownRequestError { url }
            | Self::NotJsonContent { url } => Some(url),
            Self::InvalidUrlType { .. } | Self::MalformedJson { .. } => None,
        }
    }

    /// The HTTP status code, for [`Error::HttpError`] only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
