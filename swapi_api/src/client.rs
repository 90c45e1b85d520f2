//! HTTP requester for a JSON REST API rooted at a fixed base URL.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{base_url::BaseUrl, types::ApiResponse, user_agent::default_user_agent, Error};

/// Performs GET requests against `base_url + path`.
///
/// Holds one pooled `reqwest::Client` for its whole lifetime and no per-call
/// state, so a single instance can serve any number of requests. Every call
/// makes exactly one attempt; nothing is retried.
#[derive(Debug)]
pub struct ApiRequester {
    base_url: BaseUrl,
    http: reqwest::Client,
}

/// Builder for [`ApiRequester`]. No timeout is set unless one is given.
pub struct ApiRequesterBuilder {
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiRequesterBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<ApiRequester, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(default_user_agent()));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::UnknownRequestError {
                url: self.base_url.to_string(),
            }
        })?;
        tracing::debug!("Initialised requester for {}", self.base_url);
        Ok(ApiRequester {
            base_url: self.base_url,
            http,
        })
    }
}

impl ApiRequester {
    /// Creates a requester with default settings.
    pub fn new(base_url: impl Into<BaseUrl>) -> Result<Self, Error> {
        Self::builder(base_url).build()
    }

    /// Creates a requester from a dynamically typed value, e.g. one read
    /// from a config file. Fails with [`Error::InvalidUrlType`] unless the
    /// value is a string.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, Error> {
        Self::new(BaseUrl::try_from(value)?)
    }

    pub fn builder(base_url: impl Into<BaseUrl>) -> ApiRequesterBuilder {
        ApiRequesterBuilder {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Sends `GET {base_url}{path}` and returns the response if its status is 2xx.
    ///
    /// The body is decoded as UTF-8 whatever charset the server declares;
    /// invalid sequences are replaced rather than rejected.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        let url = self.base_url.join(path);
        let parsed = Url::parse(&url).map_err(|e| {
            tracing::error!("Invalid URL {}: {}", url, e);
            Error::MalformedUrl { url: url.clone() }
        })?;

        let resp = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(Error::HttpError {
                url,
                status_code: status.as_u16(),
            });
        }

        let final_url = resp.url().to_string();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await.map_err(|e| transport_error(&url, e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, bytes.len());

        Ok(ApiResponse {
            url: final_url,
            status: status.as_u16(),
            headers,
            text,
        })
    }
}

impl fmt::Display for ApiRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiRequester: {}", self.base_url)
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        tracing::error!("Could not connect to {}: {}", url, err);
        Error::ConnectionFailure {
            url: url.to_string(),
        }
    } else {
        tracing::error!("Request to {} failed: {}", url, err);
        Error::UnknownRequestError {
            url: url.to_string(),
        }
    }
}
