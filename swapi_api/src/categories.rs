//! Category listing and retrieval on top of [`ApiRequester`].

use std::fmt;

use serde_json::{Map, Value};

use crate::{base_url::BaseUrl, client::ApiRequester, types::CategorySet, Error};

/// Lists the API's top-level categories and fetches their first page.
#[derive(Debug)]
pub struct CategoryRequester {
    inner: ApiRequester,
}

impl From<ApiRequester> for CategoryRequester {
    fn from(inner: ApiRequester) -> Self {
        Self { inner }
    }
}

impl CategoryRequester {
    pub fn new(base_url: impl Into<BaseUrl>) -> Result<Self, Error> {
        Ok(Self::from(ApiRequester::new(base_url)?))
    }

    /// See [`ApiRequester::from_value`].
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self::from(ApiRequester::from_value(value)?))
    }

    pub fn requester(&self) -> &ApiRequester {
        &self.inner
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.inner.base_url()
    }

    /// Fetches the API root and returns the keys of its JSON object.
    ///
    /// The response must declare a JSON content type
    /// ([`Error::NotJsonContent`] otherwise) and its body must decode to a
    /// JSON object ([`Error::MalformedJson`] otherwise, arrays and scalars
    /// included).
    pub async fn list_categories(&self) -> Result<CategorySet, Error> {
        let resp = self.inner.get("/").await?;

        if !resp.is_json() {
            let url = self.inner.base_url().join("/");
            tracing::error!(
                "Listing at {} has content type {:?}, expected JSON",
                url,
                resp.content_type()
            );
            return Err(Error::NotJsonContent { url });
        }

        let root: Map<String, Value> = match serde_json::from_str(&resp.text) {
            Ok(root) => root,
            Err(e) => {
                tracing::error!("Failed to parse category listing from {}: {}", resp.url, e);
                return Err(Error::MalformedJson { body: resp.text });
            }
        };

        let categories: CategorySet = root.into_iter().map(|(name, _)| name).collect();
        tracing::info!("Found {} categories: {:?}", categories.len(), categories);
        Ok(categories)
    }

    /// Fetches `/{name}/` and returns the body untouched.
    pub async fn fetch_category(&self, name: &str) -> Result<String, Error> {
        let resp = self.inner.get(&format!("/{}/", name)).await?;
        tracing::info!("Fetched category {} ({} bytes)", name, resp.text.len());
        Ok(resp.text)
    }
}

impl fmt::Display for CategoryRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryRequester: {}", self.inner.base_url())
    }
}
