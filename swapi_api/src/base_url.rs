//! Normalised base URL shared by all requests of a requester.

use std::fmt;

use serde_json::Value;

use crate::Error;

/// Root address of the API with surrounding whitespace and slashes removed.
///
/// Normalisation happens once, at construction. The result is not checked
/// for a scheme or host; a bad URL surfaces as [`Error::MalformedUrl`] on the
/// first request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(raw: &str) -> Self {
        Self(strip(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends `path` verbatim.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

fn strip(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '/' || c.is_whitespace())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for BaseUrl {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for BaseUrl {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&String> for BaseUrl {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

/// Accepts only JSON strings. Anything else is [`Error::InvalidUrlType`].
impl TryFrom<&Value> for BaseUrl {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(raw) => Ok(Self::new(raw)),
            other => {
                tracing::error!("Base URL must be a string, got {}", kind_of(other));
                Err(Error::InvalidUrlType {
                    value: other.to_string(),
                    kind: kind_of(other),
                })
            }
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
