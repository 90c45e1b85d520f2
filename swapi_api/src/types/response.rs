use reqwest::header::{HeaderMap, CONTENT_TYPE};

/// A successful (2xx) response with its body decoded as UTF-8.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// URL the response was served from, after redirects.
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub text: String,
}

impl ApiResponse {
    /// The raw `Content-Type` header, if present and valid ASCII.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether the declared media type is `application/json` or a `+json` suffix type.
    pub fn is_json(&self) -> bool {
        self.content_type().map(is_json_media_type).unwrap_or(false)
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response_with(content_type: Option<&'static str>) -> ApiResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        ApiResponse {
            url: "https://swapi.dev/api/".to_string(),
            status: 200,
            headers,
            text: String::new(),
        }
    }

    #[test]
    fn plain_json() {
        assert!(response_with(Some("application/json")).is_json());
    }

    #[test]
    fn json_with_charset_and_odd_case() {
        assert!(response_with(Some("Application/JSON; charset=utf-8")).is_json());
    }

    #[test]
    fn suffix_json() {
        assert!(response_with(Some("application/problem+json")).is_json());
    }

    #[test]
    fn html_is_not_json() {
        assert!(!response_with(Some("text/html; charset=utf-8")).is_json());
    }

    #[test]
    fn missing_header_is_not_json() {
        let resp = response_with(None);
        assert_eq!(resp.content_type(), None);
        assert!(!resp.is_json());
    }
}
