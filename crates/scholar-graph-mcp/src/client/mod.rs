//! Semantic Scholar Graph API client.
//!
//! One HTTP call per operation: no retries, no caching, no rate limiting on
//! our side. Failures are classified into [`ClientError`] variants whose
//! messages tell the caller what to do next.

pub mod request;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

pub use request::{ApiRequest, EdgeDirection, Method};

/// Downloaded PDF bytes plus what the server said about them.
#[derive(Debug, Clone)]
pub struct PdfPayload {
    /// Response body.
    pub bytes: Vec<u8>,
    /// `Content-Type` header, if sent.
    pub content_type: Option<String>,
    /// URL after redirects.
    pub final_url: String,
}

impl PdfPayload {
    /// Whether the response looks like a PDF, by content type or URL suffix.
    #[must_use]
    pub fn looks_like_pdf(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/pdf"));
        let by_path = url::Url::parse(&self.final_url)
            .map(|u| u.path().to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        let by_magic = self.bytes.starts_with(b"%PDF");
        by_type || by_path || by_magic
    }
}

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct ScholarClient {
    /// JSON API client (carries the API key header when configured).
    http: Client,

    /// PDF download client (never carries the API key).
    download: Client,

    /// Graph API base URL.
    graph_api_url: String,

    /// Whether an API key is configured.
    has_api_key: bool,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert(api::API_KEY_HEADER, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let download = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.download_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            http,
            download,
            graph_api_url: config.graph_api_url.trim_end_matches('/').to_string(),
            has_api_key: config.has_api_key(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Absolute URL for a request path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.graph_api_url, path.trim_start_matches('/'))
    }

    /// Perform one Graph API call and return the parsed JSON unchanged.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ClientError`] on transport failure, non-2xx
    /// status or a body that is not JSON.
    pub async fn execute(&self, request: &ApiRequest) -> ClientResult<Value> {
        let url = self.url(&request.path);
        debug!(method = ?request.method, path = %request.path, "Graph API request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.inspect_err(|e| {
            warn!(path = %request.path, error = %e, "Graph API request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = retry_after_secs(response.headers());
            let body = response.text().await.unwrap_or_default();
            let err = classify_status(status, self.has_api_key, retry_after, &body);
            warn!(path = %request.path, status = status.as_u16(), "Graph API returned an error");
            return Err(err);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch PDF bytes from an open-access URL, following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] on transport failure and
    /// [`ClientError::Http`] on a non-2xx status.
    pub async fn fetch_pdf(&self, url: &str) -> ClientResult<PdfPayload> {
        debug!(url, "Fetching PDF");

        let response = self.download.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::http(status.as_u16(), reason(status)));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(PdfPayload { bytes, content_type, final_url })
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown Status").to_string()
}

/// Map a non-2xx status to a [`ClientError`].
///
/// Order matters: 403 is split on key presence, then 429, then everything
/// else as a plain HTTP error carrying the API's own message when it sent one.
#[must_use]
pub fn classify_status(
    status: StatusCode,
    has_api_key: bool,
    retry_after: Option<u64>,
    body: &str,
) -> ClientError {
    match status {
        StatusCode::FORBIDDEN if has_api_key => ClientError::ForbiddenWithKey,
        StatusCode::FORBIDDEN => ClientError::ForbiddenWithoutKey,
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { retry_after },
        _ => {
            let mut message = reason(status);
            if let Some(detail) = api_error_detail(body) {
                message.push_str(" - ");
                message.push_str(&detail);
            }
            ClientError::http(status.as_u16(), message)
        }
    }
}

/// The `error` or `message` string from an API error body.
fn api_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key)?.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_depends_on_key() {
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, false, None, ""),
            ClientError::ForbiddenWithoutKey
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, true, None, ""),
            ClientError::ForbiddenWithKey
        ));
    }

    #[test]
    fn test_rate_limited_keeps_retry_after() {
        let err = classify_status(StatusCode::TOO_MANY_REQUESTS, true, Some(12), "");
        assert!(matches!(err, ClientError::RateLimited { retry_after: Some(12) }));
    }

    #[test]
    fn test_other_status_uses_api_detail() {
        let err =
            classify_status(StatusCode::NOT_FOUND, false, None, r#"{"error":"Paper not found"}"#);
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found - Paper not found");

        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, false, None, "<html>");
        assert_eq!(err.to_string(), "HTTP error: 500 Internal Server Error");
    }

    #[test]
    fn test_debug_hides_key() {
        let config = Config::for_testing_with_key("http://localhost:1", "secret-key");
        let client = ScholarClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[test]
    fn test_url_joining() {
        let client = ScholarClient::new(&Config::for_testing("http://localhost:1/")).unwrap();
        assert_eq!(client.url("paper/search"), "http://localhost:1/graph/v1/paper/search");
    }

    #[test]
    fn test_pdf_detection() {
        let payload = PdfPayload {
            bytes: b"<html>".to_vec(),
            content_type: Some("text/html".to_string()),
            final_url: "https://example.org/landing".to_string(),
        };
        assert!(!payload.looks_like_pdf());

        let payload = PdfPayload {
            bytes: b"%PDF-1.4".to_vec(),
            content_type: None,
            final_url: "https://example.org/download".to_string(),
        };
        assert!(payload.looks_like_pdf());
    }
}
