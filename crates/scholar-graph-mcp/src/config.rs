//! Configuration for the Scholar Graph MCP server.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Timeout for JSON API requests.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for binary (PDF) downloads.
    pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("scholar-graph-mcp/", env!("CARGO_PKG_VERSION"));

    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Where API keys are issued.
    pub const API_KEY_URL: &str = "https://www.semanticscholar.org/product/api";
}

/// Default field selections per operation. Each set includes the id field.
pub mod fields {
    /// Paper search and batch lookups.
    pub const PAPER_SEARCH: &str = "paperId,title,authors,year,venue,citationCount,abstract";

    /// Single paper detail view.
    pub const PAPER_DETAIL: &str = "paperId,title,authors,year,venue,citationCount,abstract,\
                                    references,citations,openAccessPdf";

    /// Citation and reference listings.
    pub const PAPER_EDGES: &str = "paperId,title,authors,year,venue,citationCount";

    /// Author search.
    pub const AUTHOR_SEARCH: &str = "authorId,name,paperCount,citationCount,hIndex";

    /// Author detail view (with embedded papers).
    pub const AUTHOR_DETAIL: &str = "authorId,name,paperCount,citationCount,hIndex,papers";

    /// PDF availability lookup.
    pub const PDF_INFO: &str = "paperId,title,openAccessPdf,externalIds";

    /// Metadata needed before downloading a PDF.
    pub const PDF_DOWNLOAD: &str = "paperId,title,authors,year,openAccessPdf";
}

/// Request limits.
pub mod limits {
    /// Ceiling for text search endpoints (papers, snippets).
    pub const SEARCH_LIMIT_MAX: u32 = 100;

    /// Ceiling for relational/listing endpoints (authors, citations, references).
    pub const LISTING_LIMIT_MAX: u32 = 1000;

    /// Default page size when the caller gives none.
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Embedded papers rendered in the author detail view.
    pub const AUTHOR_PAPERS_SHOWN: usize = 10;

    /// Maximum file stem length (characters) for downloaded PDFs.
    pub const FILENAME_MAX_LEN: usize = 100;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Timeout for JSON API requests.
    pub request_timeout: Duration,

    /// Timeout for PDF downloads.
    pub download_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Directory downloads land in when the caller gives none.
    pub download_dir: PathBuf,
}

impl Config {
    /// Create a new configuration.
    ///
    /// A missing download directory falls back to [`default_download_dir`].
    #[must_use]
    pub fn new(api_key: Option<String>, download_dir: Option<PathBuf>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            download_timeout: api::DOWNLOAD_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            download_dir: download_dir.unwrap_or_else(default_download_dir),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            download_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            download_dir: std::env::temp_dir().join("scholar-graph-mcp-tests"),
        }
    }

    /// Same as [`Config::for_testing`] with an API key configured.
    #[must_use]
    pub fn for_testing_with_key(base_url: &str, api_key: &str) -> Self {
        Self { api_key: Some(api_key.to_string()), ..Self::for_testing(base_url) }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY` and `SEMANTIC_SCHOLAR_DOWNLOAD_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        let download_dir = std::env::var_os("SEMANTIC_SCHOLAR_DOWNLOAD_DIR").map(PathBuf::from);
        Ok(Self::new(api_key, download_dir))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// `~/Downloads/semantic_scholar_papers`, or a relative directory when the
/// home directory cannot be determined.
#[must_use]
pub fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("semantic_scholar_papers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.download_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()), None);
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = Config::new(Some("   ".to_string()), None);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_default_download_dir() {
        assert!(default_download_dir().ends_with("semantic_scholar_papers"));
    }

    #[test]
    fn test_default_fields_include_ids() {
        for set in [
            fields::PAPER_SEARCH,
            fields::PAPER_DETAIL,
            fields::PAPER_EDGES,
            fields::PDF_INFO,
            fields::PDF_DOWNLOAD,
        ] {
            assert!(set.split(',').any(|f| f == "paperId"), "{set}");
        }
        assert!(fields::AUTHOR_SEARCH.starts_with("authorId"));
        assert!(fields::AUTHOR_DETAIL.starts_with("authorId"));
    }
}
