//! Error types for the Scholar Graph MCP server.
//!
//! Uses `thiserror` for structured error handling. Every variant renders a
//! caller-facing message; nothing here is fatal to the process.

/// Errors from the HTTP client layer.
///
/// The three rate-limit flavours carry different remediation text, so they
/// are separate variants rather than one status-code bucket.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// 403 without an API key: the caller is on the shared public pool.
    #[error(
        "Access denied (HTTP 403). Requests without an API key draw from the shared public \
         rate limit (1000 req/sec) across all users. Get a free key at \
         https://www.semanticscholar.org/product/api and set SEMANTIC_SCHOLAR_API_KEY."
    )]
    ForbiddenWithoutKey,

    /// 403 with an API key configured.
    #[error(
        "Access denied (HTTP 403). API key may be invalid or rate limit exceeded. \
         Check that SEMANTIC_SCHOLAR_API_KEY is correct and active."
    )]
    ForbiddenWithKey,

    /// 429 from the API.
    #[error(
        "Rate limit exceeded (HTTP 429).{} Wait before retrying, or request an API key with \
         dedicated higher limits at https://www.semanticscholar.org/product/api.",
        retry_hint(.retry_after)
    )]
    RateLimited {
        /// Seconds from the `Retry-After` header, when sent.
        retry_after: Option<u64>,
    },

    /// Any other non-2xx status.
    #[error("HTTP error: {status} {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Reason phrase and response detail
        message: String,
    },

    /// No response obtained (connection, DNS, TLS, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("Request failed: response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after.map(|s| format!(" Retry after {s}s.")).unwrap_or_default()
}

impl ClientError {
    /// Create a generic HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http { status, message: message.into() }
    }

    /// Returns true for the 403/429 rate-limit family.
    #[must_use]
    pub const fn is_rate_limit(&self) -> bool {
        matches!(
            self,
            Self::ForbiddenWithoutKey | Self::ForbiddenWithKey | Self::RateLimited { .. }
        )
    }

    /// HTTP status behind this error, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ForbiddenWithoutKey | Self::ForbiddenWithKey => Some(403),
            Self::RateLimited { .. } => Some(429),
            Self::Http { status, .. } => Some(*status),
            Self::Request(_) | Self::Parse(_) => None,
        }
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Tool arguments could not be interpreted
    #[error("Invalid arguments: {0}")]
    InvalidInput(String),

    /// API answered with JSON of an unexpected shape
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Paper has no open-access PDF
    #[error("No open access PDF available for this paper.")]
    NoPdf,

    /// Fetching the PDF bytes failed
    #[error("{0}")]
    Download(ClientError),

    /// Writing the PDF to local storage failed
    #[error("{0}")]
    Save(String),
}

impl ToolError {
    /// Create an invalid-input error.
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput(message.to_string())
    }

    /// Create an unexpected-response error.
    #[must_use]
    pub fn unexpected_response(message: impl std::fmt::Display) -> Self {
        Self::UnexpectedResponse(message.to_string())
    }

    /// Create a save error.
    #[must_use]
    pub fn save(message: impl std::fmt::Display) -> Self {
        Self::Save(message.to_string())
    }

    /// Convert to the text block returned to the MCP caller.
    ///
    /// Network problems and disk problems carry different prefixes.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Download(e) => format!("Error downloading PDF: {e}"),
            Self::Save(msg) => format!("Error saving PDF: {msg}"),
            _ => format!("Error: {self}"),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
