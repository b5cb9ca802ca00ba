//! MCP tool implementations.
//!
//! Each tool:
//! 1. Decodes its loosely-typed arguments
//! 2. Builds one Graph API request and executes it
//! 3. Renders the response as plain text

mod discovery;
mod enrichment;
mod networks;
mod pdf;

pub use discovery::{SearchAuthorsTool, SearchPapersTool, SearchSnippetsTool};
pub use enrichment::{GetAuthorTool, GetPaperBatchTool, GetPaperTool};
pub use networks::{CitationContextTool, PaperCitationsTool, PaperReferencesTool};
pub use pdf::{DownloadPaperPdfTool, PaperPdfInfoTool};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{ApiRequest, ScholarClient};
use crate::config::Config;
use crate::error::{ToolError, ToolResult};
use crate::pdf::PdfSink;

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// API client.
    pub client: Arc<ScholarClient>,

    /// Where downloaded PDFs go.
    pub sink: Arc<PdfSink>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ScholarClient>, sink: Arc<PdfSink>) -> Self {
        Self { client, sink }
    }

    /// Build the client and sink from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ScholarClient::new(config)?;
        Ok(Self::new(Arc::new(client), Arc::new(PdfSink::from_config(config))))
    }

    /// Execute a request and decode the JSON into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> ToolResult<T> {
        let value = self.client.execute(request).await?;
        decode(value)
    }
}

/// Text returned to the MCP caller, flagged when it describes a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Rendered text block.
    pub text: String,
    /// Whether the text is an error message.
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    /// Error output.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: Value) -> ToolResult<String>;

    /// Execute and fold any error into caller-facing text.
    async fn call(&self, ctx: &ToolContext, input: Value) -> ToolOutput {
        match self.execute(ctx, input).await {
            Ok(text) => ToolOutput::text(text),
            Err(e) => {
                tracing::warn!(tool = self.name(), error = %e, "Tool call failed");
                ToolOutput::error(e.to_user_message())
            }
        }
    }
}

/// Decode tool arguments; a missing argument object counts as `{}`.
pub(crate) fn parse_input<T: DeserializeOwned>(input: Value) -> ToolResult<T> {
    let input = if input.is_null() { Value::Object(serde_json::Map::new()) } else { input };
    serde_json::from_value(input).map_err(ToolError::invalid_input)
}

/// Decode an API response into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ToolResult<T> {
    serde_json::from_value(value).map_err(ToolError::unexpected_response)
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Discovery tools (3)
        Box::new(SearchPapersTool),
        Box::new(SearchAuthorsTool),
        Box::new(SearchSnippetsTool),
        // Lookup tools (3)
        Box::new(GetPaperTool),
        Box::new(GetPaperBatchTool),
        Box::new(GetAuthorTool),
        // Citation graph tools (3)
        Box::new(PaperCitationsTool),
        Box::new(PaperReferencesTool),
        Box::new(CitationContextTool),
        // PDF tools (2)
        Box::new(PaperPdfInfoTool),
        Box::new(DownloadPaperPdfTool),
    ]
}

/// Find a registered tool by name.
#[must_use]
pub fn find_tool<'a>(tools: &'a [Box<dyn McpTool>], name: &str) -> Option<&'a dyn McpTool> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}
