//! Request builders: tool inputs to Graph API requests.
//!
//! Pure functions with no I/O. Each builder validates its input, clamps
//! numeric limits, picks the field selection and percent-encodes path ids.

use serde_json::{Value, json};

use crate::config::{fields, limits};
use crate::error::{ToolError, ToolResult};
use crate::models::{
    CitationContextInput, GetAuthorInput, GetPaperBatchInput, GetPaperInput, PaperEdgesInput,
    SearchAuthorsInput, SearchPapersInput, SearchSnippetsInput,
};

/// HTTP method of a Graph API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read operations.
    Get,
    /// Batch lookup.
    Post,
}

/// One Graph API round trip, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the base URL, ids already percent-encoded.
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// JSON body (POST only).
    pub body: Option<Value>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), query: Vec::new(), body: None }
    }

    fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), query: Vec::new(), body: Some(body) }
    }

    fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn param_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Look up a query parameter by key.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Clamp a caller-supplied limit into `1..=max`, defaulting to 10.
#[must_use]
pub fn clamp_limit(limit: Option<i64>, max: u32) -> u32 {
    let limit = limit.unwrap_or(limits::DEFAULT_LIMIT).clamp(1, i64::from(max));
    u32::try_from(limit).unwrap_or(max)
}

/// Clamp a caller-supplied offset to be non-negative.
#[must_use]
pub fn clamp_offset(offset: Option<i64>) -> u64 {
    offset.map_or(0, |o| o.max(0).unsigned_abs())
}

/// Percent-encode an identifier so it stays a single path segment.
#[must_use]
pub fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Caller's field list, or the operation default.
fn field_selection(custom: Option<&[String]>, default: &str) -> String {
    match custom {
        Some(list) if !list.is_empty() => list.join(","),
        _ => default.to_string(),
    }
}

fn required<'a>(value: &'a str, name: &str) -> ToolResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_input(format!("`{name}` must not be empty")));
    }
    Ok(trimmed)
}

/// `GET paper/search`.
pub fn search_papers(input: &SearchPapersInput) -> ToolResult<ApiRequest> {
    let query = required(&input.query, "query")?;

    let request = ApiRequest::get("paper/search")
        .param("query", query)
        .param("limit", clamp_limit(input.limit, limits::SEARCH_LIMIT_MAX))
        .param("offset", clamp_offset(input.offset))
        .param("fields", field_selection(input.fields.as_deref(), fields::PAPER_SEARCH))
        .param_opt("publicationTypes", input.publication_types.as_ref().map(|t| t.join(",")))
        .param_opt("openAccessPdf", input.open_access_pdf)
        .param_opt("minCitationCount", input.min_citation_count)
        .param_opt("year", input.year.as_deref())
        .param_opt("venue", input.venue.as_deref());

    Ok(request)
}

/// `GET paper/{id}`.
pub fn get_paper(input: &GetPaperInput) -> ToolResult<ApiRequest> {
    let id = required(&input.paper_id, "paperId")?;
    Ok(ApiRequest::get(format!("paper/{}", encode_id(id)))
        .param("fields", field_selection(input.fields.as_deref(), fields::PAPER_DETAIL)))
}

/// `POST paper/batch` with `{"ids": [...]}`.
pub fn get_paper_batch(input: &GetPaperBatchInput) -> ToolResult<ApiRequest> {
    let ids = input.paper_ids.as_deref().unwrap_or_default();
    if ids.is_empty() {
        return Err(ToolError::invalid_input("`paperIds` must contain at least one id"));
    }

    Ok(ApiRequest::post("paper/batch", json!({ "ids": ids }))
        .param("fields", field_selection(input.fields.as_deref(), fields::PAPER_SEARCH)))
}

/// `GET author/search`.
pub fn search_authors(input: &SearchAuthorsInput) -> ToolResult<ApiRequest> {
    let query = required(&input.query, "query")?;
    Ok(ApiRequest::get("author/search")
        .param("query", query)
        .param("limit", clamp_limit(input.limit, limits::LISTING_LIMIT_MAX))
        .param("offset", clamp_offset(input.offset))
        .param("fields", field_selection(input.fields.as_deref(), fields::AUTHOR_SEARCH)))
}

/// `GET author/{id}`.
pub fn get_author(input: &GetAuthorInput) -> ToolResult<ApiRequest> {
    let id = required(&input.author_id, "authorId")?;
    Ok(ApiRequest::get(format!("author/{}", encode_id(id)))
        .param("fields", field_selection(input.fields.as_deref(), fields::AUTHOR_DETAIL)))
}

/// `GET snippet/search`.
pub fn search_snippets(input: &SearchSnippetsInput) -> ToolResult<ApiRequest> {
    let query = required(&input.query, "query")?;
    Ok(ApiRequest::get("snippet/search")
        .param("query", query)
        .param("limit", clamp_limit(input.limit, limits::SEARCH_LIMIT_MAX))
        .param("offset", clamp_offset(input.offset)))
}

/// Which side of the citation graph to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Papers citing the given paper.
    Citations,
    /// Papers the given paper cites.
    References,
}

impl EdgeDirection {
    /// Path segment for this direction.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Citations => "citations",
            Self::References => "references",
        }
    }
}

/// `GET paper/{id}/citations` or `GET paper/{id}/references`.
pub fn paper_edges(input: &PaperEdgesInput, direction: EdgeDirection) -> ToolResult<ApiRequest> {
    let id = required(&input.paper_id, "paperId")?;
    Ok(ApiRequest::get(format!("paper/{}/{}", encode_id(id), direction.segment()))
        .param("limit", clamp_limit(input.limit, limits::LISTING_LIMIT_MAX))
        .param("offset", clamp_offset(input.offset))
        .param("fields", field_selection(input.fields.as_deref(), fields::PAPER_EDGES)))
}

/// `GET paper/{id}/citations/{citingId}`.
pub fn citation_context(input: &CitationContextInput) -> ToolResult<ApiRequest> {
    let cited = required(&input.paper_id, "paperId")?;
    let citing = required(&input.citing_paper_id, "citingPaperId")?;
    Ok(ApiRequest::get(format!("paper/{}/citations/{}", encode_id(cited), encode_id(citing))))
}

/// `GET paper/{id}` with a fixed field set (PDF info and download).
pub fn paper_fields(paper_id: &str, field_set: &str) -> ToolResult<ApiRequest> {
    let id = required(paper_id, "paperId")?;
    Ok(ApiRequest::get(format!("paper/{}", encode_id(id))).param("fields", field_set))
}
