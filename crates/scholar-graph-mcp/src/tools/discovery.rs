//! Discovery tools: search_papers, search_authors, search_snippets.

use serde_json::json;

use super::{McpTool, ToolContext, parse_input};
use crate::client::request;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{
    Author, ListResponse, Paper, SearchAuthorsInput, SearchPapersInput, SearchSnippetsInput,
    Snippet,
};

/// Relevance-ranked paper search.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search Semantic Scholar for papers by keyword, with optional filters for \
         publication type, open access, citation count, year and venue."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'transformer attention mechanisms')"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 100,
                    "description": "Maximum results to return"
                },
                "offset": {
                    "type": "integer",
                    "default": 0,
                    "minimum": 0,
                    "description": "Results to skip"
                },
                "fields": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Fields to return (comma-separated or list)"
                },
                "publicationTypes": {
                    "type": "string",
                    "description": "Comma-separated types (e.g., 'JournalArticle,Review')"
                },
                "openAccessPdf": {
                    "type": "boolean",
                    "description": "Only papers with an open access PDF"
                },
                "minCitationCount": {
                    "type": "integer",
                    "description": "Minimum citation count"
                },
                "year": {
                    "type": "string",
                    "description": "Year or range ('2019', '2016-2020', '2010-', '-2015')"
                },
                "venue": {
                    "type": "string",
                    "description": "Publication venue (e.g., 'Nature')"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = parse_input(input)?;
        let result: ListResponse<Paper> = ctx.fetch(&request::search_papers(&params)?).await?;
        Ok(formatters::format_paper_search(&result))
    }
}

/// Author search by name.
pub struct SearchAuthorsTool;

#[async_trait::async_trait]
impl McpTool for SearchAuthorsTool {
    fn name(&self) -> &'static str {
        "search_authors"
    }

    fn description(&self) -> &'static str {
        "Search for authors by name. Returns paper count, citation count and h-index."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Author name to search for"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 1000
                },
                "offset": {
                    "type": "integer",
                    "default": 0,
                    "minimum": 0
                },
                "fields": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Fields to return"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchAuthorsInput = parse_input(input)?;
        let result: ListResponse<Author> = ctx.fetch(&request::search_authors(&params)?).await?;
        Ok(formatters::format_author_search(&result))
    }
}

/// Full-text snippet search.
pub struct SearchSnippetsTool;

#[async_trait::async_trait]
impl McpTool for SearchSnippetsTool {
    fn name(&self) -> &'static str {
        "search_snippets"
    }

    fn description(&self) -> &'static str {
        "Search for text passages across paper titles, abstracts and bodies. \
         Each match names the paper it comes from."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text to search for"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 100
                },
                "offset": {
                    "type": "integer",
                    "default": 0,
                    "minimum": 0
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchSnippetsInput = parse_input(input)?;
        let result: ListResponse<Snippet> = ctx.fetch(&request::search_snippets(&params)?).await?;
        Ok(formatters::format_snippet_search(&result))
    }
}
