//! Lookup tools: get_paper, get_paper_batch, get_author.

use serde_json::json;

use super::{McpTool, ToolContext, parse_input};
use crate::client::request;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{
    Author, BatchResponse, GetAuthorInput, GetPaperBatchInput, GetPaperInput, Paper,
};

/// Single paper lookup.
pub struct GetPaperTool;

#[async_trait::async_trait]
impl McpTool for GetPaperTool {
    fn name(&self) -> &'static str {
        "get_paper"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a paper: authors, venue, abstract, \
         reference and citation counts, and open access PDF link."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (S2 ID, DOI:, ARXIV:, PMID:, CorpusId:, URL:)"
                },
                "fields": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Fields to return"
                }
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetPaperInput = parse_input(input)?;
        let paper: Paper = ctx.fetch(&request::get_paper(&params)?).await?;
        Ok(formatters::format_paper_detail(&paper))
    }
}

/// Batch paper lookup.
pub struct GetPaperBatchTool;

#[async_trait::async_trait]
impl McpTool for GetPaperBatchTool {
    fn name(&self) -> &'static str {
        "get_paper_batch"
    }

    fn description(&self) -> &'static str {
        "Look up several papers in one request. Unknown IDs are reported as not found."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperIds": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Paper IDs, comma-separated or as a list"
                },
                "fields": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Fields to return"
                }
            },
            "required": ["paperIds"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetPaperBatchInput = parse_input(input)?;
        let result: BatchResponse = ctx.fetch(&request::get_paper_batch(&params)?).await?;
        Ok(formatters::format_batch(&result.into_entries()))
    }
}

/// Author profile lookup.
pub struct GetAuthorTool;

#[async_trait::async_trait]
impl McpTool for GetAuthorTool {
    fn name(&self) -> &'static str {
        "get_author"
    }

    fn description(&self) -> &'static str {
        "Get an author's profile: paper count, citations, h-index and recent papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorId": {
                    "type": "string",
                    "description": "Semantic Scholar author ID"
                },
                "fields": {
                    "type": ["string", "array"],
                    "items": {"type": "string"},
                    "description": "Fields to return"
                }
            },
            "required": ["authorId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GetAuthorInput = parse_input(input)?;
        let author: Author = ctx.fetch(&request::get_author(&params)?).await?;
        Ok(formatters::format_author_detail(&author))
    }
}
