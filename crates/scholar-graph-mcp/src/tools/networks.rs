//! Citation graph tools: get_paper_citations, get_paper_references, get_citation_context.

use serde_json::json;

use super::{McpTool, ToolContext, parse_input};
use crate::client::{EdgeDirection, request};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{
    CitationContext, CitationContextInput, CitationEdge, ListResponse, PaperEdgesInput,
    ReferenceEdge,
};

fn edges_schema(direction: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "paperId": {
                "type": "string",
                "description": format!("Paper whose {direction} to list")
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
                "description": "Fields to return for each paper"
            }
        },
        "required": ["paperId"]
    })
}

/// Papers citing a paper.
pub struct PaperCitationsTool;

#[async_trait::async_trait]
impl McpTool for PaperCitationsTool {
    fn name(&self) -> &'static str {
        "get_paper_citations"
    }

    fn description(&self) -> &'static str {
        "List papers that cite the given paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        edges_schema("citations")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperEdgesInput = parse_input(input)?;
        let request = request::paper_edges(&params, EdgeDirection::Citations)?;
        let result: ListResponse<CitationEdge> = ctx.fetch(&request).await?;
        Ok(formatters::format_citations(&result))
    }
}

/// Papers a paper cites.
pub struct PaperReferencesTool;

#[async_trait::async_trait]
impl McpTool for PaperReferencesTool {
    fn name(&self) -> &'static str {
        "get_paper_references"
    }

    fn description(&self) -> &'static str {
        "List papers referenced by the given paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        edges_schema("references")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperEdgesInput = parse_input(input)?;
        let request = request::paper_edges(&params, EdgeDirection::References)?;
        let result: ListResponse<ReferenceEdge> = ctx.fetch(&request).await?;
        Ok(formatters::format_references(&result))
    }
}

/// Sentences in which one paper cites another.
pub struct CitationContextTool;

#[async_trait::async_trait]
impl McpTool for CitationContextTool {
    fn name(&self) -> &'static str {
        "get_citation_context"
    }

    fn description(&self) -> &'static str {
        "Show the sentences in which one paper cites another."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "ID of the paper being cited"
                },
                "citingPaperId": {
                    "type": "string",
                    "description": "ID of the paper doing the citing"
                }
            },
            "required": ["paperId", "citingPaperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationContextInput = parse_input(input)?;
        let context: CitationContext = ctx.fetch(&request::citation_context(&params)?).await?;
        Ok(formatters::format_citation_context(&context))
    }
}
