//! PDF tools: get_paper_pdf_info, download_paper_pdf.

use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use super::{McpTool, ToolContext, parse_input};
use crate::client::request;
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{DownloadPdfInput, Paper, PdfInfoInput};
use crate::pdf::{PdfMetadata, pdf_file_stem};

/// Open access availability and alternative links.
pub struct PaperPdfInfoTool;

#[async_trait::async_trait]
impl McpTool for PaperPdfInfoTool {
    fn name(&self) -> &'static str {
        "get_paper_pdf_info"
    }

    fn description(&self) -> &'static str {
        "Check whether a paper has an open access PDF and list alternative access \
         points (ArXiv, DOI, PubMed)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (S2 ID, DOI:, ARXIV:, PMID:)"
                }
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PdfInfoInput = parse_input(input)?;
        let paper: Paper =
            ctx.fetch(&request::paper_fields(&params.paper_id, fields::PDF_INFO)?).await?;
        Ok(formatters::format_pdf_info(&paper))
    }
}

/// Download the open access PDF to local storage.
pub struct DownloadPaperPdfTool;

#[async_trait::async_trait]
impl McpTool for DownloadPaperPdfTool {
    fn name(&self) -> &'static str {
        "download_paper_pdf"
    }

    fn description(&self) -> &'static str {
        "Download a paper's open access PDF. The file is named after the title and \
         year, never overwrites an existing file, and gets title/author metadata."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (S2 ID, DOI:, ARXIV:, PMID:)"
                },
                "downloadPath": {
                    "type": "string",
                    "description": "Directory to save into \
                                    (default: ~/Downloads/semantic_scholar_papers)"
                }
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: DownloadPdfInput = parse_input(input)?;
        let paper: Paper =
            ctx.fetch(&request::paper_fields(&params.paper_id, fields::PDF_DOWNLOAD)?).await?;

        let url = paper.pdf_url().ok_or(ToolError::NoPdf)?;
        let payload = ctx.client.fetch_pdf(url).await.map_err(ToolError::Download)?;

        let content_warning = (!payload.looks_like_pdf()).then(|| {
            format!(
                "response does not look like a PDF (content type: {})",
                payload.content_type.as_deref().unwrap_or("unknown")
            )
        });

        let dir = params.download_path.as_deref().map(expand_home);
        let target = dir.clone().unwrap_or_else(|| ctx.sink.default_dir().to_path_buf());
        let stem = pdf_file_stem(paper.title.as_deref(), paper.year);

        let saved = ctx
            .sink
            .save(dir.as_deref(), &stem, &payload.bytes, &PdfMetadata::from_paper(&paper))
            .await
            .map_err(|e| ToolError::save(format!("{}: {e}", target.display())))?;

        info!(paper_id = paper.id_or_default(), path = %saved.path.display(), "Downloaded PDF");
        Ok(formatters::format_download_report(&paper, &saved, content_warning.as_deref()))
    }
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => dirs::home_dir()
            .map(|home| home.join(rest.trim_start_matches('/')))
            .unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
