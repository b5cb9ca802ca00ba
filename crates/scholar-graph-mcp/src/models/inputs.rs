//! Input models for MCP tool parameters.
//!
//! Argument names are camelCase; snake_case spellings are accepted as
//! aliases. Numbers, booleans and lists are decoded leniently (see
//! [`super::lenient`]).

use serde::{Deserialize, Serialize};

use super::lenient::{comma_list, opt_bool, opt_int, opt_string};

/// Input for `search_papers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPapersInput {
    /// Search query string.
    pub query: String,

    /// Maximum results (default 10, clamped to 100).
    #[serde(default, deserialize_with = "opt_int")]
    pub limit: Option<i64>,

    /// Results to skip.
    #[serde(default, deserialize_with = "opt_int")]
    pub offset: Option<i64>,

    /// Fields to return (overrides the default set).
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,

    /// Publication type filter (e.g. "JournalArticle,Review").
    #[serde(default, alias = "publication_types", deserialize_with = "comma_list")]
    pub publication_types: Option<Vec<String>>,

    /// Only papers with an open access PDF.
    #[serde(default, alias = "open_access_pdf", deserialize_with = "opt_bool")]
    pub open_access_pdf: Option<bool>,

    /// Minimum citation count.
    #[serde(default, alias = "min_citation_count", deserialize_with = "opt_int")]
    pub min_citation_count: Option<i64>,

    /// Publication year or range ("2019", "2016-2020", "2010-").
    #[serde(default, deserialize_with = "opt_string")]
    pub year: Option<String>,

    /// Publication venue.
    #[serde(default, deserialize_with = "opt_string")]
    pub venue: Option<String>,
}

/// Input for `get_paper`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaperInput {
    /// Paper ID (S2 ID, `DOI:`, `ARXIV:`, `PMID:`, ...).
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    /// Fields to return.
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_paper_batch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaperBatchInput {
    /// Paper IDs, as an array or a comma-separated string.
    #[serde(default, alias = "paper_ids", deserialize_with = "comma_list")]
    pub paper_ids: Option<Vec<String>>,

    /// Fields to return.
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,
}

/// Input for `search_authors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAuthorsInput {
    /// Author name or query.
    pub query: String,

    /// Maximum results (default 10, clamped to 1000).
    #[serde(default, deserialize_with = "opt_int")]
    pub limit: Option<i64>,

    /// Results to skip.
    #[serde(default, deserialize_with = "opt_int")]
    pub offset: Option<i64>,

    /// Fields to return.
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_author`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorInput {
    /// Semantic Scholar author ID.
    #[serde(alias = "author_id")]
    pub author_id: String,

    /// Fields to return.
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,
}

/// Input for `search_snippets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippetsInput {
    /// Text to search for.
    pub query: String,

    /// Maximum results (default 10, clamped to 100).
    #[serde(default, deserialize_with = "opt_int")]
    pub limit: Option<i64>,

    /// Results to skip.
    #[serde(default, deserialize_with = "opt_int")]
    pub offset: Option<i64>,
}

/// Input for `get_paper_citations` and `get_paper_references`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperEdgesInput {
    /// Paper whose citations or references are listed.
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    /// Maximum results (default 10, clamped to 1000).
    #[serde(default, deserialize_with = "opt_int")]
    pub limit: Option<i64>,

    /// Results to skip.
    #[serde(default, deserialize_with = "opt_int")]
    pub offset: Option<i64>,

    /// Fields to return.
    #[serde(default, deserialize_with = "comma_list")]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_citation_context`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationContextInput {
    /// The paper being cited.
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    /// The paper doing the citing.
    #[serde(alias = "citing_paper_id")]
    pub citing_paper_id: String,
}

/// Input for `get_paper_pdf_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfInfoInput {
    /// Paper ID.
    #[serde(alias = "paper_id")]
    pub paper_id: String,
}

/// Input for `download_paper_pdf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPdfInput {
    /// Paper ID.
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    /// Target directory (defaults to the configured download directory).
    #[serde(default, alias = "download_path", deserialize_with = "opt_string")]
    pub download_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_papers_minimal() {
        let input: SearchPapersInput = serde_json::from_value(json!({"query": "ml"})).unwrap();
        assert_eq!(input.query, "ml");
        assert!(input.limit.is_none());
        assert!(input.open_access_pdf.is_none());
    }

    #[test]
    fn test_search_papers_loose_types() {
        let input: SearchPapersInput = serde_json::from_value(json!({
            "query": "ml",
            "limit": "25",
            "open_access_pdf": "true",
            "minCitationCount": 10,
            "year": 2020,
            "fields": "title,year"
        }))
        .unwrap();
        assert_eq!(input.limit, Some(25));
        assert_eq!(input.open_access_pdf, Some(true));
        assert_eq!(input.min_citation_count, Some(10));
        assert_eq!(input.year.as_deref(), Some("2020"));
        assert_eq!(input.fields, Some(vec!["title".to_string(), "year".to_string()]));
    }

    #[test]
    fn test_snake_case_aliases() {
        let input: CitationContextInput =
            serde_json::from_value(json!({"paper_id": "a", "citing_paper_id": "b"})).unwrap();
        assert_eq!(input.paper_id, "a");
        assert_eq!(input.citing_paper_id, "b");
    }

    #[test]
    fn test_batch_ids_as_string() {
        let input: GetPaperBatchInput =
            serde_json::from_value(json!({"paperIds": "p1, p2"})).unwrap();
        assert_eq!(input.paper_ids, Some(vec!["p1".to_string(), "p2".to_string()]));
    }

    #[test]
    fn test_missing_required_field() {
        assert!(serde_json::from_value::<GetPaperInput>(json!({})).is_err());
    }
}
