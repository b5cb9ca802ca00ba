//! Paper data model matching the Graph API schema.
//!
//! Every field is optional; absent and `null` values decode to the same thing
//! so the formatters can substitute placeholders instead of failing.

use serde::{Deserialize, Serialize};

use super::AuthorRef;
use super::lenient::null_as_default;

/// A research paper record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// Authors in byline order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<AuthorRef>,

    /// Papers this paper cites (detail view only).
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<Paper>,

    /// Papers citing this paper (detail view only).
    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Paper>,

    /// Open access PDF information.
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl Paper {
    /// Get the paper title, falling back to "Unknown Title".
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown Title")
    }

    /// Get the paper ID or an empty string.
    #[must_use]
    pub fn id_or_default(&self) -> &str {
        self.paper_id.as_deref().unwrap_or("")
    }

    /// Get the venue, treating an empty string as absent.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }

    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf
            .as_ref()?
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Get the ArXiv ID if available.
    #[must_use]
    pub fn arxiv_id(&self) -> Option<&str> {
        self.external_ids.as_ref()?.arxiv.as_deref()
    }

    /// Get the PubMed ID if available.
    #[must_use]
    pub fn pubmed_id(&self) -> Option<&str> {
        self.external_ids.as_ref()?.pubmed.as_deref()
    }

    /// All author names, unknown names rendered as "Unknown".
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(AuthorRef::name_or_default).collect()
    }
}

/// Open access PDF information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    #[serde(default)]
    pub url: Option<String>,

    /// Status of open access (GOLD, GREEN, BRONZE, ...).
    #[serde(default)]
    pub status: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default)]
    pub pubmed: Option<String>,

    /// PubMed Central ID.
    #[serde(rename = "PubMedCentral", default)]
    pub pmc: Option<String>,
}

/// Paged list response (`{ "total": n, "data": [...] }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Total matches reported by the API. The edge endpoints omit it.
    #[serde(default)]
    pub total: Option<i64>,

    /// Offset of this page.
    #[serde(default)]
    pub offset: Option<i64>,

    /// Next offset, when more results exist.
    #[serde(default)]
    pub next: Option<i64>,

    /// Items in this page.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { total: None, offset: None, next: None, data: Vec::new() }
    }
}

/// Batch lookup response: a bare array with `null` for unknown ids, or an
/// object wrapping the array in `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BatchResponse {
    /// `[Paper | null, ...]`
    List(Vec<Option<Paper>>),
    /// `{ "data": [Paper | null, ...] }`
    Wrapped {
        /// Batch entries.
        #[serde(default, deserialize_with = "null_as_default")]
        data: Vec<Option<Paper>>,
    },
}

impl BatchResponse {
    /// Entries in request order.
    #[must_use]
    pub fn into_entries(self) -> Vec<Option<Paper>> {
        match self {
            Self::List(entries) | Self::Wrapped { data: entries } => entries,
        }
    }
}

/// A citation edge: a paper citing the queried paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// The citing paper.
    #[serde(default)]
    pub citing_paper: Option<Paper>,

    /// Sentences where the citation occurs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<String>,
}

/// A reference edge: a paper cited by the queried paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEdge {
    /// The cited paper.
    #[serde(default)]
    pub cited_paper: Option<Paper>,

    /// Sentences where the reference occurs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<String>,
}

/// Context in which one paper cites another.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationContext {
    /// Verbatim citation sentences.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<String>,

    /// The paper doing the citing.
    #[serde(default)]
    pub citing_paper: Option<Paper>,

    /// The paper being cited.
    #[serde(default)]
    pub cited_paper: Option<Paper>,
}

/// A text snippet from a paper matching a search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snippet {
    /// Matched text (flat form).
    #[serde(default)]
    pub text: Option<String>,

    /// Matched text details (nested form returned by the live API).
    #[serde(default)]
    pub snippet: Option<SnippetText>,

    /// The paper this snippet comes from.
    #[serde(default)]
    pub paper: Option<Paper>,

    /// Match score.
    #[serde(default)]
    pub score: Option<f64>,
}

impl Snippet {
    /// The snippet text from whichever shape the response used.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or_else(|| self.snippet.as_ref()?.text.as_deref())
    }
}

/// Nested snippet body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetText {
    /// The actual text content.
    #[serde(default)]
    pub text: Option<String>,

    /// Kind of snippet: "title", "abstract", "body".
    #[serde(default)]
    pub snippet_kind: Option<String>,

    /// Section heading where the snippet appears.
    #[serde(default)]
    pub section: Option<String>,
}
