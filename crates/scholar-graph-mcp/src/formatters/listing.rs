//! Paged listings, batch results and citation context.

use super::records::{format_author, format_paper, format_snippet};
use crate::models::{
    Author, CitationContext, CitationEdge, ListResponse, Paper, ReferenceEdge, Snippet,
};

/// What a listing contains; picks the header noun and the empty sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// Paper search results.
    Papers,
    /// Author search results.
    Authors,
    /// Snippet search results.
    Snippets,
    /// Papers citing a paper.
    Citations,
    /// Papers cited by a paper.
    References,
}

impl ListingKind {
    /// Plural noun used in the header.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Papers => "papers",
            Self::Authors => "authors",
            Self::Snippets => "snippets",
            Self::Citations => "citations",
            Self::References => "references",
        }
    }

    /// Sentence returned when nothing was rendered.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Papers => "No papers found matching your query.",
            Self::Authors => "No authors found matching your query.",
            Self::Snippets => "No snippets found matching your query.",
            Self::Citations => "No citations found for this paper.",
            Self::References => "No references found for this paper.",
        }
    }
}

/// Render numbered items under a `Found N total ... (showing M):` header.
///
/// `M` is always the number of rendered items. `N` is the API's total as
/// reported; when the response has none, the rendered count stands in.
#[must_use]
pub fn format_listing(kind: ListingKind, total: Option<i64>, items: &[String]) -> String {
    if items.is_empty() {
        return kind.empty_message().to_string();
    }

    let shown = items.len();
    let total = total.unwrap_or_else(|| i64::try_from(shown).unwrap_or(i64::MAX));
    let body = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Found {total} total {} (showing {shown}):\n\n{body}", kind.noun())
}

/// `search_papers` output.
#[must_use]
pub fn format_paper_search(result: &ListResponse<Paper>) -> String {
    let items: Vec<String> = result.data.iter().map(format_paper).collect();
    format_listing(ListingKind::Papers, result.total, &items)
}

/// `search_authors` output.
#[must_use]
pub fn format_author_search(result: &ListResponse<Author>) -> String {
    let items: Vec<String> = result.data.iter().map(format_author).collect();
    format_listing(ListingKind::Authors, result.total, &items)
}

/// `search_snippets` output.
#[must_use]
pub fn format_snippet_search(result: &ListResponse<Snippet>) -> String {
    let items: Vec<String> = result.data.iter().map(format_snippet).collect();
    format_listing(ListingKind::Snippets, result.total, &items)
}

/// `get_paper_citations` output. Edges without a citing paper are skipped.
#[must_use]
pub fn format_citations(result: &ListResponse<CitationEdge>) -> String {
    let items: Vec<String> =
        result.data.iter().filter_map(|e| e.citing_paper.as_ref()).map(format_paper).collect();
    format_listing(ListingKind::Citations, result.total, &items)
}

/// `get_paper_references` output. Edges without a cited paper are skipped.
#[must_use]
pub fn format_references(result: &ListResponse<ReferenceEdge>) -> String {
    let items: Vec<String> =
        result.data.iter().filter_map(|e| e.cited_paper.as_ref()).map(format_paper).collect();
    format_listing(ListingKind::References, result.total, &items)
}

/// `get_paper_batch` output; `None` entries are ids the API did not know.
#[must_use]
pub fn format_batch(entries: &[Option<Paper>]) -> String {
    if entries.is_empty() {
        return "No papers found for the provided IDs.".to_string();
    }

    let body = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Some(paper) => format!("{}. {}", i + 1, format_paper(paper)),
            None => format!("{}. Paper not found", i + 1),
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Retrieved {} papers:\n\n{body}", entries.len())
}

/// `get_citation_context` output.
#[must_use]
pub fn format_citation_context(context: &CitationContext) -> String {
    let contexts: Vec<&str> = context
        .contexts
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    if contexts.is_empty() {
        return "No citation context found.".to_string();
    }

    let title = |paper: Option<&Paper>| {
        paper.and_then(|p| p.title.as_deref()).unwrap_or("Unknown").to_string()
    };

    let mut output = format!(
        "Citation context:\n\nCited paper: {}\nCiting paper: {}\n\n",
        title(context.cited_paper.as_ref()),
        title(context.citing_paper.as_ref())
    );
    for (i, ctx) in contexts.iter().enumerate() {
        output.push_str(&format!("{}. {ctx}\n", i + 1));
    }
    output
}
