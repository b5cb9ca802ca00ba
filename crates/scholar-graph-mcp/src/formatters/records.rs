//! Single-record text templates.

use crate::config::limits;
use crate::models::{Author, Paper, Snippet};

/// Authors shown in a paper summary before collapsing into "(and N others)".
const SUMMARY_AUTHORS: usize = 3;

/// Author list with the first three names and a count of the rest.
#[must_use]
pub fn author_summary_line(paper: &Paper) -> String {
    let names = paper.author_names();
    let mut line = names.iter().take(SUMMARY_AUTHORS).copied().collect::<Vec<_>>().join(", ");
    if names.len() > SUMMARY_AUTHORS {
        line.push_str(&format!(" (and {} others)", names.len() - SUMMARY_AUTHORS));
    }
    line
}

/// Compact paper block used in every listing.
///
/// ```text
/// Title: <title>
/// Authors: <a1, a2, a3> (and N others) (<year>) - <venue>
/// Citations: <n>
/// Paper ID: <id>
/// ```
#[must_use]
pub fn format_paper(paper: &Paper) -> String {
    let year = paper.year.map(|y| format!(" ({y})")).unwrap_or_default();
    let venue = paper.venue().map(|v| format!(" - {v}")).unwrap_or_default();

    format!(
        "Title: {}\nAuthors: {}{year}{venue}\nCitations: {}\nPaper ID: {}",
        paper.title_or_default(),
        author_summary_line(paper),
        paper.citations(),
        paper.id_or_default()
    )
}

/// Compact author block used in author listings.
#[must_use]
pub fn format_author(author: &Author) -> String {
    format!(
        "Name: {}\nAuthor ID: {}\nPapers: {}\nCitations: {}\nH-Index: {}",
        author.name_or_default(),
        author.id_or_default(),
        author.papers_count(),
        author.citations(),
        author.h_index_value()
    )
}

/// Full paper view for `get_paper`.
#[must_use]
pub fn format_paper_detail(paper: &Paper) -> String {
    let year = paper.year.map_or_else(|| "Unknown".to_string(), |y| y.to_string());
    let abstract_text = paper
        .r#abstract
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or("No abstract available");

    format!(
        "Title: {}\n\
         Authors: {}\n\
         Year: {year}\n\
         Venue: {}\n\
         Citations: {}\n\
         Paper ID: {}\n\
         \n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         References: {}\n\
         Cited by: {}\n\
         Open Access PDF: {}",
        paper.title_or_default(),
        paper.author_names().join(", "),
        paper.venue().unwrap_or("Unknown"),
        paper.citations(),
        paper.paper_id.as_deref().unwrap_or("Unknown"),
        paper.references.len(),
        paper.citations.len(),
        paper.pdf_url().unwrap_or("No open access PDF"),
    )
}

/// Full author view for `get_author`, with up to ten embedded papers.
#[must_use]
pub fn format_author_detail(author: &Author) -> String {
    let mut output = format!(
        "Name: {}\nAuthor ID: {}\nTotal Papers: {}\nTotal Citations: {}\nH-Index: {}",
        author.name_or_default(),
        author.id_or_default(),
        author.papers_count(),
        author.citations(),
        author.h_index_value()
    );

    let shown = &author.papers[..author.papers.len().min(limits::AUTHOR_PAPERS_SHOWN)];
    if !shown.is_empty() {
        output.push_str(&format!("\n\nRecent Papers ({} shown):", shown.len()));
        for (i, paper) in shown.iter().enumerate() {
            let year = paper.year.map_or_else(|| "Unknown".to_string(), |y| y.to_string());
            output.push_str(&format!(
                "\n{}. {} ({year}) - {} citations",
                i + 1,
                paper.title_or_default(),
                paper.citations()
            ));
        }
    }

    output
}

/// Snippet block: source paper and matched text.
#[must_use]
pub fn format_snippet(snippet: &Snippet) -> String {
    let paper = snippet.paper.as_ref();
    let title = paper.map_or("Unknown Title", Paper::title_or_default);
    let year = paper
        .and_then(|p| p.year)
        .map_or_else(|| "Unknown".to_string(), |y| y.to_string());
    let text = snippet.text().filter(|t| !t.trim().is_empty()).unwrap_or("No text available");

    format!("From: {title} ({year})\nSnippet: {text}")
}
