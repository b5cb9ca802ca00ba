//! PDF availability and download reports.

use super::records::author_summary_line;
use crate::models::Paper;
use crate::pdf::{MetadataStatus, SavedPdf};

/// `get_paper_pdf_info` output.
#[must_use]
pub fn format_pdf_info(paper: &Paper) -> String {
    let mut output = format!(
        "Title: {}\nPaper ID: {}\n\n",
        paper.title_or_default(),
        paper.id_or_default()
    );

    match paper.pdf_url() {
        Some(url) => {
            output.push_str("✅ Open Access PDF Available\n");
            output.push_str(&format!("URL: {url}\n"));
            if let Some(status) = paper.open_access_pdf.as_ref().and_then(|p| p.status.as_deref())
            {
                output.push_str(&format!("Status: {status}\n"));
            }
        }
        None => output.push_str("❌ No Open Access PDF Available\n"),
    }

    output.push_str("\nAlternative access points:\n");
    let links = alternative_links(paper);
    if links.is_empty() {
        output.push_str("No alternative access points known.");
    } else {
        output.push_str(&links.join("\n"));
    }
    output
}

/// One line per external id kind the paper carries.
fn alternative_links(paper: &Paper) -> Vec<String> {
    let mut links = Vec::new();
    if let Some(arxiv) = paper.arxiv_id() {
        links.push(format!("ArXiv: https://arxiv.org/abs/{arxiv}"));
    }
    if let Some(doi) = paper.doi() {
        links.push(format!("Publisher (DOI): https://doi.org/{doi}"));
    }
    if let Some(pmid) = paper.pubmed_id() {
        links.push(format!("PubMed: https://pubmed.ncbi.nlm.nih.gov/{pmid}/"));
    }
    links
}

/// `download_paper_pdf` success report.
///
/// `content_warning` is set when the response did not look like a PDF; the
/// file is saved regardless.
#[must_use]
pub fn format_download_report(
    paper: &Paper,
    saved: &SavedPdf,
    content_warning: Option<&str>,
) -> String {
    let year = paper.year.map_or_else(|| "Unknown".to_string(), |y| y.to_string());
    let authors = author_summary_line(paper);

    let mut output = String::from("✅ PDF downloaded successfully!\n\n");
    output.push_str(&format!("Title: {}\n", paper.title_or_default()));
    output.push_str(&format!(
        "Authors: {}\n",
        if authors.is_empty() { "Unknown" } else { &authors }
    ));
    output.push_str(&format!("Year: {year}\n"));
    output.push_str(&format!("File: {}\n", saved.path.display()));
    output.push_str(&format!("Size: {}\n", human_size(saved.size)));

    match &saved.metadata {
        MetadataStatus::Set => output.push_str("\n✅ PDF metadata set"),
        MetadataStatus::NotSet(reason) => {
            output.push_str(&format!("\n⚠️ PDF metadata not set: {reason}"));
        }
    }

    if let Some(warning) = content_warning {
        output.push_str(&format!("\n⚠️ Warning: {warning}"));
    }
    output
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} bytes")
    } else if b < KIB * KIB {
        format!("{:.1} KB", b / KIB)
    } else {
        format!("{:.1} MB", b / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_pdf_info_available() {
        let paper: Paper = serde_json::from_value(json!({
            "paperId": "p1",
            "title": "Open Paper",
            "openAccessPdf": {"url": "http://example.com/paper.pdf", "status": "GREEN"},
            "externalIds": {"ArXiv": "2301.00001", "DOI": "10.1/x"}
        }))
        .unwrap();
        let out = format_pdf_info(&paper);
        assert!(out.contains("✅ Open Access PDF Available"));
        assert!(out.contains("URL: http://example.com/paper.pdf"));
        assert!(out.contains("Status: GREEN"));
        assert!(out.contains("ArXiv: https://arxiv.org/abs/2301.00001"));
        assert!(out.contains("Publisher (DOI): https://doi.org/10.1/x"));
        assert!(!out.contains("PubMed"));
    }

    #[test]
    fn test_pdf_info_unavailable() {
        let out = format_pdf_info(&Paper::default());
        assert!(out.contains("❌ No Open Access PDF Available"));
        assert!(out.ends_with("No alternative access points known."));
    }

    #[test]
    fn test_download_report() {
        let paper = Paper { title: Some("T".to_string()), year: Some(2023), ..Paper::default() };
        let saved = SavedPdf {
            path: PathBuf::from("/tmp/T (2023).pdf"),
            size: 2048,
            metadata: MetadataStatus::NotSet("not a PDF".to_string()),
        };
        let out = format_download_report(&paper, &saved, Some("content type was text/html"));
        assert!(out.starts_with("✅ PDF downloaded successfully!"));
        assert!(out.contains("Authors: Unknown"));
        assert!(out.contains("File: /tmp/T (2023).pdf"));
        assert!(out.contains("Size: 2.0 KB"));
        assert!(out.contains("⚠️ PDF metadata not set: not a PDF"));
        assert!(out.contains("⚠️ Warning: content type was text/html"));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(25), "25 bytes");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
