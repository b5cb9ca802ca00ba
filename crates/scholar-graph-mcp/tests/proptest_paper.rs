//! Property-based tests for the Paper model and its text rendering.

use proptest::prelude::*;
use scholar_graph_mcp::formatters::{
    ListingKind, author_summary_line, format_batch, format_listing, format_paper,
    format_paper_detail,
};
use scholar_graph_mcp::models::{AuthorRef, Paper};

/// Generate arbitrary Paper structs for testing.
fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        proptest::option::of("[a-f0-9]{40}"),          // paper_id
        proptest::option::of("[A-Za-z0-9 ]{1,100}"),   // title
        proptest::option::of("[A-Za-z0-9 .,]{0,500}"), // abstract
        proptest::option::of(1900i32..2030),           // year
        proptest::option::of(0i64..1_000_000),         // citation_count
        proptest::collection::vec("[A-Za-z ]{1,20}", 0..8), // author names
    )
        .prop_map(|(paper_id, title, r#abstract, year, citation_count, names)| Paper {
            paper_id,
            title,
            r#abstract,
            year,
            citation_count,
            authors: names.into_iter().map(AuthorRef::named).collect(),
            ..Default::default()
        })
}

proptest! {
    /// The summary line names at most three authors and counts the rest.
    #[test]
    fn author_summary_caps_names(paper in arb_paper()) {
        let line = author_summary_line(&paper);
        let n = paper.authors.len();

        if n > 3 {
            let suffix = format!(" (and {} others)", n - 3);
            prop_assert!(line.ends_with(&suffix));
        } else {
            prop_assert!(!line.contains(" others)"));
        }
        for author in paper.authors.iter().take(3) {
            prop_assert!(line.contains(author.name_or_default()));
        }
    }

    /// Every listing block has the same four-line shape.
    #[test]
    fn paper_block_has_four_lines(paper in arb_paper()) {
        let block = format_paper(&paper);
        let lines: Vec<&str> = block.lines().collect();

        prop_assert_eq!(lines.len(), 4);
        prop_assert!(lines[0].starts_with("Title: "));
        prop_assert!(lines[1].starts_with("Authors: "));
        prop_assert_eq!(lines[2], format!("Citations: {}", paper.citation_count.unwrap_or(0)));
        prop_assert!(lines[3].starts_with("Paper ID: "));
    }

    /// Detail view never leaves a field blank.
    #[test]
    fn paper_detail_always_has_fallbacks(paper in arb_paper()) {
        let detail = format_paper_detail(&paper);
        prop_assert!(detail.contains("\nYear: "));
        prop_assert!(detail.contains("\nVenue: "));
        prop_assert!(detail.contains("\nAbstract:\n"));
        prop_assert!(detail.ends_with("Open Access PDF: No open access PDF"));
    }

    /// The header keeps the reported total and counts the rendered items.
    #[test]
    fn listing_header_counts(total in proptest::option::of(0i64..500), count in 1usize..30) {
        let items: Vec<String> = (0..count).map(|i| format!("item {i}")).collect();
        let text = format_listing(ListingKind::Papers, total, &items);

        let expected_total = total.unwrap_or(count as i64);
        let header = format!("Found {expected_total} total papers (showing {count}):");
        prop_assert!(text.starts_with(&header));
        let last = format!("{count}. item {}", count - 1);
        prop_assert!(text.ends_with(&last));
    }

    /// Batch output keeps one numbered entry per requested id, in order.
    #[test]
    fn batch_keeps_positions(mask in proptest::collection::vec(any::<bool>(), 1..20)) {
        let entries: Vec<Option<Paper>> = mask
            .iter()
            .enumerate()
            .map(|(i, found)| {
                found.then(|| Paper { title: Some(format!("T{i}")), ..Default::default() })
            })
            .collect();
        let text = format_batch(&entries);

        let header = format!("Retrieved {} papers:", mask.len());
        prop_assert!(text.starts_with(&header));
        for (i, found) in mask.iter().enumerate() {
            let entry = if *found {
                format!("{}. Title: T{i}", i + 1)
            } else {
                format!("{}. Paper not found", i + 1)
            };
            prop_assert!(text.contains(&entry));
        }
    }

    /// Paper deserialization never panics on arbitrary JSON objects.
    #[test]
    fn paper_from_arbitrary_json_object_never_panics(
        title in proptest::option::of(".*"),
        year in proptest::option::of(any::<i32>()),
        citations in proptest::option::of(any::<i64>()),
    ) {
        let json = serde_json::json!({
            "paperId": "test123",
            "title": title,
            "year": year,
            "citationCount": citations,
        });

        let paper: Paper = serde_json::from_value(json).unwrap();
        prop_assert_eq!(paper.citation_count, citations);
    }
}

#[test]
fn paper_handles_missing_fields() {
    let paper: Paper = serde_json::from_value(serde_json::json!({})).unwrap();

    assert!(paper.paper_id.is_none());
    assert_eq!(paper.title_or_default(), "Unknown Title");
    assert!(paper.authors.is_empty());
    assert!(paper.pdf_url().is_none());
}

#[test]
fn paper_handles_null_collections() {
    let json = serde_json::json!({
        "paperId": "abc123",
        "authors": null,
        "references": null,
        "citations": null,
        "openAccessPdf": {"url": ""}
    });
    let paper: Paper = serde_json::from_value(json).unwrap();

    assert!(paper.authors.is_empty());
    assert!(paper.references.is_empty());
    assert!(paper.pdf_url().is_none(), "blank url is not a pdf link");
}
