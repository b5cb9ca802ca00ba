#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_graph_mcp::formatters;
use scholar_graph_mcp::models::{
    Author, BatchResponse, CitationContext, ListResponse, Paper, Snippet,
};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Whatever decodes must also render.
    if let Ok(paper) = serde_json::from_value::<Paper>(json.clone()) {
        let _ = formatters::format_paper_detail(&paper);
        let _ = formatters::format_pdf_info(&paper);
    }
    if let Ok(author) = serde_json::from_value::<Author>(json.clone()) {
        let _ = formatters::format_author_detail(&author);
    }
    if let Ok(list) = serde_json::from_value::<ListResponse<Paper>>(json.clone()) {
        let _ = formatters::format_paper_search(&list);
    }
    if let Ok(list) = serde_json::from_value::<ListResponse<Snippet>>(json.clone()) {
        let _ = formatters::format_snippet_search(&list);
    }
    if let Ok(batch) = serde_json::from_value::<BatchResponse>(json.clone()) {
        let _ = formatters::format_batch(&batch.into_entries());
    }
    if let Ok(context) = serde_json::from_value::<CitationContext>(json) {
        let _ = formatters::format_citation_context(&context);
    }
});
