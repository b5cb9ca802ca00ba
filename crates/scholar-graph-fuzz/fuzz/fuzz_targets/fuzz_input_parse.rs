#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_graph_mcp::client::request;
use scholar_graph_mcp::models::{GetPaperBatchInput, PaperEdgesInput, SearchPapersInput};

fuzz_target!(|data: &[u8]| {
    // Decoding may fail; building a request from a decoded input must not panic.
    if let Ok(input) = serde_json::from_slice::<SearchPapersInput>(data) {
        if let Ok(req) = request::search_papers(&input) {
            assert!(req.query_param("limit").is_some());
        }
    }
    if let Ok(input) = serde_json::from_slice::<GetPaperBatchInput>(data) {
        let _ = request::get_paper_batch(&input);
    }
    if let Ok(input) = serde_json::from_slice::<PaperEdgesInput>(data) {
        if let Ok(req) = request::paper_edges(&input, request::EdgeDirection::Citations) {
            assert_eq!(req.path.matches('/').count(), 2);
        }
    }
});
