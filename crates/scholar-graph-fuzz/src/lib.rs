//! Fuzzing library for scholar-graph-mcp.
//!
//! Targets cover JSON decoding of API records and tool arguments, the text
//! formatters fed by them, and download file naming.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scholar-graph-fuzz
//! cargo +nightly fuzz run fuzz_record_render -- -max_total_time=60
//! ```

pub use scholar_graph_mcp::{formatters, models, pdf};
