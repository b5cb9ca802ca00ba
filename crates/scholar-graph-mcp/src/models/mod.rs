//! Data models for Graph API entities and tool inputs.
//!
//! All record fields are optional and decode `null` like absence, so a
//! partially-populated response never fails to render.

mod author;
mod inputs;
pub mod lenient;
mod paper;

pub use author::{Author, AuthorRef};
pub use inputs::*;
pub use paper::{
    BatchResponse, CitationContext, CitationEdge, ExternalIds, ListResponse, OpenAccessPdf, Paper,
    ReferenceEdge, Snippet, SnippetText,
};
