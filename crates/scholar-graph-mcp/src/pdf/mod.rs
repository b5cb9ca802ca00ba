//! PDF download sink: safe file names, collision-free writes and optional
//! metadata stamping.

mod filename;
mod metadata;
mod sink;

pub use filename::{PLACEHOLDER_STEM, candidate_path, pdf_file_stem, sanitize_filename};
#[cfg(feature = "pdf-metadata")]
pub use metadata::LopdfMetadataWriter;
pub use metadata::{
    MetadataError, NoopMetadataWriter, PdfMetadata, PdfMetadataWriter, default_metadata_writer,
};
pub use sink::{MetadataStatus, PdfSink, SavedPdf};
