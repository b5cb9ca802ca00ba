//! Document metadata stamping for downloaded PDFs.
//!
//! The capability is a trait object so builds without the `pdf-metadata`
//! feature (and tests) can swap in a writer that does nothing.

use std::path::Path;
use std::sync::Arc;

use crate::formatters::author_summary_line;
use crate::models::Paper;

/// Info-dictionary values written into a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfMetadata {
    /// Document title.
    pub title: String,
    /// Author line, as shown in paper summaries.
    pub author: Option<String>,
    /// Free-text subject (publication year).
    pub subject: Option<String>,
}

impl PdfMetadata {
    /// Build metadata from a paper record.
    #[must_use]
    pub fn from_paper(paper: &Paper) -> Self {
        let author = author_summary_line(paper);
        Self {
            title: paper.title_or_default().to_string(),
            author: (!author.is_empty()).then_some(author),
            subject: paper.year.map(|y| format!("Published {y}")),
        }
    }
}

/// Errors from stamping metadata. Never fatal to a download.
#[derive(thiserror::Error, Debug)]
pub enum MetadataError {
    /// Built without a PDF backend.
    #[error("PDF metadata support is not enabled in this build")]
    Unsupported,

    /// The file could not be parsed or rewritten as a PDF.
    #[error("{0}")]
    Document(String),

    /// Filesystem error while rewriting.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Writes metadata into a PDF file in place.
pub trait PdfMetadataWriter: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Stamp `metadata` into the PDF at `path`.
    fn write(&self, path: &Path, metadata: &PdfMetadata) -> Result<(), MetadataError>;
}

/// Writer that never touches the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetadataWriter;

impl PdfMetadataWriter for NoopMetadataWriter {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn write(&self, _path: &Path, _metadata: &PdfMetadata) -> Result<(), MetadataError> {
        Err(MetadataError::Unsupported)
    }
}

/// Writer backed by `lopdf`.
///
/// Rewrites the Info dictionary into a sibling temp file and renames it over
/// the original, so a failed save leaves the download intact.
#[cfg(feature = "pdf-metadata")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfMetadataWriter;

#[cfg(feature = "pdf-metadata")]
impl PdfMetadataWriter for LopdfMetadataWriter {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn write(&self, path: &Path, metadata: &PdfMetadata) -> Result<(), MetadataError> {
        use lopdf::{Dictionary, Document, Object};

        let mut doc = Document::load(path)
            .map_err(|e| MetadataError::Document(format!("not a readable PDF: {e}")))?;
        if doc.trailer.has(b"Encrypt") {
            return Err(MetadataError::Document("document is encrypted".to_string()));
        }

        let existing = doc.trailer.get(b"Info").and_then(Object::as_reference).ok();
        let mut info = existing
            .and_then(|id| doc.get_dictionary(id).ok())
            .cloned()
            .unwrap_or_else(Dictionary::new);

        info.set("Title", pdf_text(&metadata.title));
        if let Some(ref author) = metadata.author {
            info.set("Author", pdf_text(author));
        }
        if let Some(ref subject) = metadata.subject {
            info.set("Subject", pdf_text(subject));
        }
        info.set("Producer", pdf_text(crate::config::api::USER_AGENT));

        match existing {
            Some(id) => {
                doc.objects.insert(id, Object::Dictionary(info));
            }
            None => {
                let id = doc.add_object(info);
                doc.trailer.set("Info", id);
            }
        }

        let tmp = path.with_extension("pdf.tmp");
        if let Err(e) = doc.save(&tmp) {
            let _ = std::fs::remove_file(&tmp);
            return Err(MetadataError::Io(e));
        }
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise.
#[cfg(feature = "pdf-metadata")]
fn pdf_text(value: &str) -> lopdf::Object {
    if value.is_ascii() {
        lopdf::Object::string_literal(value)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
        lopdf::Object::String(bytes, lopdf::StringFormat::Hexadecimal)
    }
}

/// The writer this build supports.
#[must_use]
pub fn default_metadata_writer() -> Arc<dyn PdfMetadataWriter> {
    #[cfg(feature = "pdf-metadata")]
    {
        Arc::new(LopdfMetadataWriter)
    }
    #[cfg(not(feature = "pdf-metadata"))]
    {
        Arc::new(NoopMetadataWriter)
    }
}
