//! Writes downloaded PDFs to local storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use super::filename::candidate_path;
use super::metadata::{PdfMetadata, PdfMetadataWriter, default_metadata_writer};
use crate::config::Config;

/// Upper bound on ` (n)` suffixes tried before giving up.
const MAX_COLLISION_SUFFIX: u32 = 10_000;

/// Whether metadata made it into the saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataStatus {
    /// Info dictionary written.
    Set,
    /// File kept without metadata, with the reason.
    NotSet(String),
}

/// A PDF written to disk.
#[derive(Debug, Clone)]
pub struct SavedPdf {
    /// Final path, including any collision suffix.
    pub path: PathBuf,
    /// Bytes written.
    pub size: usize,
    /// Metadata outcome.
    pub metadata: MetadataStatus,
}

/// Local file sink for downloaded PDFs.
#[derive(Clone)]
pub struct PdfSink {
    default_dir: PathBuf,
    metadata: Arc<dyn PdfMetadataWriter>,
}

impl PdfSink {
    /// Create a sink writing to `default_dir` unless a call names another directory.
    #[must_use]
    pub fn new(default_dir: impl Into<PathBuf>, metadata: Arc<dyn PdfMetadataWriter>) -> Self {
        Self { default_dir: default_dir.into(), metadata }
    }

    /// Sink for the configured download directory with this build's metadata writer.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.download_dir.clone(), default_metadata_writer())
    }

    /// Directory used when the caller gives none.
    #[must_use]
    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    /// Write `bytes` as `<stem>.pdf` in `dir` (or the default directory),
    /// picking the first free ` (n)` suffix, then stamp metadata.
    ///
    /// Only directory creation and the write itself can fail; a metadata
    /// failure is reported in [`SavedPdf::metadata`].
    pub async fn save(
        &self,
        dir: Option<&Path>,
        stem: &str,
        bytes: &[u8],
        metadata: &PdfMetadata,
    ) -> std::io::Result<SavedPdf> {
        let dir = dir.unwrap_or(&self.default_dir);
        fs::create_dir_all(dir).await?;

        let path = write_new_file(dir, stem, bytes).await?;
        info!(path = %path.display(), size = bytes.len(), "Saved PDF");

        let metadata = self.stamp(&path, metadata).await;
        Ok(SavedPdf { path, size: bytes.len(), metadata })
    }

    async fn stamp(&self, path: &Path, metadata: &PdfMetadata) -> MetadataStatus {
        let writer = Arc::clone(&self.metadata);
        let backend = writer.name();
        let path = path.to_path_buf();
        let metadata = metadata.clone();

        let result = tokio::task::spawn_blocking(move || writer.write(&path, &metadata)).await;
        match result {
            Ok(Ok(())) => {
                debug!(backend, "PDF metadata set");
                MetadataStatus::Set
            }
            Ok(Err(e)) => {
                warn!(backend, error = %e, "PDF metadata not set");
                MetadataStatus::NotSet(e.to_string())
            }
            Err(e) => {
                warn!(backend, error = %e, "PDF metadata task failed");
                MetadataStatus::NotSet(format!("metadata task failed: {e}"))
            }
        }
    }
}

impl std::fmt::Debug for PdfSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfSink")
            .field("default_dir", &self.default_dir)
            .field("metadata", &self.metadata.name())
            .finish()
    }
}

/// Create the first unused candidate path and write into it.
///
/// `create_new` makes each attempt atomic, so a concurrent writer that grabs
/// a name first pushes us on to the next suffix instead of being overwritten.
async fn write_new_file(dir: &Path, stem: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    for attempt in 0..=MAX_COLLISION_SUFFIX {
        let candidate = candidate_path(dir, stem, attempt);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&candidate).await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };

        if let Err(e) = write_all(&mut file, bytes).await {
            drop(file);
            let _ = fs::remove_file(&candidate).await;
            return Err(e);
        }
        return Ok(candidate);
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free file name for {stem:?} after {MAX_COLLISION_SUFFIX} attempts"),
    ))
}

async fn write_all(file: &mut fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;
    use crate::pdf::NoopMetadataWriter;

    fn sink(dir: &Path) -> PdfSink {
        PdfSink::new(dir, Arc::new(NoopMetadataWriter))
    }

    fn meta() -> PdfMetadata {
        PdfMetadata::from_paper(&Paper::default())
    }

    #[tokio::test]
    async fn test_save_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("papers");
        let saved =
            sink(root.path()).save(Some(&dir), "Paper", b"%PDF-1.4", &meta()).await.unwrap();

        assert_eq!(saved.path, dir.join("Paper.pdf"));
        assert_eq!(saved.size, 8);
        assert_eq!(std::fs::read(&saved.path).unwrap(), b"%PDF-1.4");
        assert!(matches!(saved.metadata, MetadataStatus::NotSet(_)));
    }

    #[tokio::test]
    async fn test_collisions_get_suffixes() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("Paper (2023).pdf"), b"original").unwrap();

        let sink = sink(root.path());
        let first = sink.save(None, "Paper (2023)", b"one", &meta()).await.unwrap();
        let second = sink.save(None, "Paper (2023)", b"two", &meta()).await.unwrap();

        assert_eq!(first.path, root.path().join("Paper (2023) (1).pdf"));
        assert_eq!(second.path, root.path().join("Paper (2023) (2).pdf"));
        assert_eq!(std::fs::read(root.path().join("Paper (2023).pdf")).unwrap(), b"original");
    }

    #[tokio::test]
    async fn test_concurrent_saves_never_share_a_path() {
        let root = tempfile::tempdir().unwrap();
        let sink = sink(root.path());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = sink.clone();
                tokio::spawn(async move {
                    sink.save(None, "Same", format!("body {i}").as_bytes(), &meta()).await
                })
            })
            .collect();

        let mut paths = Vec::new();
        for handle in handles {
            paths.push(handle.await.unwrap().unwrap().path);
        }
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 8);
    }

    #[tokio::test]
    async fn test_unwritable_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let result = sink(root.path()).save(Some(&blocker.join("sub")), "P", b"x", &meta()).await;
        assert!(result.is_err());
    }
}
