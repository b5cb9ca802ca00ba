//! Filename sanitization and collision-free path candidates.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::limits;

/// Stem used when a title sanitizes to nothing.
pub const PLACEHOLDER_STEM: &str = "Unknown_Paper";

/// Reserved on common filesystems, plus control characters.
static FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[<>:"/\\|?*\p{Cc}]"#).expect("forbidden-character regex is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Make a title safe to use as a file stem.
///
/// Strips `< > : " / \ | ? *` and control characters, collapses whitespace,
/// and truncates to `max_len` characters at the last word boundary. Empty
/// results become [`PLACEHOLDER_STEM`]. Applying it twice changes nothing.
#[must_use]
pub fn sanitize_filename(title: &str, max_len: usize) -> String {
    let max_len = max_len.max(PLACEHOLDER_STEM.len());

    // Whitespace first so tabs and newlines become spaces, not gaps.
    let spaced = WHITESPACE.replace_all(title, " ");
    let stripped = FORBIDDEN.replace_all(&spaced, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let mut name = collapsed.trim().to_string();

    if name.chars().count() > max_len {
        let cut: String = name.chars().take(max_len).collect();
        name = match cut.rfind(' ') {
            Some(idx) if idx > 0 => cut[..idx].trim_end().to_string(),
            _ => cut.trim_end().to_string(),
        };
    }

    if name.is_empty() { PLACEHOLDER_STEM.to_string() } else { name }
}

/// File stem for a paper: sanitized title plus ` (<year>)` when known.
#[must_use]
pub fn pdf_file_stem(title: Option<&str>, year: Option<i32>) -> String {
    let safe = sanitize_filename(title.unwrap_or_default(), limits::FILENAME_MAX_LEN);
    match year {
        Some(year) => format!("{safe} ({year})"),
        None => safe,
    }
}

/// The `attempt`-th candidate path: `stem.pdf`, then `stem (1).pdf`, ...
#[must_use]
pub fn candidate_path(dir: &Path, stem: &str, attempt: u32) -> PathBuf {
    if attempt == 0 {
        dir.join(format!("{stem}.pdf"))
    } else {
        dir.join(format!("{stem} ({attempt}).pdf"))
    }
}
