//! Author data model matching the Graph API schema.

use serde::{Deserialize, Serialize};

use super::Paper;
use super::lenient::null_as_default;

/// A research author record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Semantic Scholar author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i64>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i64>,

    /// Embedded paper stubs (detail view only).
    #[serde(default, deserialize_with = "null_as_default")]
    pub papers: Vec<Paper>,
}

impl Author {
    /// Get the author name, falling back to "Unknown Name".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Name")
    }

    /// Get the author ID or an empty string.
    #[must_use]
    pub fn id_or_default(&self) -> &str {
        self.author_id.as_deref().unwrap_or("")
    }

    /// Get paper count or 0 if not available.
    #[must_use]
    pub fn papers_count(&self) -> i64 {
        self.paper_count.unwrap_or(0)
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }

    /// Get the h-index or 0 if not available.
    #[must_use]
    pub fn h_index_value(&self) -> i64 {
        self.h_index.unwrap_or(0)
    }
}

/// Minimal author reference (used in paper author lists).
///
/// Decodes from `{"authorId": .., "name": ..}` or from a bare name string,
/// which is what the snippet endpoint sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AuthorRefRepr")]
pub struct AuthorRef {
    /// Author ID.
    pub author_id: Option<String>,

    /// Author name.
    pub name: Option<String>,
}

impl AuthorRef {
    /// Build a stub from a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { author_id: None, name: Some(name.into()) }
    }

    /// Get the author name or "Unknown".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorRefRepr {
    Name(String),
    Object {
        #[serde(default, rename = "authorId")]
        author_id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<AuthorRefRepr> for AuthorRef {
    fn from(repr: AuthorRefRepr) -> Self {
        match repr {
            AuthorRefRepr::Name(name) => Self::named(name),
            AuthorRefRepr::Object { author_id, name } => Self { author_id, name },
        }
    }
}
