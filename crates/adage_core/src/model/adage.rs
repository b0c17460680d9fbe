//! Adage domain model.
//!
//! # Responsibility
//! - Define the short tagged text record stored by core.
//! - Provide builder helpers for callers assembling a record before insert.
//!
//! # Invariants
//! - `id` is `None` until the repository assigns one; callers never pick it.
//! - `created_at` / `updated_at` are caller-owned and persisted verbatim.
//! - `tags` keep insertion order and duplicates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to an adage when it is first persisted.
///
/// Generated as a time-ordered UUIDv7, so its big-endian bytes sort by
/// insertion time when used as a storage key.
pub type AdageId = Uuid;

/// One stored tagged text entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adage {
    /// Assigned by `AdageRepository::insert_adage`; ignored on input.
    pub id: Option<AdageId>,
    /// Text content. May be empty.
    pub body: String,
    /// Tag labels, indexed one sub-partition per tag.
    pub tags: Vec<String>,
    pub author: String,
    pub source: String,
    /// Unix epoch milliseconds. Never set by core.
    pub created_at: Option<i64>,
    /// Unix epoch milliseconds. Never set by core.
    pub updated_at: Option<i64>,
}

impl Adage {
    /// Creates an unsaved adage with the given body and empty metadata.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Replaces the tag list, keeping the given order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets caller-owned timestamps in epoch milliseconds.
    pub fn with_timestamps(mut self, created_at: Option<i64>, updated_at: Option<i64>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Returns whether a repository has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
