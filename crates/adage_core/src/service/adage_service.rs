//! Adage use-case service.
//!
//! # Responsibility
//! - Provide entry points for adding and drawing adages.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs pass repository errors through unchanged.
//! - Timestamps come from the request; the service never fills them in.

use crate::model::adage::{Adage, AdageId};
use crate::repo::adage_repo::{AdageRepository, RepoResult};

/// Request model for adding one adage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAdage {
    pub body: String,
    pub tags: Vec<String>,
    pub author: String,
    pub source: String,
    /// Epoch milliseconds, stored verbatim when set.
    pub created_at: Option<i64>,
    /// Epoch milliseconds, stored verbatim when set.
    pub updated_at: Option<i64>,
}

impl From<NewAdage> for Adage {
    fn from(value: NewAdage) -> Self {
        Adage::new(value.body)
            .with_tags(value.tags)
            .with_author(value.author)
            .with_source(value.source)
            .with_timestamps(value.created_at, value.updated_at)
    }
}

/// Use-case service wrapper over an adage repository.
pub struct AdageService<R: AdageRepository> {
    repo: R,
}

impl<R: AdageRepository> AdageService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds an adage from `request` and persists it.
    ///
    /// Returns the id assigned by the repository.
    pub fn add_adage(&self, request: NewAdage) -> RepoResult<AdageId> {
        self.repo.insert_adage(&Adage::from(request))
    }

    pub fn insert_adage(&self, adage: &Adage) -> RepoResult<AdageId> {
        self.repo.insert_adage(adage)
    }

    /// Draws one stored adage at random.
    ///
    /// Returns `RepoError::NotFound` when nothing has been stored yet.
    pub fn random_adage(&self) -> RepoResult<Adage> {
        self.repo.random_adage()
    }

    pub fn get_adage(&self, id: AdageId) -> RepoResult<Option<Adage>> {
        self.repo.get_adage(id)
    }
}
