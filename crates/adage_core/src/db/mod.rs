//! redb storage bootstrap and persisted layout.
//!
//! # Responsibility
//! - Open file-backed or in-memory redb databases for adage core.
//! - Name the tables that make up the persisted layout.
//!
//! # Invariants
//! - Tables are created lazily by the first write transaction that needs them.
//! - Every redb failure surfaces as `DbError`; nothing is retried here.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod layout;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage failure reported by the underlying redb engine.
#[derive(Debug)]
pub enum DbError {
    Redb(redb::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redb(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Redb(err) => Some(err),
        }
    }
}

macro_rules! impl_from_redb {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for DbError {
                fn from(value: $source) -> Self {
                    Self::Redb(value.into())
                }
            }
        )+
    };
}

impl_from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);
