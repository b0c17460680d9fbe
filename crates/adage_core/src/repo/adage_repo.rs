//! Adage repository contract and redb implementation.
//!
//! # Responsibility
//! - Insert adages into the primary table and maintain the per-tag index.
//! - Return one adage chosen uniformly at random.
//!
//! # Invariants
//! - Ids are generated here and never taken from the caller.
//! - Every tag-index write is checked; the first failure aborts the whole insert.
//! - An empty or missing primary table reads as `RepoError::NotFound`.
//!
//! Random reads enumerate every key per call, so cost grows linearly with
//! the number of stored adages.

use crate::codec::{AdageCodec, CodecError};
use crate::db::layout::{self, ADAGES_TABLE, EMPTY_VALUE, TAGS_TABLE};
use crate::db::DbError;
use crate::model::adage::{Adage, AdageId};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use redb::{Database, ReadableTable, TableError, WriteTransaction};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for adage persistence and retrieval.
#[derive(Debug)]
pub enum RepoError {
    Codec(CodecError),
    Db(DbError),
    /// No adage is stored yet.
    NotFound,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codec(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound => write!(f, "no adages stored"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

macro_rules! impl_from_redb {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for RepoError {
                fn from(value: $source) -> Self {
                    Self::Db(value.into())
                }
            }
        )+
    };
}

impl_from_redb!(
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

/// Repository interface for adage storage.
pub trait AdageRepository {
    /// Persists `adage` under a freshly generated id and indexes its tags.
    ///
    /// Any `id` already set on `adage` is ignored. Timestamps are stored as given.
    fn insert_adage(&self, adage: &Adage) -> RepoResult<AdageId>;

    /// Returns one stored adage chosen uniformly at random.
    fn random_adage(&self) -> RepoResult<Adage>;

    /// Point read by id.
    fn get_adage(&self, id: AdageId) -> RepoResult<Option<Adage>>;
}

/// redb-backed adage repository.
///
/// Borrows the database and an explicitly passed codec; share one codec
/// instance between repositories to share its pooled state.
pub struct RedbAdageRepository<'db, C: AdageCodec> {
    db: &'db Database,
    codec: C,
}

impl<'db, C: AdageCodec> RedbAdageRepository<'db, C> {
    pub fn new(db: &'db Database, codec: C) -> Self {
        Self { db, codec }
    }

    /// Same as `random_adage` with a caller-supplied random source.
    pub fn random_adage_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RepoResult<Adage> {
        let txn = self.db.begin_read()?;
        let adages = match txn.open_table(ADAGES_TABLE) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => {
                debug!("event=adage_random module=repo status=empty reason=missing_table");
                return Err(RepoError::NotFound);
            }
            Err(err) => return Err(err.into()),
        };

        let mut keys = Vec::new();
        for entry in adages.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_vec());
        }

        let Some(choice) = keys.choose(rng) else {
            debug!("event=adage_random module=repo status=empty reason=no_keys");
            return Err(RepoError::NotFound);
        };
        let Some(bytes) = adages.get(choice.as_slice())? else {
            return Err(RepoError::NotFound);
        };

        let adage = self.codec.decode(bytes.value())?;
        debug!(
            "event=adage_random module=repo status=ok candidates={} id={}",
            keys.len(),
            display_id(adage.id)
        );
        Ok(adage)
    }

    fn write_adage(&self, txn: &WriteTransaction, key: &[u8], record: &Adage) -> RepoResult<()> {
        let mut adages = txn.open_table(ADAGES_TABLE)?;
        let bytes = self.codec.encode(record)?;
        adages.insert(key, bytes.as_slice())?;

        let mut tags = txn.open_table(TAGS_TABLE)?;
        for tag in &record.tags {
            debug!(
                "event=tag_index module=repo status=start tag_len={}",
                tag.len()
            );
            tags.insert(tag.as_str(), EMPTY_VALUE)?;
            let name = layout::tag_table_name(tag);
            let mut index = txn.open_table(layout::tag_table(&name))?;
            index.insert(key, EMPTY_VALUE)?;
        }

        Ok(())
    }
}

impl<C: AdageCodec> AdageRepository for RedbAdageRepository<'_, C> {
    fn insert_adage(&self, adage: &Adage) -> RepoResult<AdageId> {
        let id = Uuid::now_v7();
        debug!(
            "event=adage_insert module=repo status=start id={id} tags={}",
            adage.tags.len()
        );

        let record = Adage {
            id: Some(id),
            ..adage.clone()
        };
        let key = id.as_bytes().as_slice();

        let txn = self.db.begin_write()?;
        if let Err(err) = self.write_adage(&txn, key, &record) {
            warn!("event=adage_insert module=repo status=error id={id} error={err}");
            if let Err(abort_err) = txn.abort() {
                warn!("event=adage_insert module=repo status=abort_failed id={id} error={abort_err}");
            }
            return Err(err);
        }
        txn.commit()?;

        info!(
            "event=adage_insert module=repo status=ok id={id} tags={}",
            record.tags.len()
        );
        Ok(id)
    }

    fn random_adage(&self) -> RepoResult<Adage> {
        self.random_adage_with(&mut rand::thread_rng())
    }

    fn get_adage(&self, id: AdageId) -> RepoResult<Option<Adage>> {
        let txn = self.db.begin_read()?;
        let adages = match txn.open_table(ADAGES_TABLE) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let stored = adages.get(id.as_bytes().as_slice())?;
        let adage = match stored {
            Some(bytes) => Some(self.codec.decode(bytes.value())?),
            None => None,
        };
        Ok(adage)
    }
}

fn display_id(id: Option<AdageId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
