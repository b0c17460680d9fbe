//! Core persistence for short tagged text records ("adages").
//!
//! Adages are stored in a redb database: one primary table keyed by a
//! time-ordered id, plus one index table per tag.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::{AdageCodec, CodecError, CodecResult, DirectCodec, PooledCodec};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::adage::{Adage, AdageId};
pub use repo::adage_repo::{AdageRepository, RedbAdageRepository, RepoError, RepoResult};
pub use service::adage_service::{AdageService, NewAdage};
