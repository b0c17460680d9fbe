//! Repository layer contracts and redb-backed implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access for adages.
//! - Keep table layout and transaction handling inside the persistence boundary.
//!
//! # Invariants
//! - Each repository call runs in exactly one redb transaction.
//! - A failed insert leaves no primary record and no tag-index entry behind.

pub mod adage_repo;
