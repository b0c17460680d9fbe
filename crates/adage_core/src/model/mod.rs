//! Domain model for stored adages.
//!
//! # Responsibility
//! - Define the record exchanged between codec and repository.
//!
//! # Invariants
//! - Every persisted adage carries a non-nil `AdageId` assigned at insert time.
//! - The model performs no validation; empty fields are valid values.

pub mod adage;
