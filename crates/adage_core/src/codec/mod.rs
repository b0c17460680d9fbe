//! Binary codec for adage records.
//!
//! # Responsibility
//! - Convert `Adage` values to and from durable bytes.
//! - Offer a lock-guarded pooled variant and an allocate-per-call variant.
//!
//! # Invariants
//! - Records are encoded as CBOR, which is self-describing, so bytes decode
//!   without an external schema.
//! - Both variants produce mutually decodable output.

use crate::model::adage::Adage;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod direct;
mod pooled;

pub use direct::DirectCodec;
pub use pooled::PooledCodec;

pub type CodecResult<T> = Result<T, CodecError>;

/// Encode/decode failure for adage bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Encode(String),
    Decode(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(message) => write!(f, "failed to encode adage: {message}"),
            Self::Decode(message) => write!(f, "failed to decode adage: {message}"),
        }
    }
}

impl Error for CodecError {}

impl<T: std::fmt::Debug> From<ciborium::ser::Error<T>> for CodecError {
    fn from(value: ciborium::ser::Error<T>) -> Self {
        Self::Encode(value.to_string())
    }
}

impl<T: std::fmt::Debug> From<ciborium::de::Error<T>> for CodecError {
    fn from(value: ciborium::de::Error<T>) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Encode/decode contract shared by both codec variants.
pub trait AdageCodec: Send + Sync {
    fn encode(&self, adage: &Adage) -> CodecResult<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> CodecResult<Adage>;
}

impl<C: AdageCodec + ?Sized> AdageCodec for &C {
    fn encode(&self, adage: &Adage) -> CodecResult<Vec<u8>> {
        (**self).encode(adage)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Adage> {
        (**self).decode(bytes)
    }
}
