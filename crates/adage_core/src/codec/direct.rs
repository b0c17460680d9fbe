//! Allocate-per-call codec.
//!
//! Every call builds its own buffer and decoder, so calls never contend.

use super::{AdageCodec, CodecResult};
use crate::model::adage::Adage;

/// Codec that holds no shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCodec;

impl DirectCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AdageCodec for DirectCodec {
    fn encode(&self, adage: &Adage) -> CodecResult<Vec<u8>> {
        let mut buffer = Vec::new();
        ciborium::into_writer(adage, &mut buffer)?;
        Ok(buffer)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Adage> {
        Ok(ciborium::from_reader(bytes)?)
    }
}
