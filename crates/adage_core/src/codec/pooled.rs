//! Lock-guarded codec that reuses its buffers across calls.
//!
//! # Invariants
//! - At most one encode or decode runs at a time per `PooledCodec` instance.
//! - The output buffer is cleared before each encode.
//! - Encoded bytes are copied out before the lock is released.
//!
//! Only the growth buffer and the decode scratch are pooled; each encode
//! still allocates the returned `Vec` and copies into it under the lock.

use super::{AdageCodec, CodecResult};
use crate::model::adage::Adage;
use parking_lot::Mutex;

const DECODE_SCRATCH_BYTES: usize = 4096;
const INITIAL_BUFFER_BYTES: usize = 256;

struct PooledState {
    buffer: Vec<u8>,
    scratch: Vec<u8>,
}

/// Codec that trades serialized access for fewer allocations.
///
/// Share one instance between repositories by reference; it is `Sync`.
pub struct PooledCodec {
    state: Mutex<PooledState>,
}

impl PooledCodec {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PooledState {
                buffer: Vec::with_capacity(INITIAL_BUFFER_BYTES),
                scratch: vec![0; DECODE_SCRATCH_BYTES],
            }),
        }
    }
}

impl Default for PooledCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PooledCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledCodec").finish_non_exhaustive()
    }
}

impl AdageCodec for PooledCodec {
    fn encode(&self, adage: &Adage) -> CodecResult<Vec<u8>> {
        let mut state = self.state.lock();
        state.buffer.clear();
        ciborium::into_writer(adage, &mut state.buffer)?;
        Ok(state.buffer.clone())
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Adage> {
        let mut state = self.state.lock();
        let adage = ciborium::de::from_reader_with_buffer(bytes, &mut state.scratch)?;
        Ok(adage)
    }
}
