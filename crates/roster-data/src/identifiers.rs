//! Collision-free `sourcedId` allocation.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

/// Issues UUID v4 strings drawn from a ChaCha8 stream.
///
/// Every identifier handed out is remembered, so a repeated draw is
/// discarded rather than returned twice.
pub(crate) struct IdAllocator {
    rng: ChaCha8Rng,
    issued: HashSet<Uuid>,
}

impl IdAllocator {
    /// Reproducible allocator for a fixed seed.
    pub(crate) fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Allocator seeded from operating-system entropy.
    pub(crate) fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Return an identifier not issued before by this allocator.
    pub(crate) fn next_id(&mut self) -> String {
        loop {
            let candidate = Builder::from_random_bytes(self.rng.random()).into_uuid();
            if self.issued.insert(candidate) {
                return candidate.to_string();
            }
        }
    }
}
