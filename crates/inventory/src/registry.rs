//! Item identifier allocation.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::item::ItemId;

/// Upper bound (exclusive) of the identifier space.
const ID_SPACE_END: u32 = i32::MAX as u32;

/// Hands out item identifiers that are unique for the registry's lifetime.
///
/// Candidates are drawn uniformly from `[0, i32::MAX)` and redrawn on collision
/// with anything issued before. Identifiers are never released. The draw loop is
/// unbounded, so the registry assumes it will issue far fewer ids than the space
/// holds.
///
/// `allocate` takes `&mut self`; callers sharing one registry across threads must
/// put it behind a lock.
pub struct ItemIdRegistry {
    issued: HashSet<ItemId>,
    rng: StdRng,
}

impl ItemIdRegistry {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Registry with a reproducible draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            issued: HashSet::new(),
            rng,
        }
    }

    pub fn allocate(&mut self) -> ItemId {
        loop {
            let candidate = ItemId::new(self.rng.gen_range(0..ID_SPACE_END));
            if self.issued.insert(candidate) {
                return candidate;
            }
            tracing::trace!(%candidate, "item id collision, redrawing");
        }
    }

    pub fn is_issued(&self, id: ItemId) -> bool {
        self.issued.contains(&id)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

impl Default for ItemIdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ItemIdRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemIdRegistry")
            .field("issued", &self.issued.len())
            .finish_non_exhaustive()
    }
}
