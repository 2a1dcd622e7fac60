//! Memoisation of alteration results across reverse-search sweeps.

use std::collections::HashMap;

use crate::alteration::Alteration;
use crate::jewels::{Conqueror, JewelType};

/// Cache key: one computed alteration per conqueror, jewel type, real
/// (on-item) seed and passive node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub conqueror: Conqueror,
    pub jewel_type: JewelType,
    pub seed: u32,
    pub node: u32,
}

/// Unbounded store of full alteration results. Sweeps over the same
/// jewel revisit the same (seed, node) pairs for every stat query; the
/// cache turns those revisits into lookups.
#[derive(Debug, Default)]
pub struct CalculationCache {
    entries: HashMap<CacheKey, Alteration>,
}

impl CalculationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry, computing and storing it on a miss. Returned by
    /// shared reference; entries are never mutated in place.
    pub fn get_or_insert_with(
        &mut self,
        key: CacheKey,
        compute: impl FnOnce() -> Alteration,
    ) -> &Alteration {
        self.entries.entry(key).or_insert_with(compute)
    }

    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<&Alteration> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. The next sweep recomputes from scratch.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
