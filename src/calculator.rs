//! Public calculation facade.
//!
//! A [`Calculator`] owns the catalogue and the memoisation cache; single
//! calculations are pure reads, sweeps fill the cache through `&mut`.

use thiserror::Error;

use crate::alteration::{Alteration, alter_node};
use crate::cache::CalculationCache;
use crate::catalog::Catalog;
use crate::jewels::{Conqueror, JewelType, TimelessJewel};
use crate::search::{SearchRequest, SearchResults, sweep};

/// Errors for lookups the caller got wrong. Ineligible nodes are not
/// errors; they produce an empty [`Alteration`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("passive node {index} is not in the catalogue")]
    UnknownPassiveNode { index: u32 },
    #[error("{conqueror} does not appear on {jewel_type} jewels")]
    UnknownConqueror { conqueror: Conqueror, jewel_type: JewelType },
    #[error("catalogue has no tree version record for {jewel_type}")]
    UnknownTreeVersion { jewel_type: JewelType },
}

/// The calculation engine.
#[derive(Debug)]
pub struct Calculator {
    catalog: Catalog,
    cache: CalculationCache,
}

impl Calculator {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, cache: CalculationCache::new() }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Compute the alteration of one node under one jewel. Deterministic:
    /// equal arguments always produce equal results.
    pub fn calculate(
        &self,
        node_index: u32,
        seed: u32,
        jewel_type: JewelType,
        conqueror: Conqueror,
    ) -> Result<Alteration, CalcError> {
        let node = self
            .catalog
            .node(node_index)
            .ok_or(CalcError::UnknownPassiveNode { index: node_index })?;
        if !node.is_valid_for_alteration() {
            return Ok(Alteration::default());
        }
        if conqueror.jewel_type() != jewel_type {
            return Err(CalcError::UnknownConqueror { conqueror, jewel_type });
        }
        let tree = self
            .catalog
            .tree_version(jewel_type.tree_version())
            .ok_or(CalcError::UnknownTreeVersion { jewel_type })?;

        let jewel = TimelessJewel::new(seed, jewel_type, conqueror.slot());
        Ok(alter_node(&self.catalog, node, tree, &jewel))
    }

    /// Sweep the jewel type's whole seed range and collect where the
    /// requested stats appear on the requested nodes. Results are
    /// memoised across sweeps until [`Self::clear_cache`].
    pub fn reverse_search(
        &mut self,
        request: SearchRequest<'_>,
    ) -> Result<SearchResults, CalcError> {
        if request.conqueror.jewel_type() != request.jewel_type {
            return Err(CalcError::UnknownConqueror {
                conqueror: request.conqueror,
                jewel_type: request.jewel_type,
            });
        }
        let tree = self
            .catalog
            .tree_version(request.jewel_type.tree_version())
            .ok_or(CalcError::UnknownTreeVersion { jewel_type: request.jewel_type })?;
        Ok(sweep(&self.catalog, &mut self.cache, tree, request))
    }

    /// Number of memoised (conqueror, jewel, seed, node) results.
    #[must_use]
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    /// Drop all memoised results. Purely a memory release; sweeps after
    /// a clear recompute identical values.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
