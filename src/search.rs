//! Reverse search: sweep a jewel's whole seed range and report where the
//! wanted stats land.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::alteration::alter_node;
use crate::cache::{CacheKey, CalculationCache};
use crate::catalog::Catalog;
use crate::data::{PassiveNode, TreeVersion};
use crate::jewels::{Conqueror, JewelType, TimelessJewel};

/// Sparse sweep output: real seed → node index → stat key → rolled value.
/// Seed/node combinations that match nothing are absent.
pub type SearchResults = BTreeMap<u32, BTreeMap<u32, BTreeMap<u32, u32>>>;

/// Cooperative cancellation flag for long sweeps. Clones share the flag;
/// the sweep checks it once per seed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One reverse-search query. `progress` is invoked with the real seed on
/// every tenth iteration value; `cancel` stops the sweep at the next
/// seed boundary, returning what has been found so far.
pub struct SearchRequest<'a> {
    pub nodes: &'a [u32],
    pub stats: &'a [u32],
    pub jewel_type: JewelType,
    pub conqueror: Conqueror,
    pub progress: Option<&'a mut dyn FnMut(u32)>,
    pub cancel: Option<&'a CancelToken>,
}

impl<'a> SearchRequest<'a> {
    #[must_use]
    pub fn new(
        nodes: &'a [u32],
        stats: &'a [u32],
        jewel_type: JewelType,
        conqueror: Conqueror,
    ) -> Self {
        Self { nodes, stats, jewel_type, conqueror, progress: None, cancel: None }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a mut dyn FnMut(u32)) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Run the sweep. Nodes that are unknown or ineligible are skipped
/// silently; the caller has already validated the jewel/conqueror pair
/// and resolved the tree version.
pub(crate) fn sweep(
    catalog: &Catalog,
    cache: &mut CalculationCache,
    tree: &TreeVersion,
    mut request: SearchRequest<'_>,
) -> SearchResults {
    let eligible: Vec<&PassiveNode> = request
        .nodes
        .iter()
        .filter_map(|&index| catalog.node(index))
        .filter(|node| node.is_valid_for_alteration())
        .collect();
    let wanted: HashSet<u32> = request.stats.iter().copied().collect();

    let range = request.jewel_type.seed_range();
    let (low, high) = if range.special {
        (range.min / 20, range.max / 20)
    } else {
        (range.min, range.max)
    };
    log::debug!(
        "sweeping {} seeds {low}..={high} over {} nodes for {} stats",
        request.jewel_type.name(),
        eligible.len(),
        wanted.len()
    );

    let slot = request.conqueror.slot();
    let mut results = SearchResults::new();

    for step in low..=high {
        let real_seed = if range.special { step * 20 } else { step };

        if request.cancel.is_some_and(CancelToken::is_cancelled) {
            log::debug!("sweep cancelled before seed {real_seed}");
            break;
        }
        if step % 10 == 0 {
            if let Some(progress) = request.progress.as_deref_mut() {
                progress(real_seed);
            }
        }

        let jewel = TimelessJewel::new(real_seed, request.jewel_type, slot);
        for &node in &eligible {
            let key = CacheKey {
                conqueror: request.conqueror,
                jewel_type: request.jewel_type,
                seed: real_seed,
                node: node.index,
            };
            let alteration =
                cache.get_or_insert_with(key, || alter_node(catalog, node, tree, &jewel));

            for roll in &alteration.replacement_rolls {
                if wanted.contains(&roll.stat) {
                    results
                        .entry(real_seed)
                        .or_default()
                        .entry(node.index)
                        .or_default()
                        .insert(roll.stat, roll.value);
                }
            }
            for addition in &alteration.additions {
                for roll in &addition.rolls {
                    if wanted.contains(&roll.stat) {
                        results
                            .entry(real_seed)
                            .or_default()
                            .entry(node.index)
                            .or_default()
                            .insert(roll.stat, roll.value);
                    }
                }
            }
        }
    }

    log::debug!("sweep finished with {} matching seeds", results.len());
    results
}
