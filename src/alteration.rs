//! The alteration decision engine.
//!
//! Pure function from (node, jewel) to an [`Alteration`]. A fresh
//! generator is seeded from (graph id, effective seed) once at entry and
//! the stream runs continuously through the whole decision: the notable
//! eligibility draw, the replacement selection (one and the same draw),
//! then either the replacement's stat rolls in key order, or the
//! addition count followed by each addition draw and its stat rolls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::Catalog;
use crate::data::{AlternateAddition, AlternateSkill, NodeKind, PassiveNode, TreeVersion};
use crate::jewels::TimelessJewel;
use crate::rng::NumberGenerator;

/// One rolled stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRoll {
    /// Stat key the value belongs to.
    pub stat: u32,
    pub value: u32,
}

/// One addition attached to a node, with its rolled stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionRoll {
    /// Catalogue index of the [`AlternateAddition`].
    pub addition: u32,
    pub rolls: SmallVec<[StatRoll; 2]>,
}

/// The outcome of socketing a jewel next to one node: either a
/// replacement skill with its stat rolls, or a set of additions on the
/// unchanged node, never both. Both empty when the node is not
/// eligible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alteration {
    /// Catalogue index of the replacement [`AlternateSkill`], if any.
    pub replacement: Option<u32>,
    /// Rolls for the replacement skill's stats, in key order.
    pub replacement_rolls: SmallVec<[StatRoll; 4]>,
    pub additions: Vec<AdditionRoll>,
}

impl Alteration {
    /// True when the jewel leaves the node completely untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacement.is_none() && self.additions.is_empty()
    }
}

/// Compute the full alteration of `node` under `jewel`. Ineligible nodes
/// (sockets) come back empty without consuming any randomness.
#[must_use]
pub fn alter_node(
    catalog: &Catalog,
    node: &PassiveNode,
    tree: &TreeVersion,
    jewel: &TimelessJewel,
) -> Alteration {
    let kind = node.kind();
    if matches!(kind, NodeKind::None | NodeKind::JewelSocket) {
        return Alteration::default();
    }

    let mut rng = NumberGenerator::new();
    rng.reset(node.graph_id, jewel.effective_seed());

    match kind {
        NodeKind::Keystone => {
            // Deterministic by conqueror slot; no draw is consumed, and
            // keystones never augment.
            match catalog.keystone_for(jewel) {
                Some(skill) => replace_with(skill, &mut rng),
                None => Alteration::default(),
            }
        }
        NodeKind::Notable => {
            // A single draw both decides replacement and selects the
            // skill; the keep-original bucket sits first in the walk.
            match pick_skill(catalog, tree, kind, &mut rng) {
                Some(skill) => replace_with(skill, &mut rng),
                None => augmented(catalog, tree, kind, &mut rng),
            }
        }
        NodeKind::SmallAttribute if tree.replace_small_attribute => {
            match pick_skill(catalog, tree, kind, &mut rng) {
                Some(skill) => replace_with(skill, &mut rng),
                None => Alteration::default(),
            }
        }
        NodeKind::SmallNormal if tree.replace_small_normal => {
            match pick_skill(catalog, tree, kind, &mut rng) {
                Some(skill) => replace_with(skill, &mut rng),
                None => Alteration::default(),
            }
        }
        _ => augmented(catalog, tree, kind, &mut rng),
    }
}

/// Roll the replacement skill's stats. Replaced nodes never carry
/// additions.
fn replace_with(skill: &AlternateSkill, rng: &mut NumberGenerator) -> Alteration {
    let replacement_rolls = skill
        .stats_keys
        .iter()
        .enumerate()
        .map(|(position, &stat)| {
            let (min, max) = skill.stat_bounds(position);
            StatRoll { stat, value: rng.generate_range(min, max) }
        })
        .collect();
    Alteration {
        replacement: Some(skill.index),
        replacement_rolls,
        additions: Vec::new(),
    }
}

/// Augmentation: roll how many additions the node receives, then draw
/// each one independently (repeats allowed) and roll its stats.
fn augmented(
    catalog: &Catalog,
    tree: &TreeVersion,
    kind: NodeKind,
    rng: &mut NumberGenerator,
) -> Alteration {
    let count = rng.generate_range(tree.min_additions, tree.max_additions);
    let mut additions = Vec::with_capacity(count as usize);
    for _ in 0..count {
        if let Some(addition) = pick_addition(catalog, tree, kind, rng) {
            additions.push(roll_addition_stats(addition, rng));
        }
    }
    Alteration { additions, ..Alteration::default() }
}

/// Weighted draw over the replacement candidates. For notables the
/// keep-original bucket occupies the first `notable_replacement_weight`
/// units of the walk; landing inside it returns `None`, which keeps the
/// original skill. The first candidate whose running total strictly
/// exceeds the draw wins.
fn pick_skill<'a>(
    catalog: &'a Catalog,
    tree: &TreeVersion,
    kind: NodeKind,
    rng: &mut NumberGenerator,
) -> Option<&'a AlternateSkill> {
    let candidates = catalog.skills_for(kind, tree.index);
    let keep_weight = if kind == NodeKind::Notable {
        tree.notable_replacement_weight
    } else {
        0
    };
    let total = candidates
        .clone()
        .fold(keep_weight, |sum, skill| sum.wrapping_add(skill.spawn_weight));
    if total == 0 {
        return None;
    }

    let roll = rng.generate_single(total);
    let mut current = keep_weight;
    if current > roll {
        return None;
    }
    for skill in candidates {
        current = current.wrapping_add(skill.spawn_weight);
        if current > roll {
            return Some(skill);
        }
    }
    None
}

/// Weighted draw over the addition candidates for this node kind.
fn pick_addition<'a>(
    catalog: &'a Catalog,
    tree: &TreeVersion,
    kind: NodeKind,
    rng: &mut NumberGenerator,
) -> Option<&'a AlternateAddition> {
    let candidates = catalog.additions_for(kind, tree.index);
    let total = candidates
        .clone()
        .fold(0u32, |sum, addition| sum.wrapping_add(addition.spawn_weight));
    if total == 0 {
        return None;
    }

    let roll = rng.generate_single(total);
    let mut current = 0u32;
    for addition in candidates {
        current = current.wrapping_add(addition.spawn_weight);
        if current > roll {
            return Some(addition);
        }
    }
    None
}

fn roll_addition_stats(addition: &AlternateAddition, rng: &mut NumberGenerator) -> AdditionRoll {
    let rolls = addition
        .stats_keys
        .iter()
        .enumerate()
        .map(|(position, &stat)| {
            let (min, max) = addition.stat_bounds(position);
            StatRoll { stat, value: rng.generate_range(min, max) }
        })
        .collect();
    AdditionRoll { addition: addition.index, rolls }
}
