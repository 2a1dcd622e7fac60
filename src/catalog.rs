//! The immutable game-data catalogue.
//!
//! Built once from the five exported JSON payloads (already
//! decompressed by the embedding layer), validated, then read-only for
//! the life of the process. Candidate ordering inside the applicability
//! views is the payload order; the weighted draws depend on it.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::data::{AlternateAddition, AlternateSkill, NodeKind, PassiveNode, Stat, TreeVersion};
use crate::jewels::TimelessJewel;

/// Errors raised while ingesting or validating the game data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("game data payload did not parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} index {index}")]
    DuplicateIndex { kind: &'static str, index: u32 },
    #[error("tree version {tree_version} has addition bounds {min}..{max}")]
    AdditionsRange { tree_version: u32, min: u32, max: u32 },
    #[error("{kind} {index} references unknown tree version {tree_version}")]
    UnknownTreeVersion { kind: &'static str, index: u32, tree_version: u32 },
}

/// The four auxiliary description payloads, carried opaquely for
/// consumers that render stat text. The calculator never reads them.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    pub stat_descriptions: Vec<u8>,
    pub passive_skill_stat_descriptions: Vec<u8>,
    pub passive_skill_aura_stat_descriptions: Vec<u8>,
    pub possible_stats: Vec<u8>,
}

/// The five JSON payloads the catalogue is built from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource<'a> {
    pub passive_nodes: &'a str,
    pub alternate_skills: &'a str,
    pub alternate_additions: &'a str,
    pub tree_versions: &'a str,
    pub stats: &'a str,
}

type ViewMap = HashMap<(NodeKind, u32), Vec<usize>>;

/// Read-only store of typed game records plus the lookup views the
/// calculator consults.
#[derive(Debug)]
pub struct Catalog {
    nodes: Vec<PassiveNode>,
    skills: Vec<AlternateSkill>,
    additions: Vec<AlternateAddition>,
    tree_versions: Vec<TreeVersion>,
    stats: Vec<Stat>,
    node_by_index: HashMap<u32, usize>,
    skill_by_index: HashMap<u32, usize>,
    addition_by_index: HashMap<u32, usize>,
    tree_by_index: HashMap<u32, usize>,
    stat_by_index: HashMap<u32, usize>,
    skills_by_kind: ViewMap,
    additions_by_kind: ViewMap,
    translations: Translations,
}

impl Catalog {
    /// Parse the five payloads and build the catalogue.
    pub fn from_json(
        source: CatalogSource<'_>,
        translations: Translations,
    ) -> Result<Self, CatalogError> {
        fn parse<T: for<'de> Deserialize<'de>>(payload: &str) -> Result<Vec<T>, CatalogError> {
            Ok(serde_json::from_str(payload)?)
        }

        Self::from_records(
            parse(source.passive_nodes)?,
            parse(source.alternate_skills)?,
            parse(source.alternate_additions)?,
            parse(source.tree_versions)?,
            parse(source.stats)?,
            translations,
        )
    }

    /// Build the catalogue from already-typed records. Record order is
    /// preserved and observable through the applicability views.
    pub fn from_records(
        nodes: Vec<PassiveNode>,
        skills: Vec<AlternateSkill>,
        additions: Vec<AlternateAddition>,
        tree_versions: Vec<TreeVersion>,
        stats: Vec<Stat>,
        translations: Translations,
    ) -> Result<Self, CatalogError> {
        let node_by_index = index_map("passive node", &nodes, |n| n.index)?;
        let skill_by_index = index_map("alternate skill", &skills, |s| s.index)?;
        let addition_by_index = index_map("alternate addition", &additions, |a| a.index)?;
        let tree_by_index = index_map("tree version", &tree_versions, |t| t.index)?;
        let stat_by_index = index_map("stat", &stats, |s| s.index)?;

        for tree in &tree_versions {
            if tree.min_additions > tree.max_additions {
                return Err(CatalogError::AdditionsRange {
                    tree_version: tree.index,
                    min: tree.min_additions,
                    max: tree.max_additions,
                });
            }
        }
        for skill in &skills {
            if !tree_by_index.contains_key(&skill.tree_version) {
                return Err(CatalogError::UnknownTreeVersion {
                    kind: "alternate skill",
                    index: skill.index,
                    tree_version: skill.tree_version,
                });
            }
        }
        for addition in &additions {
            if !tree_by_index.contains_key(&addition.tree_version) {
                return Err(CatalogError::UnknownTreeVersion {
                    kind: "alternate addition",
                    index: addition.index,
                    tree_version: addition.tree_version,
                });
            }
        }

        let mut skills_by_kind: ViewMap = HashMap::new();
        for (position, skill) in skills.iter().enumerate() {
            for &kind in &skill.applies_to {
                skills_by_kind
                    .entry((kind, skill.tree_version))
                    .or_default()
                    .push(position);
            }
        }
        let mut additions_by_kind: ViewMap = HashMap::new();
        for (position, addition) in additions.iter().enumerate() {
            for &kind in &addition.applies_to {
                additions_by_kind
                    .entry((kind, addition.tree_version))
                    .or_default()
                    .push(position);
            }
        }

        log::debug!(
            "catalogue ready: {} passive nodes, {} alternate skills, {} additions, {} tree versions, {} stats",
            nodes.len(),
            skills.len(),
            additions.len(),
            tree_versions.len(),
            stats.len()
        );

        Ok(Self {
            nodes,
            skills,
            additions,
            tree_versions,
            stats,
            node_by_index,
            skill_by_index,
            addition_by_index,
            tree_by_index,
            stat_by_index,
            skills_by_kind,
            additions_by_kind,
            translations,
        })
    }

    #[must_use]
    pub fn node(&self, index: u32) -> Option<&PassiveNode> {
        self.node_by_index.get(&index).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn skill(&self, index: u32) -> Option<&AlternateSkill> {
        self.skill_by_index.get(&index).map(|&i| &self.skills[i])
    }

    #[must_use]
    pub fn addition(&self, index: u32) -> Option<&AlternateAddition> {
        self.addition_by_index.get(&index).map(|&i| &self.additions[i])
    }

    #[must_use]
    pub fn tree_version(&self, index: u32) -> Option<&TreeVersion> {
        self.tree_by_index.get(&index).map(|&i| &self.tree_versions[i])
    }

    #[must_use]
    pub fn stat(&self, index: u32) -> Option<&Stat> {
        self.stat_by_index.get(&index).map(|&i| &self.stats[i])
    }

    #[must_use]
    pub fn nodes(&self) -> &[PassiveNode] {
        &self.nodes
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Replacement candidates for a node kind under a tree version, in
    /// payload order.
    pub fn skills_for(
        &self,
        kind: NodeKind,
        tree_version: u32,
    ) -> impl Iterator<Item = &AlternateSkill> + Clone {
        self.skills_by_kind
            .get(&(kind, tree_version))
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&i| &self.skills[i])
    }

    /// Addition candidates for a node kind under a tree version, in
    /// payload order.
    pub fn additions_for(
        &self,
        kind: NodeKind,
        tree_version: u32,
    ) -> impl Iterator<Item = &AlternateAddition> + Clone {
        self.additions_by_kind
            .get(&(kind, tree_version))
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&i| &self.additions[i])
    }

    /// The keystone replacement a jewel imposes: the first skill of the
    /// jewel's tree version keyed by its conqueror slot, provided that
    /// skill can actually stand on a keystone.
    #[must_use]
    pub fn keystone_for(&self, jewel: &TimelessJewel) -> Option<&AlternateSkill> {
        let found = self.skills.iter().find(|skill| {
            skill.tree_version == jewel.jewel_type.tree_version()
                && skill.conqueror_index == jewel.slot.index
                && skill.conqueror_version == jewel.slot.version
        })?;
        found.applies_to.contains(&NodeKind::Keystone).then_some(found)
    }
}

fn index_map<T>(
    kind: &'static str,
    records: &[T],
    key: impl Fn(&T) -> u32,
) -> Result<HashMap<u32, usize>, CatalogError> {
    let mut map = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if map.insert(key(record), position).is_some() {
            return Err(CatalogError::DuplicateIndex { kind, index: key(record) });
        }
    }
    Ok(map)
}
