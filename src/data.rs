//! Catalogue record types, deserialised from the exported game-data JSON.
//!
//! Field names follow the export's wire keys (`_key`, `Var1`, `Stat1Min`,
//! ...) via serde renames so the payloads parse unchanged. Everything here
//! is plain data; behaviour lives in [`crate::alteration`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Classification of a passive node for alteration purposes.
///
/// Wire representation is the integer the game data uses (0..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NodeKind {
    None,
    SmallAttribute,
    SmallNormal,
    Notable,
    Keystone,
    JewelSocket,
}

impl TryFrom<u32> for NodeKind {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::SmallAttribute),
            2 => Ok(Self::SmallNormal),
            3 => Ok(Self::Notable),
            4 => Ok(Self::Keystone),
            5 => Ok(Self::JewelSocket),
            other => Err(format!("unknown passive node kind {other}")),
        }
    }
}

impl From<NodeKind> for u32 {
    fn from(kind: NodeKind) -> Self {
        kind as Self
    }
}

/// A stat definition. Carried so callers can resolve stat keys to their
/// identifiers and display text; the calculator itself only moves the keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "_key")]
    pub index: u32,
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "Category", default)]
    pub category: Option<u32>,
}

/// A node on the passive skill graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveNode {
    #[serde(rename = "_key")]
    pub index: u32,
    #[serde(rename = "Id", default)]
    pub id: String,
    /// Stat keys granted by the unaltered node.
    #[serde(rename = "Stats", default)]
    pub stat_indices: SmallVec<[u32; 4]>,
    /// Identifier on the skill graph. Distinct from `index`; feeds the
    /// generator seed and nothing else here.
    #[serde(rename = "PassiveSkillGraphId", default)]
    pub graph_id: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "IsKeystone", default)]
    pub is_keystone: bool,
    #[serde(rename = "IsNotable", default)]
    pub is_notable: bool,
    #[serde(rename = "IsJewelSocket", default)]
    pub is_jewel_socket: bool,
}

impl PassiveNode {
    /// Classify the node. Sockets win over keystones, keystones over
    /// notables; a single-stat node whose stat is one of the three
    /// designated attribute stats is a small attribute, anything left is
    /// a plain small passive.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if self.is_jewel_socket {
            NodeKind::JewelSocket
        } else if self.is_keystone {
            NodeKind::Keystone
        } else if self.is_notable {
            NodeKind::Notable
        } else if self.stat_indices.len() == 1 && is_small_attribute_stat(self.stat_indices[0]) {
            NodeKind::SmallAttribute
        } else {
            NodeKind::SmallNormal
        }
    }

    /// Whether a timeless jewel can alter this node at all.
    #[must_use]
    pub fn is_valid_for_alteration(&self) -> bool {
        !matches!(self.kind(), NodeKind::None | NodeKind::JewelSocket)
    }
}

/// The three attribute stats sit on a fixed bitmap: positions 0, 3 and 6
/// relative to stat key 573 (`0x49` = 0b100_1001).
#[must_use]
pub fn is_small_attribute_stat(stat: u32) -> bool {
    let bit = stat.wrapping_add(1).wrapping_sub(574);
    bit <= 6 && (0x49 >> bit) & 1 == 1
}

/// Replacement policy for one alternate-tree version. One record per
/// jewel type; the record index equals the jewel type's wire value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeVersion {
    #[serde(rename = "_key")]
    pub index: u32,
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Var1", default)]
    pub replace_small_attribute: bool,
    #[serde(rename = "Var2", default)]
    pub replace_small_normal: bool,
    #[serde(rename = "Var5", default)]
    pub min_additions: u32,
    #[serde(rename = "Var6", default)]
    pub max_additions: u32,
    /// Weight of the keep-original bucket in the notable replacement
    /// draw. Zero means notables are always replaced.
    #[serde(rename = "Var9", default)]
    pub notable_replacement_weight: u32,
}

/// A replacement payload: the alternate skill a node can turn into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateSkill {
    #[serde(rename = "_key")]
    pub index: u32,
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "AlternateTreeVersionsKey", default)]
    pub tree_version: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Node kinds this skill can replace.
    #[serde(rename = "PassiveType", default)]
    pub applies_to: Vec<NodeKind>,
    #[serde(rename = "StatsKeys", default)]
    pub stats_keys: SmallVec<[u32; 4]>,
    #[serde(rename = "Stat1Min", default)]
    pub stat1_min: u32,
    #[serde(rename = "Stat1Max", default)]
    pub stat1_max: u32,
    #[serde(rename = "Stat2Min", default)]
    pub stat2_min: u32,
    #[serde(rename = "Stat2Max", default)]
    pub stat2_max: u32,
    #[serde(rename = "Var9", default)]
    pub stat3_min: u32,
    #[serde(rename = "Var10", default)]
    pub stat3_max: u32,
    #[serde(rename = "Var11", default)]
    pub stat4_min: u32,
    #[serde(rename = "Var12", default)]
    pub stat4_max: u32,
    #[serde(rename = "SpawnWeight", default)]
    pub spawn_weight: u32,
    #[serde(rename = "Var18", default)]
    pub conqueror_index: u32,
    /// Declared on the export alongside the stat bounds; the alteration
    /// rules never consult it.
    #[serde(rename = "RandomMin", default)]
    pub random_min: u32,
    #[serde(rename = "RandomMax", default)]
    pub random_max: u32,
    #[serde(rename = "Var24", default)]
    pub conqueror_version: u32,
}

impl AlternateSkill {
    /// Inclusive roll bounds for the stat at `position` within
    /// [`Self::stats_keys`]. Positions past the fourth slot carry no
    /// data and resolve to `(0, 0)`.
    #[must_use]
    pub fn stat_bounds(&self, position: usize) -> (u32, u32) {
        match position {
            0 => (self.stat1_min, self.stat1_max),
            1 => (self.stat2_min, self.stat2_max),
            2 => (self.stat3_min, self.stat3_max),
            3 => (self.stat4_min, self.stat4_max),
            _ => (0, 0),
        }
    }
}

/// An extra modifier bundle attached to a non-replaced node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateAddition {
    #[serde(rename = "_key")]
    pub index: u32,
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "AlternateTreeVersionsKey", default)]
    pub tree_version: u32,
    #[serde(rename = "SpawnWeight", default)]
    pub spawn_weight: u32,
    #[serde(rename = "StatsKeys", default)]
    pub stats_keys: SmallVec<[u32; 2]>,
    #[serde(rename = "Stat1Min", default)]
    pub stat1_min: u32,
    #[serde(rename = "Stat1Max", default)]
    pub stat1_max: u32,
    #[serde(rename = "Var6", default)]
    pub stat2_min: u32,
    #[serde(rename = "Var7", default)]
    pub stat2_max: u32,
    #[serde(rename = "PassiveType", default)]
    pub applies_to: Vec<NodeKind>,
}

impl AlternateAddition {
    /// Inclusive roll bounds for the stat at `position` within
    /// [`Self::stats_keys`]; `(0, 0)` past the second slot.
    #[must_use]
    pub fn stat_bounds(&self, position: usize) -> (u32, u32) {
        match position {
            0 => (self.stat1_min, self.stat1_max),
            1 => (self.stat2_min, self.stat2_max),
            _ => (0, 0),
        }
    }
}
