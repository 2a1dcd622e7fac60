//! Timeless jewel types, conquerors and seed ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five timeless jewel bases. Discriminants are wire-stable and double
/// as the alternate-tree-version record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum JewelType {
    GloriousVanity = 1,
    LethalPride = 2,
    BrutalRestraint = 3,
    MilitantFaith = 4,
    ElegantHubris = 5,
}

/// Inclusive seed range a jewel base can drop with. `special` marks the
/// Elegant Hubris range whose seeds are multiples of 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRange {
    pub min: u32,
    pub max: u32,
    pub special: bool,
}

impl SeedRange {
    /// Whether `seed` is a seed this jewel base can actually carry.
    #[must_use]
    pub fn contains(&self, seed: u32) -> bool {
        seed >= self.min && seed <= self.max && (!self.special || seed % 20 == 0)
    }
}

impl JewelType {
    pub const ALL: [Self; 5] = [
        Self::GloriousVanity,
        Self::LethalPride,
        Self::BrutalRestraint,
        Self::MilitantFaith,
        Self::ElegantHubris,
    ];

    /// Human-readable base name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GloriousVanity => "Glorious Vanity",
            Self::LethalPride => "Lethal Pride",
            Self::BrutalRestraint => "Brutal Restraint",
            Self::MilitantFaith => "Militant Faith",
            Self::ElegantHubris => "Elegant Hubris",
        }
    }

    /// Index of the alternate-tree-version record governing this base.
    #[must_use]
    pub fn tree_version(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn seed_range(self) -> SeedRange {
        match self {
            Self::GloriousVanity => SeedRange { min: 100, max: 8000, special: false },
            Self::LethalPride => SeedRange { min: 10000, max: 18000, special: false },
            Self::BrutalRestraint => SeedRange { min: 500, max: 8000, special: false },
            Self::MilitantFaith => SeedRange { min: 2000, max: 10000, special: false },
            Self::ElegantHubris => SeedRange { min: 2000, max: 160000, special: true },
        }
    }

    /// The conquerors whose names can appear on this base.
    #[must_use]
    pub fn conquerors(self) -> &'static [Conqueror] {
        match self {
            Self::GloriousVanity => &[
                Conqueror::Xibaqua,
                Conqueror::Zerphi,
                Conqueror::Ahuana,
                Conqueror::Doryani,
            ],
            Self::LethalPride => &[
                Conqueror::Kaom,
                Conqueror::Rakiata,
                Conqueror::Kiloava,
                Conqueror::Akoya,
            ],
            Self::BrutalRestraint => &[
                Conqueror::Deshret,
                Conqueror::Balbala,
                Conqueror::Asenath,
                Conqueror::Nasima,
            ],
            Self::MilitantFaith => &[
                Conqueror::Venarius,
                Conqueror::Maxarius,
                Conqueror::Dominus,
                Conqueror::Avarius,
            ],
            Self::ElegantHubris => &[
                Conqueror::Cadiro,
                Conqueror::Victario,
                Conqueror::Chitus,
                Conqueror::Caspiro,
            ],
        }
    }
}

impl TryFrom<u32> for JewelType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::GloriousVanity),
            2 => Ok(Self::LethalPride),
            3 => Ok(Self::BrutalRestraint),
            4 => Ok(Self::MilitantFaith),
            5 => Ok(Self::ElegantHubris),
            other => Err(other),
        }
    }
}

impl fmt::Display for JewelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conqueror slot within a jewel base: the pair the keystone lookup and
/// the generator never see the name, only this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConquerorSlot {
    pub index: u32,
    pub version: u32,
}

/// The twenty conqueror legends across the five bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conqueror {
    Xibaqua,
    Zerphi,
    Ahuana,
    Doryani,
    Kaom,
    Rakiata,
    Kiloava,
    Akoya,
    Deshret,
    Balbala,
    Asenath,
    Nasima,
    Venarius,
    Maxarius,
    Dominus,
    Avarius,
    Cadiro,
    Victario,
    Chitus,
    Caspiro,
}

impl Conqueror {
    pub const ALL: [Self; 20] = [
        Self::Xibaqua,
        Self::Zerphi,
        Self::Ahuana,
        Self::Doryani,
        Self::Kaom,
        Self::Rakiata,
        Self::Kiloava,
        Self::Akoya,
        Self::Deshret,
        Self::Balbala,
        Self::Asenath,
        Self::Nasima,
        Self::Venarius,
        Self::Maxarius,
        Self::Dominus,
        Self::Avarius,
        Self::Cadiro,
        Self::Victario,
        Self::Chitus,
        Self::Caspiro,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Xibaqua => "Xibaqua",
            Self::Zerphi => "Zerphi",
            Self::Ahuana => "Ahuana",
            Self::Doryani => "Doryani",
            Self::Kaom => "Kaom",
            Self::Rakiata => "Rakiata",
            Self::Kiloava => "Kiloava",
            Self::Akoya => "Akoya",
            Self::Deshret => "Deshret",
            Self::Balbala => "Balbala",
            Self::Asenath => "Asenath",
            Self::Nasima => "Nasima",
            Self::Venarius => "Venarius",
            Self::Maxarius => "Maxarius",
            Self::Dominus => "Dominus",
            Self::Avarius => "Avarius",
            Self::Cadiro => "Cadiro",
            Self::Victario => "Victario",
            Self::Chitus => "Chitus",
            Self::Caspiro => "Caspiro",
        }
    }

    /// The jewel base this conqueror belongs to.
    #[must_use]
    pub fn jewel_type(self) -> JewelType {
        match self {
            Self::Xibaqua | Self::Zerphi | Self::Ahuana | Self::Doryani => {
                JewelType::GloriousVanity
            }
            Self::Kaom | Self::Rakiata | Self::Kiloava | Self::Akoya => JewelType::LethalPride,
            Self::Deshret | Self::Balbala | Self::Asenath | Self::Nasima => {
                JewelType::BrutalRestraint
            }
            Self::Venarius | Self::Maxarius | Self::Dominus | Self::Avarius => {
                JewelType::MilitantFaith
            }
            Self::Cadiro | Self::Victario | Self::Chitus | Self::Caspiro => {
                JewelType::ElegantHubris
            }
        }
    }

    /// The (index, version) slot the game data keys this conqueror by.
    #[must_use]
    pub fn slot(self) -> ConquerorSlot {
        let (index, version) = match self {
            Self::Xibaqua | Self::Kaom | Self::Deshret | Self::Venarius | Self::Cadiro => (1, 0),
            Self::Balbala | Self::Maxarius => (1, 1),
            Self::Zerphi | Self::Rakiata | Self::Asenath | Self::Dominus | Self::Victario => (2, 0),
            Self::Ahuana => (2, 1),
            Self::Doryani | Self::Kiloava | Self::Nasima | Self::Avarius | Self::Chitus => (3, 0),
            Self::Akoya | Self::Caspiro => (3, 1),
        };
        ConquerorSlot { index, version }
    }
}

impl fmt::Display for Conqueror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-sensitive parse of the in-game conqueror name.
impl FromStr for Conqueror {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown conqueror {s:?}"))
    }
}

/// One socketed jewel: everything the alteration of a single node depends
/// on besides the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelessJewel {
    /// Raw seed as printed on the item. Preserved for cache keys.
    pub seed: u32,
    pub jewel_type: JewelType,
    pub slot: ConquerorSlot,
}

impl TimelessJewel {
    #[must_use]
    pub fn new(seed: u32, jewel_type: JewelType, slot: ConquerorSlot) -> Self {
        Self { seed, jewel_type, slot }
    }

    /// The seed fed to the generator. Elegant Hubris items print seeds in
    /// steps of 20; the mechanic consumes the quotient.
    #[must_use]
    pub fn effective_seed(&self) -> u32 {
        if self.jewel_type == JewelType::ElegantHubris {
            self.seed / 20
        } else {
            self.seed
        }
    }
}
