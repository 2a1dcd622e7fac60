//! Timeless jewel alteration calculator.
//!
//! Reproduces, bit-exactly, how a socketed timeless jewel transforms the
//! passive nodes in its radius: which alternate skill replaces a node,
//! which additions attach to it, and the precise roll of every stat.
//! Also answers the inverse question: which seeds put a wanted stat on a
//! wanted node.
//!
//! The crate is pure computation over an immutable game-data catalogue.
//! No I/O, no platform randomness, no floats in the core paths. Typical
//! use:
//!
//! ```no_run
//! use timeless_calc::{Calculator, Catalog, CatalogSource, Conqueror, JewelType, Translations};
//!
//! # fn payloads() -> [String; 5] { unimplemented!() }
//! let [nodes, skills, additions, trees, stats] = payloads();
//! let catalog = Catalog::from_json(
//!     CatalogSource {
//!         passive_nodes: &nodes,
//!         alternate_skills: &skills,
//!         alternate_additions: &additions,
//!         tree_versions: &trees,
//!         stats: &stats,
//!     },
//!     Translations::default(),
//! )?;
//! let calculator = Calculator::new(catalog);
//! let result = calculator.calculate(12345, 500, JewelType::BrutalRestraint, Conqueror::Deshret)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alteration;
pub mod cache;
pub mod calculator;
pub mod catalog;
pub mod data;
pub mod jewels;
pub mod rng;
pub mod search;

// Re-export commonly used types
pub use alteration::{AdditionRoll, Alteration, StatRoll, alter_node};
pub use cache::{CacheKey, CalculationCache};
pub use calculator::{CalcError, Calculator};
pub use catalog::{Catalog, CatalogError, CatalogSource, Translations};
pub use data::{
    AlternateAddition, AlternateSkill, NodeKind, PassiveNode, Stat, TreeVersion,
    is_small_attribute_stat,
};
pub use jewels::{Conqueror, ConquerorSlot, JewelType, SeedRange, TimelessJewel};
pub use rng::NumberGenerator;
pub use search::{CancelToken, SearchRequest, SearchResults};
