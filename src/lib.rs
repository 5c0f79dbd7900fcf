//! # towergauge - Deterministic Tower Power Scoring Engine
//!
//! A scoring engine for tower-defense unit rosters that provides:
//! - **Deterministic** power scores (same unit, rarity, level → same score)
//! - **Shape-tolerant** stat extraction (polymorphic catalog fields
//!   normalize to plain numbers, malformed data degrades to zero)
//! - **Pure** transitions for the coupled rarity/level selection
//! - **Synchronous** operation throughout (no suspension points)
//!
//! ## Core Concepts
//!
//! ### Scoring Pipeline
//!
//! Units flow through a simple pipeline:
//!
//! ```text
//! [Catalog] → [extract] → [power::score] → [power::rating]
//! ```
//!
//! 1. **Catalog** loads the static unit roster once (read-only)
//! 2. **extract** normalizes polymorphic damage/range shapes
//! 3. **score** composes weights and multipliers into one number
//! 4. **rating** buckets the number into a qualitative tier
//!
//! The score is relative-only: it ranks units against each other and
//! has no physical meaning.
//!
//! ### Rarity/Level Selection
//!
//! Rarity tiers own contiguous ten-level ranges over [1, 60]. Where two
//! tiers meet (levels 10, 20, 30, 40, 50) the level stepper must
//! distinguish "top of the lower tier" from "bottom of the next tier"
//! at the same displayed number, so [`Selection`] carries an explicit
//! boundary side and recomputes rarity from its position after every
//! transition. Transitions are pure and return the next state.
//!
//! ## Example
//!
//! ```rust
//! use towergauge::{power, Catalog, Rarity, Selection, StepDirection};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "towers": [
//!         {"name": "Archer", "type": "Swift", "targets": ["Ground", "Air"],
//!          "damage": 40, "attack_speed": 0.5, "range": 6},
//!         {"name": "Mortar", "type": "Vanguard", "targets": ["Ground"],
//!          "damage": {"value": 80, "type": "area"}, "attack_speed": 2.5, "range": 9}
//!     ]
//! }"#).unwrap();
//!
//! // The selection drives which (rarity, level) every card is scored at.
//! let selection = Selection::new().select_rarity(Rarity::Rare);
//! let selection = selection.step_level(StepDirection::Up);
//!
//! for tower in &catalog {
//!     let score = power::score(tower, selection.rarity(), selection.display_level());
//!     let rating = power::rating(score);
//!     println!("{}: {} ({})", tower.name, score, rating.label);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Catalog loading and read-only access
//! - [`tower`] - Unit records and their polymorphic stat shapes
//! - [`rarity`] - Rarity tiers, multipliers, and level ranges
//! - [`extract`] - Stat extraction and damage classification
//! - [`power`] - Power scoring and qualitative ratings
//! - [`selection`] - The rarity/level selection state machine
//! - [`display`] - Structured display data for the UI shell
//! - [`merge`] - Merge requirements and merge upgrade lookup
//! - [`error`] - Error types

pub mod catalog;
pub mod display;
pub mod error;
pub mod extract;
pub mod merge;
pub mod power;
pub mod rarity;
pub mod selection;
pub mod tower;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use error::CatalogError;
pub use rarity::Rarity;
pub use selection::{BoundarySide, Selection, StepDirection};
pub use tower::{
    AdditionalStats, Damage, Range, RangeSentinel, Target, Tower, TowerType, Unlock, Upgrade,
    UpgradeDetail,
};

// Re-export the scoring surface
pub use extract::DamageKind;
pub use power::PowerRating;

// Re-export display data types
pub use display::{StatEntry, TargetClass, UnlockDisplay};
pub use merge::MergeInfo;
