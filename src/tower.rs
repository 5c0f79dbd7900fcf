//! Catalog record model.
//!
//! The catalog is externally authored and loosely typed: `damage` and
//! `range` each come in several shapes, upgrades mix free text with
//! structured records, and most fields may be absent. Every polymorphic
//! field is modeled as a sum type with one variant per declared shape
//! and an explicit catch-all arm, so malformed data parses into a
//! variant that the extractors degrade to zero instead of failing.

use crate::rarity::Rarity;
use serde::{Deserialize, Serialize};

/// One of the four unit roles. Affects a fixed power multiplier.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerType {
    Vanguard,
    Swift,
    Elemental,
    Utility,
}

impl std::fmt::Display for TowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TowerType::Vanguard => "Vanguard",
            TowerType::Swift => "Swift",
            TowerType::Elemental => "Elemental",
            TowerType::Utility => "Utility",
        };
        write!(f, "{name}")
    }
}

/// What a unit can attack. Unrecognized catalog strings become `Unknown`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Target {
    Ground,
    Air,
    Unknown,
}

impl Serialize for Target {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let name = match self {
            Target::Ground => "Ground",
            Target::Air => "Air",
            Target::Unknown => "Unknown",
        };
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.to_ascii_lowercase().as_str() {
            "ground" => Target::Ground,
            "air" => Target::Air,
            _ => Target::Unknown,
        })
    }
}

/// A unit's damage configuration.
///
/// Variant order matters: serde tries untagged variants top to bottom,
/// so the shapes with required discriminating fields come first and the
/// retained raw value is the final arm. The raw arm is kept (rather than
/// dropped) because classification still probes it for a `type` key.
///
/// # Examples
///
/// ```rust
/// use towergauge::Damage;
///
/// let burst: Damage = serde_json::from_str(r#"{"normal": 50, "third_shot": 90}"#).unwrap();
/// assert!(matches!(burst, Damage::Burst { .. }));
///
/// let flat: Damage = serde_json::from_str("55").unwrap();
/// assert!(matches!(flat, Damage::Flat(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Damage {
    /// Plain scalar damage.
    Flat(f64),
    /// Ramping damage that grows the longer the unit stays on a target.
    Ramping {
        initial: f64,
        medium: f64,
        high: f64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// Burst pattern: every third shot hits harder.
    Burst {
        normal: f64,
        third_shot: f64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// A single total for a burst effect. Carries no per-shot value the
    /// scorer can use, so it extracts to zero.
    BurstTotal {
        burst_damage: f64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// The standard `{value, type?}` shape.
    Standard {
        value: f64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Note-only shape with no numeric value (support auras and the like).
    Note {
        note: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// Anything else the catalog author wrote. Extracts to zero.
    Unrecognized(serde_json::Value),
}

impl Damage {
    /// The explicit `type` annotation, wherever the shape carried one.
    pub fn kind_field(&self) -> Option<&str> {
        match self {
            Damage::Flat(_) => None,
            Damage::Ramping { kind, .. }
            | Damage::Burst { kind, .. }
            | Damage::BurstTotal { kind, .. }
            | Damage::Standard { kind, .. }
            | Damage::Note { kind, .. } => kind.as_deref(),
            Damage::Unrecognized(value) => value.get("type").and_then(|t| t.as_str()),
        }
    }
}

/// Marker for non-numeric range values the catalog spells as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSentinel {
    /// The unit reaches the whole field.
    Infinite,
}

/// A unit's range configuration.
///
/// # Examples
///
/// ```rust
/// use towergauge::{Range, RangeSentinel};
///
/// let r: Range = serde_json::from_str(r#"{"min": 2, "max": 8}"#).unwrap();
/// assert!(matches!(r, Range::MinMax { .. }));
///
/// let r: Range = serde_json::from_str("\"infinite\"").unwrap();
/// assert_eq!(r, Range::Sentinel(RangeSentinel::Infinite));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Range {
    /// Plain scalar range.
    Scalar(f64),
    /// A `{min?, max}` band; the extractor reads the max.
    MinMax {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        max: f64,
    },
    /// Grid-shaped coverage. No comparable linear range.
    Grid { grid: f64 },
    /// Blast-shaped coverage around the unit. No comparable linear range.
    Blast { blast: f64 },
    /// A sentinel string such as `"infinite"`.
    Sentinel(RangeSentinel),
    /// Anything else. Extracts to zero.
    Unrecognized(serde_json::Value),
}

/// Named secondary stats. All optional; each present stat contributes
/// additively to power under a fixed weight, except the descriptive
/// extras at the bottom which exist for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_effect: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stun_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignite_damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignite_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blast_damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blast_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<f64>,

    // Support-unit bonuses, fractional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_crit_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_push_strength: Option<f64>,

    // Descriptive extras, not scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst_trigger: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rage_timer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rage_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A structured upgrade record. The merge subset carries the tier pair
/// the merge moves between; that data feeds the merge banner only and
/// never the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDetail {
    pub level: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub merge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_from: Option<Rarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_to: Option<Rarity>,
}

/// An upgrade entry: either a structured record or author free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Upgrade {
    Detailed(UpgradeDetail),
    Text(String),
}

/// How a unit is unlocked. Catalog authors write this several ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unlock {
    /// The structured `{chapter?, event?}` shape.
    Info {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chapter: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event: Option<String>,
    },
    /// A bare chapter number.
    Chapter(u32),
    /// Free text ("Chapter 4", "Special Events Only", ...).
    Text(String),
    /// Anything else the catalog author wrote.
    Unrecognized(serde_json::Value),
}

/// One unit record from the catalog. Read-only once loaded; the shape of
/// each polymorphic field is fixed at load time.
///
/// # Examples
///
/// ```rust
/// use towergauge::Tower;
///
/// let tower: Tower = serde_json::from_str(r#"{
///     "id": 7,
///     "name": "Double Cannon",
///     "type": "Vanguard",
///     "targets": ["Ground"],
///     "damage": {"normal": 50, "third_shot": 90},
///     "attack_speed": 0.8,
///     "range": 4.5
/// }"#).unwrap();
///
/// assert_eq!(tower.name, "Double Cannon");
/// assert_eq!(tower.attack_speed, Some(0.8));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TowerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_at: Option<Unlock>,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<Damage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_stats: Option<AdditionalStats>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upgrades: Vec<Upgrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Tower {
    /// Whether the unit hits both ground and air targets.
    pub fn is_versatile(&self) -> bool {
        self.targets.contains(&Target::Ground) && self.targets.contains(&Target::Air)
    }
}
