//! Stat extraction module.
//!
//! Normalizes a unit's polymorphic `damage` and `range` fields into
//! plain numbers, and classifies the damage pattern for weighting.
//! Each consumer has exactly one exhaustive match over the declared
//! shapes, with the unrecognized arm spelled out rather than silently
//! falling through. Extraction never fails: absent or malformed fields
//! contribute a neutral zero.

use crate::tower::{Damage, Range, RangeSentinel, Tower};

/// Stand-in linear range credited to units whose range is the
/// `"infinite"` sentinel.
pub const INFINITE_RANGE_STAND_IN: f64 = 10.0;

/// Damage pattern classification used by the scorer's weight table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum DamageKind {
    /// Standard single-target damage.
    Single,
    /// Area of effect.
    Area,
    /// Linear area of effect (piercing shots, boomerangs).
    AreaLinear,
    /// Damage over time.
    Dot,
    /// Ramps up while locked on a target; starts weak.
    Ramping,
    /// Periodic heavy shot.
    Burst,
}

impl DamageKind {
    fn from_annotation(annotation: &str) -> Option<DamageKind> {
        match annotation {
            "area" => Some(DamageKind::Area),
            "area_linear" => Some(DamageKind::AreaLinear),
            "dot" => Some(DamageKind::Dot),
            _ => None,
        }
    }
}

/// Extract a single representative damage number from a unit.
///
/// Scalar damage is taken as-is; the ramping shape averages its three
/// stages; the burst shape weights the common shot double
/// (`(2*normal + third_shot) / 3`). Every other shape (including the
/// total-only `{burst_damage}` form and note-only records) carries no
/// per-shot value and extracts to zero.
///
/// # Examples
///
/// ```rust
/// use towergauge::{extract, Tower};
///
/// let tower: Tower = serde_json::from_str(r#"{
///     "name": "Laser", "type": "Elemental",
///     "damage": {"initial": 100, "medium": 150, "high": 200}
/// }"#).unwrap();
///
/// assert_eq!(extract::damage_value(&tower), 150.0);
/// ```
pub fn damage_value(tower: &Tower) -> f64 {
    match &tower.damage {
        None => 0.0,
        Some(Damage::Flat(value)) => *value,
        Some(Damage::Standard { value, .. }) => *value,
        Some(Damage::Ramping {
            initial,
            medium,
            high,
            ..
        }) => (initial + medium + high) / 3.0,
        Some(Damage::Burst {
            normal, third_shot, ..
        }) => (normal * 2.0 + third_shot) / 3.0,
        Some(Damage::BurstTotal { .. }) => 0.0,
        Some(Damage::Note { .. }) => 0.0,
        Some(Damage::Unrecognized(_)) => 0.0,
    }
}

/// Classify a unit's damage pattern.
///
/// An explicit `type` annotation on the damage record wins; annotations
/// outside the known set fall back to `Single` without consulting the
/// structure. Unannotated shapes are inferred structurally: the ramping
/// shape is `Ramping`, the paired burst shape is `Burst`, everything
/// else is `Single`.
///
/// # Examples
///
/// ```rust
/// use towergauge::{extract, extract::DamageKind, Tower};
///
/// let tower: Tower = serde_json::from_str(r#"{
///     "name": "Mortar", "type": "Vanguard",
///     "damage": {"value": 80, "type": "area"}
/// }"#).unwrap();
///
/// assert_eq!(extract::damage_kind(&tower), DamageKind::Area);
/// ```
pub fn damage_kind(tower: &Tower) -> DamageKind {
    let Some(damage) = &tower.damage else {
        return DamageKind::Single;
    };

    if let Some(annotation) = damage.kind_field() {
        if !annotation.is_empty() {
            return DamageKind::from_annotation(annotation).unwrap_or(DamageKind::Single);
        }
    }

    match damage {
        Damage::Ramping { .. } => DamageKind::Ramping,
        Damage::Burst { .. } => DamageKind::Burst,
        Damage::Flat(_)
        | Damage::Standard { .. }
        | Damage::BurstTotal { .. }
        | Damage::Note { .. }
        | Damage::Unrecognized(_) => DamageKind::Single,
    }
}

/// Extract a single representative range number from a unit.
///
/// Scalars are taken as-is, a `{min, max}` band contributes its max,
/// and the `"infinite"` sentinel maps to a fixed stand-in. Grid and
/// blast coverage have no comparable linear range and extract to zero,
/// as does anything unrecognized.
pub fn range_value(tower: &Tower) -> f64 {
    match &tower.range {
        None => 0.0,
        Some(Range::Scalar(value)) => *value,
        Some(Range::MinMax { max, .. }) => *max,
        Some(Range::Grid { .. }) => 0.0,
        Some(Range::Blast { .. }) => 0.0,
        Some(Range::Sentinel(RangeSentinel::Infinite)) => INFINITE_RANGE_STAND_IN,
        Some(Range::Unrecognized(_)) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower(json: &str) -> Tower {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalar_damage() {
        let t = tower(r#"{"name": "t", "type": "Swift", "damage": 55}"#);
        assert_eq!(damage_value(&t), 55.0);
        assert_eq!(damage_kind(&t), DamageKind::Single);
    }

    #[test]
    fn test_standard_damage_with_annotation() {
        let t = tower(r#"{"name": "t", "type": "Swift", "damage": {"value": 42, "type": "area_linear"}}"#);
        assert_eq!(damage_value(&t), 42.0);
        assert_eq!(damage_kind(&t), DamageKind::AreaLinear);
    }

    #[test]
    fn test_ramping_damage_averages() {
        let t = tower(
            r#"{"name": "t", "type": "Elemental",
                "damage": {"initial": 100, "medium": 150, "high": 200}}"#,
        );
        assert_eq!(damage_value(&t), 150.0);
        assert_eq!(damage_kind(&t), DamageKind::Ramping);
    }

    #[test]
    fn test_burst_damage_weights_normal_shots() {
        let t = tower(
            r#"{"name": "t", "type": "Vanguard", "damage": {"normal": 50, "third_shot": 90}}"#,
        );
        let expected = (2.0 * 50.0 + 90.0) / 3.0;
        assert!((damage_value(&t) - expected).abs() < 1e-9);
        assert_eq!(damage_kind(&t), DamageKind::Burst);
    }

    #[test]
    fn test_burst_total_has_no_value() {
        let t = tower(r#"{"name": "t", "type": "Vanguard", "damage": {"burst_damage": 200}}"#);
        assert_eq!(damage_value(&t), 0.0);
        assert_eq!(damage_kind(&t), DamageKind::Single);
    }

    #[test]
    fn test_note_only_damage() {
        let t = tower(r#"{"name": "t", "type": "Utility", "damage": {"note": "buff aura"}}"#);
        assert_eq!(damage_value(&t), 0.0);
        assert_eq!(damage_kind(&t), DamageKind::Single);
    }

    #[test]
    fn test_annotation_beats_structure() {
        let t = tower(
            r#"{"name": "t", "type": "Vanguard",
                "damage": {"normal": 50, "third_shot": 90, "type": "dot"}}"#,
        );
        assert_eq!(damage_kind(&t), DamageKind::Dot);
    }

    #[test]
    fn test_unknown_annotation_is_single() {
        let t = tower(r#"{"name": "t", "type": "Swift", "damage": {"value": 10, "type": "chain"}}"#);
        assert_eq!(damage_kind(&t), DamageKind::Single);
    }

    #[test]
    fn test_unrecognized_shape_probed_for_annotation() {
        let t = tower(r#"{"name": "t", "type": "Elemental", "damage": {"type": "dot"}}"#);
        assert_eq!(damage_value(&t), 0.0);
        assert_eq!(damage_kind(&t), DamageKind::Dot);
    }

    #[test]
    fn test_absent_damage() {
        let t = tower(r#"{"name": "t", "type": "Utility"}"#);
        assert_eq!(damage_value(&t), 0.0);
        assert_eq!(damage_kind(&t), DamageKind::Single);
    }

    #[test]
    fn test_range_shapes() {
        let t = tower(r#"{"name": "t", "type": "Swift", "range": 4.5}"#);
        assert_eq!(range_value(&t), 4.5);

        let t = tower(r#"{"name": "t", "type": "Swift", "range": {"min": 2, "max": 8}}"#);
        assert_eq!(range_value(&t), 8.0);

        let t = tower(r#"{"name": "t", "type": "Swift", "range": {"grid": 9}}"#);
        assert_eq!(range_value(&t), 0.0);

        let t = tower(r#"{"name": "t", "type": "Swift", "range": {"blast": 3.5}}"#);
        assert_eq!(range_value(&t), 0.0);

        let t = tower(r#"{"name": "t", "type": "Swift", "range": "infinite"}"#);
        assert_eq!(range_value(&t), INFINITE_RANGE_STAND_IN);

        let t = tower(r#"{"name": "t", "type": "Swift", "range": "somewhere"}"#);
        assert_eq!(range_value(&t), 0.0);

        let t = tower(r#"{"name": "t", "type": "Swift"}"#);
        assert_eq!(range_value(&t), 0.0);
    }
}
