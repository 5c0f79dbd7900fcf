//! Power scoring module.
//!
//! Combines a unit's normalized stats with its role, rarity, and level
//! into a single synthetic power score. The score has no physical
//! meaning; it exists only to rank units against each other, so the
//! weights below encode relative value judgements (area coverage beats
//! single target, stuns beat slows, support roles trade raw power for
//! bonuses).
//!
//! Scoring is a pure function of its arguments. It never reads shared
//! state and never fails: units with missing or malformed stats simply
//! score low.

use crate::extract::{self, DamageKind};
use crate::rarity::Rarity;
use crate::tower::{AdditionalStats, Tower, TowerType};

// Weight factors for the primary stats.
const ATTACK_SPEED_WEIGHT: f64 = 1.0;
const RANGE_WEIGHT: f64 = 15.0;
const CRIT_WEIGHT: f64 = 200.0;

// Weight factors for secondary stats.
const UNIT_HEALTH_WEIGHT: f64 = 0.5;
const SLOW_EFFECT_WEIGHT: f64 = 150.0;
const STUN_DURATION_WEIGHT: f64 = 180.0;
const PUSH_STRENGTH_WEIGHT: f64 = 120.0;
const IGNITE_WEIGHT: f64 = 1.3;
const BLAST_WEIGHT: f64 = 1.5;

// Support bonuses are fractions, so their weights are large.
const BONUS_DAMAGE_WEIGHT: f64 = 250.0;
const BONUS_HEALTH_WEIGHT: f64 = 200.0;
const BONUS_CRIT_CHANCE_WEIGHT: f64 = 300.0;
const BONUS_PUSH_STRENGTH_WEIGHT: f64 = 180.0;

/// Extra multiplier granted per level above 1.
const LEVEL_POWER_MULTIPLIER: f64 = 0.1;

/// Multiplier granted for hitting both ground and air targets.
const VERSATILITY_BONUS: f64 = 1.15;

/// The weight applied to extracted damage for each damage pattern.
pub fn damage_weight(kind: DamageKind) -> f64 {
    match kind {
        DamageKind::Single => 1.0,
        DamageKind::Area => 1.5,
        DamageKind::AreaLinear => 1.3,
        DamageKind::Dot => 1.2,
        DamageKind::Ramping => 0.8,
        DamageKind::Burst => 1.4,
    }
}

/// The role multiplier for each unit type.
pub fn type_weight(kind: TowerType) -> f64 {
    match kind {
        TowerType::Vanguard => 1.1,
        TowerType::Swift => 1.0,
        TowerType::Elemental => 1.05,
        TowerType::Utility => 0.85,
    }
}

fn level_multiplier(level: u8) -> f64 {
    let level = level.max(1);
    1.0 + f64::from(level - 1) * LEVEL_POWER_MULTIPLIER
}

/// Additive power contribution from the secondary stat block.
///
/// Computed independently of the main damage pipeline and added once.
/// Flat utility stats use fixed weights; support bonuses are fractional
/// and weighted up accordingly; ignite contributes its damage-per-second
/// over the full burn; blast scales damage by coverage. Effects gated
/// behind a cooldown longer than a second lose value by the square root
/// of that cooldown.
fn additional_stats_power(stats: &AdditionalStats) -> f64 {
    let mut power = 0.0;

    power += stats.unit_health.unwrap_or(0.0) * UNIT_HEALTH_WEIGHT;
    power += stats.slow_effect.unwrap_or(0.0) * SLOW_EFFECT_WEIGHT;
    power += stats.stun_duration.unwrap_or(0.0) * STUN_DURATION_WEIGHT;
    power += stats.push_strength.unwrap_or(0.0) * PUSH_STRENGTH_WEIGHT;

    power += stats.bonus_damage.unwrap_or(0.0) * BONUS_DAMAGE_WEIGHT;
    power += stats.bonus_health.unwrap_or(0.0) * BONUS_HEALTH_WEIGHT;
    power += stats.bonus_crit_chance.unwrap_or(0.0) * BONUS_CRIT_CHANCE_WEIGHT;
    power += stats.bonus_push_strength.unwrap_or(0.0) * BONUS_PUSH_STRENGTH_WEIGHT;

    if let (Some(damage), Some(duration)) = (stats.ignite_damage, stats.ignite_duration) {
        if damage > 0.0 && duration > 0.0 {
            // DPS over the full burn, kept in this form to state intent.
            let ignite_dps = damage / duration;
            power += ignite_dps * IGNITE_WEIGHT * duration;
        }
    }

    if let (Some(damage), Some(radius)) = (stats.blast_damage, stats.blast_radius) {
        if damage > 0.0 && radius > 0.0 {
            power += damage * radius * BLAST_WEIGHT;
        }
    }

    if let Some(cooldown) = stats.cooldown {
        if cooldown > 1.0 {
            power /= cooldown.sqrt();
        }
    }

    power
}

/// Score a unit at the given rarity and level.
///
/// Deterministic and pure; suitable both for a global rarity/level pair
/// and for per-card level controls, since every input is an explicit
/// parameter. The result is rounded to one decimal and only meaningful
/// relative to other scores from the same formula.
///
/// Evaluation order is fixed:
/// 1. extracted damage * damage-pattern weight
/// 2. / attack interval (faster attacks score proportionally higher)
/// 3. + range bonus (additive; range does not scale with damage)
/// 4. crit: * expected-damage boost, then + flat utility bonus
/// 5. + secondary stat block
/// 6. * role multiplier
/// 7. * rarity multiplier * level multiplier
/// 8. * versatility bonus for hitting ground and air
/// 9. round to one decimal
///
/// # Examples
///
/// ```rust
/// use towergauge::{power, Rarity, Tower};
///
/// let tower: Tower = serde_json::from_str(r#"{
///     "name": "Archer", "type": "Swift", "targets": ["Ground", "Air"],
///     "damage": 40, "attack_speed": 0.5, "range": 6
/// }"#).unwrap();
///
/// let common = power::score(&tower, Rarity::Common, 1);
/// let legendary = power::score(&tower, Rarity::Legendary, 60);
/// assert!(legendary > common);
/// ```
pub fn score(tower: &Tower, rarity: Rarity, level: u8) -> f64 {
    let mut power = extract::damage_value(tower) * damage_weight(extract::damage_kind(tower));

    if let Some(attack_speed) = tower.attack_speed {
        if attack_speed > 0.0 {
            power *= ATTACK_SPEED_WEIGHT / attack_speed;
        }
    }

    let range = extract::range_value(tower);
    if range > 0.0 && range.is_finite() {
        power += range * RANGE_WEIGHT;
    }

    if let Some(crit_chance) = tower.crit_chance {
        if crit_chance > 0.0 {
            power *= 1.0 + crit_chance;
            power += crit_chance * CRIT_WEIGHT;
        }
    }

    if let Some(stats) = &tower.additional_stats {
        power += additional_stats_power(stats);
    }

    power *= type_weight(tower.kind);
    power *= rarity.power_multiplier();
    power *= level_multiplier(level);

    if tower.is_versatile() {
        power *= VERSATILITY_BONUS;
    }

    (power * 10.0).round() / 10.0
}

/// A qualitative rating bucket for a power score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRating {
    /// The score that was bucketed.
    pub value: f64,
    /// Short descriptive label.
    pub label: &'static str,
    /// Display color for the label.
    pub color: &'static str,
    /// Star count, 1 through 10.
    pub stars: u8,
}

/// Bucket a power score into one of ten ordered rating tiers.
///
/// Boundaries are half-open: each tier includes its lower bound and
/// excludes its upper bound; the top tier is unbounded.
///
/// # Examples
///
/// ```rust
/// use towergauge::power;
///
/// assert_eq!(power::rating(99.0).label, "Weak");
/// assert_eq!(power::rating(100.0).label, "Poor");
/// assert_eq!(power::rating(50_000.0).stars, 10);
/// ```
pub fn rating(power: f64) -> PowerRating {
    // (upper bound, label, color, stars); the final arm has no bound.
    const BUCKETS: [(f64, &str, &str); 9] = [
        (100.0, "Weak", "#ef4444"),
        (300.0, "Poor", "#f97316"),
        (600.0, "Decent", "#fb923c"),
        (1000.0, "Average", "#fbbf24"),
        (1500.0, "Good", "#a3e635"),
        (2500.0, "Strong", "#22c55e"),
        (4000.0, "Great", "#10b981"),
        (6000.0, "Powerful", "#06b6d4"),
        (9000.0, "Elite", "#3b82f6"),
    ];

    for (stars, (upper, label, color)) in BUCKETS.into_iter().enumerate() {
        if power < upper {
            return PowerRating {
                value: power,
                label,
                color,
                stars: stars as u8 + 1,
            };
        }
    }

    PowerRating {
        value: power,
        label: "Godlike",
        color: "#a855f7",
        stars: 10,
    }
}
