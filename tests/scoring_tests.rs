use towergauge::extract::{self, DamageKind};
use towergauge::power;
use towergauge::*;

fn tower(json: &str) -> Tower {
    serde_json::from_str(json).unwrap()
}

/// Score a complete catalog end to end and verify the full composition
/// of the formula on a hand-computed unit.
#[test]
fn test_complete_pipeline() {
    let catalog = Catalog::from_json_str(
        r#"{"towers": [
            {"name": "Archer", "type": "Swift", "targets": ["Ground", "Air"],
             "damage": 40, "attack_speed": 0.5, "range": 6, "crit_chance": 0.25},
            {"name": "Mortar", "type": "Vanguard", "targets": ["Ground"],
             "damage": {"value": 80, "type": "area"}, "attack_speed": 2.5, "range": 9},
            {"name": "Banner", "type": "Utility", "targets": ["Ground"],
             "damage": {"note": "buffs nearby towers"},
             "additional_stats": {"bonus_damage": 0.25, "bonus_health": 0.2}}
        ]}"#,
    )
    .unwrap();

    let archer = &catalog.towers()[0];

    // 40 damage, doubled by the 0.5s attack interval, +90 range bonus,
    // crit boost and flat crit bonus, Good rarity at level 12, and the
    // versatility bonus on top:
    // ((40 / 0.5 + 90) * 1.25 + 50) * 1.15 * 2.1 * 1.15 = 729.028...
    let score = power::score(archer, Rarity::Good, 12);
    assert_eq!(score, 729.0);

    // Every catalog unit scores without panicking, whatever its shape.
    for t in &catalog {
        let s = power::score(t, Rarity::Epic, 35);
        assert!(s >= 0.0);
    }
}

/// Scoring is a pure function: identical inputs give identical outputs.
#[test]
fn test_score_deterministic() {
    let t = tower(
        r#"{"name": "t", "type": "Elemental", "targets": ["Ground"],
            "damage": {"initial": 60, "medium": 100, "high": 140},
            "attack_speed": 1.2, "range": 5}"#,
    );
    let first = power::score(&t, Rarity::EpicPlus, 44);
    for _ in 0..10 {
        assert_eq!(power::score(&t, Rarity::EpicPlus, 44), first);
    }
}

/// Rarity multipliers are strictly increasing along the tier order, and
/// so are the scores they produce.
#[test]
fn test_rarity_monotonicity() {
    let t = tower(r#"{"name": "t", "type": "Swift", "damage": 100, "range": 4}"#);

    let mut previous_multiplier = 0.0;
    let mut previous_score = 0.0;
    for rarity in Rarity::ALL {
        let multiplier = rarity.power_multiplier();
        assert!(multiplier > previous_multiplier);
        previous_multiplier = multiplier;

        let score = power::score(&t, rarity, 1);
        assert!(score > previous_score);
        previous_score = score;
    }
}

/// Higher level never reduces power, for any rarity.
#[test]
fn test_level_monotonicity() {
    let t = tower(
        r#"{"name": "t", "type": "Vanguard", "targets": ["Ground", "Air"],
            "damage": {"normal": 50, "third_shot": 90}, "attack_speed": 0.8,
            "range": 4.5, "crit_chance": 0.1,
            "additional_stats": {"stun_duration": 0.5, "cooldown": 3}}"#,
    );

    for rarity in Rarity::ALL {
        let mut previous = f64::MIN;
        for level in 1..=60 {
            let score = power::score(&t, rarity, level);
            assert!(
                score >= previous,
                "score regressed at {rarity} level {level}"
            );
            previous = score;
        }
    }
}

/// The ramping shape extracts to the arithmetic mean of its stages.
#[test]
fn test_ramping_extraction() {
    let t = tower(
        r#"{"name": "Laser", "type": "Elemental",
            "damage": {"initial": 100, "medium": 150, "high": 200}}"#,
    );
    assert_eq!(extract::damage_value(&t), 150.0);
    assert_eq!(extract::damage_kind(&t), DamageKind::Ramping);
}

/// The burst shape weights the two normal shots double.
#[test]
fn test_burst_extraction() {
    let t = tower(
        r#"{"name": "Double Cannon", "type": "Vanguard",
            "damage": {"normal": 50, "third_shot": 90}}"#,
    );
    let expected = (2.0 * 50.0 + 90.0) / 3.0;
    assert!((extract::damage_value(&t) - expected).abs() < 1e-9);
    assert!((extract::damage_value(&t) - 63.33).abs() < 0.01);
}

/// A unit hitting both ground and air scores exactly 1.15x its
/// single-target twin, all else equal.
#[test]
fn test_versatility_bonus_exact() {
    let both = tower(
        r#"{"name": "t", "type": "Swift", "targets": ["Ground", "Air"],
            "damage": 64, "attack_speed": 0.8, "range": 5}"#,
    );
    let ground_only = tower(
        r#"{"name": "t", "type": "Swift", "targets": ["Ground"],
            "damage": 64, "attack_speed": 0.8, "range": 5}"#,
    );

    for rarity in Rarity::ALL {
        let with_bonus = power::score(&both, rarity, 30);
        let without = power::score(&ground_only, rarity, 30);
        // Both scores round to one decimal, so compare at that grain.
        assert!((with_bonus - without * 1.15).abs() < 0.15);
    }
}

/// Rating buckets are half-open: the lower bound belongs to the tier
/// above it.
#[test]
fn test_rating_boundaries() {
    let weak = power::rating(99.0);
    assert_eq!(weak.label, "Weak");
    assert_eq!(weak.stars, 1);

    let poor = power::rating(100.0);
    assert_eq!(poor.label, "Poor");
    assert_eq!(poor.stars, 2);

    let godlike = power::rating(9000.0);
    assert_eq!(godlike.label, "Godlike");
    assert_eq!(godlike.stars, 10);
}

/// Units with degenerate records score zero rather than failing.
#[test]
fn test_malformed_units_degrade_to_zero() {
    let cases = [
        r#"{"name": "no stats", "type": "Utility"}"#,
        r#"{"name": "note only", "type": "Utility", "damage": {"note": "support"}}"#,
        r#"{"name": "odd shapes", "type": "Swift", "damage": "N/A", "range": "somewhere"}"#,
        r#"{"name": "burst total", "type": "Vanguard", "damage": {"burst_damage": 400}}"#,
    ];

    for case in cases {
        let t = tower(case);
        assert_eq!(power::score(&t, Rarity::Legendary, 60), 0.0, "case: {case}");
    }
}

/// Infinite range contributes through its stand-in value.
#[test]
fn test_infinite_range_stand_in() {
    let infinite = tower(r#"{"name": "t", "type": "Swift", "damage": 100, "range": "infinite"}"#);
    let finite = tower(r#"{"name": "t", "type": "Swift", "damage": 100, "range": 10}"#);
    assert_eq!(
        power::score(&infinite, Rarity::Common, 1),
        power::score(&finite, Rarity::Common, 1)
    );
}

/// The secondary stat block is dampened by long cooldowns but the
/// primary damage pipeline is untouched.
#[test]
fn test_cooldown_scopes_to_secondary_block() {
    let with_cooldown = tower(
        r#"{"name": "t", "type": "Swift", "damage": 100,
            "additional_stats": {"slow_effect": 0.5, "cooldown": 9}}"#,
    );
    let without = tower(
        r#"{"name": "t", "type": "Swift", "damage": 100,
            "additional_stats": {"slow_effect": 0.5}}"#,
    );

    // 100 + 75/3 = 125 vs 100 + 75 = 175.
    assert_eq!(power::score(&with_cooldown, Rarity::Common, 1), 125.0);
    assert_eq!(power::score(&without, Rarity::Common, 1), 175.0);
}

/// The rating of a realistic catalog spread covers several tiers.
#[test]
fn test_catalog_rating_spread() {
    let catalog = Catalog::from_json_str(
        r#"{"towers": [
            {"name": "weak", "type": "Utility", "damage": 10},
            {"name": "mid", "type": "Swift", "damage": 60, "attack_speed": 0.6, "range": 6},
            {"name": "top", "type": "Vanguard", "targets": ["Ground", "Air"],
             "damage": {"value": 120, "type": "area"}, "attack_speed": 0.5,
             "range": 8, "crit_chance": 0.3}
        ]}"#,
    )
    .unwrap();

    let ratings: Vec<u8> = catalog
        .iter()
        .map(|t| power::rating(power::score(t, Rarity::Legendary, 60)).stars)
        .collect();

    // Strictly better units land in strictly better buckets here.
    assert!(ratings[0] < ratings[1]);
    assert!(ratings[1] < ratings[2]);
}
