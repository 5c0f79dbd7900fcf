//! Roster example: load a catalog and compare units at a chosen
//! rarity and level.
//!
//! This example demonstrates:
//! - Loading a catalog from JSON
//! - Scoring every unit at an explicit (rarity, level)
//! - Bucketing scores into qualitative ratings
//! - Structured display data (unlock info, targets, merge banner)

use towergauge::{display, merge, power, Catalog, CatalogError, Rarity};

const CATALOG: &str = r#"{
    "towers": [
        {
            "name": "Archer", "type": "Swift",
            "targets": ["Ground", "Air"],
            "damage": 40, "attack_speed": 0.5, "range": 6,
            "crit_chance": 0.15,
            "unlock_at": {"chapter": 1}
        },
        {
            "name": "Mortar", "type": "Vanguard",
            "targets": ["Ground"],
            "damage": {"value": 80, "type": "area"},
            "attack_speed": 2.5, "range": 9,
            "unlock_at": {"chapter": 3},
            "upgrades": [
                {"level": "Merge", "description": "+25% blast radius", "merge": true,
                 "rarity_from": "Rare", "rarity_to": "Epic"}
            ]
        },
        {
            "name": "Laser Tower", "type": "Elemental",
            "targets": ["Ground", "Air"],
            "damage": {"initial": 20, "medium": 60, "high": 140},
            "attack_speed": 0.1, "range": 7,
            "unlock_at": "Chapter 12"
        },
        {
            "name": "War Banner", "type": "Utility",
            "targets": ["Ground"],
            "damage": {"note": "buffs nearby towers"},
            "range": {"grid": 9},
            "additional_stats": {"bonus_damage": 0.25, "bonus_health": 0.2},
            "unlock_at": "Special Event (Founders Day)"
        }
    ]
}"#;

fn main() -> Result<(), CatalogError> {
    let catalog = Catalog::from_json_str(CATALOG)?;

    let rarity = Rarity::Epic;
    let level = 35;
    println!("Roster at {rarity}, level {level}:\n");

    for tower in &catalog {
        let score = power::score(tower, rarity, level);
        let rating = power::rating(score);
        let stars = "*".repeat(rating.stars as usize);

        println!("{:<12} {:>8.1}  {:<8} {}", tower.name, score, rating.label, stars);

        let unlock = display::unlock_info(tower.unlock_at.as_ref());
        let targets = display::target_class(&tower.targets);
        println!("             {}: {} | targets {}", unlock.label, unlock.value, targets.label());

        if let Some(stats) = &tower.additional_stats {
            for entry in display::stat_entries(stats) {
                println!("             {}: {}", entry.label, entry.value);
            }
        }

        if let Some(info) = merge::merge_info(tower, rarity) {
            println!(
                "             merge {}x -> {}: {}",
                info.cards_required, info.target_rarity, info.description
            );
        }

        println!();
    }

    Ok(())
}
