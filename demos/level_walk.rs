//! Level walk example: drive the rarity/level stepper across a tier
//! boundary and watch a unit's score move with it.
//!
//! This example demonstrates:
//! - The coupled (rarity, level) selection and its pure transitions
//! - The side flip at a tier boundary (same displayed level, new tier)
//! - Re-scoring on every selection change, as a UI shell would

use towergauge::{power, Rarity, Selection, StepDirection, Tower};

fn main() {
    let tower: Tower = serde_json::from_str(
        r#"{
            "name": "Double Cannon", "type": "Vanguard",
            "targets": ["Ground"],
            "damage": {"normal": 50, "third_shot": 90},
            "attack_speed": 0.8, "range": 4.5
        }"#,
    )
    .expect("demo record is well formed");

    // Start just below the Common/Good boundary and walk upward.
    let mut selection = Selection::new().select_rarity(Rarity::Common);
    for _ in 0..7 {
        selection = selection.step_level(StepDirection::Up);
    }

    println!("Stepping {} up through the first merge threshold:\n", tower.name);
    for _ in 0..6 {
        report(&tower, selection);
        selection = selection.step_level(StepDirection::Up);
    }

    println!("\n...and back down:\n");
    for _ in 0..6 {
        report(&tower, selection);
        selection = selection.step_level(StepDirection::Down);
    }
}

fn report(tower: &Tower, selection: Selection) {
    let score = power::score(tower, selection.rarity(), selection.display_level());
    println!(
        "  level {:>2} ({:>4.1} internally)  {:<10} power {:>7.1}",
        selection.display_level(),
        selection.internal_level(),
        selection.rarity().to_string(),
        score
    );
}
