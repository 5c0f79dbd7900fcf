//! Merge info module.
//!
//! Merging converts several copies of a unit into one of the next tier
//! at specific level thresholds. This crate only describes merges for
//! the shell's merge banner; merge data never feeds the scorer.

use crate::rarity::Rarity;
use crate::tower::{Tower, Upgrade, UpgradeDetail};

/// How many copies a merge into `target` consumes.
///
/// Higher tiers merge from fewer copies. Tiers without an authored
/// requirement fall back to three.
///
/// # Examples
///
/// ```rust
/// use towergauge::{merge, Rarity};
///
/// assert_eq!(merge::cards_required(Rarity::Rare), 3);
/// assert_eq!(merge::cards_required(Rarity::Legendary), 2);
/// ```
pub fn cards_required(target: Rarity) -> u8 {
    match target {
        Rarity::EpicPlus | Rarity::Legendary => 2,
        Rarity::Common | Rarity::Good | Rarity::Rare | Rarity::Epic => 3,
    }
}

/// The merge upgrade that leaves `rarity`, if the unit has one.
///
/// Legendary is the top tier and never merges further.
pub fn merge_upgrade(tower: &Tower, rarity: Rarity) -> Option<&UpgradeDetail> {
    if rarity == Rarity::Legendary {
        return None;
    }

    tower.upgrades.iter().find_map(|upgrade| match upgrade {
        Upgrade::Detailed(detail) if detail.rarity_from == Some(rarity) => Some(detail),
        _ => None,
    })
}

/// Everything the merge banner needs for one unit at one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeInfo {
    /// The tier the merge produces.
    pub target_rarity: Rarity,
    /// Copies consumed by the merge.
    pub cards_required: u8,
    /// The authored description of what the merge grants.
    pub description: String,
}

/// Describe the merge available from `rarity`, if any.
///
/// Returns `None` when the unit has no merge upgrade at this tier, when
/// the upgrade names no target tier, or when its description is empty;
/// there is nothing to show in any of those cases.
///
/// # Examples
///
/// ```rust
/// use towergauge::{merge, Rarity, Tower};
///
/// let tower: Tower = serde_json::from_str(r#"{
///     "name": "Cannon", "type": "Vanguard",
///     "upgrades": [{"level": "Merge", "description": "+1 barrel", "merge": true,
///                   "rarity_from": "Epic", "rarity_to": "Epic+"}]
/// }"#).unwrap();
///
/// let info = merge::merge_info(&tower, Rarity::Epic).unwrap();
/// assert_eq!(info.target_rarity, Rarity::EpicPlus);
/// assert_eq!(info.cards_required, 2);
///
/// assert!(merge::merge_info(&tower, Rarity::Common).is_none());
/// ```
pub fn merge_info(tower: &Tower, rarity: Rarity) -> Option<MergeInfo> {
    let upgrade = merge_upgrade(tower, rarity)?;
    if upgrade.description.is_empty() {
        return None;
    }
    let target_rarity = upgrade.rarity_to?;

    Some(MergeInfo {
        target_rarity,
        cards_required: cards_required(target_rarity),
        description: upgrade.description.clone(),
    })
}
