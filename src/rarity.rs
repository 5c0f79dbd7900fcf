//! Rarity tier module.
//!
//! Provides the `Rarity` type: six ordered quality tiers, each carrying
//! a fixed power multiplier and a contiguous ten-level range. The tier
//! order and both tables are fixed game data and never change at runtime.

use serde::{Deserialize, Serialize};

/// One of the six ordered rarity tiers.
///
/// Tiers are ordered `Common < Good < Rare < Epic < EpicPlus < Legendary`,
/// and the derived `Ord` follows that order. Each tier owns a contiguous
/// range of ten levels; together the ranges cover [1, 60] without gaps
/// or overlap.
///
/// # Examples
///
/// ```rust
/// use towergauge::Rarity;
///
/// assert!(Rarity::Common < Rarity::Legendary);
/// assert_eq!(Rarity::Good.level_range(), (11, 20));
/// assert_eq!(Rarity::for_level(35), Some(Rarity::Epic));
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Good,
    Rare,
    Epic,
    #[serde(rename = "Epic+")]
    EpicPlus,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Good,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::EpicPlus,
        Rarity::Legendary,
    ];

    /// The scalar power multiplier applied by the scorer for this tier.
    ///
    /// Strictly increasing along the tier order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use towergauge::Rarity;
    ///
    /// assert_eq!(Rarity::Common.power_multiplier(), 1.0);
    /// assert_eq!(Rarity::Legendary.power_multiplier(), 2.3);
    /// ```
    pub fn power_multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Good => 1.15,
            Rarity::Rare => 1.35,
            Rarity::Epic => 1.60,
            Rarity::EpicPlus => 1.90,
            Rarity::Legendary => 2.30,
        }
    }

    /// The inclusive `(min, max)` level range owned by this tier.
    pub fn level_range(self) -> (u8, u8) {
        match self {
            Rarity::Common => (1, 10),
            Rarity::Good => (11, 20),
            Rarity::Rare => (21, 30),
            Rarity::Epic => (31, 40),
            Rarity::EpicPlus => (41, 50),
            Rarity::Legendary => (51, 60),
        }
    }

    /// The lowest level belonging to this tier.
    pub fn min_level(self) -> u8 {
        self.level_range().0
    }

    /// The highest level belonging to this tier.
    pub fn max_level(self) -> u8 {
        self.level_range().1
    }

    /// Whether `level` falls inside this tier's range.
    pub fn is_valid_level(self, level: u8) -> bool {
        let (min, max) = self.level_range();
        level >= min && level <= max
    }

    /// Look up the tier that owns `level`.
    ///
    /// Returns `None` for levels outside [1, 60].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use towergauge::Rarity;
    ///
    /// assert_eq!(Rarity::for_level(1), Some(Rarity::Common));
    /// assert_eq!(Rarity::for_level(10), Some(Rarity::Common));
    /// assert_eq!(Rarity::for_level(11), Some(Rarity::Good));
    /// assert_eq!(Rarity::for_level(60), Some(Rarity::Legendary));
    /// assert_eq!(Rarity::for_level(61), None);
    /// ```
    pub fn for_level(level: u8) -> Option<Rarity> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.is_valid_level(level))
    }

    /// The display color associated with this tier.
    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#9ca3af",
            Rarity::Good => "#4ade80",
            Rarity::Rare => "#60a5fa",
            Rarity::Epic => "#a78bfa",
            Rarity::EpicPlus => "#7c3aed",
            Rarity::Legendary => "#fbbf24",
        }
    }

    /// The display name of this tier, as it appears in catalog data.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Good => "Good",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::EpicPlus => "Epic+",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
