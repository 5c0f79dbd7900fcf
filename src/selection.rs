//! Rarity/level selection module.
//!
//! Owns the coupled (rarity, level) pair behind the level stepper. Tiers
//! meet at displayed levels 10, 20, 30, 40 and 50, and the stepper must
//! let a user distinguish "top of the lower tier" from "bottom of the
//! next tier" even though both show the same number: the moment a unit
//! merges upward. A boundary level therefore carries an explicit side
//! discriminant instead of the fractional half-level encoding, which
//! would make a float comparison the state discriminant.
//!
//! Transitions are pure: they consume a `Selection` and return the next
//! one, so the caller swaps states atomically and tests need no UI
//! harness. Rarity is always derived from the encoded position; the two
//! can never disagree.

use crate::rarity::Rarity;

const MIN_LEVEL: u8 = 1;
const MAX_LEVEL: u8 = 60;

/// Which tier a boundary level currently denotes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BoundarySide {
    /// The tier whose range ends at this level.
    Lower,
    /// The tier whose range begins just above this level, pulled back
    /// visually to the same displayed number.
    Upper,
}

/// Direction of a level step.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// The current (rarity, level) selection.
///
/// `display_level` is what the user sees and what feeds scoring;
/// `boundary` disambiguates the tier at levels where two tiers meet and
/// is `None` everywhere else.
///
/// # Examples
///
/// ```rust
/// use towergauge::{Rarity, Selection, StepDirection};
///
/// let selection = Selection::new();
/// assert_eq!(selection.display_level(), 1);
/// assert_eq!(selection.rarity(), Rarity::Common);
///
/// let stepped = selection.step_level(StepDirection::Up);
/// assert_eq!(stepped.display_level(), 2);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Selection {
    display_level: u8,
    boundary: Option<BoundarySide>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

fn is_boundary_level(level: u8) -> bool {
    level % 10 == 0 && level < MAX_LEVEL
}

impl Selection {
    /// The initial selection: Common, level 1.
    pub fn new() -> Self {
        Selection {
            display_level: MIN_LEVEL,
            boundary: None,
        }
    }

    /// The displayed level, always an integer in [1, 60].
    pub fn display_level(&self) -> u8 {
        self.display_level
    }

    /// The boundary side, if the selection sits on a tier boundary.
    pub fn boundary(&self) -> Option<BoundarySide> {
        self.boundary
    }

    /// The tier implied by the current position.
    ///
    /// Non-boundary levels map through the range table; a boundary level
    /// resolves to the tier its side denotes. Positions are constructed
    /// only through the transitions below, so the lookup cannot miss.
    pub fn rarity(&self) -> Rarity {
        let effective_level = match self.boundary {
            Some(BoundarySide::Upper) => self.display_level + 1,
            _ => self.display_level,
        };
        Rarity::for_level(effective_level).unwrap_or(Rarity::Common)
    }

    /// The position as the fractional level the level stepper displays
    /// internally: boundary levels on their upper side read as `n.5`.
    ///
    /// Observer only; never used as state.
    pub fn internal_level(&self) -> f64 {
        match self.boundary {
            Some(BoundarySide::Upper) => f64::from(self.display_level) + 0.5,
            _ => f64::from(self.display_level),
        }
    }

    /// Jump directly to a tier.
    ///
    /// Lands at the top of the tier's range, on the side that denotes
    /// the tier itself where that top is a boundary. Common instead
    /// jumps to level 1, the stepper's natural starting point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use towergauge::{Rarity, Selection};
    ///
    /// let selection = Selection::new().select_rarity(Rarity::Epic);
    /// assert_eq!(selection.display_level(), 40);
    /// assert_eq!(selection.rarity(), Rarity::Epic);
    ///
    /// let common = selection.select_rarity(Rarity::Common);
    /// assert_eq!(common.display_level(), 1);
    /// ```
    pub fn select_rarity(self, rarity: Rarity) -> Selection {
        if rarity == Rarity::Common {
            return Selection {
                display_level: MIN_LEVEL,
                boundary: None,
            };
        }

        let top = rarity.max_level();
        Selection {
            display_level: top,
            boundary: if is_boundary_level(top) {
                Some(BoundarySide::Lower)
            } else {
                None
            },
        }
    }

    /// Step the level by one in the given direction.
    ///
    /// At a boundary level the side flip is consumed first: stepping up
    /// from the lower side stays on the same displayed level but flips
    /// the rarity to the next tier, and symmetrically downward. Entering
    /// a boundary always lands on the side consistent with the direction
    /// of travel. Stepping past either end of [1, 60] is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use towergauge::{Rarity, Selection, StepDirection};
    ///
    /// // Top of Common; one step up flips the tier, not the number.
    /// let at_top = Selection::new().select_rarity(Rarity::Common);
    /// let mut s = at_top;
    /// for _ in 0..9 {
    ///     s = s.step_level(StepDirection::Up);
    /// }
    /// assert_eq!((s.display_level(), s.rarity()), (10, Rarity::Common));
    ///
    /// let s = s.step_level(StepDirection::Up);
    /// assert_eq!((s.display_level(), s.rarity()), (10, Rarity::Good));
    /// ```
    pub fn step_level(self, direction: StepDirection) -> Selection {
        if let Some(side) = self.boundary {
            return self.step_from_boundary(side, direction);
        }

        let destination = match direction {
            StepDirection::Up => {
                if self.display_level >= MAX_LEVEL {
                    return self;
                }
                self.display_level + 1
            }
            StepDirection::Down => {
                if self.display_level <= MIN_LEVEL {
                    return self;
                }
                self.display_level - 1
            }
        };

        let boundary = if is_boundary_level(destination) {
            // Arriving from below lands on the lower side, from above on
            // the upper side, so one more step in the same direction
            // crosses the tier line.
            Some(match direction {
                StepDirection::Up => BoundarySide::Lower,
                StepDirection::Down => BoundarySide::Upper,
            })
        } else {
            None
        };

        Selection {
            display_level: destination,
            boundary,
        }
    }

    fn step_from_boundary(self, side: BoundarySide, direction: StepDirection) -> Selection {
        match (side, direction) {
            // The flip at the same displayed level comes first.
            (BoundarySide::Lower, StepDirection::Up) => Selection {
                boundary: Some(BoundarySide::Upper),
                ..self
            },
            (BoundarySide::Upper, StepDirection::Down) => Selection {
                boundary: Some(BoundarySide::Lower),
                ..self
            },
            // Leaving the boundary; the neighbors of a boundary level are
            // never boundaries themselves.
            (BoundarySide::Upper, StepDirection::Up) => Selection {
                display_level: self.display_level + 1,
                boundary: None,
            },
            (BoundarySide::Lower, StepDirection::Down) => Selection {
                display_level: self.display_level - 1,
                boundary: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = Selection::new();
        assert_eq!(s.display_level(), 1);
        assert_eq!(s.rarity(), Rarity::Common);
        assert_eq!(s.boundary(), None);
        assert_eq!(s.internal_level(), 1.0);
    }

    #[test]
    fn test_plain_steps_track_the_table() {
        let mut s = Selection::new();
        s = s.step_level(StepDirection::Up);
        s = s.step_level(StepDirection::Up);
        assert_eq!(s.display_level(), 3);
        assert_eq!(s.rarity(), Rarity::Common);

        s = s.step_level(StepDirection::Down);
        assert_eq!(s.display_level(), 2);
    }

    #[test]
    fn test_boundary_round_trip() {
        // Reach the top of Common by stepping.
        let mut s = Selection::new();
        for _ in 0..9 {
            s = s.step_level(StepDirection::Up);
        }
        assert_eq!(s.internal_level(), 10.0);
        assert_eq!(s.rarity(), Rarity::Common);

        // One step up: same displayed level, tier flips.
        let s = s.step_level(StepDirection::Up);
        assert_eq!(s.internal_level(), 10.5);
        assert_eq!(s.display_level(), 10);
        assert_eq!(s.rarity(), Rarity::Good);

        // Another: displayed level moves, tier stays.
        let up = s.step_level(StepDirection::Up);
        assert_eq!(up.internal_level(), 11.0);
        assert_eq!(up.rarity(), Rarity::Good);

        // Back down from the upper side returns to the lower tier.
        let down = s.step_level(StepDirection::Down);
        assert_eq!(down.internal_level(), 10.0);
        assert_eq!(down.rarity(), Rarity::Common);
    }

    #[test]
    fn test_entering_boundary_from_above() {
        let mut s = Selection::new().select_rarity(Rarity::Good);
        assert_eq!(s.display_level(), 20);

        // Walk down from 20 to 11, then to the boundary at 10.
        for _ in 0..9 {
            s = s.step_level(StepDirection::Down);
        }
        assert_eq!(s.display_level(), 11);
        assert_eq!(s.rarity(), Rarity::Good);

        let s = s.step_level(StepDirection::Down);
        assert_eq!(s.display_level(), 10);
        assert_eq!(s.boundary(), Some(BoundarySide::Upper));
        assert_eq!(s.rarity(), Rarity::Good);
    }

    #[test]
    fn test_select_rarity_lands_on_tier_top() {
        let s = Selection::new().select_rarity(Rarity::Good);
        assert_eq!(s.display_level(), 20);
        assert_eq!(s.rarity(), Rarity::Good);
        assert_eq!(s.boundary(), Some(BoundarySide::Lower));

        let s = Selection::new().select_rarity(Rarity::Legendary);
        assert_eq!(s.display_level(), 60);
        assert_eq!(s.rarity(), Rarity::Legendary);
        assert_eq!(s.boundary(), None);
    }

    #[test]
    fn test_select_common_jumps_to_bottom() {
        let s = Selection::new().select_rarity(Rarity::Epic).select_rarity(Rarity::Common);
        assert_eq!(s.display_level(), 1);
        assert_eq!(s.rarity(), Rarity::Common);
    }

    #[test]
    fn test_step_up_from_selected_tier_top_crosses() {
        let s = Selection::new().select_rarity(Rarity::Rare);
        assert_eq!((s.display_level(), s.rarity()), (30, Rarity::Rare));

        let s = s.step_level(StepDirection::Up);
        assert_eq!((s.display_level(), s.rarity()), (30, Rarity::Epic));
    }

    #[test]
    fn test_clamped_at_both_ends() {
        let bottom = Selection::new().step_level(StepDirection::Down);
        assert_eq!(bottom, Selection::new());

        let top = Selection::new().select_rarity(Rarity::Legendary);
        assert_eq!(top.step_level(StepDirection::Up), top);
    }

    #[test]
    fn test_full_descent_reaches_common_floor() {
        let mut s = Selection::new().select_rarity(Rarity::Legendary);

        // 59 integer decrements plus five boundary side flips.
        for _ in 0..64 {
            s = s.step_level(StepDirection::Down);
        }
        assert_eq!(s.display_level(), 1);
        assert_eq!(s.rarity(), Rarity::Common);

        // Further steps stay clamped at the floor.
        for _ in 0..5 {
            s = s.step_level(StepDirection::Down);
            assert_eq!(s.display_level(), 1);
            assert_eq!(s.rarity(), Rarity::Common);
        }
    }

    #[test]
    fn test_full_ascent_reaches_legendary_cap() {
        let mut s = Selection::new();
        for _ in 0..64 {
            s = s.step_level(StepDirection::Up);
        }
        assert_eq!(s.display_level(), 60);
        assert_eq!(s.rarity(), Rarity::Legendary);

        let s = s.step_level(StepDirection::Up);
        assert_eq!(s.display_level(), 60);
    }

    #[test]
    fn test_rarity_always_matches_position() {
        // Walk the entire range both ways and re-derive rarity from the
        // internal level at every stop.
        let mut s = Selection::new();
        for _ in 0..70 {
            s = s.step_level(StepDirection::Up);
            let expected = match s.boundary() {
                Some(BoundarySide::Upper) => Rarity::for_level(s.display_level() + 1),
                _ => Rarity::for_level(s.display_level()),
            };
            assert_eq!(Some(s.rarity()), expected);
        }
        for _ in 0..70 {
            s = s.step_level(StepDirection::Down);
            let expected = match s.boundary() {
                Some(BoundarySide::Upper) => Rarity::for_level(s.display_level() + 1),
                _ => Rarity::for_level(s.display_level()),
            };
            assert_eq!(Some(s.rarity()), expected);
        }
    }
}
