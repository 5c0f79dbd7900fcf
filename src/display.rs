//! Display data module.
//!
//! Turns loosely-authored catalog fields into small structured values
//! the UI shell can render directly: a `{label, value}` pair for unlock
//! requirements, a target classification, and labeled entries for the
//! secondary stat block. No markup is produced here; that belongs to
//! the shell.

use crate::tower::{AdditionalStats, Target, Unlock};

/// A structured unlock requirement: `label` names the kind of
/// requirement ("Chapter" or "Event") and `value` the specific one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockDisplay {
    pub label: &'static str,
    pub value: String,
}

impl UnlockDisplay {
    fn chapter(value: impl Into<String>) -> UnlockDisplay {
        UnlockDisplay {
            label: "Chapter",
            value: value.into(),
        }
    }

    fn event(value: impl Into<String>) -> UnlockDisplay {
        UnlockDisplay {
            label: "Event",
            value: value.into(),
        }
    }
}

/// The text following a case-insensitive `"chapter "` prefix, if any.
fn after_chapter_prefix(text: &str) -> Option<&str> {
    const PREFIX_LEN: usize = "chapter ".len();
    let prefix = text.get(..PREFIX_LEN)?;
    if prefix.eq_ignore_ascii_case("chapter ") {
        Some(text[PREFIX_LEN..].trim())
    } else {
        None
    }
}

/// The leading run of digits in `text`, if it starts with one.
fn leading_number(text: &str) -> Option<&str> {
    let end = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end > 0 {
        Some(&text[..end])
    } else {
        None
    }
}

/// The content of the first parenthesized group in `text`, if any.
fn parenthesized(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let rest = &text[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

/// Normalize an unlock requirement into a structured `{label, value}`.
///
/// Missing or empty requirements read as a special event. Chapter
/// references (structured, numeric, or spelled out in event text)
/// become `Chapter` entries; everything else is an `Event`, with
/// parenthesized event names extracted from longer descriptions.
///
/// # Examples
///
/// ```rust
/// use towergauge::{display, Unlock};
///
/// let unlock: Unlock = serde_json::from_str(r#"{"chapter": 4}"#).unwrap();
/// let info = display::unlock_info(Some(&unlock));
/// assert_eq!((info.label, info.value.as_str()), ("Chapter", "4"));
///
/// let info = display::unlock_info(None);
/// assert_eq!((info.label, info.value.as_str()), ("Event", "Special"));
/// ```
pub fn unlock_info(unlock: Option<&Unlock>) -> UnlockDisplay {
    let Some(unlock) = unlock else {
        return UnlockDisplay::event("Special");
    };

    match unlock {
        Unlock::Info {
            event: Some(event), ..
        } => match after_chapter_prefix(event) {
            Some(rest) => UnlockDisplay::chapter(rest),
            None => UnlockDisplay::event(event.clone()),
        },
        Unlock::Info {
            chapter: Some(chapter),
            event: None,
        } => UnlockDisplay::chapter(chapter.to_string()),
        Unlock::Info {
            chapter: None,
            event: None,
        } => UnlockDisplay::event("Special"),
        Unlock::Chapter(chapter) => UnlockDisplay::chapter(chapter.to_string()),
        Unlock::Text(text) => unlock_info_from_text(text),
        Unlock::Unrecognized(_) => UnlockDisplay::event("Unknown"),
    }
}

fn unlock_info_from_text(text: &str) -> UnlockDisplay {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UnlockDisplay::event("Special");
    }

    if let Some(number) = after_chapter_prefix(trimmed).and_then(leading_number) {
        return UnlockDisplay::chapter(number);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("event") || lower.contains("special") {
        if let Some(name) = parenthesized(trimmed) {
            return UnlockDisplay::event(name);
        }
        return UnlockDisplay::event(trimmed);
    }

    UnlockDisplay::event(trimmed)
}

/// Classification of what a unit can attack.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum TargetClass {
    /// Hits both ground and air.
    Both,
    Ground,
    Air,
    /// Nothing recognizable declared.
    Other,
}

impl TargetClass {
    /// Display text for the classification.
    pub fn label(self) -> &'static str {
        match self {
            TargetClass::Both => "Air & Ground",
            TargetClass::Ground => "Ground",
            TargetClass::Air => "Air",
            TargetClass::Other => "Unknown",
        }
    }
}

/// Classify a unit's target list.
///
/// # Examples
///
/// ```rust
/// use towergauge::{display, display::TargetClass, Target};
///
/// let both = vec![Target::Ground, Target::Air];
/// assert_eq!(display::target_class(&both), TargetClass::Both);
/// assert_eq!(TargetClass::Both.label(), "Air & Ground");
/// ```
pub fn target_class(targets: &[Target]) -> TargetClass {
    let ground = targets.contains(&Target::Ground);
    let air = targets.contains(&Target::Air);
    match (ground, air) {
        (true, true) => TargetClass::Both,
        (true, false) => TargetClass::Ground,
        (false, true) => TargetClass::Air,
        (false, false) => TargetClass::Other,
    }
}

/// One labeled, pre-formatted secondary stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: String,
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn bonus_percent(value: f64) -> String {
    format!("+{:.0}%", value * 100.0)
}

fn seconds(value: f64) -> String {
    format!("{value}s")
}

/// Labeled display entries for every present secondary stat, in a fixed
/// order.
///
/// Fractional control effects and support bonuses are rendered as
/// percentages, durations with a seconds suffix, everything else as the
/// bare number. The free-form `note` field is not a stat and is left to
/// the shell.
///
/// # Examples
///
/// ```rust
/// use towergauge::{display, AdditionalStats};
///
/// let stats = AdditionalStats {
///     slow_effect: Some(0.4),
///     stun_duration: Some(1.5),
///     ..AdditionalStats::default()
/// };
///
/// let entries = display::stat_entries(&stats);
/// assert_eq!(entries[0].label, "Slow");
/// assert_eq!(entries[0].value, "40%");
/// assert_eq!(entries[1].value, "1.5s");
/// ```
pub fn stat_entries(stats: &AdditionalStats) -> Vec<StatEntry> {
    let mut entries = Vec::new();
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            entries.push(StatEntry { label, value });
        }
    };

    push("Unit HP", stats.unit_health.map(|v| v.to_string()));
    push("Deploy Range", stats.deploy_range.clone());
    push("Slow", stats.slow_effect.map(percent));
    push("Stun", stats.stun_duration.map(seconds));
    push(
        "Push",
        stats
            .push_strength
            .map(|v| if v < 1.0 { percent(v) } else { v.to_string() }),
    );
    push("Ignite Dmg", stats.ignite_damage.map(|v| v.to_string()));
    push("Ignite Time", stats.ignite_duration.map(seconds));
    push("Blast Dmg", stats.blast_damage.map(|v| v.to_string()));
    push("Blast Range", stats.blast_radius.map(|v| v.to_string()));
    push("Cooldown", stats.cooldown.map(seconds));
    push("Bonus Dmg", stats.bonus_damage.map(bonus_percent));
    push("Bonus HP", stats.bonus_health.map(bonus_percent));
    push("Bonus Crit", stats.bonus_crit_chance.map(bonus_percent));
    push("Bonus Push", stats.bonus_push_strength.map(bonus_percent));
    push("Burst After", stats.burst_trigger.map(|v| format!("{v} hits")));
    push("Hook Length", stats.hook_length.map(|v| v.to_string()));
    push("Hook Count", stats.hook_count.map(|v| v.to_string()));
    push("Rage Timer", stats.rage_timer.map(seconds));
    push("Rage Boost", stats.rage_boost.map(bonus_percent));

    entries
}
