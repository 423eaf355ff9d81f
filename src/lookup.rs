//! Stat lookup module.
//!
//! The three stat documents disagree on field names and shapes for
//! conceptually identical stats, so each semantic stat is described by an
//! ordered alias chain evaluated in sequence. The first present, non-null
//! field wins; per-level arrays are indexed with a last-element fallback.

use crate::stats::{StatRecord, StatValue};
use serde::Serialize;
use serde_json::Value;

/// Zero-based position into a per-level stat sequence.
///
/// Display levels are one-based, so index 8 renders as "Lvl 9".
///
/// # Examples
///
/// ```rust
/// use cardex::LevelIndex;
///
/// assert_eq!(LevelIndex::SPELL.display_level(), 9);
/// assert_eq!(LevelIndex::STANDARD.display_level(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelIndex(usize);

impl LevelIndex {
    /// Spells cap at in-game level 9.
    pub const SPELL: LevelIndex = LevelIndex(8);

    /// Troops and buildings display at in-game level 11.
    pub const STANDARD: LevelIndex = LevelIndex(10);

    /// An arbitrary level index.
    pub fn new(index: usize) -> Self {
        LevelIndex(index)
    }

    /// The array position this index selects.
    pub fn index(&self) -> usize {
        self.0
    }

    /// The one-based in-game level this index corresponds to.
    pub fn display_level(&self) -> usize {
        self.0 + 1
    }
}

/// Field aliases for hit points across document revisions.
pub const HITPOINT_FIELDS: &[&str] =
    &["hitpoints", "shieldHitpoints", "spawnHealth", "hit_points"];

/// Field aliases for per-hit damage.
pub const DAMAGE_FIELDS: &[&str] =
    &["damage", "damage_per_hit", "damagePerHit", "area_damage", "areaDamage"];

/// Field aliases for damage per second.
pub const DPS_FIELDS: &[&str] = &["dps", "damagePerSecond", "damage_per_second"];

/// Field aliases for crown-tower damage (spells report this instead of
/// plain damage).
pub const TOWER_DAMAGE_FIELDS: &[&str] =
    &["crown_tower_damage", "crownTowerDamage", "tower_damage"];

/// Resolve a stat through an alias chain at a given level.
///
/// Candidates are tried in order; a field that is absent or JSON `null`
/// falls through to the next candidate. Once a candidate is chosen the
/// chain stops:
///
/// - an array yields its element at the level index, falling back to its
///   last element when the index is out of range or the element is null;
/// - a scalar is returned directly.
///
/// Returns `None` when the record is absent, no candidate is present, or
/// the chosen value holds nothing usable.
///
/// # Examples
///
/// ```rust
/// use cardex::{lookup, LevelIndex, StatRecord, StatValue};
///
/// let record: StatRecord = serde_json::from_value(serde_json::json!({
///     "name": "Knight",
///     "hit_points": [600, 660, 726]
/// })).unwrap();
///
/// // "hitpoints" is absent; the "hit_points" alias resolves, and the
/// // out-of-range standard level falls back to the last element.
/// let hp = lookup::stat_at_level(
///     Some(&record), lookup::HITPOINT_FIELDS, LevelIndex::STANDARD);
/// assert_eq!(hp, Some(StatValue::Int(726)));
/// ```
pub fn stat_at_level(
    record: Option<&StatRecord>,
    candidates: &[&str],
    level: LevelIndex,
) -> Option<StatValue> {
    let record = record?;
    for field in candidates {
        let value = match record.get(field) {
            Some(v) if !v.is_null() => v,
            _ => continue,
        };
        return match value {
            Value::Array(seq) => seq
                .get(level.index())
                .filter(|v| !v.is_null())
                .or_else(|| seq.last().filter(|v| !v.is_null()))
                .and_then(StatValue::from_json),
            scalar => StatValue::from_json(scalar),
        };
    }
    None
}
