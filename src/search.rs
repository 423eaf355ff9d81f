//! Query matcher module.
//!
//! Matches a trimmed lowercase query against the catalog: a card matches
//! when its name or normalized key contains the query as a substring, and
//! its key is present in the stat index. The membership check filters out
//! placeholder catalog entries that have no real stat record.

use crate::card::Card;
use crate::stats::StatIndex;

/// Maximum number of entries the renderer shows per query.
pub const RESULT_LIMIT: usize = 10;

/// Find all catalog cards matching `needle`, in catalog order.
///
/// `needle` must already be trimmed and lowercased (the context entry
/// point does this); the full match list is returned and the display cap
/// is applied later so the true total can be reported.
///
/// # Examples
///
/// ```rust
/// use cardex::{search, Card, StatIndex, StatRecord};
///
/// let cards: Vec<Card> = serde_json::from_value(serde_json::json!([
///     { "name": "Fireball", "type": "Spell" },
///     { "name": "Fire Spirit", "type": "Troop" }
/// ])).unwrap();
/// let spells: Vec<StatRecord> = serde_json::from_value(serde_json::json!([
///     { "name": "Fireball", "damage": [325] }
/// ])).unwrap();
/// let index = StatIndex::build([spells]);
///
/// // Fire Spirit matches the text but has no stat record.
/// let matches = search::find_matches(&cards, &index, "fire");
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name.as_deref(), Some("Fireball"));
/// ```
pub fn find_matches<'a>(cards: &'a [Card], index: &StatIndex, needle: &str) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|card| {
            let key = card.card_key();
            let name_match = card
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(needle));
            let key_match = !key.is_empty() && key.contains(needle);
            (name_match || key_match) && index.contains(&key)
        })
        .collect()
}
