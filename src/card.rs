//! Catalog card module.
//!
//! The catalog document carries one `Card` per playable card: display name,
//! rarity, elixir cost, flavor text, and a type string used to classify
//! spells. Stats live in separate per-category documents (see
//! [`StatRecord`](crate::StatRecord)).

use crate::card_key::{CardKey, KeyFields};
use crate::lookup::LevelIndex;
use serde::{Deserialize, Serialize};

/// One entry of the base card catalog.
///
/// Every field is optional: the upstream catalog mixes real cards with
/// partially filled placeholder entries, and missing fields are simply
/// omitted from the rendered output rather than treated as errors.
///
/// # Examples
///
/// ```rust
/// use cardex::Card;
///
/// let card: Card = serde_json::from_value(serde_json::json!({
///     "name": "Fireball",
///     "type": "Spell",
///     "elixir": 4,
///     "rarity": "Rare"
/// })).unwrap();
///
/// assert!(card.is_spell());
/// assert_eq!(card.elixir, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Rarity label ("Common", "Rare", ...).
    #[serde(default)]
    pub rarity: Option<String>,

    /// Elixir cost.
    #[serde(default)]
    pub elixir: Option<i64>,

    /// Flavor / description text.
    #[serde(default)]
    pub description: Option<String>,

    /// Card type ("Troop", "Spell", "Building", ...).
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,

    /// Stable identifier, when the document provides one.
    #[serde(default)]
    pub key: Option<String>,

    /// Alternate identifier used by some document revisions.
    #[serde(default, rename = "idName")]
    pub id_name: Option<String>,
}

impl Card {
    /// Spell classification: the `type` field's lowercase text contains
    /// `"spell"`. Cards without a type are not spells.
    pub fn is_spell(&self) -> bool {
        self.card_type
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains("spell"))
    }

    /// The level index at which this card's stats are displayed.
    ///
    /// Spells cap at in-game level 9, everything else at level 11, so the
    /// representative value differs by type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardex::{Card, LevelIndex};
    ///
    /// let spell: Card = serde_json::from_value(
    ///     serde_json::json!({ "name": "Zap", "type": "Spell" })).unwrap();
    /// assert_eq!(spell.level_index(), LevelIndex::SPELL);
    ///
    /// let troop: Card = serde_json::from_value(
    ///     serde_json::json!({ "name": "Knight", "type": "Troop" })).unwrap();
    /// assert_eq!(troop.level_index(), LevelIndex::STANDARD);
    /// ```
    pub fn level_index(&self) -> LevelIndex {
        if self.is_spell() {
            LevelIndex::SPELL
        } else {
            LevelIndex::STANDARD
        }
    }

    /// Normalized identifier for this card.
    pub fn card_key(&self) -> CardKey {
        CardKey::of(self)
    }
}

impl KeyFields for Card {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn id_name(&self) -> Option<&str> {
        self.id_name.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
