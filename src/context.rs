//! Search context module.
//!
//! The `CardContext` owns the loaded catalog and merged stat index. It is
//! constructed once (by the loader, or directly from fixture data) and
//! never mutated afterward, so queries need no synchronization and the
//! matcher has no hidden global state.

use crate::card_key::CardKey;
use crate::render::{ResultEntry, SearchView};
use crate::search::{self, RESULT_LIMIT};
use crate::card::Card;
use crate::stats::StatIndex;

/// Immutable catalog + stat index, the entry point for queries.
///
/// # Examples
///
/// ```rust
/// use cardex::{Card, CardContext, StatIndex, StatRecord};
/// use serde_json::json;
///
/// let cards: Vec<Card> = serde_json::from_value(json!([
///     { "name": "Fireball", "type": "Spell", "elixir": 4, "rarity": "Rare" }
/// ])).unwrap();
/// let spells: Vec<StatRecord> = serde_json::from_value(json!([
///     { "name": "Fireball", "damage": [325, 357, 393, 432, 475, 522, 574, 630, 689] }
/// ])).unwrap();
///
/// let context = CardContext::new(cards, StatIndex::build([spells]));
/// let view = context.query("fire");
/// assert!(view.is_visible());
/// assert_eq!(view.shown(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardContext {
    cards: Vec<Card>,
    stats: StatIndex,
}

impl CardContext {
    /// Build a context from an already loaded catalog and stat index.
    pub fn new(cards: Vec<Card>, stats: StatIndex) -> Self {
        Self { cards, stats }
    }

    /// The loaded catalog, in document order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The merged stat index.
    pub fn stats(&self) -> &StatIndex {
        &self.stats
    }

    /// Answer one user query.
    ///
    /// The raw input is trimmed and lowercased before matching. An input
    /// that is empty after trimming hides the result container; a query
    /// with no matches renders a message naming the raw input; otherwise
    /// at most [`RESULT_LIMIT`] entries are rendered together with the
    /// true match total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardex::{CardContext, SearchView};
    ///
    /// let context = CardContext::default();
    /// assert_eq!(context.query("   "), SearchView::Hidden);
    /// assert!(matches!(context.query("zap"), SearchView::NoMatch { .. }));
    /// ```
    pub fn query(&self, input: &str) -> SearchView {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return SearchView::Hidden;
        }

        let matches = search::find_matches(&self.cards, &self.stats, &needle);
        if matches.is_empty() {
            return SearchView::NoMatch { query: input.to_string() };
        }

        let total = matches.len();
        let entries = matches
            .into_iter()
            .take(RESULT_LIMIT)
            .map(|card| ResultEntry::build(card, self.stats.get(&CardKey::of(card))))
            .collect();
        SearchView::Results { entries, total }
    }
}
