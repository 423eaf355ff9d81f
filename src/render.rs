//! Result rendering module.
//!
//! Turns matched cards into structured, serializable result records and a
//! [`SearchView`] that models the result container's state machine: hidden
//! for an empty query, otherwise rendered as either a no-match message or a
//! bounded entry list with a trailing summary. Each query produces a fresh
//! view; consumers replace their previous output wholesale, never append.

use crate::card::Card;
use crate::lookup::{
    self, LevelIndex, DAMAGE_FIELDS, DPS_FIELDS, HITPOINT_FIELDS, TOWER_DAMAGE_FIELDS,
};
use crate::stats::{StatRecord, StatValue};
use serde::Serialize;
use std::fmt;

/// Attribution note for the default data source. The original page appends
/// this after the summary; it is left out of [`SearchView::summary`] so
/// offline consumers can omit it.
pub const DATA_ATTRIBUTION: &str = "Data from RoyaleAPI static JSON.";

/// Resolved combat stats for one card at its display level.
///
/// `damage` already includes the crown-tower substitution: when no plain
/// damage field resolves but a crown-tower damage field does, that value
/// is shown as damage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsBlock {
    /// One-based in-game level the values are taken at.
    pub level: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hitpoints: Option<StatValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<StatValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dps: Option<StatValue>,
}

impl StatsBlock {
    /// Resolve the block for a record at a level.
    ///
    /// Returns `None` when no stat resolves at all, so the renderer can
    /// emit an explicit placeholder instead of an empty block.
    pub fn resolve(record: Option<&StatRecord>, level: LevelIndex) -> Option<Self> {
        let hitpoints = lookup::stat_at_level(record, HITPOINT_FIELDS, level);
        let damage = lookup::stat_at_level(record, DAMAGE_FIELDS, level)
            .or_else(|| lookup::stat_at_level(record, TOWER_DAMAGE_FIELDS, level));
        let dps = lookup::stat_at_level(record, DPS_FIELDS, level);

        if hitpoints.is_none() && damage.is_none() && dps.is_none() {
            return None;
        }
        Some(StatsBlock { level: level.display_level(), hitpoints, damage, dps })
    }
}

/// One rendered search result.
///
/// Optional catalog fields that are missing are omitted rather than shown
/// blank; `stats` is `None` when nothing resolved (rendered as an explicit
/// "no stats" line).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elixir: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsBlock>,
}

impl ResultEntry {
    /// Build the entry for a matched card and its stat record.
    pub fn build(card: &Card, record: Option<&StatRecord>) -> Self {
        ResultEntry {
            name: card.name.clone().unwrap_or_default(),
            rarity: card.rarity.clone(),
            elixir: card.elixir,
            description: card.description.clone(),
            stats: StatsBlock::resolve(record, card.level_index()),
        }
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(rarity) = &self.rarity {
            writeln!(f, "Rarity: {}", rarity)?;
        }
        if let Some(elixir) = self.elixir {
            writeln!(f, "Elixir Cost: {}", elixir)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        match &self.stats {
            Some(stats) => {
                if let Some(hp) = &stats.hitpoints {
                    writeln!(f, "HP (Lvl {}): {}", stats.level, hp)?;
                }
                if let Some(damage) = &stats.damage {
                    writeln!(f, "Damage (Lvl {}): {}", stats.level, damage)?;
                }
                if let Some(dps) = &stats.dps {
                    writeln!(f, "DPS (Lvl {}): {}", stats.level, dps)?;
                }
            }
            None => writeln!(f, "No in-game HP/Damage/DPS available for this card.")?,
        }
        Ok(())
    }
}

/// State of the result container after a query.
///
/// The only states are `Hidden` (empty query) and the two rendered forms;
/// a new query always replaces the previous view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchView {
    /// Empty query: the container is hidden.
    Hidden,

    /// No catalog card matched; carries the raw input text for the
    /// message.
    NoMatch { query: String },

    /// Matched entries, capped at [`RESULT_LIMIT`](crate::search::RESULT_LIMIT),
    /// plus the true total.
    Results { entries: Vec<ResultEntry>, total: usize },
}

impl SearchView {
    /// Whether the result container is shown. Only the empty-query state
    /// hides it; a zero-match query still renders its message.
    pub fn is_visible(&self) -> bool {
        !matches!(self, SearchView::Hidden)
    }

    /// Number of entries actually rendered.
    pub fn shown(&self) -> usize {
        match self {
            SearchView::Results { entries, .. } => entries.len(),
            _ => 0,
        }
    }

    /// The trailing summary line, present only for the results state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardex::SearchView;
    ///
    /// let view = SearchView::Results { entries: vec![], total: 15 };
    /// assert_eq!(view.summary().unwrap(), "Showing 0 of 15 match(es).");
    /// ```
    pub fn summary(&self) -> Option<String> {
        match self {
            SearchView::Results { entries, total } => {
                Some(format!("Showing {} of {} match(es).", entries.len(), total))
            }
            _ => None,
        }
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchView::Hidden => Ok(()),
            SearchView::NoMatch { query } => writeln!(f, "No card found for \"{}\".", query),
            SearchView::Results { entries, .. } => {
                for entry in entries {
                    write!(f, "{}", entry)?;
                    writeln!(f)?;
                }
                // summary() is always Some for this variant
                if let Some(summary) = self.summary() {
                    writeln!(f, "{}", summary)?;
                }
                Ok(())
            }
        }
    }
}
