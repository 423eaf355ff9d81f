//! # cardex - Card Catalog Search with Per-Level Stat Lookup
//!
//! A search core for Clash Royale card data that provides:
//! - **Schema-tolerant** stat lookup (alias chains absorb field-name drift)
//! - **Deterministic** identifier normalization across data files
//! - **Immutable-after-load** context (load once, query forever)
//! - **Bounded, replaceable** result rendering
//!
//! ## Core Concepts
//!
//! ### Query Pipeline
//!
//! Data flows through a simple pipeline:
//!
//! ```text
//! [loader] → [CardContext] → query → [SearchView]
//! ```
//!
//! 1. The **loader** fetches the catalog and three stat documents together
//!    and merges the stats into a [`StatIndex`]
//! 2. The **context** matches a query against card names and normalized
//!    keys, keeping only cards that have a real stat record
//! 3. The **view** carries at most ten rendered entries plus the true
//!    match total, or an explicit hidden / no-match state
//!
//! ### Key Features
//!
//! - **Normalized Keys**: `key`, `idName`, or a slug of `name` correlate
//!   catalog entries with stat records across inconsistent documents
//! - **Alias Chains**: each semantic stat (HP, damage, DPS) is resolved
//!   through an ordered list of candidate field names
//! - **Level Selection**: spells display at in-game level 9, everything
//!   else at level 11
//! - **All-or-Nothing Load**: any fetch failure aborts setup; no partial
//!   catalogs, no retries
//!
//! ## Example
//!
//! ```rust
//! use cardex::{Card, CardContext, StatIndex, StatRecord};
//! use serde_json::json;
//!
//! let cards: Vec<Card> = serde_json::from_value(json!([
//!     { "name": "Fireball", "type": "Spell", "elixir": 4, "rarity": "Rare" }
//! ])).unwrap();
//! let spells: Vec<StatRecord> = serde_json::from_value(json!([
//!     { "name": "Fireball",
//!       "damage": [325, 357, 393, 432, 475, 522, 574, 630, 689] }
//! ])).unwrap();
//!
//! let context = CardContext::new(cards, StatIndex::build([spells]));
//!
//! let view = context.query("fire");
//! assert_eq!(view.shown(), 1);
//! // Spells display at level 9, array index 8.
//! assert!(view.to_string().contains("Damage (Lvl 9): 689"));
//! ```
//!
//! ## Modules
//!
//! - [`card`] - Catalog card records and level selection
//! - [`card_key`] - Normalized card identifiers
//! - [`stats`] - Stat records, values, and the merged index
//! - [`lookup`] - Alias-chain stat lookup
//! - [`search`] - Query matcher
//! - [`render`] - Result entries and the view state machine
//! - [`context`] - Immutable search context
//! - [`loader`] - Document fetching
//! - [`error`] - Error types

pub mod card;
pub mod card_key;
pub mod context;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod render;
pub mod search;
pub mod stats;

// Re-export main types for convenience
pub use card::Card;
pub use card_key::{CardKey, KeyFields};
pub use context::CardContext;
pub use error::CardError;
pub use loader::{load_context, load_default, DataUrls};
pub use lookup::LevelIndex;
pub use render::{ResultEntry, SearchView, StatsBlock, DATA_ATTRIBUTION};
pub use search::RESULT_LIMIT;
pub use stats::{StatIndex, StatRecord, StatValue};
