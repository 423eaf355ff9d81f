//! Stat documents module.
//!
//! The three stat-category documents (troop, spell, building) are merged
//! into a single [`StatIndex`] keyed by normalized card identifier. Their
//! schemas drift between revisions, so a [`StatRecord`] keeps the raw JSON
//! object and typed access happens at lookup time (see [`crate::lookup`]).

use crate::card_key::{CardKey, KeyFields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One record of a stat-category document.
///
/// Field names and shapes vary across documents (`hitpoints` vs
/// `hit_points`, scalars vs per-level arrays), so the record is an opaque
/// JSON object queried through alias chains rather than a fixed struct.
///
/// # Examples
///
/// ```rust
/// use cardex::StatRecord;
///
/// let record: StatRecord = serde_json::from_value(serde_json::json!({
///     "name": "Knight",
///     "hitpoints": [600, 660, 726]
/// })).unwrap();
///
/// assert!(record.get("hitpoints").is_some());
/// assert!(record.get("shield").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl StatRecord {
    /// Get a raw field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Normalized identifier for this record.
    pub fn card_key(&self) -> CardKey {
        CardKey::of(self)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

impl KeyFields for StatRecord {
    fn key(&self) -> Option<&str> {
        self.str_field("key")
    }

    fn id_name(&self) -> Option<&str> {
        self.str_field("idName")
    }

    fn name(&self) -> Option<&str> {
        self.str_field("name")
    }
}

/// A scalar stat value extracted from a record.
///
/// JSON `null`, objects, and nested arrays never become values; the lookup
/// reports them as absent instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl StatValue {
    /// Extract a scalar from a JSON value, if it is one.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(StatValue::Int)
                .or_else(|| n.as_f64().map(StatValue::Float)),
            Value::String(s) => Some(StatValue::Text(s.clone())),
            Value::Bool(b) => Some(StatValue::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Integer view, when the value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{}", n),
            StatValue::Float(n) => write!(f, "{}", n),
            StatValue::Text(s) => write!(f, "{}", s),
            StatValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Merged lookup from normalized card key to stat record.
///
/// Built once from the stat-category documents in a fixed order; a later
/// document overwrites an earlier one on key collision. Records without
/// any identifying field are skipped.
///
/// # Examples
///
/// ```rust
/// use cardex::{CardKey, StatIndex, StatRecord};
///
/// let troops: Vec<StatRecord> = serde_json::from_value(serde_json::json!([
///     { "name": "Knight", "hitpoints": [600, 660] }
/// ])).unwrap();
///
/// let index = StatIndex::build([troops]);
/// assert!(index.contains(&CardKey::slug("Knight")));
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatIndex {
    records: HashMap<CardKey, StatRecord>,
}

impl StatIndex {
    /// Merge stat documents into an index, in iteration order.
    ///
    /// Last write wins on key collision, so callers pass the documents in
    /// the canonical order troop, spell, building.
    pub fn build<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Vec<StatRecord>>,
    {
        let mut records = HashMap::new();
        for document in documents {
            for record in document {
                let key = record.card_key();
                if key.is_empty() {
                    log::warn!("skipping stat record without an identifying field");
                    continue;
                }
                records.insert(key, record);
            }
        }
        Self { records }
    }

    /// Get the stat record for a key.
    pub fn get(&self, key: &CardKey) -> Option<&StatRecord> {
        self.records.get(key)
    }

    /// Membership check used by the matcher to drop catalog entries that
    /// have no real stat record (placeholder and test cards).
    pub fn contains(&self, key: &CardKey) -> bool {
        self.records.contains_key(key)
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no document contributed any record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
