//! Card identifier module.
//!
//! Provides the `CardKey` type, the canonical lowercase identifier used to
//! correlate a catalog entry with its stat record. Uses `Arc<str>` for
//! cheap cloning and fast comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Source fields a card identifier can be derived from.
///
/// The upstream documents are inconsistent: some records carry `key`, some
/// `idName`, some only `name`. Both [`Card`](crate::Card) and
/// [`StatRecord`](crate::StatRecord) implement this so one normalization
/// rule covers every document.
pub trait KeyFields {
    /// The record's `key` field, if present.
    fn key(&self) -> Option<&str>;

    /// The record's `idName` field, if present.
    fn id_name(&self) -> Option<&str>;

    /// The record's `name` field, if present.
    fn name(&self) -> Option<&str>;
}

/// Canonical lowercase identifier for a card.
///
/// Derived deterministically from a record's identifying fields, in
/// preference order `key`, `idName`, `name`. When only `name` is available
/// it is slugged: every maximal run of non-alphanumeric characters becomes
/// a single hyphen.
///
/// # Examples
///
/// ```rust
/// use cardex::CardKey;
///
/// assert_eq!(CardKey::slug("Mini P.E.K.K.A").as_str(), "mini-p-e-k-k-a");
///
/// let a = CardKey::slug("Fireball");
/// let b = CardKey::slug("fireball");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardKey(Arc<str>);

impl Serialize for CardKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CardKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CardKey(Arc::from(s)))
    }
}

impl CardKey {
    /// Derive the key for any record exposing [`KeyFields`].
    ///
    /// Empty string fields count as absent. If no identifying field is
    /// present the result is the empty key (see [`CardKey::is_empty`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardex::{Card, CardKey};
    ///
    /// let card: Card = serde_json::from_value(serde_json::json!({
    ///     "name": "Mini P.E.K.K.A", "key": "MiniPekka"
    /// })).unwrap();
    ///
    /// // `key` wins over `name`.
    /// assert_eq!(CardKey::of(&card).as_str(), "minipekka");
    /// ```
    pub fn of<T: KeyFields>(fields: &T) -> Self {
        if let Some(key) = fields.key().filter(|s| !s.is_empty()) {
            return CardKey(Arc::from(key.to_lowercase()));
        }
        if let Some(id_name) = fields.id_name().filter(|s| !s.is_empty()) {
            return CardKey(Arc::from(id_name.to_lowercase()));
        }
        if let Some(name) = fields.name().filter(|s| !s.is_empty()) {
            return CardKey::slug(name);
        }
        CardKey(Arc::from(""))
    }

    /// Build a key by slugging a display name.
    ///
    /// Lowercases, then collapses each maximal run of non-alphanumeric
    /// characters (leading and trailing runs included) to one hyphen.
    pub fn slug(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let mut out = String::with_capacity(lowered.len());
        let mut pending_run = false;
        for c in lowered.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_run {
                    out.push('-');
                    pending_run = false;
                }
                out.push(c);
            } else {
                pending_run = true;
            }
        }
        if pending_run {
            out.push('-');
        }
        CardKey(Arc::from(out))
    }

    /// Get the string representation of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no identifying field was available.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive-by-construction substring check used by the
    /// matcher; `needle` is expected to be lowercase already.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fields<'a> {
        key: Option<&'a str>,
        id_name: Option<&'a str>,
        name: Option<&'a str>,
    }

    impl KeyFields for Fields<'_> {
        fn key(&self) -> Option<&str> {
            self.key
        }
        fn id_name(&self) -> Option<&str> {
            self.id_name
        }
        fn name(&self) -> Option<&str> {
            self.name
        }
    }

    #[test]
    fn test_key_field_wins() {
        let f = Fields { key: Some("GoblinBarrel"), id_name: Some("Other"), name: Some("X") };
        assert_eq!(CardKey::of(&f).as_str(), "goblinbarrel");
    }

    #[test]
    fn test_id_name_used_when_key_absent() {
        let f = Fields { key: None, id_name: Some("IceSpirits"), name: Some("Ice Spirit") };
        assert_eq!(CardKey::of(&f).as_str(), "icespirits");
    }

    #[test]
    fn test_name_is_slugged() {
        let f = Fields { key: None, id_name: None, name: Some("Mini P.E.K.K.A") };
        assert_eq!(CardKey::of(&f).as_str(), "mini-p-e-k-k-a");
    }

    #[test]
    fn test_empty_fields_count_as_absent() {
        let f = Fields { key: Some(""), id_name: Some(""), name: Some("Royal Giant") };
        assert_eq!(CardKey::of(&f).as_str(), "royal-giant");
    }

    #[test]
    fn test_no_fields_gives_empty_key() {
        let f = Fields { key: None, id_name: None, name: None };
        assert!(CardKey::of(&f).is_empty());
    }

    #[test]
    fn test_slug_collapses_runs() {
        assert_eq!(CardKey::slug("X-Bow").as_str(), "x-bow");
        assert_eq!(CardKey::slug("  Knight!").as_str(), "-knight-");
        assert_eq!(CardKey::slug("Three   Musketeers").as_str(), "three-musketeers");
    }

    #[test]
    fn test_same_input_same_key() {
        let f = Fields { key: None, id_name: None, name: Some("P.E.K.K.A") };
        assert_eq!(CardKey::of(&f), CardKey::of(&f));
    }
}
