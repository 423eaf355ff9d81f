//! Data loader module.
//!
//! Fetches the card catalog and the three stat-category documents, issues
//! the four GETs together and joins them all before building the
//! [`CardContext`]. Any single failure aborts the whole load; there are no
//! retries and no partial catalogs.

use crate::card::Card;
use crate::context::CardContext;
use crate::error::CardError;
use crate::stats::{StatIndex, StatRecord};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use std::thread::{self, ScopedJoinHandle};
use std::time::Duration;

const AGENT: &str = "cardex/0.1 (+reqwest)";
const TIMEOUT: Duration = Duration::from_secs(30);

/// The four document endpoints.
///
/// `Default` carries the RoyaleAPI static JSON URLs the library was built
/// against; tests and mirrors can substitute their own.
///
/// # Examples
///
/// ```rust
/// use cardex::DataUrls;
///
/// let urls = DataUrls::default();
/// assert!(urls.cards.ends_with("cards.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrls {
    /// Base card catalog.
    pub cards: String,
    /// Troop stat document.
    pub troop: String,
    /// Spell stat document.
    pub spell: String,
    /// Building stat document.
    pub building: String,
}

impl Default for DataUrls {
    fn default() -> Self {
        let base = "https://royaleapi.github.io/cr-api-data/json";
        Self {
            cards: format!("{base}/cards.json"),
            troop: format!("{base}/cards_stats_troop.json"),
            spell: format!("{base}/cards_stats_spell.json"),
            building: format!("{base}/cards_stats_building.json"),
        }
    }
}

/// Fetch all four documents and build the search context.
///
/// The requests run concurrently on scoped threads and are all joined
/// before anything is built. The first error wins and the load fails as a
/// whole. Stat documents merge in the order troop, spell, building (last
/// write wins on key collision).
///
/// # Errors
///
/// Any transport failure, non-2xx status, or undecodable body returns the
/// corresponding [`CardError`] variant.
pub fn load_context(urls: &DataUrls) -> Result<CardContext, CardError> {
    let client = http_client()?;

    let (cards, troop, spell, building) = thread::scope(|s| {
        let cards = s.spawn(|| fetch_json::<Card>(&client, &urls.cards));
        let troop = s.spawn(|| fetch_json::<StatRecord>(&client, &urls.troop));
        let spell = s.spawn(|| fetch_json::<StatRecord>(&client, &urls.spell));
        let building = s.spawn(|| fetch_json::<StatRecord>(&client, &urls.building));
        (join(cards), join(troop), join(spell), join(building))
    });

    let cards = cards?;
    let stats = StatIndex::build([troop?, spell?, building?]);
    log::info!("loaded {} cards, {} stat records", cards.len(), stats.len());
    Ok(CardContext::new(cards, stats))
}

/// [`load_context`] with the default endpoints.
pub fn load_default() -> Result<CardContext, CardError> {
    load_context(&DataUrls::default())
}

fn http_client() -> Result<Client, CardError> {
    Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(CardError::Client)
}

fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<Vec<T>, CardError> {
    log::debug!("fetching {url}");
    let response = client
        .get(url)
        .header(USER_AGENT, AGENT)
        .send()
        .map_err(|e| CardError::Fetch { url: url.to_string(), source: Box::new(e) })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CardError::Status { status, url: url.to_string() });
    }

    response
        .json()
        .map_err(|e| CardError::Decode { url: url.to_string(), source: Box::new(e) })
}

fn join<T>(handle: ScopedJoinHandle<'_, Result<T, CardError>>) -> Result<T, CardError> {
    match handle.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
