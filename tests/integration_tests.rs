use cardex::{Card, CardContext, CardKey, LevelIndex, SearchView, StatIndex, StatRecord};
use serde_json::json;

fn cards(value: serde_json::Value) -> Vec<Card> {
    serde_json::from_value(value).unwrap()
}

fn records(value: serde_json::Value) -> Vec<StatRecord> {
    serde_json::from_value(value).unwrap()
}

/// Build a context the way the loader does: catalog plus the three stat
/// documents merged in order troop, spell, building.
fn context(
    catalog: serde_json::Value,
    troop: serde_json::Value,
    spell: serde_json::Value,
    building: serde_json::Value,
) -> CardContext {
    CardContext::new(
        cards(catalog),
        StatIndex::build([records(troop), records(spell), records(building)]),
    )
}

/// A card with a `key` normalizes to that key lowercased, whatever the
/// name says.
#[test]
fn test_key_field_dominates_normalization() {
    let card: Card = serde_json::from_value(json!({
        "name": "Totally Different Name",
        "key": "GoblinBarrel"
    }))
    .unwrap();
    assert_eq!(card.card_key().as_str(), "goblinbarrel");
}

/// Without `key` and `idName`, the name is slugged: non-alphanumeric runs
/// collapse to single hyphens.
#[test]
fn test_name_slug_normalization() {
    let card: Card = serde_json::from_value(json!({ "name": "Mini P.E.K.K.A" })).unwrap();
    assert_eq!(card.card_key().as_str(), "mini-p-e-k-k-a");
}

/// A per-level array indexed past its end yields the last element.
#[test]
fn test_out_of_range_level_clamps_to_last() {
    let record: StatRecord =
        serde_json::from_value(json!({ "name": "Knight", "hitpoints": [600, 660, 726] }))
            .unwrap();
    let value = cardex::lookup::stat_at_level(
        Some(&record),
        cardex::lookup::HITPOINT_FIELDS,
        LevelIndex::STANDARD,
    );
    assert_eq!(value.unwrap().as_i64(), Some(726));
}

/// A catalog card with no stat record never appears in results, for any
/// query that would otherwise match it.
#[test]
fn test_catalog_stat_intersection() {
    let ctx = context(
        json!([
            { "name": "Knight", "type": "Troop" },
            { "name": "Knight Placeholder", "type": "Troop" }
        ]),
        json!([{ "name": "Knight", "hitpoints": [600] }]),
        json!([]),
        json!([]),
    );

    for query in ["knight", "placeholder", "knight placeholder"] {
        let view = ctx.query(query);
        match view {
            SearchView::Results { ref entries, .. } => {
                assert!(entries.iter().all(|e| e.name == "Knight"), "query {:?}", query);
            }
            SearchView::NoMatch { .. } => {}
            SearchView::Hidden => panic!("non-empty query must not hide"),
        }
    }
}

/// End-to-end: Fireball is a spell, so its damage is read at array
/// index 8 and labeled level 9.
#[test]
fn test_fireball_end_to_end() {
    let ctx = context(
        json!([{ "name": "Fireball", "type": "Spell", "elixir": 4, "rarity": "Rare" }]),
        json!([]),
        json!([{
            "name": "Fireball",
            "damage": [325, 357, 393, 432, 475, 522, 574, 630, 689]
        }]),
        json!([]),
    );

    let view = ctx.query("fire");
    match &view {
        SearchView::Results { entries, total } => {
            assert_eq!(*total, 1);
            assert_eq!(entries.len(), 1);
            let entry = &entries[0];
            assert_eq!(entry.name, "Fireball");
            assert_eq!(entry.elixir, Some(4));
            assert_eq!(entry.rarity.as_deref(), Some("Rare"));
            let stats = entry.stats.as_ref().unwrap();
            assert_eq!(stats.level, 9);
            assert_eq!(stats.damage.as_ref().unwrap().as_i64(), Some(689));
        }
        other => panic!("expected Results, got {:?}", other),
    }

    let text = view.to_string();
    assert!(text.contains("Fireball"));
    assert!(text.contains("Rarity: Rare"));
    assert!(text.contains("Elixir Cost: 4"));
    assert!(text.contains("Damage (Lvl 9): 689"));
}

/// End-to-end: fifteen matches render ten entries and an exact summary.
#[test]
fn test_fifteen_matches_render_ten() {
    let catalog: Vec<serde_json::Value> = (1..=15)
        .map(|i| json!({ "name": format!("Skeleton {i}"), "type": "Troop" }))
        .collect();
    let troop: Vec<serde_json::Value> = (1..=15)
        .map(|i| json!({ "name": format!("Skeleton {i}"), "hitpoints": [32] }))
        .collect();
    let ctx = context(json!(catalog), json!(troop), json!([]), json!([]));

    let view = ctx.query("skeleton");
    assert_eq!(view.shown(), 10);
    assert_eq!(view.summary().unwrap(), "Showing 10 of 15 match(es).");
    assert!(view.to_string().trim_end().ends_with("Showing 10 of 15 match(es)."));

    // First ten in catalog order.
    if let SearchView::Results { entries, .. } = view {
        assert_eq!(entries[0].name, "Skeleton 1");
        assert_eq!(entries[9].name, "Skeleton 10");
    }
}

/// End-to-end: zero matches still shows the container, with a message
/// naming the literal query text.
#[test]
fn test_zero_matches_shows_message() {
    let ctx = context(
        json!([{ "name": "Knight" }]),
        json!([{ "name": "Knight" }]),
        json!([]),
        json!([]),
    );

    let view = ctx.query("Phoenix");
    assert!(view.is_visible());
    assert_eq!(view.to_string(), "No card found for \"Phoenix\".\n");
}

/// Empty-after-trim input hides the container instead of matching.
#[test]
fn test_empty_query_hides() {
    let ctx = context(
        json!([{ "name": "Knight" }]),
        json!([{ "name": "Knight" }]),
        json!([]),
        json!([]),
    );

    assert_eq!(ctx.query("   "), SearchView::Hidden);
    assert!(!ctx.query("").is_visible());
}

/// Stat documents merge last-write-wins in troop, spell, building order.
#[test]
fn test_merge_order_last_write_wins() {
    let ctx = context(
        json!([{ "name": "Elixir Golem", "type": "Troop" }]),
        json!([{ "name": "Elixir Golem", "hitpoints": [700] }]),
        json!([]),
        json!([{ "name": "Elixir Golem", "hitpoints": [740] }]),
    );

    let key = CardKey::slug("Elixir Golem");
    let record = ctx.stats().get(&key).unwrap();
    assert_eq!(record.get("hitpoints"), Some(&json!([740])));
}

/// A spell whose damage fields are absent falls back to crown-tower
/// damage, labeled as damage.
#[test]
fn test_tower_damage_substitution_end_to_end() {
    let ctx = context(
        json!([{ "name": "The Log", "type": "Spell", "elixir": 2 }]),
        json!([]),
        json!([{
            "name": "The Log",
            "crown_tower_damage": [60, 66, 72, 79, 87, 95, 105, 115, 126]
        }]),
        json!([]),
    );

    let text = ctx.query("log").to_string();
    assert!(text.contains("Damage (Lvl 9): 126"));
}

/// A matched card with no resolvable stat values gets the explicit
/// placeholder, not an empty block.
#[test]
fn test_no_stats_placeholder() {
    let ctx = context(
        json!([{ "name": "Mirror", "type": "Spell" }]),
        json!([]),
        json!([{ "name": "Mirror", "description": "Mirrors your last card." }]),
        json!([]),
    );

    let text = ctx.query("mirror").to_string();
    assert!(text.contains("No in-game HP/Damage/DPS available for this card."));
}
