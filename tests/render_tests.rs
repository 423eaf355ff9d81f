use cardex::{Card, CardContext, SearchView, StatIndex, StatRecord};
use serde_json::json;

fn small_context() -> CardContext {
    let cards: Vec<Card> = serde_json::from_value(json!([
        { "name": "Knight", "type": "Troop", "elixir": 3, "rarity": "Common",
          "description": "A tough melee fighter." },
        { "name": "Zap", "type": "Spell", "elixir": 2, "rarity": "Common" }
    ]))
    .unwrap();
    let troop: Vec<StatRecord> = serde_json::from_value(json!([
        { "name": "Knight", "hitpoints": [600, 660, 726, 798, 876, 962,
          1056, 1158, 1272, 1398, 1536], "damage": [75, 82, 90, 99, 109,
          120, 132, 145, 159, 174, 192] }
    ]))
    .unwrap();
    let spell: Vec<StatRecord> = serde_json::from_value(json!([
        { "name": "Zap", "damage": [75, 82, 90, 99, 109, 120, 132, 145, 159] }
    ]))
    .unwrap();
    CardContext::new(cards, StatIndex::build([troop, spell]))
}

/// The container walks Hidden → Rendered → Rendered → Hidden as queries
/// come in; every rendered view is a full replacement.
#[test]
fn test_view_state_machine() {
    let ctx = small_context();

    let hidden = ctx.query("");
    assert_eq!(hidden, SearchView::Hidden);
    assert!(!hidden.is_visible());

    let first = ctx.query("knight");
    assert!(first.is_visible());
    assert!(first.to_string().contains("Knight"));

    // New query replaces the content; nothing from the first view leaks.
    let second = ctx.query("zap");
    assert!(second.is_visible());
    let text = second.to_string();
    assert!(text.contains("Zap"));
    assert!(!text.contains("Knight"));

    // Cleared query hides again.
    assert_eq!(ctx.query("  "), SearchView::Hidden);
}

/// A zero-match query is Rendered(Visible), not Hidden.
#[test]
fn test_zero_match_is_visible() {
    let ctx = small_context();
    let view = ctx.query("dragon");
    assert!(view.is_visible());
    assert!(view.to_string().contains("No card found for \"dragon\"."));
}

/// Troops render at level 11, spells at level 9, from the same context.
#[test]
fn test_level_labels_by_card_type() {
    let ctx = small_context();

    let knight = ctx.query("knight").to_string();
    assert!(knight.contains("HP (Lvl 11): 1536"));
    assert!(knight.contains("Damage (Lvl 11): 192"));

    let zap = ctx.query("zap").to_string();
    assert!(zap.contains("Damage (Lvl 9): 159"));
    assert!(!zap.contains("HP ("));
}

/// Entry text lists name, rarity, elixir, and description in order.
#[test]
fn test_entry_field_order() {
    let ctx = small_context();
    let text = ctx.query("knight").to_string();

    let name = text.find("Knight").unwrap();
    let rarity = text.find("Rarity: Common").unwrap();
    let elixir = text.find("Elixir Cost: 3").unwrap();
    let description = text.find("A tough melee fighter.").unwrap();
    let hp = text.find("HP (Lvl 11)").unwrap();
    assert!(name < rarity && rarity < elixir && elixir < description && description < hp);
}

/// The structured view serializes cleanly for JSON consumers.
#[test]
fn test_view_serializes_to_json() {
    let ctx = small_context();
    let value = serde_json::to_value(ctx.query("zap")).unwrap();

    let results = &value["Results"];
    assert_eq!(results["total"], 1);
    let entry = &results["entries"][0];
    assert_eq!(entry["name"], "Zap");
    assert_eq!(entry["stats"]["level"], 9);
    assert_eq!(entry["stats"]["damage"], 159);
    // Absent description is omitted, not null.
    assert!(entry.get("description").is_none());
}
