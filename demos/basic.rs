//! Basic example: offline search over embedded fixture data
//!
//! This example demonstrates:
//! - Building a `CardContext` without the network loader
//! - Querying and inspecting the structured view
//! - Rendering the plain-text form

use cardex::{Card, CardContext, SearchView, StatIndex, StatRecord};
use serde_json::json;

fn main() {
    // A tiny catalog: two real cards and one placeholder without stats.
    let cards: Vec<Card> = serde_json::from_value(json!([
        { "name": "Fireball", "type": "Spell", "elixir": 4, "rarity": "Rare",
          "description": "Annnnd... Fireball." },
        { "name": "Fire Spirit", "type": "Troop", "elixir": 1, "rarity": "Common" },
        { "name": "Fire Test Card", "type": "Troop" }
    ]))
    .unwrap();

    let troop: Vec<StatRecord> = serde_json::from_value(json!([
        { "name": "Fire Spirit", "hitpoints": [90, 99, 109, 120, 132, 145,
          159, 174, 192, 211, 230], "damage": [81, 89, 98, 108, 118, 130,
          143, 157, 172, 189, 207] }
    ]))
    .unwrap();
    let spell: Vec<StatRecord> = serde_json::from_value(json!([
        { "name": "Fireball",
          "damage": [325, 357, 393, 432, 475, 522, 574, 630, 689],
          "crown_tower_damage": [91, 100, 110, 121, 133, 147, 161, 177, 193] }
    ]))
    .unwrap();

    println!("Building context from fixture documents...");
    let context = CardContext::new(cards, StatIndex::build([troop, spell]));
    println!(
        "  {} cards, {} stat records\n",
        context.cards().len(),
        context.stats().len()
    );

    // The placeholder matches "fire" by name but has no stat record, so
    // only two results come back.
    let view = context.query("fire");
    match &view {
        SearchView::Results { entries, total } => {
            println!("Query \"fire\": {} match(es), {} shown", total, entries.len());
        }
        other => println!("Unexpected view: {:?}", other),
    }

    println!("\n=== Rendered Output ===");
    print!("{}", view);

    // An empty query hides the container entirely.
    assert_eq!(context.query("  "), SearchView::Hidden);
    println!("\n(empty query renders nothing and hides the container)");
}
