//! Live example: the load-once, query-per-line flow of the website
//!
//! Fetches the real RoyaleAPI static JSON documents, then reads queries
//! from stdin and prints the rendered view for each, exactly as the search
//! box replaces its result container per keypress.

use cardex::{load_default, DATA_ATTRIBUTION};
use std::io::{self, BufRead, Write};

fn main() {
    println!("Loading card data...");
    let context = match load_default() {
        Ok(context) => context,
        Err(err) => {
            // Load failures are terminal; the page equivalent shows a
            // static error message and never attaches the handler.
            eprintln!("Error loading card data: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} cards, {} stat records. Type a card name (empty line to quit).",
        context.cards().len(),
        context.stats().len()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }
        if line.trim().is_empty() {
            break;
        }

        let view = context.query(&line);
        print!("{}", view);
        if view.shown() > 0 {
            println!("{DATA_ATTRIBUTION}");
        }
    }
}
