//! Sorting a Shelf of Titles
//!
//! This example classifies a batch of book titles with a rule file and prints
//! the results with their audit traces.
//!
//! Key concepts:
//! - Loading and validating rules (bundled defaults or a JSON file)
//! - Classifying a batch while keeping input order
//! - Reviewing titles that reached no accept state
//! - Persisting the run as a JSON report
//!
//! Run with: cargo run --example sort_titles [rules.json] [titles.txt]
//!
//! Set `RUST_LOG=shelfsort=debug` to see every transition.

use shelfsort::engine::Engine;
use shelfsort::report::BatchReport;
use shelfsort::rules::loader;
use std::fs;

const SAMPLE_TITLES: &[&str] = &[
    "Introduction to Automata Theory",
    "Learning Python, 5th Edition",
    "A History of Rome",
    "History of Science",
    "Grimm's Fairy Tales",
    "The Joy of Cooking",
    "Introduction to Tax Law",
    "",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Shelfsort ===\n");

    let mut args = std::env::args().skip(1);

    // A rule-set failure blocks processing before any title is classified.
    let rules = match args.next() {
        Some(path) => loader::from_path(&path),
        None => loader::default_rules(),
    };
    let rules = match rules {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("Cannot load rules: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "Rules: start state '{}', {} states, {} categories\n",
        rules.start_state(),
        rules.len(),
        rules.categories().len()
    );

    let titles: Vec<String> = match args.next() {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(err) => {
                eprintln!("Cannot read titles from {path}: {err}");
                std::process::exit(1);
            }
        },
        None => SAMPLE_TITLES.iter().map(|t| t.to_string()).collect(),
    };

    let engine = Engine::new(rules);
    let report = BatchReport::run(&engine, &titles);

    for row in &report.rows {
        println!("{:<40} {}", format!("{:?}", row.title), row.category);
        println!("    {}", row.trace);
    }

    println!("\nCategory counts:");
    for (category, count) in report.category_counts() {
        println!("  {category:<20} {count}");
    }

    println!("\nNeeds review:");
    for row in report.review_queue() {
        println!("  {:?}", row.title);
    }

    match report.to_json() {
        Ok(json) => println!("\nReport {} ({} bytes as JSON)", report.id, json.len()),
        Err(err) => eprintln!("Cannot serialize report: {err}"),
    }

    println!("\n=== Example Complete ===");
}
