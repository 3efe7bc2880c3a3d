//! MVI Calculator
//!
//! This example drives a view model with a scripted key sequence.
//!
//! Key concepts:
//! - Intents are the only way to change state
//! - Every snapshot is published to bound observers
//! - Errors are values on the snapshot, never panics
//!
//! Run with: RUST_LOG=debug cargo run --example mvi_calculator

use mvi_calc::adapters::ViewModel;
use mvi_calc::core::Intent;
use tracing_subscriber::EnvFilter;

fn parse_key(key: char) -> Option<Intent> {
    match key {
        '0'..='9' => key.to_digit(10).map(|d| Intent::NumberEntered(d as u8)),
        '=' => Some(Intent::EqualsPressed),
        'C' => Some(Intent::Cleared),
        ' ' => None,
        symbol => Some(Intent::OperatorSelected(symbol)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== MVI Calculator Example ===\n");

    let mut view_model = ViewModel::new();
    view_model.subscribe_display(|text| println!("  display: {text}"));
    view_model.subscribe_error(|error| {
        if let Some(message) = error {
            println!("  error:   {message}");
        }
    });

    for script in ["12+30=", "C5/0=", "C7x2=", "C9-4==="] {
        println!("Keys: {script}");
        for intent in script.chars().filter_map(parse_key) {
            view_model.process_intent(intent);
        }
        println!();
    }

    let last = view_model.dispose();
    println!("Final snapshot: {last:?}");

    println!("\n=== Example Complete ===");
}
