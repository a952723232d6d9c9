// Colored terminal output for relation rankings.
//
// This module handles all terminal-specific formatting: colors, the ranked
// pair table, and the summary line. The main.rs display code delegates here.

use colored::Colorize;
use serde::Serialize;

use super::display_word;
use crate::store::RelationStore;

/// One row of the ranked pair table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPair {
    pub word1: String,
    pub word2: String,
    pub weight: f64,
}

/// Collect the `count` strongest pairs, descending by weight.
///
/// Ties break lexicographically on the pair key so the ranking is stable
/// across runs.
pub fn strongest_pairs(store: &RelationStore, count: usize) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = store
        .pairs()
        .map(|(w1, w2, weight)| RankedPair {
            word1: w1.to_string(),
            word2: w2.to_string(),
            weight,
        })
        .collect();

    pairs.sort_by(|a, b| {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| a.word1.cmp(&b.word1))
            .then_with(|| a.word2.cmp(&b.word2))
    });
    pairs.truncate(count);
    pairs
}

/// Display a ranked pair list in the terminal.
pub fn display_top_pairs(pairs: &[RankedPair], total_pairs: usize, vocabulary: usize) {
    if pairs.is_empty() {
        println!("No relations found. The text may be empty or consist only of stop words.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Strongest relations ({total_pairs} pairs, {vocabulary} words) ===").bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<20} {:<20} {:>8}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Word".dimmed(),
        "Weight".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (i, pair) in pairs.iter().enumerate() {
        let weight = format!("{:>8.3}", pair.weight);
        let colored_weight = if pair.weight >= 2.0 {
            weight.bright_green()
        } else if pair.weight >= 1.0 {
            weight.bright_yellow()
        } else {
            weight.normal()
        };

        println!(
            "  {:>4}. {:<20} {:<20} {}",
            i + 1,
            display_word(&pair.word1),
            display_word(&pair.word2),
            colored_weight,
        );
    }

    println!();
}
