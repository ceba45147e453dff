// Colored terminal output for risk assessments and session history.
//
// All terminal-specific formatting lives here: colors, the score meter,
// history lines. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analysis::models::AnalysisResult;
use crate::analysis::risk::{pretty_label, RiskTier, Verdict};
use crate::session::history::History;

/// Width of the score meter in characters.
const METER_WIDTH: usize = 20;

/// Display a full risk assessment for one result.
pub fn display_result(result: &AnalysisResult) {
    println!("\n{}", "=== Risk assessment ===".bold());

    let tier = RiskTier::from_score(result.score());
    println!(
        "  {} {}  risk: {}",
        render_meter(result.score()),
        format!("{}/100", result.score()).bold(),
        colorize_tier(tier),
    );
    println!("  Verdict: {}", colorize_label(result.label()));

    if result.reasons().is_empty() {
        println!("\n  {}", "No explanation provided by the model.".dimmed());
    } else {
        println!("\n  Why we think this:");
        for reason in result.reasons() {
            println!("    - {reason}");
        }
    }

    if let Some(p) = result.probabilities() {
        println!(
            "\n  {}",
            format!(
                "Probabilities — Scam: {:.1}%, Safe: {:.1}%",
                p.scam * 100.0,
                p.safe * 100.0
            )
            .dimmed()
        );
    }
}

/// Display the session history, newest first.
pub fn display_history(history: &History) {
    if history.is_empty() {
        println!("No analyses yet this session.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Recent analyses ({}) ===", history.len()).bold()
    );
    for entry in history.iter() {
        let preview = super::truncate_chars(&entry.message, 80);
        println!(
            "  {:>3}/100  {:<12} {}",
            entry.result.score(),
            colorize_label(entry.result.label()),
            preview.dimmed(),
        );
    }
}

/// Render a fixed-width meter of filled/empty blocks for a 0-100 score.
fn render_meter(score: u8) -> String {
    let filled = (score as usize * METER_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled)
    )
}

/// Colorize a model label by its verdict bucket.
fn colorize_label(label: &str) -> colored::ColoredString {
    let pretty = pretty_label(label);
    match Verdict::from_label(label) {
        Verdict::Scam => pretty.red().bold(),
        Verdict::Safe => pretty.green(),
        Verdict::Other => pretty.yellow(),
    }
}

/// Colorize a risk tier.
fn colorize_tier(tier: RiskTier) -> colored::ColoredString {
    match tier {
        RiskTier::High => tier.as_str().red().bold(),
        RiskTier::Medium => tier.as_str().yellow(),
        RiskTier::Low => tier.as_str().green(),
    }
}
