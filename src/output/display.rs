//! Display functions for command results

use super::formatters::{constraint_tiles, display_words};
use crate::commands::FindResult;
use crate::session::{NO_MATCHES_MESSAGE, RequestOutcome};
use colored::Colorize;

/// Print the outcome of a search below a header naming the constraints
pub fn print_find_result(result: &FindResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}  Include: {}  Exclude: {}",
        blank_as_dash(result.constraints.pattern()).bright_green().bold(),
        blank_as_dash(result.constraints.include()).bright_yellow().bold(),
        blank_as_dash(result.constraints.exclude()).bright_black().bold()
    );
    let tiles = constraint_tiles(&result.constraints);
    if !tiles.is_empty() {
        println!("Board:   {tiles}");
    }
    println!("Route:   {}", result.route.bright_white());
    println!("{}", "─".repeat(60).cyan());

    print_outcome(&result.outcome);
}

/// Print words, the no-matches message or the error message
pub fn print_outcome(outcome: &RequestOutcome) {
    match outcome {
        RequestOutcome::Success(words) if words.is_empty() => {
            println!("\n{}", NO_MATCHES_MESSAGE.yellow());
        }
        RequestOutcome::Success(words) => {
            println!(
                "\n{} {}\n",
                words.len().to_string().bright_cyan().bold(),
                if words.len() == 1 { "match" } else { "matches" }
            );
            for line in display_words(words).chunks(8) {
                println!("  {}", line.join("  ").bold());
            }
        }
        RequestOutcome::Failure(message) => {
            println!("\n{}", message.red().bold());
        }
        RequestOutcome::Idle | RequestOutcome::Pending => {}
    }
    println!();
}

fn blank_as_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
