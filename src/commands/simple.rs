//! Simple interactive CLI mode
//!
//! Text-based form without TUI

use super::find::searching_spinner;
use crate::client::QueryClient;
use crate::core::Field;
use crate::output::print_outcome;
use crate::output::formatters::constraint_tiles;
use crate::route::History;
use crate::session::FormSession;
use std::io::{self, Write};
use tokio::runtime::Handle;

/// What the user asked for at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Value(String),
    /// Blank line: keep the current value
    Keep,
    /// `-` or `none`: empty the field
    Empty,
    Clear,
    Quit,
}

fn parse_reply(input: &str) -> Reply {
    match input.trim().to_lowercase().as_str() {
        "" => Reply::Keep,
        "-" | "none" => Reply::Empty,
        "clear" => Reply::Clear,
        "quit" | "q" | "exit" => Reply::Quit,
        _ => Reply::Value(input.trim().to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(client: &QueryClient, history: History, runtime: &Handle) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assist - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Fill in what you know, then I'll look up matching words:\n");
    println!("  - Letters: green letters by position, '_' for the rest (e.g. _O___)");
    println!("  - Exclude: grey letters, any order (e.g. AD)");
    println!("  - Include: yellow letters by position, '_' for the rest (e.g. B__R_)\n");
    println!("Press Enter to keep a value, '-' or 'none' to empty it.");
    println!("Commands: 'clear' to start over, 'quit' to exit\n");

    let mut session = FormSession::new(history);

    'form: loop {
        for field in Field::FORM_ORDER {
            let current = session.fields().get(field).to_string();
            let prompt = if current.is_empty() {
                field.label().to_string()
            } else {
                format!("{} [{current}]", field.label())
            };

            match parse_reply(&get_user_input(&prompt)?) {
                Reply::Value(raw) => session.edit(field, &raw),
                Reply::Keep => {}
                Reply::Empty => session.edit(field, ""),
                Reply::Clear => {
                    session.clear();
                    println!("\n🔄 Cleared!\n");
                    continue 'form;
                }
                Reply::Quit => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
            }
        }

        let Some(request) = session.begin_search() else {
            println!("\n❌ Enter some letters first ('_' for unknown positions).\n");
            continue;
        };

        let tiles = constraint_tiles(session.fields());
        if !tiles.is_empty() {
            println!("\n  {tiles}");
        }

        let spinner = searching_spinner(session.route());
        let fields = &request.constraints;
        let result = runtime.block_on(client.find_matching_words(
            fields.pattern(),
            fields.include(),
            fields.exclude(),
        ));
        spinner.finish_and_clear();

        session.settle(request.ticket, result);
        print_outcome(session.outcome());
        println!("Route: {}\n", session.route());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies() {
        assert_eq!(parse_reply(""), Reply::Keep);
        assert_eq!(parse_reply("  "), Reply::Keep);
        assert_eq!(parse_reply("CLEAR"), Reply::Clear);
        assert_eq!(parse_reply("-"), Reply::Empty);
        assert_eq!(parse_reply(" None "), Reply::Empty);
        assert_eq!(parse_reply("q"), Reply::Quit);
        assert_eq!(parse_reply(" _o___ "), Reply::Value("_o___".to_string()));
    }
}
