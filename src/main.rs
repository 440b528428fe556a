//! Wordle Assist - CLI
//!
//! Terminal front-end for a remote Wordle word-matching service, with TUI,
//! line-based and one-shot modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use wordle_assist::{
    client::QueryClient,
    commands::{FindInput, find_words, run_simple},
    config::{AssistConfig, ThemeMode},
    core::Constraints,
    logging,
    output::print_find_result,
    route::{History, constraints_from_path, constraints_path},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Find Wordle candidates from green, yellow and grey letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word service URL (overrides config file and WORDLEASSIST_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file (default: <config dir>/wordle_assist/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Colour scheme of the interactive form
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeMode>,

    /// Write logs to this file (the interactive form logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI form (default)
    Play {
        /// Start from a route such as /_O___/B__R_/AD
        #[arg(short, long, default_value = "/")]
        route: String,
    },

    /// Simple CLI mode (line prompts without TUI)
    Simple,

    /// Look up matching words once and print them
    Find {
        /// Green letters by position, '_' for unknown (e.g. _O___)
        #[arg(conflicts_with = "route")]
        pattern: Option<String>,

        /// Yellow letters by position (e.g. B__R_)
        #[arg(short, long, default_value = "")]
        include: String,

        /// Grey letters in any order (e.g. AD)
        #[arg(short, long, default_value = "")]
        exclude: String,

        /// Take all three fields from a route instead
        #[arg(short, long)]
        route: Option<String>,

        /// Print the service's JSON array instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Print the route path for a set of constraints
    Route {
        pattern: Option<String>,

        #[arg(short, long, default_value = "")]
        include: String,

        #[arg(short, long, default_value = "")]
        exclude: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AssistConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        route: "/".to_string(),
    });

    match &cli.log_file {
        Some(path) => logging::init_file(path, config.log_filter.as_deref())?,
        // Stderr would draw over the full-screen form
        None if matches!(command, Commands::Play { .. }) => {}
        None => logging::init_stderr(config.log_filter.as_deref())?,
    }

    match command {
        Commands::Route {
            pattern,
            include,
            exclude,
        } => {
            let constraints = Constraints::new(pattern.as_deref().unwrap_or(""), &include, &exclude);
            println!("{}", constraints_path(&constraints));
            Ok(())
        }
        Commands::Play { route } => run_play_command(&config, &route),
        Commands::Simple => run_simple_command(&config),
        Commands::Find {
            pattern,
            include,
            exclude,
            route,
            json,
        } => {
            let input = match route {
                Some(path) => FindInput::Route(path),
                None => FindInput::Fields {
                    pattern: pattern.unwrap_or_default(),
                    include,
                    exclude,
                },
            };
            run_find_command(&config, &input, json)
        }
    }
}

fn build_client(config: &AssistConfig) -> Result<QueryClient> {
    let client = QueryClient::new(config.api_url()?);
    tracing::info!(url = %client.base_url(), "using word service");
    Ok(client)
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn run_play_command(config: &AssistConfig, route: &str) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    // Reject routes no page would match before taking over the terminal
    constraints_from_path(route)?;

    let client = build_client(config)?;
    let runtime = build_runtime()?;
    let app = App::new(History::new(route), config.theme);
    run_tui(app, client, runtime.handle())
}

fn run_simple_command(config: &AssistConfig) -> Result<()> {
    let client = build_client(config)?;
    let runtime = build_runtime()?;
    run_simple(&client, History::default(), runtime.handle()).map_err(|e| anyhow::anyhow!(e))
}

fn run_find_command(config: &AssistConfig, input: &FindInput, json: bool) -> Result<()> {
    let client = build_client(config)?;
    let runtime = build_runtime()?;
    let result = find_words(input, &client, runtime.handle(), !json)?;

    if json {
        if let Some(message) = result.outcome.error() {
            anyhow::bail!("{message}");
        }
        println!("{}", serde_json::to_string(result.outcome.words())?);
    } else {
        print_find_result(&result);
    }
    Ok(())
}
