//! One-shot search from command-line constraints

use crate::client::QueryClient;
use crate::core::{Constraints, Field};
use crate::route::{History, RouteError, constraints_from_path};
use crate::session::{FormSession, RequestOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;

#[derive(Debug, Error)]
pub enum FindError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("no letters given; use '_' for unknown positions, e.g. _____")]
    EmptyPattern,
}

/// Where the constraints of a `find` come from
#[derive(Debug, Clone)]
pub enum FindInput {
    /// Raw field values, sanitized like keystrokes
    Fields {
        pattern: String,
        include: String,
        exclude: String,
    },
    /// A route path such as `/_O___/B__R_/AD`
    Route(String),
}

impl FindInput {
    /// Resolve to constraints
    ///
    /// # Errors
    ///
    /// Returns `FindError::Route` for a malformed route.
    pub fn constraints(&self) -> Result<Constraints, FindError> {
        match self {
            Self::Fields {
                pattern,
                include,
                exclude,
            } => Ok(Constraints::new(pattern, include, exclude)),
            Self::Route(path) => {
                let raw = constraints_from_path(path)?;
                // Arguments are untrusted input, clean them like keystrokes
                Ok(Constraints::new(raw.pattern(), raw.include(), raw.exclude()))
            }
        }
    }
}

/// Result of a `find`
#[derive(Debug, Clone)]
pub struct FindResult {
    pub constraints: Constraints,
    pub route: String,
    pub outcome: RequestOutcome,
}

/// Run a single search and wait for it to settle
///
/// Service failures are part of the result, not an error.
///
/// # Errors
///
/// Returns `FindError` if the input is malformed or has no pattern.
pub fn find_words(
    input: &FindInput,
    client: &QueryClient,
    runtime: &Handle,
    show_spinner: bool,
) -> Result<FindResult, FindError> {
    let constraints = input.constraints()?;

    let mut session = FormSession::new(History::default());
    for field in Field::FORM_ORDER {
        session.edit(field, constraints.get(field));
    }

    let request = session.begin_search().ok_or(FindError::EmptyPattern)?;

    let spinner = show_spinner.then(|| searching_spinner(session.route()));
    let fields = &request.constraints;
    let result = runtime.block_on(client.find_matching_words(
        fields.pattern(),
        fields.include(),
        fields.exclude(),
    ));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    session.settle(request.ticket, result);

    Ok(FindResult {
        constraints: session.fields().clone(),
        route: session.route().to_string(),
        outcome: session.outcome().clone(),
    })
}

/// Spinner shown while a request is in flight
#[must_use]
pub fn searching_spinner(route: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("SEARCHING... {route}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
