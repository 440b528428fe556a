//! Form session: fields, route and request lifecycle
//!
//! Front-ends drive a [`FormSession`] and perform the network call
//! themselves: [`FormSession::begin_search`] hands out a [`SearchRequest`],
//! the caller runs it and reports back through [`FormSession::settle`].

use super::outcome::{GENERIC_FAILURE_MESSAGE, RequestOutcome, SearchTicket};
use crate::client::QueryError;
use crate::core::{Constraints, Field};
use crate::route::{NavigateMode, Navigator, constraints_path, reconcile, route_constraints};

/// A search the caller should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub constraints: Constraints,
}

/// Form state bound to a navigator
#[derive(Debug)]
pub struct FormSession<N: Navigator> {
    fields: Constraints,
    navigator: N,
    outcome: RequestOutcome,
    generation: u64,
}

impl<N: Navigator> FormSession<N> {
    /// Start a session with fields taken from the navigator's current route
    #[must_use]
    pub fn new(navigator: N) -> Self {
        let fields = route_constraints(&navigator);
        Self {
            fields,
            navigator,
            outcome: RequestOutcome::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &Constraints {
        &self.fields
    }

    #[must_use]
    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Current route path
    #[must_use]
    pub fn route(&self) -> &str {
        self.navigator.current_path()
    }

    /// Replace a field with the sanitized `raw` value
    pub fn edit(&mut self, field: Field, raw: &str) {
        self.fields.set(field, raw);
        self.sync_route();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.fields.push_char(field, c);
        self.sync_route();
    }

    pub fn pop_char(&mut self, field: Field) {
        self.fields.pop_char(field);
        self.sync_route();
    }

    /// Submit is available with a pattern and no search in flight
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.outcome.is_pending() && !self.fields.pattern().trim().is_empty()
    }

    /// Start a search if the form can be submitted
    ///
    /// Pushes the route as a new history entry and marks the outcome pending.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if !self.can_submit() {
            return None;
        }

        let path = constraints_path(&self.fields);
        self.navigator.navigate(&path, NavigateMode::Push);

        self.generation += 1;
        self.outcome = RequestOutcome::Pending;
        tracing::info!(route = %path, "search started");

        Some(SearchRequest {
            ticket: SearchTicket(self.generation),
            constraints: self.fields.clone(),
        })
    }

    /// Record the result of a search
    ///
    /// Results for a superseded or cleared search are dropped. Returns true
    /// when the outcome changed.
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<String>, QueryError>,
    ) -> bool {
        if ticket.0 != self.generation || !self.outcome.is_pending() {
            tracing::debug!(?ticket, "dropping stale search result");
            return false;
        }

        self.outcome = match result {
            Ok(words) => {
                tracing::info!(count = words.len(), "search finished");
                RequestOutcome::Success(words)
            }
            Err(err) => {
                tracing::warn!(status = err.status(), error = %err, "search failed");
                RequestOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    /// Empty every field, forget the last search and go back to `/`
    pub fn clear(&mut self) {
        self.fields.clear();
        self.outcome = RequestOutcome::Idle;
        // Outstanding tickets no longer match
        self.generation += 1;
        self.navigator.navigate("/", NavigateMode::Replace);
    }

    fn sync_route(&mut self) {
        reconcile(&self.fields, &mut self.navigator);
    }
}
