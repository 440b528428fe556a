//! Form session and request lifecycle

mod form;
mod outcome;

pub use form::{FormSession, SearchRequest};
pub use outcome::{GENERIC_FAILURE_MESSAGE, NO_MATCHES_MESSAGE, RequestOutcome, SearchTicket};
