//! Request outcome shown in the results area

/// Message shown for any failed request
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong...";

/// Message shown when the service found nothing
pub const NO_MATCHES_MESSAGE: &str = "No valid words can be formed. Try different letters.";

/// State of the latest search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    /// No search since start-up or the last clear
    #[default]
    Idle,
    Pending,
    Success(Vec<String>),
    Failure(String),
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Words of a successful search; empty otherwise
    #[must_use]
    pub fn words(&self) -> &[String] {
        match self {
            Self::Success(words) => words,
            _ => &[],
        }
    }

    /// Error message of a failed search
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// A successful search that found nothing
    #[must_use]
    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::Success(words) if words.is_empty())
    }
}

/// Identifies a started search so stale responses can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(pub(super) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let idle = RequestOutcome::default();
        assert!(idle.words().is_empty());

        let found = RequestOutcome::Success(vec!["CRANE".to_string()]);
        assert!(!found.is_no_matches());
        assert_eq!(found.words(), ["CRANE"]);

        assert!(RequestOutcome::Success(Vec::new()).is_no_matches());

        let failed = RequestOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string());
        assert_eq!(failed.error(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(failed.words().is_empty());
    }
}
