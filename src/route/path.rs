//! Route path encoding of the constraint fields
//!
//! Routes have up to three segments:
//!
//! ```text
//! /                               no constraints
//! /{pattern}                      pattern only
//! /{pattern}/{include}            pattern + include mask
//! /{pattern}/{include}/{exclude}  all three
//! ```
//!
//! An empty field is written as `_` when a later segment is needed, and
//! trailing empty segments are left out.

use crate::core::Constraints;
use thiserror::Error;

/// Segment standing in for an empty field
const EMPTY_SEGMENT: &str = "_";

/// Maximum number of segments a route can carry
pub const MAX_SEGMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route must start with '/', got {0:?}")]
    Relative(String),

    #[error("route has {0} segments, at most {max} are allowed", max = MAX_SEGMENTS)]
    TooManySegments(usize),
}

/// Build the shortest path that round-trips all non-empty fields
///
/// # Examples
/// ```
/// use wordle_assist::route::build_path;
///
/// assert_eq!(build_path("", "", ""), "/");
/// assert_eq!(build_path("_O___", "B__R_", ""), "/_O___/B__R_");
/// assert_eq!(build_path("", "B__R_", "AD"), "/_/B__R_/AD");
/// ```
#[must_use]
pub fn build_path(pattern: &str, include: &str, exclude: &str) -> String {
    let mut path = String::from("/");
    if pattern.is_empty() && include.is_empty() && exclude.is_empty() {
        return path;
    }

    path.push_str(or_placeholder(pattern));
    if !include.is_empty() || !exclude.is_empty() {
        path.push('/');
        path.push_str(or_placeholder(include));
        if !exclude.is_empty() {
            path.push('/');
            path.push_str(exclude);
        }
    }
    path
}

/// [`build_path`] for a set of constraints
#[must_use]
pub fn constraints_path(constraints: &Constraints) -> String {
    build_path(
        constraints.pattern(),
        constraints.include(),
        constraints.exclude(),
    )
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { EMPTY_SEGMENT } else { value }
}

/// Split a `/`-rooted path into its segments
///
/// A single trailing slash is ignored, so `/CRANE/` matches like `/CRANE`.
///
/// # Errors
///
/// Returns [`RouteError`] when the path is not rooted or has more than
/// [`MAX_SEGMENTS`] segments.
pub fn parse_path(path: &str) -> Result<Vec<&str>, RouteError> {
    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| RouteError::Relative(path.to_string()))?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.len() > MAX_SEGMENTS {
        return Err(RouteError::TooManySegments(segments.len()));
    }
    Ok(segments)
}

/// Map route segments back to constraint fields
///
/// Missing and `_` segments yield empty fields. Anything else is used
/// verbatim; it is sanitized when the user next edits that field.
#[must_use]
pub fn parse_route(segments: &[&str]) -> Constraints {
    let field = |index: usize| -> String {
        match segments.get(index) {
            Some(&segment) if segment != EMPTY_SEGMENT => segment.to_string(),
            _ => String::new(),
        }
    };
    Constraints::from_route_values(field(0), field(1), field(2))
}

/// Parse a full path into constraint fields
///
/// # Errors
///
/// See [`parse_path`].
pub fn constraints_from_path(path: &str) -> Result<Constraints, RouteError> {
    parse_path(path).map(|segments| parse_route(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_path_examples() {
        assert_eq!(build_path("", "", ""), "/");
        assert_eq!(build_path("_O___", "", ""), "/_O___");
        assert_eq!(build_path("_O___", "B__R_", ""), "/_O___/B__R_");
        assert_eq!(build_path("_O___", "B__R_", "AD"), "/_O___/B__R_/AD");
        assert_eq!(build_path("", "B__R_", "AD"), "/_/B__R_/AD");
        assert_eq!(build_path("", "", "AD"), "/_/_/AD");
        assert_eq!(build_path("_O___", "", "AD"), "/_O___/_/AD");
    }

    #[test]
    fn round_trip() {
        let triples = [
            ("", "", ""),
            ("_O___", "", ""),
            ("_O___", "B__R_", ""),
            ("_O___", "B__R_", "AD"),
            ("", "B__R_", "AD"),
            ("", "", "XYZ"),
            ("_____", "_____", ""),
            ("_____", "", "Q"),
            ("CRANE", "__", "Z"),
        ];

        for (pattern, include, exclude) in triples {
            let path = build_path(pattern, include, exclude);
            let parsed = constraints_from_path(&path).unwrap();
            assert_eq!(
                (parsed.pattern(), parsed.include(), parsed.exclude()),
                (pattern, include, exclude),
                "via {path}"
            );
        }
    }

    #[test]
    fn parse_route_missing_and_placeholder_segments() {
        let parsed = parse_route(&[]);
        assert!(parsed.is_empty());

        let parsed = parse_route(&["_", "B__R_"]);
        assert_eq!(parsed.pattern(), "");
        assert_eq!(parsed.include(), "B__R_");
        assert_eq!(parsed.exclude(), "");
    }

    #[test]
    fn parse_route_keeps_untrusted_segments_verbatim() {
        let parsed = parse_route(&["cr4ne", "_", "a_d"]);
        assert_eq!(parsed.pattern(), "cr4ne");
        assert_eq!(parsed.include(), "");
        assert_eq!(parsed.exclude(), "a_d");
    }

    #[test]
    fn parse_path_rules() {
        assert_eq!(parse_path("/").unwrap(), Vec::<&str>::new());
        assert_eq!(parse_path("/CRANE/").unwrap(), vec!["CRANE"]);
        assert_eq!(parse_path("/a/b/c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(
            parse_path("CRANE"),
            Err(RouteError::Relative("CRANE".to_string()))
        );
        assert_eq!(parse_path("/a/b/c/d"), Err(RouteError::TooManySegments(4)));
        assert_eq!(
            RouteError::TooManySegments(4).to_string(),
            format!("route has 4 segments, at most {MAX_SEGMENTS} are allowed")
        );
    }
}
