//! Field-to-route reconciliation
//!
//! The fields are the source of truth. After a mutation, [`reconcile`]
//! compares them with the fields encoded in the current route and, when they
//! differ, replaces the current history entry with the canonical path.
//!
//! Comparison is exact string equality on each field: `_____` in the form
//! against a `_____` segment is equal, while a form value of `_` against the
//! `_` segment (which decodes to empty) is not.

use super::history::{NavigateMode, Navigator};
use super::path::{constraints_from_path, constraints_path};
use crate::core::Constraints;

/// Fields encoded in the navigator's current route
///
/// A current path that is not a valid route decodes as empty fields.
#[must_use]
pub fn route_constraints<N: Navigator + ?Sized>(navigator: &N) -> Constraints {
    constraints_from_path(navigator.current_path()).unwrap_or_default()
}

/// Bring the route in line with `fields`
///
/// Returns true when a navigation happened.
pub fn reconcile<N: Navigator + ?Sized>(fields: &Constraints, navigator: &mut N) -> bool {
    if route_constraints(navigator) == *fields {
        return false;
    }

    let path = constraints_path(fields);
    tracing::debug!(%path, "route out of sync with form, replacing");
    navigator.navigate(&path, NavigateMode::Replace);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;
    use crate::route::History;

    #[test]
    fn reconcile_replaces_current_entry() {
        let mut history = History::default();
        let mut fields = Constraints::default();

        fields.set(Field::Pattern, "_o___");
        assert!(reconcile(&fields, &mut history));
        assert_eq!(history.entries(), ["/_O___"]);

        fields.set(Field::Exclude, "ad");
        assert!(reconcile(&fields, &mut history));
        assert_eq!(history.entries(), ["/_O___/_/AD"]);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut history = History::new("/_O___/B__R_");
        let fields = Constraints::new("_O___", "B__R_", "");
        assert!(!reconcile(&fields, &mut history));
        assert_eq!(history.entries(), ["/_O___/B__R_"]);
    }

    #[test]
    fn all_placeholder_pattern_matches_its_segment() {
        let mut history = History::new("/_____");
        let fields = Constraints::new("_____", "", "");
        assert!(!reconcile(&fields, &mut history));
    }

    #[test]
    fn non_canonical_route_is_rewritten() {
        let mut history = History::new("/_O___/_");
        let fields = route_constraints(&history);
        assert_eq!(fields, Constraints::new("_O___", "", ""));

        // Same fields, so nothing to do even though the path is not canonical
        assert!(!reconcile(&fields, &mut history));

        let mut edited = fields.clone();
        edited.push_char(Field::Pattern, 'x');
        assert!(reconcile(&edited, &mut history));
        assert_eq!(history.current_path(), "/_O___X");
    }

    #[test]
    fn clearing_fields_returns_to_root() {
        let mut history = History::new("/CRANE/_/XY");
        assert!(reconcile(&Constraints::default(), &mut history));
        assert_eq!(history.current_path(), "/");
    }
}
