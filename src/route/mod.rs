//! Route state: path encoding, history and reconciliation with the form

mod history;
mod path;
mod sync;

pub use history::{History, NavigateMode, Navigator};
pub use path::{
    MAX_SEGMENTS, RouteError, build_path, constraints_from_path, constraints_path, parse_path,
    parse_route,
};
pub use sync::{reconcile, route_constraints};
