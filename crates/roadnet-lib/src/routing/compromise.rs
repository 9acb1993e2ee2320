//! Compromise selection over a set of per-criterion routes.

use crate::criterion::{Criterion, PriorityOrder};
use crate::path::Route;

use super::RouteSet;

/// Return the route of the first criterion in `priority` that has an entry
/// in `routes`, together with that criterion.
///
/// Yields `None` when the set is empty or none of the listed criteria
/// produced a route.
pub fn select_compromise<'a>(
    routes: &'a RouteSet,
    priority: &PriorityOrder,
) -> Option<(Criterion, &'a Route)> {
    priority
        .iter()
        .find_map(|criterion| routes.get(criterion).map(|route| (criterion, route)))
}
