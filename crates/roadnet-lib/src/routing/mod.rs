//! Multi-criterion route planning.
//!
//! This module provides:
//! - [`RouteSet`] - Optimal routes keyed by the criterion that produced them
//! - [`RouteRequest`] - A start/goal pair with its compromise priority order
//! - [`RoutePlan`] - Resolved request with all routes and the compromise
//! - [`all_routes`] - Lenient planner used for batch processing
//! - [`plan_routes`] - Strict planner that reports unknown names and missing routes
//!
//! Each criterion runs the same parameterized solver
//! ([`find_optimal_route`](crate::path::find_optimal_route)); the compromise
//! is then picked from those results by [`select_compromise`].
//!
//! # Example
//!
//! ```
//! use roadnet_lib::{plan_routes, Graph, PriorityOrder, RouteRequest, Weights};
//!
//! let mut graph = Graph::new();
//! graph.add_location(1, "A");
//! graph.add_location(2, "B");
//! graph.add_road(1, 2, Weights::new(10, 5, 2));
//!
//! let request = RouteRequest::new("A", "B").with_priority(PriorityOrder::parse("(T,D)"));
//! let plan = plan_routes(&graph, &request)?;
//! assert_eq!(plan.compromise_route().map(|route| route.totals.time), Some(5));
//! # Ok::<(), roadnet_lib::Error>(())
//! ```

mod compromise;

pub use compromise::select_compromise;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::criterion::{Criterion, PriorityOrder};
use crate::error::{Error, Result};
use crate::graph::{Graph, LocationId};
use crate::path::{find_optimal_route, Route};

/// Number of name suggestions attached to unknown-location errors.
const MAX_SUGGESTIONS: usize = 3;

/// Optimal routes keyed by criterion, iterated in canonical order.
///
/// Only criteria that found a path have an entry. Reachability does not
/// depend on the criterion, so in practice the set is either full or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteSet(BTreeMap<Criterion, Route>);

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, criterion: Criterion, route: Route) {
        self.0.insert(criterion, route);
    }

    pub fn get(&self, criterion: Criterion) -> Option<&Route> {
        self.0.get(&criterion)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &Route)> {
        self.0.iter().map(|(criterion, route)| (*criterion, route))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single planning query: two location names and a compromise priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub priority: PriorityOrder,
}

impl RouteRequest {
    /// Request with the default priority order (distance, time, cost).
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            priority: PriorityOrder::default(),
        }
    }

    pub fn with_priority(mut self, priority: PriorityOrder) -> Self {
        self.priority = priority;
        self
    }
}

/// Result of a successful strict planning query.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: LocationId,
    pub goal: LocationId,
    pub routes: RouteSet,
    pub compromise: Option<Criterion>,
}

impl RoutePlan {
    /// Route chosen as the compromise, if any criterion in the priority
    /// order produced one.
    pub fn compromise_route(&self) -> Option<&Route> {
        self.compromise
            .and_then(|criterion| self.routes.get(criterion))
    }
}

/// Compute the optimal route for every criterion between two named
/// locations.
///
/// Unknown names produce an empty [`RouteSet`], as does a target that cannot
/// be reached.
pub fn all_routes(graph: &Graph, start: &str, goal: &str) -> RouteSet {
    let (Some(start_id), Some(goal_id)) = (graph.id_for_name(start), graph.id_for_name(goal))
    else {
        warn!(start, goal, "location name not found; no routes computed");
        return RouteSet::new();
    };

    routes_between(graph, start_id, goal_id)
}

/// Run the solver once per criterion, in canonical order.
pub fn routes_between(graph: &Graph, start: LocationId, goal: LocationId) -> RouteSet {
    let mut routes = RouteSet::new();
    for criterion in Criterion::ALL {
        match find_optimal_route(graph, start, goal, criterion) {
            Some(route) => routes.insert(criterion, route),
            None => debug!(%criterion, start, goal, "no path for criterion"),
        }
    }
    routes
}

/// Plan a request, reporting unknown names and unreachable goals as errors.
pub fn plan_routes(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_location(graph, &request.start)?;
    let goal = resolve_location(graph, &request.goal)?;

    let routes = routes_between(graph, start, goal);
    if routes.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.trim().to_string(),
            goal: request.goal.trim().to_string(),
        });
    }

    let compromise = select_compromise(&routes, &request.priority).map(|(criterion, _)| criterion);

    Ok(RoutePlan {
        start,
        goal,
        routes,
        compromise,
    })
}

fn resolve_location(graph: &Graph, name: &str) -> Result<LocationId> {
    graph.id_for_name(name).ok_or_else(|| Error::UnknownLocation {
        name: name.trim().to_string(),
        suggestions: graph.fuzzy_location_matches(name, MAX_SUGGESTIONS),
    })
}
