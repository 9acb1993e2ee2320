//! roadnet library entry points.
//!
//! This crate parses sectioned road network descriptions, stores them as an
//! undirected graph whose roads carry distance, time and cost weights, and
//! finds the optimal route between two locations for each of those criteria.
//! A compromise route is then chosen from a caller-supplied priority order.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod criterion;
pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;

pub use criterion::{Criterion, PriorityOrder, Weights};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Location, LocationId};
pub use input::{load_network, parse_network, NetworkInput};
pub use output::{
    format_path, format_route_line, render_report, render_request_lines, write_report,
    CriterionRoute, RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary,
};
pub use path::{find_optimal_route, Route};
pub use routing::{
    all_routes, plan_routes, routes_between, select_compromise, RoutePlan, RouteRequest, RouteSet,
};
