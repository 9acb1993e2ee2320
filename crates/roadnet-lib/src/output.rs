use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::criterion::{Criterion, Weights};
use crate::error::{Error, Result};
use crate::graph::{Graph, LocationId};
use crate::path::Route;
use crate::routing::{all_routes, select_compromise, RoutePlan, RouteRequest, RouteSet};

const UNKNOWN_NAME: &str = "<unknown>";
const COMPROMISE_LABEL: &str = "COMPROMISE";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Location visited along a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Optimal route for one criterion with resolved location names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CriterionRoute {
    pub criterion: Criterion,
    pub hops: usize,
    pub totals: Weights,
    pub steps: Vec<RouteStep>,
}

/// Structured representation of a [`RoutePlan`] that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub routes: Vec<CriterionRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compromise: Option<Criterion>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let routes = plan
            .routes
            .iter()
            .map(|(criterion, route)| {
                if route.steps.is_empty() {
                    return Err(Error::EmptyRoute);
                }
                Ok(CriterionRoute {
                    criterion,
                    hops: route.hop_count(),
                    totals: route.totals,
                    steps: route
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(index, id)| RouteStep {
                            index,
                            id: *id,
                            name: graph.name_for_id(*id).map(str::to_string),
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start: endpoint(graph, plan.start),
            goal: endpoint(graph, plan.goal),
            routes,
            compromise: plan.compromise,
        })
    }

    fn route_for(&self, criterion: Criterion) -> Option<&CriterionRoute> {
        self.routes.iter().find(|route| route.criterion == criterion)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for criterion in Criterion::ALL {
            let line = match self.route_for(criterion) {
                Some(route) => format_line(criterion.label(), &joined_names(route), route.totals),
                None => no_path_line(criterion.label()),
            };
            let _ = writeln!(buffer, "{line}");
        }

        let compromise = self
            .compromise
            .and_then(|criterion| self.route_for(criterion));
        let line = match compromise {
            Some(route) => format_line(COMPROMISE_LABEL, &joined_names(route), route.totals),
            None => no_path_line(COMPROMISE_LABEL),
        };
        let _ = writeln!(buffer, "{line}");
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Routes** — _{} → {}_",
            self.start.display_name(),
            self.goal.display_name()
        );
        for route in &self.routes {
            let marker = if self.compromise == Some(route.criterion) {
                " (compromise)"
            } else {
                ""
            };
            let _ = writeln!(
                buffer,
                "* **{}**{} — {} hops, distance `{}`, time `{}`, cost `{}`",
                route.criterion.label(),
                marker,
                route.hops,
                route.totals.distance,
                route.totals.time,
                route.totals.cost
            );
            for step in &route.steps {
                let _ = writeln!(
                    buffer,
                    "  * {:>2}. **{}** (`{}`)",
                    step.index,
                    step.display_name(),
                    step.id
                );
            }
        }
        buffer
    }
}

fn endpoint(graph: &Graph, id: LocationId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.name_for_id(id).map(str::to_string),
    }
}

fn joined_names(route: &CriterionRoute) -> String {
    route
        .steps
        .iter()
        .map(RouteStep::display_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_line(label: &str, path: &str, totals: Weights) -> String {
    format!(
        "{label}: {path} | D={}, T={}, C={}",
        totals.distance, totals.time, totals.cost
    )
}

fn no_path_line(label: &str) -> String {
    format!("{label}: no path")
}

/// Join the names of the locations along `steps` with ` -> `.
pub fn format_path(graph: &Graph, steps: &[LocationId]) -> String {
    steps
        .iter()
        .map(|id| graph.name_for_id(*id).unwrap_or(UNKNOWN_NAME))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format one report line for a route, e.g.
/// `TIME: A -> C | D=25, T=1, C=1`.
pub fn format_route_line(label: &str, graph: &Graph, route: &Route) -> String {
    format_line(label, &format_path(graph, &route.steps), route.totals)
}

/// Render the report lines for one request given its computed routes.
///
/// An empty route set produces a single explanatory line; otherwise there is
/// one line per criterion, a compromise line, and a trailing blank line.
pub fn render_request_lines(
    graph: &Graph,
    request: &RouteRequest,
    routes: &RouteSet,
) -> Vec<String> {
    if routes.is_empty() {
        return vec![format!(
            "No path between {} and {}",
            request.start, request.goal
        )];
    }

    let mut lines = Vec::with_capacity(Criterion::ALL.len() + 2);
    for criterion in Criterion::ALL {
        lines.push(match routes.get(criterion) {
            Some(route) => format_route_line(criterion.label(), graph, route),
            None => no_path_line(criterion.label()),
        });
    }

    lines.push(match select_compromise(routes, &request.priority) {
        Some((_, route)) => format_route_line(COMPROMISE_LABEL, graph, route),
        None => no_path_line(COMPROMISE_LABEL),
    });
    lines.push(String::new());
    lines
}

/// Plan every request independently and render the full report.
pub fn render_report(graph: &Graph, requests: &[RouteRequest]) -> String {
    let mut report = String::new();
    for request in requests {
        let routes = all_routes(graph, &request.start, &request.goal);
        for line in render_request_lines(graph, request, &routes) {
            let _ = writeln!(report, "{line}");
        }
    }
    report
}

/// Write a rendered report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::PriorityOrder;
    use crate::routing::plan_routes;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_location(1, "A");
        graph.add_location(2, "B");
        graph.add_location(3, "C");
        graph.add_road(1, 2, Weights::new(10, 5, 2));
        graph.add_road(2, 3, Weights::new(10, 5, 2));
        graph.add_road(1, 3, Weights::new(25, 1, 1));
        graph
    }

    #[test]
    fn request_lines_cover_every_criterion_and_compromise() {
        let graph = triangle();
        let request = RouteRequest::new("A", "C").with_priority(PriorityOrder::parse("(T,D)"));
        let routes = all_routes(&graph, "A", "C");
        let lines = render_request_lines(&graph, &request, &routes);
        assert_eq!(
            lines,
            vec![
                "DISTANCE: A -> B -> C | D=20, T=10, C=4",
                "TIME: A -> C | D=25, T=1, C=1",
                "COST: A -> C | D=25, T=1, C=1",
                "COMPROMISE: A -> C | D=25, T=1, C=1",
                "",
            ]
        );
    }

    #[test]
    fn empty_route_set_renders_single_line() {
        let graph = triangle();
        let request = RouteRequest::new("A", "Nowhere");
        let lines = render_request_lines(&graph, &request, &RouteSet::new());
        assert_eq!(lines, vec!["No path between A and Nowhere"]);
    }

    #[test]
    fn unmatched_priority_renders_no_compromise() {
        let graph = triangle();
        let request = RouteRequest::new("A", "B").with_priority(PriorityOrder::parse("(?)"));
        let routes = all_routes(&graph, "A", "B");
        let lines = render_request_lines(&graph, &request, &routes);
        assert_eq!(lines[3], "COMPROMISE: no path");
    }

    #[test]
    fn unnamed_locations_render_placeholder() {
        let mut graph = triangle();
        graph.add_road(3, 40, Weights::new(1, 1, 1));
        assert_eq!(format_path(&graph, &[1, 3, 40]), "A -> C -> <unknown>");
    }

    #[test]
    fn report_keeps_processing_after_failed_request() {
        let graph = triangle();
        let requests = vec![
            RouteRequest::new("A", "Z"),
            RouteRequest::new("B", "B"),
        ];
        let report = render_report(&graph, &requests);
        let expected = "\
No path between A and Z
DISTANCE: B | D=0, T=0, C=0
TIME: B | D=0, T=0, C=0
COST: B | D=0, T=0, C=0
COMPROMISE: B | D=0, T=0, C=0

";
        assert_eq!(report, expected);
    }

    #[test]
    fn summary_plain_matches_report_lines() {
        let graph = triangle();
        let request = RouteRequest::new("A", "C").with_priority(PriorityOrder::parse("(C)"));
        let plan = plan_routes(&graph, &request).unwrap();
        let summary = RouteSummary::from_plan(&graph, &plan).unwrap();

        assert_eq!(summary.start.name.as_deref(), Some("A"));
        assert_eq!(summary.goal.id, 3);
        assert_eq!(summary.compromise, Some(Criterion::Cost));

        let rendered = summary.render(RouteRenderMode::PlainText);
        assert!(rendered.contains("DISTANCE: A -> B -> C | D=20, T=10, C=4\n"));
        assert!(rendered.ends_with("COMPROMISE: A -> C | D=25, T=1, C=1\n"));
    }

    #[test]
    fn summary_rich_marks_compromise() {
        let graph = triangle();
        let plan = plan_routes(&graph, &RouteRequest::new("A", "C")).unwrap();
        let summary = RouteSummary::from_plan(&graph, &plan).unwrap();
        let rich = summary.render(RouteRenderMode::RichText);
        assert!(rich.contains("**DISTANCE** (compromise)"));
        assert!(!rich.contains("**TIME** (compromise)"));
    }

    #[test]
    fn summary_serialises_criteria_in_snake_case() {
        let graph = triangle();
        let plan = plan_routes(&graph, &RouteRequest::new("A", "C")).unwrap();
        let summary = RouteSummary::from_plan(&graph, &plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["compromise"], "distance");
        assert_eq!(value["routes"][1]["criterion"], "time");
        assert_eq!(value["routes"][0]["totals"]["distance"], 20);
        assert_eq!(value["start"]["name"], "A");
    }

    #[test]
    fn write_report_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("output.txt");
        write_report(&path, "hello\n").expect("report written");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
