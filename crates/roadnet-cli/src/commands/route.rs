//! Route command handler for planning a single query.

use std::path::PathBuf;

use anyhow::{Context, Result};

use roadnet_lib::{
    load_network, plan_routes, Error as RouteError, PriorityOrder, RouteRequest, RouteSummary,
};

use roadnet_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Input file describing the road network.
    pub input: PathBuf,
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Raw priority string, parsed leniently.
    pub priority: Option<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let priority = self
            .priority
            .as_deref()
            .map(PriorityOrder::parse)
            .unwrap_or_default();
        RouteRequest::new(self.from.clone(), self.to.clone()).with_priority(priority)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let input = load_network(&args.input)
        .with_context(|| format!("failed to load input from {}", args.input.display()))?;

    let request = args.to_request();
    let plan = match plan_routes(&input.graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::from_plan(&input.graph, &plan)
        .context("failed to build route summary for display")?;

    format.render_route_result(&summary)
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if let [only] = suggestions {
        message.push_str(&format!(" Did you mean '{only}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. Check that a chain of [ROADS] entries connects them.",
        start, goal
    )
}
