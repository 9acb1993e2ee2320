//! Parser for the sectioned road network input format.
//!
//! ```text
//! [CITIES]
//! 1: Alpha
//! 2: Beta
//! [ROADS]
//! 1-2: 10, 5, 2
//! [REQUESTS]
//! Alpha -> Beta | (T, D)
//! ```
//!
//! Malformed records are logged and skipped; they never abort parsing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::criterion::{PriorityOrder, Weights};
use crate::error::{Error, Result};
use crate::graph::{Graph, LocationId};
use crate::routing::RouteRequest;

/// Graph and queries read from an input document.
#[derive(Debug, Clone, Default)]
pub struct NetworkInput {
    pub graph: Graph,
    pub requests: Vec<RouteRequest>,
    /// Number of records that were malformed and ignored.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Cities,
    Roads,
    Requests,
    Unknown,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "CITIES" => Section::Cities,
            "ROADS" => Section::Roads,
            "REQUESTS" => Section::Requests,
            _ => Section::Unknown,
        }
    }
}

/// Read and parse an input file.
pub fn load_network(path: &Path) -> Result<NetworkInput> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;

    let input = parse_network(&text);
    debug!(
        path = %path.display(),
        locations = input.graph.location_count(),
        roads = input.graph.road_count(),
        requests = input.requests.len(),
        skipped = input.skipped,
        "loaded road network"
    );
    Ok(input)
}

/// Parse an input document held in memory.
pub fn parse_network(text: &str) -> NetworkInput {
    let mut input = NetworkInput::default();
    let mut section = Section::Preamble;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Section::from_header(header);
            if section == Section::Unknown {
                warn!(line = line_number, header, "ignoring unknown section");
            }
            continue;
        }

        let outcome = match section {
            Section::Preamble | Section::Unknown => {
                debug!(line = line_number, "ignoring line outside known sections");
                Ok(())
            }
            Section::Cities => {
                parse_city(line).map(|(id, name)| input.graph.add_location(id, name))
            }
            Section::Roads => {
                parse_road(line).map(|(a, b, weights)| input.graph.add_road(a, b, weights))
            }
            Section::Requests => parse_request(line).map(|request| input.requests.push(request)),
        };

        if let Err(reason) = outcome {
            warn!(line = line_number, record = line, %reason, "skipping malformed record");
            input.skipped += 1;
        }
    }

    input
}

fn parse_city(line: &str) -> std::result::Result<(LocationId, &str), String> {
    let (id, name) = line
        .split_once(':')
        .ok_or_else(|| "expected `id: name`".to_string())?;
    let id = parse_id(id)?;
    let name = name.trim();
    if name.is_empty() {
        return Err("location name is empty".to_string());
    }
    Ok((id, name))
}

fn parse_road(line: &str) -> std::result::Result<(LocationId, LocationId, Weights), String> {
    let (ends, params) = line
        .split_once(':')
        .ok_or_else(|| "expected `idA-idB: distance,time,cost`".to_string())?;

    let ends: Vec<&str> = ends.split('-').collect();
    let [a, b] = ends.as_slice() else {
        return Err("expected exactly two location ids separated by `-`".to_string());
    };
    let a = parse_id(a)?;
    let b = parse_id(b)?;

    let weights = params
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(|param| {
            param
                .parse::<u64>()
                .map_err(|err| format!("invalid weight `{param}`: {err}"))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match weights.as_slice() {
        [distance, time, cost, ..] => Ok((a, b, Weights::new(*distance, *time, *cost))),
        _ => Err(format!(
            "expected three weights (distance,time,cost), found {}",
            weights.len()
        )),
    }
}

fn parse_request(line: &str) -> std::result::Result<RouteRequest, String> {
    let (route, priority) = match line.split_once('|') {
        Some((route, priority)) => (route, PriorityOrder::parse(priority)),
        None => (line, PriorityOrder::default()),
    };

    let (start, goal) = route
        .split_once("->")
        .ok_or_else(|| "expected `Start -> End`".to_string())?;

    Ok(RouteRequest::new(start.trim(), goal.trim()).with_priority(priority))
}

fn parse_id(value: &str) -> std::result::Result<LocationId, String> {
    let value = value.trim();
    value
        .parse::<LocationId>()
        .map_err(|err| format!("invalid location id `{value}`: {err}"))
}
