use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::criterion::Weights;

/// Numeric identifier for a location, supplied by the input data.
pub type LocationId = i64;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Named location in the road network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Directed half of an undirected road, stored in the adjacency of its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: LocationId,
    pub weights: Weights,
}

/// Road network holding locations and their undirected, weighted roads.
///
/// The graph is populated once through [`Graph::add_location`] and
/// [`Graph::add_road`] and then only read by the planners.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: BTreeMap<LocationId, Location>,
    name_to_id: HashMap<String, LocationId>,
    adjacency: HashMap<LocationId, Vec<Edge>>,
    road_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location. The name is trimmed; reusing an id or a name
    /// overwrites the previous registration.
    pub fn add_location(&mut self, id: LocationId, name: &str) {
        let name = name.trim().to_string();

        if let Some(previous) = self.locations.get(&id) {
            if previous.name != name && self.name_to_id.get(&previous.name) == Some(&id) {
                self.name_to_id.remove(&previous.name);
            }
        }

        self.name_to_id.insert(name.clone(), id);
        self.locations.insert(id, Location { id, name });
    }

    /// Add an undirected road. Parallel roads between the same pair are kept
    /// as separate edges.
    pub fn add_road(&mut self, a: LocationId, b: LocationId, weights: Weights) {
        self.adjacency.entry(a).or_default().push(Edge { target: b, weights });
        self.adjacency.entry(b).or_default().push(Edge { target: a, weights });
        self.road_count += 1;
    }

    /// Lookup a location identifier by its case-sensitive, trimmed name.
    pub fn id_for_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name.trim()).copied()
    }

    /// Lookup a location name by identifier.
    pub fn name_for_id(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(|location| location.name.as_str())
    }

    /// Whether `id` belongs to the node set: a registered location or the
    /// endpoint of any road.
    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id) || self.adjacency.contains_key(&id)
    }

    /// Return the edges leaving `id`, in road insertion order.
    pub fn neighbours(&self, id: LocationId) -> &[Edge] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Registered locations ordered by identifier.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Suggest up to `limit` registered names that resemble `name`, best
    /// match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim();
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (strsim::jaro_winkler(needle, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
