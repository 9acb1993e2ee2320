use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::criterion::{Criterion, Weights};
use crate::graph::{Graph, LocationId};

/// Path between two locations together with the totals of every weight
/// along the roads it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub steps: Vec<LocationId>,
    pub totals: Weights,
}

impl Route {
    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<LocationId> {
        self.steps.first().copied()
    }

    pub fn goal(&self) -> Option<LocationId> {
        self.steps.last().copied()
    }
}

/// Best known way of reaching a node during the search.
#[derive(Debug, Clone, Copy)]
struct Label {
    key: u64,
    totals: Weights,
    parent: Option<LocationId>,
}

/// Run Dijkstra's algorithm minimizing the weight selected by `criterion`.
///
/// The totals of all three weights are carried along with the key and are
/// replaced together with it, so they always describe the path picked for
/// `criterion` rather than independent per-weight minima.
///
/// Returns `None` when either endpoint is not in the graph or the target is
/// unreachable.
pub fn find_optimal_route(
    graph: &Graph,
    source: LocationId,
    target: LocationId,
    criterion: Criterion,
) -> Option<Route> {
    if !graph.contains(source) || !graph.contains(target) {
        debug!(source, target, "route endpoint missing from graph");
        return None;
    }

    if source == target {
        return Some(Route {
            steps: vec![source],
            totals: Weights::default(),
        });
    }

    let mut labels: HashMap<LocationId, Label> = HashMap::new();
    let mut queue = BinaryHeap::new();

    labels.insert(
        source,
        Label {
            key: 0,
            totals: Weights::default(),
            parent: None,
        },
    );
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        let current = match labels.get(&entry.node) {
            Some(label) if label.key < entry.cost => continue,
            Some(label) => *label,
            None => continue,
        };

        if entry.node == target {
            let steps = reconstruct_path(&labels, source, target);
            debug!(%criterion, hops = steps.len().saturating_sub(1), key = current.key, "route found");
            return Some(Route {
                steps,
                totals: current.totals,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next_key = current.key.saturating_add(criterion.weight(&edge.weights));
            let improves = labels
                .get(&edge.target)
                .map_or(true, |existing| next_key < existing.key);

            if improves {
                labels.insert(
                    edge.target,
                    Label {
                        key: next_key,
                        totals: current.totals.saturating_add(edge.weights),
                        parent: Some(entry.node),
                    },
                );
                queue.push(QueueEntry::new(edge.target, next_key));
            }
        }
    }

    debug!(%criterion, source, target, "target unreachable");
    None
}

fn reconstruct_path(
    labels: &HashMap<LocationId, Label>,
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = labels.get(&node).and_then(|label| label.parent);
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: LocationId,
    cost: u64,
}

impl QueueEntry {
    fn new(node: LocationId, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop the lower location id first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
