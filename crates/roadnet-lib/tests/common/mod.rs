//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use roadnet_lib::{Graph, Weights};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample road network input.
pub fn sample_network_path() -> PathBuf {
    fixtures_dir().join("sample_network.txt")
}

/// Path to the report expected for the sample road network.
#[allow(dead_code)]
pub fn sample_report_path() -> PathBuf {
    fixtures_dir().join("sample_network.expected.txt")
}

/// Three locations where the shortest road pair is slow and expensive:
/// A-B-C is 20 long, the direct A-C road is 25 long but faster and cheaper.
#[allow(dead_code)]
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_location(1, "A");
    graph.add_location(2, "B");
    graph.add_location(3, "C");
    graph.add_road(1, 2, Weights::new(10, 5, 2));
    graph.add_road(2, 3, Weights::new(10, 5, 2));
    graph.add_road(1, 3, Weights::new(25, 1, 1));
    graph
}
