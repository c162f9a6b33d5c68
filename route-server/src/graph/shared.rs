//! Shared handle for the reloadable graph.

use std::sync::{Arc, RwLock};

use super::RouteGraph;

/// Thread-safe handle to the current graph snapshot.
///
/// Queries clone the inner `Arc` and run against an immutable snapshot;
/// an explicit reload builds a fresh graph and swaps it in atomically, so
/// in-flight queries keep the snapshot they started with. The graph
/// itself is never mutated in place.
#[derive(Debug, Clone)]
pub struct SharedRouteGraph {
    inner: Arc<RwLock<Arc<RouteGraph>>>,
}

impl SharedRouteGraph {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<RouteGraph> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the snapshot with a freshly built graph.
    pub fn replace(&self, graph: RouteGraph) {
        let next = Arc::new(graph);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RouteCatalog;
    use crate::domain::{Route, RouteId, StationName};
    use crate::underground::Terminals;

    fn graph_with(stations: &[&str]) -> RouteGraph {
        let route = Route {
            id: RouteId::parse("R1").unwrap(),
            description: "Test Line".to_string(),
            stations: stations
                .iter()
                .map(|s| StationName::parse(s).unwrap())
                .collect(),
        };
        RouteGraph::build(&RouteCatalog::from_routes(vec![route]), &Terminals::new())
    }

    #[test]
    fn current_returns_the_latest_snapshot() {
        let shared = SharedRouteGraph::new(graph_with(&["A", "B"]));
        assert_eq!(shared.current().station_count(), 2);

        shared.replace(graph_with(&["A", "B", "C", "D"]));
        assert_eq!(shared.current().station_count(), 4);
    }

    #[test]
    fn held_snapshots_survive_a_replace() {
        let shared = SharedRouteGraph::new(graph_with(&["A", "B"]));
        let snapshot = shared.current();

        shared.replace(graph_with(&["X", "Y", "Z"]));

        // The old snapshot is still intact for in-flight queries
        assert_eq!(snapshot.station_count(), 2);
        assert!(snapshot.contains(&StationName::parse("A").unwrap()));
        assert_eq!(shared.current().station_count(), 3);
    }

    #[test]
    fn clones_share_the_same_cell() {
        let shared = SharedRouteGraph::new(graph_with(&["A", "B"]));
        let other = shared.clone();

        other.replace(graph_with(&["A", "B", "C"]));
        assert_eq!(shared.current().station_count(), 3);
    }
}
