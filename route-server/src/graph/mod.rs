//! Station graph construction and lookup.
//!
//! Nodes are normalized station names. Edges connect consecutive stations
//! on the same catalog route, labeled with the service that carries them,
//! and every pair of London terminals gains an additional synthetic
//! Underground edge. The graph is built once from a catalog and is
//! read-only afterwards.

mod shared;

pub use shared::SharedRouteGraph;

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::{RouteLabel, StationName};
use crate::underground::Terminals;

/// Undirected station graph with per-hop route labels.
///
/// Adjacency iteration follows discovery order, and each directed station
/// pair keeps its labels in discovery order; the first label is the one
/// the path finder reports for a hop. Symmetric by construction: every
/// edge is stored in both directions with matching label lists.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: IndexMap<StationName, IndexMap<StationName, Vec<RouteLabel>>>,
}

impl RouteGraph {
    /// Build the graph from a catalog plus a set of interchangeable
    /// terminals.
    pub fn build(catalog: &RouteCatalog, terminals: &Terminals) -> Self {
        let mut graph = RouteGraph::default();

        for route in catalog.routes() {
            let label = RouteLabel::Service {
                id: route.id.clone(),
                description: route.description.clone(),
            };
            for pair in route.stations.windows(2) {
                graph.add_edge(&pair[0], &pair[1], &label);
            }
        }

        // Synthetic transfer edges between every pair of terminals, in
        // addition to any real edges between the same pair.
        let terminal_list: Vec<&StationName> = terminals.iter().collect();
        for (i, &a) in terminal_list.iter().enumerate() {
            for &b in &terminal_list[i + 1..] {
                graph.add_edge(a, b, &RouteLabel::Underground);
            }
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built station graph"
        );

        graph
    }

    /// Insert a bidirectional edge, appending the label in both
    /// directions. A degenerate pair (station listed twice in a row)
    /// inserts nothing.
    fn add_edge(&mut self, a: &StationName, b: &StationName, label: &RouteLabel) {
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.clone())
            .or_default()
            .entry(b.clone())
            .or_default()
            .push(label.clone());
        self.adjacency
            .entry(b.clone())
            .or_default()
            .entry(a.clone())
            .or_default()
            .push(label.clone());
    }

    /// Whether the station is a node in the graph.
    pub fn contains(&self, station: &StationName) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Stations in discovery order.
    pub fn stations(&self) -> impl Iterator<Item = &StationName> {
        self.adjacency.keys()
    }

    /// Stations adjacent to the given station, in discovery order.
    pub fn neighbors(&self, station: &StationName) -> impl Iterator<Item = &StationName> {
        self.adjacency.get(station).into_iter().flat_map(IndexMap::keys)
    }

    /// Every label serving the directed hop, in discovery order.
    ///
    /// Empty when the stations are not adjacent.
    pub fn labels(&self, from: &StationName, to: &StationName) -> &[RouteLabel] {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .map_or(&[], Vec::as_slice)
    }

    /// The label the path finder uses for the directed hop: the first one
    /// discovered during construction.
    pub fn first_label(&self, from: &StationName, to: &StationName) -> Option<&RouteLabel> {
        self.labels(from, to).first()
    }

    /// Number of stations in the graph.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (adjacent pairs, however many labels
    /// serve them).
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(IndexMap::len).sum();
        directed / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteId};

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn route(id: &str, description: &str, stations: &[&str]) -> Route {
        Route {
            id: RouteId::parse(id).unwrap(),
            description: description.to_string(),
            stations: stations.iter().map(|s| station(s)).collect(),
        }
    }

    fn graph_of(routes: Vec<Route>, terminals: Terminals) -> RouteGraph {
        RouteGraph::build(&RouteCatalog::from_routes(routes), &terminals)
    }

    #[test]
    fn consecutive_stations_are_adjacent() {
        let graph = graph_of(
            vec![route("R1", "Main Line", &["A", "B", "C"])],
            Terminals::new(),
        );

        assert!(graph.contains(&station("A")));
        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let from_b: Vec<&StationName> = graph.neighbors(&station("B")).collect();
        assert_eq!(from_b, vec![&station("A"), &station("C")]);

        // Non-consecutive stations are not adjacent
        assert!(graph.labels(&station("A"), &station("C")).is_empty());
    }

    #[test]
    fn edge_labels_carry_route_and_description() {
        let graph = graph_of(
            vec![route("R1", "Main Line", &["A", "B"])],
            Terminals::new(),
        );

        let label = graph.first_label(&station("A"), &station("B")).unwrap();
        assert_eq!(label.to_string(), "R1 (Main Line)");
    }

    #[test]
    fn adjacency_is_symmetric_with_matching_labels() {
        let graph = graph_of(
            vec![
                route("R1", "First", &["A", "B", "C"]),
                route("R2", "Second", &["B", "A"]),
            ],
            Terminals::new(),
        );

        for a in graph.stations() {
            for b in graph.neighbors(a) {
                let forward = graph.labels(a, b);
                let backward = graph.labels(b, a);
                assert!(!forward.is_empty());
                assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn shared_pair_keeps_labels_in_catalog_order() {
        let graph = graph_of(
            vec![
                route("R1", "First", &["A", "B"]),
                route("R2", "Second", &["A", "B"]),
            ],
            Terminals::new(),
        );

        let labels = graph.labels(&station("A"), &station("B"));
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].short(), "R1");
        assert_eq!(labels[1].short(), "R2");
        assert_eq!(
            graph.first_label(&station("A"), &station("B")).unwrap().short(),
            "R1"
        );
    }

    #[test]
    fn underground_clique_is_complete() {
        let graph = graph_of(Vec::new(), Terminals::london());
        let terminals: Vec<StationName> = Terminals::london().iter().cloned().collect();

        assert_eq!(graph.station_count(), 13);
        assert_eq!(graph.edge_count(), 13 * 12 / 2);

        for (i, a) in terminals.iter().enumerate() {
            for b in &terminals[i + 1..] {
                assert_eq!(graph.labels(a, b), &[RouteLabel::Underground]);
                assert_eq!(graph.labels(b, a), &[RouteLabel::Underground]);
            }
        }
    }

    #[test]
    fn real_route_between_terminals_precedes_underground() {
        let graph = graph_of(
            vec![route(
                "R1",
                "Cross London",
                &["LONDON VICTORIA", "LONDON BRIDGE"],
            )],
            Terminals::london(),
        );

        let labels = graph.labels(&station("LONDON VICTORIA"), &station("LONDON BRIDGE"));
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].short(), "R1");
        assert_eq!(labels[1], RouteLabel::Underground);
    }

    #[test]
    fn repeated_station_adds_no_self_edge() {
        let graph = graph_of(
            vec![route("R1", "Looped", &["A", "A", "B"])],
            Terminals::new(),
        );

        let from_a: Vec<&StationName> = graph.neighbors(&station("A")).collect();
        assert_eq!(from_a, vec![&station("B")]);
        assert!(graph.labels(&station("A"), &station("A")).is_empty());
    }

    #[test]
    fn single_station_route_adds_no_nodes() {
        let graph = graph_of(vec![route("R1", "Stub", &["A"])], Terminals::new());
        assert!(!graph.contains(&station("A")));
        assert_eq!(graph.station_count(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Route, RouteId};
    use proptest::prelude::*;

    fn station_names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(
            proptest::string::string_regex("[A-Z]{3,6}").unwrap(),
            2..6,
        )
    }

    fn catalogs() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
        proptest::collection::vec(
            (
                proptest::string::string_regex("R[0-9]{1,2}").unwrap(),
                station_names(),
            ),
            1..5,
        )
    }

    fn build(entries: Vec<(String, Vec<String>)>) -> RouteGraph {
        let routes: Vec<Route> = entries
            .into_iter()
            .map(|(id, stations)| Route {
                id: RouteId::parse(&id).unwrap(),
                description: "Generated".to_string(),
                stations: stations
                    .iter()
                    .map(|s| StationName::parse(s).unwrap())
                    .collect(),
            })
            .collect();
        RouteGraph::build(&RouteCatalog::from_routes(routes), &Terminals::london())
    }

    proptest! {
        /// Every edge exists in both directions with identical label lists.
        #[test]
        fn symmetry(entries in catalogs()) {
            let graph = build(entries);
            for a in graph.stations() {
                for b in graph.neighbors(a) {
                    prop_assert!(graph.neighbors(b).any(|n| n == a));
                    prop_assert!(!graph.labels(a, b).is_empty());
                    prop_assert_eq!(graph.labels(a, b), graph.labels(b, a));
                }
            }
        }

        /// The terminal clique survives whatever the catalog contains.
        #[test]
        fn underground_edges_always_present(entries in catalogs()) {
            let graph = build(entries);
            let terminals: Vec<StationName> = Terminals::london().iter().cloned().collect();
            for (i, a) in terminals.iter().enumerate() {
                for b in &terminals[i + 1..] {
                    prop_assert!(graph.labels(a, b).contains(&RouteLabel::Underground));
                }
            }
        }
    }
}
