//! Exhaustive path search.
//!
//! Depth-bounded depth-first search returning every simple path between
//! two stations, each hop annotated with the route serving it.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{Path, PathStop, RouteLabel, StationName};
use crate::graph::RouteGraph;

/// Find every simple path from `start` to `end` within `max_depth` hops.
///
/// Exploration never revisits a station within one path, so the search
/// terminates and no returned path contains a cycle. A branch is recorded
/// and stopped as soon as it reaches `end`; it is never extended past the
/// goal. When several routes serve the same hop, the hop is annotated
/// with the first label in discovery order.
///
/// Returns an empty list when either endpoint is not a node in the graph.
/// When `start` equals `end`, the single trivial path is returned.
pub fn find_paths<'a>(
    graph: &'a RouteGraph,
    start: &'a StationName,
    end: &'a StationName,
    max_depth: usize,
) -> Vec<Path> {
    if !graph.contains(start) || !graph.contains(end) {
        return Vec::new();
    }

    let mut search = PathSearch {
        graph,
        end,
        max_depth,
        found: Vec::new(),
    };
    let mut trail: Vec<(&StationName, Option<&RouteLabel>)> = vec![(start, None)];
    let mut visited: HashSet<&StationName> = HashSet::new();
    visited.insert(start);

    search.walk(&mut trail, &mut visited);

    trace!(
        start = %start,
        end = %end,
        paths = search.found.len(),
        "path search finished"
    );

    search.found
}

struct PathSearch<'a> {
    graph: &'a RouteGraph,
    end: &'a StationName,
    max_depth: usize,
    found: Vec<Path>,
}

impl<'a> PathSearch<'a> {
    fn walk(
        &mut self,
        trail: &mut Vec<(&'a StationName, Option<&'a RouteLabel>)>,
        visited: &mut HashSet<&'a StationName>,
    ) {
        let Some(&(current, _)) = trail.last() else {
            return;
        };

        if current == self.end {
            self.found.push(record(trail));
            return;
        }
        if trail.len() - 1 >= self.max_depth {
            return;
        }

        let graph = self.graph;
        for neighbor in graph.neighbors(current) {
            if visited.contains(neighbor) {
                continue;
            }
            let Some(label) = graph.first_label(current, neighbor) else {
                continue;
            };

            visited.insert(neighbor);
            trail.push((neighbor, Some(label)));
            self.walk(trail, visited);
            trail.pop();
            visited.remove(neighbor);
        }
    }
}

fn record(trail: &[(&StationName, Option<&RouteLabel>)]) -> Path {
    Path::new(
        trail
            .iter()
            .map(|(station, label)| PathStop {
                station: (*station).clone(),
                label: label.cloned(),
            })
            .collect(),
    )
}
