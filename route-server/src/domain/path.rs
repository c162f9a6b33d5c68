//! Candidate paths produced by the path finder.

use super::route::RouteLabel;
use super::station::StationName;

/// One element of a path: a station, and the route used to reach it from
/// its predecessor.
///
/// The label is `None` only for the origin, which has no incoming hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStop {
    pub station: StationName,
    pub label: Option<RouteLabel>,
}

/// An ordered walk through the graph from origin to destination.
///
/// Paths are produced per query and never persisted. A path visits each
/// station at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stops: Vec<PathStop>,
}

impl Path {
    pub fn new(stops: Vec<PathStop>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[PathStop] {
        &self.stops
    }

    /// Number of stations visited.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of edges traversed; zero for a trivial single-station path.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&StationName> {
        self.stops.first().map(|stop| &stop.station)
    }

    pub fn terminus(&self) -> Option<&StationName> {
        self.stops.last().map(|stop| &stop.station)
    }

    /// Count of transitions where a hop's label differs from the previous
    /// hop's label, i.e. how many times the traveller changes service.
    ///
    /// The origin's empty label is not a transition.
    pub fn route_changes(&self) -> usize {
        let mut changes = 0;
        let mut last: Option<&RouteLabel> = None;

        for stop in &self.stops {
            let Some(label) = stop.label.as_ref() else {
                continue;
            };
            if let Some(prev) = last {
                if prev != label {
                    changes += 1;
                }
            }
            last = Some(label);
        }

        changes
    }

    /// The visited stations joined with `" -> "`, for one-line summaries.
    pub fn station_line(&self) -> String {
        self.stops
            .iter()
            .map(|stop| stop.station.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
