//! Route planning pipeline.
//!
//! Turns the station graph plus two station names into a rendered
//! itinerary: exhaustive path search, selection by fewest route changes,
//! segmentation by service, and text rendering.

mod config;
mod format;
mod rank;
mod search;
mod segment;

pub use config::PlannerConfig;
pub use format::format_itinerary;
pub use rank::select_optimal;
pub use search::find_paths;
pub use segment::{Segment, SegmentLabel, segment_path};

use tracing::debug;

use crate::domain::{InvalidStation, Path, StationName};
use crate::graph::RouteGraph;

/// Error from a plan query.
///
/// Only malformed input is an error; failing to find a route is the
/// ordinary [`PlanOutcome::NoRoute`] value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination is not a usable station name
    #[error("invalid {field} station: {source}")]
    InvalidStation {
        field: &'static str,
        source: InvalidStation,
    },
}

/// Outcome of a plan query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A usable route between the two stations.
    Route(Itinerary),

    /// The origin or destination is unknown, or no path exists within the
    /// configured depth. Callers handle this conversationally; the two
    /// causes are deliberately not distinguished.
    NoRoute,
}

/// A selected route, ready to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    path: Path,
    segments: Vec<Segment>,
}

impl Itinerary {
    fn from_path(path: Path) -> Self {
        let segments = segment_path(&path);
        Self { path, segments }
    }

    /// The chosen hop-by-hop path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path collapsed into per-service segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of service changes along the route.
    pub fn route_changes(&self) -> usize {
        self.path.route_changes()
    }

    /// The rendered, line-oriented itinerary text.
    pub fn render(&self) -> String {
        format_itinerary(&self.segments)
    }

    /// One-line station summary, `A -> B -> C`.
    pub fn summary(&self) -> String {
        self.path.station_line()
    }
}

/// Route planner over a built graph.
///
/// Cheap to construct per query; holds no state beyond its borrows, so a
/// fresh planner can be created against the current graph snapshot for
/// every request.
pub struct RoutePlanner<'a> {
    graph: &'a RouteGraph,
    config: &'a PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(graph: &'a RouteGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Plan a route between two free-text station names.
    ///
    /// Names are normalized before lookup but must already be resolved to
    /// exact station names; no fuzzy matching happens here. An origin
    /// equal to the destination yields the trivial single-station route.
    pub fn plan(&self, origin: &str, destination: &str) -> Result<PlanOutcome, PlanError> {
        let origin = StationName::parse(origin).map_err(|source| PlanError::InvalidStation {
            field: "origin",
            source,
        })?;
        let destination =
            StationName::parse(destination).map_err(|source| PlanError::InvalidStation {
                field: "destination",
                source,
            })?;

        let candidates = find_paths(self.graph, &origin, &destination, self.config.max_depth);
        let Some(best) = select_optimal(candidates) else {
            debug!(%origin, %destination, "no route found");
            return Ok(PlanOutcome::NoRoute);
        };

        Ok(PlanOutcome::Route(Itinerary::from_path(best)))
    }
}
