//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::graph::SharedRouteGraph;
use crate::planner::PlannerConfig;
use crate::underground::Terminals;

/// Shared application state.
///
/// The graph lives behind a snapshot-swapping handle, so a reload never
/// mutates a graph that in-flight queries are reading.
#[derive(Clone)]
pub struct AppState {
    /// Current station graph
    pub graph: SharedRouteGraph,

    /// Planner tuning
    pub config: Arc<PlannerConfig>,

    /// Terminal set used when rebuilding the graph
    pub terminals: Arc<Terminals>,

    /// Catalog source, kept for explicit reloads
    pub catalog_path: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: SharedRouteGraph,
        config: PlannerConfig,
        terminals: Terminals,
        catalog_path: PathBuf,
    ) -> Self {
        Self {
            graph,
            config: Arc::new(config),
            terminals: Arc::new(terminals),
            catalog_path: Arc::new(catalog_path),
        }
    }
}
