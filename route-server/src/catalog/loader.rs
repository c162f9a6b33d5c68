//! Route catalog loading.
//!
//! Parses the tabular (route id, route description, station) source into
//! an ordered map of routes. One row describes one station within one
//! route; rows for a route are expected in calling order.

use std::io;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Route, RouteId, StationName};

use super::error::CatalogError;

/// One row of the catalog source.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Route Number")]
    route_number: String,

    #[serde(rename = "Route Description")]
    route_description: String,

    #[serde(rename = "Station")]
    station: String,
}

/// The loaded route catalog: route id → route, in file order.
///
/// Built once at startup (or on an explicit reload) and immutable
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: IndexMap<RouteId, Route>,
}

impl RouteCatalog {
    /// Load the catalog from a CSV file on disk.
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the catalog from any CSV source.
    ///
    /// Rows sharing a route id accumulate stations in row order. The first
    /// row of a route must carry its description; later rows may leave it
    /// blank. Any row with a missing or empty required field aborts the
    /// load.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut routes: IndexMap<RouteId, Route> = IndexMap::new();

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let row: CatalogRow = record.deserialize(Some(&headers))?;

            let id = RouteId::parse(&row.route_number).map_err(|_| {
                CatalogError::MissingField {
                    line,
                    field: "Route Number",
                }
            })?;
            let station = StationName::parse(&row.station).map_err(|_| {
                CatalogError::MissingField {
                    line,
                    field: "Station",
                }
            })?;

            let route = routes.entry(id.clone()).or_insert_with(|| Route {
                id,
                description: String::new(),
                stations: Vec::new(),
            });

            if route.description.is_empty() {
                let description = row.route_description.trim();
                if description.is_empty() {
                    return Err(CatalogError::MissingField {
                        line,
                        field: "Route Description",
                    });
                }
                route.description = description.to_string();
            }

            route.stations.push(station);
        }

        debug!(routes = routes.len(), "loaded route catalog");

        Ok(Self { routes })
    }

    /// Build a catalog from already-constructed routes.
    ///
    /// Intended for synthetic catalogs in tests and tools; a route id that
    /// appears twice keeps the later route.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|route| (route.id.clone(), route))
                .collect(),
        }
    }

    /// Routes in file order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Look up a route by id.
    pub fn get(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Number of routes in the catalog.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
