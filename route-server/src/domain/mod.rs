//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated routing data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod path;
mod route;
mod station;

pub use path::{Path, PathStop};
pub use route::{InvalidRouteId, Route, RouteId, RouteLabel};
pub use station::{InvalidStation, StationName};
