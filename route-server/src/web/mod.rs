//! Web layer for the route planner.
//!
//! Provides the JSON HTTP endpoints the assistant's dialogue layer calls
//! to plan journeys and to reload the catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
