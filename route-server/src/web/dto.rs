//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::Itinerary;

/// Request to plan a journey between two named stations.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin station name (exact, as resolved by the caller)
    pub origin: String,

    /// Destination station name
    pub destination: String,
}

/// Response for a journey plan.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// Whether a route was found
    pub found: bool,

    /// Rendered itinerary text, when found
    pub itinerary: Option<String>,

    /// One-line station summary, when found
    pub summary: Option<String>,

    /// Number of service changes, when found
    pub route_changes: Option<usize>,
}

impl PlanJourneyResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            found: true,
            itinerary: Some(itinerary.render()),
            summary: Some(itinerary.summary()),
            route_changes: Some(itinerary.route_changes()),
        }
    }

    pub fn no_route() -> Self {
        Self {
            found: false,
            itinerary: None,
            summary: None,
            route_changes: None,
        }
    }
}

/// Response for a catalog reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Routes in the reloaded catalog
    pub routes: usize,

    /// Stations in the rebuilt graph
    pub stations: usize,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route_response_shape() {
        let value = serde_json::to_value(PlanJourneyResponse::no_route()).unwrap();
        assert_eq!(value["found"], false);
        assert!(value["itinerary"].is_null());
        assert!(value["summary"].is_null());
        assert!(value["route_changes"].is_null());
    }

    #[test]
    fn request_parses_from_json() {
        let req: PlanJourneyRequest =
            serde_json::from_str(r#"{"origin": "Norwich", "destination": "London Euston"}"#)
                .unwrap();
        assert_eq!(req.origin, "Norwich");
        assert_eq!(req.destination, "London Euston");
    }
}
