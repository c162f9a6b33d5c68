//! Route identity and edge label types.

use std::fmt;

use super::station::StationName;

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A route identifier as published in the catalog (e.g. "R12").
///
/// Identifiers are opaque; the only validation is that they are non-empty
/// after trimming.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidRouteId {
                reason: "route id cannot be empty",
            });
        }
        Ok(RouteId(trimmed.to_string()))
    }

    /// Returns the route id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One published line: an identifier, a human-readable description, and
/// the ordered stations it calls at.
///
/// Routes are created once at catalog load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub description: String,
    pub stations: Vec<StationName>,
}

/// The annotation on a graph edge: which service carries the hop.
///
/// `Service` edges come from catalog routes and render with their
/// description, e.g. `R2 (Great Eastern Main Line)`. `Underground` edges
/// are the synthetic cross-London connectors between terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLabel {
    Service { id: RouteId, description: String },
    Underground,
}

impl RouteLabel {
    /// The short form used when grouping and rendering itineraries: the
    /// bare route id, or `Underground Route` unchanged.
    pub fn short(&self) -> &str {
        match self {
            RouteLabel::Service { id, .. } => id.as_str(),
            RouteLabel::Underground => "Underground Route",
        }
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLabel::Service { id, description } => write!(f, "{} ({})", id, description),
            RouteLabel::Underground => f.write_str("Underground Route"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_route_id_trims() {
        let id = RouteId::parse("  R7 ").unwrap();
        assert_eq!(id.as_str(), "R7");
    }

    #[test]
    fn reject_empty_route_id() {
        assert!(RouteId::parse("").is_err());
        assert!(RouteId::parse("   ").is_err());
    }

    #[test]
    fn service_label_display() {
        let label = RouteLabel::Service {
            id: RouteId::parse("R3").unwrap(),
            description: "West Anglia Main Line".to_string(),
        };
        assert_eq!(label.to_string(), "R3 (West Anglia Main Line)");
        assert_eq!(label.short(), "R3");
    }

    #[test]
    fn underground_label_display() {
        assert_eq!(RouteLabel::Underground.to_string(), "Underground Route");
        assert_eq!(RouteLabel::Underground.short(), "Underground Route");
    }

    #[test]
    fn label_equality() {
        let a = RouteLabel::Service {
            id: RouteId::parse("R1").unwrap(),
            description: "x".to_string(),
        };
        let b = RouteLabel::Service {
            id: RouteId::parse("R1").unwrap(),
            description: "x".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, RouteLabel::Underground);
    }
}
