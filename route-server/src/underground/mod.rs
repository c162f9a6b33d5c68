//! Interchangeable London terminals.
//!
//! The rail catalog treats each London terminal as a distinct station,
//! but travellers transfer between any two of them via the Underground.
//! This module provides the set of terminals the graph builder links with
//! synthetic Underground edges.

use indexmap::IndexSet;

use crate::domain::StationName;

/// The London terminals connected by cross-London Underground transfer.
const LONDON_TERMINAL_NAMES: [&str; 13] = [
    "LONDON VICTORIA",
    "LONDON BRIDGE",
    "LONDON LIVERPOOL STREET",
    "LONDON EUSTON",
    "LONDON KINGS CROSS",
    "LONDON PADDINGTON",
    "LONDON WATERLOO",
    "LONDON CHARING CROSS",
    "LONDON ST PANCRAS INTL",
    "LONDON MARYLEBONE",
    "LONDON BLACKFRIARS",
    "LONDON FENCHURCH STREET",
    "LONDON CANNON STREET",
];

/// An ordered set of stations treated as mutually interchangeable.
///
/// Iteration follows insertion order, so clique construction over the set
/// is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Terminals {
    names: IndexSet<StationName>,
}

impl Terminals {
    /// Create an empty set (a graph with no synthetic transfers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from the given station names.
    pub fn from_names(names: impl IntoIterator<Item = StationName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// The production set of London terminals.
    pub fn london() -> Self {
        Self {
            names: LONDON_TERMINAL_NAMES
                .iter()
                .filter_map(|name| StationName::parse(name).ok())
                .collect(),
        }
    }

    /// Whether the station is one of the terminals.
    pub fn contains(&self, station: &StationName) -> bool {
        self.names.contains(station)
    }

    /// Terminals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StationName> {
        self.names.iter()
    }

    /// Number of terminals in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
