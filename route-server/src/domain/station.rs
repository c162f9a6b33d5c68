//! Station name types.

use std::fmt;

/// Error returned when normalizing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A normalized station name, used as the graph key for a station.
///
/// Names are trimmed, internal whitespace runs are collapsed to a single
/// space, and the result is uppercased. This type guarantees that any
/// `StationName` value is normalized and non-empty by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationName;
///
/// let norwich = StationName::parse("  norwich ").unwrap();
/// assert_eq!(norwich.as_str(), "NORWICH");
///
/// let stp = StationName::parse("London  St Pancras   Intl").unwrap();
/// assert_eq!(stp.as_str(), "LONDON ST PANCRAS INTL");
///
/// // Blank input is rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Normalize a free-text station name.
    ///
    /// Returns an error if the input contains no non-whitespace characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let mut normalized = String::with_capacity(s.len());

        for word in s.split_whitespace() {
            if !normalized.is_empty() {
                normalized.push(' ');
            }
            for c in word.chars() {
                normalized.extend(c.to_uppercase());
            }
        }

        if normalized.is_empty() {
            return Err(InvalidStation {
                reason: "name must contain at least one non-whitespace character",
            });
        }

        Ok(StationName(normalized))
    }

    /// Returns the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
