//! Catalog loading error types.

/// Errors that can occur when loading the route catalog.
///
/// Any malformed row is fatal to the whole load: a partially loaded
/// catalog would build a partial graph that produces silently wrong
/// routes.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog source
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed CSV
    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing a required field
    #[error("catalog line {line}: missing required field `{field}`")]
    MissingField { line: u64, field: &'static str },
}
