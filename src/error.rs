//! Error types for catalog loading.
//!
//! The engines themselves are total functions and cannot fail; loading
//! the externally-authored catalog is the only fallible surface in the
//! crate.

use thiserror::Error;

/// Errors that can occur while loading a tower catalog.
///
/// # Examples
///
/// ```rust
/// use towergauge::{Catalog, CatalogError};
///
/// let err = Catalog::from_json_str("{not json").unwrap_err();
/// assert!(matches!(err, CatalogError::Parse(_)));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document itself was not valid JSON, or its top level
    /// did not have the expected shape.
    ///
    /// Individually malformed tower records do not produce this error;
    /// they are skipped during loading.
    #[error("malformed tower catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but contained no usable tower records.
    #[error("catalog contains no towers")]
    Empty,

    /// The catalog source could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Empty;
        assert_eq!(err.to_string(), "catalog contains no towers");
    }

    #[test]
    fn test_parse_error_wraps_serde() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::from(inner);
        assert!(err.to_string().starts_with("malformed tower catalog"));
    }
}
