//! Schema errors raised while normalizing a tool export.

use thiserror::Error;

use crate::source::AnnotationSource;

/// A tool export does not have the shape its adapter expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An expected source column is absent from the raw table.
    #[error("{tool} export is missing expected column '{column}'")]
    MissingColumn {
        tool: AnnotationSource,
        column: String,
    },

    /// Two raw columns normalize to the same name.
    #[error("{tool} export has more than one column normalizing to '{column}'")]
    DuplicateColumn {
        tool: AnnotationSource,
        column: String,
    },
}

/// Result type for schema checks.
pub type Result<T> = std::result::Result<T, SchemaError>;
