//! Error types for the alignment pipeline.

use annot_ingest::IngestError;
use annot_model::{AnnotationSource, SchemaError};
use thiserror::Error;

/// Errors that abort an alignment run.
#[derive(Debug, Error)]
pub enum AlignError {
    /// A tool export does not match its schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A tool export could not be loaded.
    #[error("failed to load {tool} export: {source}")]
    Read {
        tool: AnnotationSource,
        #[source]
        source: IngestError,
    },

    /// Reading or writing a table failed outside of a tool export.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for AlignError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;
