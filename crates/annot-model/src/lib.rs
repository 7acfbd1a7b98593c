//! Shared model for metabolite annotation alignment.
//!
//! This crate describes the three annotation tools (GNPS, SIRIUS, ISDB),
//! the column mapping table each tool is normalized with, and the canonical
//! column names of the unified table.

pub mod columns;
pub mod error;
pub mod source;

pub use columns::{
    FEATURE_ID, IK2D, LEADING_COLUMNS, SMILES, SMILES_PRIORITY, SOURCE, SOURCES,
    SOURCES_PRIORITY,
};
pub use error::{Result, SchemaError};
pub use source::{AnnotationSource, FeatureIdRule, SourceSchema};
