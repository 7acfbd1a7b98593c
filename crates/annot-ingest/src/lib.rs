//! Annotation export ingestion.
//!
//! This crate reads the tab-delimited exports of the annotation tools into
//! Polars DataFrames and writes unified tables back out.
//!
//! # Features
//!
//! - **TSV Loading**: every column is read as text, exactly as written
//! - **TSV Writing**: header row plus tab-separated rows, nulls as empty fields
//! - **Value Helpers**: `AnyValue` to string/integer conversions
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use annot_ingest::{read_tsv_table, write_tsv_table};
//!
//! let mut df = read_tsv_table(Path::new("gnps.tsv"))?;
//! write_tsv_table(&mut df, Path::new("copy.tsv"))?;
//! ```

mod error;
mod tsv;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === TSV Reading / Writing ===
pub use tsv::{read_tsv_headers, read_tsv_table, validate_encoding, write_tsv_table};

// === Value Helpers ===
pub use values::{any_to_i64, any_to_string, any_to_string_non_empty, column_strings, parse_i64};
