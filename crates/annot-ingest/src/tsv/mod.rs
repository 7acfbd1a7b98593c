//! Tab-delimited table reading and writing.

mod reader;
mod writer;

pub use reader::{read_tsv_headers, read_tsv_table, validate_encoding};
pub use writer::write_tsv_table;
