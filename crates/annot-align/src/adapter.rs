//! Source adapters: one tool export in, one normalized record set out.
//!
//! An adapter checks the export carries the columns its [`SourceSchema`]
//! names, tags every row with the tool, renames every column through
//! [`SourceSchema::normalized_column_name`] and parses the feature id.
//! The caller's frame is never modified.

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, warn};

use annot_ingest::column_strings;
use annot_model::{AnnotationSource, FEATURE_ID, IK2D, SOURCE, SchemaError, SourceSchema};

use crate::error::Result;
use crate::feature_id::parse_feature_ids;

/// A tool export mapped onto the `feature_id`/`IK2D` join contract.
///
/// `feature_id` is a nullable `Int64` column, every other column is text.
#[derive(Debug, Clone)]
pub struct NormalizedRecordSet {
    source: AnnotationSource,
    frame: DataFrame,
    unparsed_feature_ids: usize,
}

impl NormalizedRecordSet {
    pub fn source(&self) -> AnnotationSource {
        self.source
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Identifiers that were present but could not be parsed.
    pub fn unparsed_feature_ids(&self) -> usize {
        self.unparsed_feature_ids
    }
}

fn check_expected_columns(raw: &DataFrame, schema: &SourceSchema) -> Result<()> {
    let present: HashSet<&str> = raw
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    for column in schema.expected_columns() {
        if !present.contains(column) {
            return Err(SchemaError::MissingColumn {
                tool: schema.source,
                column: column.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn source_column(name: &str, source: AnnotationSource, height: usize) -> Column {
    Series::new(name.into(), vec![source.as_str(); height]).into_column()
}

/// Normalizes one tool export.
///
/// # Errors
///
/// Returns [`SchemaError::MissingColumn`] when an expected column is absent
/// and [`SchemaError::DuplicateColumn`] when two raw columns normalize to the
/// same name. Unparseable identifiers are not errors; they become nulls.
pub fn normalize(raw: &DataFrame, source: AnnotationSource) -> Result<NormalizedRecordSet> {
    let schema = source.schema();
    check_expected_columns(raw, &schema)?;

    let height = raw.height();
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns: Vec<Column> = Vec::with_capacity(raw.width() + 1);
    let mut unparsed_feature_ids = 0usize;
    let mut tagged = false;

    let mut claim = |name: &str| -> Result<()> {
        if seen.insert(name.to_string()) {
            Ok(())
        } else {
            Err(SchemaError::DuplicateColumn {
                tool: source,
                column: name.to_string(),
            }
            .into())
        }
    };

    for column in raw.get_columns() {
        let original = column.name().as_str();
        let name = schema.normalized_column_name(original);
        claim(&name)?;

        let normalized = if original == schema.identifier_column {
            let (ids, unparsed) = parse_feature_ids(column, schema.feature_id_rule);
            unparsed_feature_ids = unparsed;
            Series::new(name.as_str().into(), ids).into_column()
        } else if original == SOURCE {
            tagged = true;
            source_column(&name, source, height)
        } else {
            Series::new(name.as_str().into(), column_strings(column)).into_column()
        };
        columns.push(normalized);
    }

    if !tagged {
        let name = schema.normalized_column_name(SOURCE);
        claim(&name)?;
        columns.push(source_column(&name, source, height));
    }

    if unparsed_feature_ids > 0 {
        warn!(
            tool = %source,
            column = schema.identifier_column,
            unparsed = unparsed_feature_ids,
            "identifiers without a usable feature id are kept under a missing key"
        );
    }

    let frame = DataFrame::new(columns)?;
    debug!(
        tool = %source,
        rows = frame.height(),
        columns = frame.width(),
        "normalized export"
    );
    debug_assert!(frame.column(FEATURE_ID).is_ok() && frame.column(IK2D).is_ok());

    Ok(NormalizedRecordSet {
        source,
        frame,
        unparsed_feature_ids,
    })
}
