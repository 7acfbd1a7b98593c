//! Feature id extraction from tool identifier columns.
//!
//! Failures never abort a run: an identifier that cannot be turned into an
//! integer becomes a missing feature id and the row is grouped under the
//! missing-key bucket.

use polars::prelude::{AnyValue, Column};
use tracing::debug;

use annot_ingest::{any_to_i64, any_to_string, parse_i64};
use annot_model::FeatureIdRule;

/// Extracts the trailing numeric segment of an underscore-delimited id.
///
/// `573_mapp_batch_00020_gf_sirius_58` yields `58`. A value without
/// underscores is parsed whole.
pub fn extract_composite_feature_id(value: &str) -> Option<i64> {
    let suffix = value.rsplit('_').next()?;
    parse_i64(suffix)
}

fn parse_one(value: AnyValue<'_>, rule: FeatureIdRule) -> Option<i64> {
    match rule {
        FeatureIdRule::Integer => any_to_i64(value),
        FeatureIdRule::CompositeSuffix => match value {
            AnyValue::String(s) => extract_composite_feature_id(s),
            AnyValue::StringOwned(s) => extract_composite_feature_id(&s),
            _ => None,
        },
    }
}

/// Parses an identifier column into feature ids.
///
/// Returns the ids and the number of non-missing identifiers that could
/// not be parsed.
pub fn parse_feature_ids(column: &Column, rule: FeatureIdRule) -> (Vec<Option<i64>>, usize) {
    let mut ids = Vec::with_capacity(column.len());
    let mut unparsed = 0usize;
    for idx in 0..column.len() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let is_blank = any_to_string(value.clone()).trim().is_empty();
        let id = parse_one(value.clone(), rule);
        if id.is_none() && !is_blank {
            unparsed += 1;
            debug!(
                column = %column.name(),
                row = idx,
                value = %any_to_string(value),
                "feature id could not be parsed"
            );
        }
        ids.push(id);
    }
    (ids, unparsed)
}
