//! Derived `Sources`/`SMILES` columns and the shape of the unified table.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use annot_model::{FEATURE_ID, IK2D, SMILES, SMILES_PRIORITY, SOURCES, SOURCES_PRIORITY};

use crate::fold::FOLD_SEPARATOR;
use crate::unify::GroupedTable;

fn present<'a>(value: Option<&'a str>) -> Option<&'a str> {
    value.filter(|value| !value.is_empty())
}

/// Joins the non-empty values of `candidates`, in candidate order.
///
/// A candidate the lookup does not know counts as empty.
pub fn join_present<'a, F>(candidates: &[&str], lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    candidates
        .iter()
        .copied()
        .filter_map(|candidate| present(lookup(candidate)))
        .collect::<Vec<_>>()
        .join(FOLD_SEPARATOR)
}

/// Returns the first non-empty value among `candidates`.
pub fn first_present<'a, F>(candidates: &[&str], lookup: F) -> Option<&'a str>
where
    F: Fn(&str) -> Option<&'a str>,
{
    candidates
        .iter()
        .copied()
        .find_map(|candidate| present(lookup(candidate)))
}

/// Builds the unified DataFrame from grouped rows.
///
/// Columns are `feature_id`, `IK2D`, `Sources`, `SMILES`, then every folded
/// column in stacked order. `Sources` and `SMILES` are always filled, with
/// an empty string when no tool provides a value.
pub fn shape_output(grouped: &GroupedTable) -> PolarsResult<DataFrame> {
    let rows = grouped.rows();

    let feature_ids: Vec<Option<i64>> = rows.iter().map(|row| row.key.feature_id).collect();
    let fingerprints: Vec<Option<String>> = rows.iter().map(|row| row.key.ik2d.clone()).collect();
    let sources: Vec<String> = (0..rows.len())
        .map(|row| join_present(&SOURCES_PRIORITY, |column| grouped.value(row, column)))
        .collect();
    let smiles: Vec<String> = (0..rows.len())
        .map(|row| {
            first_present(&SMILES_PRIORITY, |column| grouped.value(row, column))
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(grouped.columns().len() + 4);
    columns.push(Series::new(FEATURE_ID.into(), feature_ids).into_column());
    columns.push(Series::new(IK2D.into(), fingerprints).into_column());
    columns.push(Series::new(SOURCES.into(), sources).into_column());
    columns.push(Series::new(SMILES.into(), smiles).into_column());

    for (position, name) in grouped.columns().iter().enumerate() {
        let values: Vec<String> = rows.iter().map(|row| row.values[position].clone()).collect();
        columns.push(Series::new(name.as_str().into(), values).into_column());
    }

    DataFrame::new(columns)
}
