//! Consolidation of the values a group of rows holds for one column.

use std::collections::HashSet;

/// Separator placed between folded values.
pub const FOLD_SEPARATOR: &str = ", ";

/// Folds the values of one column across a group of rows.
///
/// Missing values (nulls and empty strings) are dropped, the remaining values
/// are deduplicated by exact string equality keeping the order of first
/// occurrence, and joined with [`FOLD_SEPARATOR`]. A group with no present
/// value folds to an empty string.
pub fn fold_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for value in values.into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        if seen.insert(value) {
            unique.push(value);
        }
    }
    unique.join(FOLD_SEPARATOR)
}
