//! Stacking of normalized record sets and folding by join key.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use annot_ingest::{any_to_i64, any_to_string_non_empty, column_strings};
use annot_model::{FEATURE_ID, IK2D};

use crate::adapter::NormalizedRecordSet;
use crate::error::Result;
use crate::fold::fold_values;

/// The `(feature_id, IK2D)` pair rows are grouped by.
///
/// Both components compare by exact equality, whitespace included; a
/// missing component equals another missing component. Keys order by
/// feature id, then fingerprint, with missing components last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinKey {
    pub feature_id: Option<i64>,
    pub ik2d: Option<String>,
}

impl JoinKey {
    pub fn new(feature_id: Option<i64>, ik2d: Option<&str>) -> Self {
        Self {
            feature_id,
            ik2d: ik2d.map(str::to_string),
        }
    }
}

fn missing_last<T: Ord>(lhs: &Option<T>, rhs: &Option<T>) -> Ordering {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for JoinKey {
    fn cmp(&self, other: &Self) -> Ordering {
        missing_last(&self.feature_id, &other.feature_id)
            .then_with(|| missing_last(&self.ik2d, &other.ik2d))
    }
}

impl PartialOrd for JoinKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One stacked row: its key and one cell per stacked column.
#[derive(Debug, Clone)]
pub struct StackedRow {
    pub key: JoinKey,
    pub cells: Vec<Option<String>>,
}

/// Row-wise concatenation of normalized sets over the union of their columns.
#[derive(Debug, Clone, Default)]
pub struct StackedTable {
    /// Non-key columns in order of first appearance.
    pub columns: Vec<String>,
    pub rows: Vec<StackedRow>,
}

/// Stacks normalized sets; cells a set has no column for are missing.
pub fn stack(sets: &[NormalizedRecordSet]) -> Result<StackedTable> {
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for set in sets {
        for column in set.frame().get_columns() {
            let name = column.name().as_str();
            if name == FEATURE_ID || name == IK2D || index.contains_key(name) {
                continue;
            }
            index.insert(name.to_string(), columns.len());
            columns.push(name.to_string());
        }
    }

    let mut rows = Vec::with_capacity(sets.iter().map(NormalizedRecordSet::height).sum());
    for set in sets {
        let frame = set.frame();
        let feature_ids = frame.column(FEATURE_ID)?;
        let fingerprints = frame.column(IK2D)?;
        let mut values: Vec<(usize, Vec<Option<String>>)> = frame
            .get_columns()
            .iter()
            .filter_map(|column| {
                let position = index.get(column.name().as_str())?;
                Some((*position, column_strings(column)))
            })
            .collect();

        for row in 0..frame.height() {
            let key = JoinKey {
                feature_id: any_to_i64(feature_ids.get(row)?),
                ik2d: any_to_string_non_empty(fingerprints.get(row)?),
            };
            let mut cells = vec![None; columns.len()];
            for (position, column_values) in &mut values {
                cells[*position] = column_values[row].take();
            }
            rows.push(StackedRow { key, cells });
        }
    }

    Ok(StackedTable { columns, rows })
}

/// One unified record: its key and one folded value per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedRow {
    pub key: JoinKey,
    pub values: Vec<String>,
}

/// Stacked rows folded to one row per join key.
#[derive(Debug, Clone, Default)]
pub struct GroupedTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<UnifiedRow>,
}

impl GroupedTable {
    pub fn new(columns: Vec<String>, rows: Vec<UnifiedRow>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        Self {
            columns,
            index,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[UnifiedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Folded value of `column` in `row`; `None` when the column is absent.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let position = *self.index.get(column)?;
        self.rows
            .get(row)
            .and_then(|unified| unified.values.get(position))
            .map(String::as_str)
    }
}

/// Groups stacked rows by join key and folds every column.
pub fn group_and_fold(stacked: &StackedTable) -> GroupedTable {
    let mut groups: BTreeMap<&JoinKey, Vec<usize>> = BTreeMap::new();
    for (idx, row) in stacked.rows.iter().enumerate() {
        groups.entry(&row.key).or_default().push(idx);
    }

    let rows = groups
        .into_iter()
        .map(|(key, members)| UnifiedRow {
            key: key.clone(),
            values: (0..stacked.columns.len())
                .map(|position| {
                    fold_values(
                        members
                            .iter()
                            .map(|&member| stacked.rows[member].cells[position].as_deref()),
                    )
                })
                .collect(),
        })
        .collect();

    GroupedTable::new(stacked.columns.clone(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(feature_id: Option<i64>, ik2d: Option<&str>, cells: Vec<Option<&str>>) -> StackedRow {
        StackedRow {
            key: JoinKey::new(feature_id, ik2d),
            cells: cells.into_iter().map(|cell| cell.map(str::to_string)).collect(),
        }
    }

    #[test]
    fn keys_sort_with_missing_last() {
        let mut keys = vec![
            JoinKey::new(None, Some("IK1")),
            JoinKey::new(Some(2), None),
            JoinKey::new(Some(2), Some("IK2")),
            JoinKey::new(Some(1), Some("IK9")),
            JoinKey::new(None, None),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                JoinKey::new(Some(1), Some("IK9")),
                JoinKey::new(Some(2), Some("IK2")),
                JoinKey::new(Some(2), None),
                JoinKey::new(None, Some("IK1")),
                JoinKey::new(None, None),
            ]
        );
    }

    #[test]
    fn folds_each_column_independently() {
        let stacked = StackedTable {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                row(Some(1), Some("IK1"), vec![Some("x"), None]),
                row(Some(1), Some("IK1"), vec![Some("y"), Some("p")]),
                row(Some(1), Some("IK1"), vec![Some("x"), Some("q")]),
                row(Some(2), Some("IK1"), vec![Some("z"), None]),
            ],
        };
        let grouped = group_and_fold(&stacked);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.value(0, "a"), Some("x, y"));
        assert_eq!(grouped.value(0, "b"), Some("p, q"));
        assert_eq!(grouped.value(1, "a"), Some("z"));
        assert_eq!(grouped.value(1, "b"), Some(""));
        assert_eq!(grouped.value(1, "c"), None);
    }

    #[test]
    fn missing_keys_group_together() {
        let stacked = StackedTable {
            columns: vec!["a".to_string()],
            rows: vec![
                row(None, Some("IK1"), vec![Some("x")]),
                row(None, Some("IK1"), vec![Some("y")]),
                row(None, None, vec![Some("z")]),
                row(None, None, vec![Some("w")]),
            ],
        };
        let grouped = group_and_fold(&stacked);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.rows()[0].key, JoinKey::new(None, Some("IK1")));
        assert_eq!(grouped.value(0, "a"), Some("x, y"));
        assert_eq!(grouped.value(1, "a"), Some("z, w"));
    }

    #[test]
    fn fingerprints_match_exactly() {
        let stacked = StackedTable {
            columns: vec!["a".to_string()],
            rows: vec![
                row(Some(1), Some("IK1"), vec![Some("x")]),
                row(Some(1), Some("ik1"), vec![Some("y")]),
                row(Some(1), Some("IK1 "), vec![Some("z")]),
                row(Some(1), Some(" "), vec![Some("v")]),
                row(Some(1), None, vec![Some("w")]),
            ],
        };
        assert_eq!(group_and_fold(&stacked).len(), 5);
    }

    #[test]
    fn empty_stack_groups_to_nothing() {
        let grouped = group_and_fold(&StackedTable::default());
        assert!(grouped.is_empty());
        assert!(grouped.columns().is_empty());
    }
}
