//! The unified annotation table and run statistics.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::DataFrame;

use annot_ingest::write_tsv_table;
use annot_model::{AnnotationSource, SOURCES};

use crate::error::Result;

/// Row counts gathered while aligning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignStats {
    /// Rows read per tool export.
    pub input_rows: BTreeMap<AnnotationSource, usize>,
    /// Identifiers per tool that were present but yielded no feature id.
    pub unparsed_feature_ids: BTreeMap<AnnotationSource, usize>,
    pub unified_rows: usize,
}

impl AlignStats {
    /// Total rows read across all tools.
    pub fn total_input_rows(&self) -> usize {
        self.input_rows.values().sum()
    }
}

/// Result of an alignment run.
#[derive(Debug, Clone)]
pub struct UnifiedTable {
    pub frame: DataFrame,
    pub stats: AlignStats,
}

impl UnifiedTable {
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of unified rows per distinct `Sources` value.
    ///
    /// Rows no tool tagged are counted under the empty string.
    pub fn source_combinations(&self) -> Result<BTreeMap<String, usize>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for value in self.frame.column(SOURCES)?.str()? {
            *counts.entry(value.unwrap_or_default().to_string()).or_default() += 1;
        }
        Ok(counts)
    }

    /// Writes the unified table as TSV.
    pub fn write_tsv(&mut self, path: &Path) -> Result<()> {
        write_tsv_table(&mut self.frame, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn counts_source_combinations() {
        let frame = DataFrame::new(vec![
            Series::new(
                "Sources".into(),
                vec!["SIRIUS, GNPS", "ISDB", "SIRIUS, GNPS", ""],
            )
            .into_column(),
        ])
        .unwrap();
        let table = UnifiedTable {
            frame,
            stats: AlignStats::default(),
        };
        let counts = table.source_combinations().unwrap();
        assert_eq!(counts.get("SIRIUS, GNPS"), Some(&2));
        assert_eq!(counts.get("ISDB"), Some(&1));
        assert_eq!(counts.get(""), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn total_input_rows_sums_tools() {
        let stats = AlignStats {
            input_rows: BTreeMap::from([
                (AnnotationSource::Gnps, 2),
                (AnnotationSource::Sirius, 3),
                (AnnotationSource::Isdb, 0),
            ]),
            ..AlignStats::default()
        };
        assert_eq!(stats.total_input_rows(), 5);
    }
}
