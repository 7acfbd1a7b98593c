//! End-to-end alignment: load, normalize, stack, fold, resolve.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use annot_ingest::read_tsv_table;
use annot_model::AnnotationSource;

use crate::adapter::{NormalizedRecordSet, normalize};
use crate::error::{AlignError, Result};
use crate::resolve::shape_output;
use crate::table::{AlignStats, UnifiedTable};
use crate::unify::{group_and_fold, stack};

/// Paths of the three tool exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignInputs {
    pub gnps: PathBuf,
    pub sirius: PathBuf,
    pub isdb: PathBuf,
}

impl AlignInputs {
    pub fn new(
        gnps: impl Into<PathBuf>,
        sirius: impl Into<PathBuf>,
        isdb: impl Into<PathBuf>,
    ) -> Self {
        Self {
            gnps: gnps.into(),
            sirius: sirius.into(),
            isdb: isdb.into(),
        }
    }

    /// Export path for `source`.
    pub fn path(&self, source: AnnotationSource) -> &Path {
        match source {
            AnnotationSource::Gnps => &self.gnps,
            AnnotationSource::Sirius => &self.sirius,
            AnnotationSource::Isdb => &self.isdb,
        }
    }
}

/// Reads the three exports and aligns them.
///
/// All exports are loaded and normalized before any stacking, so a bad
/// export fails the run without partial output.
///
/// # Errors
///
/// [`AlignError::Read`] names the tool whose export could not be loaded;
/// schema violations surface as [`AlignError::Schema`].
pub fn align_files(inputs: &AlignInputs) -> Result<UnifiedTable> {
    let span = info_span!("align_files");
    let _guard = span.enter();
    let start = Instant::now();

    let mut sets = Vec::with_capacity(AnnotationSource::ALL.len());
    for source in AnnotationSource::ALL {
        let path = inputs.path(source);
        let raw = info_span!("read", tool = %source).in_scope(|| -> Result<DataFrame> {
            let read_start = Instant::now();
            let raw = read_tsv_table(path).map_err(|err| AlignError::Read {
                tool: source,
                source: err,
            })?;
            debug!(
                tool = %source,
                path = %path.display(),
                rows = raw.height(),
                duration_ms = read_start.elapsed().as_millis(),
                "export loaded"
            );
            Ok(raw)
        })?;
        sets.push(normalize_stage(&raw, source)?);
    }

    let unified = unify_sets(&sets)?;
    info!(
        input_rows = unified.stats.total_input_rows(),
        unified_rows = unified.stats.unified_rows,
        duration_ms = start.elapsed().as_millis(),
        "alignment complete"
    );
    Ok(unified)
}

/// Aligns three exports that are already in memory.
pub fn align_frames(gnps: &DataFrame, sirius: &DataFrame, isdb: &DataFrame) -> Result<UnifiedTable> {
    let sets = vec![
        normalize_stage(gnps, AnnotationSource::Gnps)?,
        normalize_stage(sirius, AnnotationSource::Sirius)?,
        normalize_stage(isdb, AnnotationSource::Isdb)?,
    ];
    unify_sets(&sets)
}

fn normalize_stage(raw: &DataFrame, source: AnnotationSource) -> Result<NormalizedRecordSet> {
    info_span!("normalize", tool = %source).in_scope(|| -> Result<NormalizedRecordSet> {
        let start = Instant::now();
        let set = normalize(raw, source)?;
        debug!(
            tool = %source,
            rows = set.height(),
            unparsed_feature_ids = set.unparsed_feature_ids(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(set)
    })
}

/// Stacks, folds and resolves normalized record sets.
///
/// Sets are stacked in the order given; that order decides the order of
/// folded values and of the non-key output columns.
pub fn unify_sets(sets: &[NormalizedRecordSet]) -> Result<UnifiedTable> {
    let mut stats = AlignStats::default();
    for set in sets {
        *stats.input_rows.entry(set.source()).or_default() += set.height();
        *stats.unparsed_feature_ids.entry(set.source()).or_default() +=
            set.unparsed_feature_ids();
    }

    let stacked = info_span!("stack").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let stacked = stack(sets)?;
        debug!(
            rows = stacked.rows.len(),
            columns = stacked.columns.len(),
            duration_ms = start.elapsed().as_millis(),
            "stack complete"
        );
        Ok(stacked)
    })?;

    let grouped = info_span!("group_fold").in_scope(|| {
        let start = Instant::now();
        let grouped = group_and_fold(&stacked);
        debug!(
            input_rows = stacked.rows.len(),
            output_rows = grouped.len(),
            duration_ms = start.elapsed().as_millis(),
            "group and fold complete"
        );
        grouped
    });

    let frame = info_span!("resolve").in_scope(|| shape_output(&grouped))?;
    stats.unified_rows = frame.height();

    Ok(UnifiedTable { frame, stats })
}
