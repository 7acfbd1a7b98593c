use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use serde::Serialize;
use tracing::{info, info_span};

use annot_align::{AlignInputs, UnifiedTable, align_files};
use annot_model::{AnnotationSource, FeatureIdRule};

use crate::cli::{AlignArgs, SourcesArgs};
use crate::summary::apply_table_style;

/// One supported tool, as listed by `sources`.
#[derive(Debug, Serialize)]
pub struct SourceListing {
    pub tool: AnnotationSource,
    pub prefix: &'static str,
    pub identifier_column: &'static str,
    pub fingerprint_column: &'static str,
    pub structure_column: &'static str,
    pub feature_id_rule: FeatureIdRule,
}

pub fn source_listings() -> Vec<SourceListing> {
    AnnotationSource::ALL
        .iter()
        .map(|source| {
            let schema = source.schema();
            SourceListing {
                tool: *source,
                prefix: source.prefix(),
                identifier_column: schema.identifier_column,
                fingerprint_column: schema.fingerprint_column,
                structure_column: schema.structure_column,
                feature_id_rule: schema.feature_id_rule,
            }
        })
        .collect()
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let listings = source_listings();
    if args.json {
        let json = serde_json::to_string_pretty(&listings).context("serialize sources")?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Tool", "Prefix", "Feature id", "Fingerprint", "Structure"]);
    apply_table_style(&mut table);
    for listing in listings {
        let identifier = match listing.feature_id_rule {
            FeatureIdRule::Integer => listing.identifier_column.to_string(),
            FeatureIdRule::CompositeSuffix => {
                format!("{} (last '_' segment)", listing.identifier_column)
            }
        };
        table.add_row(vec![
            listing.tool.to_string(),
            listing.prefix.to_string(),
            identifier,
            listing.fingerprint_column.to_string(),
            listing.structure_column.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn ensure_exists(option: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{option} does not exist: {}", path.display());
    }
    Ok(())
}

pub fn run_align(args: &AlignArgs) -> Result<UnifiedTable> {
    ensure_exists("--gnps-file", &args.gnps_file)?;
    ensure_exists("--sirius-file", &args.sirius_file)?;
    ensure_exists("--isdb-file", &args.isdb_file)?;

    let span = info_span!("align");
    let _guard = span.enter();

    println!("Aligning metabolite annotations...");
    let inputs = AlignInputs::new(&args.gnps_file, &args.sirius_file, &args.isdb_file);
    let mut unified = align_files(&inputs).context("align annotations")?;

    if let Some(output) = &args.output {
        unified
            .write_tsv(output)
            .with_context(|| format!("write {}", output.display()))?;
        info!(
            path = %output.display(),
            rows = unified.height(),
            "unified table written"
        );
    }
    Ok(unified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_cover_every_tool() {
        let listings = source_listings();
        let tools: Vec<AnnotationSource> = listings.iter().map(|listing| listing.tool).collect();
        assert_eq!(tools, AnnotationSource::ALL.to_vec());
        assert_eq!(listings[1].identifier_column, "id");
        assert_eq!(listings[1].feature_id_rule, FeatureIdRule::CompositeSuffix);
    }

    #[test]
    fn listings_serialize_to_json() {
        let json = serde_json::to_value(source_listings()).unwrap();
        assert_eq!(json[0]["tool"], "Gnps");
        assert_eq!(json[0]["fingerprint_column"], "InChIKey-Planar");
        assert_eq!(json[2]["prefix"], "isdb_");
    }

    #[test]
    fn missing_input_names_option() {
        let err = ensure_exists("--isdb-file", Path::new("/nonexistent/isdb.tsv")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--isdb-file does not exist: /nonexistent/isdb.tsv"
        );
    }
}
