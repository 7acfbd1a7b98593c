use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use annot_align::UnifiedTable;
use annot_ingest::any_to_string;
use annot_model::AnnotationSource;

/// Cells longer than this are cut in previews.
const PREVIEW_CELL_WIDTH: usize = 40;

pub fn print_summary(unified: &UnifiedTable, output: Option<&Path>) -> annot_align::Result<()> {
    if let Some(path) = output {
        println!("Output: {}", path.display());
    }
    println!("{}", summary_table(unified));
    println!("{}", combinations_table(unified)?);
    Ok(())
}

pub fn print_preview(frame: &DataFrame, rows: usize) {
    println!("{}", preview_table(frame, rows));
}

/// Rows read and unparsed identifiers per tool, plus the unified total.
pub fn summary_table(unified: &UnifiedTable) -> Table {
    let stats = &unified.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tool"),
        header_cell("Rows"),
        header_cell("Unparsed ids"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for source in AnnotationSource::ALL {
        let rows = stats.input_rows.get(&source).copied().unwrap_or(0);
        let unparsed = stats.unparsed_feature_ids.get(&source).copied().unwrap_or(0);
        table.add_row(vec![
            tool_cell(source),
            Cell::new(rows),
            count_cell(unparsed, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("UNIFIED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.unified_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Unified rows per `Sources` combination, most frequent first.
pub fn combinations_table(unified: &UnifiedTable) -> annot_align::Result<Table> {
    let mut combinations: Vec<(String, usize)> =
        unified.source_combinations()?.into_iter().collect();
    combinations.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Sources"), header_cell("Features")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (sources, count) in combinations {
        let sources_cell = if sources.is_empty() {
            dim_cell("(none)")
        } else {
            Cell::new(sources)
        };
        table.add_row(vec![sources_cell, Cell::new(count)]);
    }
    Ok(table)
}

/// First `rows` rows of the unified frame.
pub fn preview_table(frame: &DataFrame, rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        frame
            .get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str())),
    );
    apply_preview_table_style(&mut table);
    for idx in 0..rows.min(frame.height()) {
        let cells = frame.get_columns().iter().map(|column| {
            let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(truncate(&value, PREVIEW_CELL_WIDTH))
            }
        });
        table.add_row(cells);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tool_cell(source: AnnotationSource) -> Cell {
    Cell::new(source.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use annot_align::AlignStats;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn unified() -> UnifiedTable {
        let columns: Vec<Column> = vec![
            Series::new("feature_id".into(), vec![Some(1i64), Some(2), None]).into_column(),
            Series::new("Sources".into(), vec!["SIRIUS, GNPS", "GNPS", "SIRIUS, GNPS"])
                .into_column(),
            Series::new("SMILES".into(), vec!["C", "", "CC"]).into_column(),
        ];
        UnifiedTable {
            frame: DataFrame::new(columns).unwrap(),
            stats: AlignStats {
                input_rows: BTreeMap::from([
                    (AnnotationSource::Gnps, 3),
                    (AnnotationSource::Sirius, 2),
                    (AnnotationSource::Isdb, 0),
                ]),
                unparsed_feature_ids: BTreeMap::from([(AnnotationSource::Sirius, 1)]),
                unified_rows: 3,
            },
        }
    }

    #[test]
    fn summary_lists_every_tool() {
        let rendered = summary_table(&unified()).to_string();
        for label in ["GNPS", "SIRIUS", "ISDB", "UNIFIED"] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }

    #[test]
    fn combinations_are_counted() {
        let table = combinations_table(&unified()).unwrap();
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("SIRIUS, GNPS"));
    }

    #[test]
    fn preview_is_capped_by_frame_height() {
        let unified = unified();
        assert_eq!(preview_table(&unified.frame, 2).row_count(), 2);
        assert_eq!(preview_table(&unified.frame, 10).row_count(), 3);
        assert_eq!(preview_table(&unified.frame, 0).row_count(), 0);
    }

    #[test]
    fn truncates_long_values() {
        assert_eq!(truncate("abcdef", 10), "abcdef");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
