//! Canonical column names of normalized and unified tables.

/// Feature identifier join field.
pub const FEATURE_ID: &str = "feature_id";
/// Planar InChIKey join field.
pub const IK2D: &str = "IK2D";
/// Structure column, before prefixing and in the unified table.
pub const SMILES: &str = "SMILES";
/// Provenance tag attached to every raw row.
pub const SOURCE: &str = "Source";
/// Derived list of tools that observed a feature.
pub const SOURCES: &str = "Sources";

/// Columns placed first in the unified table, in this order.
pub const LEADING_COLUMNS: [&str; 4] = [FEATURE_ID, IK2D, SOURCES, SMILES];

/// Candidate columns for `Sources`, in display order.
pub const SOURCES_PRIORITY: [&str; 3] = ["sirius_Source", "isdb_Source", "gnps_Source"];

/// Candidate columns for `SMILES`, most trusted first.
pub const SMILES_PRIORITY: [&str; 3] = ["sirius_SMILES", "isdb_SMILES", "gnps_SMILES"];
