//! Annotation tools and the column mapping tables used to normalize them.
//!
//! Every tool export is described by a [`SourceSchema`]: which raw columns
//! hold the fingerprint, the feature identifier and the structure, and how
//! the identifier is turned into an integer feature id. Normalization is a
//! pure function of the schema and a raw column name, see
//! [`SourceSchema::normalized_column_name`].

use serde::Serialize;
use std::fmt;

use crate::columns::{FEATURE_ID, IK2D, SMILES};

/// One of the annotation tools whose exports are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AnnotationSource {
    /// Molecular networking library matches.
    Gnps,
    /// SIRIUS/CSI:FingerID structure predictions.
    Sirius,
    /// In-silico database annotations.
    Isdb,
}

impl AnnotationSource {
    /// Tools in the order their exports are stacked.
    pub const ALL: [AnnotationSource; 3] = [
        AnnotationSource::Gnps,
        AnnotationSource::Sirius,
        AnnotationSource::Isdb,
    ];

    /// Tools ordered by trust, used for `Sources` and `SMILES`.
    pub const PRIORITY: [AnnotationSource; 3] = [
        AnnotationSource::Sirius,
        AnnotationSource::Isdb,
        AnnotationSource::Gnps,
    ];

    /// Constant written to the `Source` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationSource::Gnps => "GNPS",
            AnnotationSource::Sirius => "SIRIUS",
            AnnotationSource::Isdb => "ISDB",
        }
    }

    /// Column name prefix, e.g. `gnps_`.
    pub fn prefix(&self) -> &'static str {
        match self {
            AnnotationSource::Gnps => "gnps_",
            AnnotationSource::Sirius => "sirius_",
            AnnotationSource::Isdb => "isdb_",
        }
    }

    /// Returns `name` with this tool's prefix.
    pub fn prefixed(&self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }

    /// Column mapping table for this tool's export.
    pub fn schema(&self) -> SourceSchema {
        match self {
            AnnotationSource::Gnps => SourceSchema {
                source: *self,
                fingerprint_column: "InChIKey-Planar",
                identifier_column: "#Scan#",
                structure_column: "Smiles",
                feature_id_rule: FeatureIdRule::Integer,
            },
            AnnotationSource::Sirius => SourceSchema {
                source: *self,
                fingerprint_column: "InChIkey2D",
                identifier_column: "id",
                structure_column: "smiles",
                feature_id_rule: FeatureIdRule::CompositeSuffix,
            },
            AnnotationSource::Isdb => SourceSchema {
                source: *self,
                fingerprint_column: "short_inchikey",
                identifier_column: "feature_id",
                structure_column: "structure_smiles",
                feature_id_rule: FeatureIdRule::Integer,
            },
        }
    }
}

impl fmt::Display for AnnotationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a tool's identifier column becomes an integer feature id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureIdRule {
    /// The identifier is already an integer.
    Integer,
    /// Underscore-delimited string whose last segment is the feature id,
    /// e.g. `573_mapp_batch_00020_gf_sirius_58`.
    CompositeSuffix,
}

/// Declarative description of one tool export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSchema {
    pub source: AnnotationSource,
    /// Raw column holding the planar InChIKey.
    pub fingerprint_column: &'static str,
    /// Raw column holding the feature identifier.
    pub identifier_column: &'static str,
    /// Raw column holding the SMILES string.
    pub structure_column: &'static str,
    pub feature_id_rule: FeatureIdRule,
}

impl SourceSchema {
    /// Raw columns that must be present before normalization.
    pub fn expected_columns(&self) -> [&'static str; 3] {
        [
            self.fingerprint_column,
            self.identifier_column,
            self.structure_column,
        ]
    }

    /// Raw column → canonical name mapping, applied before prefixing.
    pub fn column_mapping(&self) -> [(&'static str, &'static str); 3] {
        [
            (self.fingerprint_column, IK2D),
            (self.identifier_column, FEATURE_ID),
            (self.structure_column, SMILES),
        ]
    }

    /// Name a raw column carries in the normalized record set.
    ///
    /// The raw name is first mapped to its canonical name, then prefixed
    /// with the tool prefix. The two join fields are finally restored to
    /// their unprefixed names by exact match on the prefixed name, so a tool
    /// whose identifier is already called `feature_id` still lands on
    /// `feature_id` and never on a second unprefixed copy.
    pub fn normalized_column_name(&self, raw: &str) -> String {
        let canonical = self
            .column_mapping()
            .iter()
            .find(|(from, _)| *from == raw)
            .map_or(raw, |(_, to)| *to);
        let prefixed = self.source.prefixed(canonical);
        for join_field in [IK2D, FEATURE_ID] {
            if prefixed == self.source.prefixed(join_field) {
                return join_field.to_string();
            }
        }
        prefixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::SOURCE;

    #[test]
    fn gnps_columns_normalize() {
        let schema = AnnotationSource::Gnps.schema();
        assert_eq!(schema.normalized_column_name("#Scan#"), "feature_id");
        assert_eq!(schema.normalized_column_name("InChIKey-Planar"), "IK2D");
        assert_eq!(schema.normalized_column_name("Smiles"), "gnps_SMILES");
        assert_eq!(schema.normalized_column_name(SOURCE), "gnps_Source");
        assert_eq!(
            schema.normalized_column_name("Compound_Name"),
            "gnps_Compound_Name"
        );
    }

    #[test]
    fn isdb_identifier_already_canonical() {
        let schema = AnnotationSource::Isdb.schema();
        assert_eq!(schema.normalized_column_name("feature_id"), "feature_id");
        assert_eq!(schema.normalized_column_name("short_inchikey"), "IK2D");
        assert_eq!(
            schema.normalized_column_name("structure_smiles"),
            "isdb_SMILES"
        );
    }

    #[test]
    fn sirius_columns_normalize() {
        let schema = AnnotationSource::Sirius.schema();
        assert_eq!(schema.normalized_column_name("id"), "feature_id");
        assert_eq!(schema.normalized_column_name("InChIkey2D"), "IK2D");
        assert_eq!(schema.normalized_column_name("smiles"), "sirius_SMILES");
        assert_eq!(
            schema.normalized_column_name("ConfidenceScore"),
            "sirius_ConfidenceScore"
        );
    }

    #[test]
    fn unmapped_join_field_names_are_restored() {
        // A raw column literally named IK2D maps onto the join field as well,
        // which the adapter reports as a duplicate.
        let schema = AnnotationSource::Gnps.schema();
        assert_eq!(schema.normalized_column_name("IK2D"), "IK2D");
        assert_eq!(schema.normalized_column_name("gnps_IK2D"), "gnps_gnps_IK2D");
    }

    #[test]
    fn schema_serializes() {
        let json = serde_json::to_value(AnnotationSource::Sirius.schema()).expect("serialize");
        assert_eq!(json["identifier_column"], "id");
        assert_eq!(json["feature_id_rule"], "CompositeSuffix");
        assert_eq!(json["source"], "Sirius");
    }
}
