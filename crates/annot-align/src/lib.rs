//! Alignment of metabolite annotations from GNPS, SIRIUS and ISDB.
//!
//! The pipeline follows these stages in order:
//! 1. **Normalize**: each tool export is mapped onto the `feature_id`/`IK2D`
//!    join contract and its columns are prefixed with the tool tag
//! 2. **Stack**: the normalized sets are concatenated over the union schema
//! 3. **Group/Fold**: rows sharing a join key are folded into one record
//! 4. **Resolve**: `Sources` and `SMILES` are derived by tool priority
//!
//! # Example
//!
//! ```ignore
//! use annot_align::{AlignInputs, align_files};
//!
//! let inputs = AlignInputs::new("gnps.tsv", "sirius.tsv", "isdb.tsv");
//! let unified = align_files(&inputs)?;
//! println!("{} unified rows", unified.height());
//! ```

pub mod adapter;
pub mod error;
pub mod feature_id;
pub mod fold;
pub mod pipeline;
pub mod resolve;
pub mod table;
pub mod unify;

pub use adapter::{NormalizedRecordSet, normalize};
pub use error::{AlignError, Result};
pub use feature_id::{extract_composite_feature_id, parse_feature_ids};
pub use fold::{FOLD_SEPARATOR, fold_values};
pub use pipeline::{AlignInputs, align_files, align_frames, unify_sets};
pub use resolve::{first_present, join_present, shape_output};
pub use table::{AlignStats, UnifiedTable};
pub use unify::{GroupedTable, JoinKey, StackedRow, StackedTable, group_and_fold, stack};
