//! Allele query normalization and validation.
//!
//! Beacon clients send chromosome names, assemblies and alleles in many
//! spellings (`chr1` / `1`, `hg19` / `GRCh37`, `del` / `D`). The functions here
//! map those onto canonical values before a query is answered:
//!
//! - [`normalize_reference`] - chromosome name to [`Chromosome`] by suffix match
//! - [`normalize_assembly`] - UCSC build or GRC alias to [`Reference`]
//! - [`normalize_allele`] - base strings and `DEL`/`INS` markers
//! - [`normalize_position`] - 0-based to 1-based coordinates
//!
//! [`build_query`] and [`normalize_request`] combine these into an
//! [`AlleleRequest`](crate::types::AlleleRequest).

mod assembly;
mod chromosome;
mod normalize;

pub use assembly::Reference;
pub use chromosome::Chromosome;
pub use normalize::{
    build_query, is_valid_reference, normalize_allele, normalize_assembly, normalize_position,
    normalize_reference, normalize_request, validate_request,
};
