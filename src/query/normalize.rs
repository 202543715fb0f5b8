use regex::Regex;
use std::sync::LazyLock;

use super::{Chromosome, Reference};
use crate::{Error, Result, types::AlleleRequest};

/// A single deletion/insertion marker or a run of nucleotides.
static ALLELE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[DI]|[ACTG]+)$").expect("Invalid allele regex pattern"));

/// Resolve a free-form chromosome name (`chr1`, `X`, `chrMT`) to its canonical label.
pub fn normalize_reference(chrom: Option<&str>) -> Option<Chromosome> {
    let orig = chrom?.to_uppercase();
    Chromosome::SUFFIX_ORDER
        .into_iter()
        .find(|c| orig.ends_with(c.label()))
}

pub fn is_valid_reference(reference_name: Option<&str>) -> bool {
    normalize_reference(reference_name).is_some()
}

/// Converts a 0-based position to a 1-based position.
pub fn normalize_position(pos: Option<i64>) -> Option<i64> {
    pos.map(|p| p.saturating_add(1))
}

/// Canonical allele string: `DEL`/`INS` collapse to `D`/`I`, bases are uppercased.
pub fn normalize_allele(allele: Option<&str>) -> Option<String> {
    let allele = allele.filter(|a| !a.is_empty())?;

    let res = allele.to_uppercase();
    if res == "DEL" || res == "INS" {
        return Some(res[..1].to_string());
    }
    if ALLELE_PATTERN.is_match(&res) {
        return Some(res);
    }

    None
}

/// Resolve an assembly identifier given either as a UCSC build (`hg19`) or
/// its GRC/NCBI alias (`GRCh37`).
pub fn normalize_assembly(reference: Option<&str>) -> Option<Reference> {
    let reference = reference.filter(|r| !r.is_empty())?;

    Reference::ALL
        .into_iter()
        .find(|r| r.name().eq_ignore_ascii_case(reference))
        .or_else(|| {
            Reference::aliases()
                .find(|(_, alias)| alias.eq_ignore_ascii_case(reference))
                .map(|(r, _)| r)
        })
}

/// Assemble a normalized allele request from raw query values.
///
/// `start`, `dataset_ids` and `include_dataset_responses` pass through untouched.
/// An assembly that cannot be resolved is reported as
/// [`Error::UnrecognizedAssembly`].
pub fn build_query(
    reference_name: Option<&str>,
    start: Option<i64>,
    reference_bases: Option<&str>,
    alternate_bases: Option<&str>,
    assembly_id: Option<&str>,
    dataset_ids: Vec<String>,
    include_dataset_responses: Option<bool>,
) -> Result<AlleleRequest> {
    let chrom = normalize_reference(reference_name);
    let assembly = normalize_assembly(assembly_id)
        .ok_or_else(|| Error::UnrecognizedAssembly(assembly_id.unwrap_or_default().to_string()))?;

    Ok(AlleleRequest {
        reference_name: chrom.map(|c| c.to_string()),
        start,
        reference_bases: normalize_allele(reference_bases),
        alternate_bases: normalize_allele(alternate_bases),
        assembly_id: Some(assembly.to_string()),
        dataset_ids,
        include_dataset_responses,
    })
}

/// Validate `request`, then normalize its fields in place.
///
/// The normalized reference bases are written into `reference_name`, and the
/// chromosome lookup then runs on that value; `reference_bases` is left as
/// submitted.
pub fn normalize_request(request: &mut AlleleRequest) -> Result<()> {
    validate_request(request)?;
    apply_normalization(request)
}

fn apply_normalization(request: &mut AlleleRequest) -> Result<()> {
    request.reference_name = normalize_allele(request.reference_bases.as_deref());
    request.alternate_bases = normalize_allele(request.alternate_bases.as_deref());

    let assembly = normalize_assembly(request.assembly_id.as_deref()).ok_or_else(|| {
        Error::UnrecognizedAssembly(request.assembly_id.clone().unwrap_or_default())
    })?;
    request.assembly_id = Some(assembly.to_string());

    let chrom = normalize_reference(request.reference_name.as_deref()).ok_or_else(|| {
        Error::UnrecognizedReference(request.reference_name.clone().unwrap_or_default())
    })?;
    request.reference_name = Some(chrom.to_string());

    Ok(())
}

/// Check the mandatory fields of an allele request. The first failing check
/// determines the error message.
pub fn validate_request(request: &AlleleRequest) -> Result<()> {
    // Rejects any non-null reference name as well as a missing one.
    let message = if request.reference_name.is_some()
        || !is_valid_reference(request.reference_name.as_deref())
    {
        "Invalid reference passed in request"
    } else if request.start.is_none_or(|start| start < 0) {
        "Invalid start position in request"
    } else if request.reference_bases.is_none() {
        "Invalid reference bases in request"
    } else if request.alternate_bases.is_none() {
        "Invalid alternate bases in request"
    } else if request.assembly_id.is_none() {
        "Invalid assembly"
    } else {
        return Ok(());
    };

    tracing::debug!(reason = message, "allele request failed validation");
    Err(Error::invalid_request(request, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AlleleRequest {
        AlleleRequest {
            reference_name: Some("chr1".to_string()),
            start: Some(100),
            reference_bases: Some("a".to_string()),
            alternate_bases: Some("t".to_string()),
            assembly_id: Some("GRCh37".to_string()),
            dataset_ids: vec!["ds".to_string()],
            include_dataset_responses: Some(true),
        }
    }

    fn validation_message(request: &AlleleRequest) -> String {
        match validate_request(request) {
            Err(Error::InvalidAlleleRequest { request: echoed, message }) => {
                assert_eq!(*echoed, *request);
                message
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_reference_every_chromosome() {
        for chrom in Chromosome::ALL {
            for prefix in ["", "chr", "CHR", "Chr"] {
                let name = format!("{}{}", prefix, chrom.label().to_lowercase());
                assert_eq!(normalize_reference(Some(&name)), Some(chrom), "{}", name);
            }
        }
    }

    #[test]
    fn test_normalize_reference_not_found() {
        assert_eq!(normalize_reference(None), None);
        assert_eq!(normalize_reference(Some("not-a-chromosome")), None);
        assert_eq!(normalize_reference(Some("")), None);
    }

    #[test]
    fn test_is_valid_reference() {
        assert!(is_valid_reference(Some("chrX")));
        assert!(is_valid_reference(Some("mt")));
        assert!(!is_valid_reference(Some("chrZ")));
        assert!(!is_valid_reference(None));
    }

    #[test]
    fn test_normalize_position() {
        assert_eq!(normalize_position(Some(5)), Some(6));
        assert_eq!(normalize_position(Some(0)), Some(1));
        assert_eq!(normalize_position(None), None);
    }

    #[test]
    fn test_normalize_allele() {
        assert_eq!(normalize_allele(Some("del")), Some("D".to_string()));
        assert_eq!(normalize_allele(Some("Ins")), Some("I".to_string()));
        assert_eq!(normalize_allele(Some("acgt")), Some("ACGT".to_string()));
        assert_eq!(normalize_allele(Some("d")), Some("D".to_string()));
        assert_eq!(normalize_allele(Some("xyz")), None);
        assert_eq!(normalize_allele(Some("DI")), None);
        assert_eq!(normalize_allele(Some("A,C")), None);
        assert_eq!(normalize_allele(Some("")), None);
        assert_eq!(normalize_allele(None), None);
    }

    #[test]
    fn test_normalize_assembly() {
        assert_eq!(normalize_assembly(Some("hg19")), Some(Reference::Hg19));
        assert_eq!(normalize_assembly(Some("HG38")), Some(Reference::Hg38));
        assert_eq!(normalize_assembly(Some("GRCh37")), Some(Reference::Hg19));
        assert_eq!(normalize_assembly(Some("ncbi36")), Some(Reference::Hg18));
        assert_eq!(normalize_assembly(Some("bogus")), None);
        assert_eq!(normalize_assembly(Some("")), None);
        assert_eq!(normalize_assembly(None), None);
    }

    #[test]
    fn test_normalize_assembly_alias_round_trip() {
        for reference in Reference::ALL {
            let resolved = normalize_assembly(Some(reference.alias())).unwrap();
            assert_eq!(resolved, reference);
            assert_eq!(normalize_assembly(Some(resolved.alias())), Some(resolved));
        }
    }

    #[test]
    fn test_build_query() {
        let query = build_query(
            Some("chr17"),
            Some(41244000),
            Some("g"),
            Some("del"),
            Some("grch37"),
            vec!["ds1".to_string(), "ds2".to_string()],
            Some(false),
        )
        .unwrap();

        assert_eq!(
            query,
            AlleleRequest {
                reference_name: Some("17".to_string()),
                start: Some(41244000),
                reference_bases: Some("G".to_string()),
                alternate_bases: Some("D".to_string()),
                assembly_id: Some("hg19".to_string()),
                dataset_ids: vec!["ds1".to_string(), "ds2".to_string()],
                include_dataset_responses: Some(false),
            }
        );
    }

    #[test]
    fn test_build_query_unresolved_fields_are_null() {
        let query = build_query(Some("chrZ"), None, Some("xyz"), None, Some("hg38"), vec![], None)
            .unwrap();
        assert_eq!(query.reference_name, None);
        assert_eq!(query.reference_bases, None);
        assert_eq!(query.alternate_bases, None);
        assert_eq!(query.assembly_id, Some("hg38".to_string()));
    }

    #[test]
    fn test_build_query_unknown_assembly() {
        let err = build_query(Some("1"), Some(1), Some("A"), Some("T"), Some("hg99"), vec![], None)
            .unwrap_err();
        assert!(matches!(err, Error::UnrecognizedAssembly(ref a) if a == "hg99"));

        let err = build_query(Some("1"), Some(1), Some("A"), Some("T"), None, vec![], None)
            .unwrap_err();
        assert!(matches!(err, Error::UnrecognizedAssembly(_)));
    }

    #[test]
    fn test_validate_rejects_any_reference_name() {
        assert_eq!(validation_message(&request()), "Invalid reference passed in request");

        let missing = AlleleRequest {
            reference_name: None,
            ..request()
        };
        assert_eq!(validation_message(&missing), "Invalid reference passed in request");
    }

    #[test]
    fn test_validate_reference_check_runs_first() {
        let req = AlleleRequest {
            reference_name: Some("chrZ".to_string()),
            start: Some(-1),
            reference_bases: None,
            alternate_bases: None,
            assembly_id: None,
            ..Default::default()
        };
        assert_eq!(validation_message(&req), "Invalid reference passed in request");
    }

    #[test]
    fn test_normalize_request_fails_fast_without_mutation() {
        let mut req = request();
        let original = req.clone();
        let err = normalize_request(&mut req).unwrap_err();
        assert!(matches!(err, Error::InvalidAlleleRequest { .. }));
        assert_eq!(req, original);
    }

    #[test]
    fn test_apply_normalization_writes_bases_into_reference_name() {
        // "c" normalizes to "C", which is not a chromosome suffix
        let mut req = AlleleRequest {
            reference_bases: Some("c".to_string()),
            ..request()
        };
        let err = apply_normalization(&mut req).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedReference(ref r) if r == "C"));
        assert_eq!(req.assembly_id, Some("hg19".to_string()));
        assert_eq!(req.alternate_bases, Some("T".to_string()));
        assert_eq!(req.reference_bases, Some("c".to_string()));
    }

    #[test]
    fn test_apply_normalization_unknown_assembly() {
        let mut req = AlleleRequest {
            assembly_id: Some("mm10".to_string()),
            ..request()
        };
        let err = apply_normalization(&mut req).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedAssembly(ref a) if a == "mm10"));
        assert_eq!(req.reference_name, Some("A".to_string()));
    }

    #[test]
    fn test_apply_normalization_without_reference_bases() {
        let mut req = AlleleRequest {
            reference_bases: None,
            ..request()
        };
        let err = apply_normalization(&mut req).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedReference(ref r) if r.is_empty()));
    }
}
