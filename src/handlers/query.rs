use crate::{
    Result,
    query::{build_query, normalize_request},
    types::{AlleleQuery, AlleleRequest, BeaconAlleleResponse},
};
use axum::{Json, extract::Query};

pub async fn get_query(Query(query): Query<AlleleQuery>) -> Result<Json<BeaconAlleleResponse>> {
    let request = build_query(
        query.reference_name.as_deref(),
        query.start,
        query.reference_bases.as_deref(),
        query.alternate_bases.as_deref(),
        query.assembly_id.as_deref(),
        query.dataset_ids(),
        query.include_dataset_responses,
    )?;

    tracing::debug!(?request, "normalized allele query");
    Ok(Json(BeaconAlleleResponse::unanswered(request)))
}

pub async fn post_query(
    Json(mut request): Json<AlleleRequest>,
) -> Result<Json<BeaconAlleleResponse>> {
    normalize_request(&mut request)?;

    tracing::debug!(?request, "normalized allele request");
    Ok(Json(BeaconAlleleResponse::unanswered(request)))
}
