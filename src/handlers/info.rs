use super::AppState;
use crate::{
    query::Reference,
    types::{BeaconInfo, Organization},
};
use axum::{Json, extract::State};

pub async fn beacon_info(State(state): State<AppState>) -> Json<BeaconInfo> {
    Json(BeaconInfo {
        id: state.beacon_id,
        name: "beaconr".to_string(),
        api_version: "0.3.0".to_string(),
        organization: Organization {
            id: state.organization.to_lowercase().replace(' ', "-"),
            name: state.organization,
        },
        description: Some("GA4GH Beacon allele query service in Rust".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_assemblies: Reference::ALL
            .iter()
            .map(|r| r.alias().to_string())
            .collect(),
    })
}
