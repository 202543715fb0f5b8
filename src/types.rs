use serde::{Deserialize, Serialize};

/// Beacon allele request (GA4GH Beacon v0.3 `BeaconAlleleRequest`)
///
/// Null fields are written out as `null` so consumers see every key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AlleleRequest {
    pub reference_name: Option<String>,
    pub start: Option<i64>,
    pub reference_bases: Option<String>,
    pub alternate_bases: Option<String>,
    pub assembly_id: Option<String>,
    pub dataset_ids: Vec<String>,
    pub include_dataset_responses: Option<bool>,
}

/// Error entity returned to Beacon clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconError {
    pub error_code: u16,
    pub message: String,
}

/// Response to an allele query.
///
/// This service never consults datasets, so `exists` stays `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleResponse {
    pub allele_request: Option<AlleleRequest>,
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BeaconError>,
}

impl BeaconAlleleResponse {
    pub fn unanswered(request: AlleleRequest) -> Self {
        Self {
            allele_request: Some(request),
            exists: None,
            error: None,
        }
    }
}

/// Query parameters for `GET /query`
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlleleQuery {
    pub reference_name: Option<String>,
    pub start: Option<i64>,
    pub reference_bases: Option<String>,
    pub alternate_bases: Option<String>,
    pub assembly_id: Option<String>,
    /// Comma-separated dataset identifiers
    pub dataset_ids: Option<String>,
    pub include_dataset_responses: Option<bool>,
}

impl AlleleQuery {
    pub fn dataset_ids(&self) -> Vec<String> {
        self.dataset_ids
            .as_deref()
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Beacon service description
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconInfo {
    pub id: String,
    pub name: String,
    pub api_version: String,
    pub organization: Organization,
    pub description: Option<String>,
    pub version: String,
    pub supported_assemblies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}
