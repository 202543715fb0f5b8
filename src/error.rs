use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::types::{AlleleRequest, BeaconAlleleResponse, BeaconError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The allele request failed validation; the offending request is echoed back.
    #[error("{message}")]
    InvalidAlleleRequest {
        request: Box<AlleleRequest>,
        message: String,
    },

    #[error("unrecognized assembly: {0}")]
    UnrecognizedAssembly(String),

    #[error("unrecognized reference name: {0}")]
    UnrecognizedReference(String),

    #[error("{0}")]
    Internal(String),
}

/// JSON entity written for an [`Error`]
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorBody {
    Allele(BeaconAlleleResponse),
    Plain(BeaconError),
}

impl Error {
    pub fn invalid_request(request: &AlleleRequest, message: impl Into<String>) -> Self {
        Error::InvalidAlleleRequest {
            request: Box::new(request.clone()),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAlleleRequest { .. } => StatusCode::BAD_REQUEST,
            Error::UnrecognizedAssembly(_)
            | Error::UnrecognizedReference(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_body(self) -> ErrorBody {
        let error_code = self.status_code().as_u16();
        match self {
            Error::InvalidAlleleRequest { request, message } => {
                ErrorBody::Allele(BeaconAlleleResponse {
                    allele_request: Some(*request),
                    exists: None,
                    error: Some(BeaconError {
                        error_code,
                        message,
                    }),
                })
            }
            other => ErrorBody::Plain(BeaconError {
                error_code,
                message: other.to_string(),
            }),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "beacon request failed");
        } else {
            tracing::debug!(error = %self, "rejected allele request");
        }
        (status, axum::Json(self.into_body())).into_response()
    }
}
