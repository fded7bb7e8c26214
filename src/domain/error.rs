use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Database connection is not configured on the server.")]
    StoreNotConfigured,

    #[error("Invalid request body.")]
    InvalidBody,

    #[error("Missing 'drivers' or 'circuitId'.")]
    MissingFields,

    #[error("'drivers' must be a list of driver objects.")]
    InvalidDrivers,

    #[error("Invalid driver at index {index}: 'id' must be an integer.")]
    InvalidDriver { index: usize },

    #[error("'circuitId' must be an integer.")]
    InvalidCircuit,

    #[error("An unexpected error occurred during analysis.")]
    Unexpected(#[from] anyhow::Error),
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::StoreNotConfigured | AnalysisError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match &self {
            AnalysisError::StoreNotConfigured => {
                tracing::error!("analysis requested but no results store is configured")
            }
            AnalysisError::Unexpected(e) => tracing::error!(error = ?e, "analysis failed"),
            other => tracing::debug!(reason = %other, "rejected analysis request"),
        }

        // Display of Unexpected is the generic message; the cause only goes to the log.
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(AnalysisError::InvalidBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AnalysisError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AnalysisError::InvalidDriver { index: 2 }.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AnalysisError::InvalidCircuit.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_error_hides_cause() {
        let err = AnalysisError::from(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An unexpected error occurred during analysis.");
    }
}
