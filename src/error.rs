use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bead_quant::GridError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Grid(#[from] GridError),

    #[error("Image exceeds the {0} byte upload limit")]
    PayloadTooLarge(usize),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Grid(GridError::Decode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Grid(
                GridError::OutOfBounds { .. }
                | GridError::UnknownColor(_)
                | GridError::InvalidShape(_)
                | GridError::PreviewTooLarge { .. },
            ) => StatusCode::BAD_REQUEST,
            ApiError::Grid(GridError::SurfaceUnavailable { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
