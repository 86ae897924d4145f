use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::constructor::GENERIC_FAILURE_MESSAGE;
use crate::error::DishError;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl DishError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DishError::EmptyCodes | DishError::TooManyGroups { .. } | DishError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            DishError::EmptyGroup(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DishError::TooManyDishes { .. } | DishError::SearchTooLarge { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            DishError::Lookup { .. }
            | DishError::Database(_)
            | DishError::Io(_)
            | DishError::Json(_)
            | DishError::Csv(_)
            | DishError::Config(_)
            | DishError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DishError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs.
        let message = if self.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "Rejected request");
            self.to_string()
        } else {
            error!(status = status.as_u16(), error = %self, "Request failed");
            GENERIC_FAILURE_MESSAGE.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
