use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use lichess_client::{UpstreamError, UpstreamFailure};
use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::ValidationError;

pub const USER_NOT_FOUND: &str = "User not found.";
pub const RATING_HISTORY_NOT_FOUND: &str = "No rating history found for the requested mode.";
pub const SERVER_ERROR: &str = "Internal server error.";

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
  pub error: String,
}

impl ErrorResponse {
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
    }
  }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
  Validation(ValidationError),
  UserNotFound,
  RatingHistoryNotFound,
  /// A failed lichess call. `rejected` is what the client is told when
  /// lichess refused the request as a bad one.
  Upstream {
    source: UpstreamError,
    rejected: ValidationError,
  },
  /// The leaderboard takes no input, so every failure is ours.
  LeaderboardUnavailable(UpstreamError),
}

impl AppError {
  pub fn upstream(rejected: ValidationError) -> impl FnOnce(UpstreamError) -> AppError {
    move |source| AppError::Upstream { source, rejected }
  }

  fn status_and_message(&self) -> (StatusCode, String) {
    match self {
      AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
      AppError::UserNotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_string()),
      AppError::RatingHistoryNotFound => {
        (StatusCode::NOT_FOUND, RATING_HISTORY_NOT_FOUND.to_string())
      }
      AppError::Upstream { source, rejected } => match source.failure() {
        UpstreamFailure::ServerError => {
          (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
        }
        UpstreamFailure::NotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_string()),
        UpstreamFailure::BadRequest => (StatusCode::BAD_REQUEST, rejected.to_string()),
      },
      AppError::LeaderboardUnavailable(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
      }
    }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    match &self {
      AppError::Validation(err) => {
        tracing::warn!(validation_error = %err, "Validation failed");
      }
      AppError::UserNotFound | AppError::RatingHistoryNotFound => {
        tracing::info!(error = ?self, "Requested resource not found");
      }
      AppError::Upstream { source, .. } | AppError::LeaderboardUnavailable(source) => {
        // Upstream detail stays in the logs
        tracing::error!(?source, "Lichess call failed");
      }
    }

    let (status, message) = self.status_and_message();
    (status, Json(ErrorResponse::new(message))).into_response()
  }
}

impl From<ValidationError> for AppError {
  fn from(err: ValidationError) -> Self {
    AppError::Validation(err)
  }
}
