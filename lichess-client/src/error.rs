use reqwest::StatusCode;
use thiserror::Error;

/// How a failed upstream call should be reported to our own callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
  /// Upstream broke (5xx), or never produced a usable answer.
  ServerError,
  /// Upstream does not know the requested identity.
  NotFound,
  /// Upstream refused the request as given.
  BadRequest,
}

/// Classify an upstream status code.
///
/// Returns `None` for 2xx. Server errors are checked first, then not-found;
/// every other non-success status is a bad request.
pub fn classify(status: StatusCode) -> Option<UpstreamFailure> {
  if status.is_success() {
    None
  } else if status.is_server_error() {
    Some(UpstreamFailure::ServerError)
  } else if status == StatusCode::NOT_FOUND {
    Some(UpstreamFailure::NotFound)
  } else {
    Some(UpstreamFailure::BadRequest)
  }
}

#[derive(Debug, Error)]
pub enum UpstreamError {
  #[error("lichess responded with {status}")]
  Status {
    status: StatusCode,
    failure: UpstreamFailure,
  },

  #[error("lichess request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("lichess payload could not be decoded: {0}")]
  Decode(#[from] serde_json::Error),
}

impl UpstreamError {
  pub fn failure(&self) -> UpstreamFailure {
    match self {
      UpstreamError::Status { failure, .. } => *failure,
      UpstreamError::Transport(_) | UpstreamError::Decode(_) => UpstreamFailure::ServerError,
    }
  }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
