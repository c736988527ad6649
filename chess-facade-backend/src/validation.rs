//! Input validation for the query parameters of every chess route
use lichess_client::GameMode;
use thiserror::Error;

/// Lowest and highest accepted rank position for the top-player history.
pub const MIN_TOP_POSITION: i64 = 1;
pub const MAX_TOP_POSITION: i64 = 200;

/// One variant per route; the message is what the client receives.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum ValidationError {
    #[error("Invalid or missing 'id' parameter.")]
    InvalidId,

    #[error("Invalid or missing 'id' or 'mode' parameter.")]
    InvalidIdOrMode,

    #[error("Invalid or missing 'top' or 'mode' parameter.")]
    InvalidTopOrMode,
}

/// Treats empty values the same as absent ones.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validates the `id` of the user profile route
pub fn validate_id(id: Option<&str>) -> Result<&str, ValidationError> {
    present(id).ok_or(ValidationError::InvalidId)
}

/// Validates the `id` + `mode` pair of the enriched user route
///
/// Rules:
/// - Both must be present and non-empty
/// - `mode` must name one of the 14 game modes, exactly
pub fn validate_id_and_mode<'a>(
    id: Option<&'a str>,
    mode: Option<&str>,
) -> Result<(&'a str, GameMode), ValidationError> {
    let id = present(id).ok_or(ValidationError::InvalidIdOrMode)?;
    let mode = present(mode)
        .and_then(|m| m.parse().ok())
        .ok_or(ValidationError::InvalidIdOrMode)?;
    Ok((id, mode))
}

/// Validates the `top` + `mode` pair of the top-player history route
///
/// Rules:
/// - Both must be present and non-empty
/// - `top` must be an integer between 1 and 200 inclusive
/// - `mode` must name one of the 14 game modes, exactly
pub fn validate_top_and_mode(
    top: Option<&str>,
    mode: Option<&str>,
) -> Result<(usize, GameMode), ValidationError> {
    let top: i64 = present(top)
        .and_then(|t| t.parse().ok())
        .ok_or(ValidationError::InvalidTopOrMode)?;

    if !(MIN_TOP_POSITION..=MAX_TOP_POSITION).contains(&top) {
        return Err(ValidationError::InvalidTopOrMode);
    }

    let mode = present(mode)
        .and_then(|m| m.parse().ok())
        .ok_or(ValidationError::InvalidTopOrMode)?;

    Ok((top as usize, mode))
}
