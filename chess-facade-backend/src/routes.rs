use crate::AppState;
use crate::error::{AppError, ErrorResponse};
use crate::models::{EnrichedUser, RatingHistoryResult, UserProfile};
use crate::shapers;
use crate::validation::{self, ValidationError};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use axum_macros::debug_handler;
use lichess_client::Leaderboard;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct UserQuery {
    /// Lichess user id
    id: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct EnrichedUserQuery {
    /// Lichess user id
    id: Option<String>,
    /// Game mode, e.g. `bullet` or `kingOfTheHill`
    mode: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct TopPlayerHistoryQuery {
    /// Rank position, 1 to 200
    top: Option<String>,
    /// Game mode, e.g. `bullet` or `kingOfTheHill`
    mode: Option<String>,
}

/// A query string that does not decode (e.g. a repeated parameter) gets the
/// route's own message instead of axum's plain-text rejection.
fn reject_query(invalid: ValidationError) -> impl FnOnce(QueryRejection) -> ValidationError {
    move |rejection| {
        tracing::debug!(%rejection, "query string rejected");
        invalid
    }
}

/// Top ten players of every mode, with each player's `perfs` exposed as `modes`.
#[utoipa::path(
    get,
    path = "/chess/top10",
    tag = "chess",
    responses(
        (status = 200, description = "Mode name to an array of LeaderboardPlayer"),
        (status = 500, description = "Lichess failed", body = ErrorResponse),
    )
)]
#[debug_handler]
pub(crate) async fn top_ten(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Leaderboard>, AppError> {
    let leaderboard = state
        .lichess
        .leaderboard()
        .await
        .map_err(AppError::LeaderboardUnavailable)?;

    Ok(Json(shapers::top_ten(leaderboard)))
}

/// Profile of a single user.
#[utoipa::path(
    get,
    path = "/chess/user",
    tag = "chess",
    params(UserQuery),
    responses(
        (status = 200, description = "Selected profile fields", body = UserProfile),
        (status = 400, description = "Missing or rejected id", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Lichess failed", body = ErrorResponse),
    )
)]
#[debug_handler]
pub(crate) async fn user(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<UserProfile>, AppError> {
    let Query(query) = query.map_err(reject_query(ValidationError::InvalidId))?;
    let id = validation::validate_id(query.id.as_deref())?;

    let user = state
        .lichess
        .user(id)
        .await
        .map_err(AppError::upstream(ValidationError::InvalidId))?;

    Ok(Json(shapers::user_profile(&user)))
}

/// A user's identity together with their rank and result streaks in one mode.
#[utoipa::path(
    get,
    path = "/chess/user/enriched",
    tag = "chess",
    params(EnrichedUserQuery),
    responses(
        (status = 200, description = "User summary with rank and result streaks", body = EnrichedUser),
        (status = 400, description = "Missing or invalid id or mode", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Lichess failed", body = ErrorResponse),
    )
)]
#[debug_handler]
pub(crate) async fn enriched_user(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EnrichedUserQuery>, QueryRejection>,
) -> Result<Json<EnrichedUser>, AppError> {
    let Query(query) = query.map_err(reject_query(ValidationError::InvalidIdOrMode))?;
    let (id, mode) = validation::validate_id_and_mode(query.id.as_deref(), query.mode.as_deref())?;

    let user = state
        .lichess
        .user(id)
        .await
        .map_err(AppError::upstream(ValidationError::InvalidIdOrMode))?;

    let summary = shapers::user_summary(&user);
    // The performance URL is keyed by username, so stop here without one
    let username = summary
        .username
        .clone()
        .filter(|username| !username.is_empty())
        .ok_or(AppError::UserNotFound)?;

    tracing::debug!(%id, %username, %mode, "enriching user");

    let performance = state
        .lichess
        .user_performance(&username, mode)
        .await
        .map_err(AppError::upstream(ValidationError::InvalidIdOrMode))?;

    Ok(Json(shapers::enriched_user(summary, &performance)))
}

/// Rating history, in one mode, of the player ranked `top` in that mode.
#[utoipa::path(
    get,
    path = "/chess/topPlayerHistory",
    tag = "chess",
    params(TopPlayerHistoryQuery),
    responses(
        (status = 200, description = "Dated ratings of the selected player", body = RatingHistoryResult),
        (status = 400, description = "Missing, invalid or out of range top or mode", body = ErrorResponse),
        (status = 404, description = "No player at that rank, or no history in that mode", body = ErrorResponse),
        (status = 500, description = "Lichess failed", body = ErrorResponse),
    )
)]
#[debug_handler]
pub(crate) async fn top_player_history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TopPlayerHistoryQuery>, QueryRejection>,
) -> Result<Json<RatingHistoryResult>, AppError> {
    let Query(query) = query.map_err(reject_query(ValidationError::InvalidTopOrMode))?;
    let (top, mode) =
        validation::validate_top_and_mode(query.top.as_deref(), query.mode.as_deref())?;

    let top_players = state
        .lichess
        .top_players(mode)
        .await
        .map_err(AppError::upstream(ValidationError::InvalidTopOrMode))?;

    let username = shapers::ranked_username(top_players, top).ok_or(AppError::UserNotFound)?;

    tracing::debug!(top, %mode, %username, "fetching rating history");

    let histories = state
        .lichess
        .rating_history(&username)
        .await
        .map_err(AppError::upstream(ValidationError::InvalidTopOrMode))?;

    let result =
        shapers::rating_history(username, histories, mode).ok_or(AppError::RatingHistoryNotFound)?;

    Ok(Json(result))
}
