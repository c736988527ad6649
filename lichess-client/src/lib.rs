mod error;
mod models;

pub use error::{Result, UpstreamError, UpstreamFailure, classify};
pub use models::{
  GameMode, Leaderboard, Perf, PerfStat, PlayTime, Profile, RankedPlayer, RatingHistory,
  ResultStreak, Streak, StreakValue, TopPlayers, UnknownGameMode, User, UserPerformance,
};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Path templates for every lichess endpoint we call.
///
/// Placeholders (`{id}`, `{username}`, `{mode}`) are substituted by plain
/// string replacement.
#[derive(Debug, Clone)]
pub struct Endpoints {
  pub base_url: String,
  pub leaderboard: String,
  pub user_by_id: String,
  pub user_performance: String,
  pub rating_history: String,
  pub top_players: String,
}

impl Endpoints {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      leaderboard: "/api/player".to_string(),
      user_by_id: "/api/user/{id}".to_string(),
      user_performance: "/api/user/{username}/perf/{mode}".to_string(),
      rating_history: "/api/user/{username}/rating-history".to_string(),
      top_players: "/api/player/top/10/{mode}".to_string(),
    }
  }

  /// Join `template` onto the base URL with each `(placeholder, value)` applied.
  pub fn render(&self, template: &str, substitutions: &[(&str, &str)]) -> String {
    let path = substitutions
      .iter()
      .fold(template.to_string(), |path, (placeholder, value)| {
        path.replace(placeholder, value)
      });
    format!("{}{}", self.base_url, path)
  }
}

impl Default for Endpoints {
  fn default() -> Self {
    Self::new(DEFAULT_BASE_URL)
  }
}

/// Thin wrapper over one GET per lichess endpoint. No retries, no caching.
#[derive(Clone)]
pub struct LichessClient {
  http: Client,
  endpoints: Endpoints,
}

impl LichessClient {
  pub fn new(endpoints: Endpoints) -> Self {
    Self {
      http: Client::new(),
      endpoints,
    }
  }

  pub fn endpoints(&self) -> &Endpoints {
    &self.endpoints
  }

  /// Top players of every mode.
  pub async fn leaderboard(&self) -> Result<Leaderboard> {
    let url = self.endpoints.render(&self.endpoints.leaderboard, &[]);
    self.get_json(&url).await
  }

  pub async fn user(&self, id: &str) -> Result<User> {
    let url = self
      .endpoints
      .render(&self.endpoints.user_by_id, &[("{id}", id)]);
    self.get_json(&url).await
  }

  pub async fn user_performance(&self, username: &str, mode: GameMode) -> Result<UserPerformance> {
    let url = self.endpoints.render(
      &self.endpoints.user_performance,
      &[("{username}", username), ("{mode}", mode.as_str())],
    );
    self.get_json(&url).await
  }

  /// Rating history of every mode the user has played.
  pub async fn rating_history(&self, username: &str) -> Result<Vec<RatingHistory>> {
    let url = self
      .endpoints
      .render(&self.endpoints.rating_history, &[("{username}", username)]);
    self.get_json(&url).await
  }

  /// Ranked players of one mode, best first.
  pub async fn top_players(&self, mode: GameMode) -> Result<TopPlayers> {
    let url = self
      .endpoints
      .render(&self.endpoints.top_players, &[("{mode}", mode.as_str())]);
    self.get_json(&url).await
  }

  /// The status is classified before the body is read.
  async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
    debug!(%url, "calling lichess");

    let response = self.http.get(url).send().await.map_err(|err| {
      error!(%url, ?err, "lichess request failed");
      UpstreamError::Transport(err)
    })?;

    let status = response.status();
    if let Some(failure) = classify(status) {
      match failure {
        UpstreamFailure::ServerError => error!(%url, %status, "lichess server error"),
        _ => warn!(%url, %status, ?failure, "lichess rejected request"),
      }
      return Err(UpstreamError::Status { status, failure });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| {
      error!(%url, ?err, "lichess payload did not match the expected shape");
      UpstreamError::Decode(err)
    })
  }
}
