//! Response bodies of the chess routes. Optional fields are omitted, never null.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "realName", skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlayTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv: Option<u64>,
}

/// Rating summary of one mode on a user profile
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ModeStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prog: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prov: Option<bool>,
}

/// The identity part of a user shared by the profile and enriched routes.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_time: Option<PlayTime>,
}

/// `GET /chess/user`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub summary: UserSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<BTreeMap<String, ModeStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patron: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_at: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StreakCount {
    pub current: u64,
    pub max: u64,
}

/// Both halves are always present, zero when lichess reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PerformanceStreak {
    pub wins: StreakCount,
    pub losses: StreakCount,
}

/// `GET /chess/user/enriched`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedUser {
    #[serde(flatten)]
    pub user: UserSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
    pub result_streak: PerformanceStreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RatingPoint {
    /// `Y-M-D`, unpadded, as lichess reports it
    pub date: String,
    pub rating: i64,
}

/// `GET /chess/topPlayerHistory`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RatingHistoryResult {
    pub username: String,
    pub history: Vec<RatingPoint>,
}

/// Rating of one mode on a leaderboard entry. Documentation only: the
/// leaderboard is reshaped structurally and passes these through.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardRating {
    pub rating: i64,
    pub progress: i64,
}

/// One ranked player under a mode of `GET /chess/top10`. Documentation only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardPlayer {
    pub id: String,
    pub username: String,
    pub modes: BTreeMap<String, LeaderboardRating>,
}
