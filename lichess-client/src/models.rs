use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A lichess game mode ("perf type"). Names are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
  UltraBullet,
  Bullet,
  Blitz,
  Rapid,
  Classical,
  Correspondence,
  Chess960,
  Crazyhouse,
  Antichess,
  Atomic,
  Horde,
  KingOfTheHill,
  RacingKings,
  ThreeCheck,
}

impl GameMode {
  pub const ALL: [GameMode; 14] = [
    GameMode::UltraBullet,
    GameMode::Bullet,
    GameMode::Blitz,
    GameMode::Rapid,
    GameMode::Classical,
    GameMode::Correspondence,
    GameMode::Chess960,
    GameMode::Crazyhouse,
    GameMode::Antichess,
    GameMode::Atomic,
    GameMode::Horde,
    GameMode::KingOfTheHill,
    GameMode::RacingKings,
    GameMode::ThreeCheck,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      GameMode::UltraBullet => "ultraBullet",
      GameMode::Bullet => "bullet",
      GameMode::Blitz => "blitz",
      GameMode::Rapid => "rapid",
      GameMode::Classical => "classical",
      GameMode::Correspondence => "correspondence",
      GameMode::Chess960 => "chess960",
      GameMode::Crazyhouse => "crazyhouse",
      GameMode::Antichess => "antichess",
      GameMode::Atomic => "atomic",
      GameMode::Horde => "horde",
      GameMode::KingOfTheHill => "kingOfTheHill",
      GameMode::RacingKings => "racingKings",
      GameMode::ThreeCheck => "threeCheck",
    }
  }
}

impl fmt::Display for GameMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGameMode(pub String);

impl fmt::Display for UnknownGameMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown game mode '{}'", self.0)
  }
}

impl std::error::Error for UnknownGameMode {}

impl FromStr for GameMode {
  type Err = UnknownGameMode;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    GameMode::ALL
      .into_iter()
      .find(|mode| mode.as_str() == s)
      .ok_or_else(|| UnknownGameMode(s.to_string()))
  }
}

/// `GET /api/player`: mode name to its ranked players. Kept untyped so
/// entries can be reshaped without losing fields.
pub type Leaderboard = BTreeMap<String, serde_json::Value>;

/// `GET /api/user/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Option<String>,
  pub username: Option<String>,
  pub perfs: Option<BTreeMap<String, Perf>>,
  pub flair: Option<String>,
  pub patron: Option<bool>,
  pub verified: Option<bool>,
  pub created_at: Option<u64>,
  pub profile: Option<Profile>,
  pub seen_at: Option<u64>,
  pub play_time: Option<PlayTime>,
}

/// Rating summary for one mode in a user's `perfs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Perf {
  pub games: Option<u64>,
  pub rating: Option<i64>,
  pub rd: Option<i64>,
  pub prog: Option<i64>,
  pub prov: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub bio: Option<String>,
  pub real_name: Option<String>,
  pub links: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayTime {
  pub total: Option<u64>,
  pub tv: Option<u64>,
}

/// `GET /api/user/{username}/perf/{mode}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPerformance {
  pub rank: Option<u64>,
  #[serde(default)]
  pub stat: PerfStat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStat {
  #[serde(default)]
  pub result_streak: ResultStreak,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultStreak {
  #[serde(default)]
  pub win: Streak,
  #[serde(default)]
  pub loss: Streak,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Streak {
  #[serde(default)]
  pub cur: StreakValue,
  #[serde(default)]
  pub max: StreakValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreakValue {
  #[serde(default)]
  pub v: u64,
}

/// `GET /api/player/top/{n}/{mode}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopPlayers {
  #[serde(default)]
  pub users: Vec<RankedPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankedPlayer {
  pub id: Option<String>,
  pub username: Option<String>,
}

/// One element of `GET /api/user/{username}/rating-history`.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingHistory {
  pub name: String,
  /// `[year, month, day, rating]`
  #[serde(default)]
  pub points: Vec<[i64; 4]>,
}
