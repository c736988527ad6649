//! Pure transforms from lichess payloads to our response bodies.

use lichess_client::{GameMode, Leaderboard, RatingHistory, TopPlayers, User, UserPerformance};
use serde_json::Value;

use crate::models::{
    EnrichedUser, ModeStats, PerformanceStreak, PlayTime, Profile, RatingHistoryResult,
    RatingPoint, StreakCount, UserProfile, UserSummary,
};

/// Renames `perfs` to `modes` on every entry of every array-valued mode.
/// Everything else passes through untouched.
pub fn top_ten(mut leaderboard: Leaderboard) -> Leaderboard {
    for players in leaderboard.values_mut() {
        let Value::Array(entries) = players else {
            continue;
        };
        for entry in entries.iter_mut() {
            if let Value::Object(fields) = entry {
                if let Some(perfs) = fields.remove("perfs") {
                    fields.insert("modes".to_string(), perfs);
                }
            }
        }
    }
    leaderboard
}

pub fn user_summary(user: &User) -> UserSummary {
    UserSummary {
        id: user.id.clone(),
        username: user.username.clone(),
        profile: user.profile.as_ref().map(|p| Profile {
            bio: p.bio.clone(),
            real_name: p.real_name.clone(),
            links: p.links.clone(),
        }),
        play_time: user.play_time.as_ref().map(|t| PlayTime {
            total: t.total,
            tv: t.tv,
        }),
    }
}

pub fn user_profile(user: &User) -> UserProfile {
    UserProfile {
        summary: user_summary(user),
        modes: user.perfs.as_ref().map(|perfs| {
            perfs
                .iter()
                .map(|(mode, perf)| {
                    let stats = ModeStats {
                        games: perf.games,
                        rating: perf.rating,
                        rd: perf.rd,
                        prog: perf.prog,
                        prov: perf.prov,
                    };
                    (mode.clone(), stats)
                })
                .collect()
        }),
        flair: user.flair.clone(),
        patron: user.patron,
        verified: user.verified,
        created_at: user.created_at,
        seen_at: user.seen_at,
    }
}

pub fn performance_streak(performance: &UserPerformance) -> PerformanceStreak {
    let streak = &performance.stat.result_streak;
    PerformanceStreak {
        wins: StreakCount {
            current: streak.win.cur.v,
            max: streak.win.max.v,
        },
        losses: StreakCount {
            current: streak.loss.cur.v,
            max: streak.loss.max.v,
        },
    }
}

pub fn enriched_user(user: UserSummary, performance: &UserPerformance) -> EnrichedUser {
    EnrichedUser {
        user,
        rank: performance.rank,
        result_streak: performance_streak(performance),
    }
}

/// Username at 1-based `position`, if that position exists and carries one.
pub fn ranked_username(top_players: TopPlayers, position: usize) -> Option<String> {
    let index = position.checked_sub(1)?;
    top_players
        .users
        .into_iter()
        .nth(index)
        .and_then(|player| player.username)
        .filter(|username| !username.is_empty())
}

/// History of the entry whose name matches `mode` ignoring ASCII case.
/// `None` when no entry matches.
pub fn rating_history(
    username: String,
    histories: Vec<RatingHistory>,
    mode: GameMode,
) -> Option<RatingHistoryResult> {
    let entry = histories
        .into_iter()
        .find(|h| h.name.eq_ignore_ascii_case(mode.as_str()))?;

    let history = entry
        .points
        .iter()
        .map(|[year, month, day, rating]| RatingPoint {
            date: format!("{}-{}-{}", year, month, day),
            rating: *rating,
        })
        .collect();

    Some(RatingHistoryResult { username, history })
}
