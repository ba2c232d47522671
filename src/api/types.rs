//! Wire values exchanged with the site API.
//!
//! These are JSON-shaped values with no behavior of their own; the server is
//! authoritative for every field.

use serde::{Deserialize, Serialize};

/// Direction of a vote.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Body of a vote write.
#[derive(Debug, Clone, Serialize)]
pub struct VoteRequest {
    pub slug: String,
    pub direction: Direction,
}

/// A slug's vote state as reported by the server.
///
/// `score` is the aggregate across all voters; `user_vote` reflects only the
/// requesting client's own vote. The cast-vote response may omit `user_vote`
/// and either response may omit the per-direction counts, so all three parse
/// to their defaults when absent.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct VoteState {
    #[serde(default)]
    pub up: u64,
    #[serde(default)]
    pub down: u64,
    pub score: i64,
    #[serde(default)]
    pub user_vote: Option<Direction>,
}

/// Body of a subscription write.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Outcome of a subscription write. `ok` decides success regardless of the
/// HTTP status the body arrived with; a rejection body carrying only an
/// `error` field reads as `ok == false`.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct SubscribeResult {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of the operator-facing subscription roster.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub created_at: String,
}
