//! Common Types and Constants
//!
//! Shared data structures used by the progression calculator and the
//! review scheduler. All types are plain value records; engine functions
//! never mutate their inputs and always return freshly built values.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// XP granted per full block of study time
pub const XP_PER_FIVE_MINUTES: u64 = 2;

/// Size of one study-time block in minutes
pub const SESSION_XP_BLOCK_MINUTES: u32 = 5;

/// Flat XP bonus for creating a highest-priority resource
pub const HIGH_PRIORITY_RESOURCE_XP: u64 = 5;

/// Flat XP bonus for completing a goal
pub const GOAL_COMPLETION_XP: u64 = 10;

/// Highest resource priority (priorities run 1..=5, 1 is highest)
pub const HIGHEST_PRIORITY: u8 = 1;

/// Spaced-repetition interval ladder in days, in climbing order.
/// A resource walks this ladder one rung per successful review and is
/// retired (`Done`) after the last rung.
pub const REVIEW_INTERVALS: [u32; 4] = [3, 7, 14, 30];

/// Days added to the next review date by a snooze
pub const SNOOZE_DAYS: i64 = 1;

// ==================== Study Sessions ====================

/// A single logged study session. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    /// Length of the session in minutes. Callers guarantee this is the
    /// actual elapsed time; zero is valid (an aborted session).
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Soft reference to the resource studied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

// ==================== Learning Resources ====================

/// Lifecycle of a resource inside the spaced-repetition scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    New,
    Learning,
    Reviewing,
    Done,
}

impl ReviewStatus {
    /// Tolerant parse: unrecognized values fall back to `New`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "learning" => Self::Learning,
            "reviewing" => Self::Reviewing,
            "done" => Self::Done,
            _ => Self::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Reviewing => "reviewing",
            Self::Done => "done",
        }
    }
}

/// A learning resource tracked by the review scheduler.
///
/// `review_status`, `next_review_date` and `last_review_interval_days`
/// together form the scheduler's state machine. After any engine
/// transition, `next_review_date` is `None` exactly when the status is
/// `Done`, and `last_review_interval_days` is one of [`REVIEW_INTERVALS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    /// 1..=5, 1 is highest
    pub priority: u8,
    pub review_status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_interval_days: Option<u32>,
}

// ==================== Goals ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
    Cancelled,
}

impl GoalStatus {
    /// Tolerant parse: unrecognized values fall back to `Active`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "completed" => Self::Completed,
            "paused" => Self::Paused,
            "cancelled" => Self::Cancelled,
            _ => Self::Active,
        }
    }
}

/// A study goal. The engine only cares about the transition into
/// `Completed`; everything else about a goal is opaque to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub status: GoalStatus,
}

// ==================== Progress State ====================

/// Cumulative per-user progression state.
///
/// `level` is always a pure function of `xp`; the streak fields are
/// always a pure function of the full session history. The engine
/// recomputes these, it never increments them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub xp: u64,
    pub level: u32,
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            current_streak_days: 0,
            longest_streak_days: 0,
        }
    }
}

// ==================== Clock Helper ====================

/// Today's date at the local midnight boundary.
///
/// Engine functions take `today` as an explicit parameter so tests can
/// pin it; callers outside tests pass this.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
