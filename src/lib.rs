//! # studylog-engine - StudyLog progression and review core
//!
//! Pure Rust implementation of the calculation core behind StudyLog's
//! gamified study tracking:
//!
//! - **Progression Calculator** - XP rules, level curve, study streaks
//! - **Review Scheduler** - fixed-ladder spaced repetition for resources
//!
//! Design goals:
//! - **Pure** - no I/O, no clock reads, no global state; every function
//!   maps input snapshots to freshly built values
//! - **Reusable** - the same core serves the synced backend and the
//!   local-only guest mode
//! - **Testable** - the day-boundary reference ("today") is always an
//!   explicit parameter so tests can pin it
//!
//! Module structure:
//!
//! - [`progression`] - XP gains, level formula, streak calculation
//! - [`review`] - spaced-repetition state machine and due queries
//! - [`types`] - shared entity types and constants
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use studylog_engine::{
//!     advance_review, level_info, session_xp, LearningResource, ReviewStatus,
//! };
//!
//! let gain = session_xp(25);
//! assert_eq!(gain.amount, 10);
//!
//! let info = level_info(20);
//! assert_eq!(info.level, 3);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
//! let resource = LearningResource {
//!     id: "rust-book".to_string(),
//!     priority: 1,
//!     review_status: ReviewStatus::New,
//!     next_review_date: None,
//!     last_review_interval_days: None,
//! };
//! let reviewed = advance_review(&resource, today);
//! assert_eq!(reviewed.last_review_interval_days, Some(3));
//! ```

pub mod progression;
pub mod review;
pub mod types;

pub use types::*;

pub use progression::{
    apply_gains, goal_completion_xp, goal_transition_xp, level_for_xp, level_info,
    resource_creation_xp, session_xp, streak, xp_for_level, LevelInfo, StreakSummary, XpGain,
};

pub use review::{
    advance_review, days_until_review, due_resources, is_due_today, next_interval_days,
    snooze_review,
};
