//! Progression Calculator
//!
//! Pure functions mapping study events to XP gains, cumulative XP to a
//! level, and session history to streak counts.
//!
//! Formulas:
//! - Session XP: floor(minutes / 5) * 2
//! - Level: floor(sqrt(xp) / 2) + 1, so level boundaries sit at
//!   xp = (2k)^2 for k = 0, 1, 2, ...
//! - Streak: consecutive calendar days with at least one session of
//!   positive duration, anchored at today or yesterday
//!
//! The caller owns persistence: it sums XP events atomically, applies
//! them via [`apply_gains`], and stores the result.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{
    GoalStatus, ProgressState, StudySession, GOAL_COMPLETION_XP, HIGHEST_PRIORITY,
    HIGH_PRIORITY_RESOURCE_XP, SESSION_XP_BLOCK_MINUTES, XP_PER_FIVE_MINUTES,
};

/// A single XP event. `reason` is for activity feeds and logs only and
/// never feeds back into any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpGain {
    pub amount: u64,
    pub reason: String,
}

/// Level derived from cumulative XP, with the surrounding thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u32,
    pub xp_for_current_level: u64,
    pub xp_for_next_level: u64,
    /// Fraction of the way from the current threshold to the next, in [0, 1]
    pub progress_to_next: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

// ==================== XP Rules ====================

/// XP for a completed study session: 2 XP per full 5-minute block.
/// Sessions shorter than 5 minutes earn nothing.
pub fn session_xp(duration_minutes: u32) -> XpGain {
    let blocks = duration_minutes / SESSION_XP_BLOCK_MINUTES;
    XpGain {
        amount: blocks as u64 * XP_PER_FIVE_MINUTES,
        reason: format!("Study session ({duration_minutes} min)"),
    }
}

/// XP for creating a resource. Only highest-priority resources earn a
/// bonus; anything else is simply not an XP event.
pub fn resource_creation_xp(priority: u8) -> Option<XpGain> {
    if priority == HIGHEST_PRIORITY {
        Some(XpGain {
            amount: HIGH_PRIORITY_RESOURCE_XP,
            reason: "High-priority resource created".to_string(),
        })
    } else {
        None
    }
}

/// Flat XP for completing a goal
pub fn goal_completion_xp() -> XpGain {
    XpGain {
        amount: GOAL_COMPLETION_XP,
        reason: "Goal completed".to_string(),
    }
}

/// XP for a goal status change. Grants exactly once, on the transition
/// into `Completed` from any other status; re-saving an already
/// completed goal earns nothing.
pub fn goal_transition_xp(previous: GoalStatus, next: GoalStatus) -> Option<XpGain> {
    if next == GoalStatus::Completed && previous != GoalStatus::Completed {
        Some(goal_completion_xp())
    } else {
        None
    }
}

// ==================== Level Formula ====================

/// level(xp) = floor(sqrt(xp) / 2) + 1
pub fn level_for_xp(xp: u64) -> u32 {
    ((xp as f64).sqrt() / 2.0).floor() as u32 + 1
}

/// Inverse threshold: the minimum XP at which `level` is reached.
/// (2 * (L - 1))^2 for L >= 2, zero below that.
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let step = 2 * (level as u64 - 1);
    step * step
}

/// Level plus progress toward the next threshold
pub fn level_info(total_xp: u64) -> LevelInfo {
    let level = level_for_xp(total_xp);
    let current = xp_for_level(level);
    let next = xp_for_level(level + 1);
    let span = (next - current) as f64;
    let progress = ((total_xp - current) as f64 / span).clamp(0.0, 1.0);
    LevelInfo {
        level,
        xp_for_current_level: current,
        xp_for_next_level: next,
        progress_to_next: progress,
    }
}

/// Fold a batch of XP events into a progress state, recomputing the
/// level from the new total. Streak fields pass through untouched;
/// they are owned by [`streak`].
pub fn apply_gains(state: &ProgressState, gains: &[XpGain]) -> ProgressState {
    let earned: u64 = gains.iter().map(|g| g.amount).sum();
    let xp = state.xp + earned;
    ProgressState {
        xp,
        level: level_for_xp(xp),
        current_streak_days: state.current_streak_days,
        longest_streak_days: state.longest_streak_days,
    }
}

// ==================== Streaks ====================

/// Current and longest streak over the full session history.
///
/// A calendar day counts as studied when any session started that day
/// has positive duration. The current streak anchors at `today`, or at
/// yesterday when today has no study yet (so an unbroken run is not
/// reported as zero before the user studies today).
pub fn streak(sessions: &[StudySession], today: NaiveDate) -> StreakSummary {
    let studied_days: BTreeSet<NaiveDate> = sessions
        .iter()
        .filter(|s| s.duration_minutes > 0)
        .map(|s| s.started_at.date_naive())
        .collect();

    if studied_days.is_empty() {
        return StreakSummary {
            current_streak: 0,
            longest_streak: 0,
        };
    }

    StreakSummary {
        current_streak: current_run(&studied_days, today),
        longest_streak: longest_run(&studied_days),
    }
}

fn current_run(studied_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if studied_days.contains(&today) {
        today
    } else if studied_days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut count = 0u32;
    let mut day = anchor;
    while studied_days.contains(&day) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}

fn longest_run(studied_days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &day in studied_days {
        run = match prev {
            Some(p) if day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}
