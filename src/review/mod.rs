//! Review Scheduler
//!
//! Fixed-ladder spaced repetition over [`REVIEW_INTERVALS`]. Each
//! successful review climbs one rung (3 -> 7 -> 14 -> 30 days); after
//! the last rung the resource is retired to `Done`. A snooze pushes the
//! next review out by one day without touching the ladder position.
//!
//! There is no error path here: the only out-of-domain input the
//! scheduler can see is an interval value that is not on the ladder
//! (hand-edited or imported data), and that deliberately degrades to
//! the first rung rather than failing.

use chrono::{Duration, NaiveDate};

use crate::types::{LearningResource, ReviewStatus, REVIEW_INTERVALS, SNOOZE_DAYS};

/// The rung after `last`, or `None` when `last` is the final rung.
/// Values not on the ladder are treated as the first rung.
pub fn next_interval_days(last: Option<u32>) -> Option<u32> {
    let position = last
        .and_then(|days| REVIEW_INTERVALS.iter().position(|&rung| rung == days))
        .unwrap_or(0);
    REVIEW_INTERVALS.get(position + 1).copied()
}

/// Mark a resource as reviewed, advancing its ladder state.
///
/// - `New`/`Learning`: enters `Reviewing` at the first rung.
/// - `Reviewing`: climbs to the next rung, or retires to `Done` after
///   the last one (`next_review_date` cleared, the final interval kept
///   for display).
/// - `Done`: no-op; the terminal state is idempotent.
pub fn advance_review(resource: &LearningResource, today: NaiveDate) -> LearningResource {
    let mut next = resource.clone();
    match resource.review_status {
        ReviewStatus::Done => next,
        ReviewStatus::New | ReviewStatus::Learning => {
            let first = REVIEW_INTERVALS[0];
            next.review_status = ReviewStatus::Reviewing;
            next.last_review_interval_days = Some(first);
            next.next_review_date = Some(today + Duration::days(first as i64));
            next
        }
        ReviewStatus::Reviewing => match next_interval_days(resource.last_review_interval_days) {
            Some(interval) => {
                next.last_review_interval_days = Some(interval);
                next.next_review_date = Some(today + Duration::days(interval as i64));
                next
            }
            None => {
                next.review_status = ReviewStatus::Done;
                next.next_review_date = None;
                next
            }
        },
    }
}

/// Push the next review out by one day. Based on today when the
/// resource has no scheduled date yet. Status and ladder position are
/// untouched, so a snooze never loses progress.
pub fn snooze_review(resource: &LearningResource, today: NaiveDate) -> LearningResource {
    let mut next = resource.clone();
    let base = resource.next_review_date.unwrap_or(today);
    next.next_review_date = Some(base + Duration::days(SNOOZE_DAYS));
    next
}

/// A resource is due when it is still in rotation and its scheduled
/// date is today or earlier
pub fn is_due_today(resource: &LearningResource, today: NaiveDate) -> bool {
    if resource.review_status == ReviewStatus::Done {
        return false;
    }
    match resource.next_review_date {
        Some(date) => date <= today,
        None => false,
    }
}

/// Whole days until the scheduled review; negative when overdue,
/// `None` once a resource is `Done` or has no date
pub fn days_until_review(resource: &LearningResource, today: NaiveDate) -> Option<i64> {
    if resource.review_status == ReviewStatus::Done {
        return None;
    }
    resource
        .next_review_date
        .map(|date| (date - today).num_days())
}

/// Today's review queue: due resources, highest priority first, oldest
/// scheduled date breaking ties
pub fn due_resources<'a>(
    resources: &'a [LearningResource],
    today: NaiveDate,
) -> Vec<&'a LearningResource> {
    let mut due: Vec<&LearningResource> = resources
        .iter()
        .filter(|r| is_due_today(r, today))
        .collect();
    due.sort_by_key(|r| (r.priority, r.next_review_date));
    due
}
