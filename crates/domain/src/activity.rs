//! Derived views over a user's logged workout sets.
//!
//! Every function is pure and operates on a slice the caller has already
//! scoped to one user. Two time bases coexist here and must not be mixed up:
//! volume series and streaks bucket by calendar day, while "recent" counts
//! use a rolling seven-day wall-clock window.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{ExerciseID, WorkoutSet, WorkoutSetID};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Number of logged entries, not multiplied out by their set count.
    pub total_sets: usize,
    /// Sum of [`exercise_volume`] over all entries, in kilograms.
    pub total_weight: f32,
    /// Entries within the rolling seven-day window.
    pub recent_count: usize,
}

#[must_use]
pub fn dashboard_stats(sets: &[WorkoutSet], now: NaiveDateTime) -> DashboardStats {
    DashboardStats {
        total_sets: sets.len(),
        total_weight: sets.iter().map(exercise_volume).sum(),
        recent_count: recent_count(sets, now),
    }
}

/// Partitions sets by the calendar date of their timestamp.
#[must_use]
pub fn group_by_day(sets: &[WorkoutSet]) -> BTreeMap<NaiveDate, Vec<&WorkoutSet>> {
    let mut days: BTreeMap<NaiveDate, Vec<&WorkoutSet>> = BTreeMap::new();
    for set in sets {
        days.entry(set.date.date()).or_default().push(set);
    }
    days
}

/// Total weight moved per day for the trailing seven calendar days including
/// `today`, oldest day first. Days without sets contribute 0. Warmup and
/// failure sets count the same as normal ones.
#[must_use]
pub fn weekly_volume(sets: &[WorkoutSet], today: NaiveDate) -> Vec<(NaiveDate, f32)> {
    let days = group_by_day(sets);
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let volume = days
                .get(&day)
                .map(|sets| sets.iter().map(|s| s.total_weight).sum())
                .unwrap_or(0.0);
            (day, volume)
        })
        .collect()
}

/// The ids of all sets whose total weight equals the all-time maximum for
/// their exercise. Ties are all flagged; there is no tie-break by reps or
/// date.
#[must_use]
pub fn personal_records(sets: &[WorkoutSet]) -> BTreeSet<WorkoutSetID> {
    let mut maxima: BTreeMap<ExerciseID, f32> = BTreeMap::new();
    for set in sets {
        let max = maxima.entry(set.exercise_id).or_insert(set.total_weight);
        if set.total_weight > *max {
            *max = set.total_weight;
        }
    }
    sets.iter()
        .filter(|s| maxima[&s.exercise_id] == s.total_weight)
        .map(|s| s.id)
        .collect()
}

/// The heaviest total weight ever logged for the exercise.
#[must_use]
pub fn max_total_weight(sets: &[WorkoutSet], exercise_id: ExerciseID) -> Option<f32> {
    sets.iter()
        .filter(|s| s.exercise_id == exercise_id)
        .map(|s| s.total_weight)
        .max_by(f32::total_cmp)
}

/// All sets for the exercise, newest first.
#[must_use]
pub fn exercise_history(sets: &[WorkoutSet], exercise_id: ExerciseID) -> Vec<&WorkoutSet> {
    let mut history = sets
        .iter()
        .filter(|s| s.exercise_id == exercise_id)
        .collect::<Vec<_>>();
    history.sort_by_key(|s| std::cmp::Reverse(s.date));
    history
}

/// Weight moved by one entry: total weight times reps times sets.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn exercise_volume(set: &WorkoutSet) -> f32 {
    set.total_weight * u32::from(set.reps) as f32 * u32::from(set.sets) as f32
}

/// Consecutive training days ending today or yesterday.
///
/// The count starts only if today or yesterday has at least one set and walks
/// backward day by day until the first gap, bounded at 365 days.
#[must_use]
pub fn streak(sets: &[WorkoutSet], today: NaiveDate) -> u32 {
    let days = sets.iter().map(|s| s.date.date()).collect::<BTreeSet<_>>();
    let start = if days.contains(&today) {
        today
    } else if days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut count = 0;
    let mut day = start;
    while count < 365 && days.contains(&day) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}

/// Number of sets logged within the last 7 x 24 hours, wall-clock relative.
/// Not calendar-aligned, unlike [`weekly_volume`].
#[must_use]
pub fn recent_count(sets: &[WorkoutSet], now: NaiveDateTime) -> usize {
    sets.iter()
        .filter(|s| now - s.date < Duration::days(7))
        .count()
}
