//! Derived routine analytics.
//!
//! Everything here is a pure function of the routine collection, recomputed
//! on every call. There is no caching and no incremental update; the
//! collection is small enough that a full pass is the simplest correct
//! answer.

use serde::{Deserialize, Serialize};

use crate::routine::Routine;

/// Percentage of routines marked completed today, rounded to the nearest
/// integer. An empty collection rates 0.
pub fn completion_rate(routines: &[Routine]) -> u32 {
    if routines.is_empty() {
        return 0;
    }
    let completed = routines.iter().filter(|r| r.completed_today).count();
    (100.0 * completed as f64 / routines.len() as f64).round() as u32
}

/// Mean streak across all routines, rounded to the nearest integer.
/// An empty collection averages 0.
pub fn average_streak(routines: &[Routine]) -> u32 {
    if routines.is_empty() {
        return 0;
    }
    let sum: u64 = routines.iter().map(|r| u64::from(r.streak)).sum();
    (sum as f64 / routines.len() as f64).round() as u32
}

/// Order routines by scheduled time: timed ones ascending by
/// minutes-since-midnight, any-time ones after all of them. The sort is
/// stable, so routines sharing a time (or all being any-time) keep their
/// relative insertion order.
pub fn sort_by_scheduled_time(routines: &mut [Routine]) {
    routines.sort_by_key(|r| r.scheduled_time.sort_key());
}

/// Aggregate statistics snapshot for presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineReport {
    /// Number of routines in the collection
    pub total_routines: usize,
    /// Routines marked completed today
    pub completed_today: usize,
    /// Rounded completion percentage (0-100)
    pub completion_rate: u32,
    /// Rounded mean streak
    pub average_streak: u32,
    /// Largest streak in the collection
    pub longest_streak: u32,
    /// Routines with a concrete scheduled time
    pub timed: usize,
    /// Routines scheduled at "any time"
    pub any_time: usize,
}

/// Compute the full report in one pass over the collection.
pub fn report(routines: &[Routine]) -> RoutineReport {
    let timed = routines
        .iter()
        .filter(|r| r.scheduled_time.minutes_from_midnight().is_some())
        .count();
    RoutineReport {
        total_routines: routines.len(),
        completed_today: routines.iter().filter(|r| r.completed_today).count(),
        completion_rate: completion_rate(routines),
        average_streak: average_streak(routines),
        longest_streak: routines.iter().map(|r| r.streak).max().unwrap_or(0),
        timed,
        any_time: routines.len() - timed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::{Routine, RoutineDraft};

    fn routine(title: &str, time: &str, completed: bool, streak: u32) -> Routine {
        let mut r = Routine::new(RoutineDraft {
            title: title.to_string(),
            description: None,
            scheduled_time: time.parse().unwrap(),
            frequency: Default::default(),
        })
        .unwrap();
        r.completed_today = completed;
        r.streak = streak;
        r
    }

    #[test]
    fn completion_rate_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
        assert_eq!(average_streak(&[]), 0);
    }

    #[test]
    fn completion_rate_one_of_four() {
        let routines = vec![
            routine("a", "any time", true, 0),
            routine("b", "any time", false, 0),
            routine("c", "any time", false, 0),
            routine("d", "any time", false, 0),
        ];
        assert_eq!(completion_rate(&routines), 25);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        // 1 of 3 completed -> 33.33 -> 33; 2 of 3 -> 66.67 -> 67
        let mut routines = vec![
            routine("a", "any time", true, 0),
            routine("b", "any time", false, 0),
            routine("c", "any time", false, 0),
        ];
        assert_eq!(completion_rate(&routines), 33);
        routines[1].completed_today = true;
        assert_eq!(completion_rate(&routines), 67);
    }

    #[test]
    fn average_streak_rounds() {
        let routines = vec![
            routine("a", "any time", false, 3),
            routine("b", "any time", false, 4),
        ];
        // 3.5 rounds up
        assert_eq!(average_streak(&routines), 4);
    }

    #[test]
    fn sort_places_any_time_last() {
        let mut routines = vec![
            routine("nine", "09:00", false, 0),
            routine("whenever", "any time", false, 0),
            routine("early", "07:30", false, 0),
        ];
        sort_by_scheduled_time(&mut routines);
        let titles: Vec<_> = routines.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["early", "nine", "whenever"]);
    }

    #[test]
    fn sort_is_stable_for_equal_times() {
        let mut routines = vec![
            routine("first", "08:00", false, 0),
            routine("free-a", "any time", false, 0),
            routine("second", "08:00", false, 0),
            routine("free-b", "any time", false, 0),
        ];
        sort_by_scheduled_time(&mut routines);
        let titles: Vec<_> = routines.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "free-a", "free-b"]);
    }

    #[test]
    fn report_aggregates_in_one_pass() {
        let routines = vec![
            routine("a", "07:00", true, 5),
            routine("b", "any time", false, 1),
            routine("c", "12:30", true, 2),
        ];
        let report = report(&routines);
        assert_eq!(report.total_routines, 3);
        assert_eq!(report.completed_today, 2);
        assert_eq!(report.completion_rate, 67);
        assert_eq!(report.average_streak, 3);
        assert_eq!(report.longest_streak, 5);
        assert_eq!(report.timed, 2);
        assert_eq!(report.any_time, 1);
    }
}
