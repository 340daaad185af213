//! Exam sessions
//!
//! A roster may cover several exam slots. Allocation always runs on one
//! slot at a time, so the caller lists the sessions present in the roster
//! and filters it down before seating.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::RosterEntry;

/// One exam slot: a date and a time (or shift).
///
/// Entries without a date or time belong to the unscheduled session where
/// both fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExamSession {
    /// Exam date as written in the roster
    pub date: Option<String>,
    /// Exam time as written in the roster
    pub time: Option<String>,
    /// Number of students sitting in this session
    pub students: usize,
}

impl ExamSession {
    /// Returns true for roster entries belonging to this session
    #[must_use]
    pub fn matches(&self, entry: &RosterEntry) -> bool {
        entry.exam_date == self.date && entry.exam_time == self.time
    }
}

impl fmt::Display for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.date, &self.time) {
            (None, None) => write!(f, "unscheduled"),
            (date, time) => write!(
                f,
                "{} {}",
                date.as_deref().unwrap_or("-"),
                time.as_deref().unwrap_or("-")
            ),
        }
    }
}

/// Lists the distinct sessions of a roster.
///
/// Dates are ordered chronologically when both parse as `YYYY-MM-DD`, as
/// plain strings otherwise; the unscheduled session sorts first. Times are
/// ordered as strings within a date.
#[must_use]
pub fn list_sessions(roster: &[RosterEntry]) -> Vec<ExamSession> {
    let mut sessions: Vec<ExamSession> = Vec::new();
    for entry in roster {
        if let Some(session) = sessions.iter_mut().find(|s| s.matches(entry)) {
            session.students += 1;
        } else {
            sessions.push(ExamSession {
                date: entry.exam_date.clone(),
                time: entry.exam_time.clone(),
                students: 1,
            });
        }
    }

    sessions.sort_by(|a, b| {
        compare_dates(a.date.as_deref(), b.date.as_deref()).then_with(|| a.time.cmp(&b.time))
    });
    sessions
}

/// Keeps the roster entries of one session, in roster order
#[must_use]
pub fn filter_session(roster: &[RosterEntry], date: &str, time: &str) -> Vec<RosterEntry> {
    roster
        .iter()
        .filter(|entry| {
            entry.exam_date.as_deref() == Some(date) && entry.exam_time.as_deref() == Some(time)
        })
        .cloned()
        .collect()
}

fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let parsed = (
                NaiveDate::parse_from_str(a.trim(), "%Y-%m-%d"),
                NaiveDate::parse_from_str(b.trim(), "%Y-%m-%d"),
            );
            match parsed {
                (Ok(da), Ok(db)) => da.cmp(&db).then_with(|| a.cmp(b)),
                _ => a.cmp(b),
            }
        }
        (a, b) => a.cmp(&b),
    }
}
