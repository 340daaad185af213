//! Property-based tests for session listing and filtering

use std::collections::HashSet;

use chrono::NaiveDate;
use examseat_core::models::RosterEntry;
use examseat_core::session::{filter_session, list_sessions};
use proptest::prelude::*;

// ========== Strategies ==========

const DATES: [&str; 4] = ["2026-02-10", "2026-02-09", "2026-03-01", "2025-12-31"];
const TIMES: [&str; 2] = ["09:00 AM", "02:00 PM"];

/// Roster where each entry is either unscheduled or in one of eight slots
fn arb_roster() -> impl Strategy<Value = Vec<RosterEntry>> {
    prop::collection::vec(prop::option::of((0..DATES.len(), 0..TIMES.len())), 0..60).prop_map(
        |slots| {
            slots
                .into_iter()
                .enumerate()
                .map(|(i, slot)| {
                    let entry = RosterEntry::new(format!("S{i}"), if i % 3 == 0 { "A" } else { "B" });
                    match slot {
                        Some((d, t)) => entry.with_session(DATES[d], TIMES[t]),
                        None => entry,
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn sessions_partition_the_roster(roster in arb_roster()) {
        let sessions = list_sessions(&roster);

        let total: usize = sessions.iter().map(|s| s.students).sum();
        prop_assert_eq!(total, roster.len());

        let distinct: HashSet<_> = sessions.iter().map(|s| (s.date.clone(), s.time.clone())).collect();
        prop_assert_eq!(distinct.len(), sessions.len());

        for entry in &roster {
            prop_assert_eq!(sessions.iter().filter(|s| s.matches(entry)).count(), 1);
        }
    }

    #[test]
    fn filtering_a_session_keeps_its_students_in_order(roster in arb_roster()) {
        for session in list_sessions(&roster) {
            let (Some(date), Some(time)) = (session.date.as_deref(), session.time.as_deref()) else {
                continue;
            };
            let filtered = filter_session(&roster, date, time);
            prop_assert_eq!(filtered.len(), session.students);

            let expected: Vec<&RosterEntry> = roster.iter().filter(|e| session.matches(e)).collect();
            prop_assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn sessions_are_ordered_by_date(roster in arb_roster()) {
        let sessions = list_sessions(&roster);
        let dates: Vec<Option<NaiveDate>> = sessions
            .iter()
            .map(|s| {
                s.date
                    .as_deref()
                    .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            })
            .collect();

        for pair in dates.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?} listed before {:?}", pair[0], pair[1]);
        }
    }
}
