//! Tests against the bundled demo dataset

use examseat_core::allocator::allocate;
use examseat_core::estimate::estimate_capacity;
use examseat_core::invigilation::{DutyLedger, assign_invigilators};
use examseat_core::palette::PaperPalette;
use examseat_core::report::SeatingReport;
use examseat_core::sample::{self, SAMPLE_DATE, SAMPLE_TIME};
use examseat_core::session::{filter_session, list_sessions};

#[test]
fn test_sample_is_a_single_session() {
    let sessions = list_sessions(&sample::students());
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].students, 250);
    assert_eq!(sessions[0].to_string(), format!("{SAMPLE_DATE} {SAMPLE_TIME}"));
    assert_eq!(filter_session(&sample::students(), SAMPLE_DATE, SAMPLE_TIME).len(), 250);
}

#[test]
fn test_sample_allocation_uses_ten_rooms() {
    let allocation = allocate(&sample::students(), &sample::rooms()).unwrap();

    assert_eq!(allocation.leftover, 0);
    assert_eq!(allocation.plan.seated_count(), 250);
    let names: Vec<&str> = allocation.plan.room_names().collect();
    let expected: Vec<String> = (1..=10).map(|i| format!("ROOM-{i}")).collect();
    assert_eq!(names, expected);

    // Checkerboard while both papers last, CS101 on even squares
    let first = allocation.plan.get("ROOM-1").unwrap();
    for (row, col, seat) in first.occupied() {
        let expected = if (row + col) % 2 == 0 { "CS101" } else { "MA202" };
        assert_eq!(seat.paper_code, expected, "ROOM-1 R{}C{}", row + 1, col + 1);
    }
    assert_eq!(first.occupied_count(), 36);

    // MA202 runs out on the first seat of the last row of ROOM-4
    let fourth = allocation.plan.get("ROOM-4").unwrap();
    assert_eq!(fourth.occupied_count(), 34);
    let last_row: Vec<Option<&str>> = (0..6).map(|col| fourth.paper_at(5, col)).collect();
    assert_eq!(
        last_row,
        vec![
            Some("MA202"),
            Some("CS101"),
            None,
            Some("CS101"),
            None,
            Some("CS101"),
        ]
    );

    for name in &expected[4..] {
        let grid = allocation.plan.get(name).unwrap();
        assert_eq!(grid.occupied_count(), 18, "{name}");
        assert!(grid.occupied().all(|(_, _, seat)| seat.paper_code == "CS101"));
    }
}

#[test]
fn test_sample_estimate_matches_rooms_used() {
    let estimate = estimate_capacity(&sample::students(), &sample::rooms());
    assert_eq!(estimate.required_seats, 359);
    assert_eq!(estimate.rooms_needed, 10);
    assert!(estimate.is_sufficient());
}

#[test]
fn test_sample_report_and_duties() {
    let allocation = allocate(&sample::students(), &sample::rooms()).unwrap();
    let mut ledger = DutyLedger::new(sample::faculty()).unwrap();
    let assignments = assign_invigilators(&allocation.plan, &mut ledger).unwrap();

    assert_eq!(assignments.len(), 10);
    assert_eq!(assignments[0].invigilator, "Faculty-1");
    assert_eq!(assignments[8].invigilator, "Faculty-9");
    assert_eq!(assignments[9].invigilator, "Faculty-1");
    assert_eq!(ledger.duties_of("Faculty-1"), Some(2));
    assert_eq!(ledger.duties_of("Faculty-5"), Some(1));

    let report = SeatingReport::build(&allocation.plan, &assignments, allocation.leftover);
    assert_eq!(report.master.len(), 250);
    assert_eq!(report.master[0].roll_no, "STU1000");
    assert_eq!(report.master[0].room, "ROOM-1");
    assert_eq!(report.master[0].seat, "R1C1");

    let first_ma = report.master.iter().find(|e| e.roll_no == "STU1180").unwrap();
    assert_eq!(first_ma.paper_code, "MA202");
    assert_eq!(first_ma.seat, "R1C2");

    assert_eq!(report.sheets.len(), 10);
    assert_eq!(report.sheets.iter().map(|s| s.total).sum::<usize>(), 250);
    assert_eq!(report.sheets[9].invigilators, vec!["Faculty-1".to_string()]);
}

#[test]
fn test_sample_palette() {
    let palette = PaperPalette::from_roster(&sample::students());
    assert_eq!(palette.papers().collect::<Vec<_>>(), vec!["CS101", "MA202"]);
    assert_eq!(palette.slot("MA202"), Some(1));
    assert_ne!(palette.color("CS101"), palette.color("MA202"));
}
