//! End-to-end tests from data files to reports

use std::fs;
use std::path::PathBuf;

use examseat_core::allocator::allocate;
use examseat_core::error::{ImportError, SeatingError};
use examseat_core::import::{load_faculty, load_rooms, load_students};
use examseat_core::invigilation::{DutyLedger, assign_invigilators};
use examseat_core::models::{Invigilator, Room, RosterEntry};
use examseat_core::report::SeatingReport;
use examseat_core::session::{filter_session, list_sessions};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const STUDENTS_CSV: &str = "RollNo,PaperCode,ExamDate,ExamTime\n\
    S1,A,2026-02-10,09:00 AM\n\
    S2,A,2026-02-10,09:00 AM\n\
    E1,X,2026-02-11,02:00 PM\n\
    S3,A,2026-02-10,09:00 AM\n\
    S4,B,2026-02-10,09:00 AM\n\
    S5,B,2026-02-10,09:00 AM\n";

const ROOMS_CSV: &str = "RoomName,Rows,Cols\nSMALL,2,3\nSPARE,4,4\n";

const FACULTY_CSV: &str = "Name,DutiesDone\nAda,2\nBo,0\n";

#[test]
fn test_csv_files_to_report() {
    let dir = TempDir::new().unwrap();
    let students = load_students(&write_file(&dir, "students.csv", STUDENTS_CSV)).unwrap();
    let rooms = load_rooms(&write_file(&dir, "rooms.csv", ROOMS_CSV)).unwrap();
    let faculty = load_faculty(&write_file(&dir, "faculty.csv", FACULTY_CSV)).unwrap();

    let sessions = list_sessions(&students);
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].date.as_deref(), Some("2026-02-10"));
    assert_eq!(sessions[0].students, 5);
    assert_eq!(sessions[1].students, 1);

    let roster = filter_session(&students, "2026-02-10", "09:00 AM");
    let allocation = allocate(&roster, &rooms).unwrap();
    assert_eq!(allocation.leftover, 0);
    assert_eq!(allocation.plan.len(), 1);
    assert!(!allocation.plan.contains("SPARE"));

    let grid = allocation.plan.get("SMALL").unwrap();
    let ids: Vec<Vec<Option<&str>>> = grid
        .iter_rows()
        .map(|row| row.iter().map(|c| c.as_ref().map(|s| s.roll_no.as_str())).collect())
        .collect();
    assert_eq!(
        ids,
        vec![
            vec![Some("S1"), Some("S4"), Some("S2")],
            vec![Some("S5"), Some("S3"), None],
        ]
    );

    let mut ledger = DutyLedger::new(faculty).unwrap();
    let assignments = assign_invigilators(&allocation.plan, &mut ledger).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].invigilator, "Bo");
    assert_eq!(ledger.duties_of("Bo"), Some(1));
    assert_eq!(ledger.duties_of("Ada"), Some(2));

    let report = SeatingReport::build(&allocation.plan, &assignments, allocation.leftover);
    let order: Vec<&str> = report.master.iter().map(|e| e.roll_no.as_str()).collect();
    assert_eq!(order, vec!["S1", "S2", "S3", "S4", "S5"]);
    assert_eq!(report.master[3].seat, "R1C2");
    assert_eq!(report.master[3].room, "SMALL");

    assert_eq!(report.sheets.len(), 1);
    let sheet = &report.sheets[0];
    assert_eq!(sheet.total, 5);
    assert_eq!(sheet.invigilators, vec!["Bo".to_string()]);
    let seats: Vec<&str> = sheet.lines.iter().map(|l| l.seat.as_str()).collect();
    assert_eq!(seats, vec!["R1C1", "R1C2", "R1C3", "R2C1", "R2C2"]);
}

#[test]
fn test_json_files_with_spreadsheet_keys() {
    let dir = TempDir::new().unwrap();
    let students = write_file(
        &dir,
        "students.json",
        r#"[
            {"RollNo": "J1", "PaperCode": "P"},
            {"roll_no": "J2", "paper_code": "Q", "exam_date": "2026-02-10", "exam_time": "AM"}
        ]"#,
    );
    let rooms = write_file(&dir, "rooms.json", r#"[{"RoomName": "HALL", "Rows": 1, "Cols": 2}]"#);
    let faculty = write_file(&dir, "faculty.json", r#"[{"Name": "Cy"}]"#);

    let students = load_students(&students).unwrap();
    assert_eq!(
        students,
        vec![
            RosterEntry::new("J1", "P"),
            RosterEntry::new("J2", "Q").with_session("2026-02-10", "AM"),
        ]
    );
    assert_eq!(load_rooms(&rooms).unwrap(), vec![Room::new("HALL", 1, 2)]);
    assert_eq!(load_faculty(&faculty).unwrap(), vec![Invigilator::new("Cy", 0)]);

    let allocation = allocate(&students, &load_rooms(&rooms).unwrap()).unwrap();
    assert!(allocation.is_complete());
    assert_eq!(allocation.plan.seated_count(), 2);
}

#[test]
fn test_import_errors_are_reported() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nope.csv");
    assert!(matches!(load_students(&missing), Err(ImportError::Io { .. })));

    let xlsx = write_file(&dir, "students.xlsx", "binary");
    assert!(matches!(
        load_students(&xlsx),
        Err(ImportError::UnsupportedFormat(_))
    ));

    let bad_rooms = write_file(&dir, "rooms.csv", "RoomName,Rows,Cols\nA,six,6\n");
    let err = load_rooms(&bad_rooms).unwrap_err();
    assert_eq!(err.to_string(), "rooms line 2: invalid Rows value 'six'");
}

#[test]
fn test_semantic_errors_come_from_the_allocator() {
    let dir = TempDir::new().unwrap();
    let rooms = write_file(&dir, "rooms.csv", "RoomName,Rows,Cols\nA,0,6\n");
    let students = write_file(&dir, "students.csv", "RollNo,PaperCode\nS1,P\nS1,Q\n");

    let rooms = load_rooms(&rooms).unwrap();
    let students = load_students(&students).unwrap();

    let err = allocate(&students, &rooms).unwrap_err();
    assert!(matches!(err, SeatingError::EmptyRoomDimension { .. }));
    assert!(err.is_invalid_input());

    let err = allocate(&students, &[Room::new("B", 2, 2)]).unwrap_err();
    assert_eq!(err, SeatingError::DuplicateStudent("S1".to_string()));
}

#[test]
fn test_ledger_carries_duties_across_sessions() {
    let morning: Vec<_> = (0..3).map(|i| RosterEntry::new(format!("M{i}"), "P")).collect();
    let rooms = vec![Room::new("R1", 1, 1), Room::new("R2", 1, 1), Room::new("R3", 1, 1)];
    let mut ledger =
        DutyLedger::new(vec![Invigilator::new("Ada", 0), Invigilator::new("Bo", 0)]).unwrap();

    let first = allocate(&morning, &rooms).unwrap();
    let names: Vec<String> = assign_invigilators(&first.plan, &mut ledger)
        .unwrap()
        .into_iter()
        .map(|a| a.invigilator)
        .collect();
    assert_eq!(names, vec!["Ada", "Bo", "Ada"]);

    let second = allocate(&morning[..1], &rooms).unwrap();
    let names: Vec<String> = assign_invigilators(&second.plan, &mut ledger)
        .unwrap()
        .into_iter()
        .map(|a| a.invigilator)
        .collect();
    assert_eq!(names, vec!["Bo"]);
    assert_eq!(ledger.duties_of("Ada"), Some(2));
    assert_eq!(ledger.duties_of("Bo"), Some(2));
}
