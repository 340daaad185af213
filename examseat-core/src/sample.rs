//! Demo dataset
//!
//! An unbalanced single-session roster (180 students on one paper, 70 on
//! another) with fourteen 6x6 rooms and nine faculty members. Useful for
//! trying the tool and as a template for the expected file layout.

use crate::import::write_record;
use crate::models::{Invigilator, Room, RosterEntry};

/// Exam date used by the demo roster
pub const SAMPLE_DATE: &str = "2026-02-10";

/// Exam time used by the demo roster
pub const SAMPLE_TIME: &str = "09:00 AM";

/// 250 students: `STU1000..STU1179` on CS101, `STU1180..STU1249` on MA202
#[must_use]
pub fn students() -> Vec<RosterEntry> {
    (0..250)
        .map(|i| {
            let paper = if i < 180 { "CS101" } else { "MA202" };
            RosterEntry::new(format!("STU{}", 1000 + i), paper).with_session(SAMPLE_DATE, SAMPLE_TIME)
        })
        .collect()
}

/// Rooms `ROOM-1..ROOM-14`, each 6 rows by 6 columns
#[must_use]
pub fn rooms() -> Vec<Room> {
    (1..=14).map(|i| Room::new(format!("ROOM-{i}"), 6, 6)).collect()
}

/// Faculty `Faculty-1..Faculty-9` with no duties yet
#[must_use]
pub fn faculty() -> Vec<Invigilator> {
    (1..=9)
        .map(|i| Invigilator::new(format!("Faculty-{i}"), 0))
        .collect()
}

/// Renders a roster in the student CSV layout
#[must_use]
pub fn students_csv(roster: &[RosterEntry]) -> String {
    let mut out = String::new();
    write_record(&mut out, ["RollNo", "PaperCode", "ExamDate", "ExamTime"]);
    for entry in roster {
        write_record(
            &mut out,
            [
                entry.roll_no.as_str(),
                entry.paper_code.as_str(),
                entry.exam_date.as_deref().unwrap_or(""),
                entry.exam_time.as_deref().unwrap_or(""),
            ],
        );
    }
    out
}

/// Renders rooms in the room CSV layout
#[must_use]
pub fn rooms_csv(rooms: &[Room]) -> String {
    let mut out = String::new();
    write_record(&mut out, ["RoomName", "Rows", "Cols"]);
    for room in rooms {
        write_record(
            &mut out,
            [room.name.clone(), room.rows.to_string(), room.cols.to_string()],
        );
    }
    out
}

/// Renders faculty in the faculty CSV layout
#[must_use]
pub fn faculty_csv(faculty: &[Invigilator]) -> String {
    let mut out = String::new();
    write_record(&mut out, ["Name", "DutiesDone"]);
    for invigilator in faculty {
        write_record(
            &mut out,
            [invigilator.name.clone(), invigilator.duties_done.to_string()],
        );
    }
    out
}
