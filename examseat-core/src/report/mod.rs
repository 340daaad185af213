//! Seating reports
//!
//! Flattens a seating plan into the two documents handed out on exam day:
//! a master roster that students search by roll number, and one attendance
//! sheet per room for the invigilator to collect signatures on.

use serde::Serialize;
use tracing::debug;

use crate::invigilation::RoomAssignment;
use crate::models::{SeatingPlan, seat_label};
use crate::trace_operation;
use crate::tracing::span_names;

/// One line of the master roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterEntry {
    /// Student roll number
    pub roll_no: String,
    /// Paper code
    pub paper_code: String,
    /// Room name
    pub room: String,
    /// One-based seat label (`R{row}C{col}`)
    pub seat: String,
}

/// One seat line of an attendance sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceLine {
    /// One-based seat label
    pub seat: String,
    /// Student roll number
    pub roll_no: String,
    /// Paper code
    pub paper_code: String,
}

/// Attendance sheet of one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSheet {
    /// Room name
    pub room: String,
    /// Students seated in the room
    pub total: usize,
    /// Invigilators supervising the room
    pub invigilators: Vec<String>,
    /// Seats in row-major order
    pub lines: Vec<AttendanceLine>,
}

/// Every seated student sorted by roll number.
///
/// Roll numbers are compared as plain strings.
#[must_use]
pub fn master_roster(plan: &SeatingPlan) -> Vec<MasterEntry> {
    let span = trace_operation!(span_names::REPORT_BUILD, rooms = plan.len());
    let _enter = span.enter();

    let mut entries: Vec<MasterEntry> = plan
        .iter()
        .flat_map(|room_plan| {
            room_plan
                .grid
                .occupied()
                .map(move |(row, col, seat)| MasterEntry {
                    roll_no: seat.roll_no.clone(),
                    paper_code: seat.paper_code.clone(),
                    room: room_plan.room.clone(),
                    seat: seat_label(row, col),
                })
        })
        .collect();
    entries.sort_by(|a, b| a.roll_no.cmp(&b.roll_no));
    debug!(entries = entries.len(), "Master roster built");
    entries
}

/// One attendance sheet per room of the plan, in plan order.
///
/// Rooms without an entry in `assignments` get an empty invigilator list.
#[must_use]
pub fn attendance_sheets(
    plan: &SeatingPlan,
    assignments: &[RoomAssignment],
) -> Vec<AttendanceSheet> {
    plan.iter()
        .map(|room_plan| {
            let lines: Vec<AttendanceLine> = room_plan
                .grid
                .occupied()
                .map(|(row, col, seat)| AttendanceLine {
                    seat: seat_label(row, col),
                    roll_no: seat.roll_no.clone(),
                    paper_code: seat.paper_code.clone(),
                })
                .collect();
            AttendanceSheet {
                room: room_plan.room.clone(),
                total: lines.len(),
                invigilators: assignments
                    .iter()
                    .filter(|a| a.room == room_plan.room)
                    .map(|a| a.invigilator.clone())
                    .collect(),
                lines,
            }
        })
        .collect()
}

/// Full report for one allocation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingReport {
    /// Students sorted by roll number
    pub master: Vec<MasterEntry>,
    /// Per-room sheets in plan order
    pub sheets: Vec<AttendanceSheet>,
    /// Students without a seat
    pub leftover: usize,
}

impl SeatingReport {
    /// Builds both documents from a plan
    #[must_use]
    pub fn build(plan: &SeatingPlan, assignments: &[RoomAssignment], leftover: usize) -> Self {
        Self {
            master: master_roster(plan),
            sheets: attendance_sheets(plan, assignments),
            leftover,
        }
    }
}
