//! Text, CSV and JSON rendering of reports, estimates and grids.

use std::fmt::Write as _;

use examseat_core::estimate::CapacityEstimate;
use examseat_core::import::write_record;
use examseat_core::models::RoomPlan;
use examseat_core::palette::PaperPalette;
use examseat_core::report::{AttendanceSheet, MasterEntry, SeatingReport};
use examseat_core::session::ExamSession;
use serde::Serialize;

use crate::error::CliError;

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values.map(str::len).max().unwrap_or(0).max(header.len())
}

/// Serializes any report document as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize output: {e}")))
}

// ========== Seating report ==========

/// Formats the master roster followed by one attendance sheet per room
#[must_use]
pub fn format_report_table(report: &SeatingReport) -> String {
    if report.master.is_empty() {
        return "No students seated.".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "MASTER ROSTER ({} students)\n", report.master.len());
    output.push_str(&format_master_table(&report.master));

    for sheet in &report.sheets {
        output.push_str("\n\n");
        output.push_str(&format_attendance_sheet(sheet));
    }

    output.trim_end().to_string()
}

fn format_master_table(entries: &[MasterEntry]) -> String {
    let roll_width = column_width(entries.iter().map(|e| e.roll_no.as_str()), "ROLL NO");
    let paper_width = column_width(entries.iter().map(|e| e.paper_code.as_str()), "PAPER");
    let room_width = column_width(entries.iter().map(|e| e.room.as_str()), "ROOM");

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<roll_width$}  {:<paper_width$}  {:<room_width$}  SEAT",
        "ROLL NO", "PAPER", "ROOM"
    );
    let _ = writeln!(
        output,
        "{:-<roll_width$}  {:-<paper_width$}  {:-<room_width$}  ----",
        "", "", ""
    );
    for entry in entries {
        let _ = writeln!(
            output,
            "{:<roll_width$}  {:<paper_width$}  {:<room_width$}  {}",
            entry.roll_no, entry.paper_code, entry.room, entry.seat
        );
    }
    output
}

fn format_attendance_sheet(sheet: &AttendanceSheet) -> String {
    let seat_width = column_width(sheet.lines.iter().map(|l| l.seat.as_str()), "SEAT");
    let roll_width = column_width(sheet.lines.iter().map(|l| l.roll_no.as_str()), "ROLL NO");

    let mut output = String::new();
    let _ = writeln!(output, "ATTENDANCE: {} ({} students)", sheet.room, sheet.total);
    if sheet.invigilators.is_empty() {
        let _ = writeln!(output, "Invigilator: -\n");
    } else {
        let _ = writeln!(output, "Invigilator: {}\n", sheet.invigilators.join(", "));
    }
    let _ = writeln!(
        output,
        "{:<seat_width$}  {:<roll_width$}  PAPER       SIGNATURE",
        "SEAT", "ROLL NO"
    );
    let _ = writeln!(
        output,
        "{:-<seat_width$}  {:-<roll_width$}  ----------  ---------",
        "", ""
    );
    for line in &sheet.lines {
        let _ = writeln!(
            output,
            "{:<seat_width$}  {:<roll_width$}  {:<10}  _________",
            line.seat, line.roll_no, line.paper_code
        );
    }
    output
}

/// Formats the master roster as CSV with each room's invigilators
#[must_use]
pub fn format_report_csv(report: &SeatingReport) -> String {
    let mut output = String::new();
    write_record(
        &mut output,
        ["RollNo", "PaperCode", "Room", "Seat", "Invigilator"],
    );
    for entry in &report.master {
        let invigilators = report
            .sheets
            .iter()
            .find(|sheet| sheet.room == entry.room)
            .map(|sheet| sheet.invigilators.join("; "))
            .unwrap_or_default();
        write_record(
            &mut output,
            [
                entry.roll_no.as_str(),
                entry.paper_code.as_str(),
                entry.room.as_str(),
                entry.seat.as_str(),
                invigilators.as_str(),
            ],
        );
    }
    output
}

// ========== Grid view ==========

/// Draws one room as a matrix of `roll paper` cells, `.` for empty seats
#[must_use]
pub fn format_grid(room_plan: &RoomPlan, palette: &PaperPalette, color: bool) -> String {
    let grid = &room_plan.grid;
    let width = grid
        .occupied()
        .map(|(_, _, seat)| seat.roll_no.len() + 1 + seat.paper_code.len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} ({}x{}, {} seated)",
        room_plan.room,
        grid.rows(),
        grid.cols(),
        grid.occupied_count()
    );

    for row in grid.iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(seat) => {
                    let text = format!("{:<width$}", format!("{} {}", seat.roll_no, seat.paper_code));
                    if color {
                        paint(&text, palette.color(&seat.paper_code))
                    } else {
                        text
                    }
                }
                None => format!("{:<width$}", "."),
            })
            .collect();
        let _ = writeln!(output, "  {}", cells.join("  ").trim_end());
    }
    output
}

/// One line naming each paper with its color
#[must_use]
pub fn format_legend(palette: &PaperPalette, color: bool) -> String {
    let items: Vec<String> = palette
        .papers()
        .map(|paper| {
            let hex = palette.color(paper);
            let item = format!("{paper} {hex}");
            if color { paint(&item, hex) } else { item }
        })
        .collect();
    format!("Papers: {}", items.join(", "))
}

fn paint(text: &str, hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// ========== Estimate and sessions ==========

/// Formats a capacity estimate as aligned text
#[must_use]
pub fn format_estimate_table(estimate: &CapacityEstimate) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Students:         {} ({} papers, largest {})",
        estimate.student_count, estimate.paper_count, estimate.max_paper_count
    );
    let _ = writeln!(output, "Seats required:   {}", estimate.required_seats);
    let _ = writeln!(
        output,
        "Seats available:  {} in {} rooms",
        estimate.total_capacity, estimate.rooms_available
    );
    let _ = writeln!(output, "Rooms needed:     {} (largest first)", estimate.rooms_needed);
    if estimate.is_sufficient() {
        let _ = writeln!(output, "Surplus:          {} seats", estimate.surplus());
    } else {
        let _ = writeln!(output, "Shortfall:        {} seats", estimate.shortfall());
    }
    output.trim_end().to_string()
}

/// Formats a capacity estimate as `Field,Value` rows
#[must_use]
pub fn format_estimate_csv(estimate: &CapacityEstimate) -> String {
    let mut output = String::new();
    write_record(&mut output, ["Field", "Value"]);
    let rows = [
        ("StudentCount", estimate.student_count.to_string()),
        ("PaperCount", estimate.paper_count.to_string()),
        ("MaxPaperCount", estimate.max_paper_count.to_string()),
        ("RequiredSeats", estimate.required_seats.to_string()),
        ("TotalCapacity", estimate.total_capacity.to_string()),
        ("RoomsNeeded", estimate.rooms_needed.to_string()),
        ("RoomsAvailable", estimate.rooms_available.to_string()),
        ("Shortfall", estimate.shortfall().to_string()),
    ];
    for (field, value) in rows {
        write_record(&mut output, [field, value.as_str()]);
    }
    output
}

/// Formats sessions as a table
#[must_use]
pub fn format_sessions_table(sessions: &[ExamSession]) -> String {
    if sessions.is_empty() {
        return "No students found.".to_string();
    }

    let date_width = column_width(sessions.iter().map(|s| s.date.as_deref().unwrap_or("-")), "DATE");
    let time_width = column_width(sessions.iter().map(|s| s.time.as_deref().unwrap_or("-")), "TIME");

    let mut output = String::new();
    let _ = writeln!(output, "{:<date_width$}  {:<time_width$}  STUDENTS", "DATE", "TIME");
    let _ = writeln!(output, "{:-<date_width$}  {:-<time_width$}  --------", "", "");
    for session in sessions {
        let _ = writeln!(
            output,
            "{:<date_width$}  {:<time_width$}  {}",
            session.date.as_deref().unwrap_or("-"),
            session.time.as_deref().unwrap_or("-"),
            session.students
        );
    }
    output.trim_end().to_string()
}

/// Formats sessions as CSV
#[must_use]
pub fn format_sessions_csv(sessions: &[ExamSession]) -> String {
    let mut output = String::new();
    write_record(&mut output, ["ExamDate", "ExamTime", "Students"]);
    for session in sessions {
        write_record(
            &mut output,
            [
                session.date.as_deref().unwrap_or(""),
                session.time.as_deref().unwrap_or(""),
                session.students.to_string().as_str(),
            ],
        );
    }
    output
}
