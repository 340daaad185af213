//! Greedy seat allocation
//!
//! Rooms are filled one after another in the order given. Inside a room the
//! grid is walked row by row; each cell receives the front student of the
//! paper with the longest remaining queue among the papers that differ from
//! the occupied neighbours above and to the left. Down and right neighbours
//! are still empty at that point, so checking up/left is enough to keep any
//! two adjacent students on different papers once the room is complete.
//!
//! The walk is a pure function of roster order and room order: running it
//! twice on the same input gives the same plan.

mod queues;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{SeatingError, SeatingResult};
use crate::models::{Allocation, Room, RosterEntry, SeatGrid, SeatingPlan};
use crate::trace_operation;
use crate::tracing::span_names;

pub use queues::PaperQueues;

/// Largest room capacity (rows times columns) accepted for allocation
pub const MAX_ROOM_CAPACITY: u64 = 100_000;

/// Seats a roster across the given rooms.
///
/// Students that do not fit (because seats ran out or because every
/// remaining paper would sit next to itself) are reported through
/// [`Allocation::leftover`]; that is not an error. Rooms after the point
/// where every student is seated are not looked at, and rooms that end up
/// empty are left out of the plan.
///
/// # Errors
///
/// Returns a [`SeatingError`] when a room has a zero dimension, more than
/// [`MAX_ROOM_CAPACITY`] seats, a blank or duplicate name, or when a roster entry has a blank roll number, a blank
/// paper code or a roll number already used by another entry.
///
/// # Examples
///
/// ```
/// use examseat_core::allocator::allocate;
/// use examseat_core::models::{Room, RosterEntry};
///
/// let roster: Vec<_> = (0..5).map(|i| RosterEntry::new(format!("S{i}"), "X")).collect();
/// let allocation = allocate(&roster, &[Room::new("BOOTH", 1, 1)]).unwrap();
/// assert_eq!(allocation.plan.seated_count(), 1);
/// assert_eq!(allocation.leftover, 4);
/// ```
pub fn allocate(roster: &[RosterEntry], rooms: &[Room]) -> SeatingResult<Allocation> {
    validate_rooms(rooms)?;
    validate_roster(roster)?;

    let span = trace_operation!(
        span_names::ALLOCATION_RUN,
        students = roster.len(),
        rooms = rooms.len()
    );
    let _enter = span.enter();

    let mut queues = PaperQueues::from_roster(roster);
    let mut plan = SeatingPlan::new();

    for room in rooms {
        if queues.is_exhausted() {
            debug!(room = %room.name, "Every student seated, skipping remaining rooms");
            break;
        }

        let grid = fill_room(room, &mut queues);
        let placed = grid.occupied_count();
        debug!(
            room = %room.name,
            placed,
            remaining = queues.remaining(),
            "Room filled"
        );

        if placed > 0 {
            plan.push(room.name.clone(), grid);
        }
    }

    let leftover = queues.remaining();
    info!(
        seated = plan.seated_count(),
        leftover,
        rooms_used = plan.len(),
        "Allocation finished"
    );

    Ok(Allocation { plan, leftover })
}

/// Walks one room row-major and seats students from the queues
fn fill_room(room: &Room, queues: &mut PaperQueues) -> SeatGrid {
    let rows = room.rows as usize;
    let cols = room.cols as usize;
    let mut grid = SeatGrid::new(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let above = row.checked_sub(1).and_then(|r| grid.paper_at(r, col));
            let left = col.checked_sub(1).and_then(|c| grid.paper_at(row, c));
            if let Some(seat) = queues.take_safe(&[above, left]) {
                grid.place(row, col, seat);
            }
        }
    }

    grid
}

/// Checks room descriptors before allocation
///
/// # Errors
///
/// Returns the first problem found, in room order.
pub fn validate_rooms(rooms: &[Room]) -> SeatingResult<()> {
    let mut seen = HashSet::with_capacity(rooms.len());
    for (index, room) in rooms.iter().enumerate() {
        if room.name.trim().is_empty() {
            return Err(SeatingError::BlankRoomName { index });
        }
        if room.rows == 0 || room.cols == 0 {
            return Err(SeatingError::EmptyRoomDimension {
                room: room.name.clone(),
                rows: room.rows,
                cols: room.cols,
            });
        }
        if room.capacity() > MAX_ROOM_CAPACITY {
            return Err(SeatingError::RoomTooLarge {
                room: room.name.clone(),
                rows: room.rows,
                cols: room.cols,
                max: MAX_ROOM_CAPACITY,
            });
        }
        if !seen.insert(room.name.as_str()) {
            return Err(SeatingError::DuplicateRoom(room.name.clone()));
        }
    }
    Ok(())
}

/// Checks roster entries before allocation
///
/// # Errors
///
/// Returns the first problem found, in roster order.
pub fn validate_roster(roster: &[RosterEntry]) -> SeatingResult<()> {
    let mut seen = HashSet::with_capacity(roster.len());
    for (index, entry) in roster.iter().enumerate() {
        if entry.roll_no.trim().is_empty() {
            return Err(SeatingError::BlankStudentId { index });
        }
        if entry.paper_code.trim().is_empty() {
            return Err(SeatingError::BlankPaperCode {
                student: entry.roll_no.clone(),
            });
        }
        if !seen.insert(entry.roll_no.as_str()) {
            return Err(SeatingError::DuplicateStudent(entry.roll_no.clone()));
        }
    }
    Ok(())
}
