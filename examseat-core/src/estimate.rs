//! Capacity estimate shown before allocation
//!
//! A paper with `m` students needs `m - 1` separating seats in the worst
//! case, so the estimate asks for at least `2m - 1` physical seats. The
//! allocator never consults these numbers and can end up with more or fewer
//! leftovers than the estimate suggests.

use serde::Serialize;
use tracing::debug;

use crate::allocator::PaperQueues;
use crate::models::{Room, RosterEntry};
use crate::trace_operation;
use crate::tracing::span_names;

/// Seat requirements for one roster against a room list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapacityEstimate {
    /// Students in the roster
    pub student_count: usize,
    /// Distinct papers in the roster
    pub paper_count: usize,
    /// Size of the largest paper
    pub max_paper_count: usize,
    /// Lower bound on physical seats needed for spacing
    pub required_seats: u64,
    /// Physical seats across all rooms
    pub total_capacity: u64,
    /// Rooms needed when the largest are used first
    pub rooms_needed: usize,
    /// Rooms available
    pub rooms_available: usize,
}

impl CapacityEstimate {
    /// Seats missing for the required spacing, 0 when the rooms suffice
    #[must_use]
    pub const fn shortfall(&self) -> u64 {
        self.required_seats.saturating_sub(self.total_capacity)
    }

    /// Seats to spare beyond the required spacing
    #[must_use]
    pub const fn surplus(&self) -> u64 {
        self.total_capacity.saturating_sub(self.required_seats)
    }

    /// Returns true when the rooms cover the required seats
    #[must_use]
    pub const fn is_sufficient(&self) -> bool {
        self.total_capacity >= self.required_seats
    }
}

/// Computes the capacity estimate
#[must_use]
pub fn estimate_capacity(roster: &[RosterEntry], rooms: &[Room]) -> CapacityEstimate {
    let span = trace_operation!(span_names::ESTIMATE_CAPACITY, students = roster.len());
    let _enter = span.enter();

    let queues = PaperQueues::from_roster(roster);
    let student_count = roster.len();
    let max_paper_count = queues.papers().map(|(_, len)| len).max().unwrap_or(0);
    let required_seats = required_seats(student_count, max_paper_count);

    let mut by_capacity: Vec<&Room> = rooms.iter().collect();
    // stable sort keeps the given order among equally sized rooms
    by_capacity.sort_by(|a, b| b.capacity().cmp(&a.capacity()));

    let mut running = 0u64;
    let mut rooms_needed = 0usize;
    for room in by_capacity {
        if running >= required_seats {
            break;
        }
        running += room.capacity();
        rooms_needed += 1;
    }

    let estimate = CapacityEstimate {
        student_count,
        paper_count: queues.paper_count(),
        max_paper_count,
        required_seats,
        total_capacity: rooms.iter().map(Room::capacity).sum(),
        rooms_needed,
        rooms_available: rooms.len(),
    };
    debug!(
        required = estimate.required_seats,
        capacity = estimate.total_capacity,
        rooms_needed = estimate.rooms_needed,
        "Capacity estimated"
    );
    estimate
}

/// `max(students, 2 * largest_paper - 1)`, or 0 for an empty roster
#[must_use]
pub const fn required_seats(student_count: usize, max_paper_count: usize) -> u64 {
    let spaced = (2 * max_paper_count as u64).saturating_sub(1);
    let students = student_count as u64;
    if spaced > students { spaced } else { students }
}
