//! Seating plans produced by the allocator.

use serde::Serialize;

use super::SeatGrid;

/// The grid assigned to one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomPlan {
    /// Room name
    pub room: String,
    /// Seats of the room
    pub grid: SeatGrid,
}

/// Mapping from room name to seat grid.
///
/// Rooms keep the order in which the allocator processed them. Only rooms
/// that received at least one student are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeatingPlan {
    rooms: Vec<RoomPlan>,
}

impl SeatingPlan {
    /// Creates an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a room; callers guarantee room names are unique
    pub(crate) fn push(&mut self, room: impl Into<String>, grid: SeatGrid) {
        self.rooms.push(RoomPlan {
            room: room.into(),
            grid,
        });
    }

    /// Looks up the grid of a room by name
    #[must_use]
    pub fn get(&self, room: &str) -> Option<&SeatGrid> {
        self.rooms
            .iter()
            .find(|plan| plan.room == room)
            .map(|plan| &plan.grid)
    }

    /// Returns true if the room received any student
    #[must_use]
    pub fn contains(&self, room: &str) -> bool {
        self.get(room).is_some()
    }

    /// Room names in processing order
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|plan| plan.room.as_str())
    }

    /// Iterates over rooms in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, RoomPlan> {
        self.rooms.iter()
    }

    /// Number of rooms in use
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true when no room is in use
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total number of seated students
    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.rooms.iter().map(|plan| plan.grid.occupied_count()).sum()
    }
}

impl<'a> IntoIterator for &'a SeatingPlan {
    type Item = &'a RoomPlan;
    type IntoIter = std::slice::Iter<'a, RoomPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of one allocation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Rooms in use with their grids
    pub plan: SeatingPlan,
    /// Students that could not be seated anywhere
    pub leftover: usize,
}

impl Allocation {
    /// Returns true when every student received a seat
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.leftover == 0
    }
}
