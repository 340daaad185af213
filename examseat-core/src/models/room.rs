//! Examination rooms.

use serde::{Deserialize, Serialize};

/// A room laid out as a rectangular grid of seats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Room name, unique within one allocation run
    #[serde(alias = "RoomName")]
    pub name: String,
    /// Number of seat rows
    #[serde(alias = "Rows")]
    pub rows: u32,
    /// Number of seats per row
    #[serde(alias = "Cols")]
    pub cols: u32,
}

impl Room {
    /// Creates a room descriptor
    #[must_use]
    pub fn new(name: impl Into<String>, rows: u32, cols: u32) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
        }
    }

    /// Total number of physical seats
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }
}
