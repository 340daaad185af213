//! Core data structures for exam seating
//!
//! Roster entries and rooms are the inputs of an allocation run; seats,
//! grids and plans are its output. Invigilators feed the supervision
//! assignment that runs after allocation.

mod grid;
mod invigilator;
mod plan;
mod room;
mod student;

pub use grid::{Seat, SeatGrid, seat_label};
pub use invigilator::Invigilator;
pub use plan::{Allocation, RoomPlan, SeatingPlan};
pub use room::Room;
pub use student::RosterEntry;
