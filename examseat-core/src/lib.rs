//! `ExamSeat` Core Library
//!
//! Seats examination candidates across rooms so that no two students in
//! horizontally or vertically adjacent seats sit the same paper, and reports
//! how many students could not be seated.
//!
//! # Crate Structure
//!
//! - [`models`] - Roster entries, rooms, seats, grids and seating plans
//! - [`allocator`] - The greedy seat allocation
//! - [`session`] - Listing and filtering exam sessions in a roster
//! - [`estimate`] - Capacity guidance computed before allocation
//! - [`invigilation`] - Duty-count based invigilator assignment
//! - [`report`] - Master roster and attendance sheets
//! - [`palette`] - Paper colors for grid views
//! - [`import`] - CSV and JSON loading of students, rooms and faculty
//! - [`sample`] - Demo dataset
//! - [`config`] - Settings file
//! - [`tracing`] - Logging setup

#![warn(missing_docs)]

pub mod allocator;
pub mod config;
pub mod error;
pub mod estimate;
pub mod import;
pub mod invigilation;
pub mod models;
pub mod palette;
pub mod report;
pub mod sample;
pub mod session;
pub mod tracing;

pub use allocator::{PaperQueues, allocate};
pub use config::{AppSettings, ConfigManager};
pub use error::{ConfigError, ExamSeatError, ImportError, SeatingError, SeatingResult};
pub use estimate::{CapacityEstimate, estimate_capacity};
pub use invigilation::{DutyLedger, RoomAssignment, assign_invigilators};
pub use models::{Allocation, Invigilator, Room, RoomPlan, RosterEntry, Seat, SeatGrid, SeatingPlan};
pub use palette::PaperPalette;
pub use report::{AttendanceSheet, MasterEntry, SeatingReport};
pub use session::{ExamSession, filter_session, list_sessions};
