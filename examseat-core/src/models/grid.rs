//! Seat grids.
//!
//! A grid is stored as a flat row-major vector of optional seats. Rows and
//! columns are zero-based in the API; [`seat_label`] produces the one-based
//! `R{row}C{col}` labels printed on attendance sheets.

use serde::{Deserialize, Serialize};

/// A seated student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    /// Roll number of the student in this seat
    pub roll_no: String,
    /// Paper the student is sitting
    pub paper_code: String,
}

impl Seat {
    /// Creates a seat occupant
    #[must_use]
    pub fn new(roll_no: impl Into<String>, paper_code: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            paper_code: paper_code.into(),
        }
    }
}

/// Formats the one-based seat label for a zero-based grid position
#[must_use]
pub fn seat_label(row: usize, col: usize) -> String {
    format!("R{}C{}", row + 1, col + 1)
}

/// Row-major grid of optional seats for one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Seat>>,
}

impl SeatGrid {
    /// Creates an empty grid
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the occupant of a cell, `None` when empty or out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Seat> {
        self.index(row, col)
            .and_then(|idx| self.cells.get(idx))
            .and_then(Option::as_ref)
    }

    /// Paper code of the occupant of a cell
    #[must_use]
    pub fn paper_at(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row, col).map(|seat| seat.paper_code.as_str())
    }

    /// Places a student in a cell, returning the previous occupant.
    ///
    /// Out-of-bounds positions are ignored and return `None`.
    pub fn place(&mut self, row: usize, col: usize, seat: Seat) -> Option<Seat> {
        let idx = self.index(row, col)?;
        self.cells.get_mut(idx).and_then(|cell| cell.replace(seat))
    }

    /// Iterates over the grid one row slice at a time
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<Seat>]> {
        // chunks(0) panics, and a zero-column grid has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterates over occupied cells in row-major order as `(row, col, seat)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &Seat)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|seat| (idx / cols, idx % cols, seat)))
    }

    /// Number of occupied cells
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns true when no cell is occupied
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

#[derive(Serialize)]
struct GridView<'a> {
    rows: usize,
    cols: usize,
    seats: Vec<&'a [Option<Seat>]>,
}

impl Serialize for SeatGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridView {
            rows: self.rows,
            cols: self.cols,
            seats: self.iter_rows().collect(),
        }
        .serialize(serializer)
    }
}
