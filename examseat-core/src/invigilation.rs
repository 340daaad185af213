//! Invigilator assignment
//!
//! Each room of a seating plan gets the faculty member with the fewest
//! duties so far; their count goes up by one before the next room is
//! handled. Ties go to whoever comes first in the ledger.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{SeatingError, SeatingResult};
use crate::models::{Invigilator, SeatingPlan};
use crate::trace_operation;
use crate::tracing::span_names;

/// Faculty members with their running duty counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyLedger {
    invigilators: Vec<Invigilator>,
}

impl DutyLedger {
    /// Builds a ledger, rejecting blank or duplicate names
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::BlankInvigilatorName`] or
    /// [`SeatingError::DuplicateInvigilator`].
    pub fn new(invigilators: Vec<Invigilator>) -> SeatingResult<Self> {
        let mut seen = HashSet::with_capacity(invigilators.len());
        for (index, invigilator) in invigilators.iter().enumerate() {
            if invigilator.name.trim().is_empty() {
                return Err(SeatingError::BlankInvigilatorName { index });
            }
            if !seen.insert(invigilator.name.as_str()) {
                return Err(SeatingError::DuplicateInvigilator(invigilator.name.clone()));
            }
        }
        Ok(Self { invigilators })
    }

    /// Current duty count of a faculty member
    #[must_use]
    pub fn duties_of(&self, name: &str) -> Option<u32> {
        self.invigilators
            .iter()
            .find(|inv| inv.name == name)
            .map(|inv| inv.duties_done)
    }

    /// Ledger entries in the order given
    #[must_use]
    pub fn invigilators(&self) -> &[Invigilator] {
        &self.invigilators
    }

    /// Returns true when there is nobody to assign
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invigilators.is_empty()
    }

    /// Picks the least-loaded invigilator and records one more duty
    fn take_next(&mut self) -> Option<&Invigilator> {
        let idx = self
            .invigilators
            .iter()
            .enumerate()
            .min_by_key(|(idx, inv)| (inv.duties_done, *idx))
            .map(|(idx, _)| idx)?;
        let chosen = &mut self.invigilators[idx];
        chosen.duties_done = chosen.duties_done.saturating_add(1);
        Some(chosen)
    }
}

/// A room together with its supervisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAssignment {
    /// Room name
    pub room: String,
    /// Assigned invigilator
    pub invigilator: String,
}

/// Assigns one invigilator to every room of the plan, in plan order.
///
/// The ledger is updated in place so the caller can persist the new counts.
///
/// # Errors
///
/// Returns [`SeatingError::NoInvigilators`] when the plan uses rooms but the
/// ledger is empty.
pub fn assign_invigilators(
    plan: &SeatingPlan,
    ledger: &mut DutyLedger,
) -> SeatingResult<Vec<RoomAssignment>> {
    if plan.is_empty() {
        return Ok(Vec::new());
    }
    if ledger.is_empty() {
        return Err(SeatingError::NoInvigilators { rooms: plan.len() });
    }

    let span = trace_operation!(span_names::INVIGILATION_ASSIGN, rooms = plan.len());
    let _enter = span.enter();

    let mut assignments = Vec::with_capacity(plan.len());
    for room in plan.room_names() {
        let Some(chosen) = ledger.take_next() else {
            return Err(SeatingError::NoInvigilators { rooms: plan.len() });
        };
        debug!(room, invigilator = %chosen.name, duties = chosen.duties_done, "Invigilator assigned");
        assignments.push(RoomAssignment {
            room: room.to_string(),
            invigilator: chosen.name.clone(),
        });
    }
    Ok(assignments)
}
