//! Faculty members and their duty counts.

use serde::{Deserialize, Serialize};

/// A faculty member available for room supervision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invigilator {
    /// Display name, unique within a duty ledger
    #[serde(alias = "Name")]
    pub name: String,
    /// Duties already performed
    #[serde(default, alias = "DutiesDone")]
    pub duties_done: u32,
}

impl Invigilator {
    /// Creates an invigilator with the given duty count
    #[must_use]
    pub fn new(name: impl Into<String>, duties_done: u32) -> Self {
        Self {
            name: name.into(),
            duties_done,
        }
    }
}
