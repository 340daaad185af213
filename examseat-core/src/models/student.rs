//! Student roster entries.

use serde::{Deserialize, Serialize};

/// One student sitting one paper.
///
/// The roll number is opaque: it is compared and sorted as a string and
/// never parsed. Date and time are kept as the strings found in the input so
/// the session filter can match them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Student identifier (roll number)
    #[serde(alias = "RollNo")]
    pub roll_no: String,
    /// Paper (subject) code the student is sitting
    #[serde(alias = "PaperCode")]
    pub paper_code: String,
    /// Exam date, if the roster spans several sessions
    #[serde(default, alias = "ExamDate", skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,
    /// Exam time or shift, if the roster spans several sessions
    #[serde(default, alias = "ExamTime", skip_serializing_if = "Option::is_none")]
    pub exam_time: Option<String>,
}

impl RosterEntry {
    /// Creates an unscheduled roster entry
    #[must_use]
    pub fn new(roll_no: impl Into<String>, paper_code: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            paper_code: paper_code.into(),
            exam_date: None,
            exam_time: None,
        }
    }

    /// Sets the exam session (date and time) of this entry
    #[must_use]
    pub fn with_session(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.exam_date = Some(date.into());
        self.exam_time = Some(time.into());
        self
    }
}
