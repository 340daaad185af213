//! Per-paper queues of students waiting for a seat.

use std::collections::{HashMap, VecDeque};

use crate::models::{RosterEntry, Seat};

#[derive(Debug, Clone)]
struct PaperQueue {
    code: String,
    pending: VecDeque<String>,
}

/// Pending students grouped by paper code.
///
/// Papers are kept in the order they first appear in the roster and each
/// queue keeps roster order. The first-seen order decides ties between
/// papers with equally long queues, so it is stored explicitly rather than
/// taken from a hash map.
#[derive(Debug, Clone, Default)]
pub struct PaperQueues {
    papers: Vec<PaperQueue>,
}

impl PaperQueues {
    /// Groups a roster by paper code
    #[must_use]
    pub fn from_roster(roster: &[RosterEntry]) -> Self {
        let mut papers: Vec<PaperQueue> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in roster {
            let slot = *index.entry(entry.paper_code.as_str()).or_insert_with(|| {
                papers.push(PaperQueue {
                    code: entry.paper_code.clone(),
                    pending: VecDeque::new(),
                });
                papers.len() - 1
            });
            papers[slot].pending.push_back(entry.roll_no.clone());
        }

        Self { papers }
    }

    /// Returns true once every queue is empty
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.papers.iter().all(|paper| paper.pending.is_empty())
    }

    /// Total number of students still waiting
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.papers.iter().map(|paper| paper.pending.len()).sum()
    }

    /// Students still waiting for one paper (0 for unknown papers)
    #[cfg(test)]
    fn remaining_for(&self, code: &str) -> usize {
        self.papers
            .iter()
            .find(|paper| paper.code == code)
            .map_or(0, |paper| paper.pending.len())
    }

    /// Paper codes with their queue lengths, in first-seen order
    pub fn papers(&self) -> impl Iterator<Item = (&str, usize)> {
        self.papers
            .iter()
            .map(|paper| (paper.code.as_str(), paper.pending.len()))
    }

    /// Number of distinct papers, including exhausted ones
    #[must_use]
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// Chooses the paper to seat next when the given codes are forbidden.
    ///
    /// Among non-empty queues whose code is not in `illegal`, returns the
    /// position of the longest one. Ties go to the paper seen first.
    fn pick(&self, illegal: &[Option<&str>]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (idx, paper) in self.papers.iter().enumerate() {
            let len = paper.pending.len();
            if len == 0 || illegal.contains(&Some(paper.code.as_str())) {
                continue;
            }
            // strictly greater keeps the earliest paper on ties
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((idx, len));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Dequeues the front student of the best safe paper, if any
    pub fn take_safe(&mut self, illegal: &[Option<&str>]) -> Option<Seat> {
        let idx = self.pick(illegal)?;
        let paper = &mut self.papers[idx];
        let roll_no = paper.pending.pop_front()?;
        Some(Seat::new(roll_no, paper.code.clone()))
    }
}
