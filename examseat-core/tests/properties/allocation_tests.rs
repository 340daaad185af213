//! Property-based tests for seat allocation
//!
//! Validates the adjacency, conservation, ordering and determinism
//! guarantees of `allocate` over random rosters and room lists.

use std::collections::{HashMap, HashSet};

use examseat_core::allocator::allocate;
use examseat_core::models::{Allocation, Room, RosterEntry, SeatGrid};
use proptest::prelude::*;

// ========== Strategies ==========

const PAPERS: [&str; 6] = ["CS101", "MA202", "PH110", "CH120", "EN100", "BI150"];

/// Strategy for a roster: each entry picks one of the first `k` papers
fn arb_roster() -> impl Strategy<Value = Vec<RosterEntry>> {
    (1usize..=PAPERS.len()).prop_flat_map(|k| {
        prop::collection::vec(0..k, 0..80).prop_map(|picks| {
            picks
                .into_iter()
                .enumerate()
                .map(|(i, p)| RosterEntry::new(format!("STU{i:04}"), PAPERS[p]))
                .collect()
        })
    })
}

/// Strategy for a room list with unique names
fn arb_rooms() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::vec((1u32..=6, 1u32..=6), 0..5).prop_map(|dims| {
        dims.into_iter()
            .enumerate()
            .map(|(i, (rows, cols))| Room::new(format!("ROOM-{i}"), rows, cols))
            .collect()
    })
}

// ========== Helpers ==========

fn count_by_paper(roster: &[RosterEntry]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for entry in roster {
        *counts.entry(entry.paper_code.as_str()).or_insert(0) += 1;
    }
    counts
}

fn seated_by_paper(allocation: &Allocation) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for room in &allocation.plan {
        for (_, _, seat) in room.grid.occupied() {
            *counts.entry(seat.paper_code.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn has_same_paper_neighbours(grid: &SeatGrid) -> bool {
    grid.occupied().any(|(row, col, seat)| {
        let right = grid.paper_at(row, col + 1);
        let below = grid.paper_at(row + 1, col);
        right == Some(seat.paper_code.as_str()) || below == Some(seat.paper_code.as_str())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ========== No-adjacency ==========
    // No two horizontally or vertically adjacent seats share a paper.

    #[test]
    fn no_adjacent_seats_share_a_paper(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();
        for room in &allocation.plan {
            prop_assert!(
                !has_same_paper_neighbours(&room.grid),
                "room {} has adjacent seats on the same paper",
                room.room
            );
        }
    }

    // ========== Conservation ==========
    // For each paper, seated + leftover equals the roster count, and every
    // student is seated at most once with their own paper.

    #[test]
    fn every_student_is_seated_or_left_over(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();
        let papers: HashMap<&str, &str> = roster
            .iter()
            .map(|e| (e.roll_no.as_str(), e.paper_code.as_str()))
            .collect();

        let mut seen = HashSet::new();
        for room in &allocation.plan {
            for (_, _, seat) in room.grid.occupied() {
                prop_assert!(seen.insert(seat.roll_no.clone()), "{} seated twice", seat.roll_no);
                prop_assert_eq!(papers.get(seat.roll_no.as_str()).copied(), Some(seat.paper_code.as_str()));
            }
        }
        prop_assert_eq!(seen.len() + allocation.leftover, roster.len());

        let seated = seated_by_paper(&allocation);
        let mut waiting = 0;
        for (paper, total) in count_by_paper(&roster) {
            let placed = seated.get(paper).copied().unwrap_or(0);
            prop_assert!(placed <= total, "{} seated {} of {}", paper, placed, total);
            if allocation.leftover == 0 {
                prop_assert_eq!(placed, total, "{} not fully seated", paper);
            }
            waiting += total - placed;
        }
        prop_assert_eq!(waiting, allocation.leftover);
    }

    // ========== Determinism ==========

    #[test]
    fn allocation_is_deterministic(roster in arb_roster(), rooms in arb_rooms()) {
        let first = allocate(&roster, &rooms).unwrap();
        let second = allocate(&roster, &rooms).unwrap();
        prop_assert_eq!(first, second);
    }

    // ========== Room order and empty-room dropping ==========
    // Plan rooms appear in input order, are never vacant, and keep the
    // dimensions of their room descriptor.

    #[test]
    fn plan_rooms_follow_input_order(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();
        let mut input = rooms.iter();
        for room_plan in &allocation.plan {
            let room = input.find(|r| r.name == room_plan.room);
            prop_assert!(room.is_some(), "{} out of order or unknown", room_plan.room);
            let room = room.unwrap();
            prop_assert!(!room_plan.grid.is_vacant());
            prop_assert_eq!(room_plan.grid.rows(), room.rows as usize);
            prop_assert_eq!(room_plan.grid.cols(), room.cols as usize);
        }
    }

    // ========== Early exhaustion ==========
    // Once every student is seated no later room is used; while students
    // remain, every room seats somebody (cell (0,0) never has neighbours).

    #[test]
    fn rooms_are_used_only_while_students_remain(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();
        if allocation.leftover > 0 {
            prop_assert_eq!(allocation.plan.len(), rooms.len());
        }

        let mut seated_before = 0;
        for room_plan in &allocation.plan {
            prop_assert!(seated_before < roster.len());
            seated_before += room_plan.grid.occupied_count();
        }
    }

    // ========== Queue order ==========
    // Students of one paper are seated in roster order when the plan is
    // read room by room in row-major order; leftovers are the tail.

    #[test]
    fn students_are_seated_in_roster_order(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();

        let mut seated: HashMap<&str, Vec<&str>> = HashMap::new();
        for room_plan in &allocation.plan {
            for (_, _, seat) in room_plan.grid.occupied() {
                seated.entry(seat.paper_code.as_str()).or_default().push(seat.roll_no.as_str());
            }
        }

        for (paper, ids) in seated {
            let expected: Vec<&str> = roster
                .iter()
                .filter(|e| e.paper_code == paper)
                .map(|e| e.roll_no.as_str())
                .take(ids.len())
                .collect();
            prop_assert_eq!(ids, expected);
        }
    }

    // ========== Greedy completeness ==========
    // A cell is left empty only when every paper that still has students
    // at the end sits directly above or to the left of it.

    #[test]
    fn empty_cells_are_blocked_for_leftover_papers(roster in arb_roster(), rooms in arb_rooms()) {
        let allocation = allocate(&roster, &rooms).unwrap();
        let seated = seated_by_paper(&allocation);
        let leftover_papers: Vec<&str> = count_by_paper(&roster)
            .into_iter()
            .filter(|(paper, total)| seated.get(*paper).copied().unwrap_or(0) < *total)
            .map(|(paper, _)| paper)
            .collect();
        prop_assert!(leftover_papers.len() <= 2);

        for room_plan in &allocation.plan {
            let grid = &room_plan.grid;
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if grid.get(row, col).is_some() {
                        continue;
                    }
                    let above = row.checked_sub(1).and_then(|r| grid.paper_at(r, col));
                    let left = col.checked_sub(1).and_then(|c| grid.paper_at(row, c));
                    for paper in &leftover_papers {
                        prop_assert!(above == Some(*paper) || left == Some(*paper));
                    }
                }
            }
        }
    }
}
