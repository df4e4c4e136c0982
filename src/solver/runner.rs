//! Placement passes and solver entry points.

use super::state::PlacementState;
use super::types::{Assignment, SeatAssignment};
use crate::grid::manhattan;
use crate::model::{Layout, Person, Position, Rule, RuleKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Executes the multi-pass placement heuristic.
pub struct Solver;

impl Solver {
    /// Runs a solve with a caller-supplied random source.
    ///
    /// Always returns a complete [`Assignment`] with exactly one entry
    /// per layout position. Excess roster members are left unplaced and
    /// excess positions unfilled; unsatisfiable or under-populated rules
    /// degrade to no-ops. Nothing here is an error.
    ///
    /// The RNG drives only the visit order of the free-placement pass,
    /// so a seeded RNG makes the whole solve reproducible.
    pub fn run<R: Rng>(layout: &Layout, roster: &[Person], rules: &[Rule], rng: &mut R) -> Assignment {
        let ordered = layout.reading_order();
        let mut state = PlacementState::new();

        assign_row_rules(&ordered, rules, &mut state);
        assign_together_rules(&ordered, rules, &mut state);
        assign_free(&ordered, roster, rules, &mut state, rng);
        materialize(&ordered, &state)
    }

    /// Runs a solve with a RNG seeded from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan::model::{Layout, Person};
    /// use seatplan::solver::Solver;
    ///
    /// let layout = Layout::classroom(2, 3);
    /// let roster = vec![
    ///     Person::new("s1", "Ann", "#e74c3c"),
    ///     Person::new("s2", "Ben", "#3498db"),
    /// ];
    /// let assignment = Solver::run_seeded(&layout, &roster, &[], 42);
    /// assert_eq!(assignment.len(), 6);
    /// assert_eq!(assignment.placed_count(), 2);
    /// ```
    pub fn run_seeded(layout: &Layout, roster: &[Person], rules: &[Rule], seed: u64) -> Assignment {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run(layout, roster, rules, &mut rng)
    }
}

/// Pass 1: bind each row rule's first member to the first free position
/// of the matching row, in reading order. A claimant with no free row
/// position left falls through to later passes.
fn assign_row_rules(ordered: &[&Position], rules: &[Rule], state: &mut PlacementState) {
    // Reading order puts the front row first and the back row last.
    let (Some(front_y), Some(back_y)) = (ordered.first().map(|p| p.y), ordered.last().map(|p| p.y))
    else {
        return;
    };

    for rule in rules {
        let target_y = match rule.kind {
            RuleKind::FrontRow => front_y,
            RuleKind::BackRow => back_y,
            _ => continue,
        };
        let Some(member) = rule.members.first() else {
            continue;
        };
        if state.is_placed(member) {
            continue;
        }
        let slot = ordered
            .iter()
            .find(|p| p.y == target_y && !state.is_filled(&p.id));
        if let Some(position) = slot {
            state.bind(&position.id, member);
        }
    }
}

/// Pass 2: for each keep-together rule, bind the first two still-unplaced
/// members (in list order) to the first reading-order-consecutive pair of
/// free positions within Manhattan distance 2. One pair per rule; groups
/// beyond a pair and rules with no qualifying pair are left to pass 3.
fn assign_together_rules(ordered: &[&Position], rules: &[Rule], state: &mut PlacementState) {
    for rule in rules {
        if rule.kind != RuleKind::KeepTogether {
            continue;
        }
        let unplaced: Vec<&str> = rule
            .members
            .iter()
            .map(String::as_str)
            .filter(|m| !state.is_placed(m))
            .collect();
        if unplaced.len() < 2 {
            continue;
        }
        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if state.is_filled(&a.id) || state.is_filled(&b.id) {
                continue;
            }
            if manhattan(a.x, a.y, b.x, b.y) <= 2 {
                state.bind(&a.id, unplaced[0]);
                state.bind(&b.id, unplaced[1]);
                break;
            }
        }
    }
}

/// Pass 3: visit the remaining people in a shuffled order; each takes
/// the free position with the strictly highest separation score. Ties
/// keep the first position in reading order.
fn assign_free<R: Rng>(
    ordered: &[&Position],
    roster: &[Person],
    rules: &[Rule],
    state: &mut PlacementState,
    rng: &mut R,
) {
    let mut pending: Vec<&Person> = roster.iter().filter(|p| !state.is_placed(&p.id)).collect();
    pending.shuffle(rng);

    let coords: HashMap<&str, (i32, i32)> = ordered
        .iter()
        .map(|p| (p.id.as_str(), (p.x, p.y)))
        .collect();

    for person in pending {
        let mut best: Option<(&Position, i32)> = None;
        for &position in ordered {
            if state.is_filled(&position.id) {
                continue;
            }
            let score = separation_score(position, &person.id, rules, &coords, state);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((position, score));
            }
        }
        if let Some((position, _)) = best {
            state.bind(&position.id, &person.id);
        }
    }
}

/// Scores a candidate position for one person against the keep-apart
/// rules naming them. Base score 100; each already-placed co-member at
/// Manhattan distance `d` subtracts `(3 - d) * 30` when `d <= 2` and
/// otherwise adds `min(d, 10)`.
fn separation_score(
    candidate: &Position,
    person_id: &str,
    rules: &[Rule],
    coords: &HashMap<&str, (i32, i32)>,
    state: &PlacementState,
) -> i32 {
    let mut score = 100;
    for rule in rules {
        if rule.kind != RuleKind::KeepApart {
            continue;
        }
        if !rule.members.iter().any(|m| m == person_id) {
            continue;
        }
        for other in rule.members.iter().filter(|m| m.as_str() != person_id) {
            let Some(seat) = state.seat_of(other) else {
                continue;
            };
            let Some(&(ox, oy)) = coords.get(seat) else {
                continue;
            };
            let d = manhattan(candidate.x, candidate.y, ox, oy);
            if d <= 2 {
                score -= (3 - d) * 30;
            } else {
                score += d.min(10);
            }
        }
    }
    score
}

/// Pass 4: emit one entry per position, in reading order, carrying the
/// bound person (if any) and the position's coordinates.
fn materialize(ordered: &[&Position], state: &PlacementState) -> Assignment {
    let entries = ordered
        .iter()
        .map(|p| SeatAssignment {
            position_id: p.id.clone(),
            person_id: state.person_at(&p.id).map(String::from),
            x: p.x,
            y: p.y,
        })
        .collect();
    Assignment { entries }
}
