//! Per-rule compliance checks.

use super::report::ComplianceReport;
use crate::grid::manhattan;
use crate::model::{Rule, RuleKind};
use crate::solver::{Assignment, SeatAssignment};

/// Checks a rule set against a completed assignment.
pub struct Verifier;

impl Verifier {
    /// Classifies every rule as satisfied or violated.
    ///
    /// Per-kind predicates:
    ///
    /// - **Keep apart**: violated if any pair of placed members sits at
    ///   Manhattan distance `<= 2`. Unplaced members are skipped, so a
    ///   rule with fewer than two placed members is trivially satisfied.
    /// - **Keep together**: violated if any pair of placed members
    ///   exceeds Manhattan distance 3.
    /// - **Front row / back row**: satisfied iff the rule's first member
    ///   sits at the minimum (resp. maximum) `y` over all assignment
    ///   entries, filled or not. An unplaced member yields no verdict
    ///   and the rule is omitted from the report.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan::model::{Layout, Person, Rule, RuleKind};
    /// use seatplan::solver::Solver;
    /// use seatplan::verify::Verifier;
    ///
    /// let layout = Layout::classroom(3, 4);
    /// let roster = vec![
    ///     Person::new("s1", "Ann", "#e74c3c"),
    ///     Person::new("s2", "Ben", "#3498db"),
    /// ];
    /// let rules = vec![Rule::new(
    ///     "r1",
    ///     RuleKind::FrontRow,
    ///     vec!["s1".into()],
    ///     "Front Row: Ann",
    /// )];
    ///
    /// let assignment = Solver::run_seeded(&layout, &roster, &rules, 42);
    /// let report = Verifier::check(&rules, &assignment);
    /// assert_eq!(report.satisfied, vec!["Front Row: Ann".to_string()]);
    /// ```
    pub fn check(rules: &[Rule], assignment: &Assignment) -> ComplianceReport {
        let mut report = ComplianceReport::default();

        for rule in rules {
            match rule.kind {
                RuleKind::KeepApart => {
                    let seats = placed_seats(rule, assignment);
                    if any_pair_within(&seats, 2) {
                        report.violated.push(rule.description.clone());
                    } else {
                        report.satisfied.push(rule.description.clone());
                    }
                }
                RuleKind::KeepTogether => {
                    let seats = placed_seats(rule, assignment);
                    if any_pair_beyond(&seats, 3) {
                        report.violated.push(rule.description.clone());
                    } else {
                        report.satisfied.push(rule.description.clone());
                    }
                }
                RuleKind::FrontRow => {
                    classify_row_rule(rule, assignment, assignment.min_y(), &mut report);
                }
                RuleKind::BackRow => {
                    classify_row_rule(rule, assignment, assignment.max_y(), &mut report);
                }
            }
        }

        report
    }
}

/// Entries of the rule's members that are actually placed.
fn placed_seats<'a>(rule: &Rule, assignment: &'a Assignment) -> Vec<&'a SeatAssignment> {
    rule.members
        .iter()
        .filter_map(|m| assignment.seat_of(m))
        .collect()
}

fn any_pair_within(seats: &[&SeatAssignment], limit: i32) -> bool {
    for (i, a) in seats.iter().enumerate() {
        for b in &seats[i + 1..] {
            if manhattan(a.x, a.y, b.x, b.y) <= limit {
                return true;
            }
        }
    }
    false
}

fn any_pair_beyond(seats: &[&SeatAssignment], limit: i32) -> bool {
    for (i, a) in seats.iter().enumerate() {
        for b in &seats[i + 1..] {
            if manhattan(a.x, a.y, b.x, b.y) > limit {
                return true;
            }
        }
    }
    false
}

/// Front/back row verdict for the rule's first member; no verdict when
/// the member is unplaced.
fn classify_row_rule(
    rule: &Rule,
    assignment: &Assignment,
    target_y: Option<i32>,
    report: &mut ComplianceReport,
) {
    let Some(member) = rule.members.first() else {
        return;
    };
    let Some(seat) = assignment.seat_of(member) else {
        return;
    };
    if Some(seat.y) == target_y {
        report.satisfied.push(rule.description.clone());
    } else {
        report.violated.push(rule.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position_id: &str, person_id: Option<&str>, x: i32, y: i32) -> SeatAssignment {
        SeatAssignment {
            position_id: position_id.into(),
            person_id: person_id.map(String::from),
            x,
            y,
        }
    }

    fn rule(id: &str, kind: RuleKind, members: &[&str]) -> Rule {
        Rule::new(
            id,
            kind,
            members.iter().map(|m| m.to_string()).collect(),
            format!("{}: {}", kind.label(), members.join(" & ")),
        )
    }

    #[test]
    fn test_keep_apart_violated_when_adjacent() {
        let assignment = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", Some("b"), 1, 0)],
        };
        let rules = vec![rule("r1", RuleKind::KeepApart, &["a", "b"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.violated, vec!["Keep Apart: a & b".to_string()]);
        assert!(report.satisfied.is_empty());
    }

    #[test]
    fn test_keep_apart_satisfied_beyond_two() {
        let assignment = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", Some("b"), 3, 0)],
        };
        let rules = vec![rule("r1", RuleKind::KeepApart, &["a", "b"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.satisfied_count(), 1);
        assert!(report.is_fully_satisfied());
    }

    #[test]
    fn test_keep_apart_skips_unplaced_members() {
        // Only one member placed: no violating pair exists.
        let assignment = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", None, 1, 0)],
        };
        let rules = vec![rule("r1", RuleKind::KeepApart, &["a", "b"])];

        let report = Verifier::check(&rules, &assignment);
        assert!(report.is_fully_satisfied());
        assert_eq!(report.satisfied_count(), 1);
    }

    #[test]
    fn test_keep_apart_any_bad_pair_violates() {
        // a-b are far apart but b-c are adjacent.
        let assignment = Assignment {
            entries: vec![
                entry("d0", Some("a"), 0, 0),
                entry("d1", Some("b"), 6, 0),
                entry("d2", Some("c"), 7, 0),
            ],
        };
        let rules = vec![rule("r1", RuleKind::KeepApart, &["a", "b", "c"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.violated_count(), 1);
    }

    #[test]
    fn test_keep_together_thresholds() {
        // Distance 2: within the together tolerance of 3.
        let close = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", Some("b"), 1, 1)],
        };
        // Distance 4: beyond tolerance.
        let far = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", Some("b"), 4, 0)],
        };
        let rules = vec![rule("r1", RuleKind::KeepTogether, &["a", "b"])];

        assert!(Verifier::check(&rules, &close).is_fully_satisfied());
        assert_eq!(Verifier::check(&rules, &far).violated_count(), 1);
    }

    #[test]
    fn test_together_tolerance_looser_than_apart_trigger() {
        // At distance 3 the same placement satisfies "together" yet
        // would also satisfy "apart": the asymmetric thresholds overlap.
        let assignment = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 0), entry("d1", Some("b"), 3, 0)],
        };
        let rules = vec![
            rule("r1", RuleKind::KeepTogether, &["a", "b"]),
            rule("r2", RuleKind::KeepApart, &["a", "b"]),
        ];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.satisfied_count(), 2);
    }

    #[test]
    fn test_front_row_verdicts() {
        let assignment = Assignment {
            entries: vec![
                entry("d0", Some("a"), 0, 0),
                entry("d1", Some("b"), 0, 1),
                entry("d2", None, 1, 1),
            ],
        };
        let rules = vec![
            rule("r1", RuleKind::FrontRow, &["a"]),
            rule("r2", RuleKind::FrontRow, &["b"]),
        ];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.satisfied, vec!["Front Row: a".to_string()]);
        assert_eq!(report.violated, vec!["Front Row: b".to_string()]);
    }

    #[test]
    fn test_back_row_uses_all_entries_for_extent() {
        // The unfilled entry at y=5 defines the back row, so "a" at y=1
        // is not in back.
        let assignment = Assignment {
            entries: vec![entry("d0", Some("a"), 0, 1), entry("d1", None, 0, 5)],
        };
        let rules = vec![rule("r1", RuleKind::BackRow, &["a"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.violated_count(), 1);
    }

    #[test]
    fn test_row_rule_with_unplaced_member_is_omitted() {
        let assignment = Assignment {
            entries: vec![entry("d0", None, 0, 0)],
        };
        let rules = vec![rule("r1", RuleKind::FrontRow, &["a"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.evaluated(), 0);
    }

    #[test]
    fn test_row_rule_checks_first_member_only() {
        // Second member sits in front but the first does not: violated.
        let assignment = Assignment {
            entries: vec![entry("d0", Some("b"), 0, 0), entry("d1", Some("a"), 0, 1)],
        };
        let rules = vec![rule("r1", RuleKind::FrontRow, &["a", "b"])];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(report.violated_count(), 1);
    }

    #[test]
    fn test_report_preserves_input_rule_order() {
        let assignment = Assignment {
            entries: vec![
                entry("d0", Some("a"), 0, 0),
                entry("d1", Some("b"), 1, 0),
                entry("d2", Some("c"), 6, 0),
            ],
        };
        let rules = vec![
            rule("r1", RuleKind::KeepApart, &["a", "c"]),
            rule("r2", RuleKind::KeepApart, &["a", "b"]),
            rule("r3", RuleKind::KeepTogether, &["a", "b"]),
            rule("r4", RuleKind::KeepTogether, &["a", "c"]),
        ];

        let report = Verifier::check(&rules, &assignment);
        assert_eq!(
            report.satisfied,
            vec![
                "Keep Apart: a & c".to_string(),
                "Keep Together: a & b".to_string(),
            ]
        );
        assert_eq!(
            report.violated,
            vec![
                "Keep Apart: a & b".to_string(),
                "Keep Together: a & c".to_string(),
            ]
        );
    }

    #[test]
    fn test_tiny_grid_apart_rule_always_violated() {
        // 2x2 grid scenario: the maximum achievable distance is 2, so a
        // keep-apart pair is flagged no matter where the solver puts
        // them. A heuristic limit, not a verifier bug.
        use crate::model::{Layout, Person, Position};
        use crate::solver::Solver;

        let layout = Layout::new(vec![
            Position::new("d0", 0, 0),
            Position::new("d1", 1, 0),
            Position::new("d2", 0, 1),
            Position::new("d3", 1, 1),
        ]);
        let roster = vec![
            Person::new("a", "Ann", "#111"),
            Person::new("b", "Ben", "#222"),
        ];
        let rules = vec![rule("r1", RuleKind::KeepApart, &["a", "b"])];

        for seed in 0..8 {
            let assignment = Solver::run_seeded(&layout, &roster, &rules, seed);
            let report = Verifier::check(&rules, &assignment);
            assert_eq!(report.violated_count(), 1, "seed {seed}");
        }
    }
}
