//! Post-hoc rule compliance verification.
//!
//! Pure pass over a completed [`Assignment`](crate::solver::Assignment):
//! no randomness, no mutation. Rules are partitioned into satisfied and
//! violated in input order; a row rule whose member was never placed is
//! omitted from both lists.
//!
//! The thresholds are intentionally asymmetric: keep-apart triggers at
//! Manhattan distance `<= 2` while keep-together tolerates up to `<= 3`.
//! Togetherness is a looser bar than separation; both literals are
//! preserved as-is rather than unified.

mod report;
mod runner;

pub use report::ComplianceReport;
pub use runner::Verifier;
