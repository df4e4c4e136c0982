//! Rule-aware seating assignment engine.
//!
//! Assigns a roster of people to labeled positions on a 2-D grid under
//! soft placement preferences, then reports how well the result satisfies
//! those preferences:
//!
//! - **Model**: immutable layout ([`Layout`](model::Layout) of grid
//!   [`Position`](model::Position)s), roster ([`Person`](model::Person)),
//!   and preference [`Rule`](model::Rule)s over roster members
//!   (keep-apart, keep-together, front-row, back-row).
//! - **Solver**: a bounded-effort greedy heuristic — four ordered passes
//!   (row affinity, togetherness, separation-scored free placement,
//!   materialization) with no backtracking. Always returns a complete
//!   [`Assignment`](solver::Assignment); unsatisfiable preferences degrade
//!   to unplaced people or unfilled seats, never to errors.
//! - **Verifier**: a pure post-hoc check partitioning rules into
//!   satisfied and violated given a concrete assignment.
//!
//! # Architecture
//!
//! The pipeline is one-shot: the caller builds the model values, runs
//! [`Solver::run`](solver::Solver::run), and optionally feeds the result
//! to [`Verifier::check`](verify::Verifier::check). No component calls
//! back into an earlier one, and the engine never mutates caller-owned
//! data. The only non-determinism is the caller-injected random source
//! used to shuffle the free-placement pass, so a seeded RNG reproduces
//! an assignment exactly.

pub mod grid;
pub mod model;
pub mod solver;
pub mod verify;
