//! Multi-pass greedy placement solver.
//!
//! Four ordered passes, each considering only currently-unfilled
//! positions and currently-unplaced people:
//!
//! 1. **Row affinity** — front-row/back-row claimants are bound to the
//!    first free position of the matching row, in reading order.
//! 2. **Togetherness** — each keep-together rule binds its first two
//!    unplaced members to the first free adjacent position pair.
//! 3. **Separation-scored free placement** — remaining people, in a
//!    shuffled order, each take the free position with the best
//!    keep-apart score.
//! 4. **Materialization** — every layout position becomes an assignment
//!    entry, filled or not.
//!
//! Passes are ordered by constraint rigidity: row and togetherness
//! preferences have few valid slots and are resolved structurally first;
//! separation has many candidates and is resolved last through a local
//! score. There is no backtracking — a bound position is never
//! revisited — which bounds the work to `O(people × positions × rules)`
//! instead of a search over the assignment space.

mod runner;
mod state;
mod types;

pub use runner::Solver;
pub use state::PlacementState;
pub use types::{Assignment, SeatAssignment};
