//! Input model: layout, roster, and placement rules.
//!
//! All three are constructed by the caller before a solve and are
//! read-only to the engine. The solver produces a new
//! [`Assignment`](crate::solver::Assignment) value rather than mutating
//! any of them.

mod layout;
mod roster;
mod rule;

pub use layout::{Layout, Position};
pub use roster::Person;
pub use rule::{Rule, RuleKind};
