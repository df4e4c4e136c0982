//! Shared grid geometry.
//!
//! Manhattan distance is the single adjacency/separation metric used by
//! both the solver's scoring pass and the compliance verifier.

/// Manhattan (taxicab) distance between two grid cells: `|Δx| + |Δy|`.
pub fn manhattan(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    (x1 - x2).abs() + (y1 - y2).abs()
}
