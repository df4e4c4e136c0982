//! Solver output types.

/// One position's share of a completed solve.
///
/// `x`/`y` are copied from the bound [`Position`](crate::model::Position)
/// at solve time so downstream geometry (verification, rendering) needs
/// no re-join against the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatAssignment {
    /// The position this entry describes.
    pub position_id: String,
    /// The person seated here, `None` when the position is left unfilled.
    pub person_id: Option<String>,
    /// Grid column of the position.
    pub x: i32,
    /// Grid row of the position.
    pub y: i32,
}

/// The complete mapping of positions to (optional) people after a solve.
///
/// Contains exactly one entry per layout position, in reading order.
/// Read-only to consumers; the verifier and any exporter must not
/// mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// One entry per layout position, in reading order.
    pub entries: Vec<SeatAssignment>,
}

impl Assignment {
    /// Number of entries (equals the layout's position count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the assignment has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of filled entries.
    pub fn placed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.person_id.is_some()).count()
    }

    /// The entry holding the given person, if they were placed.
    pub fn seat_of(&self, person_id: &str) -> Option<&SeatAssignment> {
        self.entries
            .iter()
            .find(|e| e.person_id.as_deref() == Some(person_id))
    }

    /// Minimum `y` over all entries, filled or not.
    pub fn min_y(&self) -> Option<i32> {
        self.entries.iter().map(|e| e.y).min()
    }

    /// Maximum `y` over all entries, filled or not.
    pub fn max_y(&self) -> Option<i32> {
        self.entries.iter().map(|e| e.y).max()
    }
}
