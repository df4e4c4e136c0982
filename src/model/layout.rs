//! Layout: labeled positions on an integer grid.

/// A placeable slot ("desk") in the layout grid.
///
/// `x` and `y` are grid cell coordinates, not pixels. Smaller `y` is
/// closer to the front of the room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Identifier, unique within a layout.
    pub id: String,
    /// Grid column.
    pub x: i32,
    /// Grid row.
    pub y: i32,
}

impl Position {
    /// Creates a position at the given grid cell.
    pub fn new(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// An immutable set of positions fixed for the duration of a solve.
///
/// Position ids must be unique within a layout; the layout editor is
/// responsible for guaranteeing this before a solve (see
/// [`validate`](Layout::validate)). Coordinates may overlap — the data
/// model permits two positions on the same cell.
///
/// # Examples
///
/// ```
/// use seatplan::model::Layout;
///
/// let layout = Layout::classroom(5, 6);
/// assert_eq!(layout.len(), 30);
/// assert_eq!(layout.min_y(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    positions: Vec<Position>,
}

impl Layout {
    /// Creates a layout from an arbitrary set of positions.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Creates the traditional row-and-column classroom layout:
    /// `rows * cols` desks with an aisle between columns, ids
    /// `desk-{row}-{col}`.
    pub fn classroom(rows: usize, cols: usize) -> Self {
        let mut positions = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                positions.push(Position::new(
                    format!("desk-{row}-{col}"),
                    col as i32 * 2,
                    row as i32 + 1,
                ));
            }
        }
        Self { positions }
    }

    /// The positions in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in canonical reading order: ascending `y`, ties broken
    /// by ascending `x`. This order defines "front" (minimum `y`) and
    /// "back" (maximum `y`) and is the order used for adjacency scans
    /// and deterministic tie-breaking.
    pub fn reading_order(&self) -> Vec<&Position> {
        let mut ordered: Vec<&Position> = self.positions.iter().collect();
        ordered.sort_by(|a, b| a.y.cmp(&b.y).then(a.x.cmp(&b.x)));
        ordered
    }

    /// The front row's `y` coordinate, `None` for an empty layout.
    pub fn min_y(&self) -> Option<i32> {
        self.positions.iter().map(|p| p.y).min()
    }

    /// The back row's `y` coordinate, `None` for an empty layout.
    pub fn max_y(&self) -> Option<i32> {
        self.positions.iter().map(|p| p.y).max()
    }

    /// Checks the uniqueness invariant on position ids.
    ///
    /// The solver does not call this — it is the layout editor's
    /// precondition to enforce before submitting a layout.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for p in &self.positions {
            if !seen.insert(p.id.as_str()) {
                return Err(format!("duplicate position id: {}", p.id));
            }
        }
        Ok(())
    }
}
