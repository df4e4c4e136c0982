//! Roster: the people to place.

/// A roster entry ("student") to be seated.
///
/// `id` must be unique within a roster; the display color is cosmetic
/// and never consulted by the solver or verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Identifier, unique within a roster.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color for rendering, e.g. `"#e74c3c"`.
    pub color: String,
}

impl Person {
    /// Creates a roster entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
