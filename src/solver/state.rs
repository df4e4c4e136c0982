//! Mutable placement state threaded through the solver passes.

use std::collections::HashMap;

/// Accumulated bindings of positions to people.
///
/// One explicit state value flows through the ordered passes, so each
/// pass is a plain step over a state snapshot rather than ambient shared
/// mutation. Two lookup structures: position → person for "is this seat
/// taken", and person → position for "is this person placed (and
/// where)".
#[derive(Debug, Clone, Default)]
pub struct PlacementState {
    seat_to_person: HashMap<String, String>,
    person_to_seat: HashMap<String, String>,
}

impl PlacementState {
    /// Creates an empty state with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a person to a position. A pass only calls this for an
    /// unfilled position and an unplaced person; the maps stay in
    /// one-to-one correspondence.
    pub fn bind(&mut self, position_id: &str, person_id: &str) {
        self.seat_to_person
            .insert(position_id.to_owned(), person_id.to_owned());
        self.person_to_seat
            .insert(person_id.to_owned(), position_id.to_owned());
    }

    /// Whether the position already has a person bound.
    pub fn is_filled(&self, position_id: &str) -> bool {
        self.seat_to_person.contains_key(position_id)
    }

    /// Whether the person has already been placed.
    pub fn is_placed(&self, person_id: &str) -> bool {
        self.person_to_seat.contains_key(person_id)
    }

    /// The position a person is bound to, if placed.
    pub fn seat_of(&self, person_id: &str) -> Option<&str> {
        self.person_to_seat.get(person_id).map(String::as_str)
    }

    /// The person bound to a position, if filled.
    pub fn person_at(&self, position_id: &str) -> Option<&str> {
        self.seat_to_person.get(position_id).map(String::as_str)
    }

    /// Number of bound pairs.
    pub fn placed_count(&self) -> usize {
        self.person_to_seat.len()
    }
}
