//! Compliance report type.

/// The partition of rules into satisfied and violated for one
/// assignment.
///
/// Both lists hold rule descriptions verbatim, preserving input rule
/// order. Row rules whose member was never placed appear in neither
/// list, so [`evaluated`](ComplianceReport::evaluated) may be smaller
/// than the number of rules checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceReport {
    /// Descriptions of satisfied rules, in input order.
    pub satisfied: Vec<String>,
    /// Descriptions of violated rules, in input order.
    pub violated: Vec<String>,
}

impl ComplianceReport {
    /// Number of satisfied rules.
    pub fn satisfied_count(&self) -> usize {
        self.satisfied.len()
    }

    /// Number of violated rules.
    pub fn violated_count(&self) -> usize {
        self.violated.len()
    }

    /// Number of rules that produced a verdict.
    pub fn evaluated(&self) -> usize {
        self.satisfied.len() + self.violated.len()
    }

    /// Whether no rule was violated.
    pub fn is_fully_satisfied(&self) -> bool {
        self.violated.is_empty()
    }
}
