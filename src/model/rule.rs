//! Placement rules: soft preferences over roster members.

/// The closed set of rule kinds.
///
/// Modeled as an enum (rather than string dispatch) so the solver and
/// verifier match exhaustively; adding a kind is a compile-checked
/// change in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    /// Members should not sit within Manhattan distance 2 of each other.
    KeepApart,
    /// Members should sit near each other (within Manhattan distance 3).
    KeepTogether,
    /// The first member should sit in the front row (minimum `y`).
    FrontRow,
    /// The first member should sit in the back row (maximum `y`).
    BackRow,
}

impl RuleKind {
    /// Human-readable label used in rule descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::KeepApart => "Keep Apart",
            RuleKind::KeepTogether => "Keep Together",
            RuleKind::FrontRow => "Front Row",
            RuleKind::BackRow => "Back Row",
        }
    }

    /// Minimum member count for the rule to be meaningful.
    ///
    /// Pair kinds need at least two members; row kinds act on a single
    /// member (only the first listed is consulted).
    pub fn min_members(&self) -> usize {
        match self {
            RuleKind::KeepApart | RuleKind::KeepTogether => 2,
            RuleKind::FrontRow | RuleKind::BackRow => 1,
        }
    }
}

/// A soft placement preference over one or more roster members.
///
/// `members` holds person ids in rule-author order; order matters for
/// the pair-binding of keep-together and the single effective member of
/// the row kinds. A rule below its kind's minimum member count is not
/// rejected by the solver — it is simply a no-op (see
/// [`is_well_formed`](Rule::is_well_formed)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Identifier, unique within a rule set.
    pub id: String,
    /// What the rule asks for.
    pub kind: RuleKind,
    /// Person ids the rule applies to, in author order.
    pub members: Vec<String>,
    /// Display text, reported verbatim by the verifier.
    pub description: String,
}

impl Rule {
    /// Creates a rule with an explicit description.
    pub fn new(
        id: impl Into<String>,
        kind: RuleKind,
        members: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            members,
            description: description.into(),
        }
    }

    /// Formats the standard rule description from member display names:
    /// `"Keep Apart: Ann & Ben"`.
    pub fn describe(kind: RuleKind, names: &[&str]) -> String {
        format!("{}: {}", kind.label(), names.join(" & "))
    }

    /// Whether the rule meets its kind's minimum member count.
    ///
    /// The rule editor enforces this before submission; the solver never
    /// checks it and treats under-populated rules as no-ops.
    pub fn is_well_formed(&self) -> bool {
        self.members.len() >= self.kind.min_members()
    }
}
