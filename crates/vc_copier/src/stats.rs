use core::fmt;

// -----------------------------------------------------------------------------
// Outcome

/// Why a member kept its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unchanged {
    /// The source pointer was empty.
    AbsentSource,
    /// The source was empty and `ignore_empty` is set.
    EmptySource,
}

/// Why a member could not be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skip {
    /// The kinds or types do not convert into each other.
    Incompatible,
    /// A numeric value does not fit the destination type.
    OutOfRange,
    /// The destination refused the value, e.g. a list push.
    Rejected,
}

/// The result of copying one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Copied,
    Unchanged(Unchanged),
    Skipped(Skip),
}

impl Outcome {
    #[inline]
    pub const fn is_copied(self) -> bool {
        matches!(self, Self::Copied)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied => f.write_str("copied"),
            Self::Unchanged(Unchanged::AbsentSource) => f.write_str("unchanged, absent source"),
            Self::Unchanged(Unchanged::EmptySource) => f.write_str("unchanged, empty source"),
            Self::Skipped(Skip::Incompatible) => f.write_str("skipped, incompatible types"),
            Self::Skipped(Skip::OutOfRange) => f.write_str("skipped, value out of range"),
            Self::Skipped(Skip::Rejected) => f.write_str("skipped, rejected by destination"),
        }
    }
}

// -----------------------------------------------------------------------------
// CopyStats

/// Per-member tallies of one copy, see [`Copier::copy`](crate::Copier::copy).
///
/// Every field copy, getter call and setter call is counted once, at every
/// nesting level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    /// Members that received a value.
    pub copied: usize,
    /// Members left as they were, because the source was absent or empty.
    pub unchanged: usize,
    /// Members that could not be converted.
    pub skipped: usize,
    /// Assign hooks that failed; the copy fell back to structural copy.
    pub hook_failures: usize,
}

impl CopyStats {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Copied => self.copied += 1,
            Outcome::Unchanged(_) => self.unchanged += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }
}

impl fmt::Display for CopyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} copied, {} unchanged, {} skipped, {} hook failures",
            self.copied, self.unchanged, self.skipped, self.hook_failures
        )
    }
}
