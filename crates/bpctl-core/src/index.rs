//! Conversion from the 1-based index an operator types to a 0-based target.
//!
//! This is the only place that subtracts one. Everything downstream works
//! in ordinals.

/// Which edit the index is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Set,
    Add,
    Remove,
}

/// A resolved position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 0-based ordinal. May be negative or past the end; the editor decides
    /// what that means for each operation.
    At(i64),
    /// Past the last entry.
    End,
}

impl Target {
    /// Returns the position as an in-bounds list index, if it is one.
    pub fn within(self, len: usize) -> Option<usize> {
        match self {
            Self::At(ordinal) => usize::try_from(ordinal).ok().filter(|&i| i < len),
            Self::End => None,
        }
    }

    /// Returns the 0-based ordinal, with `End` mapped to `len`.
    pub fn ordinal(self, len: usize) -> i64 {
        match self {
            Self::At(ordinal) => ordinal,
            Self::End => i64::try_from(len).unwrap_or(i64::MAX),
        }
    }
}

/// Resolves an optional 1-based user index for `kind`.
///
/// `Set` and `Remove` default to the first entry, `Add` defaults to the end.
/// No bounds checking happens here.
pub fn resolve(kind: EditKind, user_index: Option<i64>) -> Target {
    match (kind, user_index) {
        (_, Some(index)) => Target::At(index.saturating_sub(1)),
        (EditKind::Set | EditKind::Remove, None) => Target::At(0),
        (EditKind::Add, None) => Target::End,
    }
}
