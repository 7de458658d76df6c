//! Breakfast error taxonomy.
//!
//! # Responsibility
//! - Name every failure the core can report, each with a stable code.
//! - Aggregate field-level failures so callers see every violation at once.
//!
//! # Invariants
//! - `BreakfastErrors` always holds at least one error.
//! - Codes are stable identifiers; transports branch on `ErrorKind`, never on
//!   message text.

use crate::model::breakfast::{
    BreakfastId, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_NAME_LENGTH,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type shared by construction and every service operation.
pub type BreakfastResult<T> = Result<T, BreakfastErrors>;

/// Coarse error category used by transports to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected by a field-level constraint.
    Validation,
    /// Target id has no stored breakfast.
    NotFound,
    /// Target id is already taken.
    Conflict,
}

impl ErrorKind {
    /// Stable string id for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
        }
    }
}

/// One named failure reported by the breakfast core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakfastError {
    /// Name character count is outside `[MIN_NAME_LENGTH, MAX_NAME_LENGTH]`.
    InvalidName { length: usize },
    /// Description character count is outside
    /// `[MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH]`.
    InvalidDescription { length: usize },
    /// No breakfast is stored under the id.
    NotFound(BreakfastId),
    /// A breakfast is already stored under the id.
    AlreadyExists(BreakfastId),
}

impl BreakfastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName { .. } | Self::InvalidDescription { .. } => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) => ErrorKind::Conflict,
        }
    }

    /// Stable machine-readable code, e.g. `Breakfast.InvalidName`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "Breakfast.InvalidName",
            Self::InvalidDescription { .. } => "Breakfast.InvalidDescription",
            Self::NotFound(_) => "Breakfast.NotFound",
            Self::AlreadyExists(_) => "Breakfast.AlreadyExists",
        }
    }
}

impl Display for BreakfastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { .. } => write!(
                f,
                "breakfast name must be at least {MIN_NAME_LENGTH} characters long and at most {MAX_NAME_LENGTH} characters long"
            ),
            Self::InvalidDescription { .. } => write!(
                f,
                "breakfast description must be at least {MIN_DESCRIPTION_LENGTH} characters long and at most {MAX_DESCRIPTION_LENGTH} characters long"
            ),
            Self::NotFound(id) => write!(f, "breakfast not found: {id}"),
            Self::AlreadyExists(id) => write!(f, "breakfast already exists: {id}"),
        }
    }
}

impl Error for BreakfastError {}

/// Non-empty, ordered aggregate of breakfast errors.
///
/// Validation may report several errors for one request; lookup and conflict
/// failures are carried as a single-element aggregate so every operation
/// shares one failure shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakfastErrors {
    first: BreakfastError,
    rest: Vec<BreakfastError>,
}

impl BreakfastErrors {
    /// Builds an aggregate from collected errors; `None` when nothing failed.
    pub fn from_errors(errors: Vec<BreakfastError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// Returns the first reported error.
    pub fn first(&self) -> &BreakfastError {
        &self.first
    }

    /// Kind of the first error.
    ///
    /// Aggregates built by the core hold a single kind, but `from_errors`
    /// accepts any mix; inspect `iter()` when that matters.
    pub fn kind(&self) -> ErrorKind {
        self.first.kind()
    }

    /// Number of errors; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakfastError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn contains(&self, error: &BreakfastError) -> bool {
        self.iter().any(|candidate| candidate == error)
    }

    /// Codes of all errors in report order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.iter().map(BreakfastError::code).collect()
    }

    pub fn into_vec(self) -> Vec<BreakfastError> {
        let mut errors = Vec::with_capacity(1 + self.rest.len());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

impl From<BreakfastError> for BreakfastErrors {
    fn from(value: BreakfastError) -> Self {
        Self {
            first: value,
            rest: Vec::new(),
        }
    }
}

impl IntoIterator for BreakfastErrors {
    type Item = BreakfastError;
    type IntoIter = std::vec::IntoIter<BreakfastError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl Display for BreakfastErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl Error for BreakfastErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.first)
    }
}
