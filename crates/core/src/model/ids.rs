use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::statement::STATEMENT_COUNT;

/// Errors raised when an ordinal does not name a known statement.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatementError {
    #[error("statement ordinal {0} is out of range (expected 0..27)")]
    InvalidOrdinal(usize),
}

/// Fixed ordinal of a statement in the catalogue (0..27).
///
/// The ordinal decides dimension membership, so it is the only key answers are
/// ever stored or scored under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(u8);

impl StatementId {
    /// Creates a `StatementId` from a raw ordinal.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::InvalidOrdinal` if the ordinal is not below 27.
    pub fn new(ordinal: usize) -> Result<Self, StatementError> {
        if ordinal >= STATEMENT_COUNT {
            return Err(StatementError::InvalidOrdinal(ordinal));
        }
        u8::try_from(ordinal)
            .map(Self)
            .map_err(|_| StatementError::InvalidOrdinal(ordinal))
    }

    /// Returns the ordinal as an index into catalogue-ordered storage.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Iterates every statement id in ordinal order.
    pub fn all() -> impl Iterator<Item = StatementId> {
        (0..STATEMENT_COUNT).filter_map(|ordinal| Self::new(ordinal).ok())
    }
}

/// Identifier for a live session inside a multi-session host.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a new `SessionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatementId({})", self.0)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
