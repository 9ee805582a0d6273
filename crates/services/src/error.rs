//! Shared error types for the services crate.

use thiserror::Error;

use tshape_core::model::{RatingError, SessionId};

/// Errors emitted by session operations.
///
/// A rejected operation never changes session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("page {page} is the last page; submit instead of advancing")]
    PrematureAdvance { page: usize },
    #[error("cannot submit from page {page}; answers are submitted from page {last}")]
    PrematureSubmit { page: usize, last: usize },
    #[error("results are already shown; restart to answer again")]
    ResultsShown,
    #[error("slot {slot} is not shown on page {page}")]
    InvalidSlot { slot: usize, page: usize },
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Errors emitted by session stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("session store lock poisoned: {0}")]
    Poisoned(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}
