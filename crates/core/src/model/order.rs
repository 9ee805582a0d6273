use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;

use crate::model::ids::{StatementError, StatementId};
use crate::model::statement::STATEMENT_COUNT;

/// Statements shown per page.
pub const PAGE_SIZE: usize = 5;

/// Errors raised when building an order from raw ordinals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError {
    #[error("presentation order has {len} entries, expected 27")]
    WrongLength { len: usize },

    #[error("statement {0} appears more than once in presentation order")]
    Duplicate(StatementId),

    #[error(transparent)]
    Statement(#[from] StatementError),
}

/// Number of pages needed to show every statement.
#[must_use]
pub fn page_count() -> usize {
    STATEMENT_COUNT.div_ceil(PAGE_SIZE)
}

/// Index of the final page (the one that submits instead of advancing).
#[must_use]
pub fn last_page() -> usize {
    page_count() - 1
}

/// Presentation slots covered by `page`; empty past the last page.
#[must_use]
pub fn page_range(page: usize) -> Range<usize> {
    let start = page.saturating_mul(PAGE_SIZE).min(STATEMENT_COUNT);
    let end = start.saturating_add(PAGE_SIZE).min(STATEMENT_COUNT);
    start..end
}

/// Sequence in which statements are shown.
///
/// Always a full permutation of the 27 statement ids. Paging slices this
/// sequence; scoring never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationOrder {
    slots: Vec<StatementId>,
}

impl PresentationOrder {
    /// Catalogue order, unshuffled.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            slots: StatementId::all().collect(),
        }
    }

    /// Uniformly shuffled order drawn from `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Self::identity();
        order.slots.shuffle(rng);
        order
    }

    /// Validates raw ordinals as a permutation of the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::WrongLength` if not exactly 27 entries are given,
    /// `OrderError::Statement` for an out-of-range ordinal and
    /// `OrderError::Duplicate` if an ordinal repeats.
    pub fn from_ordinals<I>(ordinals: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = usize>,
    {
        let ordinals: Vec<usize> = ordinals.into_iter().collect();
        if ordinals.len() != STATEMENT_COUNT {
            return Err(OrderError::WrongLength {
                len: ordinals.len(),
            });
        }

        let mut seen = [false; STATEMENT_COUNT];
        let mut slots = Vec::with_capacity(STATEMENT_COUNT);
        for ordinal in ordinals {
            let id = StatementId::new(ordinal)?;
            if seen[id.index()] {
                return Err(OrderError::Duplicate(id));
            }
            seen[id.index()] = true;
            slots.push(id);
        }

        Ok(Self { slots })
    }

    /// Statement shown at presentation `slot`, if the slot exists.
    #[must_use]
    pub fn at(&self, slot: usize) -> Option<StatementId> {
        self.slots.get(slot).copied()
    }

    #[must_use]
    pub fn slots(&self) -> &[StatementId] {
        &self.slots
    }

    /// `(slot, id)` pairs shown on `page`.
    pub fn page(&self, page: usize) -> impl Iterator<Item = (usize, StatementId)> + '_ {
        let range = page_range(page);
        self.slots[range.clone()]
            .iter()
            .copied()
            .zip(range)
            .map(|(id, slot)| (slot, id))
    }
}
