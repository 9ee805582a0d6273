use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

use tshape_core::Clock;
use tshape_core::model::{
    PresentationOrder, Rating, STATEMENT_COUNT, StatementId, last_page, page_count, page_range,
    statement,
};

use super::progress::SessionProgress;
use super::shuffle::{OrderSource, ThreadRngOrder};
use super::state::{SessionPhase, SessionState};
use crate::error::SessionError;
use crate::report::AssessmentReport;

//
// ─── PAGE ITEM ─────────────────────────────────────────────────────────────────
//

/// One statement as it appears on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageItem {
    /// Zero-based position in presentation order.
    pub slot: usize,
    pub id: StatementId,
    pub text: &'static str,
    /// Answer currently recorded for the statement.
    pub rating: Rating,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One respondent's walk through the questionnaire.
///
/// Statements are shown five per page in a shuffled order; ratings are stored
/// by fixed ordinal. The session owns its order source so `restart` can draw
/// a new shuffle without the caller supplying one.
pub struct AssessmentSession {
    state: SessionState,
    clock: Clock,
    orders: Box<dyn OrderSource>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentSession {
    /// Start a session with a thread-RNG shuffle and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(Clock::default(), Box::new(ThreadRngOrder))
    }

    /// Start a session drawing orders from `orders`.
    #[must_use]
    pub fn with_source(clock: Clock, mut orders: Box<dyn OrderSource>) -> Self {
        let order = orders.next_order();
        let started_at = clock.now();
        debug!(first = ?order.at(0), "assessment session started");
        Self {
            state: SessionState::new(order),
            clock,
            orders,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn order(&self) -> &PresentationOrder {
        self.state.order()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.state.results_visible()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let page = self.state.current_page();
        SessionProgress {
            page,
            page_count: page_count(),
            slots_behind: page_range(page).start,
            total_statements: STATEMENT_COUNT,
            is_last_page: self.state.is_last_page(),
            results_visible: self.state.results_visible(),
        }
    }

    /// Statements on the current page in presentation order, with their
    /// current answers.
    #[must_use]
    pub fn current_page_items(&self) -> Vec<PageItem> {
        let answers = self.state.answers();
        self.state
            .order()
            .page(self.state.current_page())
            .map(|(slot, id)| PageItem {
                slot,
                id,
                text: statement(id).text,
                rating: answers.get(id),
            })
            .collect()
    }

    /// Record a rating for the statement with the given ordinal.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ResultsShown` once results are visible.
    pub fn record_answer(&mut self, id: StatementId, rating: Rating) -> Result<(), SessionError> {
        if self.state.results_visible() {
            warn!(%id, "answer rejected after results were shown");
            return Err(SessionError::ResultsShown);
        }
        self.state.answers_mut().set(id, rating);
        debug!(%id, rating = rating.value(), "answer recorded");
        Ok(())
    }

    /// Record a rating for whatever statement is displayed at presentation
    /// `slot` on the current page.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSlot` if the slot is not on the current page
    /// and `SessionError::ResultsShown` once results are visible.
    pub fn record_slot(&mut self, slot: usize, rating: Rating) -> Result<(), SessionError> {
        let id = self.ordinal_at(slot)?;
        self.record_answer(id, rating)
    }

    /// Like [`record_slot`](Self::record_slot) for a raw 1-5 value from the host.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rating` for values outside 1-5; nothing is stored.
    pub fn record_slot_value(&mut self, slot: usize, value: u8) -> Result<(), SessionError> {
        let rating = Rating::from_u8(value)?;
        self.record_slot(slot, rating)
    }

    /// Statement shown at `slot`, restricted to the current page.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSlot` if the slot is not on the current page.
    pub fn ordinal_at(&self, slot: usize) -> Result<StatementId, SessionError> {
        let page = self.state.current_page();
        if !page_range(page).contains(&slot) {
            return Err(SessionError::InvalidSlot { slot, page });
        }
        self.state
            .order()
            .at(slot)
            .ok_or(SessionError::InvalidSlot { slot, page })
    }

    /// Move to the next page.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PrematureAdvance` on the last page and
    /// `SessionError::ResultsShown` once results are visible.
    pub fn advance_page(&mut self) -> Result<(), SessionError> {
        if self.state.results_visible() {
            return Err(SessionError::ResultsShown);
        }
        if self.state.is_last_page() {
            let page = self.state.current_page();
            warn!(page, "advance rejected on last page");
            return Err(SessionError::PrematureAdvance { page });
        }
        self.state.advance();
        debug!(page = self.state.current_page(), "page advanced");
        Ok(())
    }

    /// Finish answering and reveal results.
    ///
    /// Returns the report that `report()` yields from now on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PrematureSubmit` unless on the last page and
    /// `SessionError::ResultsShown` if already submitted.
    pub fn submit(&mut self) -> Result<AssessmentReport, SessionError> {
        if self.state.results_visible() {
            return Err(SessionError::ResultsShown);
        }
        if !self.state.is_last_page() {
            let page = self.state.current_page();
            warn!(page, "submit rejected before last page");
            return Err(SessionError::PrematureSubmit {
                page,
                last: last_page(),
            });
        }
        let completed_at = self.clock.now();
        self.state.show_results();
        self.completed_at = Some(completed_at);

        let report = AssessmentReport::new(self.state.answers(), self.started_at, completed_at);
        info!(
            breadth = report.scores.breadth,
            depth = report.scores.depth,
            profile = report.interpretation.profile_label(),
            "assessment submitted"
        );
        Ok(report)
    }

    /// Discard all answers and start over with a new order.
    pub fn restart(&mut self) {
        let order = self.orders.next_order();
        self.state = SessionState::new(order);
        self.started_at = self.clock.now();
        self.completed_at = None;
        debug!("assessment session restarted");
    }

    /// Scores and interpretation, available once results are visible.
    #[must_use]
    pub fn report(&self) -> Option<AssessmentReport> {
        let completed_at = self.completed_at?;
        if !self.state.results_visible() {
            return None;
        }
        Some(AssessmentReport::new(
            self.state.answers(),
            self.started_at,
            completed_at,
        ))
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("phase", &self.state.phase())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
