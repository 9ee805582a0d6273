use serde::Serialize;

use tshape_core::model::{AnswerSet, PresentationOrder, last_page};

/// Where a session sits in its answering flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum SessionPhase {
    Answering { page: usize },
    ResultsShown,
}

/// Pagination position, answers, presentation order and results flag for one
/// respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    current_page: usize,
    answers: AnswerSet,
    order: PresentationOrder,
    results_visible: bool,
}

impl SessionState {
    /// Fresh state on the first page with every answer neutral.
    #[must_use]
    pub fn new(order: PresentationOrder) -> Self {
        Self {
            current_page: 0,
            answers: AnswerSet::new(),
            order,
            results_visible: false,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn order(&self) -> &PresentationOrder {
        &self.order
    }

    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page == last_page()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.results_visible {
            SessionPhase::ResultsShown
        } else {
            SessionPhase::Answering {
                page: self.current_page,
            }
        }
    }

    pub(crate) fn answers_mut(&mut self) -> &mut AnswerSet {
        &mut self.answers
    }

    pub(crate) fn advance(&mut self) {
        self.current_page += 1;
    }

    pub(crate) fn show_results(&mut self) {
        self.results_visible = true;
    }
}
