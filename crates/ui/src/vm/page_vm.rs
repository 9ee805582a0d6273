use services::{AssessmentSession, PageItem};
use tshape_core::model::Rating;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Next,
    Submit,
}

impl PageAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PageAction::Next => "Next",
            PageAction::Submit => "Submit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageItemVm {
    pub slot: usize,
    pub prompt: String,
    pub rating: Rating,
    pub rating_label: &'static str,
}

impl From<&PageItem> for PageItemVm {
    fn from(item: &PageItem) -> Self {
        Self {
            slot: item.slot,
            // Numbering follows presentation order, not catalogue order.
            prompt: format!("Q{}: {}", item.slot + 1, item.text),
            rating: item.rating,
            rating_label: item.rating.label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageVm {
    pub title: String,
    pub items: Vec<PageItemVm>,
    pub action: PageAction,
}

#[must_use]
pub fn map_page(session: &AssessmentSession) -> PageVm {
    let progress = session.progress();
    let items = session
        .current_page_items()
        .iter()
        .map(PageItemVm::from)
        .collect();
    let action = if progress.is_last_page {
        PageAction::Submit
    } else {
        PageAction::Next
    };

    PageVm {
        title: format!("Page {} of {}", progress.page + 1, progress.page_count),
        items,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Clock, FixedOrder};
    use tshape_core::model::PresentationOrder;
    use tshape_core::time::fixed_now;

    fn session() -> AssessmentSession {
        let order = PresentationOrder::from_ordinals((0..27).rev()).unwrap();
        AssessmentSession::with_source(Clock::fixed(fixed_now()), Box::new(FixedOrder::new(order)))
    }

    #[test]
    fn first_page_numbers_by_slot() {
        let vm = map_page(&session());
        assert_eq!(vm.title, "Page 1 of 6");
        assert_eq!(vm.action, PageAction::Next);
        assert_eq!(vm.items.len(), 5);
        assert_eq!(
            vm.items[0].prompt,
            "Q1: I can independently handle complex tasks that require deep knowledge."
        );
        assert_eq!(vm.items[0].rating_label, "3 - Neutral");
    }

    #[test]
    fn last_page_offers_submit() {
        let mut session = session();
        for _ in 0..5 {
            session.advance_page().unwrap();
        }
        let vm = map_page(&session);
        assert_eq!(vm.title, "Page 6 of 6");
        assert_eq!(vm.action, PageAction::Submit);
        assert_eq!(vm.items.len(), 2);
        assert!(vm.items[1].prompt.starts_with("Q27: I communicate effectively"));
    }
}
