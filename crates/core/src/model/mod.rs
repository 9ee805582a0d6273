mod answers;
mod ids;
mod order;
mod rating;
mod statement;

pub use answers::AnswerSet;
pub use ids::{SessionId, StatementError, StatementId};
pub use order::{OrderError, PAGE_SIZE, PresentationOrder, last_page, page_count, page_range};
pub use rating::{Rating, RatingError};
pub use statement::{
    BREADTH_COUNT, DEPTH_COUNT, Dimension, STATEMENT_COUNT, Statement, statement, statements,
};
