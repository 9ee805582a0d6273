#![forbid(unsafe_code)]

pub mod error;
pub mod report;
pub mod sessions;

pub use tshape_core::Clock;
pub use sessions as session;

pub use error::{SessionError, StoreError};
pub use report::{AssessmentReport, ResultRow};

pub use sessions::{
    AssessmentSession, FixedOrder, InMemorySessionStore, OrderSource, PageItem, SeededOrder,
    SessionPhase, SessionProgress, SessionState, SessionStore, ThreadRngOrder,
};
