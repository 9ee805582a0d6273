mod progress;
mod service;
mod shuffle;
mod state;
mod store;

// Public API of the session subsystem.
pub use crate::error::{SessionError, StoreError};
pub use progress::SessionProgress;
pub use service::{AssessmentSession, PageItem};
pub use shuffle::{FixedOrder, OrderSource, SeededOrder, ThreadRngOrder};
pub use state::{SessionPhase, SessionState};
pub use store::{InMemorySessionStore, SessionStore};
