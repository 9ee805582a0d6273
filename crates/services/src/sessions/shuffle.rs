use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

use tshape_core::model::PresentationOrder;

/// Supplies the presentation order for a fresh or restarted session.
pub trait OrderSource: Send {
    fn next_order(&mut self) -> PresentationOrder;
}

/// Uniform shuffle from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngOrder;

impl OrderSource for ThreadRngOrder {
    fn next_order(&mut self) -> PresentationOrder {
        PresentationOrder::shuffled(&mut rand::rng())
    }
}

/// Uniform shuffle from a seeded generator; the same seed replays the same
/// sequence of orders across restarts.
pub struct SeededOrder {
    rng: StdRng,
}

impl SeededOrder {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OrderSource for SeededOrder {
    fn next_order(&mut self) -> PresentationOrder {
        PresentationOrder::shuffled(&mut self.rng)
    }
}

impl fmt::Debug for SeededOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededOrder").finish_non_exhaustive()
    }
}

/// Always hands out the same order.
#[derive(Debug, Clone)]
pub struct FixedOrder(PresentationOrder);

impl FixedOrder {
    #[must_use]
    pub fn new(order: PresentationOrder) -> Self {
        Self(order)
    }

    /// Unshuffled catalogue order.
    #[must_use]
    pub fn identity() -> Self {
        Self(PresentationOrder::identity())
    }
}

impl OrderSource for FixedOrder {
    fn next_order(&mut self) -> PresentationOrder {
        self.0.clone()
    }
}
