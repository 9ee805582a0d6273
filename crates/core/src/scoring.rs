use serde::Serialize;

use crate::model::{AnswerSet, Dimension};

/// Raw per-dimension sums of the ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Scores {
    pub breadth: u32,
    pub depth: u32,
}

impl Scores {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Breadth => self.breadth,
            Dimension::Depth => self.depth,
        }
    }
}

/// Sums the ratings of each dimension.
///
/// Statements are assigned to a dimension by their fixed ordinal, so the result
/// depends only on the answers and never on the order they were shown in.
#[must_use]
pub fn calculate_scores(answers: &AnswerSet) -> Scores {
    let mut scores = Scores {
        breadth: 0,
        depth: 0,
    };
    for (id, rating) in answers.iter() {
        let value = u32::from(rating.value());
        match Dimension::of(id) {
            Dimension::Breadth => scores.breadth += value,
            Dimension::Depth => scores.depth += value,
        }
    }
    scores
}
