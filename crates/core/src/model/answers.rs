use serde::Serialize;

use crate::model::ids::StatementId;
use crate::model::rating::Rating;
use crate::model::statement::STATEMENT_COUNT;

/// One rating per statement, indexed by fixed ordinal.
///
/// Always holds exactly 27 entries; a fresh set rates everything `Neutral`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    ratings: [Rating; STATEMENT_COUNT],
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::uniform(Rating::Neutral)
    }

    /// Answer set with every statement rated the same.
    #[must_use]
    pub fn uniform(rating: Rating) -> Self {
        Self {
            ratings: [rating; STATEMENT_COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, id: StatementId) -> Rating {
        self.ratings[id.index()]
    }

    /// Overwrites the rating for `id`.
    pub fn set(&mut self, id: StatementId, rating: Rating) {
        self.ratings[id.index()] = rating;
    }

    /// Iterates `(id, rating)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (StatementId, Rating)> + '_ {
        StatementId::all().map(|id| (id, self.get(id)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_neutral() {
        let answers = AnswerSet::new();
        assert_eq!(answers.len(), 27);
        assert!(answers.iter().all(|(_, r)| r == Rating::Neutral));
    }

    #[test]
    fn set_overwrites_only_target() {
        let mut answers = AnswerSet::new();
        let id = StatementId::new(20).unwrap();
        answers.set(id, Rating::StronglyAgree);
        answers.set(id, Rating::Disagree);

        assert_eq!(answers.get(id), Rating::Disagree);
        let changed = answers.iter().filter(|(_, r)| *r != Rating::Neutral).count();
        assert_eq!(changed, 1);
    }
}
