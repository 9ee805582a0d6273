use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while reading a rating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("invalid rating value: {0} (expected 1-5)")]
    InvalidRating(u8),
}

//
// ─── RATING ───────────────────────────────────────────────────────────────────
//

/// Five-point Likert agreement with a statement.
///
/// The numeric value (1-5) is what the scores are summed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum Rating {
    StronglyDisagree,
    Disagree,
    /// Answer every statement starts with.
    #[default]
    Neutral,
    Agree,
    StronglyAgree,
}

impl Rating {
    /// Every rating from lowest to highest.
    pub const ALL: [Rating; 5] = [
        Rating::StronglyDisagree,
        Rating::Disagree,
        Rating::Neutral,
        Rating::Agree,
        Rating::StronglyAgree,
    ];

    /// Converts a numeric rating (1-5) to a `Rating`.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::InvalidRating` if the value is not in the range 1-5.
    pub fn from_u8(value: u8) -> Result<Self, RatingError> {
        match value {
            1 => Ok(Self::StronglyDisagree),
            2 => Ok(Self::Disagree),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Agree),
            5 => Ok(Self::StronglyAgree),
            _ => Err(RatingError::InvalidRating(value)),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::Neutral => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    /// Option label as shown next to the choice, e.g. `"4 - Agree"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "1 - Strongly Disagree",
            Self::Disagree => "2 - Disagree",
            Self::Neutral => "3 - Neutral",
            Self::Agree => "4 - Agree",
            Self::StronglyAgree => "5 - Strongly Agree",
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_rating_conversion_works() {
        assert_eq!(Rating::from_u8(1).unwrap(), Rating::StronglyDisagree);
        assert_eq!(Rating::from_u8(5).unwrap(), Rating::StronglyAgree);
        assert!(matches!(
            Rating::from_u8(0).unwrap_err(),
            RatingError::InvalidRating(0)
        ));
        assert!(matches!(
            Rating::from_u8(6).unwrap_err(),
            RatingError::InvalidRating(6)
        ));
    }

    #[test]
    fn value_round_trips_through_all() {
        for (i, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(usize::from(rating.value()), i + 1);
            assert_eq!(Rating::try_from(rating.value()).unwrap(), *rating);
        }
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Rating::default(), Rating::Neutral);
        assert_eq!(Rating::default().label(), "3 - Neutral");
    }
}
