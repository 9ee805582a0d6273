use chrono::{DateTime, Utc};
use serde::Serialize;

use tshape_core::interpretation::{CLOSING_REMARK, DimensionResult};
use tshape_core::model::{AnswerSet, Dimension};
use tshape_core::{Interpretation, Scores, calculate_scores, interpret_scores};

/// One line of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub category: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub interpretation: &'static str,
}

impl From<&DimensionResult> for ResultRow {
    fn from(result: &DimensionResult) -> Self {
        let category = match result.dimension {
            Dimension::Breadth => "Breadth Score",
            Dimension::Depth => "Depth Score",
        };
        Self {
            category,
            score: result.score,
            max_score: result.max_score,
            interpretation: result.description,
        }
    }
}

/// Scored and interpreted outcome of a submitted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub scores: Scores,
    pub interpretation: Interpretation,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentReport {
    #[must_use]
    pub fn new(
        answers: &AnswerSet,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let scores = calculate_scores(answers);
        Self {
            scores,
            interpretation: interpret_scores(scores.breadth, scores.depth),
            started_at,
            completed_at,
        }
    }

    /// Breadth row followed by depth row.
    #[must_use]
    pub fn rows(&self) -> [ResultRow; 2] {
        [
            ResultRow::from(&self.interpretation.breadth),
            ResultRow::from(&self.interpretation.depth),
        ]
    }

    #[must_use]
    pub fn closing_remark(&self) -> &'static str {
        CLOSING_REMARK
    }

    /// Pretty-printed JSON document of the report.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tshape_core::model::Rating;
    use tshape_core::time::fixed_now;

    #[test]
    fn rows_mirror_dimension_results() {
        let report = AssessmentReport::new(
            &AnswerSet::uniform(Rating::StronglyAgree),
            fixed_now(),
            fixed_now(),
        );
        let [breadth, depth] = report.rows();

        assert_eq!(breadth.category, "Breadth Score");
        assert_eq!((breadth.score, breadth.max_score), (75, 75));
        assert_eq!(
            breadth.interpretation,
            "Highly broad skill set; you excel in working across disciplines."
        );
        assert_eq!(depth.category, "Depth Score");
        assert_eq!((depth.score, depth.max_score), (60, 60));
    }

    #[test]
    fn json_carries_scores_and_profile() {
        let report = AssessmentReport::new(
            &AnswerSet::uniform(Rating::StronglyDisagree),
            fixed_now(),
            fixed_now(),
        );
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["scores"]["breadth"], 15);
        assert_eq!(value["scores"]["depth"], 12);
        assert_eq!(value["interpretation"]["profile"], "emerging");
        assert_eq!(
            value["interpretation"]["suggestions"],
            serde_json::json!(["expand_breadth", "deepen_depth"])
        );
        assert_eq!(value["started_at"], "2023-11-14T22:13:20Z");
    }
}
