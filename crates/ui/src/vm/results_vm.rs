use services::{AssessmentReport, ResultRow};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub category: &'static str,
    pub score: String,
    pub max_score: String,
    pub interpretation: &'static str,
}

impl From<&ResultRow> for ResultRowVm {
    fn from(row: &ResultRow) -> Self {
        Self {
            category: row.category,
            score: row.score.to_string(),
            max_score: row.max_score.to_string(),
            interpretation: row.interpretation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionSummaryVm {
    /// e.g. `"Breadth Score: 45/75"`.
    pub headline: String,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub rows: Vec<ResultRowVm>,
    pub profile: &'static str,
    pub breadth: DimensionSummaryVm,
    pub depth: DimensionSummaryVm,
    pub suggestions: Vec<&'static str>,
    pub closing_remark: &'static str,
    pub completed_at_str: String,
}

#[must_use]
pub fn map_results(report: &AssessmentReport) -> ResultsVm {
    let interpretation = &report.interpretation;
    ResultsVm {
        rows: report.rows().iter().map(ResultRowVm::from).collect(),
        profile: interpretation.profile_label(),
        breadth: DimensionSummaryVm {
            headline: format!(
                "Breadth Score: {}/{}",
                interpretation.breadth.score, interpretation.breadth.max_score
            ),
            description: interpretation.breadth.description,
        },
        depth: DimensionSummaryVm {
            headline: format!(
                "Depth Score: {}/{}",
                interpretation.depth.score, interpretation.depth.max_score
            ),
            description: interpretation.depth.description,
        },
        suggestions: interpretation.suggestion_texts(),
        closing_remark: report.closing_remark(),
        completed_at_str: format_datetime(report.completed_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tshape_core::model::{AnswerSet, Rating};
    use tshape_core::time::fixed_now;

    #[test]
    fn maps_neutral_report() {
        let report = AssessmentReport::new(&AnswerSet::new(), fixed_now(), fixed_now());
        let vm = map_results(&report);

        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].score, "45");
        assert_eq!(vm.rows[1].max_score, "60");
        assert_eq!(vm.profile, "Strong T-shaped profile");
        assert_eq!(vm.breadth.headline, "Breadth Score: 45/75");
        assert_eq!(vm.depth.headline, "Depth Score: 36/60");
        assert_eq!(vm.completed_at_str, "2023-11-14 22:13 UTC");
    }

    #[test]
    fn low_report_lists_both_growth_suggestions() {
        let report = AssessmentReport::new(
            &AnswerSet::uniform(Rating::StronglyDisagree),
            fixed_now(),
            fixed_now(),
        );
        let vm = map_results(&report);
        assert_eq!(vm.suggestions.len(), 2);
        assert_eq!(vm.profile, "Emerging T-shaped profile");
    }
}
