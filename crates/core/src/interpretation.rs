//! Threshold classification of breadth/depth scores into tiers, an overall
//! profile and follow-up suggestions.
//!
//! Everything here is pure: the same scores always produce the same
//! `Interpretation`.

use serde::Serialize;

use crate::model::Dimension;
use crate::scoring::Scores;

/// Closing advice printed beneath the profile analysis.
pub const CLOSING_REMARK: &str = "Remember, a well-rounded T-shaped professional excels in both broad \
interdisciplinary skills and deep expertise in a specific area. Continue to develop both aspects \
of your profile for optimal career growth and versatility.";

//
// ─── TIERS ────────────────────────────────────────────────────────────────────
//

/// Breadth score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreadthTier {
    Highly,
    Strong,
    Moderate,
    Limited,
    Minimal,
}

impl BreadthTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            60.. => Self::Highly,
            45.. => Self::Strong,
            30.. => Self::Moderate,
            15.. => Self::Limited,
            _ => Self::Minimal,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Highly => "Highly broad skill set",
            Self::Strong => "Strong breadth",
            Self::Moderate => "Moderate breadth",
            Self::Limited => "Limited breadth",
            Self::Minimal => "Minimal breadth",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Highly => "Highly broad skill set; you excel in working across disciplines.",
            Self::Strong => {
                "Strong breadth; you can effectively collaborate with various departments."
            }
            Self::Moderate => {
                "Moderate breadth; some areas for improvement in cross-disciplinary skills."
            }
            Self::Limited => {
                "Limited breadth; focus on developing skills in different functional areas."
            }
            Self::Minimal => {
                "Minimal breadth; significant improvement needed in broadening skill set."
            }
        }
    }
}

/// Depth score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTier {
    Highly,
    Strong,
    Moderate,
    Limited,
    Minimal,
}

impl DepthTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            48.. => Self::Highly,
            36.. => Self::Strong,
            24.. => Self::Moderate,
            12.. => Self::Limited,
            _ => Self::Minimal,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Highly => "Highly specialized",
            Self::Strong => "Strong depth",
            Self::Moderate => "Moderate depth",
            Self::Limited => "Limited depth",
            Self::Minimal => "Minimal depth",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Highly => "Highly specialized; you possess deep expertise in your field.",
            Self::Strong => "Strong depth; you have significant expertise in your area.",
            Self::Moderate => {
                "Moderate depth; you have a good foundation but can deepen your knowledge."
            }
            Self::Limited => "Limited depth; focus on developing expertise in your field.",
            Self::Minimal => {
                "Minimal depth; significant improvement needed in deepening your knowledge."
            }
        }
    }
}

//
// ─── PROFILE & SUGGESTIONS ────────────────────────────────────────────────────
//

/// Overall T-shaped profile label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Excellent,
    Strong,
    Developing,
    Emerging,
}

impl Profile {
    /// First matching rule wins; both dimensions must clear a band.
    #[must_use]
    pub fn from_scores(breadth: u32, depth: u32) -> Self {
        if breadth >= 60 && depth >= 48 {
            Self::Excellent
        } else if breadth >= 45 && depth >= 36 {
            Self::Strong
        } else if breadth >= 30 && depth >= 24 {
            Self::Developing
        } else {
            Self::Emerging
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent T-shaped profile",
            Self::Strong => "Strong T-shaped profile",
            Self::Developing => "Developing T-shaped profile",
            Self::Emerging => "Emerging T-shaped profile",
        }
    }
}

/// Actionable follow-up advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    ExpandBreadth,
    DeepenDepth,
    KeepBalancing,
}

impl Suggestion {
    /// Every applicable suggestion, in display order.
    #[must_use]
    pub fn for_scores(breadth: u32, depth: u32) -> Vec<Self> {
        let mut out = Vec::new();
        if breadth < 45 {
            out.push(Self::ExpandBreadth);
        }
        if depth < 36 {
            out.push(Self::DeepenDepth);
        }
        if breadth >= 45 && depth >= 36 {
            out.push(Self::KeepBalancing);
        }
        out
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::ExpandBreadth => "Work on expanding your interdisciplinary skills and knowledge.",
            Self::DeepenDepth => "Focus on deepening your expertise in your primary field.",
            Self::KeepBalancing => {
                "Continue balancing the development of both broad and deep skills."
            }
        }
    }
}

//
// ─── INTERPRETATION ───────────────────────────────────────────────────────────
//

/// Score of one dimension together with its maximum and band text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionResult {
    pub dimension: Dimension,
    pub score: u32,
    pub max_score: u32,
    pub label: &'static str,
    pub description: &'static str,
}

/// Structured outcome of interpreting a pair of scores.
///
/// Rendering is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub breadth: DimensionResult,
    pub depth: DimensionResult,
    pub profile: Profile,
    pub suggestions: Vec<Suggestion>,
}

impl Interpretation {
    #[must_use]
    pub fn profile_label(&self) -> &'static str {
        self.profile.label()
    }

    /// Suggestion sentences in display order.
    #[must_use]
    pub fn suggestion_texts(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|s| s.text()).collect()
    }
}

/// Classifies a breadth/depth score pair.
#[must_use]
pub fn interpret_scores(breadth: u32, depth: u32) -> Interpretation {
    let breadth_tier = BreadthTier::from_score(breadth);
    let depth_tier = DepthTier::from_score(depth);

    Interpretation {
        breadth: DimensionResult {
            dimension: Dimension::Breadth,
            score: breadth,
            max_score: Dimension::Breadth.max_score(),
            label: breadth_tier.label(),
            description: breadth_tier.description(),
        },
        depth: DimensionResult {
            dimension: Dimension::Depth,
            score: depth,
            max_score: Dimension::Depth.max_score(),
            label: depth_tier.label(),
            description: depth_tier.description(),
        },
        profile: Profile::from_scores(breadth, depth),
        suggestions: Suggestion::for_scores(breadth, depth),
    }
}

impl From<Scores> for Interpretation {
    fn from(scores: Scores) -> Self {
        interpret_scores(scores.breadth, scores.depth)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadth_thresholds() {
        assert_eq!(BreadthTier::from_score(75), BreadthTier::Highly);
        assert_eq!(BreadthTier::from_score(60), BreadthTier::Highly);
        assert_eq!(BreadthTier::from_score(59), BreadthTier::Strong);
        assert_eq!(BreadthTier::from_score(45), BreadthTier::Strong);
        assert_eq!(BreadthTier::from_score(44), BreadthTier::Moderate);
        assert_eq!(BreadthTier::from_score(30), BreadthTier::Moderate);
        assert_eq!(BreadthTier::from_score(29), BreadthTier::Limited);
        assert_eq!(BreadthTier::from_score(15), BreadthTier::Limited);
        assert_eq!(BreadthTier::from_score(14), BreadthTier::Minimal);
    }

    #[test]
    fn depth_thresholds() {
        assert_eq!(DepthTier::from_score(48), DepthTier::Highly);
        assert_eq!(DepthTier::from_score(47), DepthTier::Strong);
        assert_eq!(DepthTier::from_score(36), DepthTier::Strong);
        assert_eq!(DepthTier::from_score(35), DepthTier::Moderate);
        assert_eq!(DepthTier::from_score(24), DepthTier::Moderate);
        assert_eq!(DepthTier::from_score(23), DepthTier::Limited);
        assert_eq!(DepthTier::from_score(12), DepthTier::Limited);
        assert_eq!(DepthTier::from_score(11), DepthTier::Minimal);
    }

    #[test]
    fn all_lowest_is_emerging_with_both_growth_suggestions() {
        let out = interpret_scores(15, 12);
        assert_eq!(out.profile_label(), "Emerging T-shaped profile");
        assert_eq!(out.breadth.label, "Limited breadth");
        assert_eq!(out.depth.label, "Limited depth");
        assert_eq!(
            out.suggestions,
            vec![Suggestion::ExpandBreadth, Suggestion::DeepenDepth]
        );
    }

    #[test]
    fn all_highest_is_excellent_and_only_keeps_balancing() {
        let out = interpret_scores(75, 60);
        assert_eq!(out.profile, Profile::Excellent);
        assert_eq!(out.breadth.max_score, 75);
        assert_eq!(out.depth.max_score, 60);
        assert_eq!(
            out.suggestion_texts(),
            vec!["Continue balancing the development of both broad and deep skills."]
        );
    }

    #[test]
    fn exact_strong_boundary_is_not_excellent() {
        let out = interpret_scores(45, 36);
        assert_eq!(out.profile_label(), "Strong T-shaped profile");
        assert_eq!(out.suggestions, vec![Suggestion::KeepBalancing]);
    }

    #[test]
    fn profile_needs_both_dimensions() {
        assert_eq!(Profile::from_scores(75, 30), Profile::Developing);
        assert_eq!(Profile::from_scores(29, 60), Profile::Emerging);
        assert_eq!(Profile::from_scores(60, 47), Profile::Strong);
    }

    #[test]
    fn one_sided_scores_get_single_suggestion() {
        assert_eq!(
            Suggestion::for_scores(70, 20),
            vec![Suggestion::DeepenDepth]
        );
        assert_eq!(
            Suggestion::for_scores(20, 50),
            vec![Suggestion::ExpandBreadth]
        );
    }

    #[test]
    fn interpretation_is_idempotent() {
        assert_eq!(interpret_scores(52, 41), interpret_scores(52, 41));
        let from_scores: Interpretation = Scores { breadth: 52, depth: 41 }.into();
        assert_eq!(from_scores, interpret_scores(52, 41));
    }
}
