use serde::Serialize;

use crate::model::ids::StatementId;

/// Number of statements in the questionnaire.
pub const STATEMENT_COUNT: usize = 27;

/// Statements with an ordinal below this belong to the breadth dimension.
pub const BREADTH_COUNT: usize = 15;

/// Statements from `BREADTH_COUNT` onwards belong to the depth dimension.
pub const DEPTH_COUNT: usize = STATEMENT_COUNT - BREADTH_COUNT;

/// Catalogue text in fixed ordinal order.
///
/// Dimension membership is positional: moving a line changes which score it feeds.
const STATEMENT_TEXTS: [&str; STATEMENT_COUNT] = [
    // breadth
    "I communicate effectively with people from different departments.",
    "I can collaborate with colleagues from various functional areas.",
    "I often help team members from other disciplines understand complex concepts.",
    "I am good at identifying problems across different areas of the business.",
    "I can apply different problem-solving techniques depending on the situation.",
    "I am comfortable using creative thinking to solve problems.",
    "I can easily adapt to new tools and technologies.",
    "I thrive in situations that require learning new skills quickly.",
    "I am open to change and can work effectively in different environments.",
    "I can manage projects that involve multiple disciplines.",
    "I am effective at prioritizing tasks and meeting deadlines.",
    "I can coordinate the efforts of team members from different departments.",
    "I frequently contribute new ideas and perspectives in team meetings.",
    "I seek out opportunities to innovate in my work.",
    "I can integrate ideas from various disciplines to develop innovative solutions.",
    // depth
    "I have deep expertise in my primary field of work.",
    "I keep up-to-date with the latest trends and developments in my area of expertise.",
    "I can mentor others in my specific field.",
    "I am proficient in analyzing data relevant to my discipline.",
    "I use evidence-based approaches to make decisions in my work.",
    "I can develop detailed and effective solutions within my area of expertise.",
    "I have a thorough understanding of the specialized tools and methods used in my field.",
    "I regularly attend training and professional development sessions related to my expertise.",
    "I contribute specialized knowledge to projects and discussions.",
    "I am highly skilled in executing tasks within my area of expertise.",
    "I consistently deliver high-quality work in my field.",
    "I can independently handle complex tasks that require deep knowledge.",
];

/// Skill dimension a statement contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Cross-disciplinary and collaborative skills.
    Breadth,
    /// Specialised expertise in a primary field.
    Depth,
}

impl Dimension {
    /// Dimension of the statement with the given ordinal.
    #[must_use]
    pub fn of(id: StatementId) -> Self {
        if id.index() < BREADTH_COUNT {
            Self::Breadth
        } else {
            Self::Depth
        }
    }

    #[must_use]
    pub fn statement_count(self) -> usize {
        match self {
            Self::Breadth => BREADTH_COUNT,
            Self::Depth => DEPTH_COUNT,
        }
    }

    /// Highest reachable score (every answer "Strongly Agree").
    #[must_use]
    pub fn max_score(self) -> u32 {
        // counts are tiny compile-time constants
        self.statement_count() as u32 * 5
    }

    /// Lowest reachable score (every answer "Strongly Disagree").
    #[must_use]
    pub fn min_score(self) -> u32 {
        self.statement_count() as u32
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Breadth => "Breadth",
            Self::Depth => "Depth",
        }
    }
}

/// A single Likert statement in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub id: StatementId,
    pub text: &'static str,
}

impl Statement {
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        Dimension::of(self.id)
    }
}

/// Looks up the statement with the given id.
#[must_use]
pub fn statement(id: StatementId) -> Statement {
    Statement {
        id,
        text: STATEMENT_TEXTS[id.index()],
    }
}

/// All statements in fixed ordinal order.
pub fn statements() -> impl Iterator<Item = Statement> {
    StatementId::all().map(statement)
}
