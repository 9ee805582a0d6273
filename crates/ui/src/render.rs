//! Plain-text rendering of view-models for a terminal.

use std::fmt::Write;

use crate::vm::{PageVm, ResultsVm};

const RULE: &str = "---";

/// Rating legend shown alongside the questions.
#[must_use]
pub fn render_instructions() -> String {
    [
        "Instructions:",
        "Rate yourself for each statement:",
        "1 = Strongly Disagree",
        "2 = Disagree",
        "3 = Neutral",
        "4 = Agree",
        "5 = Strongly Agree",
        "",
        "Press Enter to keep the current answer.",
    ]
    .join("\n")
}

#[must_use]
pub fn render_page(page: &PageVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.title);
    for item in &page.items {
        let _ = writeln!(out, "{}", item.prompt);
        let _ = writeln!(out, "  current: {}", item.rating_label);
        let _ = writeln!(out, "{RULE}");
    }
    out
}

/// Results table followed by the profile analysis.
#[must_use]
pub fn render_results(results: &ResultsVm) -> String {
    let headers = ["Category", "Score", "Max Score", "Interpretation"];
    let cells: Vec<[&str; 4]> = results
        .rows
        .iter()
        .map(|row| {
            [
                row.category,
                row.score.as_str(),
                row.max_score.as_str(),
                row.interpretation,
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Results");
    write_row(&mut out, &headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", separator.join("-+-"));
    for row in &cells {
        write_row(&mut out, row, &widths);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Overall T-Shaped Profile Analysis");
    let _ = writeln!(out, "Your T-shaped profile: {}", results.profile);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", results.breadth.headline);
    let _ = writeln!(out, "{}", results.breadth.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", results.depth.headline);
    let _ = writeln!(out, "{}", results.depth.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Suggestions:");
    for suggestion in &results.suggestions {
        let _ = writeln!(out, "- {suggestion}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", results.closing_remark);
    let _ = writeln!(out);
    let _ = writeln!(out, "Completed {}", results.completed_at_str);
    out
}

fn write_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::{map_page, map_results};
    use services::{AssessmentReport, AssessmentSession, Clock, FixedOrder};
    use tshape_core::model::{AnswerSet, Rating};
    use tshape_core::time::fixed_now;

    #[test]
    fn page_lists_each_prompt_with_current_answer() {
        let session = AssessmentSession::with_source(
            Clock::fixed(fixed_now()),
            Box::new(FixedOrder::identity()),
        );
        let text = render_page(&map_page(&session));

        assert!(text.starts_with("Page 1 of 6\n"));
        assert!(text.contains("Q1: I communicate effectively with people from different departments."));
        assert_eq!(text.matches("current: 3 - Neutral").count(), 5);
    }

    #[test]
    fn results_table_aligns_columns() {
        let report = AssessmentReport::new(
            &AnswerSet::uniform(Rating::StronglyAgree),
            fixed_now(),
            fixed_now(),
        );
        let text = render_results(&map_results(&report));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Results");
        assert!(lines[1].starts_with("Category      | Score | Max Score | Interpretation"));
        assert!(lines[3].starts_with("Breadth Score | 75    | 75        | Highly broad"));
        assert!(lines[4].starts_with("Depth Score   | 60    | 60        | Highly specialized"));
        assert!(text.contains("Your T-shaped profile: Excellent T-shaped profile"));
        assert!(text.contains("- Continue balancing the development of both broad and deep skills."));
    }

    #[test]
    fn instructions_list_every_rating() {
        let text = render_instructions();
        for n in 1..=5 {
            assert!(text.contains(&format!("{n} = ")));
        }
    }
}
