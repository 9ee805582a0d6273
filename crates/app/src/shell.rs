//! Interactive questionnaire loop over any line-based reader/writer pair.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use services::{AssessmentReport, AssessmentSession, SessionError};
use ui::vm::{PageAction, PageItemVm, map_page, map_results};
use ui::{
    Command, InputError, parse_command, render_instructions, render_page, render_results,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

enum Flow {
    Continue,
    Restart,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Drive `session` until the respondent quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` if reading input, writing output or encoding the
    /// JSON report fails.
    pub fn run(&mut self, session: &mut AssessmentSession) -> Result<(), ShellError> {
        writeln!(self.output, "T-Shaped Self-Assessment")?;
        writeln!(self.output, "{}", render_instructions())?;
        writeln!(self.output)?;

        loop {
            let flow = if session.results_visible() {
                self.results_prompt()?
            } else {
                self.answer_page(session)?
            };
            match flow {
                Flow::Continue => {}
                Flow::Restart => {
                    session.restart();
                    writeln!(self.output, "Starting over.")?;
                }
                Flow::Quit => {
                    debug!(phase = ?session.phase(), "shell finished");
                    return Ok(());
                }
            }
        }
    }

    fn answer_page(&mut self, session: &mut AssessmentSession) -> Result<Flow, ShellError> {
        let page = map_page(session);
        writeln!(self.output, "{}", page.title)?;

        for item in &page.items {
            match self.rate_item(session, item)? {
                Flow::Continue => {}
                other => return Ok(other),
            }
        }

        self.page_action(session, page.action)
    }

    fn rate_item(
        &mut self,
        session: &mut AssessmentSession,
        item: &PageItemVm,
    ) -> Result<Flow, ShellError> {
        let prompt = format!("{}\n  rating 1-5 [{}]: ", item.prompt, item.rating_label);
        loop {
            let Some(parsed) = self.read_command(&prompt)? else {
                return Ok(Flow::Quit);
            };
            match parsed {
                Ok(Command::Rate(rating)) => match session.record_slot(item.slot, rating) {
                    Ok(()) => return Ok(Flow::Continue),
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                Ok(Command::Keep) => return Ok(Flow::Continue),
                Ok(Command::Restart) => return Ok(Flow::Restart),
                Ok(Command::Quit) => return Ok(Flow::Quit),
                Ok(Command::Help) => {
                    writeln!(self.output, "{}", render_instructions())?;
                    write!(self.output, "{}", render_page(&map_page(session)))?;
                }
                Ok(Command::Next | Command::Submit) => {
                    writeln!(self.output, "Rate this statement first (Enter keeps it).")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn page_action(
        &mut self,
        session: &mut AssessmentSession,
        action: PageAction,
    ) -> Result<Flow, ShellError> {
        let prompt = format!("[{}] press Enter (r restart, q quit): ", action.label());
        loop {
            let Some(parsed) = self.read_command(&prompt)? else {
                return Ok(Flow::Quit);
            };
            let command = match parsed {
                Ok(Command::Keep) => match action {
                    PageAction::Next => Command::Next,
                    PageAction::Submit => Command::Submit,
                },
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            let outcome: Result<(), SessionError> = match command {
                Command::Next => session.advance_page(),
                Command::Submit => match session.submit() {
                    Ok(report) => {
                        self.show_report(&report)?;
                        return Ok(Flow::Continue);
                    }
                    Err(err) => Err(err),
                },
                Command::Restart => return Ok(Flow::Restart),
                Command::Quit => return Ok(Flow::Quit),
                Command::Help => {
                    writeln!(self.output, "{}", render_instructions())?;
                    continue;
                }
                Command::Rate(_) | Command::Keep => {
                    writeln!(self.output, "This page is answered; press Enter to continue.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => return Ok(Flow::Continue),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn results_prompt(&mut self) -> Result<Flow, ShellError> {
        loop {
            let Some(parsed) = self.read_command("Start over? r to restart, q to quit: ")? else {
                return Ok(Flow::Quit);
            };
            match parsed {
                Ok(Command::Restart) => return Ok(Flow::Restart),
                Ok(Command::Quit) => return Ok(Flow::Quit),
                Ok(_) => writeln!(self.output, "Results are final; restart to answer again.")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn show_report(&mut self, report: &AssessmentReport) -> Result<(), ShellError> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{}", render_results(&map_results(report)))?,
            OutputFormat::Json => writeln!(self.output, "{}", report.to_json_pretty()?)?,
        }
        Ok(())
    }

    /// `None` at end of input.
    fn read_command(
        &mut self,
        prompt: &str,
    ) -> Result<Option<Result<Command, InputError>>, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(parse_command(&line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Clock, FixedOrder};
    use tshape_core::time::fixed_now;

    fn session() -> AssessmentSession {
        AssessmentSession::with_source(Clock::fixed(fixed_now()), Box::new(FixedOrder::identity()))
    }

    /// Ratings for every statement, Enter after each page.
    fn full_script(rating: &str) -> String {
        let mut script = String::new();
        for page_len in [5, 5, 5, 5, 5, 2] {
            for _ in 0..page_len {
                script.push_str(rating);
                script.push('\n');
            }
            script.push('\n');
        }
        script
    }

    fn run_script(script: &str, format: OutputFormat) -> (AssessmentSession, String) {
        let mut session = session();
        let mut out = Vec::new();
        Shell::new(script.as_bytes(), &mut out, format)
            .run(&mut session)
            .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_run_prints_results() {
        let script = format!("{}q\n", full_script("5"));
        let (session, out) = run_script(&script, OutputFormat::Text);

        assert!(session.results_visible());
        assert!(out.contains("Page 6 of 6"));
        assert!(out.contains("Your T-shaped profile: Excellent T-shaped profile"));
        assert!(out.contains("Breadth Score: 75/75"));
    }

    #[test]
    fn early_submit_is_refused_and_flow_continues() {
        let (session, out) = run_script("\n\n\n\n\nsubmit\n", OutputFormat::Text);

        assert!(out.contains("cannot submit from page 0; answers are submitted from page 5"));
        assert!(!session.results_visible());
        assert_eq!(session.progress().page, 0);
    }

    #[test]
    fn invalid_rating_is_reported_and_reprompted() {
        let script = "7\n2\n";
        let (session, out) = run_script(script, OutputFormat::Text);

        assert!(out.contains("invalid rating value: 7 (expected 1-5)"));
        let first = session.current_page_items()[0];
        assert_eq!(first.rating.value(), 2);
    }

    #[test]
    fn json_output_and_restart() {
        let script = format!("{}r\n", full_script("1"));
        let (session, out) = run_script(&script, OutputFormat::Json);

        assert!(out.contains("\"breadth\": 15"));
        assert!(out.contains("Starting over."));
        assert!(!session.results_visible());
        assert_eq!(session.progress().page, 0);
    }
}
