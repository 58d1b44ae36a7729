//! Line-oriented terminal shell for the assessment engine.
//!
//! Renders the engine's current state and forwards the user's choices. It
//! holds no decision logic of its own: every answer goes through
//! [`AssessmentEngine::submit_answer`].

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::domain::assessment::{AssessmentEngine, AssessmentError, FlowState, Question};

const TITLE: &str = "UTI Assessment";
const SUBTITLE: &str = "Ontario Pharmacist Intake Tool";
const REFERRAL_HEADING: &str = "Referral Required";
const COMPLETE_HEADING: &str = "Ready for Pharmacist";
const COMPLETE_BODY: &str = "You meet the clinical criteria for a minor ailment assessment.";
const RESTART_PROMPT: &str = "Start over? [y/N] ";

/// Errors that end a shell run.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Drives an [`AssessmentEngine`] over a text input and output.
pub struct TerminalShell<R, W> {
    engine: AssessmentEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    pub fn new(engine: AssessmentEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Consumes the shell, returning the engine and output.
    pub fn into_parts(self) -> (AssessmentEngine, W) {
        (self.engine, self.output)
    }

    /// Runs until the input is exhausted or the user declines to start over.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{}\n{}\n", TITLE, SUBTITLE)?;

        loop {
            match self.engine.state().clone() {
                FlowState::InProgress => {
                    let question = self.engine.current_question()?.clone();
                    self.render_question(&question)?;

                    let Some(line) = self.read_line()? else {
                        return Ok(());
                    };
                    match resolve_option(&question, &line) {
                        Some(label) => {
                            self.engine.submit_answer(&label)?;
                        }
                        None => {
                            writeln!(
                                self.output,
                                "Please choose one of: {}\n",
                                question.options().join(", ")
                            )?;
                        }
                    }
                }
                FlowState::Referral { message } => {
                    writeln!(self.output, "\n{}\n{}\n", REFERRAL_HEADING, message)?;
                    if !self.ask_restart()? {
                        return Ok(());
                    }
                }
                FlowState::Complete => {
                    let summary = self.engine.summary()?;
                    writeln!(
                        self.output,
                        "\n{}\n{}\n\nSummary for Pharmacist:\n{}\n",
                        COMPLETE_HEADING, COMPLETE_BODY, summary
                    )?;
                    if !self.ask_restart()? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn render_question(&mut self, question: &Question) -> io::Result<()> {
        writeln!(
            self.output,
            "[{:>3}%] {}",
            self.engine.progress_percent(),
            question.prompt()
        )?;
        for (i, option) in question.options().iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()
    }

    fn ask_restart(&mut self) -> io::Result<bool> {
        write!(self.output, "{}", RESTART_PROMPT)?;
        self.output.flush()?;

        let restart = matches!(
            self.read_line()?.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y") | Some("yes")
        );
        if restart {
            self.engine.reset();
            writeln!(self.output)?;
        }
        Ok(restart)
    }

    /// Reads one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Maps user input to one of the question's option labels.
///
/// Accepts the 1-based option number or the label itself, ignoring case.
pub fn resolve_option(question: &Question, input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| question.options().get(i))
            .cloned();
    }
    question
        .options()
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_shell(input: &str) -> (AssessmentEngine, String) {
        let mut shell = TerminalShell::new(
            AssessmentEngine::standard(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        shell.run().unwrap();
        let (engine, output) = shell.into_parts();
        (engine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn resolve_option_accepts_numbers_and_labels() {
        let question = Question::new("gender", "Sex?", ["Female", "Male"]);
        assert_eq!(resolve_option(&question, "1").as_deref(), Some("Female"));
        assert_eq!(resolve_option(&question, " male ").as_deref(), Some("Male"));
        assert_eq!(resolve_option(&question, "0"), None);
        assert_eq!(resolve_option(&question, "3"), None);
        assert_eq!(resolve_option(&question, "other"), None);
    }

    #[test]
    fn eligible_run_prints_summary() {
        let (engine, output) = run_shell("female\nyes\nno\nno\nyes\nn\n");

        assert_eq!(engine.state(), &FlowState::Complete);
        assert!(output.starts_with("UTI Assessment\nOntario Pharmacist Intake Tool\n"));
        assert!(output.contains("[  0%] What is your biological sex?"));
        assert!(output.contains("[ 80%] Do you have burning, urgency, or frequent urination?"));
        assert!(output.contains(COMPLETE_HEADING));
        assert!(output.contains(&engine.summary().unwrap()));
    }

    #[test]
    fn referral_run_prints_reason() {
        let (engine, output) = run_shell("2\n");

        assert!(output.contains(REFERRAL_HEADING));
        assert!(output.contains("Ontario pharmacists can only treat UTIs in females."));
        assert_eq!(
            engine.state().referral_message(),
            Some("Ontario pharmacists can only treat UTIs in females.")
        );
    }

    #[test]
    fn invalid_input_reprompts() {
        let (engine, output) = run_shell("maybe\n1\n");

        assert!(output.contains("Please choose one of: Female, Male"));
        assert_eq!(engine.answers().get("gender"), Some("Female"));
        assert_eq!(engine.position(), 1);
    }

    #[test]
    fn start_over_resets_the_engine() {
        let (engine, output) = run_shell("Male\ny\n1\n1\n2\n2\n1\n");

        assert_eq!(output.matches(RESTART_PROMPT).count(), 2);
        assert_eq!(engine.state(), &FlowState::Complete);
        assert_eq!(engine.answers().get("gender"), Some("Female"));
    }

    #[test]
    fn end_of_input_stops_mid_questionnaire() {
        let (engine, _) = run_shell("1\n");
        assert_eq!(engine.state(), &FlowState::InProgress);
        assert_eq!(engine.position(), 1);
    }
}
