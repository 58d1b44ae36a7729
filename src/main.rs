//! Terminal entry point for the UTI intake questionnaire.

use std::error::Error;
use std::io;
use std::sync::Arc;

use uti_intake::adapters::TerminalShell;
use uti_intake::config::AppConfig;
use uti_intake::domain::assessment::AssessmentEngine;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init_tracing()?;

    let questionnaire = Arc::new(config.questionnaire.load()?);
    tracing::info!(questions = questionnaire.len(), "Starting intake");

    let stdin = io::stdin();
    let mut shell = TerminalShell::new(
        AssessmentEngine::new(questionnaire),
        stdin.lock(),
        io::stdout(),
    );
    shell.run()?;
    Ok(())
}
