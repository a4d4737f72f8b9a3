/// Query mode: fetch a verb's page and look up one mode/tense.
use std::time::Duration;

use crate::cli::output::write_forms;
use crate::cli::{Cli, OutputCtx};
use crate::conjugation::{parse_tenses, query, ConjugError, Language};
use crate::page;
use crate::types::FormOutput;

/// Run a conjugation query.
///
/// # Errors
///
/// Returns `ConjugError::MissingArgument` when mode or tense is absent,
/// otherwise any fetch, parse or lookup failure.
pub fn run(language: &Language, verb: &str, cli: &Cli, ctx: &OutputCtx) -> Result<(), ConjugError> {
    let mode = cli
        .mode
        .as_deref()
        .ok_or(ConjugError::MissingArgument { name: "mode" })?;
    let tense = cli
        .tense
        .as_deref()
        .ok_or(ConjugError::MissingArgument { name: "tense" })?;

    let url = language.page_url(verb);
    let html = page::fetch(&url, Duration::from_secs(cli.timeout))?;
    let sections = page::tense_sections(&html)?;
    let tenses = parse_tenses(&sections, language)?;

    let matched = query(&tenses, mode, tense, cli.person.as_deref())?;

    let forms: Vec<FormOutput> = matched
        .into_iter()
        .map(|c| FormOutput {
            person: c.person.clone(),
            form: c.form.clone(),
        })
        .collect();

    write_forms(&forms, ctx);
    Ok(())
}
