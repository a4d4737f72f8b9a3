/// Listing mode: show every mode/tense pair for the language's default verb.
use std::time::Duration;

use crate::cli::output::write_tense_pairs;
use crate::cli::{Cli, OutputCtx};
use crate::conjugation::{parse_tenses, ConjugError, Language};
use crate::page;
use crate::types::TensePairOutput;

/// Run the listing mode.
///
/// # Errors
///
/// Returns `ConjugError` on fetch or page-structure failure.
pub fn run(language: &Language, cli: &Cli, ctx: &OutputCtx) -> Result<(), ConjugError> {
    let url = language.page_url(language.default_verb);
    let html = page::fetch(&url, Duration::from_secs(cli.timeout))?;
    let sections = page::tense_sections(&html)?;
    let tenses = parse_tenses(&sections, language)?;

    let pairs: Vec<TensePairOutput> = tenses
        .iter()
        .map(|t| TensePairOutput {
            mode: t.mode.clone(),
            tense: t.tense.clone(),
        })
        .collect();

    write_tense_pairs(&pairs, ctx);
    Ok(())
}
