/// Command dispatch: the invocation shape picks the command.
pub mod query;
pub mod tenses;

use crate::cli::{Cli, OutputCtx};
use crate::conjugation::{ConjugError, Language};

/// Dispatch a parsed invocation to its handler.
///
/// No verb means listing mode; a verb means a conjugation query.
///
/// # Errors
///
/// Returns `ConjugError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ConjugError> {
    let language = Language::find(&cli.language)?;
    match cli.verb.as_deref() {
        None => tenses::run(language, cli, ctx),
        Some(verb) => query::run(language, verb, cli, ctx),
    }
}
