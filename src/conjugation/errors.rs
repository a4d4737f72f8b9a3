/// Errors from the conjugation domain layer.
use thiserror::Error;

use crate::page::PageError;

/// Errors that can occur while building or querying conjugation tables.
#[derive(Debug, Error)]
pub enum ConjugError {
    /// A CLI argument required by the chosen invocation shape is missing.
    #[error("missing {name}")]
    MissingArgument {
        /// Name of the missing argument ("mode" or "tense").
        name: &'static str,
    },

    /// The language selector did not match any configured language.
    #[error("unknown language '{code}' (supported: {})", supported.join(", "))]
    UnknownLanguage {
        /// The selector that was given.
        code: String,
        /// Codes of all configured languages.
        supported: Vec<String>,
    },

    /// No tense on the page matched the requested mode/tense pair.
    #[error("no tense matches '{mode} {tense}'{}", render_candidates(candidates))]
    TenseNotFound {
        /// The requested mode.
        mode: String,
        /// The requested tense.
        tense: String,
        /// Nearest "mode tense" pairs present on the page, best first.
        candidates: Vec<String>,
    },

    /// The mode/tense matched, but the person filter removed every form.
    #[error("'{mode} {tense}' has no form for person '{person}'")]
    PersonNotFound {
        /// The matched mode.
        mode: String,
        /// The matched tense.
        tense: String,
        /// The person filter that matched nothing.
        person: String,
    },

    /// A pronoun rule in the language table failed to compile.
    #[error("invalid person rule '{pattern}': {source}")]
    InvalidRule {
        /// The offending regex pattern.
        pattern: String,
        /// The regex compile error.
        source: regex::Error,
    },

    /// An underlying fetch or page-structure error.
    #[error(transparent)]
    Page(#[from] PageError),
}

fn render_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(". Closest:\n  {}", candidates.join("\n  "))
    }
}

/// Exit code mapping for `ConjugError` variants.
impl ConjugError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } | Self::UnknownLanguage { .. } => 2,
            Self::TenseNotFound { .. } | Self::PersonNotFound { .. } => 4,
            Self::InvalidRule { .. } | Self::Page(_) => 1,
        }
    }
}
