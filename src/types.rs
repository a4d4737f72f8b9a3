/// Shared serializable output types.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as plain lines or a table. They are decoupled from the internal `Tense` /
/// `Conjugation` types.
use serde::{Deserialize, Serialize};

/// One available mode/tense pair, for the listing mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensePairOutput {
    /// Cleaned mode label (e.g., "indicatif").
    pub mode: String,
    /// Cleaned tense label (e.g., "présent").
    pub tense: String,
}

/// One conjugated form answering a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOutput {
    /// Grammatical person, or null when it could not be inferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    /// The surface form as it appears on the page (pronoun included).
    pub form: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional list of candidates (for not-found errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `ConjugError`.
    #[must_use]
    pub fn from_conjug_error(err: &crate::conjugation::ConjugError) -> Self {
        use crate::conjugation::ConjugError;
        let (code, candidates) = match err {
            ConjugError::MissingArgument { .. } => ("missing_argument".to_owned(), None),
            ConjugError::UnknownLanguage { supported, .. } => {
                ("unknown_language".to_owned(), Some(supported.clone()))
            }
            ConjugError::TenseNotFound { candidates, .. } => (
                "tense_not_found".to_owned(),
                (!candidates.is_empty()).then(|| candidates.clone()),
            ),
            ConjugError::PersonNotFound { .. } => ("person_not_found".to_owned(), None),
            ConjugError::InvalidRule { .. } => ("invalid_rule".to_owned(), None),
            ConjugError::Page(_) => ("page_error".to_owned(), None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code,
                message: err.to_string(),
                candidates,
            },
        }
    }
}
