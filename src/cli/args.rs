/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// conjcli — query verb conjugation tables from the CLI.
///
/// With only a language, lists every mode/tense pair for that language's
/// default verb. With a verb, `MODE` and `TENSE` are required and the
/// matching forms are printed in page order.
#[derive(Debug, Parser)]
#[command(
    name = "conjcli",
    about = "Query verb conjugation tables from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Language code: fr, pt, es, it, en.
    pub language: String,

    /// Verb to conjugate. Omit to list the modes and tenses available
    /// for the language's default verb.
    pub verb: Option<String>,

    /// Grammatical mode (mood), e.g. "indicatif". Required with a verb.
    pub mode: Option<String>,

    /// Tense within the mode, e.g. "présent". Required with a verb;
    /// quote multi-word tenses.
    pub tense: Option<String>,

    /// Person filter, e.g. "tu" or "il/elle". Omit to show all persons.
    pub person: Option<String>,

    /// Output format. Auto-detects: table when TTY, plain when piped.
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,

    /// Page fetch timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 15)]
    pub timeout: u64,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, plain when piped.
    #[default]
    Auto,
    /// One value per line: forms, or "mode tense" pairs in listing mode.
    Plain,
    /// JSON array (pretty-printed).
    Json,
    /// Aligned table with headers (human-readable).
    Table,
}
