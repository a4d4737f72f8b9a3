/// Output formatting: plain, JSON and table modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, FormOutput, TensePairOutput};

/// Resolve the effective output format, handling `--json` and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Plain
        }
    } else {
        fmt
    }
}

/// Output context passed to all writers.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

/// Write the available mode/tense pairs to stdout.
pub fn write_tense_pairs(pairs: &[TensePairOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(pairs),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["MODE", "TENSE"]);
            }
            for pair in pairs {
                table.add_row([pair.mode.as_str(), pair.tense.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Plain | OutputFormat::Auto => {
            for pair in pairs {
                println!("{} {}", pair.mode, pair.tense);
            }
        }
    }
}

/// Write query result forms to stdout.
pub fn write_forms(forms: &[FormOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(forms),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["PERSON", "FORM"]);
            }
            for f in forms {
                table.add_row([f.person.as_deref().unwrap_or(""), f.form.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Plain | OutputFormat::Auto => {
            for f in forms {
                println!("{}", f.form);
            }
        }
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
