/// Tense records and the section-to-record parser.
use std::sync::LazyLock;

use regex::Regex;

use crate::page::TenseSection;

use super::errors::ConjugError;
use super::language::{Language, PersonResolver};

/// Parenthetical annotations in headings, e.g. "Présent (rare)".
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(.*?\)").expect("static pattern"));

/// The page marks grammatically absent slots with a lone dash.
const ABSENT_FORM: &str = "-";

/// One conjugated form within a tense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    /// Grammatical person, when one could be inferred.
    pub person: Option<String>,
    /// The literal conjugated text, pronoun included, trimmed.
    pub form: String,
}

/// One tense block: mode label, tense label, forms in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tense {
    /// Cleaned mode label (lowercased, annotations stripped).
    pub mode: String,
    /// Cleaned tense label.
    pub tense: String,
    /// Forms in page order, which follows canonical person order.
    pub conjugations: Vec<Conjugation>,
}

/// Lowercase a heading, drop parenthetical annotations, trim.
fn clean_label(heading: &str) -> String {
    let lowered = heading.to_lowercase();
    ANNOTATION.replace_all(&lowered, "").trim().to_owned()
}

/// Build `Tense` records from page sections.
///
/// Each entry's form is the bold token glued to its pronoun prefix and
/// trimmed. Dash placeholders are dropped, but still count toward the slot
/// index used for person resolution, so imperative slots keep their
/// canonical positions.
///
/// # Errors
///
/// Returns `ConjugError::InvalidRule` if the language's pronoun table fails
/// to compile.
pub fn parse_tenses(
    sections: &[TenseSection],
    language: &Language,
) -> Result<Vec<Tense>, ConjugError> {
    let resolver = PersonResolver::new(language)?;

    let mut tenses = Vec::with_capacity(sections.len());
    for section in sections {
        let mode = clean_label(&section.mode_heading);
        let tense = clean_label(&section.tense_heading);

        let mut conjugations = Vec::with_capacity(section.entries.len());
        for (index, entry) in section.entries.iter().enumerate() {
            let assembled = format!("{}{}", entry.prefix, entry.bold);
            let form = assembled.trim();
            if form == ABSENT_FORM {
                continue;
            }
            conjugations.push(Conjugation {
                person: resolver.person(&mode, index, form).map(str::to_owned),
                form: form.to_owned(),
            });
        }

        tenses.push(Tense {
            mode,
            tense,
            conjugations,
        });
    }

    Ok(tenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FormEntry;

    fn entry(prefix: &str, bold: &str) -> FormEntry {
        FormEntry {
            prefix: prefix.to_owned(),
            bold: bold.to_owned(),
        }
    }

    fn section(mode: &str, tense: &str, entries: Vec<FormEntry>) -> TenseSection {
        TenseSection {
            mode_heading: mode.to_owned(),
            tense_heading: tense.to_owned(),
            entries,
        }
    }

    fn french() -> &'static Language {
        Language::find("fr").unwrap()
    }

    #[test]
    fn test_labels_are_cleaned() {
        let sections = vec![section("Indicatif", "Présent (rare)", vec![])];
        let tenses = parse_tenses(&sections, french()).unwrap();
        assert_eq!(tenses[0].mode, "indicatif");
        assert_eq!(tenses[0].tense, "présent");
    }

    #[test]
    fn test_forms_are_assembled_and_attributed() {
        let sections = vec![section(
            "Indicatif",
            "Présent",
            vec![
                entry("j'", "ai"),
                entry("tu ", "as"),
                entry("il ", "a"),
                entry("nous ", "avons"),
                entry("vous ", "avez"),
                entry("ils ", "ont"),
            ],
        )];
        let tenses = parse_tenses(&sections, french()).unwrap();
        let c = &tenses[0].conjugations;
        assert_eq!(c.len(), 6);
        assert_eq!(c[0].form, "j'ai");
        assert_eq!(c[0].person.as_deref(), Some("je"));
        assert_eq!(c[2].form, "il a");
        assert_eq!(c[2].person.as_deref(), Some("il/elle"));
        assert_eq!(c[5].person.as_deref(), Some("ils/elles"));
    }

    #[test]
    fn test_dash_placeholder_is_dropped() {
        let sections = vec![section(
            "Indicatif",
            "Passé simple",
            vec![entry("", "-"), entry("tu ", "eus")],
        )];
        let tenses = parse_tenses(&sections, french()).unwrap();
        let c = &tenses[0].conjugations;
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].form, "tu eus");
    }

    #[test]
    fn test_imperative_persons_come_from_slot_index() {
        let sections = vec![section(
            "Impératif",
            "Présent",
            vec![entry("", "aie"), entry("", "ayons"), entry("", "ayez")],
        )];
        let tenses = parse_tenses(&sections, french()).unwrap();
        let c = &tenses[0].conjugations;
        assert_eq!(c[0].person.as_deref(), Some("tu"));
        assert_eq!(c[1].person.as_deref(), Some("nous"));
        assert_eq!(c[2].person.as_deref(), Some("vous"));
    }

    #[test]
    fn test_unattributable_form_has_no_person() {
        let sections = vec![section("Participe", "Présent", vec![entry("", "ayant")])];
        let tenses = parse_tenses(&sections, french()).unwrap();
        assert_eq!(tenses[0].conjugations[0].person, None);
    }

    #[test]
    fn test_page_order_is_preserved() {
        let sections = vec![
            section("Indicatif", "Présent", vec![]),
            section("Indicatif", "Imparfait", vec![]),
            section("Subjonctif", "Présent", vec![]),
        ];
        let tenses = parse_tenses(&sections, french()).unwrap();
        let labels: Vec<_> = tenses
            .iter()
            .map(|t| format!("{} {}", t.mode, t.tense))
            .collect();
        assert_eq!(
            labels,
            [
                "indicatif présent",
                "indicatif imparfait",
                "subjonctif présent"
            ]
        );
    }
}
