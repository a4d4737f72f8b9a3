/// Case- and accent-insensitive lookup over parsed tense tables.
use deunicode::deunicode;
use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher, Utf32Str,
};

use super::errors::ConjugError;
use super::table::{Conjugation, Tense};

/// How many nearest "mode tense" pairs a not-found error carries.
const MAX_CANDIDATES: usize = 5;

/// Fold a label for comparison: strip diacritics, then lowercase.
///
/// "Présent", "PRESENT" and "présent" all normalize to "present".
#[must_use]
pub fn normalize(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Look up the forms for a mode/tense pair, optionally filtered by person.
///
/// The first tense whose normalized mode and tense both match is selected;
/// forms come back in page order. Without a person filter every form is
/// returned, including ones whose person could not be inferred. A person
/// filter selects by the stored label or by either side of a compound label,
/// so "il", "elle" and "il/elle" all reach the same form.
///
/// # Errors
///
/// - `ConjugError::TenseNotFound` — no tense matches the pair; carries the
///   fuzzy-nearest pairs present in the table.
/// - `ConjugError::PersonNotFound` — the pair matched but the person filter
///   removed every form.
pub fn query<'a>(
    tenses: &'a [Tense],
    mode: &str,
    tense: &str,
    person: Option<&str>,
) -> Result<Vec<&'a Conjugation>, ConjugError> {
    let mode_key = normalize(mode);
    let tense_key = normalize(tense);

    let matched = tenses
        .iter()
        .find(|t| normalize(&t.mode) == mode_key && normalize(&t.tense) == tense_key)
        .ok_or_else(|| ConjugError::TenseNotFound {
            mode: mode.to_owned(),
            tense: tense.to_owned(),
            candidates: nearest_pairs(tenses, &format!("{mode} {tense}")),
        })?;

    let forms: Vec<&Conjugation> = match person {
        None => matched.conjugations.iter().collect(),
        Some(person) => {
            let person_key = normalize(person);
            matched
                .conjugations
                .iter()
                .filter(|c| {
                    c.person
                        .as_deref()
                        .is_some_and(|p| person_matches(p, &person_key))
                })
                .collect()
        }
    };

    if forms.is_empty() {
        if let Some(person) = person {
            return Err(ConjugError::PersonNotFound {
                mode: matched.mode.clone(),
                tense: matched.tense.clone(),
                person: person.to_owned(),
            });
        }
    }

    Ok(forms)
}

/// Whether a stored person label answers to a normalized filter.
///
/// Compound labels like "il/elle" answer to the whole label or to either
/// `/`-separated component.
fn person_matches(label: &str, wanted: &str) -> bool {
    normalize(label) == wanted || label.split('/').any(|part| normalize(part) == wanted)
}

/// Fuzzy-score every "mode tense" pair against the failed query, best first.
fn nearest_pairs(tenses: &[Tense], wanted: &str) -> Vec<String> {
    let pattern = Pattern::parse(&normalize(wanted), CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(String, u32)> = tenses
        .iter()
        .filter_map(|t| {
            let pair = format!("{} {}", t.mode, t.tense);
            let key = normalize(&pair);
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&key, &mut buf);
            pattern.score(haystack, &mut matcher).map(|s| (pair, s))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_CANDIDATES);
    scored.into_iter().map(|(pair, _)| pair).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjugation(person: Option<&str>, form: &str) -> Conjugation {
        Conjugation {
            person: person.map(str::to_owned),
            form: form.to_owned(),
        }
    }

    fn avoir() -> Vec<Tense> {
        vec![
            Tense {
                mode: "indicatif".to_owned(),
                tense: "présent".to_owned(),
                conjugations: vec![
                    conjugation(Some("je"), "j'ai"),
                    conjugation(Some("tu"), "tu as"),
                    conjugation(Some("il/elle"), "il a"),
                    conjugation(Some("nous"), "nous avons"),
                    conjugation(Some("vous"), "vous avez"),
                    conjugation(Some("ils/elles"), "ils ont"),
                ],
            },
            Tense {
                mode: "participe".to_owned(),
                tense: "présent".to_owned(),
                conjugations: vec![conjugation(None, "ayant")],
            },
        ]
    }

    fn forms(result: Vec<&Conjugation>) -> Vec<String> {
        result.into_iter().map(|c| c.form.clone()).collect()
    }

    #[test]
    fn test_person_lookup() {
        let tenses = avoir();
        let result = query(&tenses, "indicatif", "présent", Some("il")).unwrap();
        assert_eq!(forms(result), ["il a"]);
    }

    #[test]
    fn test_no_person_returns_all_in_order() {
        let tenses = avoir();
        let result = query(&tenses, "indicatif", "présent", None).unwrap();
        assert_eq!(result.len(), 6);
        assert_eq!(result[0].form, "j'ai");
        assert_eq!(result[5].form, "ils ont");
    }

    #[test]
    fn test_accent_and_case_folding() {
        let tenses = avoir();
        let accented = forms(query(&tenses, "indicatif", "présent", None).unwrap());
        let folded = forms(query(&tenses, "INDICATIF", "PRESENT", None).unwrap());
        assert_eq!(accented, folded);
    }

    #[test]
    fn test_person_filter_matches_compound_label() {
        let tenses = avoir();
        let result = query(&tenses, "indicatif", "présent", Some("IL/ELLE")).unwrap();
        assert_eq!(forms(result), ["il a"]);
    }

    #[test]
    fn test_person_filter_matches_either_component() {
        let tenses = avoir();
        let by_il = forms(query(&tenses, "indicatif", "présent", Some("il")).unwrap());
        let by_elle = forms(query(&tenses, "indicatif", "présent", Some("elle")).unwrap());
        assert_eq!(by_il, ["il a"]);
        assert_eq!(by_elle, ["il a"]);
    }

    #[test]
    fn test_person_filter_never_expands() {
        let tenses = avoir();
        let all = query(&tenses, "indicatif", "présent", None).unwrap().len();
        let one = query(&tenses, "indicatif", "présent", Some("nous"))
            .unwrap()
            .len();
        assert!(one <= all);
    }

    #[test]
    fn test_tense_not_found_with_candidates() {
        let tenses = avoir();
        let err = query(&tenses, "imperatif", "-", None).unwrap_err();
        match err {
            ConjugError::TenseNotFound { candidates, .. } => {
                assert!(candidates.len() <= 5);
            }
            other => panic!("expected TenseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_near_miss_suggests_existing_pair() {
        let tenses = avoir();
        let err = query(&tenses, "indicatif", "prsent", None).unwrap_err();
        match err {
            ConjugError::TenseNotFound { candidates, .. } => {
                assert!(candidates.iter().any(|c| c == "indicatif présent"));
            }
            other => panic!("expected TenseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_person_not_found_is_distinct() {
        let tenses = avoir();
        let err = query(&tenses, "indicatif", "présent", Some("on")).unwrap_err();
        assert!(matches!(err, ConjugError::PersonNotFound { .. }));
    }

    #[test]
    fn test_personless_forms_still_listed_without_filter() {
        let tenses = avoir();
        let result = query(&tenses, "participe", "présent", None).unwrap();
        assert_eq!(forms(result), ["ayant"]);
    }
}
