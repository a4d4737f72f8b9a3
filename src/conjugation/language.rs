/// Per-language configuration: URL template, default verb, pronoun rules.
///
/// A language is a table entry, not a type. Adding one means adding an entry
/// to [`LANGUAGES`] — the parser and query engine never branch on the code.
use regex::Regex;

use super::errors::ConjugError;

/// One pronoun rule: a regex matched against the start of an assembled form.
///
/// `at_index` restricts the rule to a single slot position — English needs
/// this because "you" is both second-person singular (slot 1) and plural
/// (slot 4) and is only told apart by position.
#[derive(Debug)]
pub struct PersonRule {
    pub pattern: &'static str,
    pub person: &'static str,
    pub at_index: Option<usize>,
}

const fn rule(pattern: &'static str, person: &'static str) -> PersonRule {
    PersonRule {
        pattern,
        person,
        at_index: None,
    }
}

const fn rule_at(pattern: &'static str, person: &'static str, index: usize) -> PersonRule {
    PersonRule {
        pattern,
        person,
        at_index: Some(index),
    }
}

/// A supported language's full configuration.
#[derive(Debug)]
pub struct Language {
    /// Selector code as given on the command line (e.g., "fr").
    pub code: &'static str,
    /// Human-readable name for help text.
    pub name: &'static str,
    /// Verb used by the listing mode when none is given.
    pub default_verb: &'static str,
    /// Path segment of the conjugation site for this language.
    url_segment: &'static str,
    /// Ordered pronoun rules, first match wins.
    person_rules: &'static [PersonRule],
    /// Mode names (lowercased, annotation-stripped) that use the index fallback.
    imperative_modes: &'static [&'static str],
    /// Slot-indexed persons for imperative-family modes. Slots that are
    /// grammatically absent hold `None`; lists may be shorter than six.
    imperative_persons: &'static [Option<&'static str>],
}

/// All supported languages.
pub static LANGUAGES: &[Language] = &[
    Language {
        code: "fr",
        name: "French",
        default_verb: "avoir",
        url_segment: "du",
        person_rules: &[
            rule(r"^(je\s|j'|que je\s|que j')", "je"),
            rule(r"^(tu|que tu)\s", "tu"),
            rule(r"^(il|qu'il)\s", "il/elle"),
            rule(r"^(nous|que nous)\s", "nous"),
            rule(r"^(vous|que vous)\s", "vous"),
            rule(r"^(ils|qu'ils)\s", "ils/elles"),
        ],
        imperative_modes: &["impératif"],
        imperative_persons: &[Some("tu"), Some("nous"), Some("vous")],
    },
    Language {
        code: "pt",
        name: "Portuguese",
        default_verb: "haver",
        url_segment: "portugais",
        person_rules: &[
            rule(r"^(eu|se eu|quando eu)\s", "eu"),
            rule(r"^(tu|se tu|quando tu)\s", "tu"),
            rule(r"^(ele|se ele|quando ele)\s", "ele/ela"),
            rule(r"^(nós|se nós|quando nós)\s", "nós"),
            rule(r"^(vós|se vós|quando vós)\s", "vós"),
            rule(r"^(eles|se eles|quando eles)\s", "eles/elas"),
        ],
        imperative_modes: &["imperativo"],
        imperative_persons: &[
            None,
            Some("tu"),
            Some("ele/ela"),
            Some("nós"),
            Some("vós"),
            Some("eles/elas"),
        ],
    },
    Language {
        code: "es",
        name: "Spanish",
        default_verb: "haber",
        url_segment: "espagnol",
        person_rules: &[
            rule(r"^(yo)\s", "yo"),
            rule(r"^(tú)\s", "tú"),
            rule(r"^(él)\s", "él/ella"),
            rule(r"^(nosotros)\s", "nosotros"),
            rule(r"^(vosotros)\s", "vosotros"),
            rule(r"^(ellos)\s", "ellos/ellas"),
        ],
        imperative_modes: &["imperativo"],
        imperative_persons: &[
            None,
            Some("tú"),
            Some("él/ella"),
            Some("nosotros"),
            Some("vosotros"),
            Some("ellos/ellas"),
        ],
    },
    Language {
        code: "it",
        name: "Italian",
        default_verb: "avere",
        url_segment: "italien",
        person_rules: &[
            rule(r"^(io|che io)\s", "io"),
            rule(r"^(tu|che tu)\s", "tu"),
            rule(r"^(lui|che lui)\s", "lui/lei"),
            rule(r"^(noi|che noi)", "noi"),
            rule(r"^(voi|che voi)", "voi"),
            rule(r"^(loro|che loro)", "loro/lora"),
        ],
        imperative_modes: &["imperativo"],
        imperative_persons: &[
            None,
            Some("tu"),
            Some("lui/lei"),
            Some("noi"),
            Some("voi"),
            Some("loro/lora"),
        ],
    },
    Language {
        code: "en",
        name: "English",
        default_verb: "have",
        url_segment: "anglais",
        person_rules: &[
            rule(r"^(I)\s", "I"),
            rule_at(r"^(you)\s", "you", 1),
            rule(r"^(he)\s", "he/she"),
            rule(r"^(we)", "we"),
            rule_at(r"^(you)", "you", 4),
            rule(r"^(they)", "they"),
        ],
        imperative_modes: &[],
        imperative_persons: &[],
    },
];

impl Language {
    /// Look a language up by its selector code.
    ///
    /// # Errors
    ///
    /// Returns `ConjugError::UnknownLanguage` listing the supported codes.
    pub fn find(code: &str) -> Result<&'static Language, ConjugError> {
        LANGUAGES
            .iter()
            .find(|l| l.code == code)
            .ok_or_else(|| ConjugError::UnknownLanguage {
                code: code.to_owned(),
                supported: LANGUAGES.iter().map(|l| l.code.to_owned()).collect(),
            })
    }

    /// Conjugation page URL for a verb.
    #[must_use]
    pub fn page_url(&self, verb: &str) -> String {
        format!(
            "https://la-conjugaison.nouvelobs.com/{}/verbe/{}.php",
            self.url_segment, verb
        )
    }
}

/// Pronoun rules compiled once per invocation.
pub struct PersonResolver {
    rules: Vec<(Regex, &'static str, Option<usize>)>,
    imperative_modes: &'static [&'static str],
    imperative_persons: &'static [Option<&'static str>],
}

impl PersonResolver {
    /// Compile a language's pronoun rules.
    ///
    /// # Errors
    ///
    /// Returns `ConjugError::InvalidRule` if a table pattern does not compile.
    pub fn new(language: &Language) -> Result<Self, ConjugError> {
        let mut rules = Vec::with_capacity(language.person_rules.len());
        for r in language.person_rules {
            let regex = Regex::new(r.pattern).map_err(|source| ConjugError::InvalidRule {
                pattern: r.pattern.to_owned(),
                source,
            })?;
            rules.push((regex, r.person, r.at_index));
        }
        Ok(Self {
            rules,
            imperative_modes: language.imperative_modes,
            imperative_persons: language.imperative_persons,
        })
    }

    /// Resolve the grammatical person of an assembled form.
    ///
    /// `mode` is the cleaned (lowercased, annotation-stripped) mode label and
    /// `index` the form's slot position within its tense block. Rules are
    /// tried in table order; imperative-family modes then fall back to the
    /// index table. The fallback lookup is bounds-safe: an index beyond the
    /// table, or a `None` slot, yields no person.
    #[must_use]
    pub fn person(&self, mode: &str, index: usize, form: &str) -> Option<&'static str> {
        for (regex, person, at_index) in &self.rules {
            if at_index.is_none_or(|i| i == index) && regex.is_match(form) {
                return Some(person);
            }
        }
        if self.imperative_modes.contains(&mode) {
            return self.imperative_persons.get(index).copied().flatten();
        }
        None
    }
}
