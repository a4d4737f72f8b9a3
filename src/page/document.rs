/// Typed adapter over the conjugation page markup.
///
/// The page lays each tense out as:
///
/// ```text
/// <h2 class="mode">Indicatif</h2>
///   <div class="tempstab">
///     <h3>Présent</h3>
///     <div class="tempscorps">j'<b>ai</b><br>tu <b>as</b><br>…</div>
///   </div>
///   <div class="tempstab">…</div>   ← same mode heading governs this one too
/// <h2 class="mode">Subjonctif</h2>
///   …
/// ```
///
/// This module turns that structure into [`TenseSection`] records and keeps
/// every `scraper` node type private to itself; downstream code only ever
/// sees strings.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::errors::PageError;

static TENSE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tempstab").expect("static selector"));
static TENSE_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3").expect("static selector"));
static FORM_BODY_BOLD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tempscorps b").expect("static selector"));

/// One conjugated-form entry: a bolded token plus the plain-text fragment
/// immediately preceding it (the pronoun/subject prefix, possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEntry {
    /// Text of the node right before the bold element, when it is plain text.
    pub prefix: String,
    /// Text content of the bold element.
    pub bold: String,
}

/// One tense block with its governing mode heading, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseSection {
    /// Raw text of the nearest preceding `h2.mode` heading.
    pub mode_heading: String,
    /// Raw text of the block's own `h3` heading.
    pub tense_heading: String,
    /// Form entries in page order.
    pub entries: Vec<FormEntry>,
}

/// Extract every tense section from a conjugation page.
///
/// # Errors
///
/// Returns `PageError::MissingModeHeading` or `PageError::MissingTenseHeading`
/// when a block violates the expected page structure.
pub fn tense_sections(html: &str) -> Result<Vec<TenseSection>, PageError> {
    let document = Html::parse_document(html);

    let mut sections = Vec::new();
    for (index, block) in document.select(&TENSE_BLOCK).enumerate() {
        let mode_heading =
            preceding_mode_heading(block).ok_or(PageError::MissingModeHeading { index })?;
        let tense_heading = block
            .select(&TENSE_HEADING)
            .next()
            .map(element_text)
            .ok_or(PageError::MissingTenseHeading { index })?;

        sections.push(TenseSection {
            mode_heading,
            tense_heading,
            entries: form_entries(block),
        });
    }

    Ok(sections)
}

/// Text of the nearest preceding sibling `<h2 class="mode">`, if any.
fn preceding_mode_heading(block: ElementRef<'_>) -> Option<String> {
    block
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "h2" && el.value().classes().any(|c| c == "mode"))
        .map(element_text)
}

/// Collect each `<b>` in the block's form body together with the plain-text
/// sibling right before it.
fn form_entries(block: ElementRef<'_>) -> Vec<FormEntry> {
    block
        .select(&FORM_BODY_BOLD)
        .map(|bold| {
            let prefix = bold
                .prev_sibling()
                .and_then(|node| node.value().as_text().map(|t| String::from(&**t)))
                .unwrap_or_default();
            FormEntry {
                prefix,
                bold: element_text(bold),
            }
        })
        .collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVOIR_PAGE: &str = r#"
        <html><body>
        <h2 class="mode">Indicatif</h2>
        <div class="tempstab">
          <h3>Présent</h3>
          <div class="tempscorps">j'<b>ai</b><br>tu <b>as</b><br>il <b>a</b><br>nous <b>avons</b><br>vous <b>avez</b><br>ils <b>ont</b></div>
        </div>
        <div class="tempstab">
          <h3>Imparfait</h3>
          <div class="tempscorps">j'<b>avais</b><br>tu <b>avais</b></div>
        </div>
        <h2 class="mode">Impératif</h2>
        <div class="tempstab">
          <h3>Présent</h3>
          <div class="tempscorps"><b>aie</b><br><b>ayons</b><br><b>ayez</b></div>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_sections_in_page_order() {
        let sections = tense_sections(AVOIR_PAGE).unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].mode_heading, "Indicatif");
        assert_eq!(sections[0].tense_heading, "Présent");
        assert_eq!(sections[1].mode_heading, "Indicatif");
        assert_eq!(sections[1].tense_heading, "Imparfait");
        assert_eq!(sections[2].mode_heading, "Impératif");
    }

    #[test]
    fn test_entries_pair_bold_with_prefix() {
        let sections = tense_sections(AVOIR_PAGE).unwrap();
        let entries = &sections[0].entries;
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].prefix, "j'");
        assert_eq!(entries[0].bold, "ai");
        assert_eq!(entries[3].prefix, "nous ");
        assert_eq!(entries[3].bold, "avons");
    }

    #[test]
    fn test_bare_bold_has_empty_prefix() {
        let sections = tense_sections(AVOIR_PAGE).unwrap();
        let imperative = &sections[2].entries;
        assert_eq!(imperative[0].prefix, "");
        assert_eq!(imperative[0].bold, "aie");
    }

    #[test]
    fn test_missing_mode_heading_is_an_error() {
        let html = r#"<div class="tempstab"><h3>Présent</h3></div>"#;
        let result = tense_sections(html);
        assert!(matches!(
            result,
            Err(PageError::MissingModeHeading { index: 0 })
        ));
    }

    #[test]
    fn test_missing_tense_heading_is_an_error() {
        let html = r#"<h2 class="mode">Indicatif</h2><div class="tempstab"></div>"#;
        let result = tense_sections(html);
        assert!(matches!(
            result,
            Err(PageError::MissingTenseHeading { index: 0 })
        ));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = tense_sections(AVOIR_PAGE).unwrap();
        let b = tense_sections(AVOIR_PAGE).unwrap();
        assert_eq!(a, b);
    }
}
