//! Markup structure checks (HTML-001 through HTML-008).
//!
//! Text-content checks compare case-insensitively.

use crate::artifact::DocumentView;
use crate::engine::orchestrator::RubricCheck;
use crate::{CheckFamily, CheckFault};

/// Whether any element matching `selector` has text containing `needle`, ignoring case
pub fn text_contains(doc: &dyn DocumentView, selector: &str, needle: &str) -> Result<bool, CheckFault> {
    let needle = needle.to_lowercase();
    Ok(doc
        .texts(selector)?
        .iter()
        .any(|text| text.to_lowercase().contains(&needle)))
}

/// Whether at least one of `selectors` matches
pub fn any_exists(doc: &dyn DocumentView, selectors: &[&str]) -> Result<bool, CheckFault> {
    for selector in selectors {
        if doc.exists(selector)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// HTML-001
pub fn has_weather_title(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    text_contains(doc, "h1", "weather")
}

/// HTML-002
pub fn has_text_input(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    doc.exists(r#"input[type="text"]"#)
}

/// HTML-003
pub fn has_input_placeholder(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    doc.exists("input[placeholder]")
}

/// HTML-004
pub fn has_weather_button(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    text_contains(doc, "button", "weather")
}

/// HTML-005
pub fn has_suggestions_list(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    any_exists(doc, &["ul.suggestions", "ul#suggestions"])
}

/// HTML-006
pub fn has_weather_info(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    doc.exists("#weatherInfo")
}

/// Get all structure checks
pub fn structure_checks() -> Vec<RubricCheck> {
    vec![
        RubricCheck::new(
            "HTML-001",
            "H1 Weather Title",
            CheckFamily::Structure,
            "An <h1> heading mentions \"Weather\"",
            "Missing or incorrect <h1> with \"Weather\" in it.",
            |doc, _| has_weather_title(doc),
        ),
        RubricCheck::new(
            "HTML-002",
            "Text Input Field",
            CheckFamily::Structure,
            "An <input type=\"text\"> for the city name",
            "Missing input field of type text.",
            |doc, _| has_text_input(doc),
        ),
        RubricCheck::new(
            "HTML-003",
            "Input Placeholder",
            CheckFamily::Structure,
            "An input carries a placeholder attribute",
            "Input missing a placeholder.",
            |doc, _| has_input_placeholder(doc),
        ),
        RubricCheck::new(
            "HTML-004",
            "Weather Button",
            CheckFamily::Structure,
            "A <button> whose label mentions \"Weather\"",
            "Missing button with \"Weather\" text.",
            |doc, _| has_weather_button(doc),
        ),
        RubricCheck::new(
            "HTML-005",
            "Suggestions List",
            CheckFamily::Structure,
            "A <ul> identified by class or id \"suggestions\"",
            "Missing <ul> for suggestions.",
            |doc, _| has_suggestions_list(doc),
        ),
        RubricCheck::new(
            "HTML-006",
            "Weather Info Container",
            CheckFamily::Structure,
            "An element with id \"weatherInfo\" to hold results",
            "Missing #weatherInfo container.",
            |doc, _| has_weather_info(doc),
        ),
        RubricCheck::new(
            "HTML-007",
            "Semantic HTML Elements",
            CheckFamily::Structure,
            "At least one of <header>, <main> or <section>",
            "Missing semantic HTML elements like <header>, <main>, or <section>.",
            |doc, _| any_exists(doc, &["header", "main", "section"]),
        ),
        RubricCheck::new(
            "HTML-008",
            "Main Layout Container",
            CheckFamily::Structure,
            "Layout wrapped in a .container element or <main>",
            "Main layout should be wrapped in a container or <main>.",
            |doc, _| any_exists(doc, &[".container", "main"]),
        ),
    ]
}
