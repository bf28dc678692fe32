//! Composite acceptance checks (INT-001, INT-002).

use crate::artifact::{Declaration, DocumentView, StyleRules};
use crate::checks::structure;
use crate::engine::orchestrator::RubricCheck;
use crate::{CheckFamily, CheckFault};

/// INT-001: every element the app's script depends on is present
pub fn has_functional_elements(doc: &dyn DocumentView) -> Result<bool, CheckFault> {
    Ok(structure::has_weather_title(doc)?
        && structure::has_text_input(doc)?
        && structure::has_weather_button(doc)?
        && structure::has_weather_info(doc)?
        && structure::has_suggestions_list(doc)?)
}

/// INT-002: the input and button are styled for interaction
pub fn has_interactive_styling(styles: &dyn StyleRules) -> Result<bool, CheckFault> {
    Ok(styles.block_declares("input", &Declaration::property("border"))?
        && styles.block_declares("input", &Declaration::property("padding"))?
        && styles.block_declares("button", &Declaration::property("background"))?
        && styles.block_declares("button", &Declaration::with_value("cursor", "pointer"))?)
}

/// Get all integration checks
pub fn integration_checks() -> Vec<RubricCheck> {
    vec![
        RubricCheck::new(
            "INT-001",
            "Functional App Elements",
            CheckFamily::Integration,
            "Title, text input, weather button, #weatherInfo and suggestions list together",
            "Missing one or more elements the app needs: title, text input, weather button, #weatherInfo, suggestions list.",
            |doc, _| has_functional_elements(doc),
        ),
        RubricCheck::new(
            "INT-002",
            "Interactive Element Styling",
            CheckFamily::Integration,
            "Input border and padding, button background and pointer cursor",
            "Input and button are missing interaction styling (border, padding, background, pointer cursor).",
            |_, styles| has_interactive_styling(styles),
        ),
    ]
}
