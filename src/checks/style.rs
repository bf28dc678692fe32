//! Stylesheet checks (CSS-001 through CSS-015).
//!
//! Each check requires one declaration inside one selector's rule block. See
//! [`crate::artifact::stylesheet`] for the matching rules.

use crate::artifact::Declaration;
use crate::engine::orchestrator::RubricCheck;
use crate::CheckFamily;

/// One selector/declaration requirement of the rubric
#[derive(Debug, Clone, Copy)]
pub struct StyleRequirement {
    pub id: &'static str,
    pub name: &'static str,
    pub selector: &'static str,
    pub property: &'static str,
    pub value: Option<&'static str>,
    pub failure_message: &'static str,
}

impl StyleRequirement {
    pub fn declaration(&self) -> Declaration {
        match self.value {
            Some(value) => Declaration::with_value(self.property, value),
            None => Declaration::property(self.property),
        }
    }
}

pub const STYLE_REQUIREMENTS: [StyleRequirement; 15] = [
    StyleRequirement {
        id: "CSS-001",
        name: "Body Background Style",
        selector: "body",
        property: "background",
        value: None,
        failure_message: "Missing body background style.",
    },
    StyleRequirement {
        id: "CSS-002",
        name: "Body Font Family",
        selector: "body",
        property: "font-family",
        value: None,
        failure_message: "Missing body font-family.",
    },
    StyleRequirement {
        id: "CSS-003",
        name: "Body Flex Layout",
        selector: "body",
        property: "display",
        value: Some("flex"),
        failure_message: "Body is not using flex layout.",
    },
    StyleRequirement {
        id: "CSS-004",
        name: "Input Border Styling",
        selector: "input",
        property: "border",
        value: None,
        failure_message: "Input missing border styling.",
    },
    StyleRequirement {
        id: "CSS-005",
        name: "Input Padding",
        selector: "input",
        property: "padding",
        value: None,
        failure_message: "Input missing padding.",
    },
    StyleRequirement {
        id: "CSS-006",
        name: "Input Border Radius",
        selector: "input",
        property: "border-radius",
        value: None,
        failure_message: "Input missing border-radius.",
    },
    StyleRequirement {
        id: "CSS-007",
        name: "Button Background Color",
        selector: "button",
        property: "background",
        value: None,
        failure_message: "Button missing background color.",
    },
    StyleRequirement {
        id: "CSS-008",
        name: "Button Text Color",
        selector: "button",
        property: "color",
        value: None,
        failure_message: "Button missing text color.",
    },
    StyleRequirement {
        id: "CSS-009",
        name: "Button Border Radius",
        selector: "button",
        property: "border-radius",
        value: None,
        failure_message: "Button missing border-radius.",
    },
    StyleRequirement {
        id: "CSS-010",
        name: "Button Pointer Cursor",
        selector: "button",
        property: "cursor",
        value: Some("pointer"),
        failure_message: "Button missing pointer cursor.",
    },
    StyleRequirement {
        id: "CSS-011",
        name: "Suggestions Absolute Position",
        selector: "#suggestions",
        property: "position",
        value: Some("absolute"),
        failure_message: "#suggestions missing absolute positioning.",
    },
    StyleRequirement {
        id: "CSS-012",
        name: "Suggestions Z-Index",
        selector: "#suggestions",
        property: "z-index",
        value: None,
        failure_message: "#suggestions missing z-index.",
    },
    StyleRequirement {
        id: "CSS-013",
        name: "Suggestions Scroll Behavior",
        selector: "#suggestions",
        property: "overflow-y",
        value: Some("auto"),
        failure_message: "#suggestions missing scroll behavior.",
    },
    StyleRequirement {
        id: "CSS-014",
        name: "Weather Section Margin",
        selector: ".weather",
        property: "margin",
        value: None,
        failure_message: ".weather section missing margin.",
    },
    StyleRequirement {
        id: "CSS-015",
        name: "Container Box Shadow",
        selector: ".container",
        property: "box-shadow",
        value: None,
        failure_message: ".container missing box-shadow for card effect.",
    },
];

/// Get all style checks
pub fn style_checks() -> Vec<RubricCheck> {
    STYLE_REQUIREMENTS.iter().map(style_check).collect()
}

fn style_check(requirement: &StyleRequirement) -> RubricCheck {
    let selector = requirement.selector;
    let declaration = requirement.declaration();
    let description = format!("`{}` rule block declares `{}`", selector, declaration);

    RubricCheck::new(
        requirement.id,
        requirement.name,
        CheckFamily::Style,
        &description,
        requirement.failure_message,
        move |_, styles| styles.block_declares(selector, &declaration),
    )
}
