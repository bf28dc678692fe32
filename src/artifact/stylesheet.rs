//! Stylesheet matching capability.
//!
//! Style checks ask whether a declaration appears textually inside one rule block,
//! i.e. `SELECTOR\s*{[^}]*DECLARATION[^}]*}`. The stylesheet is never parsed into a
//! cascade: a property declared in a later duplicate block of the same selector
//! still matches, a shorthand does not stand in for its longhands, and the selector
//! is not anchored, so `tbody { ... }` satisfies a `body` requirement.

use crate::CheckFault;
use regex::Regex;

/// A property, optionally with a required value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: Option<String>,
}

impl Declaration {
    /// Any declaration whose text contains `property`
    pub fn property(property: &str) -> Self {
        Declaration {
            property: property.to_string(),
            value: None,
        }
    }

    /// `property: value`, with any whitespace after the colon
    pub fn with_value(property: &str, value: &str) -> Self {
        Declaration {
            property: property.to_string(),
            value: Some(value.to_string()),
        }
    }

    fn pattern(&self) -> String {
        match self.value {
            Some(ref value) => format!(r"{}:\s*{}", regex::escape(&self.property), regex::escape(value)),
            None => regex::escape(&self.property),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(ref value) => write!(f, "{}: {}", self.property, value),
            None => write!(f, "{}", self.property),
        }
    }
}

/// Block-local declaration lookups over stylesheet text.
pub trait StyleRules {
    /// Whether `declaration` occurs inside a rule block opened by `selector`
    fn block_declares(&self, selector: &str, declaration: &Declaration) -> Result<bool, CheckFault>;
}

/// Raw stylesheet text matched with regular expressions.
pub struct Stylesheet<'a> {
    text: &'a str,
}

impl<'a> Stylesheet<'a> {
    pub fn new(text: &'a str) -> Self {
        Stylesheet { text }
    }

    /// The pattern used for one selector/declaration pair
    pub fn block_pattern(selector: &str, declaration: &Declaration) -> String {
        format!(
            r"{}\s*\{{[^}}]*{}[^}}]*\}}",
            regex::escape(selector),
            declaration.pattern()
        )
    }
}

impl StyleRules for Stylesheet<'_> {
    fn block_declares(&self, selector: &str, declaration: &Declaration) -> Result<bool, CheckFault> {
        let pattern = Self::block_pattern(selector, declaration);
        let re = Regex::new(&pattern).map_err(|e| CheckFault::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        Ok(re.is_match(self.text))
    }
}
