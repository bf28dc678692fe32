//! Sample lab pages and synthetic capabilities for testing without a real parser.

#![allow(dead_code)]

use lab_rubric::artifact::{Declaration, DocumentView, StyleRules};
use lab_rubric::engine::orchestrator::RubricCheck;
use lab_rubric::{CheckFamily, CheckFault};
use std::collections::{HashMap, HashSet};

/// A page that satisfies every structure check
pub const PASSING_MARKUP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Madagascar Weather</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <main class="container">
        <header>
            <h1>🌤️ Madagascar Weather</h1>
        </header>
        <section class="dropdown">
            <input type="text" id="cityInput" placeholder="Enter a city" autocomplete="off">
            <ul id="suggestions"></ul>
            <button id="getWeather">Get Weather</button>
        </section>
        <section class="weather" id="weatherInfo"></section>
    </main>
    <script src="app.js"></script>
</body>
</html>
"#;

/// A stylesheet that satisfies every style check
pub const PASSING_STYLESHEET: &str = r#"body {
    font-family: Arial, sans-serif;
    background: linear-gradient(#e0f7fa, #ffffff);
    display: flex;
    justify-content: center;
}

.container {
    background: white;
    padding: 20px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

input {
    padding: 10px;
    border: 1px solid #ccc;
    border-radius: 5px;
}

button {
    background: #0077cc;
    color: white;
    border-radius: 5px;
    cursor: pointer;
}

#suggestions {
    position: absolute;
    z-index: 10;
    overflow-y: auto;
    max-height: 150px;
}

.weather {
    margin-top: 20px;
}
"#;

/// Total checks in the lab rubric
pub const RUBRIC_SIZE: u32 = 25;

/// Document view answering from a selector -> texts table
#[derive(Debug, Default)]
pub struct FakeDocument {
    elements: HashMap<String, Vec<String>>,
    broken: HashSet<String>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: &str, texts: &[&str]) -> Self {
        self.elements
            .insert(selector.to_string(), texts.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Queries for `selector` fail
    pub fn broken(mut self, selector: &str) -> Self {
        self.broken.insert(selector.to_string());
        self
    }
}

impl DocumentView for FakeDocument {
    fn count(&self, selector: &str) -> Result<usize, CheckFault> {
        Ok(self.texts(selector)?.len())
    }

    fn texts(&self, selector: &str) -> Result<Vec<String>, CheckFault> {
        if self.broken.contains(selector) {
            return Err(CheckFault::InvalidSelector {
                selector: selector.to_string(),
                message: "synthetic failure".to_string(),
            });
        }
        Ok(self.elements.get(selector).cloned().unwrap_or_default())
    }
}

/// Stylesheet view answering from a set of (selector, declaration) pairs
#[derive(Debug, Default)]
pub struct FakeStyles {
    declared: HashSet<(String, String)>,
}

impl FakeStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: &str, declaration: Declaration) -> Self {
        self.declared
            .insert((selector.to_string(), declaration.to_string()));
        self
    }
}

impl StyleRules for FakeStyles {
    fn block_declares(&self, selector: &str, declaration: &Declaration) -> Result<bool, CheckFault> {
        Ok(self
            .declared
            .contains(&(selector.to_string(), declaration.to_string())))
    }
}

/// A check with a fixed outcome
pub fn fixed_check(id: &str, passes: bool) -> RubricCheck {
    RubricCheck::new(
        id,
        &format!("Fixed {}", id),
        CheckFamily::Structure,
        "Fixed outcome",
        &format!("{} failed", id),
        move |_, _| Ok(passes),
    )
}

/// A check whose predicate panics
pub fn panicking_check(id: &str) -> RubricCheck {
    RubricCheck::new(
        id,
        &format!("Panicking {}", id),
        CheckFamily::Style,
        "Always panics",
        "never shown",
        |_, _| panic!("predicate exploded"),
    )
}

/// Replace the first occurrence of `from` in `text`
pub fn without(text: &str, from: &str, to: &str) -> String {
    assert!(text.contains(from), "fixture does not contain {:?}", from);
    text.replacen(from, to, 1)
}
