//! Input artifacts and the query capabilities built on them.
//!
//! - `markup`: the [`DocumentView`] capability and its HTML implementation
//! - `stylesheet`: the [`StyleRules`] capability and its block-local pattern matcher
//!
//! This module also locates and loads the two artifacts of a lab: `index.html`
//! and `style.css`.
//!
//! # Graceful Degradation
//!
//! - Missing or unreadable file: `RubricError::InputUnavailable`, fatal before any check runs
//! - Non UTF-8 content: `RubricError::ParseError`
//! - Malformed HTML: accepted, the parser recovers the same way a browser does

pub mod markup;
pub mod stylesheet;

pub use markup::{DocumentView, HtmlDocument};
pub use stylesheet::{Declaration, StyleRules, Stylesheet};

use crate::RubricError;
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKUP_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";
pub const REPORT_FILE: &str = "test-results.html";

/// Where a lab lives relative to the directory the tool was started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabLayout {
    /// Directory holding `index.html` and `style.css`
    pub lab_dir: PathBuf,
    /// Default destination for the HTML report
    pub report_path: PathBuf,
}

impl LabLayout {
    /// Layout for an explicitly named lab directory.
    pub fn at(lab_dir: impl Into<PathBuf>) -> Self {
        let lab_dir = lab_dir.into();
        let report_path = lab_dir.join("tests").join(REPORT_FILE);
        LabLayout {
            lab_dir,
            report_path,
        }
    }

    /// Detect the layout from the working directory.
    ///
    /// From the project root the lab sits in `./lab`; from `lab/tests` it is the
    /// parent directory and the report lands next to the tests.
    pub fn detect(cwd: &Path) -> Self {
        let root_lab = cwd.join("lab");
        if root_lab.join(MARKUP_FILE).is_file() {
            return LabLayout::at(root_lab);
        }

        LabLayout {
            lab_dir: cwd.join(".."),
            report_path: cwd.join(REPORT_FILE),
        }
    }

    /// Use `lab_dir` when given, otherwise detect from `cwd`.
    pub fn resolve(lab_dir: Option<&Path>, cwd: &Path) -> Self {
        match lab_dir {
            Some(dir) => LabLayout::at(dir),
            None => LabLayout::detect(cwd),
        }
    }
}

/// Paths of the two artifacts under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub markup: PathBuf,
    pub stylesheet: PathBuf,
}

impl ArtifactPaths {
    pub fn in_lab_dir(lab_dir: impl AsRef<Path>) -> Self {
        let lab_dir = lab_dir.as_ref();
        ArtifactPaths {
            markup: lab_dir.join(MARKUP_FILE),
            stylesheet: lab_dir.join(STYLESHEET_FILE),
        }
    }

    pub fn from_layout(layout: &LabLayout) -> Self {
        Self::in_lab_dir(&layout.lab_dir)
    }

    /// Replace either path with an explicitly supplied one.
    pub fn with_overrides(mut self, markup: Option<&Path>, stylesheet: Option<&Path>) -> Self {
        if let Some(path) = markup {
            self.markup = path.to_path_buf();
        }
        if let Some(path) = stylesheet {
            self.stylesheet = path.to_path_buf();
        }
        self
    }
}

/// The markup and stylesheet text of one lab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    pub markup: String,
    pub stylesheet: String,
}

/// Load both artifacts. Either one missing aborts the run.
pub fn load(paths: &ArtifactPaths) -> Result<Artifacts, RubricError> {
    let markup = read_text("markup", &paths.markup)?;
    let stylesheet = read_text("stylesheet", &paths.stylesheet)?;

    Ok(Artifacts { markup, stylesheet })
}

/// Read a text file, distinguishing unreadable from undecodable.
pub fn read_text(artifact: &'static str, path: &Path) -> Result<String, RubricError> {
    tracing::debug!(artifact, path = %path.display(), "reading artifact");

    let bytes = fs::read(path).map_err(|source| RubricError::InputUnavailable {
        artifact,
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|e| RubricError::ParseError {
        artifact,
        message: format!("{} is not valid UTF-8: {}", path.display(), e),
    })
}
