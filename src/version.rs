//! Build metadata for `lab-rubric version`, exported by `build.rs`.

use std::fmt;

/// Crate version plus whatever provenance the build script could determine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Labelled lines in print order; values the build could not determine are left out
    pub provenance: Vec<(&'static str, &'static str)>,
}

impl BuildInfo {
    pub fn current() -> Self {
        let known = [
            ("Commit", option_env!("LAB_RUBRIC_GIT_HASH")),
            ("Built", option_env!("LAB_RUBRIC_BUILD_DATE")),
            ("Target", option_env!("LAB_RUBRIC_TARGET")),
            ("Rustc", option_env!("LAB_RUBRIC_RUSTC_VERSION")),
        ];

        BuildInfo {
            version: env!("CARGO_PKG_VERSION"),
            provenance: known
                .into_iter()
                .filter_map(|(label, value)| value.map(|v| (label, v)))
                .collect(),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab-rubric {}", self.version)?;
        for (label, value) in &self.provenance {
            write!(f, "\n{}: {}", label, value)?;
        }
        Ok(())
    }
}
