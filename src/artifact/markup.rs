//! Document query capability.
//!
//! Structure checks only see a [`DocumentView`], so they can be exercised against
//! synthetic documents in tests. [`HtmlDocument`] is the real implementation on top
//! of scraper's HTML5 parser.

use crate::CheckFault;
use scraper::{Html, Selector};

/// Read-only CSS-selector queries over a parsed document.
pub trait DocumentView {
    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> Result<usize, CheckFault>;

    /// Text content of each element matching `selector`, in document order
    fn texts(&self, selector: &str) -> Result<Vec<String>, CheckFault>;

    /// Whether at least one element matches `selector`
    fn exists(&self, selector: &str) -> Result<bool, CheckFault> {
        Ok(self.count(selector)? > 0)
    }
}

/// A parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse markup. The parser is error-recovering, so any text yields a document.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "markup parsed with recoverable errors");
        }
        HtmlDocument { html }
    }

    fn selector(selector: &str) -> Result<Selector, CheckFault> {
        Selector::parse(selector).map_err(|e| CheckFault::InvalidSelector {
            selector: selector.to_string(),
            message: format!("{:?}", e),
        })
    }
}

impl DocumentView for HtmlDocument {
    fn count(&self, selector: &str) -> Result<usize, CheckFault> {
        let selector = Self::selector(selector)?;
        Ok(self.html.select(&selector).count())
    }

    fn texts(&self, selector: &str) -> Result<Vec<String>, CheckFault> {
        let selector = Self::selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect())
    }
}
