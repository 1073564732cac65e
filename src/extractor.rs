use scraper::{Html, Selector};

use crate::models::ExtractedValue;

/// Evaluates a declarative selector against raw content.
pub trait ValueExtractor: Send + Sync {
    fn extract(&self, content: &str, selector: &str) -> ExtractedValue;
}

/// CSS selector evaluation over a leniently parsed HTML document.
///
/// Takes the first matching element and returns its text with runs of
/// whitespace collapsed to single spaces.
#[derive(Debug, Clone, Default)]
pub struct CssExtractor;

impl CssExtractor {
    pub fn new() -> Self {
        CssExtractor
    }
}

impl ValueExtractor for CssExtractor {
    fn extract(&self, content: &str, selector: &str) -> ExtractedValue {
        let css_selector = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid CSS selector '{}': {:?}", selector, e);
                return ExtractedValue::NotFound;
            }
        };

        let document = Html::parse_document(content);
        match document.select(&css_selector).next() {
            Some(element) => ExtractedValue::Found(normalize_text(element.text())),
            None => ExtractedValue::NotFound,
        }
    }
}

fn normalize_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let text: String = parts.collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
