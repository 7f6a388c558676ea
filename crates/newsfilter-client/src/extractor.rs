use newsfilter_core::error::AppError;
use newsfilter_core::traits::Extractor;
use scraper::{Html, Node, Selector};

/// Elements whose text never renders.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// CSS-selector headline extractor using scraper.
///
/// Each matched element yields its visible text with whitespace collapsed.
/// An invalid selector is treated like a selector that matches nothing.
#[derive(Debug, Default, Clone)]
pub struct ScraperExtractor;

impl ScraperExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ScraperExtractor {
    fn extract(&self, html: &str, selector: &str) -> Result<Vec<String>, AppError> {
        let selector = match Selector::parse(selector) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(%selector, error = %e, "Invalid headline selector, no matches");
                return Ok(Vec::new());
            }
        };

        let document = Html::parse_document(html);
        let headlines: Vec<String> = document
            .select(&selector)
            .map(|element| {
                let mut raw = String::new();
                for node in element.descendants() {
                    if let Node::Text(text) = node.value() {
                        let hidden = node.ancestors().any(|a| {
                            a.value()
                                .as_element()
                                .is_some_and(|el| INVISIBLE_TAGS.contains(&el.name()))
                        });
                        if !hidden {
                            raw.push_str(text);
                        }
                    }
                }
                collapse_whitespace(&raw)
            })
            .filter(|text| !text.is_empty())
            .collect();

        tracing::debug!(count = headlines.len(), "Extracted headlines");
        Ok(headlines)
    }
}

/// Trim and squeeze every whitespace run to a single space.
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
