// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text checker - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` in the document whose `alt` attribute is missing or empty
//! yields one issue. Whitespace-only alt text counts as present.

use crate::checkers::Checker;
use crate::finding::Severity;
use crate::issue::Issue;
use scraper::{Html, Selector};
use tracing::debug;

pub const MISSING_ALT_MESSAGE: &str = "Image is missing an alt attribute.";

/// Checker for image alt text
pub struct AltTextChecker;

impl Checker for AltTextChecker {
    fn id(&self) -> &str {
        "WCAG-1.1.1-alt-text"
    }

    fn name(&self) -> &str {
        "Non-text Content: Missing Alt"
    }

    fn wcag_criterion(&self) -> &str {
        "1.1.1"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>> {
        check_alt_attributes(document)
    }
}

/// Report every image with an absent or empty `alt` attribute
pub fn check_alt_attributes(document: &Html) -> Vec<Issue<'_>> {
    let img_selector = Selector::parse("img").expect("valid selector");
    let mut issues = Vec::new();
    let mut images = 0;

    for img in document.select(&img_selector) {
        images += 1;
        if img.value().attr("alt").map_or(true, str::is_empty) {
            issues.push(Issue::new(img, MISSING_ALT_MESSAGE));
        }
    }

    debug!("Checked {} images, {} missing alt", images, issues.len());
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessible_images() {
        let html = r#"
            <html>
            <body>
                <img src="logo.png" alt="Company logo">
                <img src="chart.png" alt="Bar chart showing Q4 revenue growth of 15%">
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let issues = check_alt_attributes(&document);
        assert!(issues.is_empty(), "Expected no issues for accessible images, got: {:?}", issues);
    }

    #[test]
    fn test_missing_and_empty_alt() {
        let html = r#"
            <html>
            <body>
                <img src="photo.jpg">
                <img src="divider.png" alt="">
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let issues = check_alt_attributes(&document);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].element.value().attr("src"), Some("photo.jpg"));
        assert_eq!(issues[1].element.value().attr("src"), Some("divider.png"));
        assert!(issues.iter().all(|i| i.message == MISSING_ALT_MESSAGE));
    }

    #[test]
    fn test_whitespace_alt_counts_as_present() {
        let document = Html::parse_document(r#"<img src="a.png" alt=" ">"#);
        assert!(check_alt_attributes(&document).is_empty());
    }

    #[test]
    fn test_one_issue_per_image_in_document_order() {
        let html = r#"
            <img src="a.png">
            <img src="b.png" alt="photo">
            <img src="c.png" alt="Good description of content">
            <img src="d.png">
        "#;
        let document = Html::parse_document(html);
        let srcs: Vec<_> = check_alt_attributes(&document)
            .iter()
            .filter_map(|i| i.element.value().attr("src"))
            .collect();
        assert_eq!(srcs, vec!["a.png", "d.png"]);
    }

    #[test]
    fn test_document_without_images() {
        let document = Html::parse_document("<p>No pictures here</p>");
        assert!(check_alt_attributes(&document).is_empty());
    }
}
