// SPDX-License-Identifier: PMPL-1.0-or-later
//! Semantic HTML checker - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Walks a fixed list of semantic tags in order and applies each tag's
//! rule to every matching descendant of the root. Issues are therefore
//! grouped by tag first and by document order within a tag.
//!
//! Rules:
//! - `header`: reported when the root has no `main`, or has more than one `header`
//! - `h1`-`h6`: reported when the trimmed text content is empty
//!
//! The remaining tags have no rule yet.

use crate::checkers::Checker;
use crate::dom;
use crate::finding::Severity;
use crate::issue::Issue;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// What to check on each element of a semantic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// `header` must be accompanied by `main` and appear at most once
    HeaderPlacement,
    /// Headings must have non-whitespace text
    NonEmptyHeading,
    /// No rule
    None,
}

/// Semantic tags in scan order, with the rule applied to each
pub const SEMANTIC_TAGS: &[(&str, TagRule)] = &[
    ("header", TagRule::HeaderPlacement),
    ("nav", TagRule::None),
    ("main", TagRule::None),
    ("article", TagRule::None),
    ("section", TagRule::None),
    ("aside", TagRule::None),
    ("footer", TagRule::None),
    ("h1", TagRule::NonEmptyHeading),
    ("h2", TagRule::NonEmptyHeading),
    ("h3", TagRule::NonEmptyHeading),
    ("h4", TagRule::NonEmptyHeading),
    ("h5", TagRule::NonEmptyHeading),
    ("h6", TagRule::NonEmptyHeading),
    ("p", TagRule::None),
    ("ul", TagRule::None),
    ("ol", TagRule::None),
    ("li", TagRule::None),
    ("figure", TagRule::None),
    ("figcaption", TagRule::None),
    ("table", TagRule::None),
    ("caption", TagRule::None),
    ("thead", TagRule::None),
    ("tbody", TagRule::None),
    ("tfoot", TagRule::None),
    ("tr", TagRule::None),
    ("td", TagRule::None),
    ("th", TagRule::None),
];

pub const HEADER_MESSAGE: &str =
    "'header' should be used sparingly and accompanied by a 'main' element.";

/// Semantic HTML checker
pub struct SemanticChecker;

impl Checker for SemanticChecker {
    fn id(&self) -> &str {
        "WCAG-1.3.1-semantic"
    }

    fn name(&self) -> &str {
        "Info and Relationships: Semantic HTML"
    }

    fn wcag_criterion(&self) -> &str {
        "1.3.1"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>> {
        check_semantic_html(document.root_element())
    }
}

/// Check semantic element usage below `root`.
///
/// `root` must be an element of the document being audited; it is not
/// itself inspected.
pub fn check_semantic_html(root: ElementRef<'_>) -> Vec<Issue<'_>> {
    let main_selector = Selector::parse("main").expect("valid selector");
    let header_selector = Selector::parse("header").expect("valid selector");
    let mut issues = Vec::new();

    for (tag, rule) in SEMANTIC_TAGS {
        let selector = Selector::parse(tag).expect("valid selector");

        for element in dom::query_all(root, &selector) {
            match rule {
                TagRule::HeaderPlacement => {
                    // Evaluated against the root for every header found
                    let misplaced = !dom::has_descendant(root, &main_selector)
                        || dom::query_all(root, &header_selector).len() > 1;
                    if misplaced {
                        issues.push(Issue::new(element, HEADER_MESSAGE));
                    }
                }
                TagRule::NonEmptyHeading => {
                    if dom::js_trim(&dom::text_content(element)).is_empty() {
                        issues.push(Issue::new(
                            element,
                            format!(
                                "'{}' element is empty. Headings should have meaningful content.",
                                tag
                            ),
                        ));
                    }
                }
                TagRule::None => {}
            }
        }
    }

    debug!("Semantic scan found {} issues", issues.len());
    issues
}
