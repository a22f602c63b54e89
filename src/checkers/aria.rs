// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA compliance checker - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Looks at every element that carries at least one `aria-*` attribute:
//! - a `role` attribute must be present
//! - a non-empty role must be one of the supported roles
//! - `aria-hidden="true"` must not sit on a keyboard-focusable element
//!
//! The three checks are independent, so one element can yield more than one issue.

use crate::checkers::Checker;
use crate::dom;
use crate::finding::Severity;
use crate::issue::Issue;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Roles this checker accepts
pub const SUPPORTED_ROLES: &[&str] = &[
    "button", "checkbox", "dialog", "tooltip", "menu", "tablist", "tree",
];

pub const MISSING_ROLE_MESSAGE: &str =
    "Element with ARIA attributes is missing a \"role\" attribute.";

pub const HIDDEN_FOCUSABLE_MESSAGE: &str =
    "Element with aria-hidden=\"true\" should not be focusable.";

/// ARIA compliance checker
pub struct AriaChecker;

impl Checker for AriaChecker {
    fn id(&self) -> &str {
        "WCAG-4.1.2-aria"
    }

    fn name(&self) -> &str {
        "Name, Role, Value: ARIA Compliance"
    }

    fn wcag_criterion(&self) -> &str {
        "4.1.2"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>> {
        check_aria_compliance(document)
    }
}

fn has_aria_attribute(element: ElementRef<'_>) -> bool {
    element.value().attrs().any(|(name, _)| name.starts_with("aria-"))
}

/// Validate role usage and aria-hidden focusability on ARIA-bearing elements
pub fn check_aria_compliance(document: &Html) -> Vec<Issue<'_>> {
    let mut issues = Vec::new();
    let mut checked = 0;

    for element in dom::all_elements(document).filter(|el| has_aria_attribute(*el)) {
        checked += 1;
        let value = element.value();

        if value.attr("role").is_none() {
            issues.push(Issue::new(element, MISSING_ROLE_MESSAGE));
        }

        if let Some(role) = value.attr("role").filter(|r| !r.is_empty()) {
            if !SUPPORTED_ROLES.contains(&role) {
                issues.push(Issue::new(
                    element,
                    format!("Element has an invalid or unsupported role: \"{}\".", role),
                ));
            }
        }

        if value.attr("aria-hidden") == Some("true") && dom::tab_index(element) >= 0 {
            issues.push(Issue::new(element, HIDDEN_FOCUSABLE_MESSAGE));
        }
    }

    debug!("Checked {} ARIA-bearing elements, {} issues", checked, issues.len());
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        check_aria_compliance(&document)
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_no_issues() {
        let html = r#"
            <html><body>
                <nav><ul><li><a href="/">Home</a></li></ul></nav>
                <div role="dialog" aria-modal="true">Hi</div>
                <button role="button" aria-label="Close">X</button>
            </body></html>
        "#;
        assert!(messages(html).is_empty());
    }

    #[test]
    fn test_elements_without_aria_are_ignored() {
        assert!(messages(r#"<div role="banana">x</div>"#).is_empty());
    }

    #[test]
    fn test_missing_role() {
        assert_eq!(messages(r#"<div aria-label="Close">x</div>"#), vec![MISSING_ROLE_MESSAGE]);
    }

    #[test]
    fn test_unsupported_role() {
        assert_eq!(
            messages(r#"<nav role="navigation" aria-label="Main">x</nav>"#),
            vec!["Element has an invalid or unsupported role: \"navigation\"."]
        );
    }

    #[test]
    fn test_empty_role_is_not_validated() {
        assert!(messages(r#"<div role="" aria-label="x">x</div>"#).is_empty());
    }

    #[test]
    fn test_hidden_focusable_regardless_of_role() {
        let html = r#"
            <button aria-hidden="true">A</button>
            <div role="dialog" aria-hidden="true" tabindex="0">B</div>
            <a href="/" role="link" aria-hidden="true">C</a>
        "#;
        let msgs = messages(html);
        assert_eq!(msgs.iter().filter(|m| *m == HIDDEN_FOCUSABLE_MESSAGE).count(), 3);
    }

    #[test]
    fn test_multiple_issues_per_element() {
        let document = Html::parse_document(r#"<button aria-hidden="true">A</button><span role="x" aria-hidden="true"></span>"#);
        let issues = check_aria_compliance(&document);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].message, MISSING_ROLE_MESSAGE);
        assert_eq!(issues[1].message, HIDDEN_FOCUSABLE_MESSAGE);
        assert_eq!(issues[0].element, issues[1].element);
        assert_eq!(issues[2].message, "Element has an invalid or unsupported role: \"x\".");
    }

    #[test]
    fn test_aria_hidden_compared_literally() {
        let html = r#"
            <button role="button" aria-hidden="TRUE">A</button>
            <button role="button" aria-hidden="1">B</button>
        "#;
        assert!(messages(html).is_empty());
    }

    #[test]
    fn test_hidden_but_removed_from_tab_order() {
        let html = r#"
            <button role="button" aria-hidden="true" tabindex="-1">A</button>
            <div role="tooltip" aria-hidden="true">B</div>
        "#;
        assert!(messages(html).is_empty());
    }
}
