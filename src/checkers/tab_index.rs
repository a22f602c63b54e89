// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tab order checker - WCAG 2.4.3 Focus Order (Level A)
//!
//! Looks at focusable-by-default elements and anything with an explicit
//! `tabindex` below a caller-supplied root. A non-empty `tabindex` is
//! reported when it does not convert to a number, or when it compares
//! below zero the way `"-1" < 0` does in a browser script. The comparison
//! flags `tabindex="-1"`, which is a legitimate way to take an element out
//! of the tab order; `TabIndexChecker::flag_negative` turns that half off.

use crate::checkers::Checker;
use crate::dom;
use crate::finding::Severity;
use crate::issue::Issue;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

const FOCUSABLE_SELECTOR: &str = "a, button, input, textarea, select, [tabindex]";

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid regex")
});

/// Tab order checker
pub struct TabIndexChecker {
    /// Report values that compare below zero, not only non-numeric ones
    pub flag_negative: bool,
}

impl Default for TabIndexChecker {
    fn default() -> Self {
        Self { flag_negative: true }
    }
}

impl Checker for TabIndexChecker {
    fn id(&self) -> &str {
        "WCAG-2.4.3-tabindex"
    }

    fn name(&self) -> &str {
        "Focus Order: Invalid tabindex"
    }

    fn wcag_criterion(&self) -> &str {
        "2.4.3"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>> {
        scan_tab_index(document.root_element(), self.flag_negative)
    }
}

/// Report invalid `tabindex` values on focusable descendants of `root`.
///
/// `root` must be an element of the document being audited; it is not
/// itself inspected.
pub fn analyze_tab_index(root: ElementRef<'_>) -> Vec<Issue<'_>> {
    scan_tab_index(root, true)
}

/// [`analyze_tab_index`] with the below-zero comparison made optional
pub fn scan_tab_index(root: ElementRef<'_>, flag_negative: bool) -> Vec<Issue<'_>> {
    let selector = Selector::parse(FOCUSABLE_SELECTOR).expect("valid selector");
    let mut issues = Vec::new();
    let candidates = dom::query_all(root, &selector);

    for element in &candidates {
        let Some(tab_index) = element.value().attr("tabindex").filter(|v| !v.is_empty()) else {
            continue;
        };

        let number = loose_number(tab_index);
        if number.is_nan() || (flag_negative && number < 0.0) {
            let role = element
                .value()
                .attr("role")
                .filter(|r| !r.is_empty())
                .unwrap_or("none");
            issues.push(Issue::new(
                *element,
                format!(
                    "Element with role {} has invalid tabIndex value: {}",
                    role, tab_index
                ),
            ));
        }
    }

    debug!("Checked {} focusable elements, {} invalid tabindex", candidates.len(), issues.len());
    issues
}

/// Convert a string to a number the way a browser script does (`Number(s)`).
///
/// Surrounding whitespace is ignored and an empty string is 0. Decimal and
/// exponent forms, `Infinity` and unsigned `0x` / `0o` / `0b` literals are
/// numbers; everything else is NaN.
pub fn loose_number(value: &str) -> f64 {
    let s = dom::js_trim(value);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    if DECIMAL_RE.is_match(s) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        analyze_tab_index(document.root_element())
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn test_loose_number() {
        assert_eq!(loose_number("2"), 2.0);
        assert_eq!(loose_number(" -1 "), -1.0);
        assert_eq!(loose_number("1.5"), 1.5);
        assert_eq!(loose_number("1e2"), 100.0);
        assert_eq!(loose_number(".5"), 0.5);
        assert_eq!(loose_number("0x1F"), 31.0);
        assert_eq!(loose_number("0b101"), 5.0);
        assert_eq!(loose_number("   "), 0.0);
        assert_eq!(loose_number("-Infinity"), f64::NEG_INFINITY);
        assert!(loose_number("abc").is_nan());
        assert!(loose_number("1a").is_nan());
        assert!(loose_number("-0x1").is_nan());
        assert!(loose_number("inf").is_nan());
        assert!(loose_number("NaN").is_nan());
    }

    #[test]
    fn test_valid_tabindex_values() {
        let html = r#"
            <a href="/" tabindex="0">a</a>
            <div tabindex="2">b</div>
            <button>c</button>
            <span tabindex="">d</span>
        "#;
        assert!(messages(html).is_empty());
    }

    #[test]
    fn test_non_numeric_tabindex() {
        assert_eq!(
            messages(r#"<div tabindex="abc">x</div>"#),
            vec!["Element with role none has invalid tabIndex value: abc"]
        );
    }

    #[test]
    fn test_negative_tabindex_compares_below_zero() {
        assert_eq!(
            messages(r#"<div role="button" tabindex="-1">x</div>"#),
            vec!["Element with role button has invalid tabIndex value: -1"]
        );
    }

    #[test]
    fn test_negative_allowed_when_comparison_disabled() {
        let document = Html::parse_document(
            r#"<div tabindex="-1">x</div><div tabindex="abc">y</div><div tabindex="2">z</div>"#,
        );
        let issues = scan_tab_index(document.root_element(), false);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.ends_with(": abc"));
    }

    #[test]
    fn test_empty_role_reported_as_none() {
        assert_eq!(
            messages(r#"<input role="" tabindex="x1">"#),
            vec!["Element with role none has invalid tabIndex value: x1"]
        );
    }

    #[test]
    fn test_scoped_to_root_descendants() {
        let document = Html::parse_document(
            r#"<section id="nav" tabindex="bad"><a href="/" tabindex="oops">in</a></section>
               <div tabindex="nope">out</div>"#,
        );
        let selector = Selector::parse("#nav").expect("valid selector");
        let root = document.select(&selector).next().expect("root present");
        let issues = analyze_tab_index(root);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].tag_name(), "a");
    }

    #[test]
    fn test_checker_uses_flag() {
        let document = Html::parse_document(r#"<div tabindex="-1">x</div>"#);
        assert_eq!(TabIndexChecker::default().scan(&document).len(), 1);
        assert!(TabIndexChecker { flag_negative: false }.scan(&document).is_empty());
    }
}
