// SPDX-License-Identifier: PMPL-1.0-or-later
//! DOM helpers shared by the checkers.
//!
//! `scraper` gives us the tree and selector matching; these helpers fill
//! in the browser behaviour the checkers lean on: descendant-only queries,
//! JavaScript string trimming and the `tabIndex` property.

use scraper::{ElementRef, Html, Selector};

/// Elements whose `tabIndex` defaults to 0 when no valid attribute is set
const DEFAULT_FOCUSABLE: &[&str] = &[
    "a", "area", "button", "frame", "iframe", "input", "object", "select", "textarea",
];

/// Matching descendants of `root` in document order, excluding `root` itself
pub fn query_all<'a>(root: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| selector.matches(el))
        .collect()
}

/// Whether any descendant of `root` matches
pub fn has_descendant(root: ElementRef<'_>, selector: &Selector) -> bool {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|el| selector.matches(&el))
}

/// Every element of the document in document order
pub fn all_elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.root_element().descendants().filter_map(ElementRef::wrap)
}

/// Trim the way `String.prototype.trim` does (Unicode whitespace plus BOM)
pub fn js_trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Concatenated text of all descendant text nodes (`textContent`)
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// The element's position in the sequential focus order, as `element.tabIndex` reports it
pub fn tab_index(element: ElementRef<'_>) -> i32 {
    if let Some(value) = element.value().attr("tabindex").and_then(parse_html_integer) {
        return value;
    }

    let name = element.value().name();
    if DEFAULT_FOCUSABLE.contains(&name) || is_details_summary(element) {
        0
    } else {
        -1
    }
}

/// HTML "rules for parsing integers": leading whitespace, optional sign,
/// at least one digit, trailing garbage ignored. Out-of-range values are invalid.
pub fn parse_html_integer(value: &str) -> Option<i32> {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

fn is_details_summary(element: ElementRef<'_>) -> bool {
    if element.value().name() != "summary" {
        return false;
    }
    let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
        return false;
    };
    if parent.value().name() != "details" {
        return false;
    }
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "summary")
        .is_some_and(|first| first.id() == element.id())
}

/// Render the opening tag of an element, e.g. `<img src="a.png">`
pub fn opening_tag(element: ElementRef<'_>) -> String {
    let value = element.value();
    format!(
        "<{}{}>",
        value.name(),
        value
            .attrs()
            .map(|(k, v)| format!(" {}=\"{}\"", k, v))
            .collect::<String>()
    )
}

/// Estimate the 1-based source line of an element.
///
/// The n-th element with a given tag name in document order is mapped to
/// the n-th `<tag` occurrence in the source. Elements the parser inserted
/// on its own (implied `<body>` and friends) fall back to line 1.
pub fn estimate_line(content: &str, document: &Html, element: ElementRef<'_>) -> usize {
    let name = element.value().name();
    let Some(index) = all_elements(document)
        .filter(|el| el.value().name() == name)
        .position(|el| el.id() == element.id())
    else {
        return 1;
    };

    let needle = format!("<{}", name);
    let mut count = 0;
    for (line_num, line) in content.lines().enumerate() {
        let lower = line.to_lowercase();
        let mut search_from = 0;
        while let Some(pos) = lower[search_from..].find(&needle) {
            let start = search_from + pos;
            let after = start + needle.len();
            search_from = after;

            let boundary = lower[after..]
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || c == '>' || c == '/');
            if !boundary {
                continue;
            }
            if count == index {
                return line_num + 1;
            }
            count += 1;
        }
    }
    1
}
