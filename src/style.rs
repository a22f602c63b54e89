// SPDX-License-Identifier: PMPL-1.0-or-later
//! Style resolution for the contrast checker.
//!
//! A browser hands the contrast check `getComputedStyle`. Without a layout
//! engine we resolve declared values instead:
//! - [`InlineStyles`] reads only the element's `style` attribute
//! - [`DocumentStyles`] also applies rules from the document's `<style>` blocks
//!
//! Neither resolver walks ancestors for inherited or transparent colors,
//! and neither applies selector specificity.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+)\{([^}]*)\}").expect("valid regex"));

/// Per-element color lookup, the `getComputedStyle` seam
pub trait ComputedStyle {
    /// Foreground color value, as written (e.g. `rgb(0, 0, 0)`)
    fn color(&self, element: ElementRef<'_>) -> Option<String>;

    /// Background color value, as written
    fn background_color(&self, element: ElementRef<'_>) -> Option<String>;
}

/// The two color properties the contrast check reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorDeclarations {
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl ColorDeclarations {
    /// Apply a declaration block (`color: red; background: blue`), later declarations winning
    pub fn apply(&mut self, block: &str) {
        for declaration in block.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value);
            if value.is_empty() {
                continue;
            }

            match property.trim().to_ascii_lowercase().as_str() {
                "color" => self.color = Some(value.to_string()),
                "background-color" | "background" => {
                    self.background_color = Some(value.to_string())
                }
                _ => {}
            }
        }
    }

    fn from_inline(element: ElementRef<'_>) -> Self {
        let mut declarations = Self::default();
        if let Some(style) = element.value().attr("style") {
            declarations.apply(style);
        }
        declarations
    }

    fn overlay(&mut self, other: ColorDeclarations) {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.background_color.is_some() {
            self.background_color = other.background_color;
        }
    }
}

/// Resolve colors from the `style` attribute only
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyles;

impl ComputedStyle for InlineStyles {
    fn color(&self, element: ElementRef<'_>) -> Option<String> {
        ColorDeclarations::from_inline(element).color
    }

    fn background_color(&self, element: ElementRef<'_>) -> Option<String> {
        ColorDeclarations::from_inline(element).background_color
    }
}

struct StyleRule {
    selector: Selector,
    declarations: ColorDeclarations,
}

/// Resolve colors from `<style>` blocks plus the `style` attribute.
///
/// Rules apply in source order and the inline `style` attribute wins over
/// all of them. Rules whose selector `scraper` cannot parse (at-rules,
/// pseudo-elements) are dropped.
pub struct DocumentStyles {
    rules: Vec<StyleRule>,
}

impl DocumentStyles {
    pub fn new(document: &Html) -> Self {
        let style_selector = Selector::parse("style").expect("valid selector");
        let mut rules = Vec::new();
        let mut skipped = 0;

        for style in document.select(&style_selector) {
            let sheet = style.text().collect::<String>();
            let sheet = COMMENT_RE.replace_all(&sheet, "");

            for caps in BLOCK_RE.captures_iter(&sheet) {
                let mut declarations = ColorDeclarations::default();
                declarations.apply(&caps[2]);
                if declarations == ColorDeclarations::default() {
                    continue;
                }

                match Selector::parse(caps[1].trim()) {
                    Ok(selector) => rules.push(StyleRule { selector, declarations }),
                    Err(_) => skipped += 1,
                }
            }
        }

        debug!("Collected {} color rules ({} unparseable selectors skipped)", rules.len(), skipped);
        Self { rules }
    }

    fn resolve(&self, element: ElementRef<'_>) -> ColorDeclarations {
        let mut resolved = ColorDeclarations::default();
        for rule in &self.rules {
            if rule.selector.matches(&element) {
                resolved.overlay(rule.declarations.clone());
            }
        }
        resolved.overlay(ColorDeclarations::from_inline(element));
        resolved
    }
}

impl ComputedStyle for DocumentStyles {
    fn color(&self, element: ElementRef<'_>) -> Option<String> {
        self.resolve(element).color
    }

    fn background_color(&self, element: ElementRef<'_>) -> Option<String> {
        self.resolve(element).background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).expect("valid selector");
        document.select(&selector).next().expect("element present")
    }

    #[test]
    fn test_declarations_last_wins() {
        let mut declarations = ColorDeclarations::default();
        declarations.apply("color: red; background: blue; background-color: rgb(1, 2, 3) !important");
        assert_eq!(declarations.color.as_deref(), Some("red"));
        assert_eq!(declarations.background_color.as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_inline_styles() {
        let document = Html::parse_document(
            r#"<p style="COLOR: rgb(0, 0, 0); background-color: rgb(255, 255, 255)">x</p>"#,
        );
        let p = first(&document, "p");
        assert_eq!(InlineStyles.color(p).as_deref(), Some("rgb(0, 0, 0)"));
        assert_eq!(InlineStyles.background_color(p).as_deref(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_document_styles_rules_and_inline_override() {
        let document = Html::parse_document(
            r#"<html><head><style>
                /* base */
                p { color: rgb(10, 10, 10); background-color: rgb(200, 200, 200); }
                .warm { color: rgb(90, 0, 0); }
                @media print { p { color: rgb(0, 0, 0); } }
            </style></head>
            <body><p class="warm" style="background: rgb(250, 250, 250)">x</p><span>y</span></body></html>"#,
        );
        let styles = DocumentStyles::new(&document);
        let p = first(&document, "p");
        assert_eq!(styles.color(p).as_deref(), Some("rgb(90, 0, 0)"));
        assert_eq!(styles.background_color(p).as_deref(), Some("rgb(250, 250, 250)"));

        let span = first(&document, "span");
        assert_eq!(styles.color(span), None);
    }
}
