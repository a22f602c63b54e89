// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast checker - WCAG 1.4.3 Contrast (Minimum) (Level AA)
//!
//! Reads each element's foreground and background color through a
//! [`ComputedStyle`] and reports pairs whose contrast ratio is below 4.5:1,
//! using the WCAG 2.x relative luminance formula.
//!
//! Only `rgb()` / `rgba()` values are understood. Named, hex and `hsl()`
//! colors are skipped, as is any element missing either color. Alpha is
//! parsed but never composited against what lies underneath, and
//! backgrounds are not resolved through ancestors.

use crate::checkers::Checker;
use crate::dom;
use crate::finding::Severity;
use crate::issue::Issue;
use crate::style::{ComputedStyle, DocumentStyles};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum ratio for normal text at Level AA
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)")
        .expect("valid regex")
});

/// Contrast checker resolving colors from `<style>` blocks and inline styles
pub struct ContrastChecker;

impl Checker for ContrastChecker {
    fn id(&self) -> &str {
        "WCAG-1.4.3-contrast"
    }

    fn name(&self) -> &str {
        "Contrast (Minimum)"
    }

    fn wcag_criterion(&self) -> &str {
        "1.4.3"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>> {
        let styles = DocumentStyles::new(document);
        check_contrast_ratio(document, &styles)
    }
}

/// A parsed `rgb()` / `rgba()` color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    /// Parsed for completeness; never used in the ratio
    pub a: f64,
}

/// Parse the first `rgb(r, g, b)` or `rgba(r, g, b, a)` in a color value
pub fn parse_color(value: &str) -> Option<Rgba> {
    let caps = RGB_RE.captures(value)?;
    Some(Rgba {
        r: caps[1].parse().ok()?,
        g: caps[2].parse().ok()?,
        b: caps[3].parse().ok()?,
        a: caps
            .get(4)
            .and_then(|a| a.as_str().parse().ok())
            .unwrap_or(1.0),
    })
}

/// Relative luminance per WCAG 2.x
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub fn relative_luminance(color: Rgba) -> f64 {
    let srgb = [color.r, color.g, color.b].map(|channel| {
        let normalized = channel as f64 / 255.0;
        if normalized <= 0.03928 {
            normalized / 12.92
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * srgb[0] + 0.7152 * srgb[1] + 0.0722 * srgb[2]
}

/// Contrast ratio between two luminances, always >= 1.0
pub fn contrast_ratio(luminance1: f64, luminance2: f64) -> f64 {
    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Format a non-negative ratio with two decimals, rounding exact ties up
/// like `Number.prototype.toFixed(2)`.
pub fn format_ratio(ratio: f64) -> String {
    // 64 digits is enough for the exact expansion of any double in ratio range
    let exact = format!("{:.64}", ratio);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), "000"));
    let Ok(mut hundredths) = format!("{}{}", int_part, &frac[..2]).parse::<u64>() else {
        return format!("{:.2}", ratio);
    };
    if frac.as_bytes()[2] >= b'5' {
        hundredths += 1;
    }
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Report elements whose text/background contrast is below 4.5:1
pub fn check_contrast_ratio<'a, S>(document: &'a Html, styles: &S) -> Vec<Issue<'a>>
where
    S: ComputedStyle + ?Sized,
{
    let mut issues = Vec::new();
    let mut measured = 0;

    for element in dom::all_elements(document) {
        let text_color = styles.color(element).as_deref().and_then(parse_color);
        let bg_color = styles.background_color(element).as_deref().and_then(parse_color);

        let (Some(text_color), Some(bg_color)) = (text_color, bg_color) else {
            continue;
        };
        measured += 1;

        let ratio = contrast_ratio(relative_luminance(text_color), relative_luminance(bg_color));
        if ratio < MIN_CONTRAST_RATIO {
            issues.push(Issue::new(
                element,
                format!("Text has insufficient contrast ratio ({}:1).", format_ratio(ratio)),
            ));
        }
    }

    debug!("Measured contrast on {} elements, {} below {}:1", measured, issues.len(), MIN_CONTRAST_RATIO);
    issues
}
