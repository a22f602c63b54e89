// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit - heuristic accessibility checks over HTML documents
//!
//! Five independent, read-only checkers scan a parsed [`scraper::Html`]
//! document and report [`Issue`]s that borrow the offending elements:
//!
//! - **Alt Text** (1.1.1): images with a missing or empty `alt`
//! - **ARIA** (4.1.2): missing/unsupported roles, focusable `aria-hidden` elements
//! - **Contrast** (1.4.3): `rgb()`/`rgba()` color pairs below 4.5:1
//! - **Tab Index** (2.4.3): `tabindex` values that are not numbers or compare below zero
//! - **Semantic** (1.3.1): misplaced `header` elements and empty headings
//!
//! ```
//! use a11y_audit::checkers::check_alt_attributes;
//! use scraper::Html;
//!
//! let document = Html::parse_document(r#"<img src="logo.png">"#);
//! let issues = check_alt_attributes(&document);
//! assert_eq!(issues[0].message, "Image is missing an alt attribute.");
//! ```
//!
//! [`checkers::audit_document`] runs every enabled checker and converts the
//! issues into owned [`finding::Finding`]s for the [`report`] formats.

pub mod checkers;
pub mod config;
pub mod dom;
pub mod error;
pub mod finding;
pub mod issue;
pub mod report;
pub mod scanner;
pub mod style;

pub use checkers::{
    analyze_tab_index, audit_document, audit_source, check_alt_attributes,
    check_aria_compliance, check_contrast_ratio, check_semantic_html, Checker,
};
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use issue::Issue;
pub use style::{ComputedStyle, DocumentStyles, InlineStyles};
