// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility checkers.
//!
//! Each checker is a stateless, read-only pass over a parsed document that
//! returns [`Issue`]s in the order its query visits elements. The free
//! functions in each module are the direct API; the [`Checker`] trait lets
//! callers run them uniformly and turn issues into reportable findings.

pub mod alt_text;
pub mod aria;
pub mod contrast;
pub mod semantic;
pub mod tab_index;

use crate::config::AuditConfig;
use crate::dom;
use crate::finding::{Finding, FindingSet, Severity};
use crate::issue::Issue;
use scraper::Html;
use std::path::Path;
use tracing::debug;

pub use alt_text::{check_alt_attributes, AltTextChecker};
pub use aria::{check_aria_compliance, AriaChecker};
pub use contrast::{check_contrast_ratio, ContrastChecker};
pub use semantic::{check_semantic_html, SemanticChecker};
pub use tab_index::{analyze_tab_index, TabIndexChecker};

/// Trait implemented by all checkers
pub trait Checker: Send + Sync {
    /// Rule identifier used in reports (e.g. "WCAG-1.1.1-alt-text")
    fn id(&self) -> &str;

    /// Human-readable name of this checker
    fn name(&self) -> &str;

    /// WCAG success criterion this checker approximates
    fn wcag_criterion(&self) -> &str;

    /// Severity given to every issue this checker reports
    fn severity(&self) -> Severity;

    /// Scan a document. Checkers that take a subtree root scan from the
    /// document's root element.
    fn scan<'a>(&self, document: &'a Html) -> Vec<Issue<'a>>;
}

/// The enabled checkers, in their fixed run order
pub fn all_checkers(config: &AuditConfig) -> Vec<Box<dyn Checker>> {
    let mut checkers: Vec<Box<dyn Checker>> = Vec::new();

    if config.checks.alt_text {
        checkers.push(Box::new(AltTextChecker));
    }
    if config.checks.aria {
        checkers.push(Box::new(AriaChecker));
    }
    if config.checks.contrast {
        checkers.push(Box::new(ContrastChecker));
    }
    if config.checks.tab_index {
        checkers.push(Box::new(TabIndexChecker {
            flag_negative: config.tab_index.flag_negative,
        }));
    }
    if config.checks.semantic {
        checkers.push(Box::new(SemanticChecker));
    }

    checkers
}

/// Run every enabled checker over a parsed document and collect owned findings
pub fn audit_document(
    path: &Path,
    content: &str,
    document: &Html,
    config: &AuditConfig,
) -> FindingSet {
    let mut findings = FindingSet::new();

    for checker in all_checkers(config) {
        let issues = checker.scan(document);
        debug!("{}: {} issue(s) in {}", checker.name(), issues.len(), path.display());

        for issue in issues {
            findings.add(to_finding(checker.as_ref(), path, content, document, &issue));
        }
    }

    findings
}

/// Parse HTML source and audit it
pub fn audit_source(path: &Path, content: &str, config: &AuditConfig) -> FindingSet {
    let document = Html::parse_document(content);
    audit_document(path, content, &document, config)
}

fn to_finding(
    checker: &dyn Checker,
    path: &Path,
    content: &str,
    document: &Html,
    issue: &Issue<'_>,
) -> Finding {
    Finding::new(checker.id(), checker.severity(), &issue.message)
        .with_wcag(checker.wcag_criterion())
        .with_rule_name(checker.name())
        .with_file(path.to_path_buf())
        .with_line(dom::estimate_line(content, document, issue.element))
        .with_element(&dom::opening_tag(issue.element))
}
