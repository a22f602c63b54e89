// SPDX-License-Identifier: PMPL-1.0-or-later
//! Owned, serializable findings.
//!
//! An [`Issue`](crate::issue::Issue) borrows the document it came from; a
//! [`Finding`] is what survives once the document is dropped, carrying a
//! file/line location and a snapshot of the element's opening tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the audit
    Error,
    /// Should be addressed
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A finding from an accessibility audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier
    pub id: Uuid,
    /// Producing tool
    pub source: String,
    /// Rule/check identifier (e.g., "WCAG-1.1.1-alt-text")
    pub rule_id: String,
    /// Human-readable rule name
    pub rule_name: String,
    pub severity: Severity,
    /// Message produced by the checker
    pub message: String,
    /// Category (e.g., "accessibility/wcag")
    pub category: String,
    /// File where issue was found
    pub file: Option<PathBuf>,
    /// Estimated line number (1-indexed)
    pub line: Option<usize>,
    /// Opening tag of the element involved
    pub element: Option<String>,
    /// WCAG criterion reference
    pub wcag_criterion: Option<String>,
    /// When this finding was created
    pub created_at: DateTime<Utc>,
}

impl Finding {
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: "a11y-audit".to_string(),
            rule_id: rule_id.to_string(),
            rule_name: rule_id.to_string(),
            severity,
            message: message.to_string(),
            category: "accessibility/wcag".to_string(),
            file: None,
            line: None,
            element: None,
            wcag_criterion: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_wcag(mut self, criterion: &str) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self
    }

    pub fn with_rule_name(mut self, name: &str) -> Self {
        self.rule_name = name.to_string();
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }

    /// Location string for display
    pub fn location_string(&self) -> String {
        match (&self.file, self.line) {
            (Some(f), Some(l)) => format!("{}:{}", f.display(), l),
            (Some(f), None) => f.display().to_string(),
            _ => "<unknown>".to_string(),
        }
    }
}

/// A collection of findings with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    pub findings: Vec<Finding>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    pub fn by_rule(&self, rule_id: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.rule_id == rule_id).collect()
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_builder() {
        let finding = Finding::new("WCAG-1.1.1-alt-text", Severity::Error, "Image is missing an alt attribute.")
            .with_wcag("1.1.1")
            .with_file(PathBuf::from("index.html"))
            .with_line(12);
        assert_eq!(finding.location_string(), "index.html:12");
        assert_eq!(finding.wcag_criterion.as_deref(), Some("1.1.1"));
        assert_eq!(finding.source, "a11y-audit");
    }

    #[test]
    fn test_finding_set_queries() {
        let mut set = FindingSet::new();
        set.add(Finding::new("a", Severity::Error, "x"));
        set.add(Finding::new("b", Severity::Warning, "y"));
        set.add(Finding::new("b", Severity::Warning, "z"));
        assert_eq!(set.len(), 3);
        assert!(set.has_errors());
        assert_eq!(set.warnings().len(), 2);
        assert_eq!(set.by_rule("b").len(), 2);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).expect("serializable");
        assert_eq!(json, "\"warning\"");
    }
}
