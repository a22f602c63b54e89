// SPDX-License-Identifier: PMPL-1.0-or-later
//! The record every checker produces.

use scraper::ElementRef;

/// A single finding against one element of a parsed document.
///
/// The element is a borrow into the document tree, so an `Issue` cannot
/// outlive the `Html` it was produced from. Use
/// [`crate::checkers::audit_document`] to get owned, serializable findings.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue<'a> {
    pub element: ElementRef<'a>,
    pub message: String,
}

impl<'a> Issue<'a> {
    pub fn new(element: ElementRef<'a>, message: impl Into<String>) -> Self {
        Self {
            element,
            message: message.into(),
        }
    }

    /// Lowercase tag name of the offending element
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }
}
