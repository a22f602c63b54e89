// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-audit
//!
//! Checkers never fail; malformed input simply produces no issue. These
//! errors cover the surrounding plumbing: reading files and loading config.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
