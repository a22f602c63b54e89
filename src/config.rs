// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for a11y-audit
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty file (or no file) gives the full audit.

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub checks: ChecksConfig,
    pub tab_index: TabIndexConfig,
    /// File extensions the directory scanner picks up
    pub extensions: Vec<String>,
    /// Directory names the directory scanner never descends into
    pub exclude: Vec<String>,
}

/// Per-checker enable flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    pub alt_text: bool,
    pub aria: bool,
    pub contrast: bool,
    pub tab_index: bool,
    pub semantic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabIndexConfig {
    /// Flag tabindex values that compare below zero ("-1" included).
    ///
    /// When false only values that do not convert to a number are flagged.
    pub flag_negative: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            checks: ChecksConfig::default(),
            tab_index: TabIndexConfig::default(),
            extensions: vec!["html".to_string(), "htm".to_string()],
            exclude: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "target".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "vendor".to_string(),
                "coverage".to_string(),
            ],
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            alt_text: true,
            aria: true,
            contrast: true,
            tab_index: true,
            semantic: true,
        }
    }
}

impl Default for TabIndexConfig {
    fn default() -> Self {
        Self { flag_negative: true }
    }
}

/// Load configuration from a TOML file, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<AuditConfig> {
    if !path.exists() {
        return Ok(AuditConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<AuditConfig> {
    toml::from_str(content).map_err(|e| AuditError::Config(format!("TOML parse error: {}", e)))
}
