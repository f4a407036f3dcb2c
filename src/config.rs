//! Scan configuration.
//!
//! This module provides [`ScanConfig`], the keyword settings handed to
//! [`LineScanner`](crate::scanner::LineScanner). The keyword marks the
//! "cleaning started" message line in the exported talk history and defaults
//! to the phrase LINE users of this tool post.
//!
//! # Example
//!
//! ```rust
//! use sweeplog::config::ScanConfig;
//!
//! let config = ScanConfig::new().with_keyword("清掃完了");
//! assert_eq!(config.keyword, "清掃完了");
//! ```

use serde::{Deserialize, Serialize};

/// The default keyword marking a cleaning-started message.
pub const DEFAULT_KEYWORD: &str = "いまから清掃を開始します";

/// Configuration for a scan pass over an exported talk history.
///
/// The keyword is matched as a literal, case-sensitive substring against
/// each line. An empty keyword is rejected when the scanner is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Literal substring marking an event line (default: [`DEFAULT_KEYWORD`]).
    pub keyword: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with the default keyword.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword to search for.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keyword() {
        let config = ScanConfig::new();
        assert_eq!(config.keyword, DEFAULT_KEYWORD);
        assert_eq!(config.keyword, "いまから清掃を開始します");
    }

    #[test]
    fn test_with_keyword() {
        let config = ScanConfig::new().with_keyword("done");
        assert_eq!(config.keyword, "done");
    }

    #[test]
    fn test_config_serde() {
        let config = ScanConfig::new().with_keyword("清掃");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
