//! Lexer configuration.
//!
//! Settings can be built in code or read from a TOML table such as:
//!
//! ```toml
//! strip_bom = true
//! max_diagnostics = 50
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Knobs that change how the lexer treats its input and reports problems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexerConfig {
    /// Skip a leading U+FEFF byte-order mark instead of reporting it.
    pub strip_bom: bool,

    /// Stop emitting lexical diagnostics after this many. Scanning itself is
    /// unaffected. `None` means no limit.
    pub max_diagnostics: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strip_bom: true,
            max_diagnostics: None,
        }
    }
}

impl LexerConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    ///
    /// ```
    /// use usec_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("max_diagnostics = 3").unwrap();
    /// assert_eq!(config.max_diagnostics, Some(3));
    /// assert!(config.strip_bom);
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns true if another diagnostic may be emitted after `emitted` so far.
    #[inline]
    pub(crate) fn allows_diagnostic(&self, emitted: usize) -> bool {
        self.max_diagnostics.map_or(true, |max| emitted < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_defaults() {
        let config = LexerConfig::default();
        assert!(config.strip_bom);
        assert_eq!(config.max_diagnostics, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = LexerConfig::from_toml_str("").unwrap();
        assert_eq!(config, LexerConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = LexerConfig::from_toml_str("strip_bom = false\nmax_diagnostics = 10").unwrap();
        assert!(!config.strip_bom);
        assert_eq!(config.max_diagnostics, Some(10));
    }

    #[test]
    fn test_invalid_toml() {
        let err = LexerConfig::from_toml_str("strip_bom = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid lexer configuration"));
    }

    #[test]
    fn test_allows_diagnostic() {
        let unlimited = LexerConfig::default();
        assert!(unlimited.allows_diagnostic(usize::MAX - 1));

        let capped = LexerConfig {
            max_diagnostics: Some(2),
            ..LexerConfig::default()
        };
        assert!(capped.allows_diagnostic(1));
        assert!(!capped.allows_diagnostic(2));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = LexerConfig {
            strip_bom: false,
            max_diagnostics: Some(7),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(LexerConfig::from_toml_str(&text).unwrap(), config);
    }
}
