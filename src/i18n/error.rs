//! Errors raised by locale configuration and dictionary loading.
//!
//! Content lookups never fail for missing keys or mismatched shapes; the only
//! lookup-time error is [`I18nError::UnknownLocale`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The requested locale is not part of the configured set.
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("No locales configured")]
    NoLocales,

    #[error("Default locale '{0}' is not among the configured locales")]
    DefaultLocaleNotConfigured(String),

    #[error("Invalid dictionary for locale '{locale}': {reason}")]
    InvalidDictionary { locale: String, reason: String },

    #[error("Failed to read dictionary file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl I18nError {
    /// Whether this is the lookup-time `UnknownLocale` failure.
    pub fn is_unknown_locale(&self) -> bool {
        matches!(self, I18nError::UnknownLocale(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_display() {
        let err = I18nError::UnknownLocale("fr".to_string());
        assert_eq!(err.to_string(), "Unknown locale code: 'fr'");
        assert!(err.is_unknown_locale());
    }

    #[test]
    fn test_invalid_dictionary_display() {
        let err = I18nError::InvalidDictionary {
            locale: "tr".to_string(),
            reason: "numbers are not content".to_string(),
        };
        assert!(err.to_string().contains("'tr'"));
        assert!(err.to_string().contains("numbers are not content"));
        assert!(!err.is_unknown_locale());
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: I18nError = parse_err.into();
        assert!(matches!(err, I18nError::Json(_)));
    }
}
