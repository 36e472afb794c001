//! Locale type: a code validated against a registry.

use crate::i18n::{I18nError, LocaleRegistry};
use std::fmt;

/// A validated locale.
///
/// Only codes present in a [`LocaleRegistry`] can be turned into a `Locale`,
/// so holding one means lookups against that registry's dictionary cannot
/// fail with `UnknownLocale`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    code: String,
}

impl Locale {
    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is configured
    /// * `Err(I18nError::UnknownLocale)` otherwise
    pub fn from_code(registry: &LocaleRegistry, code: &str) -> Result<Locale, I18nError> {
        match registry.get_by_code(code) {
            Some(config) => Ok(Locale {
                code: config.code.clone(),
            }),
            None => Err(I18nError::UnknownLocale(code.to_string())),
        }
    }

    /// The registry's default locale.
    pub fn default_of(registry: &LocaleRegistry) -> Locale {
        Locale {
            code: registry.default_code().to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_default(&self, registry: &LocaleRegistry) -> bool {
        registry.default_code() == self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::builtin("en").unwrap()
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let locale = Locale::from_code(&registry(), "en").expect("Should succeed");
        assert_eq!(locale.code(), "en");
        assert!(locale.is_default(&registry()));
    }

    #[test]
    fn test_from_code_turkish() {
        let locale = Locale::from_code(&registry(), "tr").expect("Should succeed");
        assert_eq!(locale.code(), "tr");
        assert!(!locale.is_default(&registry()));
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code(&registry(), "fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code(&registry(), "").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Locale::from_code(&registry(), "EN").is_err());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_of() {
        let reg = LocaleRegistry::builtin("tr").unwrap();
        assert_eq!(Locale::default_of(&reg).code(), "tr");
    }

    #[test]
    fn test_display() {
        let locale = Locale::from_code(&registry(), "tr").unwrap();
        assert_eq!(locale.to_string(), "tr");
    }

    #[test]
    fn test_equality() {
        let a = Locale::from_code(&registry(), "en").unwrap();
        let b = Locale::default_of(&registry());
        assert_eq!(a, b);
    }
}
