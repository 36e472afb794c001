//! Locale registry: the configured set of locales and the default among them.
//!
//! A registry is an ordinary value owned by whoever builds the dictionary.
//! There is no process-wide instance; contexts that need it share it through
//! the dictionary's `Arc`.

use crate::i18n::I18nError;

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Language code (e.g., "en", "tr")
    pub code: String,

    /// English name of the locale (e.g., "English", "Turkish")
    pub name: String,

    /// Native name of the locale (e.g., "English", "Türkçe")
    pub native_name: String,
}

impl LocaleConfig {
    pub fn new(code: &str, name: &str, native_name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }
}

/// Ordered set of configured locales.
///
/// Order matters: it is the cycle order used by [`LocaleRegistry::toggle_target`].
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_code: String,
}

impl LocaleRegistry {
    /// Build a registry, checking that it is non-empty and that the default
    /// locale is one of its members.
    pub fn new(locales: Vec<LocaleConfig>, default_code: &str) -> Result<Self, I18nError> {
        if locales.is_empty() {
            return Err(I18nError::NoLocales);
        }
        if !locales.iter().any(|l| l.code == default_code) {
            return Err(I18nError::DefaultLocaleNotConfigured(
                default_code.to_string(),
            ));
        }

        Ok(Self {
            locales,
            default_code: default_code.to_string(),
        })
    }

    /// The locales the site ships with: English and Turkish.
    pub fn builtin(default_code: &str) -> Result<Self, I18nError> {
        Self::new(builtin_locales(), default_code)
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Whether `code` names a configured locale.
    pub fn is_configured(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All configured locales in registry order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The default (fallback) locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        // `new` guarantees the default code is present.
        self.get_by_code(&self.default_code)
            .unwrap_or(&self.locales[0])
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// The locale the language switch offers while `current` is active.
    ///
    /// With two locales this is simply "the other one". Unknown codes map to
    /// the first configured locale.
    pub fn toggle_target(&self, current: &str) -> &LocaleConfig {
        match self.locales.iter().position(|l| l.code == current) {
            Some(idx) => &self.locales[(idx + 1) % self.locales.len()],
            None => &self.locales[0],
        }
    }
}

fn builtin_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig::new("en", "English", "English"),
        LocaleConfig::new("tr", "Turkish", "Türkçe"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_builtin_contains_english_and_turkish() {
        let registry = LocaleRegistry::builtin("en").unwrap();
        assert_eq!(registry.list().len(), 2);
        assert!(registry.is_configured("en"));
        assert!(registry.is_configured("tr"));
        assert!(!registry.is_configured("fr"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = LocaleRegistry::new(vec![], "en");
        assert!(matches!(result, Err(I18nError::NoLocales)));
    }

    #[test]
    fn test_new_rejects_unconfigured_default() {
        let result = LocaleRegistry::builtin("de");
        assert!(matches!(
            result,
            Err(I18nError::DefaultLocaleNotConfigured(code)) if code == "de"
        ));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code_turkish() {
        let registry = LocaleRegistry::builtin("en").unwrap();
        let config = registry.get_by_code("tr").unwrap();
        assert_eq!(config.name, "Turkish");
        assert_eq!(config.native_name, "Türkçe");
    }

    #[test]
    fn test_default_locale() {
        let registry = LocaleRegistry::builtin("tr").unwrap();
        assert_eq!(registry.default_locale().code, "tr");
        assert_eq!(registry.default_code(), "tr");
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggle_target_two_locales() {
        let registry = LocaleRegistry::builtin("en").unwrap();
        assert_eq!(registry.toggle_target("en").code, "tr");
        assert_eq!(registry.toggle_target("tr").code, "en");
    }

    #[test]
    fn test_toggle_target_cycles_three_locales() {
        let registry = LocaleRegistry::new(
            vec![
                LocaleConfig::new("en", "English", "English"),
                LocaleConfig::new("tr", "Turkish", "Türkçe"),
                LocaleConfig::new("de", "German", "Deutsch"),
            ],
            "en",
        )
        .unwrap();
        assert_eq!(registry.toggle_target("tr").code, "de");
        assert_eq!(registry.toggle_target("de").code, "en");
    }

    #[test]
    fn test_toggle_target_unknown_falls_to_first() {
        let registry = LocaleRegistry::builtin("en").unwrap();
        assert_eq!(registry.toggle_target("xx").code, "en");
    }
}
