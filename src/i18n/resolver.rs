//! Locale resolution: dotted key + locale + expected shape to content.
//!
//! Lookup order is the requested locale, then the default locale, then the
//! empty value of the requested shape. Only an unknown locale is an error;
//! missing keys and shape mismatches degrade to empty content so rendering
//! stays total.

use crate::i18n::{
    I18nError, Locale, LocaleConfig, LocaleDictionary, LocaleRegistry, Record,
    ResolutionMetrics, ResolvedContent, Shape,
};
use regex::{Captures, Regex};
use std::sync::{Arc, OnceLock};
use tracing::debug;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("valid regex"))
}

/// Active locale plus a shared reference to the dictionary.
///
/// Contexts are cheap to clone. A request handler clones the application's
/// context and switches its own copy with [`LocaleContext::set_active_locale`];
/// no other context observes the change. Metrics are shared across clones.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    dictionary: Arc<LocaleDictionary>,
    active: Locale,
    metrics: Arc<ResolutionMetrics>,
}

impl LocaleContext {
    /// Create a context whose active locale is the dictionary's default.
    pub fn new(dictionary: Arc<LocaleDictionary>) -> Self {
        Self::with_metrics(dictionary, Arc::new(ResolutionMetrics::new()))
    }

    pub fn with_metrics(dictionary: Arc<LocaleDictionary>, metrics: Arc<ResolutionMetrics>) -> Self {
        let active = Locale::default_of(dictionary.registry());
        Self {
            dictionary,
            active,
            metrics,
        }
    }

    pub fn dictionary(&self) -> &LocaleDictionary {
        &self.dictionary
    }

    pub fn registry(&self) -> &LocaleRegistry {
        self.dictionary.registry()
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }

    pub fn active_locale(&self) -> &Locale {
        &self.active
    }

    /// The locale the language switch should offer next.
    pub fn toggle_target(&self) -> &LocaleConfig {
        self.registry().toggle_target(self.active.code())
    }

    /// Switch the active locale.
    ///
    /// On `UnknownLocale` the previous active locale is kept.
    pub fn set_active_locale(&mut self, code: &str) -> Result<(), I18nError> {
        let locale = Locale::from_code(self.registry(), code)?;
        if locale != self.active {
            debug!("Active locale {} -> {}", self.active, locale);
        }
        self.active = locale;
        Ok(())
    }

    /// Resolve `key` in an explicit locale.
    pub fn resolve(
        &self,
        key: &str,
        locale: &str,
        shape: Shape,
    ) -> Result<ResolvedContent, I18nError> {
        let locale = Locale::from_code(self.registry(), locale)?;
        Ok(self.lookup(key, locale.code(), shape))
    }

    /// Resolve `key` in the active locale.
    pub fn resolve_active(&self, key: &str, shape: Shape) -> ResolvedContent {
        self.lookup(key, self.active.code(), shape)
    }

    /// Scalar text in the active locale, `""` when missing.
    pub fn t(&self, key: &str) -> String {
        self.resolve_active(key, Shape::Scalar).into_text()
    }

    /// Scalar text with `{{name}}` placeholders replaced from `args`.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    /// String list in the active locale, empty when missing.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.resolve_active(key, Shape::List).into_list()
    }

    /// Record list in the active locale, empty when missing.
    pub fn records(&self, key: &str) -> Vec<Record> {
        self.resolve_active(key, Shape::RecordList).into_records()
    }

    fn lookup(&self, key: &str, code: &str, shape: Shape) -> ResolvedContent {
        if key.is_empty() {
            debug!("Empty content key requested");
            self.metrics.record_miss();
            return ResolvedContent::empty(shape);
        }

        if let Some(stored) = self.dictionary.get(code, key) {
            return self.conform(stored, key, code, shape, false);
        }

        let default_code = self.registry().default_code();
        if default_code != code {
            if let Some(stored) = self.dictionary.get(default_code, key) {
                return self.conform(stored, key, default_code, shape, true);
            }
        }

        debug!("Missing content '{}' for locale '{}'", key, code);
        self.metrics.record_miss();
        ResolvedContent::empty(shape)
    }

    fn conform(
        &self,
        stored: &ResolvedContent,
        key: &str,
        code: &str,
        shape: Shape,
        fallback: bool,
    ) -> ResolvedContent {
        match stored.conform(shape) {
            Some(content) => {
                if fallback {
                    self.metrics.record_fallback();
                } else {
                    self.metrics.record_exact_hit();
                }
                content
            }
            None => {
                debug!(
                    "Content '{}' in locale '{}' is {:?}, requested {:?}",
                    key,
                    code,
                    stored.shape(),
                    shape
                );
                self.metrics.record_shape_mismatch();
                ResolvedContent::empty(shape)
            }
        }
    }
}

/// Replace `{{name}}` placeholders in `template`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
