//! Locale dictionaries: nested JSON per locale, flattened to dotted keys.
//!
//! A dictionary is built once at startup and never mutated afterwards.
//! Contexts share it behind an `Arc`.

use crate::i18n::{I18nError, LocaleRegistry, Record, ResolvedContent};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_EN: &str = include_str!("../../locales/en.json");
const BUILTIN_TR: &str = include_str!("../../locales/tr.json");

type Entries = HashMap<String, ResolvedContent>;

/// All content for every configured locale.
#[derive(Debug, Clone)]
pub struct LocaleDictionary {
    registry: LocaleRegistry,
    entries: HashMap<String, Entries>,
}

impl LocaleDictionary {
    /// Build from already-flattened entries.
    ///
    /// Configured locales without entries get an empty table, so every key
    /// falls back to the default locale. Entries for locales the registry
    /// does not know are rejected.
    pub fn from_entries(
        registry: LocaleRegistry,
        mut entries: HashMap<String, Entries>,
    ) -> Result<Self, I18nError> {
        if let Some(stray) = entries.keys().find(|code| !registry.is_configured(code)) {
            return Err(I18nError::InvalidDictionary {
                locale: stray.clone(),
                reason: "locale is not configured".to_string(),
            });
        }
        for config in registry.list() {
            entries.entry(config.code.clone()).or_default();
        }

        Ok(Self { registry, entries })
    }

    /// Build from one parsed JSON document per locale code.
    pub fn from_values(
        registry: LocaleRegistry,
        values: HashMap<String, Value>,
    ) -> Result<Self, I18nError> {
        let mut entries = HashMap::new();
        for (code, value) in values {
            let flat = flatten(&code, &value)?;
            debug!("Loaded {} keys for locale '{}'", flat.len(), code);
            entries.insert(code, flat);
        }
        Self::from_entries(registry, entries)
    }

    /// Parse one JSON string per locale code.
    pub fn from_json_strs(
        registry: LocaleRegistry,
        sources: &[(&str, &str)],
    ) -> Result<Self, I18nError> {
        let mut values = HashMap::new();
        for (code, source) in sources {
            values.insert(code.to_string(), serde_json::from_str(source)?);
        }
        Self::from_values(registry, values)
    }

    /// The English and Turkish dictionaries compiled into the binary.
    pub fn builtin(default_code: &str) -> Result<Self, I18nError> {
        let registry = LocaleRegistry::builtin(default_code)?;
        Self::from_json_strs(registry, &[("en", BUILTIN_EN), ("tr", BUILTIN_TR)])
    }

    /// Load `<code>.json` from `dir` for every configured locale.
    pub fn load_dir(registry: LocaleRegistry, dir: &Path) -> Result<Self, I18nError> {
        let mut values = HashMap::new();
        for config in registry.list() {
            let path = dir.join(format!("{}.json", config.code));
            let source = std::fs::read_to_string(&path).map_err(|source| I18nError::Io {
                path: path.clone(),
                source,
            })?;
            info!("Loading dictionary for '{}' from {}", config.code, path.display());
            values.insert(config.code.clone(), serde_json::from_str(&source)?);
        }
        Self::from_values(registry, values)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Raw lookup of a stored value, without fallback or shape handling.
    pub fn get(&self, locale: &str, key: &str) -> Option<&ResolvedContent> {
        self.entries.get(locale).and_then(|table| table.get(key))
    }

    /// All entries for one locale.
    pub fn entries(&self, locale: &str) -> Option<&HashMap<String, ResolvedContent>> {
        self.entries.get(locale)
    }
}

fn invalid(locale: &str, reason: String) -> I18nError {
    I18nError::InvalidDictionary {
        locale: locale.to_string(),
        reason,
    }
}

/// Flatten a nested JSON document into dotted keys.
fn flatten(locale: &str, root: &Value) -> Result<Entries, I18nError> {
    if !root.is_object() {
        return Err(invalid(locale, "top level must be an object".to_string()));
    }
    let mut out = HashMap::new();
    flatten_into(locale, "", root, &mut out)?;
    Ok(out)
}

fn flatten_into(
    locale: &str,
    prefix: &str,
    value: &Value,
    out: &mut Entries,
) -> Result<(), I18nError> {
    match value {
        Value::Object(map) => {
            for (segment, child) in map {
                let key = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{}.{}", prefix, segment)
                };
                flatten_into(locale, &key, child, out)?;
            }
        }
        Value::String(text) => {
            insert_unique(locale, prefix, ResolvedContent::Scalar(text.clone()), out)?;
        }
        Value::Array(items) => {
            insert_unique(locale, prefix, parse_list(locale, prefix, items)?, out)?;
        }
        other => {
            return Err(invalid(
                locale,
                format!("key '{}' holds unsupported value {}", prefix, other),
            ));
        }
    }
    Ok(())
}

/// A literal dotted key and a nested path may flatten to the same key.
fn insert_unique(
    locale: &str,
    key: &str,
    content: ResolvedContent,
    out: &mut Entries,
) -> Result<(), I18nError> {
    if out.contains_key(key) {
        return Err(invalid(locale, format!("key '{}' is defined more than once", key)));
    }
    out.insert(key.to_string(), content);
    Ok(())
}

fn parse_list(locale: &str, key: &str, items: &[Value]) -> Result<ResolvedContent, I18nError> {
    if items.iter().all(Value::is_string) {
        let strings = items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect();
        return Ok(ResolvedContent::StringList(strings));
    }

    let records = items
        .iter()
        .map(|item| serde_json::from_value::<Record>(item.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            invalid(
                locale,
                format!(
                    "key '{}' must be a list of strings or of {{title, description}}: {}",
                    key, e
                ),
            )
        })?;
    Ok(ResolvedContent::RecordList(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::builtin("en").unwrap()
    }

    // ==================== Flattening Tests ====================

    #[test]
    fn test_flatten_nested_objects() {
        let value = json!({
            "services": {
                "software": { "title": "Software" }
            }
        });
        let flat = flatten("en", &value).unwrap();
        assert_eq!(
            flat.get("services.software.title"),
            Some(&ResolvedContent::Scalar("Software".to_string()))
        );
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn test_flatten_literal_dotted_key() {
        let flat = flatten("en", &json!({ "a.b": "Hello" })).unwrap();
        assert_eq!(
            flat.get("a.b"),
            Some(&ResolvedContent::Scalar("Hello".to_string()))
        );
    }

    #[test]
    fn test_flatten_rejects_dotted_key_colliding_with_nested_path() {
        let value = json!({ "a.b": "literal", "a": { "b": ["nested"] } });
        let err = flatten("en", &value).unwrap_err();
        assert!(matches!(err, I18nError::InvalidDictionary { .. }));
        assert!(err.to_string().contains("'a.b'"));
    }

    #[test]
    fn test_flatten_string_list() {
        let flat = flatten("en", &json!({ "features": ["one", "two"] })).unwrap();
        assert_eq!(
            flat.get("features"),
            Some(&ResolvedContent::StringList(vec![
                "one".to_string(),
                "two".to_string()
            ]))
        );
    }

    #[test]
    fn test_flatten_record_list() {
        let flat = flatten(
            "en",
            &json!({ "steps": [{ "title": "Plan", "description": "We plan" }] }),
        )
        .unwrap();
        assert_eq!(
            flat.get("steps"),
            Some(&ResolvedContent::RecordList(vec![Record::new(
                "Plan", "We plan"
            )]))
        );
    }

    #[test]
    fn test_flatten_empty_list_is_string_list() {
        let flat = flatten("en", &json!({ "empty": [] })).unwrap();
        assert_eq!(flat.get("empty"), Some(&ResolvedContent::StringList(vec![])));
    }

    #[test]
    fn test_flatten_rejects_numbers() {
        let err = flatten("tr", &json!({ "count": 3 })).unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_flatten_rejects_mixed_list() {
        let err = flatten("en", &json!({ "mixed": ["a", { "title": "t" }] })).unwrap_err();
        assert!(matches!(err, I18nError::InvalidDictionary { .. }));
    }

    #[test]
    fn test_flatten_rejects_non_object_root() {
        assert!(flatten("en", &json!(["a"])).is_err());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_from_entries_fills_missing_locales() {
        let mut entries = HashMap::new();
        let mut en = HashMap::new();
        en.insert(
            "a.b".to_string(),
            ResolvedContent::Scalar("Hello".to_string()),
        );
        entries.insert("en".to_string(), en);

        let dict = LocaleDictionary::from_entries(registry(), entries).unwrap();
        assert!(dict.entries("tr").unwrap().is_empty());
        assert!(dict.get("en", "a.b").is_some());
    }

    #[test]
    fn test_from_entries_rejects_unconfigured_locale() {
        let mut entries = HashMap::new();
        entries.insert("fr".to_string(), HashMap::new());
        let err = LocaleDictionary::from_entries(registry(), entries).unwrap_err();
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_from_json_strs_rejects_bad_json() {
        let result = LocaleDictionary::from_json_strs(registry(), &[("en", "{oops")]);
        assert!(matches!(result, Err(I18nError::Json(_))));
    }

    #[test]
    fn test_builtin_dictionaries_load() {
        let dict = LocaleDictionary::builtin("en").unwrap();
        assert!(matches!(
            dict.get("en", "navigation.home"),
            Some(ResolvedContent::Scalar(_))
        ));
        assert!(matches!(
            dict.get("tr", "services.process.steps"),
            Some(ResolvedContent::RecordList(_))
        ));
        assert!(matches!(
            dict.get("en", "products.katip.features.list"),
            Some(ResolvedContent::StringList(_))
        ));
    }

    #[test]
    fn test_load_dir_reads_each_locale() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"hero":{"title":"Hi"}}"#).unwrap();
        std::fs::write(dir.path().join("tr.json"), r#"{"hero":{"title":"Merhaba"}}"#).unwrap();

        let dict = LocaleDictionary::load_dir(registry(), dir.path()).unwrap();
        assert_eq!(
            dict.get("tr", "hero.title"),
            Some(&ResolvedContent::Scalar("Merhaba".to_string()))
        );
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), "{}").unwrap();

        let err = LocaleDictionary::load_dir(registry(), dir.path()).unwrap_err();
        assert!(matches!(err, I18nError::Io { .. }));
        assert!(err.to_string().contains("tr.json"));
    }
}
