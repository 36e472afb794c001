//! Dictionary consistency validation.
//!
//! Compares every locale against the default locale so authoring mistakes
//! that lookups silently paper over (missing keys, wrong shapes, dropped
//! placeholders) show up once in the startup log.

use crate::i18n::{LocaleDictionary, ResolvedContent, Shape};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make content unreachable for some locale
    pub errors: Vec<String>,

    /// Gaps that are covered by fallback but probably unintended
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary consistency.
pub struct DictionaryValidator;

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate all locales of `dictionary`.
    ///
    /// Checks that:
    /// - every key segment is a plain identifier
    /// - keys of the default locale exist in the other locales
    /// - a key has the same shape in every locale
    /// - scalar texts use the same `{{placeholders}}` in every locale
    pub fn validate(dictionary: &LocaleDictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = dictionary.registry();
        let default_code = registry.default_code();

        for config in registry.list() {
            if let Some(entries) = dictionary.entries(&config.code) {
                let keys: BTreeSet<&String> = entries.keys().collect();
                for key in keys {
                    if !Self::is_valid_key(key) {
                        report.errors.push(format!(
                            "[{}] Invalid key '{}': segments must match [A-Za-z0-9_]+",
                            config.code, key
                        ));
                    }
                }
            }
        }

        let Some(default_entries) = dictionary.entries(default_code) else {
            return report;
        };
        let default_keys: BTreeSet<&String> = default_entries.keys().collect();

        for config in registry.list().iter().filter(|c| c.code != default_code) {
            let code = &config.code;
            let Some(entries) = dictionary.entries(code) else {
                continue;
            };

            for key in &default_keys {
                let reference = &default_entries[key.as_str()];
                match entries.get(key.as_str()) {
                    None => report.warnings.push(format!(
                        "[{}] Missing key '{}' (falls back to '{}')",
                        code, key, default_code
                    )),
                    Some(content) => {
                        if !Self::same_shape(reference, content) {
                            report.errors.push(format!(
                                "[{}] Shape mismatch for '{}': {:?} in '{}', {:?} here",
                                code,
                                key,
                                reference.shape(),
                                default_code,
                                content.shape()
                            ));
                        } else if let (
                            ResolvedContent::Scalar(expected),
                            ResolvedContent::Scalar(actual),
                        ) = (reference, content)
                        {
                            let expected = Self::extract_placeholders(expected);
                            let actual = Self::extract_placeholders(actual);
                            if expected != actual {
                                report.warnings.push(format!(
                                    "[{}] Placeholder mismatch for '{}': default has {:?}, this locale has {:?}",
                                    code, key, expected, actual
                                ));
                            }
                        }
                    }
                }
            }

            let mut extra: Vec<&String> = entries
                .keys()
                .filter(|key| !default_entries.contains_key(key.as_str()))
                .collect();
            extra.sort();
            for key in extra {
                report.warnings.push(format!(
                    "[{}] Key '{}' is not present in default locale '{}'",
                    code, key, default_code
                ));
            }
        }

        report
    }

    fn is_valid_key(key: &str) -> bool {
        let regex = SEGMENT_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());
        key.split('.').all(|segment| regex.is_match(segment))
    }

    /// Empty lists carry no shape information and agree with either list shape.
    fn same_shape(a: &ResolvedContent, b: &ResolvedContent) -> bool {
        match (a.shape(), b.shape()) {
            (Shape::List, Shape::RecordList) | (Shape::RecordList, Shape::List) => {
                a.matches(b.shape()) || b.matches(a.shape())
            }
            (x, y) => x == y,
        }
    }

    /// Extract the sorted set of `{{placeholder}}` names in `text`
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
