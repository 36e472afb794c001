//! Internationalization (i18n) module: localized content resolution.
//!
//! All locale configuration, dictionary loading and key lookup live here.
//!
//! # Architecture
//!
//! - `registry`: the configured locales and which one is the default
//! - `locale`: `Locale`, a code validated against a registry
//! - `content`: the shapes content can take (`Scalar`, `StringList`, `RecordList`)
//! - `dictionary`: nested JSON per locale, flattened to dotted keys
//! - `resolver`: `LocaleContext`, the lookup with default-locale fallback
//! - `validator`: cross-locale consistency checks run at startup
//! - `metrics`: counters of hits, fallbacks, misses and shape mismatches
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use arkaya_site::i18n::{LocaleContext, LocaleDictionary, Shape};
//!
//! let dictionary = Arc::new(LocaleDictionary::builtin("en")?);
//! let mut ctx = LocaleContext::new(dictionary);
//!
//! ctx.set_active_locale("tr")?;
//! let title = ctx.t("services.software.title");
//! let steps = ctx.resolve("services.process.steps", "en", Shape::RecordList)?;
//! ```

mod content;
mod dictionary;
mod error;
mod locale;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use content::{Record, ResolvedContent, Shape};
pub use dictionary::LocaleDictionary;
pub use error::I18nError;
pub use locale::Locale;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{interpolate, LocaleContext};
pub use validator::{DictionaryValidator, ValidationReport};
