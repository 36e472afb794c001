//! Resolution metrics.
//!
//! Counts how lookups were satisfied so content-authoring gaps (keys only the
//! default locale has, keys nobody has, keys stored with the wrong shape) are
//! visible without failing any render.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters shared by every clone of a `LocaleContext`.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Found in the requested locale with the requested shape
    exact_hits: AtomicUsize,

    /// Served from the default locale
    fallbacks: AtomicUsize,

    /// Absent from both the requested and the default locale
    misses: AtomicUsize,

    /// Found, but stored with a different shape than requested
    shape_mismatches: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_exact_hit(&self) {
        self.exact_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_shape_mismatch(&self) {
        self.shape_mismatches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn exact_hits(&self) -> usize {
        self.exact_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn shape_mismatches(&self) -> usize {
        self.shape_mismatches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let exact_hits = self.exact_hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let shape_mismatches = self.shape_mismatches();

        let total = exact_hits + fallbacks + misses + shape_mismatches;
        let coverage_rate = if total > 0 {
            ((exact_hits + fallbacks) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            exact_hits,
            fallbacks,
            misses,
            shape_mismatches,
            coverage_rate,
        }
    }
}

/// Snapshot of resolution statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub exact_hits: usize,
    pub fallbacks: usize,
    pub misses: usize,
    pub shape_mismatches: usize,

    /// Share of lookups that produced stored content, as a percentage (0-100)
    pub coverage_rate: f64,
}
