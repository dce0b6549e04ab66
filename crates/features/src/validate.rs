//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering every problem found in a
//! feature (or a whole collection) into a single
//! [`FeatureError::Validation`].

use crate::error::FeatureError;

/// Accumulates validation errors and converts them into a single
/// [`FeatureError::Validation`].
#[derive(Debug, Default)]
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record every message of another collector, prefixed with `context`.
    pub(crate) fn absorb(&mut self, context: &str, other: ValidationCollector) {
        self.errors
            .extend(other.errors.into_iter().map(|e| format!("{context}: {e}")));
    }

    /// Returns `true` when no errors have been recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages joined with `"; "`.
    pub(crate) fn summary(&self) -> String {
        self.errors.join("; ")
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(FeatureError::Validation { count, details })` otherwise.
    pub(crate) fn finish(self) -> Result<(), FeatureError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FeatureError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_finishes_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("a");
        c.push("b");
        assert_eq!(c.len(), 2);
        match c.finish() {
            Err(FeatureError::Validation { count, details }) => {
                assert_eq!(count, 2);
                assert_eq!(details, "a; b");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn absorb_prefixes_context() {
        let mut inner = ValidationCollector::new();
        inner.push("missing property 'Zone'");
        let mut outer = ValidationCollector::new();
        outer.absorb("feature 2", inner);
        assert_eq!(outer.summary(), "feature 2: missing property 'Zone'");
    }
}
