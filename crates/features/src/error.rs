//! Error types for ozone-features.

use std::path::PathBuf;

/// Error type for all fallible operations in the ozone-features crate.
///
/// Covers file access, GeoJSON syntax, documents of the wrong GeoJSON kind,
/// and property/geometry validation failures.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while reading a file.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the GeoJSON parser.
    #[error("geojson error: {reason}")]
    GeoJson {
        /// Description of the underlying GeoJSON failure.
        reason: String,
    },

    /// Returned when the document is valid GeoJSON but not a feature collection.
    #[error("expected a FeatureCollection, got {kind}")]
    NotAFeatureCollection {
        /// GeoJSON object kind that was found.
        kind: &'static str,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<geojson::Error> for FeatureError {
    fn from(e: geojson::Error) -> Self {
        FeatureError::GeoJson {
            reason: e.to_string(),
        }
    }
}
