//! GeoJSON feature-collection loading.

use std::path::Path;

use geojson::GeoJson;
use tracing::{debug, info, warn};

use crate::error::FeatureError;
use crate::feature::Feature;
use crate::validate::ValidationCollector;

/// What to do with a feature whose geometry or properties fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Drop the feature and log a warning.
    #[default]
    Skip,
    /// Fail the whole load, reporting every malformed feature.
    Reject,
}

/// Configuration for loading a feature collection.
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    policy: MalformedPolicy,
}

impl LoadConfig {
    /// Set the malformed-feature policy.
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the malformed-feature policy.
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }
}

/// Features that passed validation, in document order.
#[derive(Debug, Clone, Default)]
pub struct LoadedFeatures {
    features: Vec<Feature>,
    skipped: usize,
}

impl LoadedFeatures {
    /// Returns the valid features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Consumes the result, returning the valid features.
    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    /// Number of features dropped under [`MalformedPolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Reads and validates a GeoJSON feature collection from disk.
///
/// # Errors
///
/// Returns [`FeatureError::FileNotFound`] if `path` does not exist,
/// [`FeatureError::Io`] if it cannot be read, and otherwise whatever
/// [`parse_feature_collection`] returns.
pub fn read_feature_collection(
    path: &Path,
    config: &LoadConfig,
) -> Result<LoadedFeatures, FeatureError> {
    if !path.exists() {
        return Err(FeatureError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| FeatureError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), bytes = text.len(), "read feature collection");
    parse_feature_collection(&text, config)
}

/// Parses and validates a GeoJSON feature collection.
///
/// # Errors
///
/// Returns [`FeatureError::GeoJson`] on malformed GeoJSON,
/// [`FeatureError::NotAFeatureCollection`] for a bare feature or geometry,
/// and [`FeatureError::Validation`] under [`MalformedPolicy::Reject`] when any
/// feature is malformed.
pub fn parse_feature_collection(
    text: &str,
    config: &LoadConfig,
) -> Result<LoadedFeatures, FeatureError> {
    let geojson: GeoJson = text.parse()?;
    features_from_geojson(geojson, config)
}

/// Validates every feature of an already-parsed GeoJSON document.
///
/// # Errors
///
/// See [`parse_feature_collection`].
pub fn features_from_geojson(
    geojson: GeoJson,
    config: &LoadConfig,
) -> Result<LoadedFeatures, FeatureError> {
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) => return Err(FeatureError::NotAFeatureCollection { kind: "Feature" }),
        GeoJson::Geometry(_) => {
            return Err(FeatureError::NotAFeatureCollection { kind: "Geometry" });
        }
    };

    let mut all_errors = ValidationCollector::new();
    let mut loaded = LoadedFeatures::default();
    for (i, raw) in collection.features.iter().enumerate() {
        let mut c = ValidationCollector::new();
        let parsed = Feature::collect(raw, &mut c);
        match parsed {
            Some(feature) if c.is_empty() => loaded.features.push(feature),
            _ => {
                loaded.skipped += 1;
                if config.policy() == MalformedPolicy::Skip {
                    warn!(index = i, problems = %c.summary(), "skipping malformed feature");
                }
                all_errors.absorb(&format!("feature {i}"), c);
            }
        }
    }

    if config.policy() == MalformedPolicy::Reject {
        all_errors.finish()?;
    }
    debug!(
        n_features = loaded.features.len(),
        n_skipped = loaded.skipped,
        "validated feature collection"
    );
    Ok(loaded)
}
