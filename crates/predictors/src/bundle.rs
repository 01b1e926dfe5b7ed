//! Loading and holding the full set of trained artifacts.
//!
//! The bundle is loaded once at process startup and then shared read-only
//! (wrap it in an `Arc`); inference never mutates it, so concurrent requests
//! need no locking.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{ModelError, Result};
use crate::models::{BoxClassifier, FillerRegressor, LabelEncoder};
use crate::tree::TreeEnsemble;

/// Artifact file names inside the models directory.
pub const ENCODER_FILE: &str = "label_encoder_box.json";
pub const CLASSIFIER_FILE: &str = "box_category_classifier.json";
pub const REGRESSOR_FILE: &str = "filler_amount_regressor.json";

/// The three predictors the recommendation pipeline consumes.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub encoder: LabelEncoder,
    pub classifier: BoxClassifier,
    pub regressor: FillerRegressor,
}

impl ModelBundle {
    /// Load all three artifacts from a directory and cross-validate them.
    pub fn load_from_files(dir: &Path) -> Result<Self> {
        info!("Loading model artifacts from {}", dir.display());

        let encoder: LabelEncoder = load_json(&dir.join(ENCODER_FILE))?;
        let classifier_ensemble: TreeEnsemble = load_json(&dir.join(CLASSIFIER_FILE))?;
        let regressor_ensemble: TreeEnsemble = load_json(&dir.join(REGRESSOR_FILE))?;

        let classifier = BoxClassifier::from_ensemble(classifier_ensemble)?;
        let regressor = FillerRegressor::from_ensemble(regressor_ensemble)?;
        Self::assemble(encoder, classifier, regressor)
    }

    /// Assemble a bundle from already-constructed predictors.
    ///
    /// Used by `load_from_files` and by tests that build artifacts in memory.
    pub fn assemble(
        encoder: LabelEncoder,
        classifier: BoxClassifier,
        regressor: FillerRegressor,
    ) -> Result<Self> {
        if encoder.is_empty() {
            return Err(ModelError::MalformedArtifact {
                reason: "label encoder has no classes".to_string(),
            });
        }
        if classifier.n_classes() != encoder.len() {
            return Err(ModelError::MalformedArtifact {
                reason: format!(
                    "classifier has {} classes but encoder knows {} labels",
                    classifier.n_classes(),
                    encoder.len()
                ),
            });
        }
        if classifier.n_features() != regressor.n_features() {
            return Err(ModelError::MalformedArtifact {
                reason: format!(
                    "classifier expects {} features but regressor expects {}",
                    classifier.n_features(),
                    regressor.n_features()
                ),
            });
        }

        info!(
            n_features = classifier.n_features(),
            n_classes = classifier.n_classes(),
            "Model bundle ready"
        );
        Ok(Self {
            encoder,
            classifier,
            regressor,
        })
    }

    /// Number of input features both trained models expect.
    pub fn n_features(&self) -> usize {
        self.classifier.n_features()
    }

    /// Predict and decode the box category for one feature vector.
    pub fn predict_category(&self, features: &[f64]) -> Result<String> {
        let index = self.classifier.predict(features)?;
        Ok(self.encoder.decode(index)?.to_string())
    }

    /// Predict the raw (unrounded) filler amount for one feature vector.
    pub fn predict_filler(&self, features: &[f64]) -> Result<f64> {
        self.regressor.predict(features)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| ModelError::ArtifactNotFound {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| ModelError::ParseError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
