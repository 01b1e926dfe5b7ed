//! The three predictor types: classifier, regressor, and label encoder.
//!
//! These wrap [`TreeEnsemble`] artifacts behind the small inference contract
//! the pipeline consumes: a class index from the classifier, a real number
//! from the regressor, and index-to-label decoding from the encoder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::tree::TreeEnsemble;

/// Box-category classifier.
///
/// Each tree leaf carries a per-class score distribution; prediction sums
/// the distributions across trees and takes the argmax.
#[derive(Debug, Clone)]
pub struct BoxClassifier {
    ensemble: TreeEnsemble,
}

impl BoxClassifier {
    /// Wrap a validated ensemble. Classifiers need at least two classes.
    pub fn from_ensemble(ensemble: TreeEnsemble) -> Result<Self> {
        ensemble.validate()?;
        if ensemble.n_outputs < 2 {
            return Err(ModelError::MalformedArtifact {
                reason: format!(
                    "classifier needs at least 2 classes, artifact has {}",
                    ensemble.n_outputs
                ),
            });
        }
        Ok(Self { ensemble })
    }

    /// Number of classes this classifier distinguishes.
    pub fn n_classes(&self) -> usize {
        self.ensemble.n_outputs
    }

    /// Number of input features the trained model expects.
    pub fn n_features(&self) -> usize {
        self.ensemble.n_features
    }

    /// Predict the encoded class index for one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        self.ensemble.check_input(features)?;

        let mut scores = vec![0.0f64; self.ensemble.n_outputs];
        for tree in &self.ensemble.trees {
            for (total, leaf) in scores.iter_mut().zip(tree.decide(features)) {
                *total += leaf;
            }
        }

        // Argmax; ties resolve to the lowest index, matching numpy.argmax
        let (best, score) = scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bi, bs), (i, &s)| {
                if s > bs { (i, s) } else { (bi, bs) }
            });
        debug!(class = best, score, "classifier prediction");
        Ok(best)
    }
}

/// Filler-amount regressor. Prediction is the mean of the tree leaf values.
#[derive(Debug, Clone)]
pub struct FillerRegressor {
    ensemble: TreeEnsemble,
}

impl FillerRegressor {
    /// Wrap a validated ensemble. Regressors are single-output.
    pub fn from_ensemble(ensemble: TreeEnsemble) -> Result<Self> {
        ensemble.validate()?;
        if ensemble.n_outputs != 1 {
            return Err(ModelError::MalformedArtifact {
                reason: format!(
                    "regressor must be single-output, artifact has {}",
                    ensemble.n_outputs
                ),
            });
        }
        Ok(Self { ensemble })
    }

    /// Number of input features the trained model expects.
    pub fn n_features(&self) -> usize {
        self.ensemble.n_features
    }

    /// Predict the filler amount for one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        self.ensemble.check_input(features)?;

        let sum: f64 = self
            .ensemble
            .trees
            .iter()
            .map(|tree| tree.decide(features)[0])
            .sum();
        let prediction = sum / self.ensemble.trees.len() as f64;
        debug!(prediction, "regressor prediction");
        Ok(prediction)
    }
}

/// Maps encoded class indices back to their string labels.
///
/// The class list is ordered exactly as the classifier was trained
/// (scikit-learn's LabelEncoder sorts labels lexicographically).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Decode a class index into its label.
    pub fn decode(&self, index: usize) -> Result<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(ModelError::UnknownLabel {
                index,
                known: self.classes.len(),
            })
    }
}
