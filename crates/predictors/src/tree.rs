//! Decision-tree artifact format and traversal.
//!
//! Artifacts store trees in the flattened node-array layout that scikit-learn
//! exposes (`children_left`, `children_right`, `feature`, `threshold`,
//! `value`). A node is a leaf when its left child is negative; internal nodes
//! route a sample left when `features[feature[i]] <= threshold[i]`.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single decision tree in flattened node-array form.
///
/// All five arrays have one entry per node; `value[i]` holds the per-class
/// score distribution at node `i` for classifiers, or a single-element array
/// for regressors. Only leaf values are ever read during traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Validate the node arrays against each other and the feature count.
    ///
    /// Checks performed:
    /// - all five arrays have the same length and the tree is non-empty
    /// - every value row has exactly `n_outputs` entries
    /// - child indices point past their parent (guarantees traversal
    ///   terminates) and stay inside the tree
    /// - internal nodes reference a feature index below `n_features`
    pub fn validate(&self, n_features: usize, n_outputs: usize) -> Result<()> {
        let n = self.node_count();
        if n == 0 {
            return Err(ModelError::MalformedArtifact {
                reason: "tree has no nodes".to_string(),
            });
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(ModelError::MalformedArtifact {
                reason: format!(
                    "node arrays disagree on length (children_left has {n} entries)"
                ),
            });
        }

        for (i, row) in self.value.iter().enumerate() {
            if row.len() != n_outputs {
                return Err(ModelError::MalformedArtifact {
                    reason: format!(
                        "node {i} has {} outputs, expected {n_outputs}",
                        row.len()
                    ),
                });
            }
        }

        for i in 0..n {
            let left = self.children_left[i];
            let right = self.children_right[i];
            if left < 0 {
                continue; // leaf
            }
            let (left, right) = (left as usize, right as usize);
            if right >= n || left >= n || left <= i || right <= i {
                return Err(ModelError::MalformedArtifact {
                    reason: format!("node {i} has out-of-order children ({left}, {right})"),
                });
            }
            let feat = self.feature[i];
            if feat < 0 || feat as usize >= n_features {
                return Err(ModelError::MalformedArtifact {
                    reason: format!("node {i} splits on feature {feat}, model has {n_features}"),
                });
            }
        }
        Ok(())
    }

    /// Walk the tree for one sample and return the leaf value row.
    ///
    /// Callers must have run [`validate`](Self::validate) at load time; the
    /// traversal relies on its index invariants.
    pub fn decide(&self, features: &[f64]) -> &[f64] {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left < 0 {
                return &self.value[node];
            }
            let feat = self.feature[node] as usize;
            node = if features[feat] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

/// A forest of decision trees sharing one input contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Number of input features every tree expects
    pub n_features: usize,
    /// Width of each node's value row (class count, or 1 for regression)
    pub n_outputs: usize,
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    /// Validate every tree in the ensemble.
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ModelError::MalformedArtifact {
                reason: "ensemble has no trees".to_string(),
            });
        }
        if self.n_outputs == 0 {
            return Err(ModelError::MalformedArtifact {
                reason: "ensemble declares zero outputs".to_string(),
            });
        }
        for tree in &self.trees {
            tree.validate(self.n_features, self.n_outputs)?;
        }
        Ok(())
    }

    /// Check an incoming feature slice against the trained input width.
    pub fn check_input(&self, features: &[f64]) -> Result<()> {
        if features.len() != self.n_features {
            return Err(ModelError::FeatureLengthMismatch {
                expected: self.n_features,
                found: features.len(),
            });
        }
        Ok(())
    }
}
