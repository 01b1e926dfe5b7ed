//! # Predictors Crate
//!
//! This crate loads the pre-trained packaging models and runs inference.
//!
//! ## Main Components
//!
//! - **tree**: decision-tree artifact format (flattened node arrays) and
//!   traversal
//! - **models**: `BoxClassifier`, `FillerRegressor`, `LabelEncoder`
//! - **bundle**: `ModelBundle` — loads all three artifacts once at startup
//! - **error**: `ModelError` for loading and inference failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use predictors::ModelBundle;
//! use std::path::Path;
//!
//! let bundle = ModelBundle::load_from_files(Path::new("models"))?;
//! let category = bundle.predict_category(&features)?;
//! let filler = bundle.predict_filler(&features)?;
//! ```
//!
//! The bundle is immutable after load. Share it across request handlers with
//! `Arc<ModelBundle>`; all inference is read-only and thread-safe.

pub mod bundle;
pub mod error;
pub mod models;
pub mod tree;

// Re-export commonly used types
pub use bundle::{CLASSIFIER_FILE, ENCODER_FILE, ModelBundle, REGRESSOR_FILE};
pub use error::{ModelError, Result};
pub use models::{BoxClassifier, FillerRegressor, LabelEncoder};
pub use tree::{DecisionTree, TreeEnsemble};
