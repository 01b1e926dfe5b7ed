//! Pipeline for turning packaging requests into recommendations.
//!
//! This crate provides the two core stages:
//! - **Feature Builder**: `build_features` computes the 12-position numeric
//!   vector the trained predictors expect
//! - **Recommendation Deriver**: `derive` applies the deterministic rule set
//!   to the two model outputs and assembles the payload
//!
//! ## Architecture
//! The request flow is:
//! 1. The boundary layer builds a `RawRecord` (validating field presence)
//! 2. `build_features` engineers the canonical feature vector
//! 3. External predictors produce (box_category, filler_amount)
//! 4. `derive` post-processes both into a `Recommendation`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{build_features, derive, RawRecord};
//!
//! let record = RawRecord::from_dimensions([10.0; 3], [12.0; 3], "sunny");
//! let features = build_features(&record).as_array();
//! let category = bundle.predict_category(&features)?;
//! let filler = bundle.predict_filler(&features)?;
//! let recommendation = derive(&record, &category, filler);
//! ```

pub mod derive;
pub mod error;
pub mod features;
pub mod record;

// Re-export main types
pub use derive::{EnvironmentalImpact, FitStatus, Recommendation, derive, round2, round3};
pub use error::{PipelineError, Result};
pub use features::{FEATURE_LEN, FeatureVector, build_features};
pub use record::RawRecord;
