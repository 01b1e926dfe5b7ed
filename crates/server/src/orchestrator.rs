//! # Recommendation Orchestrator
//!
//! Coordinates the per-request pipeline:
//! 1. Engineer the feature vector from the raw record
//! 2. Classify the box category and decode its label
//! 3. Regress the filler amount
//! 4. Derive the recommendation payload
//!
//! The orchestrator holds the only long-lived state in the process: the
//! model bundle, loaded once and shared read-only. Everything else is
//! request-scoped, so concurrent requests need no synchronization.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use tracing::{debug, info};

use pipeline::{FEATURE_LEN, RawRecord, Recommendation, build_features, derive};
use predictors::ModelBundle;

/// Runs the full request pipeline against a loaded model bundle.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    models: Arc<ModelBundle>,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator, checking the artifacts match the feature
    /// contract the Feature Builder produces.
    pub fn new(models: Arc<ModelBundle>) -> Result<Self> {
        ensure!(
            models.n_features() == FEATURE_LEN,
            "model artifacts expect {} features but the feature builder produces {}",
            models.n_features(),
            FEATURE_LEN
        );
        Ok(Self { models })
    }

    /// Produce a recommendation for one request record.
    pub fn recommend(&self, record: &RawRecord) -> Result<Recommendation> {
        let start = Instant::now();

        let features = build_features(record);
        debug!(
            volume_ratio = features.volume_ratio,
            area_ratio = features.area_ratio,
            "Engineered features"
        );
        let array = features.as_array();

        let box_category = self
            .models
            .predict_category(&array)
            .context("Box-category prediction failed")?;
        let filler_amount = self
            .models
            .predict_filler(&array)
            .context("Filler-amount prediction failed")?;
        debug!(%box_category, filler_amount, "Model predictions");

        let recommendation = derive(record, &box_category, filler_amount);

        info!(
            category = %recommendation.box_category,
            fit = %recommendation.fit_status,
            elapsed = ?start.elapsed(),
            "Derived recommendation"
        );
        Ok(recommendation)
    }
}
