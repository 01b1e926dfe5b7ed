//! Recommendation derivation.
//!
//! Deterministic post-processing that turns the two raw model outputs (box
//! category + filler amount) into the full recommendation payload. Every
//! rule is total: all branches are covered for any non-negative filler
//! amount, so derivation itself cannot fail.

use serde::{Deserialize, Serialize};

use crate::record::RawRecord;

/// Box categories that ship in recycled cardboard; everything else gets a
/// reusable fabric wrap.
const CARDBOARD_CATEGORIES: [&str; 3] = ["Small", "Medium", "Large"];

/// Filler amounts above this are flagged for operator review.
const ANOMALY_THRESHOLD: f64 = 1.0;

/// kg of plastic avoided per unit of unused filler capacity
const PLASTIC_SAVED_RATE: f64 = 0.025;
/// kg of CO2 avoided per unit of unused filler capacity
const CO2_SAVED_RATE: f64 = 0.15;
/// Cost penalty per unit of filler, capped so savings never drop below $0.10
const FILLER_PENALTY_RATE: f64 = 0.3;
const MAX_FILLER_PENALTY: f64 = 0.9;

/// Round to 2 decimal places (half away from zero).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 3 decimal places (half away from zero).
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// How well the item fits its box given the predicted filler amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    Perfect,
    Acceptable,
    NoFit,
}

impl FitStatus {
    /// Classify a (rounded) filler amount.
    pub fn from_filler(filler: f64) -> Self {
        if filler <= 0.1 {
            FitStatus::Perfect
        } else if filler <= 0.5 {
            FitStatus::Acceptable
        } else {
            FitStatus::NoFit
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitStatus::Perfect => "Perfect Fit",
            FitStatus::Acceptable => "Acceptable Fit",
            FitStatus::NoFit => "No Fit",
        }
    }

    fn arrangement(self) -> &'static str {
        match self {
            FitStatus::Perfect => "Good arrangement",
            FitStatus::Acceptable => "Try repositioning item",
            FitStatus::NoFit => "Check orientation or larger bin",
        }
    }
}

/// Environmental savings versus an all-plastic baseline, in kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    #[serde(rename = "Plastic_Saved_kg")]
    pub plastic_saved_kg: f64,
    #[serde(rename = "CO2_Saved_kg")]
    pub co2_saved_kg: f64,
}

/// The full recommendation payload.
///
/// Field names on the wire match the original service contract the web
/// client was built against, hence the serde renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Packaging_Type")]
    pub packaging_type: String,
    #[serde(rename = "Box_Dimensions")]
    pub box_dimensions: String,
    #[serde(rename = "Box_Category")]
    pub box_category: String,
    #[serde(rename = "Filler_Type")]
    pub filler_type: String,
    #[serde(rename = "Filler_Amount")]
    pub filler_amount: String,
    #[serde(rename = "Weather_Recommendation")]
    pub weather_recommendation: String,
    #[serde(rename = "Environmental_Impact")]
    pub environmental_impact: EnvironmentalImpact,
    #[serde(rename = "Cost_Savings_Per_Unit")]
    pub cost_savings_per_unit: String,
    #[serde(rename = "Fit_Status")]
    pub fit_status: String,
    #[serde(rename = "Arrangement")]
    pub arrangement: String,
    #[serde(rename = "Eco_Material_Swap")]
    pub eco_material_swap: String,
    #[serde(rename = "Anomaly_Label")]
    pub anomaly_label: String,
    #[serde(rename = "Fix_Suggestion")]
    pub fix_suggestion: String,
}

/// Derive the recommendation payload from the two model outputs.
///
/// Pure and deterministic. The raw regressor output is rounded to 2 decimal
/// places exactly once, here, and every threshold below compares the rounded
/// value — there is no per-rule re-rounding.
pub fn derive(record: &RawRecord, box_category: &str, filler_amount: f64) -> Recommendation {
    let filler = round2(filler_amount);

    let packaging_type = if CARDBOARD_CATEGORIES.contains(&box_category) {
        "Recycled cardboard box"
    } else {
        "Reusable fabric wrap"
    };

    let filler_type = filler_type(filler);
    let fit = FitStatus::from_filler(filler);

    let eco_material_swap = if filler_type != "No filler needed" {
        "Try mushroom-based wrap for 10% more savings"
    } else {
        "No alternative filler needed"
    };

    let (anomaly_label, fix_suggestion) = if filler > ANOMALY_THRESHOLD {
        ("Anomaly", "Re-check packing config")
    } else {
        ("Normal", "None needed")
    };

    // Unused filler capacity drives the savings; clamped so an anomalous
    // filler amount (> 1) never reports negative savings.
    let headroom = (1.0 - filler).max(0.0);
    let environmental_impact = EnvironmentalImpact {
        plastic_saved_kg: round3(headroom * PLASTIC_SAVED_RATE),
        co2_saved_kg: round3(headroom * CO2_SAVED_RATE),
    };

    let filler_penalty = (filler * FILLER_PENALTY_RATE).min(MAX_FILLER_PENALTY);
    let cost_savings = round2(1.0 - filler_penalty);

    Recommendation {
        packaging_type: packaging_type.to_string(),
        box_dimensions: format!("{}x{}x{}", record.bin_l, record.bin_w, record.bin_h),
        box_category: box_category.to_string(),
        filler_type: filler_type.to_string(),
        filler_amount: format!("{filler} inch"),
        weather_recommendation: weather_recommendation(&record.weather).to_string(),
        environmental_impact,
        cost_savings_per_unit: format!("${cost_savings:.2}"),
        fit_status: fit.label().to_string(),
        arrangement: fit.arrangement().to_string(),
        eco_material_swap: eco_material_swap.to_string(),
        anomaly_label: anomaly_label.to_string(),
        fix_suggestion: fix_suggestion.to_string(),
    }
}

fn filler_type(filler: f64) -> &'static str {
    if filler < 0.05 {
        "No filler needed"
    } else if filler < 0.5 {
        "Paper wrap"
    } else {
        "Biodegradable peanuts"
    }
}

fn weather_recommendation(weather: &str) -> &'static str {
    if weather.to_lowercase().contains("humid") {
        "Use insulated material"
    } else {
        "Standard eco-packaging is suitable"
    }
}
