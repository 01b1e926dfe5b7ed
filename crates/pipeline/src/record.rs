//! The raw per-request input record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// One packaging request: item dimensions, bin dimensions, and context.
///
/// All six dimensions share one unit (the shipped models were trained on
/// inches). Zero or negative dimensions are not rejected here; they flow
/// through the arithmetic and produce degenerate (zero) ratios downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub item_l: f64,
    pub item_w: f64,
    pub item_h: f64,
    pub bin_l: f64,
    pub bin_w: f64,
    pub bin_h: f64,
    /// Free-text weather description; matched case-insensitively downstream
    #[serde(default)]
    pub weather: String,
    /// Optional pass-through fields accepted for wire compatibility. They
    /// are not part of the canonical feature contract.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default)]
    pub urgent: bool,
}

/// Form field names, in the order they are reported for missing-field errors.
const DIMENSION_FIELDS: [&str; 6] = ["item_l", "item_w", "item_h", "bin_l", "bin_w", "bin_h"];

impl RawRecord {
    /// Build a record from string-valued form fields.
    ///
    /// Each of the six dimension fields must be present and parse as a
    /// number; the first offending field is reported by name. `weather` is
    /// optional and defaults to empty.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self> {
        let dim = |name: &str| -> Result<f64> {
            let raw = fields
                .get(name)
                .ok_or_else(|| PipelineError::MissingField {
                    field: name.to_string(),
                })?;
            raw.trim()
                .parse()
                .map_err(|_| PipelineError::InvalidField {
                    field: name.to_string(),
                    value: raw.clone(),
                })
        };

        let [item_l, item_w, item_h, bin_l, bin_w, bin_h] = {
            let mut values = [0.0; 6];
            for (slot, name) in values.iter_mut().zip(DIMENSION_FIELDS) {
                *slot = dim(name)?;
            }
            values
        };

        Ok(Self {
            item_l,
            item_w,
            item_h,
            bin_l,
            bin_w,
            bin_h,
            weather: fields.get("weather").cloned().unwrap_or_default(),
            weight: 0.0,
            fragile: false,
            urgent: false,
        })
    }

    /// Build a record from already-numeric dimensions.
    pub fn from_dimensions(item: [f64; 3], bin: [f64; 3], weather: impl Into<String>) -> Self {
        Self {
            item_l: item[0],
            item_w: item[1],
            item_h: item[2],
            bin_l: bin[0],
            bin_w: bin[1],
            bin_h: bin[2],
            weather: weather.into(),
            weight: 0.0,
            fragile: false,
            urgent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_form_parses_all_fields() {
        let fields = form(&[
            ("item_l", "10"),
            ("item_w", "8.5"),
            ("item_h", " 4 "),
            ("bin_l", "12"),
            ("bin_w", "12"),
            ("bin_h", "6"),
            ("weather", "Humid coastal"),
        ]);
        let record = RawRecord::from_form(&fields).unwrap();
        assert_eq!(record.item_w, 8.5);
        assert_eq!(record.item_h, 4.0);
        assert_eq!(record.weather, "Humid coastal");
    }

    #[test]
    fn test_from_form_weather_defaults_empty() {
        let fields = form(&[
            ("item_l", "1"),
            ("item_w", "1"),
            ("item_h", "1"),
            ("bin_l", "1"),
            ("bin_w", "1"),
            ("bin_h", "1"),
        ]);
        let record = RawRecord::from_form(&fields).unwrap();
        assert_eq!(record.weather, "");
    }

    #[test]
    fn test_from_form_reports_missing_field() {
        let fields = form(&[("item_l", "10")]);
        let err = RawRecord::from_form(&fields).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingField { ref field } if field == "item_w"
        ));
    }

    #[test]
    fn test_from_form_reports_non_numeric_field() {
        let fields = form(&[
            ("item_l", "10"),
            ("item_w", "wide"),
            ("item_h", "4"),
            ("bin_l", "12"),
            ("bin_w", "12"),
            ("bin_h", "6"),
        ]);
        let err = RawRecord::from_form(&fields).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidField { ref field, ref value }
                if field == "item_w" && value == "wide"
        ));
    }
}
