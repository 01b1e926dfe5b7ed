//! Feature engineering for the packaging predictors.
//!
//! Turns a [`RawRecord`] into the fixed 12-position vector the trained
//! classifier and regressor expect. The position order is a contract with
//! the shipped model artifacts; see [`FeatureVector::as_array`].

use crate::record::RawRecord;

/// Number of features in the canonical vector.
pub const FEATURE_LEN: usize = 12;

/// Engineered features for one request.
///
/// Geometry terms only: volumes, surface areas, and their zero-guarded
/// ratios. A second, incompatible ordering (weight/fragile/urgent in place
/// of the area terms) exists in this domain; the shipped artifacts were
/// trained on this one, so this is the only ordering implemented.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub item_l: f64,
    pub item_w: f64,
    pub item_h: f64,
    pub bin_l: f64,
    pub bin_w: f64,
    pub bin_h: f64,
    pub item_volume: f64,
    pub bin_volume: f64,
    /// item_volume / bin_volume, 0 when bin_volume is 0
    pub volume_ratio: f64,
    pub item_area: f64,
    pub bin_area: f64,
    /// item_area / bin_area, 0 when bin_area is 0
    pub area_ratio: f64,
}

impl FeatureVector {
    /// The canonical position order the models were trained against:
    ///
    /// `[item_l, item_w, item_h, bin_l, bin_w, bin_h, item_volume,
    /// bin_volume, volume_ratio, item_area, bin_area, area_ratio]`
    pub fn as_array(&self) -> [f64; FEATURE_LEN] {
        [
            self.item_l,
            self.item_w,
            self.item_h,
            self.bin_l,
            self.bin_w,
            self.bin_h,
            self.item_volume,
            self.bin_volume,
            self.volume_ratio,
            self.item_area,
            self.bin_area,
            self.area_ratio,
        ]
    }
}

/// Compute the feature vector for one record.
///
/// Pure arithmetic: never fails, never divides by zero (a zero denominator
/// yields a ratio of 0). Negative or zero dimensions flow through unchanged.
pub fn build_features(record: &RawRecord) -> FeatureVector {
    let item_volume = record.item_l * record.item_w * record.item_h;
    let bin_volume = record.bin_l * record.bin_w * record.bin_h;
    tracing::trace!(item_volume, bin_volume, "Engineering features");

    let item_area = surface_area(record.item_l, record.item_w, record.item_h);
    let bin_area = surface_area(record.bin_l, record.bin_w, record.bin_h);

    FeatureVector {
        item_l: record.item_l,
        item_w: record.item_w,
        item_h: record.item_h,
        bin_l: record.bin_l,
        bin_w: record.bin_w,
        bin_h: record.bin_h,
        item_volume,
        bin_volume,
        volume_ratio: guarded_ratio(item_volume, bin_volume),
        item_area,
        bin_area,
        area_ratio: guarded_ratio(item_area, bin_area),
    }
}

fn surface_area(a: f64, b: f64, c: f64) -> f64 {
    2.0 * (a * b + b * c + c * a)
}

fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_areas_and_ratios() {
        let record = RawRecord::from_dimensions([2.0, 3.0, 4.0], [4.0, 6.0, 8.0], "");
        let features = build_features(&record);

        assert_eq!(features.item_volume, 24.0);
        assert_eq!(features.bin_volume, 192.0);
        assert_eq!(features.volume_ratio, 0.125);
        // 2*(2*3 + 3*4 + 4*2) = 52
        assert_eq!(features.item_area, 52.0);
        assert_eq!(features.bin_area, 208.0);
        assert_eq!(features.area_ratio, 0.25);
    }

    #[test]
    fn test_zero_bin_yields_zero_ratios() {
        let record = RawRecord::from_dimensions([2.0, 3.0, 4.0], [0.0, 6.0, 8.0], "");
        let features = build_features(&record);

        assert_eq!(features.bin_volume, 0.0);
        assert_eq!(features.volume_ratio, 0.0);
        // bin_area is 2*(0 + 48 + 0) = 96, so area_ratio is still defined
        assert_eq!(features.bin_area, 96.0);
        assert!(features.area_ratio > 0.0);
    }

    #[test]
    fn test_fully_degenerate_bin() {
        let record = RawRecord::from_dimensions([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], "");
        let features = build_features(&record);
        assert_eq!(features.volume_ratio, 0.0);
        assert_eq!(features.area_ratio, 0.0);
        assert!(features.as_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_negative_dimensions_flow_through() {
        let record = RawRecord::from_dimensions([-2.0, 3.0, 4.0], [4.0, 6.0, 8.0], "");
        let features = build_features(&record);
        assert_eq!(features.item_volume, -24.0);
        assert_eq!(features.volume_ratio, -0.125);
    }

    #[test]
    fn test_canonical_order() {
        let record = RawRecord::from_dimensions([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], "");
        let array = build_features(&record).as_array();
        assert_eq!(array.len(), FEATURE_LEN);
        assert_eq!(&array[0..6], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(array[6], 6.0); // item volume
        assert_eq!(array[7], 120.0); // bin volume
        assert_eq!(array[8], 0.05); // volume ratio
    }
}
