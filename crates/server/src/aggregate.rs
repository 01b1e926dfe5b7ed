//! Multi-item order aggregation for the JSON API.
//!
//! The API accepts a list of items; the models take a single record. The
//! order collapses to one representative row: a cubic box sized from the
//! total item volume plus a 20% buffer, summed depth as item length, and
//! averaged width/height.

use pipeline::{RawRecord, round2};
use serde::Deserialize;
use tracing::debug;

/// One item in a `/predict` request. Missing dimensions default to 10,
/// missing quantity to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    #[serde(default = "default_dimension")]
    pub width: f64,
    #[serde(default = "default_dimension")]
    pub height: f64,
    #[serde(default = "default_dimension")]
    pub depth: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_dimension() -> f64 {
    10.0
}

fn default_quantity() -> u32 {
    1
}

/// The representative record for an order, plus the predicted cubic box
/// side used for all three bin dimensions.
#[derive(Debug, Clone)]
pub struct AggregatedOrder {
    pub record: RawRecord,
    pub side: f64,
}

/// Collapse an order into a single representative record.
///
/// Returns `None` for an empty order. The aggregated weather is fixed to
/// "sunny": the API has no weather input, so multi-item requests always get
/// the standard (non-humid) recommendation.
pub fn aggregate_items(items: &[ItemSpec]) -> Option<AggregatedOrder> {
    if items.is_empty() {
        return None;
    }

    let total_volume: f64 = items
        .iter()
        .map(|item| item.width * item.height * item.depth * f64::from(item.quantity))
        .sum();

    // Cubic box holding the total volume, with a 20% buffer per side
    let side = round2(total_volume.cbrt() * 1.2);

    let count = items.len() as f64;
    let total_depth: f64 = items.iter().map(|item| item.depth).sum();
    let avg_width: f64 = items.iter().map(|item| item.width).sum::<f64>() / count;
    let avg_height: f64 = items.iter().map(|item| item.height).sum::<f64>() / count;

    debug!(total_volume, side, "Aggregated order");

    Some(AggregatedOrder {
        record: RawRecord::from_dimensions(
            [total_depth, avg_width, avg_height],
            [side, side, side],
            "sunny",
        ),
        side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: f64, height: f64, depth: f64, quantity: u32) -> ItemSpec {
        ItemSpec {
            width,
            height,
            depth,
            quantity,
        }
    }

    #[test]
    fn test_empty_order() {
        assert!(aggregate_items(&[]).is_none());
    }

    #[test]
    fn test_single_cube() {
        let order = aggregate_items(&[item(10.0, 10.0, 10.0, 1)]).unwrap();
        // cbrt(1000) * 1.2 = 12
        assert_eq!(order.side, 12.0);
        assert_eq!(order.record.bin_l, 12.0);
        assert_eq!(order.record.item_l, 10.0);
        assert_eq!(order.record.weather, "sunny");
    }

    #[test]
    fn test_two_items_sum_and_average() {
        let order =
            aggregate_items(&[item(10.0, 10.0, 10.0, 1), item(20.0, 20.0, 20.0, 1)]).unwrap();
        // total volume 9000; cbrt = 20.8008..., * 1.2 = 24.9610...
        assert_eq!(order.side, 24.96);
        assert_eq!(order.record.item_l, 30.0); // summed depth
        assert_eq!(order.record.item_w, 15.0); // averaged width
        assert_eq!(order.record.item_h, 15.0); // averaged height
        assert_eq!(order.record.bin_w, 24.96);
    }

    #[test]
    fn test_quantity_scales_volume() {
        let order = aggregate_items(&[item(10.0, 10.0, 10.0, 8)]).unwrap();
        // 8000 total; cbrt = 20, side = 24
        assert_eq!(order.side, 24.0);
    }

    #[test]
    fn test_defaults_from_sparse_json() {
        let sparse: ItemSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse.width, 10.0);
        assert_eq!(sparse.height, 10.0);
        assert_eq!(sparse.depth, 10.0);
        assert_eq!(sparse.quantity, 1);
    }
}
