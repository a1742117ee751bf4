//! Heuristic quality score for a parse result.
//!
//! The score is the plain mean of three factors in `[0, 1]`: how many items
//! were found (saturating), the share of prices in a plausible range, and the
//! share of names with a plausible length. It depends only on the item count
//! and per-item predicates, so item order never changes it.

use crate::error::{Error, Result};
use crate::parser::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceThresholds {
    /// Item count at which the volume factor reaches 1.0.
    pub volume_saturation: usize,
    /// Prices must be strictly between zero and this value.
    pub max_plausible_price: f64,
    pub min_name_len: usize,
    pub max_name_len: usize,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            volume_saturation: 10,
            max_plausible_price: 1000.0,
            min_name_len: 3,
            max_name_len: 50,
        }
    }
}

impl ConfidenceThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.volume_saturation == 0 {
            return Err(Error::InvalidThresholds(
                "volume saturation must be at least 1".into(),
            ));
        }
        if self.max_plausible_price.is_nan() || self.max_plausible_price <= 0.0 {
            return Err(Error::InvalidThresholds(format!(
                "max plausible price must be positive, got {}",
                self.max_plausible_price
            )));
        }
        if self.min_name_len > self.max_name_len {
            return Err(Error::InvalidThresholds(format!(
                "min name length {} exceeds max name length {}",
                self.min_name_len, self.max_name_len
            )));
        }
        Ok(())
    }

    fn plausible_price(&self, price: f64) -> bool {
        price > 0.0 && price < self.max_plausible_price
    }

    fn plausible_name(&self, name: &str) -> bool {
        let len = name.chars().count();
        len >= self.min_name_len && len <= self.max_name_len
    }
}

pub fn calculate_confidence(items: &[MenuItem], thresholds: &ConfidenceThresholds) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let total = items.len() as f64;
    let volume = (total / thresholds.volume_saturation as f64).min(1.0);

    let valid_prices = items
        .iter()
        .filter(|item| thresholds.plausible_price(item.price))
        .count();
    let valid_names = items
        .iter()
        .filter(|item| thresholds.plausible_name(&item.name))
        .count();

    let factors = [
        volume,
        valid_prices as f64 / total,
        valid_names as f64 / total,
    ];
    factors.iter().sum::<f64>() / factors.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn item(name: &str, price: f64) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            price,
            description: String::new(),
            category: Category::Miscellaneous,
        }
    }

    fn score(items: &[MenuItem]) -> f64 {
        calculate_confidence(items, &ConfidenceThresholds::default())
    }

    #[test]
    fn empty_result_scores_zero() {
        assert_eq!(score(&[]), 0.0);
    }

    #[test]
    fn ten_plausible_items_score_one() {
        let items: Vec<_> = (1..=10).map(|i| item("Masala Dosa", i as f64 * 10.0)).collect();
        assert!((score(&items) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn volume_factor_saturates() {
        let items: Vec<_> = (0..25).map(|_| item("Tea", 10.0)).collect();
        assert!((score(&items) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn averages_three_factors() {
        // volume 0.2, prices 1/2, names 2/2
        let items = vec![item("Coffee", 30.0), item("Royal Feast Platter", 1500.0)];
        let expected = (0.2 + 0.5 + 1.0) / 3.0;
        assert!((score(&items) - expected).abs() < 1e-12);
    }

    #[test]
    fn price_bounds_are_exclusive() {
        let items = vec![item("Water", 0.0), item("Buffet", 1000.0), item("Tea", 999.99)];
        let expected = (0.3 + 1.0 / 3.0 + 1.0) / 3.0;
        assert!((score(&items) - expected).abs() < 1e-12);
    }

    #[test]
    fn name_bounds_are_inclusive() {
        let long = "x".repeat(50);
        let too_long = "x".repeat(51);
        let items = vec![item("Tea", 10.0), item(&long, 10.0), item(&too_long, 10.0)];
        let expected = (0.3 + 1.0 + 2.0 / 3.0) / 3.0;
        assert!((score(&items) - expected).abs() < 1e-12);
    }

    #[test]
    fn order_does_not_matter() {
        let mut items = vec![
            item("Coffee", 30.0),
            item("Feast", 2000.0),
            item(&"y".repeat(60), 45.0),
            item("Idli", 25.0),
        ];
        let before = score(&items);
        items.reverse();
        assert_eq!(score(&items), before);
        items.swap(0, 2);
        assert_eq!(score(&items), before);
    }

    #[test]
    fn custom_thresholds_apply() {
        let thresholds = ConfidenceThresholds {
            volume_saturation: 2,
            max_plausible_price: 5000.0,
            min_name_len: 3,
            max_name_len: 50,
        };
        let items = vec![item("Coffee", 30.0), item("Royal Feast Platter", 1500.0)];
        assert!((calculate_confidence(&items, &thresholds) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_inconsistent_thresholds() {
        let mut thresholds = ConfidenceThresholds::default();
        assert!(thresholds.validate().is_ok());

        thresholds.min_name_len = 60;
        assert!(matches!(
            thresholds.validate(),
            Err(Error::InvalidThresholds(_))
        ));

        let thresholds = ConfidenceThresholds {
            volume_saturation: 0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
