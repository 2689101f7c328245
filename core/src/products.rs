//! Product dimension.
//!
//! Categories follow a fixed categorical distribution; each category has
//! its own price range and direct-cost-ratio noise/clamp band around the
//! configured base margin. Product ids run 1..=N with no gaps.

use crate::config::GeneratorConfig;
use crate::rng::GeneratorRng;
use crate::types::ProductId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Subscription,
    Service,
    Loan,
    Advisory,
}

pub const CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::Subscription, 0.40),
    (Category::Service, 0.30),
    (Category::Loan, 0.20),
    (Category::Advisory, 0.10),
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Subscription => "Subscription",
            Category::Service => "Service",
            Category::Loan => "Loan",
            Category::Advisory => "Advisory",
        }
    }

    pub fn price_range(self) -> (f64, f64) {
        match self {
            Category::Subscription => (50.0, 200.0),
            Category::Service => (100.0, 400.0),
            Category::Loan => (300.0, 800.0),
            Category::Advisory => (150.0, 600.0),
        }
    }

    /// Offset and sigma of the normal noise applied to `1 - base_margin`
    /// when drawing the direct-cost ratio.
    pub fn cost_ratio_noise(self) -> (f64, f64) {
        match self {
            Category::Subscription => (0.00, 0.04),
            Category::Service => (0.05, 0.05),
            Category::Loan => (-0.05, 0.05),
            Category::Advisory => (0.02, 0.05),
        }
    }

    /// Clamp bounds for the drawn direct-cost ratio.
    pub fn cost_ratio_bounds(self) -> (f64, f64) {
        match self {
            Category::Subscription => (0.25, 0.70),
            Category::Service => (0.30, 0.75),
            Category::Loan => (0.20, 0.65),
            Category::Advisory => (0.25, 0.72),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: Category,
    pub base_price: f64,
    pub direct_cost_ratio: f64,
}

pub fn generate_products(config: &GeneratorConfig, rng: &mut GeneratorRng) -> Vec<Product> {
    let mut products = Vec::with_capacity(config.num_products);

    for i in 1..=config.num_products {
        let category = rng.pick_weighted(CATEGORY_WEIGHTS);

        let (price_lo, price_hi) = category.price_range();
        let base_price = rng.uniform(price_lo, price_hi);

        let (offset, sigma) = category.cost_ratio_noise();
        let (ratio_lo, ratio_hi) = category.cost_ratio_bounds();
        let direct_cost_ratio =
            (1.0 - config.base_margin + rng.normal(offset, sigma)).clamp(ratio_lo, ratio_hi);

        products.push(Product {
            product_id: i as ProductId,
            product_name: format!("Product {i}"),
            category,
            base_price,
            direct_cost_ratio,
        });
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_attributes_stay_in_bounds() {
        let config = GeneratorConfig {
            num_products: 50,
            ..Default::default()
        };
        let mut rng = GeneratorRng::new(42);
        let products = generate_products(&config, &mut rng);

        assert_eq!(products.len(), 50);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.product_id, i as ProductId + 1);
            let (lo, hi) = p.category.price_range();
            assert!(p.base_price >= lo && p.base_price < hi);
            let (rlo, rhi) = p.category.cost_ratio_bounds();
            assert!(p.direct_cost_ratio >= rlo && p.direct_cost_ratio <= rhi);
        }
    }
}
