//! Product use-case helpers.

use storefront_core::DomainResult;

use crate::product::Product;

/// Stateless product use-cases.
pub struct ProductService;

impl ProductService {
    /// Raise every product's price by `percentage` percent (integer math,
    /// rounding toward zero). Each product revalidates after the change.
    pub fn increase_price(products: &mut [Product], percentage: i64) -> DomainResult<()> {
        for product in products.iter_mut() {
            let raised = product.price() + product.price() * percentage / 100;
            product.change_price(raised)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increases_all_prices_by_the_percentage() {
        let mut products = vec![
            Product::new("p1", "Product 1", 100).unwrap(),
            Product::new("p2", "Product 2", 200).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100).unwrap();

        assert_eq!(products[0].price(), 200);
        assert_eq!(products[1].price(), 400);
    }

    #[test]
    fn integer_percentages_round_toward_zero() {
        let mut products = vec![Product::new("p1", "Product 1", 99).unwrap()];
        ProductService::increase_price(&mut products, 10).unwrap();
        // 99 + 99 * 10 / 100 = 99 + 9
        assert_eq!(products[0].price(), 108);
    }
}
