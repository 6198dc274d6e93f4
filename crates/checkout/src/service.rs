//! Order placement use-case helpers.

use uuid::Uuid;

use storefront_core::{DomainError, DomainResult, Entity};
use storefront_customers::Customer;

use crate::order::Order;
use crate::order_item::OrderItem;

/// Stateless order use-cases.
pub struct OrderService;

impl OrderService {
    /// Sum of totals across a set of orders.
    pub fn total(orders: &[Order]) -> i64 {
        orders.iter().map(Order::total).sum()
    }

    /// Place an order for a customer, crediting half the order total as
    /// reward points.
    ///
    /// The order id is minted here (time-ordered UUID); item ids are the
    /// caller's.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> DomainResult<Order> {
        if items.is_empty() {
            return Err(DomainError::validation("Order must have at least one item"));
        }

        let order = Order::new(Uuid::now_v7().to_string(), customer.id().clone(), items)?;
        customer.add_reward_points(order.total() / 2);
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Entity;

    fn item(id: &str, price: i64, quantity: i64) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, format!("p-{id}"), quantity).unwrap()
    }

    #[test]
    fn place_order_requires_at_least_one_item() {
        let mut customer = Customer::new("c1", "João").unwrap();
        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Order must have at least one item")
        );
    }

    #[test]
    fn place_order_credits_half_the_total_as_reward_points() {
        let mut customer = Customer::new("c1", "João").unwrap();
        let order =
            OrderService::place_order(&mut customer, vec![item("i1", 10, 1)]).unwrap();

        assert_eq!(order.total(), 10);
        assert_eq!(customer.reward_points(), 5);
        assert_eq!(order.customer_id(), "c1");
        assert!(!order.id().is_empty());
    }

    #[test]
    fn total_sums_across_orders() {
        let order1 = Order::new("o1", "c1", vec![item("i1", 100, 1)]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item("i2", 200, 2)]).unwrap();

        assert_eq!(OrderService::total(&[order1, order2]), 500);
        assert_eq!(OrderService::total(&[]), 0);
    }
}
