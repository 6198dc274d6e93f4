use storefront_core::{AggregateRoot, DomainError, DomainResult, Entity, Repository};

use crate::order_item::OrderItem;

/// Aggregate root: Order.
///
/// Owns its items as a single consistency boundary: an order is created with a
/// non-empty initial item set and every mutation re-asserts the invariants, so
/// an invalid order is never observable. Items keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

/// Storage contract for orders.
pub trait OrderRepository: Repository<Order> {}

impl<R: Repository<Order>> OrderRepository for R {}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.customer_id.is_empty() {
            return Err(DomainError::validation("CustomerId is required"));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("Items are required"));
        }
        Ok(())
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Append an item to the order.
    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        self.items.push(item);
        self.validate()
    }

    /// Remove an item by identity.
    ///
    /// Unknown ids are `NotFound`; removing the last item is rejected because
    /// an order with zero items is invalid.
    pub fn remove_item(&mut self, item_id: &str) -> DomainResult<()> {
        if self.item(item_id).is_none() {
            return Err(DomainError::not_found());
        }
        if self.items.len() == 1 {
            return Err(DomainError::validation("Items are required"));
        }
        self.items.retain(|item| item.id() != item_id);
        self.validate()
    }

    /// Pure derived total: Σ item subtotals. Never stored on the aggregate.
    pub fn total(&self) -> i64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl AggregateRoot for Order {}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, quantity: i64) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, format!("p-{id}"), quantity).unwrap()
    }

    #[test]
    fn rejects_empty_id() {
        let err = Order::new("", "123", vec![item("i1", 100, 1)]).unwrap_err();
        assert_eq!(err, DomainError::validation("Id is required"));
    }

    #[test]
    fn rejects_empty_customer_id() {
        let err = Order::new("123", "", vec![item("i1", 100, 1)]).unwrap_err();
        assert_eq!(err, DomainError::validation("CustomerId is required"));
    }

    #[test]
    fn rejects_empty_items() {
        let err = Order::new("123", "123", vec![]).unwrap_err();
        assert_eq!(err, DomainError::validation("Items are required"));
    }

    #[test]
    fn calculates_total() {
        let order = Order::new("o1", "c1", vec![item("i1", 100, 2)]).unwrap();
        assert_eq!(order.total(), 200);

        let order2 = Order::new("o1", "c1", vec![item("i1", 100, 2), item("i2", 200, 2)]).unwrap();
        assert_eq!(order2.total(), 600);
    }

    #[test]
    fn add_item_appends_and_keeps_existing_items() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 100, 1)]).unwrap();
        order.add_item(item("i2", 200, 2)).unwrap();

        assert_eq!(order.items().len(), 2);
        assert!(order.item("i1").is_some());
        assert!(order.item("i2").is_some());
        assert_eq!(order.total(), 500);
    }

    #[test]
    fn remove_item_drops_only_the_matching_item() {
        let mut order =
            Order::new("o1", "c1", vec![item("i1", 100, 1), item("i2", 200, 2)]).unwrap();
        order.remove_item("i1").unwrap();

        assert_eq!(order.items().len(), 1);
        assert!(order.item("i1").is_none());
        assert!(order.item("i2").is_some());
    }

    #[test]
    fn remove_unknown_item_is_not_found() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 100, 1)]).unwrap();
        let err = order.remove_item("nope").unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn cannot_remove_the_last_item() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 100, 1)]).unwrap();
        let err = order.remove_item("i1").unwrap_err();
        assert_eq!(err, DomainError::validation("Items are required"));
        assert_eq!(order.items().len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_items() -> impl Strategy<Value = Vec<(i64, i64)>> {
            proptest::collection::vec((0i64..100_000, 1i64..1_000), 1..20)
        }

        proptest! {
            /// Property: total() is the sum of price * quantity over all items.
            #[test]
            fn total_is_additive(raw in arb_items()) {
                let items: Vec<OrderItem> = raw
                    .iter()
                    .enumerate()
                    .map(|(i, (price, quantity))| {
                        OrderItem::new(format!("i{i}"), "Item", *price, "p1", *quantity).unwrap()
                    })
                    .collect();

                let expected: i64 = raw.iter().map(|(p, q)| p * q).sum();
                let order = Order::new("o1", "c1", items).unwrap();
                prop_assert_eq!(order.total(), expected);
            }

            /// Property: adding an item raises the total by exactly its subtotal.
            #[test]
            fn add_item_raises_total_by_subtotal(
                raw in arb_items(),
                price in 0i64..100_000,
                quantity in 1i64..1_000,
            ) {
                let items: Vec<OrderItem> = raw
                    .iter()
                    .enumerate()
                    .map(|(i, (p, q))| {
                        OrderItem::new(format!("i{i}"), "Item", *p, "p1", *q).unwrap()
                    })
                    .collect();

                let mut order = Order::new("o1", "c1", items).unwrap();
                let before = order.total();
                order
                    .add_item(OrderItem::new("extra", "Item", price, "p1", quantity).unwrap())
                    .unwrap();
                prop_assert_eq!(order.total(), before + price * quantity);
            }
        }
    }
}
