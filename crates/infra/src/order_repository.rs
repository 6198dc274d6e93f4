use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_checkout::{Order, OrderItem};
use storefront_core::{DomainError, DomainResult, Entity, Repository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct OrderItemRow {
    id: String,
    name: String,
    price: i64,
    product_id: String,
    quantity: i64,
}

/// Denormalized order row.
///
/// `total` is cached for query convenience only; rehydration recomputes it
/// from the item rows through the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct OrderRow {
    id: String,
    customer_id: String,
    total: i64,
    items: Vec<OrderItemRow>,
}

impl OrderRow {
    fn from_entity(order: &Order) -> Self {
        Self {
            id: order.id().clone(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemRow {
                    id: item.id().clone(),
                    name: item.name().to_string(),
                    price: item.price(),
                    product_id: item.product_id().to_string(),
                    quantity: item.quantity(),
                })
                .collect(),
        }
    }

    fn into_entity(self) -> DomainResult<Order> {
        let items = self
            .items
            .into_iter()
            .map(|row| OrderItem::new(row.id, row.name, row.price, row.product_id, row.quantity))
            .collect::<DomainResult<Vec<_>>>()?;
        Order::new(self.id, self.customer_id, items)
    }
}

/// In-memory order store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    rows: RwLock<HashMap<String, OrderRow>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<Order> for InMemoryOrderRepository {
    fn create(&self, order: &Order) -> DomainResult<()> {
        let row = OrderRow::from_entity(order);
        if let Ok(json) = serde_json::to_string(&row) {
            debug!(row = %json, "persisting order");
        }

        // For an in-memory adapter a poisoned lock still guards usable data.
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.insert(row.id.clone(), row);
        Ok(())
    }

    fn update(&self, order: &Order) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if !rows.contains_key(order.id()) {
            return Err(DomainError::not_found());
        }
        rows.insert(order.id().clone(), OrderRow::from_entity(order));
        Ok(())
    }

    fn find(&self, id: &String) -> DomainResult<Order> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let row = rows.get(id).cloned().ok_or(DomainError::NotFound)?;
        row.into_entity()
    }

    /// Not fulfilled by this adapter yet.
    fn find_all(&self) -> DomainResult<Vec<Order>> {
        Err(DomainError::unimplemented("OrderRepository::find_all"))
    }
}
