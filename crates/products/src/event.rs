use chrono::{DateTime, Utc};
use uuid::Uuid;

use storefront_events::DomainEvent;

use crate::product::Product;

/// Dispatch tag for the product event family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductEventKind {
    Created,
}

/// Event: a product was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreated {
    pub event_id: Uuid,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductEvent {
    Created(ProductCreated),
}

impl ProductEvent {
    /// Snapshot the freshly constructed product into a created event.
    pub fn created(product: &Product) -> Self {
        Self::Created(ProductCreated {
            event_id: Uuid::now_v7(),
            product: product.clone(),
            occurred_at: Utc::now(),
        })
    }

    pub fn product(&self) -> &Product {
        match self {
            ProductEvent::Created(e) => &e.product,
        }
    }
}

impl DomainEvent for ProductEvent {
    type Kind = ProductEventKind;

    fn kind(&self) -> ProductEventKind {
        match self {
            ProductEvent::Created(_) => ProductEventKind::Created,
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::Created(_) => "product.created",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::Created(e) => e.occurred_at,
        }
    }
}
