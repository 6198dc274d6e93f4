use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::{DomainError, DomainResult, Entity, Repository};
use storefront_products::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProductRow {
    id: String,
    name: String,
    price: i64,
}

impl ProductRow {
    fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }

    fn into_entity(self) -> DomainResult<Product> {
        Product::new(self.id, self.name, self.price)
    }
}

/// In-memory product store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<HashMap<String, ProductRow>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<Product> for InMemoryProductRepository {
    fn create(&self, product: &Product) -> DomainResult<()> {
        let row = ProductRow::from_entity(product);
        if let Ok(json) = serde_json::to_string(&row) {
            debug!(row = %json, "persisting product");
        }

        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.insert(row.id.clone(), row);
        Ok(())
    }

    fn update(&self, product: &Product) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if !rows.contains_key(product.id()) {
            return Err(DomainError::not_found());
        }
        rows.insert(product.id().clone(), ProductRow::from_entity(product));
        Ok(())
    }

    fn find(&self, id: &String) -> DomainResult<Product> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let row = rows.get(id).cloned().ok_or(DomainError::NotFound)?;
        row.into_entity()
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut rows: Vec<ProductRow> = rows.values().cloned().collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows.into_iter().map(ProductRow::into_entity).collect()
    }
}
