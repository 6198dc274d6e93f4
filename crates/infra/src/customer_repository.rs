use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::{DomainError, DomainResult, Entity, Repository};
use storefront_customers::{Address, Customer};

/// Flat customer row; the address value object is stored as columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CustomerRow {
    id: String,
    name: String,
    street: Option<String>,
    number: Option<u32>,
    zip: Option<String>,
    city: Option<String>,
    active: bool,
    reward_points: i64,
}

impl CustomerRow {
    fn from_entity(customer: &Customer) -> Self {
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            street: customer.address().map(|a| a.street().to_string()),
            number: customer.address().map(|a| a.number()),
            zip: customer.address().map(|a| a.zip().to_string()),
            city: customer.address().map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }

    fn into_entity(self) -> DomainResult<Customer> {
        let mut customer = Customer::new(self.id, self.name)?;
        if let (Some(street), Some(number), Some(zip), Some(city)) =
            (self.street, self.number, self.zip, self.city)
        {
            customer.change_address(Address::new(street, number, zip, city)?);
        }
        customer.add_reward_points(self.reward_points);
        if self.active {
            customer.activate()?;
        }
        Ok(customer)
    }
}

/// In-memory customer store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    rows: RwLock<HashMap<String, CustomerRow>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<Customer> for InMemoryCustomerRepository {
    fn create(&self, customer: &Customer) -> DomainResult<()> {
        let row = CustomerRow::from_entity(customer);
        if let Ok(json) = serde_json::to_string(&row) {
            debug!(row = %json, "persisting customer");
        }

        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.insert(row.id.clone(), row);
        Ok(())
    }

    fn update(&self, customer: &Customer) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        if !rows.contains_key(customer.id()) {
            return Err(DomainError::not_found());
        }
        rows.insert(customer.id().clone(), CustomerRow::from_entity(customer));
        Ok(())
    }

    fn find(&self, id: &String) -> DomainResult<Customer> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let row = rows.get(id).cloned().ok_or(DomainError::NotFound)?;
        row.into_entity()
    }

    fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut rows: Vec<CustomerRow> = rows.values().cloned().collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows.into_iter().map(CustomerRow::into_entity).collect()
    }
}
