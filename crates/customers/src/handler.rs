//! Example side effects reacting to customer events.

use std::sync::{Arc, Mutex};

use tracing::info;

use storefront_core::Entity;
use storefront_events::{EventHandler, HandlerError};

use crate::event::CustomerEvent;

/// Logs customer creation.
pub struct LogCustomerCreatedHandler;

impl EventHandler<CustomerEvent> for LogCustomerCreatedHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        let customer = event.customer();
        info!(
            customer_id = %customer.id(),
            name = customer.name(),
            "customer created"
        );
        Ok(())
    }
}

/// In-memory audit trail shared between an audit handler and its observer.
#[derive(Debug, Default)]
pub struct AuditTrail {
    records: Mutex<Vec<String>>,
}

impl AuditTrail {
    fn append(&self, line: String) -> Result<(), HandlerError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| HandlerError::from("audit trail lock poisoned"))?;
        records.push(line);
        Ok(())
    }

    /// Snapshot of the recorded lines, oldest first.
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

/// Appends an audit record for every customer creation it observes.
pub struct AuditCustomerCreatedHandler {
    trail: Arc<AuditTrail>,
}

impl AuditCustomerCreatedHandler {
    pub fn new(trail: Arc<AuditTrail>) -> Self {
        Self { trail }
    }
}

impl EventHandler<CustomerEvent> for AuditCustomerCreatedHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        let customer = event.customer();
        self.trail
            .append(format!("customer {} ({}) created", customer.id(), customer.name()))
    }
}

/// Logs the new address after a customer address change.
pub struct LogAddressChangedHandler;

impl EventHandler<CustomerEvent> for LogAddressChangedHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        let customer = event.customer();
        match customer.address() {
            Some(address) => info!(
                customer_id = %customer.id(),
                name = customer.name(),
                address = %address,
                "customer address changed"
            ),
            // A change event without an address means a mis-registered handler
            // or a producer bug; surface it instead of logging nonsense.
            None => return Err("address changed event without an address".into()),
        }
        Ok(())
    }
}
