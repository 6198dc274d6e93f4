use chrono::{DateTime, Utc};
use uuid::Uuid;

use storefront_events::DomainEvent;

use crate::customer::Customer;

/// Dispatch tag for the customer event family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CustomerEventKind {
    Created,
    AddressChanged,
}

/// Event: a customer was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCreated {
    pub event_id: Uuid,
    pub customer: Customer,
    pub occurred_at: DateTime<Utc>,
}

/// Event: a customer's address changed.
///
/// Carries the customer *after* the mutation; handlers observe post-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAddressChanged {
    pub event_id: Uuid,
    pub customer: Customer,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerEvent {
    Created(CustomerCreated),
    AddressChanged(CustomerAddressChanged),
}

impl CustomerEvent {
    /// Snapshot the freshly constructed customer into a created event.
    pub fn created(customer: &Customer) -> Self {
        Self::Created(CustomerCreated {
            event_id: Uuid::now_v7(),
            customer: customer.clone(),
            occurred_at: Utc::now(),
        })
    }

    /// Snapshot the customer after an address change.
    pub fn address_changed(customer: &Customer) -> Self {
        Self::AddressChanged(CustomerAddressChanged {
            event_id: Uuid::now_v7(),
            customer: customer.clone(),
            occurred_at: Utc::now(),
        })
    }

    /// The affected customer (post-state snapshot).
    pub fn customer(&self) -> &Customer {
        match self {
            CustomerEvent::Created(e) => &e.customer,
            CustomerEvent::AddressChanged(e) => &e.customer,
        }
    }
}

impl DomainEvent for CustomerEvent {
    type Kind = CustomerEventKind;

    fn kind(&self) -> CustomerEventKind {
        match self {
            CustomerEvent::Created(_) => CustomerEventKind::Created,
            CustomerEvent::AddressChanged(_) => CustomerEventKind::AddressChanged,
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::Created(_) => "customer.created",
            CustomerEvent::AddressChanged(_) => "customer.address_changed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::Created(e) => e.occurred_at,
            CustomerEvent::AddressChanged(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_events::EventDispatcher;

    use super::*;
    use crate::address::Address;
    use crate::handler::{
        AuditCustomerCreatedHandler, AuditTrail, LogAddressChangedHandler,
        LogCustomerCreatedHandler,
    };

    #[test]
    fn created_event_notifies_all_registered_handlers() {
        storefront_observability::init();

        let trail = Arc::new(AuditTrail::default());
        let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
        dispatcher.register(
            CustomerEventKind::Created,
            Arc::new(LogCustomerCreatedHandler),
        );
        dispatcher.register(
            CustomerEventKind::Created,
            Arc::new(AuditCustomerCreatedHandler::new(Arc::clone(&trail))),
        );

        let customer = Customer::new("1", "João").unwrap();
        let event = CustomerEvent::created(&customer);
        dispatcher.notify(&event).unwrap();

        assert_eq!(trail.records(), vec!["customer 1 (João) created".to_string()]);
    }

    #[test]
    fn address_changed_event_notifies_handler_with_post_state() {
        let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
        dispatcher.register(
            CustomerEventKind::AddressChanged,
            Arc::new(LogAddressChangedHandler),
        );

        let mut customer = Customer::new("1", "João").unwrap();
        customer
            .change_address(Address::new("Av. Paulista", 123, "99000-000", "São Paulo").unwrap());

        let event = CustomerEvent::address_changed(&customer);
        assert_eq!(
            event.customer().address().map(ToString::to_string),
            Some("Av. Paulista, 123, 99000-000 São Paulo".to_string())
        );
        dispatcher.notify(&event).unwrap();
    }

    #[test]
    fn created_events_carry_distinct_ids() {
        let customer = Customer::new("1", "João").unwrap();
        let (a, b) = (
            CustomerEvent::created(&customer),
            CustomerEvent::created(&customer),
        );
        match (a, b) {
            (CustomerEvent::Created(a), CustomerEvent::Created(b)) => {
                assert_ne!(a.event_id, b.event_id);
                assert_eq!(a.customer, b.customer);
            }
            _ => panic!("Expected Created events"),
        }
    }
}
