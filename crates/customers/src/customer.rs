use storefront_core::{AggregateRoot, DomainError, DomainResult, Entity, Repository};

use crate::address::Address;

/// Aggregate root: Customer.
///
/// Construction is the single point of truth for validity; every mutating
/// operation re-asserts the relevant invariants before returning. Event
/// construction for creation/address changes is the caller's responsibility
/// (see [`CustomerEvent`](crate::CustomerEvent)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

/// Storage contract for customers.
pub trait CustomerRepository: Repository<Customer> {}

impl<R: Repository<Customer>> CustomerRepository for R {}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = name.into();
        self.validate()
    }

    /// Replace the customer's address.
    ///
    /// This is the trigger point for the address-changed event: after calling
    /// it, the caller notifies `CustomerEvent::address_changed(&customer)` so
    /// handlers observe post-state.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// A customer without an address cannot be activated.
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::validation(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points += points;
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl AggregateRoot for Customer {}
