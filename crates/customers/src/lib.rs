//! Customers domain module.
//!
//! This crate contains the `Customer` aggregate, its `Address` value object,
//! the customer event family and its example handlers, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod address;
pub mod customer;
pub mod event;
pub mod handler;

pub use address::Address;
pub use customer::{Customer, CustomerRepository};
pub use event::{CustomerAddressChanged, CustomerCreated, CustomerEvent, CustomerEventKind};
pub use handler::{
    AuditCustomerCreatedHandler, AuditTrail, LogAddressChangedHandler, LogCustomerCreatedHandler,
};
