//! Infrastructure layer: persistence adapters for the domain crates.
//!
//! In-memory repositories intended for tests/dev. Every adapter rehydrates
//! entities through their validating constructors; stored rows that no longer
//! satisfy the domain invariants fail on load instead of producing an invalid
//! aggregate.

pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::InMemoryCustomerRepository;
pub use order_repository::InMemoryOrderRepository;
pub use product_repository::InMemoryProductRepository;
