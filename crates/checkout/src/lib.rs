//! Checkout domain module.
//!
//! This crate contains the `Order` aggregate (owning `OrderItem`s) and the
//! order placement use-case helpers, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod order;
pub mod order_item;
pub mod service;

pub use order::{Order, OrderRepository};
pub use order_item::OrderItem;
pub use service::OrderService;
