//! Products domain module.
//!
//! This crate contains the `Product` aggregate, the product event family and
//! its example handler, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod event;
pub mod handler;
pub mod product;
pub mod service;

pub use event::{ProductCreated, ProductEvent, ProductEventKind};
pub use handler::SendEmailWhenProductIsCreatedHandler;
pub use product::{Product, ProductRepository};
pub use service::ProductService;
