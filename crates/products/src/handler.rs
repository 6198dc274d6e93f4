//! Example side effects reacting to product events.

use tracing::info;

use storefront_core::Entity;
use storefront_events::{EventHandler, HandlerError};

use crate::event::ProductEvent;

/// Pretends to send a product-created announcement mail.
///
/// A real deployment would hand this to a mail gateway; here the outbound
/// message is a structured log line.
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<ProductEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &ProductEvent) -> Result<(), HandlerError> {
        let product = event.product();
        info!(
            product_id = %product.id(),
            name = product.name(),
            price = product.price(),
            "sending product created email"
        );
        Ok(())
    }
}
