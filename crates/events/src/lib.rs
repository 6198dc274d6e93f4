//! Domain events and the synchronous in-process dispatcher.
//!
//! Producers (entities, use-cases) construct event values and hand them to an
//! [`EventDispatcher`]; consumers implement [`EventHandler`] and register under
//! the event kind they react to. Neither side knows the other beyond the event's
//! kind tag.

pub mod dispatcher;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, NotifyError};
pub use event::DomainEvent;
pub use handler::{EventHandler, HandlerError};
