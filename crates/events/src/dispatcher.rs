//! Synchronous in-process event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::event::DomainEvent;
use crate::handler::{EventHandler, HandlerError};

/// A handler failed during [`EventDispatcher::notify`].
///
/// Delivery short-circuits: handlers registered after the failing one are not
/// invoked for that notify call.
#[derive(Debug, Error)]
#[error("handler failed for event '{event_type}': {source}")]
pub struct NotifyError {
    event_type: &'static str,
    #[source]
    source: HandlerError,
}

impl NotifyError {
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

/// Registry mapping event kinds to ordered handler lists.
///
/// Each dispatcher instance owns its registry; there is no process-wide
/// singleton, so tests (and bounded contexts) stay isolated. Registration order
/// is delivery order.
///
/// The dispatcher does no internal locking: mutators take `&mut self`, and a
/// caller in a multi-threaded environment serializes access itself (handlers are
/// `Send + Sync`, so wrapping the dispatcher in a lock is enough).
pub struct EventDispatcher<E: DomainEvent> {
    handlers: HashMap<E::Kind, Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `kind`, creating the list if absent.
    ///
    /// No de-duplication: registering the same handler instance twice yields two
    /// invocations per notify.
    pub fn register(&mut self, kind: E::Kind, handler: Arc<dyn EventHandler<E>>) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Remove every occurrence of `handler` (by pointer identity) from the list
    /// for `kind`. No-op if the kind or the handler is absent.
    pub fn unregister(&mut self, kind: E::Kind, handler: &Arc<dyn EventHandler<E>>) {
        if let Some(list) = self.handlers.get_mut(&kind) {
            list.retain(|h| !Arc::ptr_eq(h, handler));
        }
    }

    /// Clear the entire registry.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// The ordered handler list for `kind` (empty if none registered).
    pub fn handlers(&self, kind: E::Kind) -> &[Arc<dyn EventHandler<E>>] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }

    /// Invoke every handler registered for `event`'s kind, synchronously, in
    /// registration order, passing `event` to each.
    ///
    /// Returns once every handler has run, or at the first handler failure
    /// (remaining handlers are skipped for this call). No handlers registered is
    /// not an error.
    pub fn notify(&self, event: &E) -> Result<(), NotifyError> {
        let list = self.handlers(event.kind());
        debug!(
            event_type = event.event_type(),
            handlers = list.len(),
            "dispatching event"
        );

        for handler in list {
            handler.handle(event).map_err(|source| NotifyError {
                event_type: event.event_type(),
                source,
            })?;
        }

        Ok(())
    }
}

impl<E: DomainEvent> core::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut counts: Vec<(&E::Kind, usize)> =
            self.handlers.iter().map(|(k, v)| (k, v.len())).collect();
        counts.sort_by(|a, b| format!("{:?}", a.0).cmp(&format!("{:?}", b.0)));
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}
