use crate::event::DomainEvent;

/// Error produced by a failing handler, surfaced through
/// [`NotifyError`](crate::NotifyError).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A unit of reaction logic invoked by the dispatcher.
///
/// Each handler implements one side effect (a log line, an audit record, an
/// outbound mail). Handlers receive the event family value, not an individual
/// variant: a handler registered under one kind still matches on the enum, so a
/// handler wired under the wrong kind sees an unexpected variant instead of a
/// malformed payload.
///
/// `Send + Sync` keeps handlers shareable; the dispatcher itself does no locking
/// (see [`EventDispatcher`](crate::EventDispatcher)).
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn handle(&self, event: &E) -> Result<(), HandlerError>;
}
