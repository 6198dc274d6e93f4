use chrono::{DateTime, Utc};

/// A domain event: an immutable record that something happened to an entity.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - carriers of a **post-state snapshot** of the affected entity
/// - tagged with a closed **kind** used for handler lookup
///
/// The kind tag replaces string-keyed type-name dispatch: each event family is a
/// closed sum type, and registration/notification are keyed by the variant's tag,
/// so a typo'd event name cannot compile.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dispatch tag identifying the concrete variant of this event family.
    type Kind: Copy + Eq + core::hash::Hash + core::fmt::Debug + Send + Sync + 'static;

    /// The variant tag of this event instance.
    fn kind(&self) -> Self::Kind;

    /// Stable event name for logs (e.g. `"customer.address_changed"`).
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
