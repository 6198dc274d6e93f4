//! Entity traits: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity can never exist in an invalid state: its constructor is the single
/// point of truth for validity, and every mutating operation re-asserts the
/// relevant invariants before returning.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Marker for entities that form a consistency boundary.
///
/// An aggregate root owns and validates a cluster of related objects (an Order
/// owns its OrderItems); collaborators reference it only by its identifier.
pub trait AggregateRoot: Entity {}
