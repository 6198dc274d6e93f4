//! Generic repository contract consumed by persistence adapters.

use crate::entity::Entity;
use crate::error::DomainResult;

/// Storage contract for an aggregate type.
///
/// Adapters must reconstruct entities through their validating constructors when
/// loading: a loaded entity passes the same checks as a freshly created one, and
/// invariant checks are never bypassed on rehydration.
///
/// A method an adapter does not fulfil yet signals
/// [`DomainError::Unimplemented`](crate::DomainError::Unimplemented) rather than
/// a validation failure.
pub trait Repository<T: Entity> {
    fn create(&self, entity: &T) -> DomainResult<()>;

    fn update(&self, entity: &T) -> DomainResult<()>;

    /// Look up a single entity; missing ids are `DomainError::NotFound`.
    fn find(&self, id: &T::Id) -> DomainResult<T>;

    fn find_all(&self) -> DomainResult<Vec<T>>;
}
