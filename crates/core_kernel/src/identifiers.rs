//! Integer identity policy for domain entities
//!
//! Entities carry a plain `i64` identity. Negative values mean "unassigned":
//! an entity starts out unassigned and receives its id exactly once, either
//! from the caller or from [`next_id`].

/// Identity type shared by all stored entities
pub type EntityId = i64;

/// Sentinel carried by entities that have not been given an id yet
pub const UNASSIGNED_ID: EntityId = -1;

/// Returns whether `id` is a valid, assigned identity (`>= 0`)
pub fn is_assigned(id: EntityId) -> bool {
    id >= 0
}

/// Computes the next identity to hand out given the ids already in use
///
/// The result is one past the largest id in use, never lower than `1`.
/// Unassigned ids in the input are ignored.
///
/// # Examples
///
/// ```rust
/// use core_kernel::next_id;
///
/// assert_eq!(next_id(std::iter::empty()), 1);
/// assert_eq!(next_id([1, 7, 3]), 8);
/// ```
pub fn next_id<I>(ids: I) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    ids.into_iter().fold(0, EntityId::max).saturating_add(1)
}
