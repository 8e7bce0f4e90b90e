//! Entity traits: identity + continuity across state changes.

use core::fmt;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// An entity that can be kept in a generic keyed record store.
///
/// The store never looks inside a record beyond what this trait exposes:
/// it mints identifiers, builds records from drafts, applies partial patches
/// and answers equality lookups on a named key.
pub trait Record: Entity<Id: fmt::Display + Send + Sync> + Clone + Send + Sync + 'static {
    /// Keys a record can be looked up by.
    type Key: Copy + fmt::Debug + Send + Sync;
    /// Input shape for creating a record (everything except the id).
    type Draft: Send;
    /// Partial update shape.
    type Patch: Send;

    /// Mint a fresh identifier for a record about to be created.
    fn next_id() -> Self::Id;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Apply a partial update. Fields absent from the patch are left untouched.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Whether the value stored under `key` equals `value`.
    fn key_equals(&self, key: Self::Key, value: &str) -> bool;
}
