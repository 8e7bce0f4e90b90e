use std::sync::Arc;

use thiserror::Error;

use subhub_core::Record;

/// Result type returned by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// In-place mutation applied by [`Store::modify`] while the record is locked.
pub type Mutation<E> = Box<dyn FnOnce(&mut E) + Send>;

/// Errors surfaced by a record store.
///
/// These are **infrastructure errors**. A lookup that simply finds nothing is
/// not an error: reads return `Option` and callers decide what absence means.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write targeted a record that does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The backing lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Equality lookup on one of a record's keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<K> {
    pub key: K,
    pub equals: String,
}

impl<K> Lookup<K> {
    pub fn new(key: K, equals: impl Into<String>) -> Self {
        Self {
            key,
            equals: equals.into(),
        }
    }
}

/// Generic CRUD repository for records of type `E`.
///
/// ## Semantics
///
/// - Lookups compare by plain equality on the requested key.
/// - `create` mints the identifier; callers never choose it.
/// - `change` and `modify` are the only writes to an existing record.
///   `modify` runs its closure while holding the store's write access, so a
///   read-modify-write through it cannot lose a concurrent update.
/// - `delete` does not touch other records that may reference the deleted id.
#[async_trait::async_trait]
pub trait Store<E: Record>: Send + Sync {
    /// All records, in creation order.
    async fn find_many(&self) -> StoreResult<Vec<E>>;

    /// All records whose `lookup.key` equals `lookup.equals`.
    async fn find_many_by(&self, lookup: Lookup<E::Key>) -> StoreResult<Vec<E>>;

    /// First record whose `lookup.key` equals `lookup.equals`.
    async fn find_one(&self, lookup: Lookup<E::Key>) -> StoreResult<Option<E>>;

    async fn create(&self, draft: E::Draft) -> StoreResult<E>;

    /// Apply a partial update and return the updated record.
    ///
    /// Fails with [`StoreError::NotFound`] if no record has this id.
    async fn change(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E>;

    /// Atomically mutate a record and return it, or `None` if absent.
    async fn modify(&self, id: &E::Id, mutation: Mutation<E>) -> StoreResult<Option<E>>;

    /// Remove a record and return it, or `None` if absent.
    async fn delete(&self, id: &E::Id) -> StoreResult<Option<E>>;
}

#[async_trait::async_trait]
impl<E, S> Store<E> for Arc<S>
where
    E: Record,
    S: Store<E> + ?Sized,
{
    async fn find_many(&self) -> StoreResult<Vec<E>> {
        (**self).find_many().await
    }

    async fn find_many_by(&self, lookup: Lookup<E::Key>) -> StoreResult<Vec<E>> {
        (**self).find_many_by(lookup).await
    }

    async fn find_one(&self, lookup: Lookup<E::Key>) -> StoreResult<Option<E>> {
        (**self).find_one(lookup).await
    }

    async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        (**self).create(draft).await
    }

    async fn change(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E> {
        (**self).change(id, patch).await
    }

    async fn modify(&self, id: &E::Id, mutation: Mutation<E>) -> StoreResult<Option<E>> {
        (**self).modify(id, mutation).await
    }

    async fn delete(&self, id: &E::Id) -> StoreResult<Option<E>> {
        (**self).delete(id).await
    }
}
