use std::sync::RwLock;

use subhub_core::Record;

use super::r#trait::{Lookup, Mutation, Store, StoreError, StoreResult};

/// In-memory record store.
///
/// Records live in a single insertion-ordered vector; lookups are linear
/// equality scans. Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    records: RwLock<Vec<E>>,
}

impl<E> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> InMemoryStore<E> {
    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<E>>> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<E>>> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait::async_trait]
impl<E: Record> Store<E> for InMemoryStore<E> {
    async fn find_many(&self) -> StoreResult<Vec<E>> {
        Ok(self.read()?.clone())
    }

    async fn find_many_by(&self, lookup: Lookup<E::Key>) -> StoreResult<Vec<E>> {
        let records = self.read()?;
        Ok(records
            .iter()
            .filter(|r| r.key_equals(lookup.key, &lookup.equals))
            .cloned()
            .collect())
    }

    async fn find_one(&self, lookup: Lookup<E::Key>) -> StoreResult<Option<E>> {
        let records = self.read()?;
        Ok(records
            .iter()
            .find(|r| r.key_equals(lookup.key, &lookup.equals))
            .cloned())
    }

    async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        let record = E::from_draft(E::next_id(), draft);
        self.write()?.push(record.clone());
        Ok(record)
    }

    async fn change(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E> {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply_patch(patch);
        Ok(record.clone())
    }

    async fn modify(&self, id: &E::Id, mutation: Mutation<E>) -> StoreResult<Option<E>> {
        let mut records = self.write()?;
        Ok(records.iter_mut().find(|r| r.id() == id).map(|record| {
            mutation(record);
            record.clone()
        }))
    }

    async fn delete(&self, id: &E::Id) -> StoreResult<Option<E>> {
        let mut records = self.write()?;
        Ok(records
            .iter()
            .position(|r| r.id() == id)
            .map(|idx| records.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use subhub_core::{Entity, UserId};
    use subhub_users::{CreateUser, User, UserKey, UserPatch};

    use super::*;

    fn draft(first: &str) -> CreateUser {
        CreateUser {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = InMemoryStore::<User>::new();
        let alice = store.create(draft("Alice")).await.unwrap();
        let bob = store.create(draft("Bob")).await.unwrap();
        assert_ne!(alice.id(), bob.id());

        let found = store
            .find_one(Lookup::new(UserKey::Id, alice.id().as_str()))
            .await
            .unwrap();
        assert_eq!(found, Some(alice.clone()));

        let by_email = store
            .find_one(Lookup::new(UserKey::Email, "bob@example.com"))
            .await
            .unwrap();
        assert_eq!(by_email, Some(bob.clone()));

        assert_eq!(store.find_many().await.unwrap(), vec![alice, bob]);
    }

    #[tokio::test]
    async fn find_many_by_returns_every_match() {
        let store = InMemoryStore::<User>::new();
        store.create(draft("Alice")).await.unwrap();
        store.create(draft("Alice")).await.unwrap();
        store.create(draft("Bob")).await.unwrap();

        let alices = store
            .find_many_by(Lookup::new(UserKey::Email, "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(alices.len(), 2);
    }

    #[tokio::test]
    async fn missing_records() {
        let store = InMemoryStore::<User>::new();
        let ghost = UserId::parse("ghost").unwrap();

        assert!(store.find_one(Lookup::new(UserKey::Id, "ghost")).await.unwrap().is_none());
        assert!(store.delete(&ghost).await.unwrap().is_none());
        assert!(store
            .modify(&ghost, Box::new(|u: &mut User| u.subscribe_to(&UserId::new())))
            .await
            .unwrap()
            .is_none());

        let err = store.change(&ghost, UserPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn change_applies_patch() {
        let store = InMemoryStore::<User>::new();
        let alice = store.create(draft("Alice")).await.unwrap();

        let patch = UserPatch {
            email: Some("alice@new.example".to_string()),
            ..UserPatch::default()
        };
        let changed = store.change(alice.id(), patch).await.unwrap();
        assert_eq!(changed.email(), "alice@new.example");
        assert_eq!(changed.first_name(), "Alice");

        let stored = store
            .find_one(Lookup::new(UserKey::Id, alice.id().as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, changed);
    }

    #[tokio::test]
    async fn delete_removes_and_keeps_dangling_references() {
        let store = InMemoryStore::<User>::new();
        let alice = store.create(draft("Alice")).await.unwrap();
        let bob = store.create(draft("Bob")).await.unwrap();

        let target = alice.id().clone();
        store
            .modify(bob.id(), Box::new(move |u: &mut User| u.subscribe_to(&target)))
            .await
            .unwrap();

        let deleted = store.delete(alice.id()).await.unwrap();
        assert_eq!(deleted.map(|u| u.id().clone()), Some(alice.id().clone()));
        assert_eq!(store.find_many().await.unwrap().len(), 1);

        let bob = store
            .find_one(Lookup::new(UserKey::Id, bob.id().as_str()))
            .await
            .unwrap()
            .unwrap();
        assert!(bob.is_subscribed_to(alice.id()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_modifications_are_not_lost() {
        let store = Arc::new(InMemoryStore::<User>::new());
        let subscriber = store.create(draft("Sub")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            let id = subscriber.id().clone();
            handles.push(tokio::spawn(async move {
                let target = UserId::new();
                store
                    .modify(&id, Box::new(move |u: &mut User| u.subscribe_to(&target)))
                    .await
                    .unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let stored = store
            .find_one(Lookup::new(UserKey::Id, subscriber.id().as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.subscribed_to_user_ids().len(), 32);
    }
}
