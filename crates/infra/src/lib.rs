//! Infrastructure layer: record storage behind a generic repository interface.

pub mod store;

pub use store::{InMemoryStore, Lookup, Mutation, Store, StoreError, StoreResult};
