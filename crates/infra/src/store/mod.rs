//! Generic keyed record store boundary.
//!
//! Handlers talk to records only through [`Store`]; the in-memory backend is
//! the one used by the service today.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryStore;
pub use r#trait::{Lookup, Mutation, Store, StoreError, StoreResult};
