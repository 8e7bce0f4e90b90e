use std::sync::Arc;

use subhub_infra::{InMemoryStore, Store};
use subhub_users::User;

/// Shared handles to the stores the handlers talk to.
#[derive(Clone)]
pub struct AppServices {
    users: Arc<dyn Store<User>>,
}

impl AppServices {
    pub fn new(users: Arc<dyn Store<User>>) -> Self {
        Self { users }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::<User>::new()))
    }

    pub fn users(&self) -> &dyn Store<User> {
        self.users.as_ref()
    }
}

/// Wire the services the binary runs with.
pub fn build_services() -> AppServices {
    tracing::info!("using in-memory user store");
    AppServices::in_memory()
}
