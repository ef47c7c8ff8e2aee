//! Execution context for tools: the engine state, owned as one value.

use std::sync::Arc;

use crate::namespace::Namespace;
use crate::persist::{MemorySink, Persist};
use crate::registry::UserRegistry;
use crate::store::FlatStore;

/// Session state: who is logged in, and where.
///
/// `user` is `None` until the first successful login. `changeuser`
/// re-authenticates and replaces the user; the cwd and all other state
/// survive the switch.
#[derive(Debug, Clone)]
pub struct Session {
    /// Currently authenticated user, if any.
    pub user: Option<String>,
    /// Current working path. Defaults to the root.
    pub cwd: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            cwd: "/".to_string(),
        }
    }
}

/// Execution context passed to tools.
///
/// This is the whole engine: registry, namespace, both flat stores, session,
/// and the persist capability. There are no ambient globals; the kernel
/// owns one of these and hands it to tools mutably, one command at a time.
pub struct ExecContext {
    /// Credential and permission registry.
    pub users: UserRegistry,
    /// The virtual namespace.
    pub fs: Namespace,
    /// Generic stored data.
    pub data: FlatStore,
    /// Environment variables.
    pub env: FlatStore,
    /// Session state (current user, cwd).
    pub session: Session,
    /// External persist capability, used only by `save`.
    pub persist: Arc<dyn Persist>,
}

impl ExecContext {
    /// Create a context with seeded users, an empty root namespace, and the
    /// given persist sink.
    pub fn new(persist: Arc<dyn Persist>) -> Self {
        Self {
            users: UserRegistry::new(),
            fs: Namespace::new(),
            data: FlatStore::new(),
            env: FlatStore::new(),
            session: Session::default(),
            persist,
        }
    }

    /// Context with an in-memory persist sink. Nothing touches disk.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySink::new()))
    }

    /// The currently authenticated user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.session.user.as_deref()
    }
}
