//! vosh-kernel: the core of vosh, an in-memory multi-user shell.
//!
//! This crate provides:
//!
//! - **Registry**: users, plaintext secrets, and per-user command allow-lists
//! - **Namespace**: the virtual directory/file tree, keyed by absolute path
//! - **Stores**: flat key/value maps for stored data and environment variables
//! - **Tools**: the `Tool` trait, registry, and builtin commands
//! - **Kernel**: session state, command history, and the permission-gated
//!   dispatcher that turns an input line into a routed operation
//! - **Persist**: the one real external effect: writing a file's content out
//!
//! The console loop lives in `vosh-repl`; it drives the kernel one line at a
//! time through [`Kernel::execute`] and acts on the returned [`Outcome`].

pub mod error;
pub mod kernel;
pub mod namespace;
pub mod persist;
pub mod registry;
pub mod result;
pub mod store;
pub mod tools;

pub use error::ShellError;
pub use kernel::{Kernel, KernelConfig, Outcome, PersistMode};
pub use namespace::{DirEntry, EntryKind, Namespace, Removed};
pub use persist::{LocalDisk, MemorySink, Persist};
pub use registry::{UserKind, UserRegistry, ADMIN_COMMANDS, USER_COMMANDS};
pub use result::ExecResult;
pub use store::FlatStore;
pub use tools::{ExecContext, Session, Tool, ToolArgs, ToolRegistry};
