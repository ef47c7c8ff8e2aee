//! Tool system for vosh.
//!
//! Every shell command is a tool. Builtins implement the same `Tool` trait
//! and are registered once in a `ToolRegistry`; the kernel routes permitted
//! commands to them by (case-insensitive) name.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::{ExecContext, Session};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs};
