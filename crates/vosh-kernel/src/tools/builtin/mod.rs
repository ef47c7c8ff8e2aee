//! Built-in commands for vosh.
//!
//! These cover the whole routable command universe except `exit`,
//! `changeuser`, and `notepad`, which the kernel dispatches itself because
//! their outcomes are not plain text (terminate, re-login, open editor).

mod env;
mod files;
mod fs;
mod misc;
mod store;
mod users;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(misc::Help);
    registry.register(misc::SayHello);
    registry.register(users::ListUsers);
    registry.register(users::AddUser);
    registry.register(users::RemoveUser);
    registry.register(users::ChangePassword);
    registry.register(users::ChangeUserType);
    registry.register(fs::Ls);
    registry.register(fs::Cd);
    registry.register(fs::Mkdir);
    registry.register(fs::Rm);
    registry.register(files::Read);
    registry.register(files::Delete);
    registry.register(files::Save);
    registry.register(store::Store);
    registry.register(store::Retrieve);
    registry.register(store::StoreDataList);
    registry.register(store::EditData);
    registry.register(env::Env);
    registry.register(env::SetEnv);
    registry.register(env::GetEnv);
}
