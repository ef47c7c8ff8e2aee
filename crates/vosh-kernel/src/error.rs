//! Shell error types.
//!
//! Every fallible component operation returns a `ShellError`. All of them are
//! recovered at the dispatcher boundary and surfaced as a single line; none
//! is fatal. The `Display` strings are the exact lines the user sees.

use thiserror::Error;

/// Errors produced by the registry, namespace, stores, and persist capability.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Login or re-login with a bad username/password pair.
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,

    /// The command is not in the current user's permission set.
    #[error("Access denied: {user} cannot execute command '{command}'.")]
    AccessDenied { user: String, command: String },

    /// Permitted but not routable to any handler.
    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("User '{0}' already exists.")]
    UserExists(String),

    #[error("User '{0}' does not exist.")]
    UserNotFound(String),

    #[error("Old password is incorrect.")]
    WrongOldPassword,

    /// Non-admin attempting an admin-only action.
    #[error("Access denied: Only admin can change user types.")]
    NotAuthorized,

    #[error("Invalid user type. Use 'admin' or 'user'.")]
    InvalidUserType,

    #[error("Directory '{0}' does not exist.")]
    DirectoryNotFound(String),

    #[error("Directory '{0}' already exists.")]
    DirectoryExists(String),

    /// `rm` target that is neither a directory path nor a file in the cwd.
    #[error("'{0}' does not exist.")]
    EntryNotFound(String),

    /// File lookup inside the current directory failed.
    #[error("Error: {0} does not exist in the current directory.")]
    FileNotFound(String),

    #[error("No data found for key '{0}'.")]
    KeyNotFound(String),

    #[error("No environment variable found with key '{0}'.")]
    EnvVarNotFound(String),

    /// The notepad editor only accepts `.txt` filenames.
    #[error("Error: Filename must have a .txt extension.")]
    InvalidExtension,

    /// The external persist capability failed.
    #[error("Error: could not save {filename}: {source}")]
    Persist {
        filename: String,
        source: std::io::Error,
    },
}
