//! The Kernel, the heart of vosh.
//!
//! The Kernel owns and coordinates all core components:
//! - the credential/permission registry
//! - the virtual namespace
//! - the two flat stores (data, environment)
//! - session state (current user, cwd)
//! - the append-only command history
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Kernel                            │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ UserRegistry │  │  Namespace   │  │  ToolRegistry  │  │
//! │  │ (secrets,    │  │ (dirs, files)│  │  (builtins)    │  │
//! │  │  permissions)│  │              │  │                │  │
//! │  └──────────────┘  └──────────────┘  └────────────────┘  │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │  FlatStore×2 │  │   Session    │  │    History     │  │
//! │  └──────────────┘  └──────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The console driver calls [`Kernel::execute`] one line at a time and acts
//! on the returned [`Outcome`]. Every error is recovered here and surfaced
//! as a single human-readable line; only `exit` ends the session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::error::ShellError;
use crate::persist::{LocalDisk, MemorySink, Persist};
use crate::result::ExecResult;
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};

/// Where `save` writes files.
#[derive(Debug, Clone)]
pub enum PersistMode {
    /// Write through to the host filesystem under `root`.
    LocalDisk { root: PathBuf },
    /// Capture writes in memory. Tests and pure sandboxed use.
    Memory,
}

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    pub name: String,
    /// Persist mode for the `save` command.
    pub persist: PersistMode,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            persist: PersistMode::Memory,
        }
    }
}

impl KernelConfig {
    /// Config for the interactive console: `save` writes into the process's
    /// working directory.
    pub fn repl() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            name: "repl".to_string(),
            persist: PersistMode::LocalDisk { root },
        }
    }

    /// Config with no disk access at all.
    pub fn isolated() -> Self {
        Self {
            name: "isolated".to_string(),
            persist: PersistMode::Memory,
        }
    }

    /// Set the kernel name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// What the console driver should do after a line has been executed.
#[derive(Debug)]
pub enum Outcome {
    /// Print the result and read the next line.
    Output(ExecResult),
    /// Re-run the login prompt; on success the session user is replaced and
    /// the cwd (and all other state) is kept.
    SwitchUser,
    /// Open the line editor for `filename`, then commit the collected text
    /// via [`Kernel::write_buffer`].
    Editor { filename: String },
    /// Terminate immediately. No cleanup, no confirmation; unsaved namespace
    /// content is lost.
    Exit,
}

/// The Kernel executes vosh command lines.
pub struct Kernel {
    name: String,
    tools: Arc<ToolRegistry>,
    ctx: RwLock<ExecContext>,
    history: RwLock<Vec<String>>,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let persist: Arc<dyn Persist> = match config.persist {
            PersistMode::LocalDisk { root } => Arc::new(LocalDisk::new(root)),
            PersistMode::Memory => Arc::new(MemorySink::new()),
        };

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        Ok(Self {
            name: config.name,
            tools: Arc::new(tools),
            ctx: RwLock::new(ExecContext::new(persist)),
            history: RwLock::new(Vec::new()),
        })
    }

    /// Get the kernel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authenticate and make `username` the session user.
    ///
    /// Used both for the initial login and for `changeuser`; the cwd, the
    /// namespace, and the stores all survive the switch.
    #[tracing::instrument(level = "info", skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ShellError> {
        let mut ctx = self.ctx.write().await;
        ctx.users.authenticate(username, password)?;
        ctx.session.user = Some(username.to_string());
        tracing::debug!(user = username, "login successful");
        Ok(())
    }

    /// Execute one raw input line.
    ///
    /// The line is appended to history unconditionally, blank, denied, and
    /// invalid lines included. Permission is checked case-sensitively against
    /// the raw command token; routing is case-insensitive. The asymmetry is
    /// deliberate and pinned by a test.
    #[tracing::instrument(level = "info", skip(self, line), fields(input_len = line.len()))]
    pub async fn execute(&self, line: &str) -> Outcome {
        self.history.write().await.push(line.to_string());

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Outcome::Output(ExecResult::success(""));
        };
        let args = ToolArgs {
            positional: tokens.map(str::to_string).collect(),
        };

        let mut ctx = self.ctx.write().await;
        let Some(user) = ctx.current_user().map(str::to_string) else {
            return Outcome::Output(ExecResult::failure(1, "No user is logged in."));
        };

        if !ctx.users.is_permitted(&user, command) {
            tracing::debug!(user = %user, command, "permission check failed");
            return Outcome::Output(
                ShellError::AccessDenied {
                    user,
                    command: command.to_string(),
                }
                .into(),
            );
        }

        // Commands whose outcome is not plain text are dispatched here; the
        // rest route through the tool registry.
        match command.to_lowercase().as_str() {
            "exit" => Outcome::Exit,
            "changeuser" => Outcome::SwitchUser,
            "notepad" => {
                let Some(filename) = args.get(0) else {
                    return Outcome::Output(ExecResult::usage("Usage: notepad <filename>"));
                };
                if !filename.ends_with(".txt") {
                    return Outcome::Output(ShellError::InvalidExtension.into());
                }
                Outcome::Editor {
                    filename: filename.to_string(),
                }
            }
            routed => match self.tools.get(routed) {
                Some(tool) => Outcome::Output(tool.execute(args, &mut ctx).await),
                None => Outcome::Output(ShellError::UnknownCommand(command.to_string()).into()),
            },
        }
    }

    /// Commit notepad content into the current directory, creating or
    /// overwriting `filename`.
    pub async fn write_buffer(&self, filename: &str, content: &str) -> ExecResult {
        let mut ctx = self.ctx.write().await;
        let cwd = ctx.session.cwd.clone();
        match ctx.fs.write_file(&cwd, filename, content) {
            Ok(()) => ExecResult::success(format!(
                "{filename} edited successfully. Use 'save {filename}' to save."
            )),
            Err(e) => e.into(),
        }
    }

    /// The currently authenticated user, if any.
    pub async fn current_user(&self) -> Option<String> {
        self.ctx.read().await.session.user.clone()
    }

    /// Current working path.
    pub async fn cwd(&self) -> String {
        self.ctx.read().await.session.cwd.clone()
    }

    /// All usernames, in registry insertion order. For the welcome banner.
    pub async fn usernames(&self) -> Vec<String> {
        self.ctx.read().await.users.usernames()
    }

    /// The session user's permitted commands. For the post-login banner.
    pub async fn permitted_commands(&self) -> Vec<String> {
        let ctx = self.ctx.read().await;
        match ctx.current_user() {
            Some(user) => ctx
                .users
                .permissions(user)
                .map(|cmds| cmds.to_vec())
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Every raw input line seen so far, in order.
    pub async fn history(&self) -> Vec<String> {
        self.history.read().await.clone()
    }
}
