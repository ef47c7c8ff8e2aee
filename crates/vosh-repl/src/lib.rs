//! vosh REPL: the interactive console for vosh.
//!
//! The REPL owns the external collaborators the kernel deliberately does not
//! implement:
//! - the line-based console loop (rustyline)
//! - the literal login prompt (initial login and `changeuser`)
//! - the notepad line collector (reads until the first blank line)
//!
//! It drives the kernel one line at a time through [`Repl::process_line`]
//! and acts on the returned [`LineResult`].

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::{Builder, Runtime};

use vosh_kernel::{ExecResult, Kernel, KernelConfig, Outcome, ShellError};

/// What the console loop should do after processing a line.
#[derive(Debug)]
pub enum LineResult {
    /// Print this (possibly empty) text and read the next line.
    Output(String),
    /// Run the login prompt; the session resumes with the new user.
    Login,
    /// Collect editor lines for this filename, then commit them.
    Editor(String),
    /// Terminate immediately.
    Exit,
}

/// REPL state: a kernel plus the runtime that drives it.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
}

impl Repl {
    /// Create a REPL whose `save` command writes into the process's working
    /// directory.
    pub fn new() -> Result<Self> {
        Self::with_config(KernelConfig::repl())
    }

    /// Create a REPL with a custom kernel configuration.
    ///
    /// Commands run strictly one at a time, so a current-thread runtime is
    /// all the kernel needs.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        let runtime = Builder::new_current_thread()
            .build()
            .context("Failed to create tokio runtime")?;
        Ok(Self { kernel, runtime })
    }

    /// Attempt a login. Used for the initial prompt and for `changeuser`.
    pub fn login(&self, username: &str, password: &str) -> Result<(), ShellError> {
        self.runtime.block_on(self.kernel.login(username, password))
    }

    /// Process a single input line.
    pub fn process_line(&self, line: &str) -> LineResult {
        match self.runtime.block_on(self.kernel.execute(line)) {
            Outcome::Output(result) => LineResult::Output(render(&result)),
            Outcome::SwitchUser => LineResult::Login,
            Outcome::Editor { filename } => LineResult::Editor(filename),
            Outcome::Exit => LineResult::Exit,
        }
    }

    /// Commit collected notepad lines into the current directory.
    pub fn commit_buffer(&self, filename: &str, content: &str) -> String {
        render(&self.runtime.block_on(self.kernel.write_buffer(filename, content)))
    }

    /// Known usernames, for the welcome banner.
    pub fn usernames(&self) -> Vec<String> {
        self.runtime.block_on(self.kernel.usernames())
    }

    /// The session user's permitted commands, for the post-login banner.
    pub fn permitted_commands(&self) -> Vec<String> {
        self.runtime.block_on(self.kernel.permitted_commands())
    }

    /// Current working path, for the prompt.
    pub fn cwd(&self) -> String {
        self.runtime.block_on(self.kernel.cwd())
    }

    /// Currently authenticated user, if any.
    pub fn current_user(&self) -> Option<String> {
        self.runtime.block_on(self.kernel.current_user())
    }
}

/// One line of console text per result: the output on success, the recovered
/// error line on failure.
fn render(result: &ExecResult) -> String {
    if result.ok() {
        result.out.clone()
    } else {
        result.err.clone()
    }
}

/// Run the interactive console until `exit` or end of input.
pub fn run() -> Result<()> {
    let repl = Repl::new()?;
    let mut editor: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to initialize line editor")?;

    println!("Welcome to vosh!");
    println!("Available users:");
    for user in repl.usernames() {
        println!("  {user}");
    }

    if !login_prompt(&repl, &mut editor)? {
        return Ok(());
    }

    loop {
        let prompt = format!("{}> ", repl.cwd());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e).context("Failed to read input"),
        };
        let _ = editor.add_history_entry(line.as_str());

        match repl.process_line(&line) {
            LineResult::Output(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            LineResult::Login => {
                if !login_prompt(&repl, &mut editor)? {
                    return Ok(());
                }
            }
            LineResult::Editor(filename) => {
                println!("Editing {filename}. Type your text below (end with an empty line):");
                let content = collect_buffer(&mut editor)?;
                println!("{}", repl.commit_buffer(&filename, &content));
            }
            LineResult::Exit => return Ok(()),
        }
    }
}

/// Prompt for credentials until a login succeeds. Returns false on EOF.
fn login_prompt(repl: &Repl, editor: &mut Editor<(), DefaultHistory>) -> Result<bool> {
    loop {
        let username = match editor.readline("Username: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(e) => return Err(e).context("Failed to read username"),
        };
        let password = match editor.readline("Password: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(e) => return Err(e).context("Failed to read password"),
        };

        match repl.login(username.trim(), password.trim()) {
            Ok(()) => {
                let user = repl.current_user().unwrap_or_default();
                println!("Login successful. Welcome, {user}!");
                println!("Available commands for {user}:");
                for command in repl.permitted_commands() {
                    println!("  {command}");
                }
                return Ok(true);
            }
            Err(e) => println!("{e}"),
        }
    }
}

/// Read editor lines until the first blank (or whitespace-only) line.
fn collect_buffer(editor: &mut Editor<(), DefaultHistory>) -> Result<String> {
    let mut lines = Vec::new();
    loop {
        let line = match editor.readline("") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read editor input"),
        };
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
