//! ls, cd, mkdir, rm: namespace navigation and mutation.

use async_trait::async_trait;

use crate::namespace::{EntryKind, Removed};
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// Ls tool: list a directory.
///
/// The optional argument is used verbatim as an absolute directory path; it
/// is never resolved against the cwd.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn usage(&self) -> &str {
        "Usage: ls [directory]"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let dir = args
            .get(0)
            .unwrap_or(ctx.session.cwd.as_str())
            .to_string();

        match ctx.fs.list(&dir) {
            Ok(entries) => {
                let mut out = format!("Contents of {dir}:");
                for entry in entries {
                    match entry.kind {
                        EntryKind::Directory => out.push_str(&format!("\n<DIR> {}", entry.name)),
                        EntryKind::File => out.push_str(&format!("\n      {}", entry.name)),
                    }
                }
                ExecResult::success(out)
            }
            Err(e) => e.into(),
        }
    }
}

/// Cd tool: change the working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn usage(&self) -> &str {
        "Usage: cd <directory>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(target) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.fs.change_dir(&ctx.session.cwd, target) {
            Ok(path) => {
                ctx.session.cwd = path;
                ExecResult::success(format!("Current directory: {}", ctx.session.cwd))
            }
            Err(e) => e.into(),
        }
    }
}

/// Mkdir tool: register a new empty directory under the cwd.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn usage(&self) -> &str {
        "Usage: mkdir <directory>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(name) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.fs.mkdir(&ctx.session.cwd, name) {
            Ok(path) => ExecResult::success(format!("Directory '{path}' created successfully.")),
            Err(e) => e.into(),
        }
    }
}

/// Rm tool: remove a directory (tried first) or a file in the cwd.
pub struct Rm;

#[async_trait]
impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn usage(&self) -> &str {
        "Usage: rm <file/directory>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(target) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.fs.remove(&ctx.session.cwd, target) {
            Ok(Removed::Directory(path)) => {
                ExecResult::success(format!("Directory '{path}' removed successfully."))
            }
            Ok(Removed::File(name)) => {
                ExecResult::success(format!("File '{name}' removed successfully."))
            }
            Err(e) => e.into(),
        }
    }
}
