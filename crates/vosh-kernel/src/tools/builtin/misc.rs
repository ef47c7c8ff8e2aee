//! help, sayhello: session conveniences.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// Help tool: list the current user's permitted commands.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn usage(&self) -> &str {
        "Usage: help"
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(user) = ctx.current_user() else {
            return ExecResult::failure(1, "No user is logged in.");
        };
        let mut out = format!("Available commands for {user}:");
        if let Some(commands) = ctx.users.permissions(user) {
            for command in commands {
                out.push_str(&format!("\n  {command}"));
            }
        }
        ExecResult::success(out)
    }
}

/// SayHello tool.
pub struct SayHello;

#[async_trait]
impl Tool for SayHello {
    fn name(&self) -> &str {
        "sayhello"
    }

    fn usage(&self) -> &str {
        "Usage: sayhello"
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success("Hello!")
    }
}
