//! env, setenv, getenvi: environment variables.
//!
//! Structurally identical to the stored-data commands; only the wording and
//! the backing store differ. The lookup command is spelled `getenvi`.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// Env tool: list every environment variable.
pub struct Env;

#[async_trait]
impl Tool for Env {
    fn name(&self) -> &str {
        "env"
    }

    fn usage(&self) -> &str {
        "Usage: env"
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let mut out = String::from("Environment Variables:");
        for (key, value) in ctx.env.list() {
            out.push_str(&format!("\n  {key}: {value}"));
        }
        ExecResult::success(out)
    }
}

/// SetEnv tool: create or overwrite a variable.
pub struct SetEnv;

#[async_trait]
impl Tool for SetEnv {
    fn name(&self) -> &str {
        "setenv"
    }

    fn usage(&self) -> &str {
        "Usage: setenv <key> <value>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(key), Some(value)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        ctx.env.set(key, value);
        ExecResult::success(format!("Environment variable '{key}' set to '{value}'."))
    }
}

/// GetEnv tool: look up a variable.
pub struct GetEnv;

#[async_trait]
impl Tool for GetEnv {
    fn name(&self) -> &str {
        "getenvi"
    }

    fn usage(&self) -> &str {
        "Usage: getenvi <key>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(key) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.env.get(key) {
            Some(value) => ExecResult::success(format!("Environment variable '{key}': {value}")),
            None => ShellError::EnvVarNotFound(key.to_string()).into(),
        }
    }
}
