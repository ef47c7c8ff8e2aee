//! store, retrieve, storedatalist, editdata: the generic stored-data map.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// Store tool: create or overwrite a key.
pub struct Store;

#[async_trait]
impl Tool for Store {
    fn name(&self) -> &str {
        "store"
    }

    fn usage(&self) -> &str {
        "Usage: store <key> <value>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(key), Some(value)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        ctx.data.set(key, value);
        ExecResult::success(format!("Data stored with key '{key}'."))
    }
}

/// Retrieve tool: look up a key.
pub struct Retrieve;

#[async_trait]
impl Tool for Retrieve {
    fn name(&self) -> &str {
        "retrieve"
    }

    fn usage(&self) -> &str {
        "Usage: retrieve <key>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(key) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.data.get(key) {
            Some(value) => ExecResult::success(format!("Data for key '{key}': {value}")),
            None => ShellError::KeyNotFound(key.to_string()).into(),
        }
    }
}

/// StoreDataList tool: every entry, in stable order.
pub struct StoreDataList;

#[async_trait]
impl Tool for StoreDataList {
    fn name(&self) -> &str {
        "storedatalist"
    }

    fn usage(&self) -> &str {
        "Usage: storedatalist"
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let mut out = String::from("Stored Data:");
        for (key, value) in ctx.data.list() {
            out.push_str(&format!("\n  Key: {key}, Value: {value}"));
        }
        ExecResult::success(out)
    }
}

/// EditData tool: overwrite an existing key, never create one.
pub struct EditData;

#[async_trait]
impl Tool for EditData {
    fn name(&self) -> &str {
        "editdata"
    }

    fn usage(&self) -> &str {
        "Usage: editdata <key> <newvalue>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(key), Some(value)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        if ctx.data.edit(key, value) {
            ExecResult::success(format!("Data for key '{key}' updated successfully."))
        } else {
            ExecResult::failure(
                1,
                format!("No data found for key '{key}'. Use 'store <key> <value>' to add new data."),
            )
        }
    }
}
