//! listusers, adduser, removeuser, changepassword, changeusertype: registry
//! commands.

use async_trait::async_trait;

use crate::registry::UserKind;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// ListUsers tool: usernames in registry insertion order.
pub struct ListUsers;

#[async_trait]
impl Tool for ListUsers {
    fn name(&self) -> &str {
        "listusers"
    }

    fn usage(&self) -> &str {
        "Usage: listusers"
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let mut out = String::from("Users:");
        for name in ctx.users.usernames() {
            out.push_str(&format!("\n  {name}"));
        }
        ExecResult::success(out)
    }
}

/// AddUser tool: register a user with a copy of the "user" template.
pub struct AddUser;

#[async_trait]
impl Tool for AddUser {
    fn name(&self) -> &str {
        "adduser"
    }

    fn usage(&self) -> &str {
        "Usage: adduser <username> <password>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(username), Some(password)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.users.add_user(username, password) {
            Ok(()) => ExecResult::success(format!("User '{username}' added successfully.")),
            Err(e) => e.into(),
        }
    }
}

/// RemoveUser tool: drop a user's credentials and permission set together.
pub struct RemoveUser;

#[async_trait]
impl Tool for RemoveUser {
    fn name(&self) -> &str {
        "removeuser"
    }

    fn usage(&self) -> &str {
        "Usage: removeuser <username>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(username) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.users.remove_user(username) {
            Ok(()) => ExecResult::success(format!("User '{username}' removed successfully.")),
            Err(e) => e.into(),
        }
    }
}

/// ChangePassword tool: the acting user changes their own password.
pub struct ChangePassword;

#[async_trait]
impl Tool for ChangePassword {
    fn name(&self) -> &str {
        "changepassword"
    }

    fn usage(&self) -> &str {
        "Usage: changepassword <oldpassword> <newpassword>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(old), Some(new)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        let Some(user) = ctx.current_user().map(str::to_string) else {
            return ExecResult::failure(1, "No user is logged in.");
        };
        match ctx.users.change_password(&user, old, new) {
            Ok(()) => ExecResult::success("Password changed successfully."),
            Err(e) => e.into(),
        }
    }
}

/// ChangeUserType tool: reassign a user's permission template. Admin only.
/// The authorization check deliberately precedes the argument-count check.
pub struct ChangeUserType;

#[async_trait]
impl Tool for ChangeUserType {
    fn name(&self) -> &str {
        "changeusertype"
    }

    fn usage(&self) -> &str {
        "Usage: changeusertype <username> <usertype>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let acting = ctx.current_user().unwrap_or_default().to_string();
        if acting != "admin" {
            return ExecResult::failure(1, "Access denied: Only admin can change user types.");
        }
        let (Some(target), Some(usertype)) = (args.get(0), args.get(1)) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.users.set_user_type(&acting, target, usertype) {
            Ok(UserKind::Admin) => {
                ExecResult::success(format!("User '{target}' is now an admin."))
            }
            Ok(UserKind::User) => {
                ExecResult::success(format!("User '{target}' is now a standard user."))
            }
            Err(e) => e.into(),
        }
    }
}
