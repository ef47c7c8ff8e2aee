//! Credential and permission registry.
//!
//! Each user carries a plaintext secret and a permission set, a copy of one
//! of the two fixed templates, taken at assignment time. Later reassignments
//! hand out fresh copies; templates themselves never change. Secrets are
//! stored as-is: secure credential storage is out of scope.
//!
//! Known gap: nothing stops `admin` from
//! removing or demoting itself.

use std::str::FromStr;

use crate::error::ShellError;

/// The full command universe, which is also the admin template.
pub const ADMIN_COMMANDS: &[&str] = &[
    "help",
    "sayhello",
    "exit",
    "listusers",
    "adduser",
    "removeuser",
    "changepassword",
    "storedatalist",
    "editdata",
    "changeuser",
    "changeusertype",
    "ls",
    "cd",
    "mkdir",
    "rm",
    "store",
    "retrieve",
    "env",
    "setenv",
    "getenvi",
    "notepad",
    "save",
    "read",
    "delete",
];

/// The reduced template assigned to ordinary users.
pub const USER_COMMANDS: &[&str] = &[
    "help",
    "sayhello",
    "exit",
    "changepassword",
    "store",
    "retrieve",
    "storedatalist",
    "changeuser",
    "ls",
    "cd",
    "mkdir",
    "rm",
    "env",
    "setenv",
    "getenvi",
    "notepad",
    "save",
    "read",
    "delete",
];

/// The two permission templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    Admin,
    User,
}

impl UserKind {
    /// The template command list for this kind.
    pub fn template(self) -> &'static [&'static str] {
        match self {
            UserKind::Admin => ADMIN_COMMANDS,
            UserKind::User => USER_COMMANDS,
        }
    }
}

impl FromStr for UserKind {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserKind::Admin),
            "user" => Ok(UserKind::User),
            _ => Err(ShellError::InvalidUserType),
        }
    }
}

/// One registered user: identity, secret, and permission set.
#[derive(Debug, Clone)]
struct User {
    name: String,
    secret: String,
    permissions: Vec<String>,
}

impl User {
    fn new(name: &str, secret: &str, kind: UserKind) -> Self {
        Self {
            name: name.to_string(),
            secret: secret.to_string(),
            permissions: kind.template().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The set of known users, in insertion order.
///
/// Keeping the secret and the permission set in one struct makes removal
/// atomic by construction: both go together or neither does.
#[derive(Debug)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry {
    /// Create a registry seeded with the two built-in accounts.
    pub fn new() -> Self {
        Self {
            users: vec![
                User::new("admin", "admin123", UserKind::Admin),
                User::new("user", "user123", UserKind::User),
            ],
        }
    }

    fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name == name)
    }

    /// Check a username/password pair. Plain string equality, case-sensitive.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), ShellError> {
        match self.find(username) {
            Some(user) if user.secret == password => Ok(()),
            _ => Err(ShellError::InvalidCredentials),
        }
    }

    /// Register a new user with a copy of the "user" template.
    pub fn add_user(&mut self, username: &str, password: &str) -> Result<(), ShellError> {
        if self.find(username).is_some() {
            return Err(ShellError::UserExists(username.to_string()));
        }
        self.users.push(User::new(username, password, UserKind::User));
        Ok(())
    }

    /// Remove a user. Credential and permission set go in one step.
    pub fn remove_user(&mut self, username: &str) -> Result<(), ShellError> {
        let before = self.users.len();
        self.users.retain(|u| u.name != username);
        if self.users.len() == before {
            return Err(ShellError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    /// Change the acting user's own password. The only identity check is
    /// string equality against the stored secret.
    pub fn change_password(
        &mut self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ShellError> {
        let user = self
            .find_mut(username)
            .ok_or_else(|| ShellError::UserNotFound(username.to_string()))?;
        if user.secret != old_password {
            return Err(ShellError::WrongOldPassword);
        }
        user.secret = new_password.to_string();
        Ok(())
    }

    /// Reassign `target`'s permission set to a fresh copy of the requested
    /// template, discarding prior customizations. Only the literal username
    /// `"admin"` may act.
    pub fn set_user_type(
        &mut self,
        acting_user: &str,
        target: &str,
        usertype: &str,
    ) -> Result<UserKind, ShellError> {
        if acting_user != "admin" {
            return Err(ShellError::NotAuthorized);
        }
        if self.find(target).is_none() {
            return Err(ShellError::UserNotFound(target.to_string()));
        }
        let kind = usertype.parse::<UserKind>()?;
        let user = self
            .find_mut(target)
            .ok_or_else(|| ShellError::UserNotFound(target.to_string()))?;
        user.permissions = kind.template().iter().map(|s| s.to_string()).collect();
        Ok(kind)
    }

    /// Usernames in registry insertion order.
    pub fn usernames(&self) -> Vec<String> {
        self.users.iter().map(|u| u.name.clone()).collect()
    }

    /// A user's permission set, in template order.
    pub fn permissions(&self, username: &str) -> Option<&[String]> {
        self.find(username).map(|u| u.permissions.as_slice())
    }

    /// Case-sensitive permission check.
    pub fn is_permitted(&self, username: &str, command: &str) -> bool {
        self.find(username)
            .is_some_and(|u| u.permissions.iter().any(|c| c == command))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn seed_users_authenticate() {
        let reg = UserRegistry::new();
        assert!(reg.authenticate("admin", "admin123").is_ok());
        assert!(reg.authenticate("user", "user123").is_ok());
        assert!(matches!(
            reg.authenticate("admin", "wrong"),
            Err(ShellError::InvalidCredentials)
        ));
        assert!(matches!(
            reg.authenticate("nobody", "admin123"),
            Err(ShellError::InvalidCredentials)
        ));
    }

    #[test]
    fn add_user_gets_user_template_copy() {
        let mut reg = UserRegistry::new();
        reg.add_user("alice", "secret").unwrap();

        assert!(reg.authenticate("alice", "secret").is_ok());
        assert!(reg.is_permitted("alice", "ls"));
        assert!(!reg.is_permitted("alice", "adduser"));

        let err = reg.add_user("alice", "other").unwrap_err();
        assert!(matches!(err, ShellError::UserExists(u) if u == "alice"));
    }

    #[test]
    fn remove_user_drops_credentials_and_permissions_together() {
        let mut reg = UserRegistry::new();
        reg.add_user("bob", "pw").unwrap();
        reg.remove_user("bob").unwrap();

        assert!(reg.authenticate("bob", "pw").is_err());
        assert!(reg.permissions("bob").is_none());
        assert!(matches!(
            reg.remove_user("bob"),
            Err(ShellError::UserNotFound(_))
        ));
    }

    #[test]
    fn change_password_requires_correct_old_password() {
        let mut reg = UserRegistry::new();
        let err = reg.change_password("user", "nope", "new").unwrap_err();
        assert!(matches!(err, ShellError::WrongOldPassword));
        assert!(reg.authenticate("user", "user123").is_ok());

        reg.change_password("user", "user123", "new").unwrap();
        assert!(reg.authenticate("user", "new").is_ok());
        assert!(reg.authenticate("user", "user123").is_err());
    }

    #[test]
    fn set_user_type_is_admin_only() {
        let mut reg = UserRegistry::new();
        reg.add_user("bob", "pw").unwrap();

        let err = reg.set_user_type("user", "bob", "admin").unwrap_err();
        assert!(matches!(err, ShellError::NotAuthorized));
        assert!(!reg.is_permitted("bob", "adduser"));

        reg.set_user_type("admin", "bob", "admin").unwrap();
        assert!(reg.is_permitted("bob", "adduser"));

        reg.set_user_type("admin", "bob", "user").unwrap();
        assert!(!reg.is_permitted("bob", "adduser"));
    }

    #[test]
    fn set_user_type_rejects_bad_type_and_missing_target() {
        let mut reg = UserRegistry::new();
        assert!(matches!(
            reg.set_user_type("admin", "ghost", "admin"),
            Err(ShellError::UserNotFound(_))
        ));
        assert!(matches!(
            reg.set_user_type("admin", "user", "root"),
            Err(ShellError::InvalidUserType)
        ));
    }

    #[test]
    fn template_copies_are_independent() {
        let mut reg = UserRegistry::new();
        // Promote the seeded "user" account; the template itself must not move.
        reg.set_user_type("admin", "user", "admin").unwrap();
        reg.add_user("carol", "pw").unwrap();
        assert!(!reg.is_permitted("carol", "adduser"));
        assert!(reg.is_permitted("user", "adduser"));
    }

    #[test]
    fn usernames_keep_insertion_order() {
        let mut reg = UserRegistry::new();
        reg.add_user("zed", "pw").unwrap();
        reg.add_user("amy", "pw").unwrap();
        assert_eq!(reg.usernames(), ["admin", "user", "zed", "amy"]);
    }

    #[rstest]
    #[case("listusers")]
    #[case("adduser")]
    #[case("removeuser")]
    #[case("editdata")]
    #[case("changeusertype")]
    fn admin_only_commands_are_absent_from_user_template(#[case] command: &str) {
        let reg = UserRegistry::new();
        assert!(reg.is_permitted("admin", command));
        assert!(!reg.is_permitted("user", command));
    }

    #[test]
    fn permission_check_is_case_sensitive() {
        let reg = UserRegistry::new();
        assert!(reg.is_permitted("admin", "ls"));
        assert!(!reg.is_permitted("admin", "LS"));
    }

    #[test]
    fn admin_can_lock_itself_out() {
        // No guard against self-removal.
        let mut reg = UserRegistry::new();
        reg.remove_user("admin").unwrap();
        assert!(reg.authenticate("admin", "admin123").is_err());
    }
}
