//! Integration tests for the vosh console.
//!
//! These drive full command lines through the REPL (and thus the kernel's
//! permission-gated dispatcher) and check the text a user would see.

use rstest::rstest;

use vosh_repl::{LineResult, Repl};
use vosh_kernel::KernelConfig;

/// A REPL with no disk access, logged in as the given seeded user.
fn make_repl(user: &str, password: &str) -> Repl {
    let repl = Repl::with_config(KernelConfig::isolated()).expect("Failed to create REPL");
    repl.login(user, password).expect("login failed");
    repl
}

/// Run a line and unwrap the textual result.
fn out(repl: &Repl, line: &str) -> String {
    match repl.process_line(line) {
        LineResult::Output(text) => text,
        other => panic!("expected Output for {line:?}, got {other:?}"),
    }
}

#[test]
fn adduser_login_mkdir_cd_scenario() {
    let repl = make_repl("admin", "admin123");

    assert_eq!(out(&repl, "adduser alice secret"), "User 'alice' added successfully.");

    // Wrong password first, then correct; the user switch keeps all state.
    assert!(repl.login("alice", "wrong").is_err());
    assert_eq!(repl.current_user().as_deref(), Some("admin"));
    repl.login("alice", "secret").unwrap();
    assert_eq!(repl.current_user().as_deref(), Some("alice"));

    assert_eq!(out(&repl, "mkdir docs"), "Directory '/docs' created successfully.");
    assert_eq!(out(&repl, "cd docs"), "Current directory: /docs");
    assert_eq!(repl.cwd(), "/docs");
    assert_eq!(out(&repl, "cd .."), "Current directory: /");
    assert_eq!(repl.cwd(), "/");
}

#[test]
fn non_admin_cannot_change_user_types() {
    let repl = make_repl("admin", "admin123");
    out(&repl, "adduser bob pw");

    repl.login("user", "user123").unwrap();
    // "changeusertype" is not even in the user template, so the dispatcher
    // denies it before the handler's own admin check could run.
    assert_eq!(
        out(&repl, "changeusertype bob admin"),
        "Access denied: user cannot execute command 'changeusertype'."
    );

    // Registry unchanged: bob still cannot run admin commands.
    repl.login("bob", "pw").unwrap();
    assert_eq!(
        out(&repl, "listusers"),
        "Access denied: bob cannot execute command 'listusers'."
    );
}

#[test]
fn store_edit_retrieve_scenario() {
    let repl = make_repl("user", "user123");

    assert_eq!(out(&repl, "store k v1"), "Data stored with key 'k'.");
    assert_eq!(out(&repl, "retrieve k"), "Data for key 'k': v1");

    assert_eq!(out(&repl, "editdata k v2"), "Access denied: user cannot execute command 'editdata'.");

    repl.login("admin", "admin123").unwrap();
    assert_eq!(out(&repl, "editdata k v2"), "Data for key 'k' updated successfully.");
    assert_eq!(out(&repl, "retrieve k"), "Data for key 'k': v2");
    assert_eq!(
        out(&repl, "editdata missingkey v"),
        "No data found for key 'missingkey'. Use 'store <key> <value>' to add new data."
    );
}

#[test]
fn notepad_edit_read_save_flow() {
    let repl = make_repl("user", "user123");

    match repl.process_line("notepad notes.txt") {
        LineResult::Editor(filename) => {
            assert_eq!(filename, "notes.txt");
            assert_eq!(
                repl.commit_buffer(&filename, "first line\nsecond line"),
                "notes.txt edited successfully. Use 'save notes.txt' to save."
            );
        }
        other => panic!("expected Editor, got {other:?}"),
    }

    assert_eq!(
        out(&repl, "read notes.txt"),
        "Contents of notes.txt:\nfirst line\nsecond line"
    );
    assert_eq!(out(&repl, "save notes.txt"), "notes.txt saved successfully.");
    assert_eq!(out(&repl, "delete notes.txt"), "notes.txt deleted successfully.");
    assert_eq!(
        out(&repl, "read notes.txt"),
        "Error: notes.txt does not exist in the current directory."
    );
}

#[test]
fn notepad_rejects_non_txt_filenames() {
    let repl = make_repl("user", "user123");
    assert_eq!(
        out(&repl, "notepad notes.md"),
        "Error: Filename must have a .txt extension."
    );
}

#[test]
fn changeuser_switches_without_losing_namespace() {
    let repl = make_repl("admin", "admin123");
    out(&repl, "mkdir shared");
    out(&repl, "cd shared");

    assert!(matches!(repl.process_line("changeuser"), LineResult::Login));
    repl.login("user", "user123").unwrap();

    assert_eq!(repl.cwd(), "/shared");
    assert_eq!(out(&repl, "ls"), "Contents of /shared:");
}

#[test]
fn exit_terminates_the_loop() {
    let repl = make_repl("user", "user123");
    assert!(matches!(repl.process_line("exit"), LineResult::Exit));
}

#[test]
fn ls_distinguishes_directories_from_files() {
    let repl = make_repl("admin", "admin123");
    out(&repl, "mkdir sub");
    match repl.process_line("notepad a.txt") {
        LineResult::Editor(f) => {
            repl.commit_buffer(&f, "x");
        }
        other => panic!("expected Editor, got {other:?}"),
    }

    assert_eq!(out(&repl, "ls"), "Contents of /:\n<DIR> sub\n      a.txt");
}

#[rstest]
#[case("adduser", "Usage: adduser <username> <password>")]
#[case("removeuser", "Usage: removeuser <username>")]
#[case("changepassword", "Usage: changepassword <oldpassword> <newpassword>")]
#[case("editdata k", "Usage: editdata <key> <newvalue>")]
#[case("changeusertype bob", "Usage: changeusertype <username> <usertype>")]
#[case("store k", "Usage: store <key> <value>")]
#[case("retrieve", "Usage: retrieve <key>")]
#[case("cd", "Usage: cd <directory>")]
#[case("mkdir", "Usage: mkdir <directory>")]
#[case("rm", "Usage: rm <file/directory>")]
#[case("setenv KEY", "Usage: setenv <key> <value>")]
#[case("getenvi", "Usage: getenvi <key>")]
#[case("notepad", "Usage: notepad <filename>")]
#[case("save", "Usage: save <filename>")]
#[case("read", "Usage: read <filename>")]
#[case("delete", "Usage: delete <filename>")]
fn argument_shortfall_yields_usage_hint(#[case] line: &str, #[case] expected: &str) {
    let repl = make_repl("admin", "admin123");
    assert_eq!(out(&repl, line), expected);
}

#[rstest]
#[case("listusers")]
#[case("adduser eve pw")]
#[case("removeuser admin")]
#[case("editdata k v")]
#[case("changeusertype user admin")]
fn admin_only_commands_are_denied_to_user(#[case] line: &str) {
    let repl = make_repl("user", "user123");
    let command = line.split_whitespace().next().unwrap();
    assert_eq!(
        out(&repl, line),
        format!("Access denied: user cannot execute command '{command}'.")
    );
}

#[rstest]
#[case("env", "Environment Variables:")]
#[case("sayhello", "Hello!")]
#[case("storedatalist", "Stored Data:")]
fn zero_argument_commands_run_for_both_roles(#[case] line: &str, #[case] expected: &str) {
    for (user, password) in [("admin", "admin123"), ("user", "user123")] {
        let repl = make_repl(user, password);
        assert_eq!(out(&repl, line), expected);
    }
}
