use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let config = format!(
        "postmap: \"true\"\n\
         filesystem:\n\
         \x20   files:\n\
         \x20       virtual-alias: virtual-alias\n\
         \x20       sender-login-maps: sender-login-maps\n\
         \x20       virtual-mailbox-users: users\n\
         \x20   pathes:\n\
         \x20       default: {}\n",
        dir.display()
    );
    let path = dir.join("config.yaml");
    fs::write(&path, config).unwrap();

    fs::write(dir.join("virtual-alias"), "\n").unwrap();
    fs::write(dir.join("sender-login-maps"), "\n").unwrap();
    fs::write(
        dir.join("users"),
        "user1@example.test\tuser1@example.test\n",
    )
    .unwrap();
    path
}

fn pfhelper(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pfhelper").unwrap();
    cmd.arg("--config-file").arg(config);
    cmd
}

#[test]
fn add_without_save_previews_but_does_not_persist() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args(["alias", "add", "new@example.test", "user1@example.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new@example.test"))
        .stdout(predicate::str::contains("user1@example.test"));

    let file = fs::read_to_string(dir.path().join("virtual-alias")).unwrap();
    assert!(!file.contains("new@example.test"));
}

#[test]
fn add_with_save_persists_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args([
            "alias",
            "add",
            "new@example.test",
            "user1@example.test",
            "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully saved."));

    let file = fs::read_to_string(dir.path().join("virtual-alias")).unwrap();
    assert!(file.contains("new@example.test"));
    assert!(file.contains("#== Entries for value 'user1@example.test'"));

    pfhelper(&config)
        .args(["alias", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new@example.test"));
}

#[test]
fn del_with_save_removes_the_alias() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args([
            "alias",
            "add",
            "gone@example.test",
            "user1@example.test",
            "--save",
        ])
        .assert()
        .success();

    pfhelper(&config)
        .args(["alias", "del", "gone@example.test", "--save"])
        .assert()
        .success();

    let file = fs::read_to_string(dir.path().join("virtual-alias")).unwrap();
    assert!(!file.contains("gone@example.test"));
}

#[test]
fn del_comment_out_keeps_a_deleted_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args([
            "alias",
            "add",
            "kept@example.test",
            "user1@example.test",
            "--save",
        ])
        .assert()
        .success();

    pfhelper(&config)
        .args([
            "alias",
            "del",
            "kept@example.test",
            "--comment-out",
            "--save",
        ])
        .assert()
        .success();

    let file = fs::read_to_string(dir.path().join("virtual-alias")).unwrap();
    assert!(file.contains("#-- kept@example.test"));

    // The listing shows the retained value commented out.
    pfhelper(&config)
        .args(["alias", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# user1@example.test"));
}

#[test]
fn list_as_saved_prints_raw_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args([
            "alias",
            "add",
            "raw@example.test",
            "user1@example.test",
            "--save",
        ])
        .assert()
        .success();

    pfhelper(&config)
        .args(["alias", "list", "--as-saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "#== Entries for value 'user1@example.test'",
        ));
}

#[test]
fn unknown_user_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    pfhelper(&config)
        .args(["alias", "add", "x@example.test", "nobody@example.test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn syntax_error_in_table_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    fs::write(dir.path().join("virtual-alias"), "this is not valid\n").unwrap();

    pfhelper(&config)
        .args(["alias", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Syntax error"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nope.yaml");

    pfhelper(&config)
        .args(["alias", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
