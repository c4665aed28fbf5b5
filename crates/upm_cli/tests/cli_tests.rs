//! End-to-end tests for the `upm` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn upm(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_upm"))
        .args(args)
        .current_dir(cwd)
        .env_remove("UPM_PACKAGES_DIR")
        .env_remove("UPM_RESOLVE_CMD")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run upm")
}

#[test]
fn test_normalize_version() {
    let temp = tempdir().unwrap();

    for (raw, expected) in [("2", "2.0.0"), ("2.", "2.0.0"), ("1.2.3.4", "1.2.3.4")] {
        let out = upm(temp.path(), &["normalize-version", raw]);
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), expected);
    }

    let out = upm(temp.path(), &["normalize-version"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "1.0.0");
}

#[test]
fn test_create_package() {
    let temp = tempdir().unwrap();
    let out = upm(
        temp.path(),
        &[
            "create",
            "--name",
            "My Tool",
            "--author",
            "Jane Doe",
            "--runtime-asm",
            "MyTool",
            "--editor-asm",
            "MyTool.Editor",
        ],
    );
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let root = temp.path().join("Packages").join("com.jane-doe.my-tool");
    assert!(root.join("package.json").is_file());
    assert!(root.join("Runtime").join("MyTool.asmdef").is_file());

    let editor = fs::read_to_string(root.join("Editor").join("MyTool.Editor.asmdef")).unwrap();
    let editor: serde_json::Value = serde_json::from_str(&editor).unwrap();
    assert_eq!(editor["references"][0], "MyTool");
    assert_eq!(editor["includePlatforms"][0], "Editor");

    // Same identity again.
    let out = upm(
        temp.path(),
        &["create", "--name", "My Tool", "--author", "Jane Doe"],
    );
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn test_missing_author_exit_code() {
    let temp = tempdir().unwrap();
    let out = upm(temp.path(), &["create", "--name", "Tool"]);

    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("author.name"));
    assert!(!temp.path().join("Packages").exists());
}

#[test]
fn test_name_outside_packages_dir_is_invalid() {
    let temp = tempdir().unwrap();
    let out = upm(
        temp.path(),
        &["create", "--name", "../../escape", "--author", "a"],
    );

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("path separator"));
    assert!(!temp.path().join("Packages").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = tempdir().unwrap();
    let out = upm(
        temp.path(),
        &["create", "--dry-run", "--name", "Tool", "--author", "Acme"],
    );

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("com.acme.tool"));
    assert!(!temp.path().join("Packages").exists());
}

#[test]
fn test_plan_json_from_form() {
    let temp = tempdir().unwrap();
    let out = upm(temp.path(), &["init-form", "form.yaml"]);
    assert!(out.status.success());

    assert!(fs::read_to_string(temp.path().join("form.yaml"))
        .unwrap()
        .contains("package:"));

    fs::write(
        temp.path().join("tool.yaml"),
        "package:\n  name: Tool\n  version: '0.2'\n  author:\n    name: Acme\n",
    )
    .unwrap();

    let out = upm(
        temp.path(),
        &["plan", "--json", "--form", "tool.yaml", "--runtime-asm", "Tool"],
    );
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let plan: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(plan["package"]["name"], "com.acme.tool");
    assert_eq!(plan["package"]["version"], "0.2.0");
    assert_eq!(plan["directories"][0], "com.acme.tool");
    assert_eq!(plan["files"].as_array().unwrap().len(), 5);

    // A second init-form without --force refuses to overwrite.
    let out = upm(temp.path(), &["init-form", "form.yaml"]);
    assert!(!out.status.success());
}

#[test]
fn test_warnings_are_reported_once() {
    let temp = tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_upm"))
        .args(["plan", "--name", "Tool", "--author", "Acme"])
        .current_dir(temp.path())
        .env_remove("UPM_PACKAGES_DIR")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run upm");
    assert!(out.status.success());

    let warning = "Package description is recommended";
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stdout.matches(warning).count(), 1);
    assert_eq!(stderr.matches(warning).count(), 1);
}
