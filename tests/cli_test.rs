//! Integration tests for the gitignore binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A working directory plus an isolated store and config home.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("work")).unwrap();
        Self { temp }
    }

    fn with_templates(files: &[(&str, &str)]) -> Self {
        let sandbox = Self::new();
        for (path, content) in files {
            let file = sandbox.store().join(path);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, content).unwrap();
        }
        sandbox
    }

    fn store(&self) -> std::path::PathBuf {
        self.temp.path().join("store")
    }

    fn work(&self) -> std::path::PathBuf {
        self.temp.path().join("work")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("gitignore"));
        cmd.current_dir(self.work())
            .env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env("GITIGNORE_CLI_STORE", self.store())
            .env("GITIGNORE_CLI_API_URL", "http://127.0.0.1:9/contents")
            .env("GITIGNORE_CLI_RAW_URL", "http://127.0.0.1:9/raw")
            .env_remove("RUST_LOG");
        cmd
    }

    fn cmd_with_remote(&self, server: &MockServer) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GITIGNORE_CLI_API_URL", server.url("/contents"))
            .env("GITIGNORE_CLI_RAW_URL", server.url("/raw"));
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("github/gitignore"))
        .stdout(predicate::str::contains("update"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_path_prints_store() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let other = sandbox.temp.path().join("elsewhere");
    sandbox
        .cmd()
        .arg("path")
        .arg("--store")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains(other.display().to_string()));
    Ok(())
}

#[test]
fn cli_list_groups_templates() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[
        ("Go.gitignore", "/vendor\n"),
        ("Global/Vim.gitignore", "*.swp\n"),
    ]);
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available templates (2):"))
        .stdout(predicate::str::contains("Global:\n  - Vim"))
        .stdout(predicate::str::contains("Main:\n  - Go"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    let output = sandbox.cmd().args(["list", "--json"]).output()?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["count"], 1);
    Ok(())
}

#[test]
fn cli_writes_gitignore() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    sandbox
        .cmd()
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created gitignore"));

    assert_eq!(read(&sandbox.work().join(".gitignore")), "/vendor\n");
    Ok(())
}

#[test]
fn cli_writes_custom_output() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Python.gitignore", "*.pyc\n")]);
    sandbox
        .cmd()
        .args(["Python", "output.txt"])
        .assert()
        .success();

    assert_eq!(read(&sandbox.work().join("output.txt")), "*.pyc\n");
    Ok(())
}

#[test]
fn cli_silent_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    sandbox
        .cmd()
        .args(["Go", "--silent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read(&sandbox.work().join(".gitignore")), "/vendor\n");
    Ok(())
}

#[test]
fn cli_prints_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Global/Vim.gitignore", "*.swp\n")]);
    sandbox
        .cmd()
        .args(["Global/Vim", "--stdout"])
        .assert()
        .success()
        .stdout("*.swp\n");

    assert!(!sandbox.work().join(".gitignore").exists());
    Ok(())
}

#[test]
fn cli_follows_alias() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[
        ("Global/Emacs.gitignore", "*~\n"),
        ("Spacemacs.gitignore", "Global/Emacs.gitignore\n"),
    ]);
    sandbox
        .cmd()
        .args(["Spacemacs", "--stdout"])
        .assert()
        .success()
        .stdout("*~\n");
    Ok(())
}

#[test]
fn cli_keeps_existing_file_without_confirmation() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    let output = sandbox.work().join(".gitignore");
    fs::write(&output, "mine\n")?;

    sandbox
        .cmd()
        .arg("Go")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    assert_eq!(read(&output), "mine\n");
    Ok(())
}

#[test]
fn cli_overwrite_answered_by_env() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    let output = sandbox.work().join(".gitignore");
    fs::write(&output, "mine\n")?;

    sandbox
        .cmd()
        .arg("Go")
        .env("GITIGNORE_CLI_PROMPT_OVERWRITE", "yes")
        .assert()
        .success();

    assert_eq!(read(&output), "/vendor\n");
    Ok(())
}

#[test]
fn cli_force_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);
    let output = sandbox.work().join(".gitignore");
    fs::write(&output, "mine\n")?;

    sandbox.cmd().args(["Go", "--force"]).assert().success();

    assert_eq!(read(&output), "/vendor\n");
    Ok(())
}

#[test]
fn cli_missing_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let sandbox = Sandbox::new();
    sandbox
        .cmd_with_remote(&server)
        .arg("Cobol")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No template found for 'Cobol'"))
        .stderr(predicate::str::contains("Try 'gitignore list'"));

    assert!(!sandbox.work().join(".gitignore").exists());
    Ok(())
}

#[test]
fn cli_offline_never_contacts_remote() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let raw = server.mock(|when, then| {
        when.method(GET).path("/raw/Go.gitignore");
        then.status(200).body("/vendor\n");
    });
    let sandbox = Sandbox::new();

    sandbox
        .cmd_with_remote(&server)
        .args(["Go", "--offline"])
        .assert()
        .code(1);

    raw.assert_calls(0);
    Ok(())
}

#[test]
fn cli_fetches_missing_template() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/raw/Global/Vim.gitignore");
        then.status(200).body("*.swp\n");
    });
    let sandbox = Sandbox::new();

    sandbox
        .cmd_with_remote(&server)
        .args(["Vim", "--stdout"])
        .assert()
        .success()
        .stdout("*.swp\n");

    assert_eq!(read(&sandbox.store().join("Global/Vim.gitignore")), "*.swp\n");
    Ok(())
}

#[test]
fn cli_update_mirrors_remote() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let go_url = server.url("/raw/Go.gitignore");
    server.mock(|when, then| {
        when.method(GET).path("/contents");
        then.status(200).json_body(serde_json::json!([
            {"name": "Go.gitignore", "type": "file", "download_url": go_url}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/contents/Global");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/contents/community");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/raw/Go.gitignore");
        then.status(200).body("/vendor\n");
    });
    let sandbox = Sandbox::with_templates(&[("Stale.gitignore", "old\n")]);

    sandbox
        .cmd_with_remote(&server)
        .args(["update", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates updated successfully"));

    assert!(!sandbox.store().join("Stale.gitignore").exists());
    assert_eq!(read(&sandbox.store().join("Go.gitignore")), "/vendor\n");
    Ok(())
}

#[test]
fn cli_clean_requires_confirmation() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_templates(&[("Go.gitignore", "/vendor\n")]);

    sandbox
        .cmd()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));
    assert!(sandbox.store().exists());

    sandbox
        .cmd()
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates successfully removed"));
    assert!(!sandbox.store().exists());
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let config = sandbox.temp.path().join("bad.yml");
    fs::write(&config, "timeout_secs: [1, 2]\n")?;

    sandbox
        .cmd()
        .arg("path")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitignore"));
    Ok(())
}
