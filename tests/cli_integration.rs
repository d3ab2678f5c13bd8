//! Integration tests for the gitprompt binary.
//!
//! These tests exercise the full CLI against real Git repos, with config
//! lookups pointed at an empty temporary home.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated environment: a repository on `main` plus an empty home.
struct Env {
    home: TempDir,
    repo: TempDir,
}

impl Env {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();

        run_git(repo.path(), &["init", "-q"]);
        run_git(repo.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(repo.path(), &["config", "user.email", "test@example.com"]);
        run_git(repo.path(), &["config", "user.name", "Test User"]);
        run_git(repo.path(), &["config", "commit.gpgsign", "false"]);
        std::fs::write(repo.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(repo.path(), &["add", "README.md"]);
        run_git(repo.path(), &["commit", "-q", "-m", "Initial commit"]);

        Self { home, repo }
    }

    /// A gitprompt command running inside the repository.
    fn gitprompt(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitprompt").unwrap();
        cmd.current_dir(self.repo.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("GITPROMPT_FORMAT")
            .env_remove("GITPROMPT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    fn write_config(&self, contents: &str) {
        let dir = self.home.path().join(".config/gitprompt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), contents).unwrap();
    }
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn version_flag_works() {
    Env::new()
        .gitprompt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitprompt"));
}

#[test]
fn help_includes_format_reference() {
    Env::new()
        .gitprompt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default format:"))
        .stdout(predicate::str::contains("Enablers force-enable a group"))
        .stdout(predicate::str::contains("--zsh"));
}

#[test]
fn unknown_flag_fails() {
    Env::new()
        .gitprompt()
        .arg("--bogus")
        .assert()
        .failure();
}

#[test]
fn outside_repository_prints_nothing() {
    let env = Env::new();
    let elsewhere = TempDir::new().unwrap();

    env.gitprompt()
        .arg("--cwd")
        .arg(elsewhere.path())
        .arg("--zsh")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn unreadable_repository_fails() {
    let env = Env::new();
    let broken = TempDir::new().unwrap();
    std::fs::write(broken.path().join(".git"), "garbage\n").unwrap();

    env.gitprompt()
        .arg("--cwd")
        .arg(broken.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unreadable_repository_is_silent_in_zsh_mode() {
    let env = Env::new();
    let broken = TempDir::new().unwrap();
    std::fs::write(broken.path().join(".git"), "garbage\n").unwrap();

    env.gitprompt()
        .arg("--cwd")
        .arg(broken.path())
        .arg("--zsh")
        .assert()
        .failure()
        .stdout("")
        .stderr("");
}

#[test]
fn default_format_renders_branch() {
    Env::new()
        .gitprompt()
        .assert()
        .success()
        .stdout("\x1b[94m(\x1b[1;91mmain\x1b[0;94m) \x1b[0m");
}

#[test]
fn format_flag() {
    Env::new()
        .gitprompt()
        .args(["--format", "%h [%u]%C"])
        .assert()
        .success()
        .stdout("main ");
}

#[test]
fn format_flag_reflects_worktree() {
    let env = Env::new();
    std::fs::write(env.repo.path().join("new.txt"), "new\n").unwrap();
    std::fs::write(env.repo.path().join("README.md"), "changed\n").unwrap();

    env.gitprompt()
        .args(["--format", "%h[ ?%u][ +%m][ %Cok]"])
        .assert()
        .success()
        .stdout("main ?1 +1");
}

#[test]
fn empty_format_flag_prints_nothing() {
    Env::new()
        .gitprompt()
        .args(["--format", ""])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn cwd_flag_selects_repository() {
    let env = Env::new();
    let elsewhere = TempDir::new().unwrap();

    env.gitprompt()
        .current_dir(elsewhere.path())
        .arg("--cwd")
        .arg(env.repo.path())
        .args(["--format", "%h"])
        .assert()
        .success()
        .stdout("main");
}

#[test]
fn format_from_environment() {
    Env::new()
        .gitprompt()
        .env("GITPROMPT_FORMAT", "on %h")
        .assert()
        .success()
        .stdout("on main");
}

#[test]
fn format_flag_beats_environment() {
    Env::new()
        .gitprompt()
        .env("GITPROMPT_FORMAT", "env")
        .args(["--format", "flag"])
        .assert()
        .success()
        .stdout("flag");
}

#[test]
fn zsh_flag_wraps_output() {
    Env::new()
        .gitprompt()
        .args(["--zsh", "--format", "#r%h"])
        .assert()
        .success()
        .stdout("%{\x1b[31mmain\x1b[0m%4G%}");
}

#[test]
fn config_file_supplies_format_and_zsh() {
    let env = Env::new();
    env.write_config("format = \"cfg:%h\"\nzsh = true\n");

    env.gitprompt()
        .assert()
        .success()
        .stdout("%{cfg:main%8G%}");
}

#[test]
fn environment_beats_config_file() {
    let env = Env::new();
    env.write_config("format = \"cfg\"\n");

    env.gitprompt()
        .env("GITPROMPT_FORMAT", "env")
        .assert()
        .success()
        .stdout("env");
}

#[test]
fn invalid_config_fails() {
    let env = Env::new();
    env.write_config("format = [1, 2]\n");

    env.gitprompt()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_config_is_silent_in_zsh_mode() {
    let env = Env::new();
    env.write_config("unknown = true\n");

    env.gitprompt()
        .arg("--zsh")
        .assert()
        .failure()
        .stdout("")
        .stderr("");
}

#[test]
fn missing_explicit_config_warns() {
    let env = Env::new();

    env.gitprompt()
        .env("GITPROMPT_CONFIG", env.home.path().join("missing.toml"))
        .args(["--format", "%h"])
        .assert()
        .success()
        .stdout("main")
        .stderr(predicate::str::contains("warning:"));
}
