//! Integration tests for `syncbuild run` against a local git origin.
//!
//! The origin is a throwaway repository reached over `file://`, so clone and
//! pull go through the real git client without network access.

use std::path::{Path, PathBuf};

use predicates::prelude::*;

use crate::syncbuild;

#[cfg_attr(not(unix), allow(dead_code))]
fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

macro_rules! require_git {
    () => {
        if !git_available() {
            eprintln!("git not installed, skipping");
            return;
        }
    };
}

#[cfg_attr(not(unix), allow(dead_code))]
fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args([
            "-c",
            "user.name=syncbuild",
            "-c",
            "user.email=ci@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("spawn git");
    assert!(status.success(), "git {args:?} failed");
}

/// Create an origin repository with one commit on `branch`; returns its URL.
#[cfg_attr(not(unix), allow(dead_code))]
fn make_origin(root: &Path, branch: &str) -> (PathBuf, String) {
    let origin = root.join("origin");
    std::fs::create_dir(&origin).expect("mkdir origin");
    git(&origin, &["init", "--quiet"]);
    git(&origin, &["checkout", "--quiet", "-b", branch]);
    std::fs::write(origin.join("README"), "hello\n").expect("write README");
    git(&origin, &["add", "README"]);
    git(&origin, &["commit", "--quiet", "-m", "init"]);
    let url = format!("file://{}", origin.display());
    (origin, url)
}

/// Write `build.sh` into a fresh scripts directory.
///
/// The script echoes its arguments, records its working directory in
/// `built-in.txt`, and exits with `$BUILD_EXIT` (default 0).
#[cfg(unix)]
fn make_scripts_dir(root: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let dir = root.join("scripts");
    std::fs::create_dir(&dir).expect("mkdir scripts");
    let script = dir.join("build.sh");
    std::fs::write(
        &script,
        "#!/bin/sh\necho \"args: $*\"\necho \"to stderr\" >&2\npwd > built-in.txt\nexit ${BUILD_EXIT:-0}\n",
    )
    .expect("write build.sh");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    dir
}

#[cfg(unix)]
#[test]
fn test_fresh_workspace_clones_branch_and_runs_build() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "release-1.0");
    let scripts = make_scripts_dir(tmp.path());
    let workspace = tmp.path().join("ws");

    syncbuild()
        .env("WORKSPACE", &workspace)
        .env("BUILD_SCRIPT", "build")
        .env("GIT_BRANCH", "release-1.0")
        .env("BUILD_SCRIPTS_DIR", &scripts)
        .env("BUILD_REPO_URL", &url)
        .assert()
        .success()
        .stdout(predicate::str::contains("args: --config=release"))
        .stdout(predicate::str::contains("to stderr"));

    assert!(workspace.join(".git").exists(), "workspace must be a checkout");
    assert!(workspace.join("README").exists());

    let recorded = std::fs::read_to_string(workspace.join("built-in.txt")).expect("marker");
    assert_eq!(
        std::fs::canonicalize(recorded.trim()).expect("canonicalize"),
        std::fs::canonicalize(&workspace).expect("canonicalize"),
        "build script must run inside the workspace"
    );
    assert!(!workspace.join("build.sh").exists(), "staged script is cleaned up");
}

#[cfg(unix)]
#[test]
fn test_relative_workspace_resolves_against_invocation_directory() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "main");
    let scripts = make_scripts_dir(tmp.path());

    syncbuild()
        .current_dir(tmp.path())
        .env("WORKSPACE", "ws")
        .env("BUILD_SCRIPTS_DIR", "scripts")
        .env("BUILD_REPO_URL", &url)
        .assert()
        .success()
        .stdout(predicate::str::contains("args: --config=release"));

    assert!(scripts.join("build.sh").exists());
    assert!(tmp.path().join("ws").join("built-in.txt").exists());
    assert!(!tmp.path().join("ws").join("ws").exists());
}

#[cfg(unix)]
#[test]
fn test_existing_checkout_is_pulled() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (origin, url) = make_origin(tmp.path(), "main");
    let scripts = make_scripts_dir(tmp.path());
    let workspace = tmp.path().join("ws");

    let run = || {
        syncbuild()
            .arg("run")
            .arg("--workspace")
            .arg(&workspace)
            .arg("--scripts-dir")
            .arg(&scripts)
            .args(["--repo-url", url.as_str()])
            .assert()
            .success();
    };

    run();
    std::fs::write(origin.join("CHANGELOG"), "v2\n").expect("write");
    git(&origin, &["add", "CHANGELOG"]);
    git(&origin, &["commit", "--quiet", "-m", "second"]);
    run();

    assert!(workspace.join("CHANGELOG").exists(), "second run pulls new commits");
}

#[cfg(unix)]
#[test]
fn test_build_exit_code_collapses_to_one() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "main");
    let scripts = make_scripts_dir(tmp.path());
    let workspace = tmp.path().join("ws");

    syncbuild()
        .arg("--workspace")
        .arg(&workspace)
        .arg("--scripts-dir")
        .arg(&scripts)
        .args(["--repo-url", url.as_str()])
        .env("BUILD_EXIT", "3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("args: --config=release"))
        .stderr(predicate::str::contains("Build script failed with code 3"));

    assert!(!workspace.join("build.sh").exists(), "cleanup runs after failure");
}

#[cfg(unix)]
#[test]
fn test_keep_script_leaves_staged_copy() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "main");
    let scripts = make_scripts_dir(tmp.path());
    let workspace = tmp.path().join("ws");

    syncbuild()
        .arg("--workspace")
        .arg(&workspace)
        .arg("--scripts-dir")
        .arg(&scripts)
        .args(["--repo-url", url.as_str(), "--keep-script"])
        .assert()
        .success();

    assert!(workspace.join("build.sh").exists());
}

#[cfg(unix)]
#[test]
fn test_timeout_kills_hanging_build() {
    use std::os::unix::fs::PermissionsExt;
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "main");
    let scripts = tmp.path().join("scripts");
    std::fs::create_dir(&scripts).expect("mkdir");
    let script = scripts.join("build.sh");
    std::fs::write(&script, "#!/bin/sh\nexec sleep 30\n").expect("write");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    syncbuild()
        .arg("--workspace")
        .arg(tmp.path().join("ws"))
        .arg("--scripts-dir")
        .arg(&scripts)
        .args(["--repo-url", url.as_str()])
        .env("BUILD_TIMEOUT_SECS", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
}

#[cfg(unix)]
#[test]
fn test_missing_script_exits_one_without_building() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_, url) = make_origin(tmp.path(), "main");
    let empty_scripts = tmp.path().join("scripts");
    std::fs::create_dir(&empty_scripts).expect("mkdir");

    syncbuild()
        .arg("--workspace")
        .arg(tmp.path().join("ws"))
        .arg("--scripts-dir")
        .arg(&empty_scripts)
        .args(["--repo-url", url.as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Script not found"));
}

#[cfg(unix)]
#[test]
fn test_clone_failure_exits_one_before_staging() {
    require_git!();
    let tmp = tempfile::tempdir().expect("tempdir");
    let workspace = tmp.path().join("ws");
    let missing = format!("file://{}", tmp.path().join("no-such-origin").display());

    syncbuild()
        .arg("--workspace")
        .arg(&workspace)
        .arg("--scripts-dir")
        .arg(tmp.path())
        .args(["--repo-url", missing.as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git clone failed"));

    assert!(!workspace.join("build.sh").exists());
}

#[test]
fn test_existing_non_checkout_workspace_exits_one() {
    let tmp = tempfile::tempdir().expect("tempdir");

    syncbuild()
        .arg("--workspace")
        .arg(tmp.path())
        .arg("--scripts-dir")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a git repository"));
}
