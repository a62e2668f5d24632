//! Integration tests for the mvn-shared binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mvn_shared() -> Command {
    let mut cmd = Command::new(cargo_bin("mvn-shared"));
    cmd.env_remove("MAVEN_VERSION")
        .env_remove("JAVA_VERSION")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project_with_requirements(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("runtime-requirements.properties"), content).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    mvn_shared()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("write"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    mvn_shared()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_passes_with_explicit_requirements() -> Result<(), Box<dyn std::error::Error>> {
    mvn_shared()
        .args([
            "check",
            "--maven-requirement",
            "[3.9,)",
            "--java-requirement",
            "[8,)",
            "--maven-version",
            "3.9.10",
            "--java-version",
            "21.0.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("runtime requirements are fulfilled"));
    Ok(())
}

#[test]
fn check_fails_when_requirements_not_met() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project_with_requirements(
        "applicationName=Demo\nmavenRequirement=[3.9,)\njavaRequirement=[17,)\n",
    );
    mvn_shared()
        .current_dir(temp.path())
        .env("MAVEN_VERSION", "3.9.10")
        .env("JAVA_VERSION", "11.0.2")
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Unsupported Java version 11.0.2; supported versions are [17,)",
        ))
        .stderr(predicate::str::contains(
            "Runtime requirements of Demo are not fulfilled",
        ));
    Ok(())
}

#[test]
fn check_reports_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project_with_requirements("mavenRequirement=[3.9,)\njavaRequirement=[8,)\n");
    let output = mvn_shared()
        .args(["check", "--json", "--resource-root"])
        .arg(temp.path())
        .args(["--maven-version", "3.9.10", "--java-version", "17"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["name"], "Maven extension");
    assert_eq!(report["host"]["version"], "3.9.10");
    assert_eq!(report["satisfied"], true);
    Ok(())
}

#[test]
fn check_without_versions_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project_with_requirements("mavenRequirement=[3.9,)\njavaRequirement=[8,)\n");
    mvn_shared()
        .current_dir(temp.path())
        .args(["check", "--java-version", "17"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Maven version could not be determined"));
    Ok(())
}

#[test]
fn check_skipped_by_session_property() -> Result<(), Box<dyn std::error::Error>> {
    let temp = project_with_requirements("mavenRequirement=[9,)\njavaRequirement=[99,)\n");
    mvn_shared()
        .current_dir(temp.path())
        .args(["check", "-D", "check.skip=true"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Mojo 'check' skipped per user request.",
        ));
    Ok(())
}

#[test]
fn write_replaces_target_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let target = temp.path().join("conf").join("app.properties");
    fs::create_dir_all(target.parent().unwrap())?;
    fs::write(&target, "old=1\n")?;

    mvn_shared()
        .arg("write")
        .arg(&target)
        .arg("--backup")
        .write_stdin("new=2\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target)?, "new=2\n");
    assert_eq!(
        fs::read_to_string(temp.path().join("conf").join("app.properties.bak"))?,
        "old=1\n"
    );
    Ok(())
}

#[test]
fn write_skip_flag_leaves_target_alone() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let target = temp.path().join("app.properties");

    mvn_shared()
        .arg("write")
        .arg(&target)
        .arg("--skip")
        .write_stdin("ignored")
        .assert()
        .success();

    assert!(!target.exists());
    Ok(())
}

#[test]
fn copy_then_delete_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let from = temp.path().join("from");
    fs::create_dir_all(from.join("keep"))?;
    fs::create_dir_all(from.join(".git"))?;
    fs::write(from.join("keep").join("a.txt"), "a")?;
    fs::write(from.join(".git").join("HEAD"), "ref")?;
    let to = temp.path().join("to");

    mvn_shared()
        .arg("copy")
        .arg(&from)
        .arg(&to)
        .args(["--exclude", ".git"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(to.join("keep").join("a.txt"))?, "a");
    assert!(!to.join(".git").exists());

    mvn_shared().arg("delete").arg(&to).assert().success();
    assert!(!to.exists());
    Ok(())
}

#[test]
fn delete_missing_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    mvn_shared()
        .arg("delete")
        .arg(temp.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn link_creates_destination() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let src = temp.path().join("src.txt");
    let dst = temp.path().join("dst.txt");
    fs::write(&src, "content")?;

    mvn_shared()
        .arg("link")
        .arg(&src)
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&dst)?, "content");
    Ok(())
}

#[test]
fn link_accepts_bare_file_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a.txt"), "content")?;

    mvn_shared()
        .current_dir(temp.path())
        .args(["link", "a.txt", "b.txt"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("b.txt"))?, "content");
    Ok(())
}

#[test]
fn write_accepts_bare_file_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    mvn_shared()
        .current_dir(temp.path())
        .args(["write", "out.txt"])
        .write_stdin("hello")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("out.txt"))?, "hello");
    Ok(())
}

#[test]
fn check_understands_jdk_release_names() -> Result<(), Box<dyn std::error::Error>> {
    mvn_shared()
        .env("JAVA_VERSION", "jdk-21.0.5+11")
        .args([
            "check",
            "--maven-requirement",
            "[3.9,)",
            "--java-requirement",
            "[8,)",
            "--maven-version",
            "3.9.10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Java 21.0.5"));
    Ok(())
}
