//! Integration tests for the `jarlaunch` binary

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Exit status for a malformed manifest
const MANIFEST_JAR_STATUS: i32 = 3;

/// Helper to create a jarlaunch command with a clean environment
fn jarlaunch_cmd() -> Command
{
    let mut cmd = Command::cargo_bin("jarlaunch").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("JARLAUNCH_LOG_FORMAT")
        .env_remove("JARLAUNCH_LOG_FILE")
        .env_remove("JARLAUNCH_MANIFEST_LINE_MAX");
    cmd
}

fn write_manifest(dir: &TempDir, contents: &str) -> PathBuf
{
    let path = dir.path().join("MANIFEST.MF");
    fs::write(&path, contents).unwrap();
    path
}

fn build_jar(dir: &Path, manifest: Option<&str>) -> PathBuf
{
    let path = dir.join("app.jar");
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    if let Some(manifest) = manifest {
        writer.start_file("META-INF/MANIFEST.MF", SimpleFileOptions::default()).unwrap();
        writer.write_all(manifest.as_bytes()).unwrap();
    }
    writer.start_file("app/Main.class", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"\xca\xfe\xba\xbe").unwrap();
    writer.finish().unwrap();
    path
}

#[test]
fn test_help()
{
    jarlaunch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main-Class"));
}

#[test]
fn test_manifest_prints_class()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Manifest-Version: 1.0\nMain-Class:   com.acme.Main   \n");

    jarlaunch_cmd()
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout("com.acme.Main\n");
}

#[test]
fn test_manifest_internal_name()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Main-Class: com.acme.Main\n");

    jarlaunch_cmd()
        .args(["manifest", "--internal"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout("com/acme/Main\n");
}

#[test]
fn test_absent_attribute_prints_nothing()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Manifest-Version: 1.0\n");

    jarlaunch_cmd()
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_manifest_is_not_an_error()
{
    let dir = TempDir::new().unwrap();

    jarlaunch_cmd()
        .arg("manifest")
        .arg(dir.path().join("missing.MF"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_class_name_exits_with_manifest_status()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Manifest-Version: 1.0\nMain-Class: \n");

    jarlaunch_cmd()
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .code(MANIFEST_JAR_STATUS)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("manifest_get_main"))
        .stderr(predicate::str::contains(manifest.display().to_string()));
}

#[test]
fn test_absent_attribute_logs_nothing_by_default()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Manifest-Version: 1.0\n");

    jarlaunch_cmd()
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_class_name_is_reported_once()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Main-Class:\n");

    let assert = jarlaunch_cmd().arg("manifest").arg(&manifest).assert().code(MANIFEST_JAR_STATUS);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert_eq!(stderr.matches("Missing class name").count(), 1, "{stderr}");
    assert_eq!(
        stderr.trim_end(),
        format!("manifest_get_main: Missing class name in manifest file {}", manifest.display())
    );
}

#[test]
fn test_max_line_length_flag()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Main-Class: com.acme.Main\n");

    jarlaunch_cmd()
        .args(["--max-line-length", "10", "manifest"])
        .arg(&manifest)
        .assert()
        .code(MANIFEST_JAR_STATUS)
        .stderr(predicate::str::contains("exceeds 10 bytes"));
}

#[test]
fn test_max_line_length_env()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Main-Class: com.acme.Main\n");

    jarlaunch_cmd()
        .env("JARLAUNCH_MANIFEST_LINE_MAX", "10")
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .code(MANIFEST_JAR_STATUS);
}

#[test]
fn test_invalid_line_max_env_fails()
{
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "Main-Class: com.acme.Main\n");

    jarlaunch_cmd()
        .env("JARLAUNCH_MANIFEST_LINE_MAX", "wide")
        .arg("manifest")
        .arg(&manifest)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_jar_prints_class()
{
    let dir = TempDir::new().unwrap();
    let jar = build_jar(dir.path(), Some("Manifest-Version: 1.0\r\nMain-Class: app.Main\r\n\r\n"));

    jarlaunch_cmd()
        .arg("jar")
        .arg(&jar)
        .assert()
        .success()
        .stdout("app.Main\n");
}

#[test]
fn test_jar_extract_dir_keeps_manifest()
{
    let dir = TempDir::new().unwrap();
    let jar = build_jar(dir.path(), Some("Main-Class: app.Main\n"));
    let out = dir.path().join("out");

    jarlaunch_cmd()
        .arg("jar")
        .arg(&jar)
        .arg("--extract-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout("app.Main\n");

    assert!(out.join("META-INF/MANIFEST.MF").is_file());
}

#[test]
fn test_library_jar_prints_nothing()
{
    let dir = TempDir::new().unwrap();
    let jar = build_jar(dir.path(), None);

    jarlaunch_cmd()
        .arg("jar")
        .arg(&jar)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_jar_with_empty_main_class()
{
    let dir = TempDir::new().unwrap();
    let jar = build_jar(dir.path(), Some("Main-Class:\n"));

    jarlaunch_cmd()
        .arg("jar")
        .arg(&jar)
        .assert()
        .code(MANIFEST_JAR_STATUS)
        .stderr(predicate::str::contains("Missing class name"));
}

#[test]
fn test_corrupt_jar_fails()
{
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("broken.jar");
    fs::write(&jar, "not a zip").unwrap();

    jarlaunch_cmd()
        .arg("jar")
        .arg(&jar)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
