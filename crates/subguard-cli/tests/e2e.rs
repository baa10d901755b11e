//! End-to-end runs against a local SPDX catalog fixture server and temp
//! superprojects, so no test touches the network or a real checkout.
//!
//! Requires a `git` binary, like the tool itself.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

const LICENSES_JSON: &str = r#"{
  "licenseListVersion": "3.24",
  "licenses": [
    {"licenseId": "MIT", "name": "MIT License"},
    {"licenseId": "Apache-2.0", "name": "Apache License 2.0"},
    {"licenseId": "GPL-2.0-only", "name": "GNU General Public License v2.0 only"}
  ]
}"#;

const EXCEPTIONS_JSON: &str = r#"{
  "licenseListVersion": "3.24",
  "exceptions": [
    {"licenseExceptionId": "Classpath-exception-2.0", "name": "Classpath exception 2.0"}
  ]
}"#;

/// Serve the two catalog documents over plain HTTP on an ephemeral port.
/// One request per connection; the thread parks on accept until the test
/// process exits.
fn spawn_catalog_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
    let addr = listener.local_addr().expect("local addr");

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = [0u8; 2048];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);

            let body = if request.starts_with("GET /licenses.json") {
                LICENSES_JSON
            } else if request.starts_with("GET /exceptions.json") {
                EXCEPTIONS_JSON
            } else {
                "{}"
            };
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

#[allow(deprecated)]
fn subguard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("subguard").expect("subguard binary not found");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(dir)
        .args([
            "-c",
            "user.name=subguard-tests",
            "-c",
            "user.email=subguard-tests@example.com",
        ])
        .args(args)
        .status()
        .expect("spawn git");
    assert!(status.success(), "git {args:?} failed");
}

#[test]
fn clean_manifest_exits_zero() {
    let server = spawn_catalog_server();
    let tmp = TempDir::new().expect("temp dir");
    let manifest = tmp.path().join("manifest.yml");
    std::fs::write(
        &manifest,
        "name: superproject\n\
         version: 1.0.0\n\
         description: a clean project\n\
         license: MIT AND Apache-2.0\n",
    )
    .expect("write manifest");

    subguard_cmd()
        .arg(&manifest)
        .args(["--spdx-url", &server])
        .assert()
        .success()
        .stdout(predicate::str::contains("total errors: 0"));
}

#[test]
fn invalid_license_and_undeclared_submodule_total_two_errors() {
    let server = spawn_catalog_server();
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("manifest.yml"),
        "name: superproject\n\
         version: 1.0.0\n\
         description: drifted project\n\
         license: Bogus-1.0\n",
    )
    .expect("write manifest");
    std::fs::write(
        tmp.path().join(".gitmodules"),
        "[submodule \"libs/extra\"]\n\
         \tpath = libs/extra\n\
         \turl = https://example.com/extra.git\n",
    )
    .expect("write .gitmodules");

    subguard_cmd()
        .arg(tmp.path().join("manifest.yml"))
        .args(["--spdx-url", &server])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid license id Bogus-1.0"))
        .stdout(predicate::str::contains(
            "git submodule libs/extra was not found in the manifest",
        ))
        .stdout(predicate::str::contains("total errors: 2"));
}

#[test]
fn ignore_flags_suppress_both_check_families() {
    let server = spawn_catalog_server();
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("manifest.yml"),
        "name: superproject\n\
         version: 1.0.0\n\
         description: project with a vendored module\n\
         license: Custom-1\n",
    )
    .expect("write manifest");
    std::fs::write(
        tmp.path().join(".gitmodules"),
        "[submodule \"libs/vendored\"]\n\
         \tpath = libs/vendored\n\
         \turl = https://example.com/vendored.git\n",
    )
    .expect("write .gitmodules");
    std::fs::create_dir_all(tmp.path().join("libs/vendored")).expect("create ignored path");

    subguard_cmd()
        .arg(tmp.path().join("manifest.yml"))
        .args(["--spdx-url", &server])
        .args(["--ignore-spdx", "Custom-1"])
        .args(["--ignore-paths", "libs/vendored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total errors: 0"));
}

#[test]
fn revision_mismatch_against_a_real_submodule_exits_one() {
    let server = spawn_catalog_server();
    let tmp = TempDir::new().expect("temp dir");
    let root = tmp.path();
    let sub = root.join("libs/dep");

    // Tag the first commit, then advance HEAD past it.
    std::fs::create_dir_all(&sub).expect("create submodule dir");
    git(&sub, &["init", "--quiet"]);
    std::fs::write(sub.join("README.md"), "one\n").expect("write file");
    git(&sub, &["add", "."]);
    git(&sub, &["commit", "--quiet", "-m", "one"]);
    git(&sub, &["tag", "v1.0.0"]);
    std::fs::write(sub.join("README.md"), "two\n").expect("write file");
    git(&sub, &["add", "."]);
    git(&sub, &["commit", "--quiet", "-m", "two"]);
    git(&sub, &["remote", "add", "origin", "https://example.com/dep.git"]);

    std::fs::write(
        root.join(".gitmodules"),
        "[submodule \"libs/dep\"]\n\
         \tpath = libs/dep\n\
         \turl = https://example.com/dep.git\n",
    )
    .expect("write .gitmodules");
    std::fs::write(
        root.join("manifest.yml"),
        "name: superproject\n\
         version: 1.0.0\n\
         description: pinned behind HEAD\n\
         license: MIT\n\
         dependencies:\n\
         \x20 - name: dep\n\
         \x20   version: v1.0.0\n\
         \x20   license: MIT\n\
         \x20   repository:\n\
         \x20     type: git\n\
         \x20     url: https://example.com/dep.git\n\
         \x20     path: libs/dep\n",
    )
    .expect("write manifest");

    subguard_cmd()
        .arg(root.join("manifest.yml"))
        .args(["--spdx-url", &server])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("revision mismatch"))
        .stdout(predicate::str::contains("total errors: 1"));
}

#[test]
fn nonexistent_ignore_path_warns_but_does_not_fail() {
    let server = spawn_catalog_server();
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("manifest.yml"),
        "name: p\nversion: '1'\ndescription: d\nlicense: MIT\n",
    )
    .expect("write manifest");

    subguard_cmd()
        .arg(tmp.path().join("manifest.yml"))
        .args(["--spdx-url", &server])
        .args(["--ignore-paths", "libs/ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored path libs/ghost was not found"))
        .stdout(predicate::str::contains("total errors: 0"));
}
