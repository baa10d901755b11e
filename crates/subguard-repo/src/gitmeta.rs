//! Git metadata reads via the system `git` binary.
//!
//! Like Cargo with `git-fetch-with-cli`, subguard shells out to the installed
//! git rather than embedding a git library, so submodule URLs and refs are
//! read with the user's own git configuration. All reads here are plumbing
//! queries; nothing mutates the repository.
//!
//! Failure split: a git invocation that cannot be spawned is fatal (the tool
//! cannot do its job without git); a git invocation that exits nonzero is
//! data (`None`) — an unresolvable ref or an unset config key is a normal
//! probe outcome, not an error.

use anyhow::Context;
use camino::Utf8Path;
use std::process::Command;
use subguard_types::RepoPath;

/// Run git in `dir`, returning trimmed stdout on success and `None` when git
/// exits nonzero.
fn git_stdout(dir: &Utf8Path, args: &[&str]) -> anyhow::Result<Option<String>> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .with_context(|| format!("spawn `git {}` in {dir}", args.join(" ")))?;

    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
    ))
}

/// Configured `origin` remote URL of the repository at `dir`.
pub fn origin_url(dir: &Utf8Path) -> anyhow::Result<Option<String>> {
    git_stdout(dir, &["config", "--get", "remote.origin.url"])
}

/// Commit hash currently checked out at `dir`. `None` when `dir` is not a
/// git repository or has no commits.
pub fn head_commit(dir: &Utf8Path) -> anyhow::Result<Option<String>> {
    git_stdout(dir, &["rev-parse", "HEAD"])
}

/// Resolve a ref (tag, branch, or commit-ish) to a commit hash inside the
/// repository at `dir`.
pub fn resolve_commit(dir: &Utf8Path, refname: &str) -> anyhow::Result<Option<String>> {
    let spec = format!("{refname}^{{commit}}");
    git_stdout(dir, &["rev-parse", "--verify", "--quiet", &spec])
}

/// Submodule paths declared in `.gitmodules` under `repo_root`.
///
/// Reads the file directly (`git config --file`) rather than requiring an
/// initialized superproject, which matches how submodule enumeration behaves
/// on a fresh clone.
pub fn submodule_paths(repo_root: &Utf8Path) -> anyhow::Result<Vec<RepoPath>> {
    if !repo_root.join(".gitmodules").is_file() {
        return Ok(Vec::new());
    }

    let listing = git_stdout(
        repo_root,
        &[
            "config",
            "--file",
            ".gitmodules",
            "--get-regexp",
            r"^submodule\..*\.path$",
        ],
    )?;

    // No matching keys exits nonzero; treat as no submodules.
    let Some(listing) = listing else {
        return Ok(Vec::new());
    };

    let mut paths: Vec<RepoPath> = listing
        .lines()
        .filter_map(|line| line.split_once(' '))
        .map(|(_key, value)| RepoPath::new(value.trim()))
        .collect();
    paths.sort();
    paths.dedup();
    Ok(paths)
}
