//! Repository adapters: read the YAML manifest and probe git submodule state.
//!
//! This crate is allowed to do filesystem IO and spawn `git`. It collects
//! everything the checks need into a [`RepoModel`] so the domain crate stays
//! pure.

#![forbid(unsafe_code)]

mod gitmeta;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use std::collections::{BTreeMap, BTreeSet};
use subguard_domain::model::{
    ProbeOutcome, RepoModel, ResolvedRef, SubmoduleProbe, SubmoduleState,
};
use subguard_types::RepoPath;

pub use parse::parse_manifest;

/// Build the in-memory repo model used by the evaluation engine.
///
/// `manifest_path` names the manifest file; its parent directory is the
/// repository root that declared submodule paths are resolved against.
/// `ignored_paths` are excluded from the on-disk submodule enumeration.
///
/// Fatal here: unreadable manifest, YAML structural failure, unspawnable git.
/// Everything else (missing paths, unresolvable refs, absent remotes) is
/// recorded in the model for the checks to judge.
pub fn build_repo_model(
    manifest_path: &Utf8Path,
    ignored_paths: &[RepoPath],
) -> anyhow::Result<RepoModel> {
    let text = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("read manifest {manifest_path}"))?;
    let manifest =
        parse::parse_manifest(&text).with_context(|| format!("parse manifest {manifest_path}"))?;

    let manifest_dir = match manifest_path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };

    let mut probes: BTreeMap<RepoPath, SubmoduleProbe> = BTreeMap::new();
    for dep in &manifest.dependencies {
        let Some(path) = dep.repository.as_ref().and_then(|r| r.path.as_ref()) else {
            continue;
        };
        if probes.contains_key(path) {
            continue;
        }

        let submodule_dir = manifest_dir.join(path.as_str());
        let outcome = if submodule_dir.exists() {
            probe_submodule(&submodule_dir, dep.version.as_deref())?
        } else {
            ProbeOutcome::PathMissing
        };
        probes.insert(
            path.clone(),
            SubmoduleProbe {
                path: path.clone(),
                outcome,
            },
        );
    }

    let ignored: BTreeSet<&RepoPath> = ignored_paths.iter().collect();
    let on_disk_submodules = gitmeta::submodule_paths(manifest_dir)?
        .into_iter()
        .filter(|p| !ignored.contains(p))
        .collect();

    Ok(RepoModel {
        manifest,
        probes,
        on_disk_submodules,
    })
}

fn probe_submodule(dir: &Utf8Path, declared_version: Option<&str>) -> anyhow::Result<ProbeOutcome> {
    let Some(head_commit) = gitmeta::head_commit(dir)? else {
        return Ok(ProbeOutcome::NotARepository);
    };
    let remote_url = gitmeta::origin_url(dir)?;
    let resolved = resolve_declared_version(dir, declared_version)?;

    Ok(ProbeOutcome::Repository(SubmoduleState {
        remote_url,
        head_commit,
        resolved,
    }))
}

/// Resolve the manifest-declared version to a commit, retrying the lowercased
/// ref when the literal one fails (some release tags drift in casing).
fn resolve_declared_version(
    dir: &Utf8Path,
    declared_version: Option<&str>,
) -> anyhow::Result<ResolvedRef> {
    let Some(version) = declared_version else {
        return Ok(ResolvedRef::Unknown);
    };

    if let Some(hash) = gitmeta::resolve_commit(dir, version)? {
        return Ok(ResolvedRef::Exact(hash));
    }

    let lowered = version.to_lowercase();
    if lowered != version
        && let Some(hash) = gitmeta::resolve_commit(dir, &lowered)?
    {
        return Ok(ResolvedRef::Lowercased(hash));
    }

    Ok(ResolvedRef::Unknown)
}
