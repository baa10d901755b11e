use crate::model::{ProbeOutcome, RepoModel, ResolvedRef};
use subguard_types::{ids, Finding};

/// Reconcile each declared repository stanza against the probed submodule.
///
/// Stanza-shape problems (`type`, `url`) are reported regardless of the
/// path. Submodule-level checks only run when the declared path exists; a
/// missing path is its own error and ends the stanza's validation, matching
/// the one-error-per-cause accounting.
pub fn run(model: &RepoModel, out: &mut Vec<Finding>) {
    for dep in &model.manifest.dependencies {
        let Some(repo) = dep.repository.as_ref() else {
            continue;
        };
        let label = dep.label();

        match repo.kind.as_deref() {
            None => out.push(Finding::error(
                ids::CHECK_REPOSITORY_SYNC,
                ids::CODE_TYPE_MISSING,
                1,
                format!("\"type\" field not found in repository ({label})"),
            )),
            Some(kind) if kind != "git" => out.push(Finding::error(
                ids::CHECK_REPOSITORY_SYNC,
                ids::CODE_TYPE_NOT_GIT,
                1,
                format!("\"type\" field is not set to \"git\" in repository ({label})"),
            )),
            Some(_) => {}
        }

        if repo.url.is_none() {
            out.push(Finding::error(
                ids::CHECK_REPOSITORY_SYNC,
                ids::CODE_URL_MISSING,
                1,
                format!("\"url\" field not found in repository ({label})"),
            ));
        }

        let Some(path) = repo.path.as_ref() else {
            continue;
        };
        let Some(probe) = model.probes.get(path) else {
            continue;
        };

        let state = match &probe.outcome {
            ProbeOutcome::PathMissing => {
                out.push(
                    Finding::error(
                        ids::CHECK_REPOSITORY_SYNC,
                        ids::CODE_PATH_NOT_FOUND,
                        1,
                        format!("relative path does not exist: {path}"),
                    )
                    .with_path(path.clone()),
                );
                continue;
            }
            ProbeOutcome::NotARepository => {
                out.push(
                    Finding::error(
                        ids::CHECK_REPOSITORY_SYNC,
                        ids::CODE_NOT_A_GIT_REPOSITORY,
                        1,
                        format!("path {path} is not a git repository with a HEAD commit"),
                    )
                    .with_path(path.clone()),
                );
                continue;
            }
            ProbeOutcome::Repository(state) => state,
        };

        match (state.remote_url.as_deref(), repo.url.as_deref()) {
            (None, _) => out.push(
                Finding::error(
                    ids::CHECK_REPOSITORY_SYNC,
                    ids::CODE_NO_ORIGIN_REMOTE,
                    1,
                    format!("submodule {path} has no configured origin remote"),
                )
                .with_path(path.clone()),
            ),
            // URLs are case-insensitive.
            (Some(actual), Some(declared)) if !actual.eq_ignore_ascii_case(declared) => out.push(
                Finding::error(
                    ids::CHECK_REPOSITORY_SYNC,
                    ids::CODE_URL_MISMATCH,
                    1,
                    format!(
                        "repository url mismatch between manifest and submodule {path}: \
                         manifest {declared}, submodule {actual}"
                    ),
                )
                .with_path(path.clone()),
            ),
            _ => {}
        }

        let declared_version = dep.version.as_deref().unwrap_or("unknown");
        let manifest_hash = match &state.resolved {
            ResolvedRef::Exact(hash) => hash.clone(),
            ResolvedRef::Lowercased(hash) => {
                out.push(
                    Finding::warning(
                        ids::CHECK_REPOSITORY_SYNC,
                        ids::CODE_LOWERCASE_REF_FALLBACK,
                        1,
                        format!(
                            "manifest version {declared_version} is only a valid ref in \
                             submodule {path} when converted to lowercase"
                        ),
                    )
                    .with_path(path.clone()),
                );
                hash.clone()
            }
            ResolvedRef::Unknown => {
                // Context line only; the guaranteed revision mismatch below
                // carries the counted error.
                out.push(
                    Finding::info(
                        ids::CHECK_REPOSITORY_SYNC,
                        ids::CODE_UNRESOLVED_VERSION,
                        1,
                        format!(
                            "manifest version {declared_version} is not a valid tag, branch, \
                             or commit in submodule {path}"
                        ),
                    )
                    .with_path(path.clone()),
                );
                "unknown".to_string()
            }
        };

        if manifest_hash != state.head_commit {
            out.push(
                Finding::error(
                    ids::CHECK_REPOSITORY_SYNC,
                    ids::CODE_REVISION_MISMATCH,
                    1,
                    format!(
                        "revision mismatch between submodule {path} and manifest version \
                         {declared_version}: manifest {manifest_hash}, submodule HEAD {}",
                        state.head_commit
                    ),
                )
                .with_path(path.clone()),
            );
        }
    }
}
