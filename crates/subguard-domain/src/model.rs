use std::collections::BTreeMap;
use subguard_types::RepoPath;

/// Everything the checks need, collected up front so evaluation does no IO.
#[derive(Clone, Debug, Default)]
pub struct RepoModel {
    pub manifest: ManifestModel,

    /// Probed submodule state, keyed by the declared repository path.
    pub probes: BTreeMap<RepoPath, SubmoduleProbe>,

    /// Submodule paths physically present under the repository root
    /// (from `.gitmodules`, minus caller-ignored paths).
    pub on_disk_submodules: Vec<RepoPath>,
}

/// The manifest root. Every required field deserializes as `Option` so a
/// missing field becomes one finding instead of a parse failure.
#[derive(Clone, Debug, Default)]
pub struct ManifestModel {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub dependencies: Vec<DependencyDecl>,
}

#[derive(Clone, Debug, Default)]
pub struct DependencyDecl {
    pub name: Option<String>,
    /// A git ref: tag, branch, or commit-ish.
    pub version: Option<String>,
    /// An SPDX license expression.
    pub license: Option<String>,
    pub repository: Option<RepositoryDecl>,
}

impl DependencyDecl {
    /// Best label for console messages about this dependency.
    pub fn label(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            return name;
        }
        if let Some(path) = self.repository.as_ref().and_then(|r| r.path.as_ref()) {
            return path.as_str();
        }
        "unknown"
    }
}

#[derive(Clone, Debug, Default)]
pub struct RepositoryDecl {
    /// The `type` field; must be the literal `"git"`.
    pub kind: Option<String>,
    pub url: Option<String>,
    /// Filesystem path relative to the manifest directory. Presence triggers
    /// submodule reconciliation against that location.
    pub path: Option<RepoPath>,
}

/// On-disk state for one declared repository path.
#[derive(Clone, Debug)]
pub struct SubmoduleProbe {
    pub path: RepoPath,
    pub outcome: ProbeOutcome,
}

#[derive(Clone, Debug)]
pub enum ProbeOutcome {
    /// The declared path does not exist; submodule checks are skipped.
    PathMissing,
    /// The path exists but git cannot resolve a HEAD commit there.
    NotARepository,
    Repository(SubmoduleState),
}

#[derive(Clone, Debug)]
pub struct SubmoduleState {
    /// Configured `origin` remote URL, if any.
    pub remote_url: Option<String>,
    /// Commit hash currently checked out.
    pub head_commit: String,
    /// Outcome of resolving the manifest-declared version inside the
    /// submodule.
    pub resolved: ResolvedRef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedRef {
    /// The declared ref resolved as written.
    Exact(String),
    /// Only the lowercased ref resolved. Accepted with a warning.
    Lowercased(String),
    /// No resolution succeeded.
    Unknown,
}
