use anyhow::Context;
use serde::Deserialize;
use subguard_domain::model::{DependencyDecl, ManifestModel, RepositoryDecl};
use subguard_types::RepoPath;

/// Raw manifest shape as it appears on disk. Every field is optional so that
/// required-field checks produce findings instead of parse failures; only a
/// document that is not valid YAML (or not a mapping) fails here.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    license: Option<String>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    name: Option<String>,
    version: Option<String>,
    license: Option<String>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    #[serde(rename = "type")]
    kind: Option<String>,
    url: Option<String>,
    path: Option<String>,
}

/// Parse manifest text into the domain model. Structural YAML failures are
/// fatal and carry context; missing fields are left for the checks.
pub fn parse_manifest(text: &str) -> anyhow::Result<ManifestModel> {
    let raw: RawManifest = serde_yaml::from_str(text).context("parse manifest YAML")?;

    Ok(ManifestModel {
        name: raw.name,
        version: raw.version,
        description: raw.description,
        license: raw.license,
        dependencies: raw.dependencies.into_iter().map(convert_dependency).collect(),
    })
}

fn convert_dependency(raw: RawDependency) -> DependencyDecl {
    DependencyDecl {
        name: raw.name,
        version: raw.version,
        license: raw.license,
        repository: raw.repository.map(|r| RepositoryDecl {
            kind: r.kind,
            url: r.url,
            path: r.path.map(RepoPath::new),
        }),
    }
}
