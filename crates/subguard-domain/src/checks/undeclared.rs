use crate::model::RepoModel;
use std::collections::BTreeSet;
use subguard_types::{ids, Finding, RepoPath};

/// Every on-disk submodule must be declared under some dependency's
/// repository stanza.
///
/// The reverse direction (declared path without a real submodule) is covered
/// by the path-existence check in the repository reconciliation and is not
/// re-checked here.
pub fn run(model: &RepoModel, out: &mut Vec<Finding>) {
    let declared: BTreeSet<&RepoPath> = model
        .manifest
        .dependencies
        .iter()
        .filter_map(|d| d.repository.as_ref())
        .filter_map(|r| r.path.as_ref())
        .collect();

    for submodule in &model.on_disk_submodules {
        if !declared.contains(submodule) {
            out.push(
                Finding::error(
                    ids::CHECK_SUBMODULES_DECLARED,
                    ids::CODE_UNDECLARED_SUBMODULE,
                    0,
                    format!("git submodule {submodule} was not found in the manifest"),
                )
                .with_path(submodule.clone()),
            );
        }
    }
}
