use crate::model::RepoModel;
use subguard_spdx::SpdxCatalog;
use subguard_types::Finding;

mod dependency_fields;
mod repository;
mod root_fields;
mod undeclared;


pub fn run_all(model: &RepoModel, catalog: &SpdxCatalog, out: &mut Vec<Finding>) {
    root_fields::run(model, catalog, out);
    dependency_fields::run(model, catalog, out);
    repository::run(model, out);
    undeclared::run(model, out);
}
