use crate::model::RepoModel;
use subguard_spdx::{check_expression, SpdxCatalog};
use subguard_types::{ids, Finding};

/// Required fields at the manifest root, plus the root license expression.
pub fn run(model: &RepoModel, catalog: &SpdxCatalog, out: &mut Vec<Finding>) {
    let manifest = &model.manifest;

    if manifest.name.is_none() {
        out.push(Finding::error(
            ids::CHECK_MANIFEST_ROOT_FIELDS,
            ids::CODE_MISSING_NAME,
            0,
            "\"name\" field not found in manifest root",
        ));
    }

    if manifest.version.is_none() {
        out.push(Finding::error(
            ids::CHECK_MANIFEST_ROOT_FIELDS,
            ids::CODE_MISSING_VERSION,
            0,
            "\"version\" field not found in manifest root",
        ));
    }

    if manifest.description.is_none() {
        out.push(Finding::error(
            ids::CHECK_MANIFEST_ROOT_FIELDS,
            ids::CODE_MISSING_DESCRIPTION,
            0,
            "\"description\" field not found in manifest root",
        ));
    }

    match manifest.license.as_deref() {
        None => out.push(Finding::error(
            ids::CHECK_MANIFEST_ROOT_FIELDS,
            ids::CODE_MISSING_LICENSE,
            0,
            "\"license\" field not found in manifest root",
        )),
        Some(expr) => {
            check_expression(catalog, expr, 0, out);
        }
    }
}
