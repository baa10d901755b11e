use crate::model::RepoModel;
use subguard_spdx::{check_expression, SpdxCatalog};
use subguard_types::{ids, Finding};

/// Required fields on every dependency stanza, plus its license expression.
pub fn run(model: &RepoModel, catalog: &SpdxCatalog, out: &mut Vec<Finding>) {
    for dep in &model.manifest.dependencies {
        let label = dep.label();

        if dep.name.is_none() {
            out.push(Finding::error(
                ids::CHECK_DEPENDENCY_FIELDS,
                ids::CODE_MISSING_NAME,
                0,
                format!("\"name\" field not found in dependency stanza ({label})"),
            ));
        }

        if dep.version.is_none() {
            out.push(Finding::error(
                ids::CHECK_DEPENDENCY_FIELDS,
                ids::CODE_MISSING_VERSION,
                0,
                format!("\"version\" field not found in dependency stanza ({label})"),
            ));
        }

        match dep.license.as_deref() {
            None => out.push(Finding::error(
                ids::CHECK_DEPENDENCY_FIELDS,
                ids::CODE_MISSING_LICENSE,
                0,
                format!("\"license\" field not found in dependency stanza ({label})"),
            )),
            Some(expr) => {
                check_expression(catalog, expr, 0, out);
            }
        }
    }
}
