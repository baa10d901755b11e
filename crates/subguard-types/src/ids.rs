//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_MANIFEST_ROOT_FIELDS: &str = "manifest.root_fields";
pub const CHECK_DEPENDENCY_FIELDS: &str = "manifest.dependency_fields";
pub const CHECK_LICENSE_EXPRESSION: &str = "license.spdx_expression";
pub const CHECK_REPOSITORY_SYNC: &str = "repository.submodule_sync";
pub const CHECK_SUBMODULES_DECLARED: &str = "submodules.declared";

// Codes: manifest.root_fields
pub const CODE_MISSING_NAME: &str = "missing_name";
pub const CODE_MISSING_VERSION: &str = "missing_version";
pub const CODE_MISSING_DESCRIPTION: &str = "missing_description";
pub const CODE_MISSING_LICENSE: &str = "missing_license";

// Codes: license.spdx_expression
pub const CODE_INVALID_LICENSE_ID: &str = "invalid_license_id";
pub const CODE_INVALID_EXCEPTION_ID: &str = "invalid_exception_id";

// Codes: repository.submodule_sync
pub const CODE_TYPE_MISSING: &str = "type_missing";
pub const CODE_TYPE_NOT_GIT: &str = "type_not_git";
pub const CODE_URL_MISSING: &str = "url_missing";
pub const CODE_PATH_NOT_FOUND: &str = "path_not_found";
pub const CODE_NOT_A_GIT_REPOSITORY: &str = "not_a_git_repository";
pub const CODE_NO_ORIGIN_REMOTE: &str = "no_origin_remote";
pub const CODE_URL_MISMATCH: &str = "url_mismatch";
pub const CODE_UNRESOLVED_VERSION: &str = "unresolved_version";
pub const CODE_LOWERCASE_REF_FALLBACK: &str = "lowercase_ref_fallback";
pub const CODE_REVISION_MISMATCH: &str = "revision_mismatch";

// Codes: submodules.declared
pub const CODE_UNDECLARED_SUBMODULE: &str = "undeclared_submodule";
