//! SPDX catalog loading.
//!
//! The canonical license list lives in the spdx/license-list-data repository
//! as two JSON documents: `licenses.json` (`{"licenses": [{"licenseId": …}]}`)
//! and `exceptions.json` (`{"exceptions": [{"licenseExceptionId": …}]}`).
//! Fetching is fatal-on-failure for the whole run: without the catalog no
//! license can be validated. Decoding is factored out of the fetch so it is
//! testable without network access.

use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;

/// Base URL of the canonical SPDX license-list-data JSON documents.
pub const DEFAULT_SPDX_BASE_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json";

/// Request timeout for catalog fetches. CI should fail fast, not hang.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Membership sets of valid SPDX license and exception identifiers.
///
/// Caller-supplied ignore identifiers are merged into the license set only:
/// a pre-approved non-standard identifier is never valid as an exception.
#[derive(Clone, Debug, Default)]
pub struct SpdxCatalog {
    licenses: BTreeSet<String>,
    exceptions: BTreeSet<String>,
}

impl SpdxCatalog {
    pub fn new(
        licenses: impl IntoIterator<Item = String>,
        exceptions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            licenses: licenses.into_iter().collect(),
            exceptions: exceptions.into_iter().collect(),
        }
    }

    /// Merge pre-approved identifiers into the license set.
    pub fn merge_ignored<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.licenses.extend(ids.into_iter().map(Into::into));
    }

    pub fn is_license(&self, id: &str) -> bool {
        self.licenses.contains(id)
    }

    pub fn is_exception(&self, id: &str) -> bool {
        self.exceptions.contains(id)
    }

    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.licenses.iter().map(String::as_str)
    }

    pub fn exception_ids(&self) -> impl Iterator<Item = &str> {
        self.exceptions.iter().map(String::as_str)
    }
}

/// Catalog loading failures. Both variants abort the run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected payload from {url}: {detail}")]
    Format { url: String, detail: String },
}

/// Fetch the SPDX catalog and merge `ignore_ids` into the license set.
pub fn fetch_catalog(base_url: &str, ignore_ids: &[String]) -> Result<SpdxCatalog, CatalogError> {
    let base = base_url.trim_end_matches('/');
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|source| CatalogError::Network {
            url: base.to_string(),
            source,
        })?;

    let licenses_url = format!("{base}/licenses.json");
    let licenses_doc = fetch_json(&client, &licenses_url)?;
    let licenses = extract_ids(&licenses_doc, "licenses", "licenseId")
        .map_err(|detail| CatalogError::Format {
            url: licenses_url,
            detail,
        })?;

    let exceptions_url = format!("{base}/exceptions.json");
    let exceptions_doc = fetch_json(&client, &exceptions_url)?;
    let exceptions = extract_ids(&exceptions_doc, "exceptions", "licenseExceptionId").map_err(
        |detail| CatalogError::Format {
            url: exceptions_url,
            detail,
        },
    )?;

    let mut catalog = SpdxCatalog::new(licenses, exceptions);
    catalog.merge_ignored(ignore_ids.iter().cloned());
    Ok(catalog)
}

fn fetch_json(client: &reqwest::blocking::Client, url: &str) -> Result<Value, CatalogError> {
    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|source| CatalogError::Network {
            url: url.to_string(),
            source,
        })?;

    response.json().map_err(|e| CatalogError::Format {
        url: url.to_string(),
        detail: format!("body is not valid JSON: {e}"),
    })
}

/// Pull identifier strings out of `{key: [{id_field: "…"}, …]}`.
///
/// Records missing `id_field` are skipped; a missing or non-array `key` is a
/// format error.
fn extract_ids(doc: &Value, key: &str, id_field: &str) -> Result<BTreeSet<String>, String> {
    let records = doc
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("missing top-level `{key}` array"))?;

    Ok(records
        .iter()
        .filter_map(|r| r.get(id_field).and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}
