use crate::RepoPath;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: it maps cleanly to CI signals.
///
/// Only `Error` findings affect the exit code. `Warning` covers accepted but
/// suspicious states (e.g. a ref that only resolves after lowercasing);
/// `Info` carries context lines that must not change the error count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One validation outcome, accumulated across the whole run.
///
/// Validation never short-circuits: every check appends its findings and the
/// run surfaces all of them in a single pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    /// Console nesting level: 0 for manifest-level findings, 1 for findings
    /// inside a repository stanza.
    pub indent: u8,

    /// Repo-relative path the finding refers to, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<RepoPath>,
}

impl Finding {
    pub fn error(check_id: &str, code: &str, indent: u8, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, check_id, code, indent, message)
    }

    pub fn warning(check_id: &str, code: &str, indent: u8, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, check_id, code, indent, message)
    }

    pub fn info(check_id: &str, code: &str, indent: u8, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, check_id, code, indent, message)
    }

    fn new(
        severity: Severity,
        check_id: &str,
        code: &str,
        indent: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            check_id: check_id.to_string(),
            code: code.to_string(),
            message: message.into(),
            indent,
            path: None,
        }
    }

    pub fn with_path(mut self, path: RepoPath) -> Self {
        self.path = Some(path);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}
