use crate::checks;
use crate::model::RepoModel;
use crate::report::{DomainReport, SeverityCounts};
use subguard_spdx::SpdxCatalog;
use subguard_types::{Finding, Severity, Verdict};

/// Run every check over the model and fold the findings into a report.
///
/// Findings keep traversal order (root fields, then dependencies, then the
/// undeclared-submodule sweep) so the tab-indented console narrative reads
/// top-down like the manifest itself.
pub fn evaluate(model: &RepoModel, catalog: &SpdxCatalog) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, catalog, &mut findings);

    let counts = SeverityCounts::from_findings(&findings);
    let verdict = compute_verdict(&findings);

    DomainReport {
        verdict,
        findings,
        counts,
    }
}

fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        return Verdict::Warn;
    }
    Verdict::Pass
}
