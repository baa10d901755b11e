//! Console rendering: human-readable lines, not a machine format.
//!
//! Errors render red, warnings cyan, informational context plain; each line
//! is tab-indented by the finding's nesting level.

use colored::Colorize;
use subguard_domain::report::DomainReport;
use subguard_types::Severity;

pub fn print_report(report: &DomainReport) {
    for finding in &report.findings {
        match finding.severity {
            Severity::Error => print_error(finding.indent, &finding.message),
            Severity::Warning => print_warning(finding.indent, &finding.message),
            Severity::Info => print_note(finding.indent, &finding.message),
        }
    }
}

pub fn print_error(indent: u8, message: &str) {
    println!("{}", format!("{}ERROR: {message}", tabs(indent)).red());
}

/// Fatal/structural failures go to stderr; no validation report exists yet.
pub fn eprint_fatal(message: &str) {
    eprintln!("{}", format!("ERROR: {message}").red());
}

pub fn print_warning(indent: u8, message: &str) {
    println!("{}", format!("{}WARN:  {message}", tabs(indent)).cyan());
}

fn print_note(indent: u8, message: &str) {
    println!("{}NOTE:  {message}", tabs(indent));
}

fn tabs(indent: u8) -> String {
    "\t".repeat(indent as usize)
}
