//! Property-based tests for the expression checker.

use crate::catalog::SpdxCatalog;
use crate::expr::check_expression;
use proptest::prelude::*;

const LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "GPL-2.0-only",
    "GPL-3.0-or-later",
    "MPL-2.0",
    "ISC",
];

const EXCEPTIONS: &[&str] = &["Classpath-exception-2.0", "LLVM-exception", "GCC-exception-3.1"];

fn catalog() -> SpdxCatalog {
    SpdxCatalog::new(
        LICENSES.iter().map(|s| s.to_string()),
        EXCEPTIONS.iter().map(|s| s.to_string()),
    )
}

/// A single term: a known license, optionally with a known exception.
fn arb_term() -> impl Strategy<Value = String> {
    let license = prop::sample::select(LICENSES.to_vec());
    let exception = prop::option::of(prop::sample::select(EXCEPTIONS.to_vec()));
    (license, exception).prop_map(|(l, e)| match e {
        Some(e) => format!("{l} WITH {e}"),
        None => l.to_string(),
    })
}

/// Flat expressions: terms joined by AND/OR, optionally wrapped in parens as
/// a whole. Nested grouping is deliberately out of scope (open edge case).
fn arb_expression() -> impl Strategy<Value = String> {
    let op = prop::sample::select(vec!["AND", "OR", "and", "or"]);
    (
        arb_term(),
        prop::collection::vec((op, arb_term()), 0..4),
        any::<bool>(),
    )
        .prop_map(|(first, rest, wrap)| {
            let mut expr = first;
            for (op, term) in rest {
                expr.push(' ');
                expr.push_str(op);
                expr.push(' ');
                expr.push_str(&term);
            }
            if wrap { format!("({expr})") } else { expr }
        })
}

proptest! {
    #[test]
    fn expressions_over_known_identifiers_never_error(expr in arb_expression()) {
        let mut out = Vec::new();
        let errors = check_expression(&catalog(), &expr, 0, &mut out);
        prop_assert_eq!(errors, 0, "expression: {}", expr);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn error_count_matches_appended_findings(
        tokens in prop::collection::vec("[A-Za-z0-9.-]{1,12}", 1..6)
    ) {
        let expr = tokens.join(" ");
        let mut out = Vec::new();
        let errors = check_expression(&catalog(), &expr, 0, &mut out);
        prop_assert_eq!(errors, out.len());
    }
}
