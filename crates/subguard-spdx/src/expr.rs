//! License expression validation.
//!
//! An SPDX expression combines license identifiers with `AND`/`OR`, optional
//! `WITH <exception>` suffixes, and parenthesized grouping, e.g.
//! `(MIT OR Apache-2.0) AND GPL-2.0-only WITH Classpath-exception-2.0`.
//!
//! This is a membership checker, not a grammar checker: every identifier
//! token must exist in the catalog, but structural problems (unbalanced
//! parens, dangling operators) are accepted as-is. An empty expression
//! trivially passes.

use crate::catalog::SpdxCatalog;
use subguard_types::{ids, Finding};

/// Validate `expr` against `catalog`, appending one error finding per unknown
/// identifier. Returns the number of errors appended.
///
/// Tokens are whitespace-separated. A paren-depth counter tracks grouping:
/// a token opening a paren raises the depth before dispatch, a token closing
/// one lowers it afterwards (so `(MIT)` nets zero). `WITH` arms an exception
/// flag for the following token; the flag stays armed while the current depth
/// exceeds the previous token's depth, which keeps a parenthesized exception
/// group applying until it closes.
pub fn check_expression(
    catalog: &SpdxCatalog,
    expr: &str,
    indent: u8,
    out: &mut Vec<Finding>,
) -> usize {
    let mut errors = 0;
    let mut depth: i32 = 0;
    let mut last_depth: i32 = 0;
    let mut in_exception = false;

    for token in expr.split_whitespace() {
        if token.starts_with('(') {
            depth += 1;
        }

        if token.eq_ignore_ascii_case("and") || token.eq_ignore_ascii_case("or") {
            // Structural keywords are not identifiers.
        } else if token.eq_ignore_ascii_case("with") {
            // The next token is a license exception.
            in_exception = true;
        } else if in_exception {
            let id = strip_parens(token);
            if !catalog.is_exception(id) {
                out.push(Finding::error(
                    ids::CHECK_LICENSE_EXPRESSION,
                    ids::CODE_INVALID_EXCEPTION_ID,
                    indent,
                    format!("invalid license exception id {token} in SPDX expression {expr}"),
                ));
                errors += 1;
            }
            if depth <= last_depth {
                in_exception = false;
            }
        } else {
            let id = strip_parens(token);
            if !catalog.is_license(id) {
                out.push(Finding::error(
                    ids::CHECK_LICENSE_EXPRESSION,
                    ids::CODE_INVALID_LICENSE_ID,
                    indent,
                    format!("invalid license id {token} in SPDX expression {expr}"),
                ));
                errors += 1;
            }
        }

        last_depth = depth;
        if token.ends_with(')') {
            depth -= 1;
        }
    }

    errors
}

fn strip_parens(token: &str) -> &str {
    token.trim_matches(|c| c == '(' || c == ')')
}
