// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag map reads whose `none` case is not visibly handled.
//!
//! `map-get?` returns an optional. The check is line-local: a read is
//! considered handled when the same line carries any of the unwrap/try/match
//! forms. This errs toward false positives — a read handled on a later line
//! still warns — because a silent miss is the costlier mistake.

use crate::lint::{Document, LintPass};
use crate::source_analysis::{Diagnostic, Span};

const MAP_READ: &str = "map-get?";
const HANDLER_FORMS: [&str; 3] = ["unwrap", "try", "match"];

/// Lint pass that warns on per-line unhandled map reads.
pub(crate) struct UncheckedMapAccessPass;

impl LintPass for UncheckedMapAccessPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (line_span, line) in doc.lines() {
            let Some(read_at) = line.find(MAP_READ) else {
                continue;
            };
            if HANDLER_FORMS.iter().any(|form| line.contains(form)) {
                continue;
            }
            let start = line_span.start() as usize + read_at;
            diagnostics.push(Diagnostic::warning(
                "Map access should handle none case",
                Span::from(start..start + MAP_READ.len()),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::lint_source;
    use crate::source_analysis::{Diagnostic, Severity, Span};

    fn map_findings(source: &str) -> Vec<Diagnostic> {
        lint_source(source)
            .into_iter()
            .filter(|d| d.message.contains("none case"))
            .collect()
    }

    #[test]
    fn bare_map_read_warns_at_the_read() {
        let diags = map_findings("(map-get? balances tx-sender)");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].span, Span::new(1, 9));
    }

    #[test]
    fn map_read_wrapped_in_unwrap_is_clean() {
        assert!(
            map_findings("(unwrap! (map-get? balances tx-sender) (err u404))").is_empty()
        );
    }

    #[test]
    fn map_read_wrapped_in_try_or_match_is_clean() {
        assert!(map_findings("(try! (map-get? balances tx-sender))").is_empty());
        assert!(
            map_findings("(match (map-get? balances tx-sender) v (ok v) (err u404))")
                .is_empty()
        );
    }

    #[test]
    fn handling_on_another_line_still_warns() {
        let source = "(let ((entry (map-get? balances tx-sender)))\n  (unwrap! entry (err u404)))";
        // Line-local heuristic: line one has the read, line two the handler.
        assert_eq!(map_findings(source).len(), 1);
    }

    #[test]
    fn one_warning_per_offending_line() {
        let source = "(map-get? a k)\n(map-get? b k)";
        let diags = map_findings(source);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].span.start(), 1);
        assert_eq!(diags[1].span.start(), 16);
    }

    #[test]
    fn lines_without_map_reads_are_clean() {
        assert!(map_findings("(var-get counter)").is_empty());
    }
}
