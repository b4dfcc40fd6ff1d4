// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: track parenthesis balance across the whole document.
//!
//! The scan keeps a stack of open-paren offsets rather than a bare counter,
//! so the "missing closing parenthesis" finding can point at the most
//! recently opened paren that was never closed. An unmatched `)` and a
//! leftover `(` are independent findings and can both fire in one pass.
//!
//! Balance is never judged before end of document: an open form is normal
//! while the author is still typing, and only whatever text currently exists
//! is assessed.

use crate::lint::{Document, LintPass};
use crate::source_analysis::{Diagnostic, Span};

/// Lint pass that reports unmatched parentheses.
pub(crate) struct ParenBalancePass;

impl LintPass for ParenBalancePass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut open_stack: Vec<usize> = Vec::new();
        let mut close_reported = false;

        for (i, byte) in doc.text().bytes().enumerate() {
            match byte {
                b'(' => open_stack.push(i),
                b')' => {
                    if open_stack.pop().is_none() && !close_reported {
                        diagnostics.push(Diagnostic::error(
                            "Unexpected closing parenthesis",
                            Span::from(i..i + 1),
                        ));
                        close_reported = true;
                    }
                }
                _ => {}
            }
        }

        if let Some(&last_open) = open_stack.last() {
            diagnostics.push(Diagnostic::error(
                "Missing closing parenthesis",
                Span::from(last_open..last_open + 1),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::lint_source;
    use crate::source_analysis::{Diagnostic, Severity, Span};

    fn paren_findings(source: &str) -> Vec<Diagnostic> {
        lint_source(source)
            .into_iter()
            .filter(|d| d.message.contains("parenthesis"))
            .collect()
    }

    #[test]
    fn balanced_nesting_is_clean() {
        assert!(paren_findings("(foo (bar))").is_empty());
        assert!(paren_findings("((()) (()))").is_empty());
        assert!(paren_findings("").is_empty());
        assert!(paren_findings("no parens at all").is_empty());
    }

    #[test]
    fn one_unmatched_open_reports_the_innermost_open_entry() {
        // The inner `(bar)` closes cleanly, so the unclosed paren on the
        // stack at end of document is the outer one at offset 0.
        let diags = paren_findings("(foo (bar)");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Missing closing parenthesis");
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].span, Span::new(0, 1));
    }

    #[test]
    fn one_unmatched_close_reports_the_offending_offset() {
        let diags = paren_findings("(foo))");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unexpected closing parenthesis");
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].span, Span::new(5, 6));
    }

    #[test]
    fn multiple_unclosed_opens_report_the_most_recent() {
        let diags = paren_findings("((");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(1, 2));
    }

    #[test]
    fn only_the_first_unmatched_close_is_reported() {
        let diags = paren_findings("))");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(0, 1));
    }

    #[test]
    fn unmatched_close_and_leftover_open_both_fire() {
        let diags = paren_findings(") (");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "Unexpected closing parenthesis");
        assert_eq!(diags[0].span, Span::new(0, 1));
        assert_eq!(diags[1].message, "Missing closing parenthesis");
        assert_eq!(diags[1].span, Span::new(2, 3));
    }

    #[test]
    fn mid_edit_open_form_reports_at_current_text_only() {
        // An author mid-keystroke: judgment applies to the text as it exists.
        let diags = paren_findings("(define-public (go)");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(0, 1));
    }
}
