// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag contracts that define nothing.
//!
//! A Clarity contract with no `(define-` form has no entry points, no data,
//! and no constants — almost certainly a work in progress rather than a
//! deployable contract.

use crate::lint::{Document, LintPass};
use crate::source_analysis::Diagnostic;

/// Lint pass that warns when a document contains no definition form.
pub(crate) struct MissingDefinitionPass;

impl LintPass for MissingDefinitionPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        if !doc.text().contains("(define-") {
            diagnostics.push(Diagnostic::warning(
                "Contract should include at least one definition",
                doc.full_span(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::lint_source;
    use crate::source_analysis::{Diagnostic, Severity, Span};

    fn missing_definition(source: &str) -> Vec<Diagnostic> {
        lint_source(source)
            .into_iter()
            .filter(|d| d.message.contains("at least one definition"))
            .collect()
    }

    #[test]
    fn contract_with_definition_is_clean() {
        assert!(missing_definition("(define-constant owner tx-sender)").is_empty());
        assert!(missing_definition("(define-public (go) (ok true))").is_empty());
    }

    #[test]
    fn contract_without_definition_warns_over_whole_document() {
        let diags = missing_definition("(print \"hello\")");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].span, Span::new(0, 15));
    }

    #[test]
    fn empty_document_warns() {
        assert_eq!(missing_definition("").len(), 1);
    }
}
